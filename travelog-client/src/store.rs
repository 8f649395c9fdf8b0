use std::{collections::HashMap, io, path::Path};

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::Result;

/// Keys of the persisted client state.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_PROFILE: &str = "userProfile";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const LIKED_TRAVELOGUES: &str = "likedTravelogues";
    pub const SEARCH_HISTORY: &str = "searchHistory";
    pub const MESSAGES: &str = "messages";
    pub const ADMIN_TOKEN: &str = "adminToken";
    pub const ADMIN_PROFILE: &str = "adminProfile";
}

/// Key-value storage that survives restarts of the front end.
///
/// Values are plain JSON without any schema version.
pub trait LocalStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>>;
    fn save(&self, key: &str, value: Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl dyn LocalStore {
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.load(key)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.save(key, serde_json::to_value(value)?)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore(Mutex<HashMap<String, Value>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.0.lock().get(key).cloned())
    }
    fn save(&self, key: &str, value: Value) -> Result<()> {
        self.0.lock().insert(key.to_string(), value);
        Ok(())
    }
    fn remove(&self, key: &str) -> Result<()> {
        self.0.lock().remove(key);
        Ok(())
    }
}

/// All keys are kept in a single JSON file.
pub struct FileStore(Mutex<jfs::Store>);

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cfg = jfs::Config {
            single: true,
            pretty: true,
            ..Default::default()
        };
        let store = jfs::Store::new_with_cfg(path, cfg)?;
        Ok(Self(Mutex::new(store)))
    }
}

impl LocalStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        match self.0.lock().get::<Value>(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
    fn save(&self, key: &str, value: Value) -> Result<()> {
        self.0.lock().save_with_id(&value, key)?;
        Ok(())
    }
    fn remove(&self, key: &str) -> Result<()> {
        match self.0.lock().delete(key) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
