use std::sync::Arc;

use parking_lot::RwLock;
use travelog_boundary::{Admin, AdminSession, User, UserSession};

use crate::{keys, LocalStore, Result};

#[derive(Debug, Clone, Default, PartialEq)]
struct Session {
    token: Option<String>,
    profile: Option<User>,
    is_logged_in: bool,
}

/// Session state shared by the client components.
///
/// Every change is written through to the [`LocalStore`] so that
/// [`AppState::init`] can pick it up again after a restart.
pub struct AppState {
    store: Arc<dyn LocalStore>,
    session: RwLock<Session>,
}

impl AppState {
    pub fn init(store: Arc<dyn LocalStore>) -> Result<Self> {
        let token = store.get::<String>(keys::TOKEN)?.filter(|t| !t.is_empty());
        let profile = store.get::<User>(keys::USER_PROFILE)?;
        let is_logged_in =
            store.get::<bool>(keys::IS_LOGGED_IN)?.unwrap_or_default() && token.is_some();
        let session = Session {
            token,
            profile,
            is_logged_in,
        };
        Ok(Self {
            store,
            session: RwLock::new(session),
        })
    }

    pub fn store(&self) -> Arc<dyn LocalStore> {
        Arc::clone(&self.store)
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token.clone()
    }

    pub fn profile(&self) -> Option<User> {
        self.session.read().profile.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in
    }

    pub fn start_session(&self, session: UserSession) -> Result<()> {
        let UserSession { token, user } = session;
        self.store.set(keys::TOKEN, &token)?;
        self.store.set(keys::USER_PROFILE, &user)?;
        self.store.set(keys::IS_LOGGED_IN, &true)?;
        info!("Started session of user {}", user.user_id);
        *self.session.write() = Session {
            token: Some(token),
            profile: Some(user),
            is_logged_in: true,
        };
        Ok(())
    }

    pub fn update_profile(&self, user: User) -> Result<()> {
        self.store.set(keys::USER_PROFILE, &user)?;
        self.session.write().profile = Some(user);
        Ok(())
    }

    /// Forgets the user together with everything cached on their behalf.
    pub fn end_session(&self) -> Result<()> {
        for key in [
            keys::TOKEN,
            keys::USER_PROFILE,
            keys::IS_LOGGED_IN,
            keys::LIKED_TRAVELOGUES,
            keys::MESSAGES,
        ] {
            self.store.remove(key)?;
        }
        *self.session.write() = Session::default();
        Ok(())
    }

    pub fn start_admin_session(&self, session: AdminSession) -> Result<()> {
        self.store.set(keys::ADMIN_TOKEN, &session.token)?;
        self.store.set(keys::ADMIN_PROFILE, &session.admin)?;
        Ok(())
    }

    pub fn admin(&self) -> Result<Option<Admin>> {
        self.store.get(keys::ADMIN_PROFILE)
    }

    pub fn end_admin_session(&self) -> Result<()> {
        self.store.remove(keys::ADMIN_TOKEN)?;
        self.store.remove(keys::ADMIN_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn user() -> User {
        User {
            user_id: 5,
            account: "mia".into(),
            nickname: "Mia".into(),
            avatar: None,
            bio: None,
            gender: 2,
            region: None,
            birthday: None,
            created_at: 0,
        }
    }

    #[test]
    fn session_is_restored_from_storage() {
        let store: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        let state = AppState::init(Arc::clone(&store)).unwrap();
        assert!(!state.is_logged_in());
        state
            .start_session(UserSession {
                token: "t0k3n".into(),
                user: user(),
            })
            .unwrap();

        let restored = AppState::init(store).unwrap();
        assert!(restored.is_logged_in());
        assert_eq!(restored.token().as_deref(), Some("t0k3n"));
        assert_eq!(restored.profile().unwrap().nickname, "Mia");
    }

    #[test]
    fn ending_a_session_clears_cached_user_data() {
        let store: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        let state = AppState::init(Arc::clone(&store)).unwrap();
        state
            .start_session(UserSession {
                token: "t0k3n".into(),
                user: user(),
            })
            .unwrap();
        store.set(keys::LIKED_TRAVELOGUES, &vec![1, 2]).unwrap();
        store.set(keys::MESSAGES, &Vec::<u8>::new()).unwrap();
        store.set(keys::SEARCH_HISTORY, &vec!["Oslo"]).unwrap();

        state.end_session().unwrap();

        assert!(!state.is_logged_in());
        assert_eq!(state.token(), None);
        for key in [keys::TOKEN, keys::LIKED_TRAVELOGUES, keys::MESSAGES] {
            assert_eq!(store.load(key).unwrap(), None);
        }
        assert!(store.load(keys::SEARCH_HISTORY).unwrap().is_some());
    }

    #[test]
    fn logged_in_flag_without_token_is_ignored() {
        let store: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        store.set(keys::IS_LOGGED_IN, &true).unwrap();
        let state = AppState::init(store).unwrap();
        assert!(!state.is_logged_in());
    }
}
