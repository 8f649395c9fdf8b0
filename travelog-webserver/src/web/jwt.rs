use anyhow::{anyhow, bail, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};

use crate::core::entities::{AdminId, UserId};

/// The authenticated party a token was issued for.
///
/// Users and admins are separate identity domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User(UserId),
    Admin(AdminId),
}

impl Principal {
    const fn role(self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Admin(_) => "admin",
        }
    }

    const fn id(self) -> i64 {
        match self {
            Self::User(id) => id.value(),
            Self::Admin(id) => id.value(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The id of the principal
    sub: String,
    role: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

impl TryFrom<Claims> for Principal {
    type Error = anyhow::Error;
    fn try_from(claims: Claims) -> Result<Self> {
        let id: i64 = claims.sub.parse()?;
        let principal = match claims.role.as_str() {
            "user" => Self::User(id.into()),
            "admin" => Self::Admin(id.into()),
            role => bail!("Unknown role '{role}'"),
        };
        Ok(principal)
    }
}

/// generate a Rocket-compatible secret (Rocket expects a
/// 256-bit base64 encoded string)
fn generate_random_secret() -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(rand::random::<[u8; 32]>())
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

pub struct JwtState {
    key: Key,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    /// Without a configured secret all tokens become
    /// invalid when the server restarts.
    pub fn new(secret: Option<&str>, time_valid: Duration) -> Self {
        let key = match secret {
            Some(secret) => Key::new(secret),
            None => Key::new(&generate_random_secret()),
        };
        Self {
            key,
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, principal: Principal) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: principal.id().to_string(),
            role: principal.role().to_owned(),
            exp,
        };
        Ok(encode(&Header::default(), &claims, &self.key.encoding_key)?)
    }

    pub fn validate_token(&self, token: &str) -> Result<Principal> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        self.decode(token)?.try_into()
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        blacklist.retain(|token| self.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}
