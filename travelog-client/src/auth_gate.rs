use std::{marker::PhantomData, sync::Arc};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{keys, ClientError, LocalStore, Result};

/// Characters left alone by `encodeURIComponent`.
const RETURN_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A kind of logged in party as seen by the front end.
pub trait Principal {
    const TOKEN_KEY: &'static str;
    const PROFILE_KEY: &'static str;
    const LOGIN_ROUTE: &'static str;
    const PROTECTED_PREFIXES: &'static [&'static str];
}

#[derive(Debug, Clone, Copy)]
pub struct EndUser;

impl Principal for EndUser {
    const TOKEN_KEY: &'static str = keys::TOKEN;
    const PROFILE_KEY: &'static str = keys::USER_PROFILE;
    const LOGIN_ROUTE: &'static str = "/pages/login/login";
    const PROTECTED_PREFIXES: &'static [&'static str] = &[
        "/pages/personal/personal",
        "/pages/editInfo/editInfo",
        "/pages/edit/edit",
        "/pages/messages/messages",
    ];
}

#[derive(Debug, Clone, Copy)]
pub struct Administrator;

impl Principal for Administrator {
    const TOKEN_KEY: &'static str = keys::ADMIN_TOKEN;
    const PROFILE_KEY: &'static str = keys::ADMIN_PROFILE;
    const LOGIN_ROUTE: &'static str = "/pages/adminLogin/adminLogin";
    const PROTECTED_PREFIXES: &'static [&'static str] = &["/pages/admin/"];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect { login_url: String },
}

pub struct AuthGate<P> {
    store: Arc<dyn LocalStore>,
    principal: PhantomData<P>,
}

impl<P> Clone for AuthGate<P> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            principal: PhantomData,
        }
    }
}

impl<P: Principal> AuthGate<P> {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            store,
            principal: PhantomData,
        }
    }

    /// The stored token, ignoring storage errors.
    pub fn token(&self) -> Option<String> {
        match self.store.get::<String>(P::TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                warn!("Unable to read {}: {err}", P::TOKEN_KEY);
                None
            }
        }
    }

    pub fn is_protected(path: &str) -> bool {
        let path = path.split('?').next().unwrap_or_default();
        P::PROTECTED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }

    pub fn login_url(return_path: &str) -> String {
        format!(
            "{}?returnUrl={}",
            P::LOGIN_ROUTE,
            utf8_percent_encode(return_path, RETURN_URL)
        )
    }

    pub fn check(&self, path: &str) -> Access {
        if !Self::is_protected(path) || self.token().is_some() {
            return Access::Granted;
        }
        debug!("Redirecting {path} to login");
        Access::Redirect {
            login_url: Self::login_url(path),
        }
    }

    /// Returns the token or fails with a redirect back to `current_path`.
    pub fn require(&self, current_path: &str) -> Result<String> {
        self.token().ok_or_else(|| ClientError::AuthRequired {
            login_url: Self::login_url(current_path),
        })
    }
}
