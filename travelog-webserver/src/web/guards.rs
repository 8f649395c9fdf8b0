use core::ops::Deref;

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{gateways::notify::NotificationGateway, prelude::*},
    web::jwt::{self, Principal},
};
use travelog_core::usecases::Error as ParameterError;

pub const ADMIN_ID_HEADER: &str = "X-Admin-Id";

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Authentication of a request.
///
/// Never fails on its own: handlers ask for the principal
/// they require and get `Unauthorized` if there is none.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    principal: Option<Principal>,
    admin_id_header: Option<String>,
}

impl Auth {
    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    pub fn user(&self) -> Result<UserId> {
        match self.principal {
            Some(Principal::User(id)) => Ok(id),
            Some(Principal::Admin(_)) => Err(ParameterError::Forbidden.into()),
            None => Err(ParameterError::Unauthorized.into()),
        }
    }

    /// The `X-Admin-Id` header is optional, but if present it
    /// has to match the authenticated admin.
    pub fn admin(&self) -> Result<AdminId> {
        let id = match self.principal {
            Some(Principal::Admin(id)) => id,
            Some(Principal::User(_)) => return Err(ParameterError::Forbidden.into()),
            None => return Err(ParameterError::Unauthorized.into()),
        };
        if let Some(header) = &self.admin_id_header {
            if header.parse::<AdminId>().ok() != Some(id) {
                debug!("Admin {id} sent a mismatching {ADMIN_ID_HEADER} header: {header}");
                return Err(ParameterError::Forbidden.into());
            }
        }
        Ok(id)
    }

    /// The user on whose behalf content is viewed, if any.
    pub fn viewer(&self) -> Option<UserId> {
        match self.principal {
            Some(Principal::User(id)) => Some(id),
            _ => None,
        }
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn principal_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<Principal> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let principal = Self::principal_from_jwt_in_header(request, &bearer_tokens).await;
        let admin_id_header = request
            .headers()
            .get_one(ADMIN_ID_HEADER)
            .map(ToOwned::to_owned);
        let auth = Self {
            bearer_tokens,
            principal,
            admin_id_header,
        };
        Outcome::Success(auth)
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(principal: Option<Principal>, admin_id_header: Option<&str>) -> Auth {
        Auth {
            bearer_tokens: vec![],
            principal,
            admin_id_header: admin_id_header.map(Into::into),
        }
    }

    fn is_forbidden(res: Result<impl std::fmt::Debug>) -> bool {
        matches!(
            res,
            Err(AppError::Business(BError::Parameter(ParameterError::Forbidden)))
        )
    }

    fn is_unauthorized(res: Result<impl std::fmt::Debug>) -> bool {
        matches!(
            res,
            Err(AppError::Business(BError::Parameter(ParameterError::Unauthorized)))
        )
    }

    #[test]
    fn bearer_token() {
        assert_eq!(get_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(get_bearer_token("Basic abc"), None);
        assert_eq!(get_bearer_token("Bearer"), None);
    }

    #[test]
    fn principals_do_not_mix() {
        let user = auth(Some(Principal::User(UserId::new(1))), None);
        assert_eq!(user.user().unwrap(), UserId::new(1));
        assert!(is_forbidden(user.admin()));
        let admin = auth(Some(Principal::Admin(AdminId::new(1))), None);
        assert_eq!(admin.admin().unwrap(), AdminId::new(1));
        assert!(is_forbidden(admin.user()));
        assert_eq!(admin.viewer(), None);
        let anonymous = auth(None, None);
        assert!(is_unauthorized(anonymous.user()));
        assert!(is_unauthorized(anonymous.admin()));
    }

    #[test]
    fn admin_id_header_must_match() {
        let admin = Some(Principal::Admin(AdminId::new(3)));
        assert!(auth(admin, Some("3")).admin().is_ok());
        assert!(is_forbidden(auth(admin, Some("4")).admin()));
        assert!(is_forbidden(auth(admin, Some("root")).admin()));
    }
}
