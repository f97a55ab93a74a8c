//! # Auth Operations

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use souq_core::validation::{validate_password, validate_username};

use crate::error::ApiError;
use crate::state::SharedShop;
use crate::view::SessionView;

/// Credentials as posted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Credentials as posted by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Exact-match login.
///
/// Failure is uniform by design: the message never says whether the
/// username exists.
pub fn login(shop: &SharedShop, input: LoginInput) -> Result<SessionView, ApiError> {
    debug!(username = %input.username, "login operation");

    let username = validate_username(&input.username).map_err(souq_core::ShopError::from)?;
    validate_password(&input.password).map_err(souq_core::ShopError::from)?;

    shop.with_shop(|shop| {
        let identity = shop.directory.authenticate(&username, &input.password)?;
        info!(username = %identity.username, role = ?identity.role, "login succeeded");
        Ok(SessionView {
            username: identity.username.clone(),
            role: identity.role,
        })
    })
    .map_err(|err: souq_core::ShopError| {
        warn!(username = %username, "login rejected");
        err.into()
    })
}

/// Creates a Customer identity with an empty cart.
pub fn register(shop: &SharedShop, input: RegisterInput) -> Result<SessionView, ApiError> {
    debug!(username = %input.username, "register operation");

    let username = validate_username(&input.username).map_err(souq_core::ShopError::from)?;
    validate_password(&input.password).map_err(souq_core::ShopError::from)?;

    shop.with_shop_mut(|shop| {
        let identity = shop.directory.register(&username, &input.password)?;
        info!(username = %identity.username, "registered new customer");
        Ok(SessionView {
            username: identity.username.clone(),
            role: identity.role,
        })
    })
    .map_err(|err: souq_core::ShopError| {
        warn!(username = %username, error = %err, "register rejected");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use souq_core::{Role, ShopStore};

    fn shop() -> SharedShop {
        SharedShop::new(ShopStore::seeded())
    }

    fn creds(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_seeded_admin() {
        let shop = shop();
        let session = login(&shop, creds("admin", "123")).unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn test_login_failures_are_uniform() {
        let shop = shop();
        let unknown = login(&shop, creds("ghost", "123")).unwrap_err();
        let wrong = login(&shop, creds("admin", "nope")).unwrap_err();
        assert_eq!(unknown.code, ErrorCode::InvalidCredentials);
        assert_eq!(unknown.message, wrong.message);
    }

    #[test]
    fn test_register_then_login() {
        let shop = shop();
        let session = register(
            &shop,
            RegisterInput {
                username: "ali".to_string(),
                password: "pw".to_string(),
            },
        )
        .unwrap();
        assert_eq!(session.role, Role::Customer);

        assert!(login(&shop, creds("ali", "pw")).is_ok());
    }

    #[test]
    fn test_register_duplicate_username() {
        let shop = shop();
        let err = register(
            &shop,
            RegisterInput {
                username: "admin".to_string(),
                password: "other".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateUsername);

        // Existing credential unchanged.
        assert!(login(&shop, creds("admin", "123")).is_ok());
    }

    #[test]
    fn test_blank_input_rejected_before_core() {
        let shop = shop();
        let err = login(&shop, creds("   ", "123")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = register(&shop, RegisterInput {
            username: "ali".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
