//! Input Validation
//!
//! Ordered field-presence checks for the registration and login
//! payloads. The order is contractual: checks run in a fixed sequence
//! and stop at the first failure, so callers always see the error for
//! the earliest missing field. Validation has no side effects — in
//! particular, no hashing happens before every check has passed.

use std::sync::Arc;

use crate::application::catalog::MessageCatalog;
use crate::application::login::LoginInput;
use crate::application::register::RegisterInput;
use crate::error::AuthError;

/// Field-presence validator with catalog-defined messages.
#[derive(Clone)]
pub struct Validator {
    catalog: Arc<MessageCatalog>,
}

impl Validator {
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Registration checks, in order: payload present, name non-empty,
    /// email non-empty, password non-empty.
    ///
    /// The typed transport can't hand the use case a missing payload,
    /// but the condition stays part of the contract, hence the
    /// `Option`-taking signature.
    pub fn registration(&self, input: Option<&RegisterInput>) -> Result<(), AuthError> {
        let required = &self.catalog.user.required;

        let Some(input) = input else {
            return Err(AuthError::Validation(required.payload.clone()));
        };

        if input.name.trim().is_empty() {
            return Err(AuthError::Validation(required.name.clone()));
        }

        if input.email.trim().is_empty() {
            return Err(AuthError::Validation(required.email.clone()));
        }

        if input.password.is_empty() {
            return Err(AuthError::Validation(required.password.clone()));
        }

        Ok(())
    }

    /// Login checks, in order: payload present, email non-empty,
    /// password non-empty.
    pub fn login(&self, input: Option<&LoginInput>) -> Result<(), AuthError> {
        let required = &self.catalog.user.required;

        let Some(input) = input else {
            return Err(AuthError::Validation(required.payload.clone()));
        };

        if input.email.trim().is_empty() {
            return Err(AuthError::Validation(required.email.clone()));
        }

        if input.password.is_empty() {
            return Err(AuthError::Validation(required.password.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new(Arc::new(MessageCatalog::default()))
    }

    fn valid_registration() -> RegisterInput {
        RegisterInput {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn message(err: AuthError) -> String {
        match err {
            AuthError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_payload_is_the_first_check() {
        let catalog = MessageCatalog::default();
        let err = validator().registration(None).unwrap_err();
        assert_eq!(message(err), catalog.user.required.payload);

        let err = validator().login(None).unwrap_err();
        assert_eq!(message(err), catalog.user.required.payload);
    }

    #[test]
    fn registration_checks_run_in_order() {
        let catalog = MessageCatalog::default();

        // Everything missing: the name error wins.
        let input = RegisterInput {
            name: String::new(),
            email: String::new(),
            password: String::new(),
        };
        let err = validator().registration(Some(&input)).unwrap_err();
        assert_eq!(message(err), catalog.user.required.name);

        // Name present: the email error is next.
        let input = RegisterInput {
            name: "Ana".to_string(),
            email: String::new(),
            password: String::new(),
        };
        let err = validator().registration(Some(&input)).unwrap_err();
        assert_eq!(message(err), catalog.user.required.email);

        // Name and email present: the password error is last.
        let input = RegisterInput {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        let err = validator().registration(Some(&input)).unwrap_err();
        assert_eq!(message(err), catalog.user.required.password);
    }

    #[test]
    fn login_checks_run_in_order() {
        let catalog = MessageCatalog::default();

        let input = LoginInput {
            email: String::new(),
            password: String::new(),
        };
        let err = validator().login(Some(&input)).unwrap_err();
        assert_eq!(message(err), catalog.user.required.email);

        let input = LoginInput {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        let err = validator().login(Some(&input)).unwrap_err();
        assert_eq!(message(err), catalog.user.required.password);
    }

    #[test]
    fn whitespace_only_name_or_email_counts_as_missing() {
        let catalog = MessageCatalog::default();
        let input = RegisterInput {
            name: "  ".to_string(),
            ..valid_registration()
        };
        let err = validator().registration(Some(&input)).unwrap_err();
        assert_eq!(message(err), catalog.user.required.name);
    }

    #[test]
    fn valid_payloads_pass() {
        assert!(
            validator()
                .registration(Some(&valid_registration()))
                .is_ok()
        );
        let login = LoginInput {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validator().login(Some(&login)).is_ok());
    }
}
