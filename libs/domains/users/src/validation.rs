//! Input rules shared by create and update.
//!
//! Checks run in a fixed order: name emptiness, email emptiness, email
//! format. Email syntax is the `validator` crate's grammar (WHATWG
//! local part, hostname or bracketed IP-literal domain, RFC length caps)
//! applied to the trimmed input. Display-name forms such as
//! `Bob <bob@x.com>` are rejected. Dot placement in the local part is not
//! checked (`.bob@x.com`, `a..b@x.com` pass) and a dotless domain such as
//! `a@b` is accepted.

use validator::ValidateEmail;

use crate::error::{UserError, UserResult};

pub const NAME_EMPTY: &str = "name cannot be empty";
pub const EMAIL_EMPTY: &str = "email cannot be empty";
pub const EMAIL_INVALID: &str = "invalid email format";

pub fn validate_name(name: &str) -> UserResult<()> {
    if name.trim().is_empty() {
        return Err(UserError::invalid_argument("name", NAME_EMPTY));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> UserResult<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(UserError::invalid_argument("email", EMAIL_EMPTY));
    }

    if !trimmed.validate_email() {
        return Err(UserError::invalid_argument("email", EMAIL_INVALID));
    }

    Ok(())
}

pub fn validate_user_input(name: &str, email: &str) -> UserResult<()> {
    validate_name(name)?;
    validate_email(email)
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
