use crate::pordego::{
    password,
    store::{CustomerStore, Insert},
    validate::{validate_email, validate_password},
};
use anyhow::Result;

/// Outcome of a sign-up attempt. Both the console flow and the HTTP handler
/// consume this, keeping one copy of the validation semantics.
#[derive(Debug, PartialEq, Eq)]
pub enum SignUp {
    Created,
    Rejected(&'static str),
    Duplicate,
}

/// Validate, hash and insert a new credential.
pub async fn sign_up(store: &CustomerStore, email: &str, new_password: &str) -> Result<SignUp> {
    let (email_ok, email_reason) = validate_email(email);
    if !email_ok {
        return Ok(SignUp::Rejected(email_reason));
    }

    let (password_ok, password_reason) = validate_password(new_password);
    if !password_ok {
        return Ok(SignUp::Rejected(password_reason));
    }

    let phc = password::hash(new_password)?;

    match store.insert(email, &phc).await? {
        Insert::Created => Ok(SignUp::Created),
        Insert::Duplicate => Ok(SignUp::Duplicate),
    }
}

/// Check submitted credentials against the store. Returns `false` for an
/// unknown email and for a wrong password alike, the caller reports both as
/// the same invalid-credentials failure.
pub async fn sign_in(store: &CustomerStore, email: &str, submitted_password: &str) -> Result<bool> {
    // a syntactically invalid email cannot have been registered
    let (email_ok, _) = validate_email(email);
    if !email_ok {
        return Ok(false);
    }

    match store.find_password_hash(email).await? {
        Some(phc) => Ok(password::verify(submitted_password, &phc)),
        None => Ok(false),
    }
}
