use secrecy::SecretString;

/// Database credentials, constructed once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub db_username: String,
    pub db_password: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(username: String, password: SecretString) -> Self {
        Self {
            db_username: username,
            db_password: password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new("customer_api".to_string(), SecretString::from("hunter2".to_string()));
        assert_eq!(args.db_username, "customer_api");
        assert_eq!(args.db_password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_global_args_debug_hides_password() {
        let args = GlobalArgs::new("customer_api".to_string(), SecretString::from("hunter2".to_string()));
        let debug = format!("{args:?}");
        assert!(!debug.contains("hunter2"));
    }
}
