use regex::Regex;

/// Email pattern: `[alnum]+@[alnum]+.[alnum]+`, searched anywhere in the
/// string. The `.` is deliberately left unescaped and matches any single
/// character, and the pattern is unanchored, so a string merely containing a
/// valid-looking substring passes.
const VALID_EMAIL_PATTERN: &str = "[a-zA-Z0-9]+@[a-zA-Z0-9]+.[a-zA-Z0-9]+";

/// Returns `(valid, reason)`, reason is empty when valid.
pub fn validate_email(email: &str) -> (bool, &'static str) {
    let found = Regex::new(VALID_EMAIL_PATTERN).map_or(false, |re| re.is_match(email));

    if found {
        (true, "")
    } else {
        (false, "Invalid email format")
    }
}

/// Returns `(valid, reason)` with the first failing check's reason. Checks run
/// in a fixed order: length, digit, lowercase, uppercase.
pub fn validate_password(password: &str) -> (bool, &'static str) {
    if password.chars().count() < 8 {
        (false, "Password needs a minimum length of 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        (false, "Password needs at least one number")
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        (false, "Password needs at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        (false, "Password needs at least one uppercase letter")
    } else {
        (true, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let (valid, reason) = validate_email("alice@example.com");
        assert!(valid);
        assert_eq!(reason, "");
    }

    #[test]
    fn test_email_dot_matches_any_character() {
        // the unescaped "." in the pattern is a wildcard
        assert!(validate_email("alice@example!com").0);
        assert!(validate_email("alice@exampleXcom").0);
    }

    #[test]
    fn test_email_substring_match() {
        // unanchored search: surrounding garbage does not fail the check
        assert!(validate_email(">>>alice@example.com<<<").0);
        assert!(validate_email("alice@@example.com").0);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["plainaddress", "@example.com", "alice@", "alice@.com", ""] {
            let (valid, reason) = validate_email(email);
            assert!(!valid, "{email} should be invalid");
            assert_eq!(reason, "Invalid email format");
        }
    }

    #[test]
    fn test_password_too_short() {
        // length is checked first, regardless of content
        for password in ["", "aB1", "Abc123!"] {
            let (valid, reason) = validate_password(password);
            assert!(!valid);
            assert_eq!(reason, "Password needs a minimum length of 8 characters");
        }
    }

    #[test]
    fn test_password_needs_number() {
        let (valid, reason) = validate_password("Password");
        assert!(!valid);
        assert_eq!(reason, "Password needs at least one number");
    }

    #[test]
    fn test_password_needs_lowercase() {
        let (valid, reason) = validate_password("PASSW0RD");
        assert!(!valid);
        assert_eq!(reason, "Password needs at least one lowercase letter");
    }

    #[test]
    fn test_password_needs_uppercase() {
        let (valid, reason) = validate_password("passw0rd");
        assert!(!valid);
        assert_eq!(reason, "Password needs at least one uppercase letter");
    }

    #[test]
    fn test_valid_password() {
        for password in ["Passw0rd", "aB3defgh", "xY9xY9xY9xY9"] {
            let (valid, reason) = validate_password(password);
            assert!(valid, "{password} should be valid");
            assert_eq!(reason, "");
        }
    }
}
