use validator::ValidationError;

const MIN_LENGTH: usize = 8;

/// Registration password policy: length plus character classes.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_LENGTH {
        let mut error = ValidationError::new("password_length");
        error.message = Some(format!("Must be at least {} characters", MIN_LENGTH).into());
        return Err(error);
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_upper && has_lower && has_digit) {
        let mut error = ValidationError::new("password_complexity");
        error.message = Some("Must include uppercase, lowercase, and a digit".into());
        return Err(error);
    }

    Ok(())
}
