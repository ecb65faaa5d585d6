//! Field validation engine.
//!
//! Each field has its own validator: an ordered list of predicate checks that
//! returns the first failing kind. `validate` runs them all independently and
//! is a pure function of the values, so callers may re-run it on every
//! mutation and always get the same answer for the same input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{FieldError, FileMeta, FormValues, Gender, ValidationErrors};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_IMAGE_BYTES: u64 = 250 * 1024;
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&#";

/// content types accepted for the optional image upload
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/bmp", "image/png", "application/pdf"];

// html5 email address grammar
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// validate the whole form
///
/// fields are checked independently; a failure in one never masks another.
pub fn validate(values: &FormValues) -> ValidationErrors {
    ValidationErrors {
        username: validate_username(&values.username).err(),
        email: validate_email(&values.email).err(),
        password: validate_password(&values.password).err(),
        gender: validate_gender(&values.gender).err(),
        image: validate_image(values.image.as_ref()).err(),
    }
}

pub fn validate_username(username: &str) -> Result<(), FieldError> {
    if username.is_empty() {
        return Err(FieldError::EmptyField);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::TooShort);
    }
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if !(has_lowercase && has_uppercase && has_digit && has_symbol) {
        return Err(FieldError::WeakPassword);
    }
    Ok(())
}

pub fn validate_gender(gender: &str) -> Result<(), FieldError> {
    // blank and unknown values fail the same way: nothing was selected
    if Gender::parse(gender).is_none() {
        return Err(FieldError::EmptyField);
    }
    Ok(())
}

/// the image is optional; absence always passes
pub fn validate_image(image: Option<&FileMeta>) -> Result<(), FieldError> {
    let Some(meta) = image else {
        return Ok(());
    };
    if !ACCEPTED_IMAGE_TYPES.contains(&meta.content_type.as_str()) {
        return Err(FieldError::UnsupportedType);
    }
    if meta.size > MAX_IMAGE_BYTES {
        return Err(FieldError::TooLarge);
    }
    Ok(())
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            username: "quinn".to_string(),
            email: "quinn@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            gender: "Other".to_string(),
            image: None,
        }
    }

    fn png_meta(size: u64) -> FileMeta {
        FileMeta {
            name: "avatar.png".to_string(),
            content_type: "image/png".to_string(),
            size,
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_values());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut values = valid_values();
        values.email = "not-an-email".to_string();
        values.password = "abc".to_string();
        assert_eq!(validate(&values), validate(&values));
    }

    #[test]
    fn test_empty_form_fails_every_text_field() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.username, Some(FieldError::EmptyField));
        assert_eq!(errors.email, Some(FieldError::EmptyField));
        assert_eq!(errors.password, Some(FieldError::EmptyField));
        assert_eq!(errors.gender, Some(FieldError::EmptyField));
        // no file selected is valid
        assert_eq!(errors.image, None);
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("abc"), Err(FieldError::TooShort));
        assert_eq!(validate_password("abcdefgh"), Err(FieldError::WeakPassword));
        assert_eq!(validate_password("ABCDEFG1!"), Err(FieldError::WeakPassword));
        assert_eq!(validate_password("Abcdefg1"), Err(FieldError::WeakPassword));
        assert_eq!(validate_password("Abcdef1!"), Ok(()));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("not-an-email"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@b"), Ok(()));
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("a b@c.com"), Err(FieldError::InvalidFormat));
    }

    #[test]
    fn test_gender_rules() {
        assert_eq!(validate_gender("Alien"), Err(FieldError::EmptyField));
        assert_eq!(validate_gender(""), Err(FieldError::EmptyField));
        assert_eq!(validate_gender("Other"), Ok(()));
    }

    #[test]
    fn test_image_rules() {
        let gif = FileMeta {
            name: "anim.gif".to_string(),
            content_type: "image/gif".to_string(),
            size: 10 * 1024,
        };
        assert_eq!(validate_image(Some(&gif)), Err(FieldError::UnsupportedType));
        assert_eq!(validate_image(Some(&png_meta(100 * 1024))), Ok(()));
        assert_eq!(
            validate_image(Some(&png_meta(300 * 1024))),
            Err(FieldError::TooLarge)
        );
        // exactly at the limit still passes
        assert_eq!(validate_image(Some(&png_meta(MAX_IMAGE_BYTES))), Ok(()));
        assert_eq!(validate_image(None), Ok(()));
    }

    #[test]
    fn test_unsupported_type_reported_before_size() {
        let huge_gif = FileMeta {
            name: "anim.gif".to_string(),
            content_type: "image/gif".to_string(),
            size: 300 * 1024,
        };
        assert_eq!(
            validate_image(Some(&huge_gif)),
            Err(FieldError::UnsupportedType)
        );
    }

    #[test]
    fn test_image_failure_does_not_block_other_fields() {
        let mut values = valid_values();
        values.image = Some(png_meta(300 * 1024));
        let errors = validate(&values);
        assert_eq!(errors.image, Some(FieldError::TooLarge));
        assert_eq!(errors.username, None);
        assert_eq!(errors.email, None);
    }
}
