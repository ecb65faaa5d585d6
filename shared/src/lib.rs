//! ==============================================================================
//! lib.rs - shared types for the sign-up form
//! ==============================================================================
//!
//! purpose:
//!     defines the form data model used by the sign-up app: field values,
//!     touched-state tracking, the field error taxonomy, and the per-field
//!     validation results. keeping these in their own crate means the whole
//!     model compiles and tests on the host, with no browser types in sight.
//!
//! relationships:
//!     - used by: signup (form controller, submission sink)
//!     - validation engine lives in the validation module of this crate
//!
//! design rationale:
//!     the validation engine only ever sees declared file metadata (FileMeta),
//!     never a live file handle. the app keeps the raw handle separately and
//!     mirrors its metadata into FormValues, so validity stays a pure function
//!     of the values alone.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::validate;

// ==============================================================================
// field values
// ==============================================================================

/// current contents of the sign-up form
///
/// `gender` holds the raw select value and stays empty until the user picks
/// an option; `image` holds the declared metadata of the selected file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub image: Option<FileMeta>,
}

/// declared metadata of a selected file
///
/// the content type and size are what the browser reports for the selection,
/// not what the bytes actually contain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

/// the three selectable genders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// option list for the select, in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// parse a raw select value; anything outside the option list is None
    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// touched state
// ==============================================================================

/// tracks which fields the user has interacted with
///
/// gates error-message visibility only; validity is computed from FormValues
/// regardless of what is touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedState {
    pub username: bool,
    pub email: bool,
    pub password: bool,
    pub gender: bool,
    pub image: bool,
}

impl TouchedState {
    /// every field touched, applied when a submit attempt is made
    pub fn all() -> Self {
        Self {
            username: true,
            email: true,
            password: true,
            gender: true,
            image: true,
        }
    }
}

// ==============================================================================
// validation results
// ==============================================================================

/// per-field validation failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    EmptyField,
    #[error("Enter a valid email address")]
    InvalidFormat,
    #[error("Password should be at least 8 characters")]
    TooShort,
    #[error("Password requires at least one lowercase letter, one uppercase letter, one digit and one special character")]
    WeakPassword,
    #[error("Only .jpeg, .jpg, .bmp, .png and .pdf files are accepted")]
    UnsupportedType,
    #[error("The file is too large")]
    TooLarge,
}

/// validation outcome for the whole form, one slot per field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub username: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub gender: Option<FieldError>,
    pub image: Option<FieldError>,
}

impl ValidationErrors {
    /// true when every field passed, i.e. the form is submittable
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.gender.is_none()
            && self.image.is_none()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("Alien"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_gender_serializes_to_display_name() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"Female\"");
    }

    #[test]
    fn test_file_meta_serialization() {
        let meta = FileMeta {
            name: "avatar.png".to_string(),
            content_type: "image/png".to_string(),
            size: 1024,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"content_type\":\"image/png\""));
        assert!(json.contains("\"size\":1024"));
    }

    #[test]
    fn test_touched_state_defaults_untouched() {
        let touched = TouchedState::default();
        assert!(!touched.username);
        assert!(!touched.image);

        let touched = TouchedState::all();
        assert!(touched.username && touched.email && touched.password);
        assert!(touched.gender && touched.image);
    }

    #[test]
    fn test_empty_errors_is_submittable() {
        assert!(ValidationErrors::default().is_empty());

        let errors = ValidationErrors {
            password: Some(FieldError::TooShort),
            ..Default::default()
        };
        assert!(!errors.is_empty());
    }
}
