//! ==============================================================================
//! preview.rs - image preview conversion
//! ==============================================================================
//!
//! purpose:
//!     turns a selected file into a data-url string the form can use as an
//!     inline <img> source. this is the app's only async operation: a
//!     single-shot FileReader read that resolves exactly once.
//!
//! ==============================================================================

use gloo_file::futures::read_as_data_url;

/// the browser failed to read the selected file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not read the selected file: {0}")]
pub struct ReadError(String);

/// read a file into a data-url string for inline display
///
/// the result is display-only; callers keep the raw handle for validation
/// and submission.
pub async fn file_to_data_url(file: &web_sys::File) -> Result<String, ReadError> {
    let file = gloo_file::File::from(file.clone());
    read_as_data_url(&file)
        .await
        .map_err(|e| ReadError(e.to_string()))
}
