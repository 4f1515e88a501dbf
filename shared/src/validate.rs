//! Local input validation.
//!
//! Everything here runs before a request is issued; a rejected input
//! never reaches the network. The backend may or may not re-validate
//! these constraints, so they are treated as a client-side contract.

use std::fmt;

/// Upload size ceiling: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted image file extensions, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "bmp", "tiff"];

/// Longest accepted display name.
pub const MAX_FULL_NAME_CHARS: usize = 100;

/// Why a locally staged input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// File extension outside the accepted set.
    UnsupportedType(String),
    /// File exceeds [`MAX_UPLOAD_BYTES`].
    TooLarge(u64),
    /// More than one file offered at once.
    TooManyFiles(usize),
    /// No file offered at all.
    NoFile,
    /// Display name exceeds [`MAX_FULL_NAME_CHARS`].
    NameTooLong(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnsupportedType(name) => write!(
                f,
                "Unsupported file type: {}. Accepted: JPEG, PNG, BMP, TIFF",
                name
            ),
            ValidationError::TooLarge(size) => write!(
                f,
                "File is {:.2} MB; the limit is {} MB",
                *size as f64 / (1024.0 * 1024.0),
                MAX_UPLOAD_BYTES / (1024 * 1024)
            ),
            ValidationError::TooManyFiles(n) => {
                write!(f, "Select a single image ({} files offered)", n)
            }
            ValidationError::NoFile => write!(f, "No file selected"),
            ValidationError::NameTooLong(n) => write!(
                f,
                "Full name is {} characters; the limit is {}",
                n, MAX_FULL_NAME_CHARS
            ),
        }
    }
}

fn extension(filename: &str) -> Option<String> {
    filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Validate a staged upload before any request is sent.
pub fn validate_upload(filename: &str, size: u64) -> Result<(), ValidationError> {
    match extension(filename) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(ValidationError::UnsupportedType(filename.to_string())),
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge(size));
    }
    Ok(())
}

/// Exactly one file per upload.
pub fn validate_file_count(count: usize) -> Result<(), ValidationError> {
    match count {
        0 => Err(ValidationError::NoFile),
        1 => Ok(()),
        n => Err(ValidationError::TooManyFiles(n)),
    }
}

/// Validate the profile editor's display name field.
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.chars().count();
    if chars > MAX_FULL_NAME_CHARS {
        return Err(ValidationError::NameTooLong(chars));
    }
    Ok(())
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_two_megabyte_jpeg_passes() {
        assert_eq!(validate_upload("scan.jpg", 2 * 1024 * 1024), Ok(()));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert_eq!(validate_upload("SCAN.TIFF", 1024), Ok(()));
        assert_eq!(validate_upload("photo.Png", 1024), Ok(()));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let size = MAX_UPLOAD_BYTES + 1;
        assert_eq!(
            validate_upload("scan.png", size),
            Err(ValidationError::TooLarge(size))
        );
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        assert_eq!(validate_upload("scan.png", MAX_UPLOAD_BYTES), Ok(()));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        assert!(matches!(
            validate_upload("report.pdf", 1024),
            Err(ValidationError::UnsupportedType(_))
        ));
        assert!(matches!(
            validate_upload("no_extension", 1024),
            Err(ValidationError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_exactly_one_file_required() {
        assert_eq!(validate_file_count(1), Ok(()));
        assert_eq!(validate_file_count(0), Err(ValidationError::NoFile));
        assert_eq!(
            validate_file_count(3),
            Err(ValidationError::TooManyFiles(3))
        );
    }

    #[test]
    fn test_full_name_length_limit() {
        assert_eq!(validate_full_name("Ada Lovelace"), Ok(()));
        let long = "x".repeat(MAX_FULL_NAME_CHARS + 1);
        assert_eq!(
            validate_full_name(&long),
            Err(ValidationError::NameTooLong(MAX_FULL_NAME_CHARS + 1))
        );
    }

    #[test]
    fn test_error_messages_are_user_presentable() {
        let msg = ValidationError::TooLarge(12 * 1024 * 1024).to_string();
        assert!(msg.contains("12.00 MB"));
        assert!(msg.contains("10 MB"));
    }
}
