//! Error type for password conversion.
//!
//! Uses [`thiserror`] for the `Display`/`Error` derivation.

use thiserror::Error;

/// The password cannot be converted to PDFDocEncoding.
///
/// Covers every rejection reason — malformed or truncated UTF-8, and code
/// points outside the set the active [`PasswordMode`](crate::PasswordMode)
/// accepts. The causes are deliberately not distinguished: the caller's only
/// recourse is to ask for a different password, so one signal is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("password cannot be represented in PDFDocEncoding")]
pub struct PasswordError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(
            PasswordError.to_string(),
            "password cannot be represented in PDFDocEncoding"
        );
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PasswordError);
        assert!(err.to_string().contains("PDFDocEncoding"));
    }

    #[test]
    fn copy_and_eq() {
        let err = PasswordError;
        let copy = err;
        assert_eq!(err, copy);
    }
}
