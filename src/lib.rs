//! pdfdoc-password: UTF-8 to PDFDocEncoding conversion for legacy PDF
//! security passwords.
//!
//! Passwords for PDF standard security revision 4 and earlier are stored in
//! PDFDocEncoding, a single-byte modified ISO 8859-1. This crate converts a
//! UTF-8 password into that encoding, reproducing the character acceptance
//! behavior observed in Acrobat/Reader 7 on Windows. Revision 5/6 (UTF-8)
//! passwords are out of scope.
//!
//! Acceptance is asymmetric by mode: [`PasswordMode::Encrypt`] admits only
//! characters that are safely re-enterable on any platform, while
//! [`PasswordMode::Decrypt`] additionally folds Latin Extended letters and
//! typographic punctuation the way Reader did, so anything a user could
//! have encrypted with elsewhere still opens here.
//!
//! The conversion is a pure function over byte slices: no I/O, no shared
//! mutable state, linear time. All tables are compiled-in statics, safe for
//! unsynchronized concurrent reads.
//!
//! ```
//! use pdfdoc_password::{convert, measure, PasswordMode};
//!
//! let bytes = convert("café".as_bytes(), PasswordMode::Encrypt)?;
//! assert_eq!(bytes, [b'c', b'a', b'f', 0xE9]);
//!
//! // Em dash is only acceptable when opening an existing document.
//! assert!(convert("a—b".as_bytes(), PasswordMode::Encrypt).is_err());
//! assert_eq!(measure("a—b".as_bytes(), PasswordMode::Decrypt)?, 3);
//! # Ok::<(), pdfdoc_password::PasswordError>(())
//! ```

pub mod codec;
pub mod error;
mod tables;

pub use codec::{convert, convert_into, measure, PasswordMode};
pub use error::PasswordError;
