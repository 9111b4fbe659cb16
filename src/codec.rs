//! UTF-8 to PDFDocEncoding password conversion.
//!
//! Legacy PDF standard security (revision 4 and earlier) stores passwords
//! as PDFDocEncoding bytes. This module decodes a UTF-8 password one code
//! point at a time, classifies each point, and emits one byte per point.
//!
//! Classification priority, matching the historical Reader behavior:
//! 1. Directly representable: printable ASCII (0x20–0x7E) and the Latin-1
//!    upper range (0xA0–0xFF) pass through unchanged.
//! 2. Eight typographic points with dedicated PDFDocEncoding bytes
//!    (ligatures, caron letters, Ydieresis, florin), honored in both modes.
//! 3. Decrypt mode only: the Latin Extended folding table for
//!    U+0100–U+01FF, then the punctuation/currency special map.
//!
//! Anything else fails the whole conversion.

use crate::error::PasswordError;
use crate::tables;

/// Which encryption operation the converted password is for.
///
/// The two modes are asymmetric by design. Reader accepted a broader,
/// platform-dependent character set when *entering* a password than can be
/// safely assumed re-enterable everywhere when a password is *set*, so the
/// decrypt-accepted set is a strict superset of the encrypt-accepted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PasswordMode {
    /// The password is being set on a document. Only characters that are
    /// unambiguously re-enterable on any platform are accepted.
    Encrypt,
    /// The password is being used to open an encrypted document. Accepts
    /// everything Reader 7 on Windows accepted, folded per its observed
    /// behavior.
    Decrypt,
}

/// Validate a password and return the PDFDocEncoding byte count it would
/// produce, without converting.
///
/// One byte is produced per code point, so the result never exceeds
/// `password.len()`. Use this to size a buffer for [`convert_into`].
///
/// # Errors
///
/// Returns [`PasswordError`] if `password` is not well-formed UTF-8 in the
/// 1–3 byte range or contains a code point the mode does not accept.
pub fn measure(password: &[u8], mode: PasswordMode) -> Result<usize, PasswordError> {
    let mut count = 0;
    let mut pos = 0;
    while pos < password.len() {
        let (code_point, len) = next_scalar(password, pos)?;
        remap(code_point, mode).ok_or(PasswordError)?;
        pos += len;
        count += 1;
    }
    Ok(count)
}

/// Convert a password into a caller-provided buffer, returning the number
/// of bytes written.
///
/// Bytes are written in order, one per code point. `out` must hold at least
/// the count reported by [`measure`] (`password.len()` is always a safe
/// upper bound). On failure, bytes already written for earlier code points
/// are left behind but carry no meaning.
///
/// # Errors
///
/// Returns [`PasswordError`] under the same conditions as [`measure`].
///
/// # Panics
///
/// Panics if `out` is too short for the converted length.
pub fn convert_into(
    password: &[u8],
    mode: PasswordMode,
    out: &mut [u8],
) -> Result<usize, PasswordError> {
    let mut written = 0;
    let mut pos = 0;
    while pos < password.len() {
        let (code_point, len) = next_scalar(password, pos)?;
        out[written] = remap(code_point, mode).ok_or(PasswordError)?;
        pos += len;
        written += 1;
    }
    Ok(written)
}

/// Convert a password into a freshly allocated PDFDocEncoding byte vector.
///
/// Allocating convenience over [`measure`]/[`convert_into`] for callers
/// that do not manage the output buffer themselves.
///
/// # Errors
///
/// Returns [`PasswordError`] under the same conditions as [`measure`].
pub fn convert(password: &[u8], mode: PasswordMode) -> Result<Vec<u8>, PasswordError> {
    let mut out = Vec::with_capacity(password.len());
    let mut pos = 0;
    while pos < password.len() {
        let (code_point, len) = next_scalar(password, pos)?;
        out.push(remap(code_point, mode).ok_or(PasswordError)?);
        pos += len;
    }
    Ok(out)
}

/// Decode the UTF-8 sequence starting at `pos`, returning the code point
/// and the number of bytes consumed.
///
/// Accepts 1–3 byte sequences only. The PDFDocEncoding-reachable repertoire
/// tops out at U+2122, so a four-byte lead can never map and is rejected
/// outright, as are stray continuation bytes and truncated sequences.
fn next_scalar(bytes: &[u8], pos: usize) -> Result<(u32, usize), PasswordError> {
    let b0 = bytes[pos];
    if b0 & 0x80 == 0 {
        return Ok((u32::from(b0), 1));
    }
    if b0 & 0xE0 == 0xC0 {
        if let Some(&b1) = bytes.get(pos + 1) {
            if b1 & 0xC0 == 0x80 {
                let code_point = (u32::from(b0 & 0x1F) << 6) | u32::from(b1 & 0x3F);
                return Ok((code_point, 2));
            }
        }
        return Err(PasswordError);
    }
    if b0 & 0xF0 == 0xE0 {
        if let (Some(&b1), Some(&b2)) = (bytes.get(pos + 1), bytes.get(pos + 2)) {
            if b1 & 0xC0 == 0x80 && b2 & 0xC0 == 0x80 {
                let code_point = (u32::from(b0 & 0x0F) << 12)
                    | (u32::from(b1 & 0x3F) << 6)
                    | u32::from(b2 & 0x3F);
                return Ok((code_point, 3));
            }
        }
        return Err(PasswordError);
    }
    Err(PasswordError)
}

/// Classify one code point under the given mode.
///
/// Returns the PDFDocEncoding byte, or `None` if the mode rejects the
/// point. The lookup order is load-bearing: the shared special map wins
/// over the Latin Extended table where they overlap.
fn remap(code_point: u32, mode: PasswordMode) -> Option<u8> {
    if (0x20..0x7F).contains(&code_point) || (0xA0..=0xFF).contains(&code_point) {
        return Some(code_point as u8);
    }
    if let Some(byte) = tables::shared_special(code_point) {
        return Some(byte);
    }
    if mode == PasswordMode::Decrypt {
        if let Some(byte) = tables::latin_extended_windows(code_point) {
            return Some(byte);
        }
        return tables::decrypt_special(code_point);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH_MODES: [PasswordMode; 2] = [PasswordMode::Encrypt, PasswordMode::Decrypt];

    #[test]
    fn ascii_printable_passes_through_in_both_modes() {
        for mode in BOTH_MODES {
            for byte in 0x20u8..0x7F {
                assert_eq!(convert(&[byte], mode), Ok(vec![byte]), "byte {byte:#04x}");
            }
        }
    }

    #[test]
    fn latin1_upper_range_passes_through_in_both_modes() {
        for mode in BOTH_MODES {
            for code_point in 0xA0u32..=0xFF {
                let input: Vec<u8> = char::from_u32(code_point)
                    .unwrap()
                    .to_string()
                    .into_bytes();
                assert_eq!(
                    convert(&input, mode),
                    Ok(vec![code_point as u8]),
                    "U+{code_point:04X}"
                );
            }
        }
    }

    #[test]
    fn ascii_controls_rejected_in_both_modes() {
        for mode in BOTH_MODES {
            assert_eq!(convert(b"\x00", mode), Err(PasswordError));
            assert_eq!(convert(b"pass\x09word", mode), Err(PasswordError));
            assert_eq!(convert(b"\x7F", mode), Err(PasswordError)); // DEL
        }
    }

    #[test]
    fn cafe_converts_to_latin1_bytes() {
        let input = "café".as_bytes(); // é = U+00E9, two UTF-8 bytes
        for mode in BOTH_MODES {
            assert_eq!(convert(input, mode), Ok(vec![b'c', b'a', b'f', 0xE9]));
        }
    }

    #[test]
    fn shared_specials_accepted_when_encrypting() {
        // Œ, Š, ž, ƒ all have dedicated PDFDocEncoding bytes.
        assert_eq!(
            convert("ŒŠžƒ".as_bytes(), PasswordMode::Encrypt),
            Ok(vec![0x96, 0x97, 0x9E, 0x86])
        );
    }

    #[test]
    fn em_dash_rejected_when_encrypting_mapped_when_decrypting() {
        let input = "x—y".as_bytes(); // U+2014
        assert_eq!(convert(input, PasswordMode::Encrypt), Err(PasswordError));
        assert_eq!(
            convert(input, PasswordMode::Decrypt),
            Ok(vec![b'x', 0x84, b'y'])
        );
    }

    #[test]
    fn latin_extended_folded_only_when_decrypting() {
        let input = "Ā".as_bytes(); // U+0100
        assert_eq!(convert(input, PasswordMode::Encrypt), Err(PasswordError));
        assert_eq!(convert(input, PasswordMode::Decrypt), Ok(vec![b'A']));
    }

    #[test]
    fn euro_sign_decrypt_only() {
        let input = "€".as_bytes(); // U+20AC, three UTF-8 bytes
        assert_eq!(convert(input, PasswordMode::Encrypt), Err(PasswordError));
        assert_eq!(convert(input, PasswordMode::Decrypt), Ok(vec![0xA0]));
    }

    #[test]
    fn code_points_above_repertoire_rejected_in_both_modes() {
        for mode in BOTH_MODES {
            assert_eq!(convert("↑".as_bytes(), mode), Err(PasswordError)); // U+2191
            assert_eq!(convert("你".as_bytes(), mode), Err(PasswordError));
        }
    }

    #[test]
    fn four_byte_sequences_rejected_in_both_modes() {
        let input = "🔒".as_bytes();
        assert_eq!(input.len(), 4);
        for mode in BOTH_MODES {
            assert_eq!(convert(input, mode), Err(PasswordError));
            assert_eq!(measure(input, mode), Err(PasswordError));
        }
    }

    #[test]
    fn truncated_two_byte_sequence_rejected() {
        // Lone lead byte of "é" with no continuation.
        for mode in BOTH_MODES {
            assert_eq!(convert(b"caf\xC3", mode), Err(PasswordError));
        }
    }

    #[test]
    fn truncated_three_byte_sequence_rejected() {
        // "€" is E2 82 AC; drop the last byte.
        for mode in BOTH_MODES {
            assert_eq!(convert(b"\xE2\x82", mode), Err(PasswordError));
        }
    }

    #[test]
    fn malformed_continuation_rejected() {
        for mode in BOTH_MODES {
            assert_eq!(convert(b"\xC3\x28", mode), Err(PasswordError)); // bad continuation
            assert_eq!(convert(b"\xE2\x82\x28", mode), Err(PasswordError));
            assert_eq!(convert(b"\x80abc", mode), Err(PasswordError)); // stray continuation
        }
    }

    #[test]
    fn empty_password_converts_to_empty() {
        for mode in BOTH_MODES {
            assert_eq!(measure(b"", mode), Ok(0));
            assert_eq!(convert(b"", mode), Ok(Vec::new()));
        }
    }

    #[test]
    fn measure_then_convert_into_writes_exactly_measured_count() {
        let input = "naïve—pass‰".as_bytes();
        let count = measure(input, PasswordMode::Decrypt).unwrap();
        let mut out = vec![0u8; count];
        let written = convert_into(input, PasswordMode::Decrypt, &mut out).unwrap();
        assert_eq!(written, count);
        assert_eq!(out, convert(input, PasswordMode::Decrypt).unwrap());
    }

    #[test]
    fn measure_agrees_with_convert_length() {
        let cases: [&[u8]; 4] = [b"plain", "café".as_bytes(), "Œuvre".as_bytes(), b""];
        for input in cases {
            for mode in BOTH_MODES {
                assert_eq!(
                    measure(input, mode).unwrap(),
                    convert(input, mode).unwrap().len()
                );
            }
        }
    }

    #[test]
    fn convert_into_oversized_buffer_reports_true_count() {
        let input = "café".as_bytes();
        let mut out = [0u8; 32];
        let written = convert_into(input, PasswordMode::Encrypt, &mut out).unwrap();
        assert_eq!(written, 4);
        assert_eq!(&out[..written], &[b'c', b'a', b'f', 0xE9]);
    }

    // Exhaustive check that encrypt mode never accepts a code point decrypt
    // mode rejects, over the whole repertoire the codec can see (1-3 byte
    // UTF-8 reaches up to U+FFFF).
    #[test]
    fn encrypt_accepted_set_is_subset_of_decrypt_accepted_set() {
        for code_point in 0u32..=0xFFFF {
            if remap(code_point, PasswordMode::Encrypt).is_some() {
                assert_eq!(
                    remap(code_point, PasswordMode::Encrypt),
                    remap(code_point, PasswordMode::Decrypt),
                    "U+{code_point:04X}"
                );
            }
        }
    }

    #[test]
    fn shared_map_wins_over_latin_extended_table() {
        // U+0160/U+0161 sit in the table range but must take their
        // PDFDocEncoding bytes, in decrypt mode too.
        assert_eq!(convert("Š".as_bytes(), PasswordMode::Decrypt), Ok(vec![0x97]));
        assert_eq!(convert("š".as_bytes(), PasswordMode::Decrypt), Ok(vec![0x9D]));
    }

    #[test]
    fn failure_reports_no_count_even_after_valid_prefix() {
        let input = "good→".as_bytes(); // valid prefix, then U+2192
        for mode in BOTH_MODES {
            assert_eq!(measure(input, mode), Err(PasswordError));
            let mut out = [0u8; 16];
            assert_eq!(convert_into(input, mode, &mut out), Err(PasswordError));
        }
    }

    #[test]
    fn spacing_accents_fold_into_control_range_when_decrypting() {
        // PDFDocEncoding keeps its accent glyphs below 0x20.
        assert_eq!(convert("ˆ".as_bytes(), PasswordMode::Decrypt), Ok(vec![0x1A]));
        assert_eq!(convert("˜".as_bytes(), PasswordMode::Decrypt), Ok(vec![0x1F]));
        assert_eq!(convert("ˆ".as_bytes(), PasswordMode::Encrypt), Err(PasswordError));
    }

    #[test]
    fn mixed_quotation_password_decrypt_only() {
        let input = "“quoted”…".as_bytes();
        assert_eq!(convert(input, PasswordMode::Encrypt), Err(PasswordError));
        assert_eq!(
            convert(input, PasswordMode::Decrypt),
            Ok(vec![0x8D, b'q', b'u', b'o', b't', b'e', b'd', 0x8E, 0x83])
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn password_mode_serde_round_trip() {
        let json = serde_json::to_string(&PasswordMode::Decrypt).unwrap();
        assert_eq!(json, "\"Decrypt\"");
        let mode: PasswordMode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, PasswordMode::Decrypt);
    }
}
