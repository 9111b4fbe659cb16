//! Remap tables for converting Unicode code points to PDFDocEncoding bytes.
//!
//! PDFDocEncoding is the fixed 256-code-point character set used by legacy
//! PDF standard-security passwords, a modified ISO 8859-1. Acrobat/Reader
//! historically accepted password characters outside that set and folded
//! them to single-byte alternatives; the tables here reproduce the folding
//! observed on Windows with Reader 7. Adobe documents this behavior as
//! platform dependent, so the data is a frozen compatibility contract and
//! must not be "corrected" against newer references.

/// Latin Extended-A/B code points (U+0100–U+01FF) folded to single bytes.
///
/// Indexed by `code_point - 0x100`. Accented letters with a Windows-1250
/// equivalent keep that byte, a few map to their unaccented ASCII base
/// letter, and everything else falls back to `.` (the observed Reader
/// behavior, not a synthetic default). Total over its domain: every slot
/// holds a byte.
///
/// Only consulted in decrypt mode; see [`crate::PasswordMode`].
pub(crate) static LATIN_EXTENDED_WINDOWS: [u8; 256] = [
    b'A',  // U+0100 Latin capital letter A with macron
    b'a',  // U+0101 Latin small letter a with macron
    0xC3,  // U+0102 Latin capital letter A with breve
    0xC4,  // U+0103 Latin small letter a with breve
    0xA5,  // U+0104 Latin capital letter A with ogonek
    0xB9,  // U+0105 Latin small letter a with ogonek
    0xC6,  // U+0106 Latin capital letter C with acute
    0xE6,  // U+0107 Latin small letter c with acute
    b'.',  // U+0108 Latin capital letter C with circumflex
    b'.',  // U+0109 Latin small letter c with circumflex
    b'.',  // U+010A Latin capital letter C with dot above
    b'.',  // U+010B Latin small letter c with dot above
    0xC8,  // U+010C Latin capital letter C with caron
    0xE8,  // U+010D Latin small letter c with caron
    0xCF,  // U+010E Latin capital letter D with caron
    0xEF,  // U+010F Latin small letter d with caron
    0xD0,  // U+0110 Latin capital letter D with stroke
    0xF0,  // U+0111 Latin small letter d with stroke
    b'E',  // U+0112 Latin capital letter E with macron
    b'e',  // U+0113 Latin small letter e with macron
    b'.',  // U+0114 Latin capital letter E with breve
    b'.',  // U+0115 Latin small letter e with breve
    b'E',  // U+0116 Latin capital letter E with dot above
    b'e',  // U+0117 Latin small letter e with dot above
    0xCA,  // U+0118 Latin capital letter E with ogonek
    0xEA,  // U+0119 Latin small letter e with ogonek
    0xCC,  // U+011A Latin capital letter E with caron
    0xEC,  // U+011B Latin small letter e with caron
    b'.',  // U+011C Latin capital letter G with circumflex
    b'.',  // U+011D Latin small letter g with circumflex
    b'G',  // U+011E Latin capital letter G with breve
    b'g',  // U+011F Latin small letter g with breve
    b'.',  // U+0120 Latin capital letter G with dot above
    b'.',  // U+0121 Latin small letter g with dot above
    b'G',  // U+0122 Latin capital letter G with cedilla
    b'g',  // U+0123 Latin small letter g with cedilla
    b'.',  // U+0124 Latin capital letter H with circumflex
    b'.',  // U+0125 Latin small letter h with circumflex
    b'.',  // U+0126 Latin capital letter H with stroke
    b'.',  // U+0127 Latin small letter h with stroke
    b'.',  // U+0128 Latin capital letter I with tilde
    b'.',  // U+0129 Latin small letter i with tilde
    b'I',  // U+012A Latin capital letter I with macron
    b'i',  // U+012B Latin small letter i with macron
    b'.',  // U+012C Latin capital letter I with breve
    b'.',  // U+012D Latin small letter i with breve
    b'I',  // U+012E Latin capital letter I with ogonek
    b'i',  // U+012F Latin small letter i with ogonek
    b'I',  // U+0130 Latin capital letter I with dot above
    b'i',  // U+0131 Latin small letter dotless i
    b'.',  // U+0132 Latin capital ligature IJ
    b'.',  // U+0133 Latin small ligature ij
    b'.',  // U+0134 Latin capital letter J with circumflex
    b'.',  // U+0135 Latin small letter j with circumflex
    b'K',  // U+0136 Latin capital letter K with cedilla
    b'k',  // U+0137 Latin small letter k with cedilla
    b'.',  // U+0138 Latin small letter kra
    0xC5,  // U+0139 Latin capital letter L with acute
    0xE5,  // U+013A Latin small letter l with acute
    b'L',  // U+013B Latin capital letter L with cedilla
    b'l',  // U+013C Latin small letter l with cedilla
    0xBC,  // U+013D Latin capital letter L with caron
    0xBE,  // U+013E Latin small letter l with caron
    b'.',  // U+013F Latin capital letter L with middle dot
    b'.',  // U+0140 Latin small letter l with middle dot
    0xA3,  // U+0141 Latin capital letter L with stroke
    0xB3,  // U+0142 Latin small letter l with stroke
    0xD1,  // U+0143 Latin capital letter N with acute
    0xF1,  // U+0144 Latin small letter n with acute
    b'N',  // U+0145 Latin capital letter N with cedilla
    b'n',  // U+0146 Latin small letter n with cedilla
    0xD2,  // U+0147 Latin capital letter N with caron
    0xF2,  // U+0148 Latin small letter n with caron
    b'.',  // U+0149 Latin small letter n preceded by apostrophe
    b'.',  // U+014A Latin capital letter Eng
    b'.',  // U+014B Latin small letter eng
    b'O',  // U+014C Latin capital letter O with macron
    b'o',  // U+014D Latin small letter o with macron
    b'.',  // U+014E Latin capital letter O with breve
    b'.',  // U+014F Latin small letter o with breve
    0xD5,  // U+0150 Latin capital letter O with double acute
    0xF5,  // U+0151 Latin small letter o with double acute
    0x96,  // U+0152 Latin capital ligature OE (PDFDocEncoding)
    0x9C,  // U+0153 Latin small ligature oe (PDFDocEncoding)
    0xC0,  // U+0154 Latin capital letter R with acute
    0xE0,  // U+0155 Latin small letter r with acute
    b'R',  // U+0156 Latin capital letter R with cedilla
    b'r',  // U+0157 Latin small letter r with cedilla
    0xD8,  // U+0158 Latin capital letter R with caron
    0xF8,  // U+0159 Latin small letter r with caron
    0x8C,  // U+015A Latin capital letter S with acute
    0x9C,  // U+015B Latin small letter s with acute
    b'.',  // U+015C Latin capital letter S with circumflex
    b'.',  // U+015D Latin small letter s with circumflex
    0xAA,  // U+015E Latin capital letter S with cedilla
    0xBA,  // U+015F Latin small letter s with cedilla
    0x8A,  // U+0160 Latin capital letter S with caron (shadowed by shared map)
    0x9A,  // U+0161 Latin small letter s with caron (shadowed by shared map)
    0xDE,  // U+0162 Latin capital letter T with cedilla
    0xFE,  // U+0163 Latin small letter t with cedilla
    0x8D,  // U+0164 Latin capital letter T with caron
    0x9D,  // U+0165 Latin small letter t with caron
    b'T',  // U+0166 Latin capital letter T with stroke
    b't',  // U+0167 Latin small letter t with stroke
    b'.',  // U+0168 Latin capital letter U with tilde
    b'.',  // U+0169 Latin small letter u with tilde
    b'U',  // U+016A Latin capital letter U with macron
    b'u',  // U+016B Latin small letter u with macron
    b'.',  // U+016C Latin capital letter U with breve
    b'.',  // U+016D Latin small letter u with breve
    0xD9,  // U+016E Latin capital letter U with ring above
    0xF9,  // U+016F Latin small letter u with ring above
    0xDB,  // U+0170 Latin capital letter U with double acute
    0xFB,  // U+0171 Latin small letter u with double acute
    b'U',  // U+0172 Latin capital letter U with ogonek
    b'u',  // U+0173 Latin small letter u with ogonek
    b'.',  // U+0174 Latin capital letter W with circumflex
    b'.',  // U+0175 Latin small letter w with circumflex
    b'.',  // U+0176 Latin capital letter Y with circumflex
    b'.',  // U+0177 Latin small letter y with circumflex
    0x98,  // U+0178 Latin capital letter Y with diaeresis (PDFDocEncoding)
    0x8F,  // U+0179 Latin capital letter Z with acute
    0x9F,  // U+017A Latin small letter z with acute
    0xAF,  // U+017B Latin capital letter Z with dot above
    0xBF,  // U+017C Latin small letter z with dot above
    0x99,  // U+017D Latin capital letter Z with caron (PDFDocEncoding)
    0x9E,  // U+017E Latin small letter z with caron (PDFDocEncoding)
    b'.',  // U+017F Latin small letter long s
    b'b',  // U+0180 Latin small letter b with stroke
    b'.',  // U+0181 Latin capital letter B with hook
    b'.',  // U+0182 Latin capital letter B with top bar
    b'.',  // U+0183 Latin small letter b with top bar
    b'.',  // U+0184 Latin capital letter tone six
    b'.',  // U+0185 Latin small letter tone six
    b'.',  // U+0186 Latin capital letter open O
    b'.',  // U+0187 Latin capital letter C with hook
    b'.',  // U+0188 Latin small letter c with hook
    0xD0,  // U+0189 Latin capital letter African D
    b'.',  // U+018A Latin capital letter D with hook
    b'.',  // U+018B Latin capital letter D with top bar
    b'.',  // U+018C Latin small letter d with top bar
    b'.',  // U+018D Latin small letter turned delta
    b'.',  // U+018E Latin capital letter reversed E
    b'.',  // U+018F Latin capital letter schwa
    b'.',  // U+0190 Latin capital letter open E
    0x83,  // U+0191 Latin capital letter F with hook (CP-1252 florin slot)
    0x83,  // U+0192 Latin small letter f with hook (shadowed by shared map)
    b'.',  // U+0193 Latin capital letter G with hook
    b'.',  // U+0194 Latin capital letter gamma
    b'.',  // U+0195 Latin small letter hv
    b'.',  // U+0196 Latin capital letter iota
    b'I',  // U+0197 Latin capital letter I with stroke
    b'.',  // U+0198 Latin capital letter K with hook
    b'.',  // U+0199 Latin small letter k with hook
    b'l',  // U+019A Latin small letter l with bar
    b'.',  // U+019B Latin small letter lambda with stroke
    b'.',  // U+019C Latin capital letter turned M
    b'.',  // U+019D Latin capital letter N with left hook
    b'.',  // U+019E Latin small letter n with long right leg
    b'O',  // U+019F Latin capital letter O with middle tilde
    b'O',  // U+01A0 Latin capital letter O with horn
    b'o',  // U+01A1 Latin small letter o with horn
    b'.',  // U+01A2 Latin capital letter OI
    b'.',  // U+01A3 Latin small letter oi
    b'.',  // U+01A4 Latin capital letter P with hook
    b'.',  // U+01A5 Latin small letter p with hook
    b'.',  // U+01A6 Latin letter yr
    b'.',  // U+01A7 Latin capital letter tone two
    b'.',  // U+01A8 Latin small letter tone two
    b'.',  // U+01A9 Latin capital letter esh
    b'.',  // U+01AA Latin letter reversed esh loop
    b't',  // U+01AB Latin small letter t with palatal hook
    b'.',  // U+01AC Latin capital letter T with hook
    b'.',  // U+01AD Latin small letter t with hook
    b'T',  // U+01AE Latin capital letter T with retroflex hook
    b'U',  // U+01AF Latin capital letter U with horn
    b'u',  // U+01B0 Latin small letter u with horn
    b'.',  // U+01B1 Latin capital letter upsilon
    b'.',  // U+01B2 Latin capital letter V with hook
    b'.',  // U+01B3 Latin capital letter Y with hook
    b'.',  // U+01B4 Latin small letter y with hook
    b'.',  // U+01B5 Latin capital letter Z with stroke
    b'.',  // U+01B6 Latin small letter z with stroke
    b'.',  // U+01B7 Latin capital letter ezh
    b'.',  // U+01B8 Latin capital letter ezh reversed
    b'.',  // U+01B9 Latin small letter ezh reversed
    b'.',  // U+01BA Latin small letter ezh with tail
    b'.',  // U+01BB Latin letter two with stroke
    b'.',  // U+01BC Latin capital letter tone five
    b'.',  // U+01BD Latin small letter tone five
    b'.',  // U+01BE Latin letter inverted glottal stop with stroke
    b'.',  // U+01BF Latin letter wynn
    b'|',  // U+01C0 Latin letter dental click
    b'.',  // U+01C1 Latin letter lateral click
    b'.',  // U+01C2 Latin letter alveolar click
    b'!',  // U+01C3 Latin letter retroflex click
    b'.',  // U+01C4 Latin capital letter DZ with caron
    b'.',  // U+01C5 Latin capital letter D with small letter z with caron
    b'.',  // U+01C6 Latin small letter dz with caron
    b'.',  // U+01C7 Latin capital letter LJ
    b'.',  // U+01C8 Latin capital letter L with small letter j
    b'.',  // U+01C9 Latin small letter lj
    b'.',  // U+01CA Latin capital letter NJ
    b'.',  // U+01CB Latin capital letter N with small letter j
    b'.',  // U+01CC Latin small letter nj
    b'.',  // U+01CD Latin capital letter A with caron
    b'.',  // U+01CE Latin small letter a with caron
    b'.',  // U+01CF Latin capital letter I with caron
    b'.',  // U+01D0 Latin small letter i with caron
    b'.',  // U+01D1 Latin capital letter O with caron
    b'.',  // U+01D2 Latin small letter o with caron
    b'.',  // U+01D3 Latin capital letter U with caron
    b'.',  // U+01D4 Latin small letter u with caron
    b'.',  // U+01D5 Latin capital letter U with diaeresis and macron
    b'.',  // U+01D6 Latin small letter u with diaeresis and macron
    b'.',  // U+01D7 Latin capital letter U with diaeresis and acute
    b'.',  // U+01D8 Latin small letter u with diaeresis and acute
    b'.',  // U+01D9 Latin capital letter U with diaeresis and caron
    b'.',  // U+01DA Latin small letter u with diaeresis and caron
    b'.',  // U+01DB Latin capital letter U with diaeresis and grave
    b'.',  // U+01DC Latin small letter u with diaeresis and grave
    b'.',  // U+01DD Latin small letter turned e
    b'A',  // U+01DE Latin capital letter A with diaeresis and macron
    b'a',  // U+01DF Latin small letter a with diaeresis and macron
    b'.',  // U+01E0 Latin capital letter A with dot above and macron
    b'.',  // U+01E1 Latin small letter a with dot above and macron
    b'.',  // U+01E2 Latin capital letter AE with macron
    b'.',  // U+01E3 Latin small letter ae with macron
    b'G',  // U+01E4 Latin capital letter G with stroke
    b'g',  // U+01E5 Latin small letter g with stroke
    b'.',  // U+01E6 Latin capital letter G with caron
    b'.',  // U+01E7 Latin small letter g with caron
    b'.',  // U+01E8 Latin capital letter K with caron
    b'.',  // U+01E9 Latin small letter k with caron
    b'.',  // U+01EA Latin capital letter O with ogonek
    b'.',  // U+01EB Latin small letter o with ogonek
    b'O',  // U+01EC Latin capital letter O with ogonek and macron
    b'o',  // U+01ED Latin small letter o with ogonek and macron
    b'.',  // U+01EE Latin capital letter ezh with caron
    b'.',  // U+01EF Latin small letter ezh with caron
    b'.',  // U+01F0 Latin small letter j with caron
    b'.',  // U+01F1 Latin capital letter DZ
    b'.',  // U+01F2 Latin capital letter D with small letter z
    b'.',  // U+01F3 Latin small letter dz
    b'.',  // U+01F4 Latin capital letter G with acute
    b'.',  // U+01F5 Latin small letter g with acute
    b'.',  // U+01F6 Latin capital letter hwair
    b'.',  // U+01F7 Latin capital letter wynn
    b'.',  // U+01F8 Latin capital letter N with grave
    b'.',  // U+01F9 Latin small letter n with grave
    b'.',  // U+01FA Latin capital letter A with ring above and acute
    b'.',  // U+01FB Latin small letter a with ring above and acute
    b'.',  // U+01FC Latin capital letter AE with acute
    b'.',  // U+01FD Latin small letter ae with acute
    b'.',  // U+01FE Latin capital letter O with stroke and acute
    b'.',  // U+01FF Latin small letter o with stroke and acute
];

/// Code points remapped in both encrypt and decrypt mode.
///
/// These are the Unicode points PDFDocEncoding gives a dedicated byte in
/// its 0x80–0x9F typographic-extension range, so accepting them when
/// setting a password is safe. Sorted by code point for binary search.
pub(crate) static SHARED_SPECIALS: [(u32, u8); 8] = [
    (0x0152, 0x96), // Latin capital ligature OE
    (0x0153, 0x9C), // Latin small ligature oe
    (0x0160, 0x97), // Latin capital letter S with caron
    (0x0161, 0x9D), // Latin small letter s with caron
    (0x0178, 0x98), // Latin capital letter Y with diaeresis
    (0x017D, 0x99), // Latin capital letter Z with caron
    (0x017E, 0x9E), // Latin small letter z with caron
    (0x0192, 0x86), // Latin small letter f with hook (florin)
];

/// Code points remapped only in decrypt mode.
///
/// Reader accepted these when typing a password for an already-encrypted
/// document, but there is no guarantee another platform can re-enter them,
/// so they are rejected when a password is first set. Sorted by code point
/// for binary search.
pub(crate) static DECRYPT_SPECIALS: [(u32, u8); 19] = [
    (0x02C6, 0x1A), // modifier letter circumflex accent
    (0x02DC, 0x1F), // small tilde
    (0x2013, 0x85), // en dash
    (0x2014, 0x84), // em dash
    (0x2018, 0x8F), // left single quotation mark
    (0x2019, 0x90), // right single quotation mark
    (0x201A, 0x91), // single low-9 quotation mark
    (0x201C, 0x8D), // left double quotation mark
    (0x201D, 0x8E), // right double quotation mark
    (0x201E, 0x8C), // double low-9 quotation mark
    (0x2020, 0x81), // dagger
    (0x2021, 0x82), // double dagger
    (0x2022, 0x80), // bullet
    (0x2026, 0x83), // horizontal ellipsis
    (0x2030, 0x8B), // per mille sign
    (0x2039, 0x88), // single left-pointing angle quotation mark
    (0x203A, 0x89), // single right-pointing angle quotation mark
    (0x20AC, 0xA0), // euro sign
    (0x2122, 0x92), // trade mark sign
];

/// Look up a code point in the shared special map (both modes).
pub(crate) fn shared_special(code_point: u32) -> Option<u8> {
    lookup(&SHARED_SPECIALS, code_point)
}

/// Look up a code point in the decrypt-only special map.
pub(crate) fn decrypt_special(code_point: u32) -> Option<u8> {
    lookup(&DECRYPT_SPECIALS, code_point)
}

/// Look up a Latin Extended-A/B code point in the Windows folding table.
///
/// Returns `None` outside U+0100–U+01FF; inside the range the table is
/// total, so the result is always `Some`.
pub(crate) fn latin_extended_windows(code_point: u32) -> Option<u8> {
    if (0x100..=0x1FF).contains(&code_point) {
        Some(LATIN_EXTENDED_WINDOWS[(code_point - 0x100) as usize])
    } else {
        None
    }
}

fn lookup(map: &[(u32, u8)], code_point: u32) -> Option<u8> {
    map.binary_search_by_key(&code_point, |&(point, _)| point)
        .ok()
        .map(|i| map[i].1)
}
