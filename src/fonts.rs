//! Builtin font handling for the `maintenance_report` crate.
//!
//! Reports are set in the PDF standard Helvetica family, which every conforming viewer ships with,
//! so rendering never depends on font files being present on disk.  The standard faces are not
//! embedded, which means `printpdf` has no glyph metrics for them; the advance widths needed for
//! centering text are therefore carried here.
//!
//! `printpdf` writes text for builtin fonts as the raw UTF-8 bytes, while viewers decode them as
//! WinAnsi.  Only ASCII renders as sent: a non-ASCII character such as `é` shows up as two
//! unrelated glyphs (`Ã©`), and its width is measured with the fallback advance.

use log::debug;
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};

/// Name of the font family used for every text run.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Helvetica";

/// Width used for characters outside printable ASCII, in thousandths of an em.
const FALLBACK_ADVANCE: u16 = 556;

const FIRST_MAPPED_CHAR: u32 = 0x20;

/// Advance widths of Helvetica for U+0020..=U+007E, in thousandths of an em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Advance widths of Helvetica-Bold for U+0020..=U+007E, in thousandths of an em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Face of the builtin family a text run is set in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Helvetica.
    #[default]
    Regular,
    /// Helvetica-Bold.
    Bold,
}

impl FontWeight {
    fn builtin(self) -> BuiltinFont {
        match self {
            Self::Regular => BuiltinFont::Helvetica,
            Self::Bold => BuiltinFont::HelveticaBold,
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Self::Regular => &HELVETICA_WIDTHS,
            Self::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

/// Font references registered on a single document.
pub struct BuiltinFonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl BuiltinFonts {
    /// Returns the reference for the requested face.
    pub fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Registers the regular and bold Helvetica faces on `document`.
pub fn install_builtin_fonts(
    document: &PdfDocumentReference,
) -> Result<BuiltinFonts, printpdf::Error> {
    debug!("Registering builtin '{}' family", DEFAULT_FONT_FAMILY_NAME);
    Ok(BuiltinFonts {
        regular: document.add_builtin_font(FontWeight::Regular.builtin())?,
        bold: document.add_builtin_font(FontWeight::Bold.builtin())?,
    })
}

fn advance(character: char, widths: &[u16; 95]) -> u16 {
    (character as u32)
        .checked_sub(FIRST_MAPPED_CHAR)
        .and_then(|index| widths.get(index as usize))
        .copied()
        .unwrap_or(FALLBACK_ADVANCE)
}

/// Returns the advance width of `text` in points when set in `weight` at `size` points.
pub fn text_width(text: &str, weight: FontWeight, size: f64) -> f64 {
    let widths = weight.widths();
    let units: u32 = text.chars().map(|c| u32::from(advance(c, widths))).sum();
    f64::from(units) * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::{text_width, FontWeight};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_close(text_width("", FontWeight::Bold, 16.0), 0.0);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = text_width("Maintenance Report", FontWeight::Regular, 16.0);
        let bold = text_width("Maintenance Report", FontWeight::Bold, 16.0);
        assert!(bold > regular);
    }

    #[test]
    fn uses_font_metrics() {
        // M(833) + a(556) at 10pt.
        assert_close(text_width("Ma", FontWeight::Regular, 10.0), 13.89);
        // r(389) + i(278) at 1000pt keeps the raw units.
        assert_close(text_width("ri", FontWeight::Bold, 1000.0), 667.0);
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        assert_close(text_width("é", FontWeight::Regular, 1000.0), 556.0);
        assert_close(text_width("\t", FontWeight::Bold, 1000.0), 556.0);
    }
}
