//! Graphic sets: the switchable code tables of the ARIB STD-B24 8-bit code.
//!
//! A designation escape binds one of these sets to a register G0..G3;
//! the invoked register then interprets GL/GR code elements.

use crate::tables::{HIRAGANA_TAIL, KANJI_PLANE, KATAKANA_TAIL};

/// Number of bytes per code element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeWidth {
    Single,
    Double,
}

/// A graphic set designatable into one of the registers G0..G3.
///
/// The proportional alphanumeric/kana sets share the tables of their
/// fixed-width counterparts and are folded into them on designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicSet {
    /// Two-byte kanji set: JIS X 0208 rows 1..=84 plus the ARIB
    /// additional-symbol rows. Finals 0x42, 0x39 and 0x3B all resolve
    /// here; the three differ only in DRCS replaceability, which does
    /// not affect text recovery.
    Kanji,
    /// Two-byte JIS compatible kanji plane 2 (final 0x3A). Designatable
    /// but carries no Unicode mapping.
    JisPlane2,
    /// ASCII 0x21..=0x7E.
    Alnum,
    Hiragana,
    Katakana,
    /// JIS X 0201 katakana, mapped to the Unicode half-width forms.
    HalfwidthKatakana,
    MosaicA,
    MosaicB,
    MosaicC,
    MosaicD,
    /// One-byte DRCS sets DRCS-1..=DRCS-15. Glyphs are downloaded at
    /// runtime, so there is nothing to map to.
    Drcs1,
    /// Two-byte DRCS-0.
    Drcs2,
    /// The macro set; codes 0x60..=0x6F replay predefined byte strings.
    Macro,
}

impl GraphicSet {
    pub fn width(self) -> CodeWidth {
        match self {
            GraphicSet::Kanji | GraphicSet::JisPlane2 | GraphicSet::Drcs2 => CodeWidth::Double,
            _ => CodeWidth::Single,
        }
    }

    /// Set designated by the final byte of a one-byte G-set escape
    /// (`ESC 0x28..=0x2B F`).
    pub fn from_final_1byte(f: u8) -> Option<GraphicSet> {
        match f {
            0x4A | 0x36 => Some(GraphicSet::Alnum),
            0x30 | 0x37 => Some(GraphicSet::Hiragana),
            0x31 | 0x38 => Some(GraphicSet::Katakana),
            0x32 => Some(GraphicSet::MosaicA),
            0x33 => Some(GraphicSet::MosaicB),
            0x34 => Some(GraphicSet::MosaicC),
            0x35 => Some(GraphicSet::MosaicD),
            0x49 => Some(GraphicSet::HalfwidthKatakana),
            _ => None,
        }
    }

    /// Set designated by the final byte of a two-byte G-set escape
    /// (`ESC 0x24 F` or `ESC 0x24 0x29..=0x2B F`).
    pub fn from_final_2byte(f: u8) -> Option<GraphicSet> {
        match f {
            0x42 | 0x39 | 0x3B => Some(GraphicSet::Kanji),
            0x3A => Some(GraphicSet::JisPlane2),
            _ => None,
        }
    }

    /// Unicode scalar for a code element of this set.
    ///
    /// `c1`/`c2` are the 7-bit codes (high bit stripped); `c2` is ignored
    /// by one-byte sets. Returns `None` when the cell is unassigned or
    /// the set has no text mapping at all (mosaics, DRCS, plane 2).
    pub(crate) fn lookup(self, c1: u8, c2: u8) -> Option<char> {
        let scalar = match self {
            GraphicSet::Kanji => {
                KANJI_PLANE[usize::from(c1) - 0x21][usize::from(c2) - 0x21]
            }
            GraphicSet::Alnum => u32::from(c1),
            GraphicSet::Hiragana => match c1 {
                0x21..=0x73 => 0x3041 + u32::from(c1) - 0x21,
                0x77..=0x7E => HIRAGANA_TAIL[usize::from(c1) - 0x77],
                _ => 0,
            },
            GraphicSet::Katakana => match c1 {
                0x21..=0x76 => 0x30A1 + u32::from(c1) - 0x21,
                0x77..=0x7E => KATAKANA_TAIL[usize::from(c1) - 0x77],
                _ => 0,
            },
            GraphicSet::HalfwidthKatakana => match c1 {
                0x21..=0x5F => 0xFF61 + u32::from(c1) - 0x21,
                _ => 0,
            },
            _ => 0,
        };
        if scalar == 0 {
            None
        } else {
            char::from_u32(scalar)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(GraphicSet::Kanji.width(), CodeWidth::Double);
        assert_eq!(GraphicSet::Drcs2.width(), CodeWidth::Double);
        assert_eq!(GraphicSet::Alnum.width(), CodeWidth::Single);
        assert_eq!(GraphicSet::Macro.width(), CodeWidth::Single);
    }

    #[test]
    fn test_final_bytes() {
        assert_eq!(GraphicSet::from_final_1byte(0x4A), Some(GraphicSet::Alnum));
        // proportional variants fold into the fixed-width sets
        assert_eq!(GraphicSet::from_final_1byte(0x36), Some(GraphicSet::Alnum));
        assert_eq!(GraphicSet::from_final_1byte(0x37), Some(GraphicSet::Hiragana));
        assert_eq!(GraphicSet::from_final_1byte(0x49), Some(GraphicSet::HalfwidthKatakana));
        assert_eq!(GraphicSet::from_final_1byte(0x42), None);
        assert_eq!(GraphicSet::from_final_2byte(0x42), Some(GraphicSet::Kanji));
        assert_eq!(GraphicSet::from_final_2byte(0x39), Some(GraphicSet::Kanji));
        assert_eq!(GraphicSet::from_final_2byte(0x3A), Some(GraphicSet::JisPlane2));
        assert_eq!(GraphicSet::from_final_2byte(0x4A), None);
    }

    #[test]
    fn test_lookup() {
        // kanji 1-1 is the ideographic space
        assert_eq!(GraphicSet::Kanji.lookup(0x21, 0x21), Some('\u{3000}'));
        assert_eq!(GraphicSet::Kanji.lookup(0x3D, 0x29), Some('秋'));
        assert_eq!(GraphicSet::Alnum.lookup(0x41, 0), Some('A'));
        assert_eq!(GraphicSet::Hiragana.lookup(0x21, 0), Some('ぁ'));
        assert_eq!(GraphicSet::Hiragana.lookup(0x7E, 0), Some('・'));
        assert_eq!(GraphicSet::Katakana.lookup(0x77, 0), Some('ヽ'));
        assert_eq!(GraphicSet::HalfwidthKatakana.lookup(0x21, 0), Some('｡'));
        // unassigned cell in a JIS gap
        assert_eq!(GraphicSet::Kanji.lookup(0x29, 0x21), None);
        assert_eq!(GraphicSet::MosaicA.lookup(0x21, 0), None);
        assert_eq!(GraphicSet::Drcs1.lookup(0x21, 0), None);
    }
}
