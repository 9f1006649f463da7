//! Decoder: ARIB STD-B24 8-bit code byte stream to Unicode text.
//!
//! A single forward pass over the stream drives an ISO/IEC 2022 style
//! state machine: four registers G0..G3 hold graphic sets, GL and GR
//! each invoke one register, and control codes switch the invocation or
//! redesignate a register. The default state is the one broadcast SI
//! tables assume: G0=kanji, G1=alphanumeric, G2=hiragana, G3=katakana,
//! GL=G0, GR=G2.
//!
//! Decoding never fails outright. Anything that cannot be turned into
//! text (unassigned cells, mosaic or DRCS elements, malformed or
//! truncated sequences, presentation controls) is skipped and reported
//! through [`Decoded::complete`].

use log::trace;

use crate::sets::{CodeWidth, GraphicSet};
use crate::tables::DEFAULT_MACROS;

/// Result of decoding an ARIB STD-B24 byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered text, in stream order.
    pub text: String,
    /// `false` when any part of the stream was dropped.
    pub complete: bool,
}

/// Decode an ARIB STD-B24 8-bit code byte stream.
pub fn decode(data: &[u8]) -> Decoded {
    let mut dec = Decoder::new();
    dec.run(data, 0);
    Decoded {
        text: dec.text,
        complete: dec.complete,
    }
}

/// Default designations for SI tables (EIT, SDT and friends).
const DEFAULT_G: [GraphicSet; 4] = [
    GraphicSet::Kanji,
    GraphicSet::Alnum,
    GraphicSet::Hiragana,
    GraphicSet::Katakana,
];

struct Decoder {
    g: [GraphicSet; 4],
    /// Register index invoked in GL / GR.
    gl: usize,
    gr: usize,
    /// Register invoked by SS2/SS3 for the next code element only.
    single_shift: Option<usize>,
    text: String,
    complete: bool,
}

impl Decoder {
    fn new() -> Self {
        Decoder {
            g: DEFAULT_G,
            gl: 0,
            gr: 2,
            single_shift: None,
            text: String::new(),
            complete: true,
        }
    }

    /// Process one byte slice. `depth` is nonzero while replaying a
    /// macro body, which must not invoke further macros.
    fn run(&mut self, data: &[u8], depth: u8) {
        let mut i = 0;
        while i < data.len() {
            let b = data[i];
            i += 1;
            match b {
                0x21..=0x7E => {
                    let reg = self.single_shift.take().unwrap_or(self.gl);
                    self.element(data, &mut i, b, reg, depth);
                }
                0xA1..=0xFE => {
                    let reg = self.single_shift.take().unwrap_or(self.gr);
                    self.element(data, &mut i, b, reg, depth);
                }
                // SP/DEL-position bytes follow the width of the invoked set
                0x20 => self.space(self.gl),
                0xA0 => self.space(self.gr),
                0x0E => self.gl = 1,                 // LS1
                0x0F => self.gl = 0,                 // LS0
                0x19 => self.single_shift = Some(2), // SS2
                0x1D => self.single_shift = Some(3), // SS3
                0x1B => i += self.escape(&data[i..]),
                0x16 => i += 1, // PAPF, one parameter
                0x1C => i += 2, // APS, two parameters
                0x00..=0x1F | 0x7F => {}
                0x80..=0x9F => i += self.c1(b, &data[i..]),
                0xFF => self.complete = false,
            }
            i = i.min(data.len());
        }
    }

    /// Decode one code element whose first byte has been read.
    fn element(&mut self, data: &[u8], i: &mut usize, first: u8, reg: usize, depth: u8) {
        let set = self.g[reg];
        let c1 = first & 0x7F;
        match set.width() {
            CodeWidth::Double => {
                let Some(&b2) = data.get(*i) else {
                    self.complete = false;
                    return;
                };
                *i += 1;
                let c2 = b2 & 0x7F;
                if !(0x21..=0x7E).contains(&c2) {
                    self.complete = false;
                    return;
                }
                self.push(set.lookup(c1, c2));
            }
            CodeWidth::Single => {
                if set == GraphicSet::Macro {
                    self.invoke_macro(c1, depth);
                } else {
                    self.push(set.lookup(c1, 0));
                }
            }
        }
    }

    fn push(&mut self, ch: Option<char>) {
        match ch {
            Some(c) => self.text.push(c),
            None => self.complete = false,
        }
    }

    fn space(&mut self, reg: usize) {
        let ch = match self.g[reg].width() {
            CodeWidth::Double => '\u{3000}',
            CodeWidth::Single => ' ',
        };
        self.text.push(ch);
    }

    fn invoke_macro(&mut self, code: u8, depth: u8) {
        if depth > 0 || !(0x60..=0x6F).contains(&code) {
            self.complete = false;
            return;
        }
        let body = DEFAULT_MACROS[usize::from(code) - 0x60];
        self.run(body, depth + 1);
    }

    /// Handle the bytes following an ESC. Returns the number consumed.
    fn escape(&mut self, rest: &[u8]) -> usize {
        match *rest {
            [0x6E, ..] => {
                self.gl = 2; // LS2
                1
            }
            [0x6F, ..] => {
                self.gl = 3; // LS3
                1
            }
            [0x7E, ..] => {
                self.gr = 1; // LS1R
                1
            }
            [0x7D, ..] => {
                self.gr = 2; // LS2R
                1
            }
            [0x7C, ..] => {
                self.gr = 3; // LS3R
                1
            }
            // one-byte DRCS or macro set
            [p @ 0x28..=0x2B, 0x20, f, ..] => {
                self.g[usize::from(p) - 0x28] = if f == 0x70 {
                    GraphicSet::Macro
                } else {
                    GraphicSet::Drcs1
                };
                3
            }
            // one-byte G set
            [p @ 0x28..=0x2B, f, ..] => {
                match GraphicSet::from_final_1byte(f) {
                    Some(set) => self.g[usize::from(p) - 0x28] = set,
                    None => {
                        trace!("unknown 1-byte set final {f:#04X}");
                        self.complete = false;
                    }
                }
                2
            }
            // two-byte DRCS
            [0x24, p @ 0x28..=0x2B, 0x20, _, ..] => {
                self.g[usize::from(p) - 0x28] = GraphicSet::Drcs2;
                4
            }
            // two-byte G set, explicit register
            [0x24, p @ 0x28..=0x2B, f, ..] => {
                match GraphicSet::from_final_2byte(f) {
                    Some(set) => self.g[usize::from(p) - 0x28] = set,
                    None => {
                        trace!("unknown 2-byte set final {f:#04X}");
                        self.complete = false;
                    }
                }
                3
            }
            // two-byte G set into G0
            [0x24, f, ..] => {
                match GraphicSet::from_final_2byte(f) {
                    Some(set) => self.g[0] = set,
                    None => {
                        trace!("unknown 2-byte set final {f:#04X}");
                        self.complete = false;
                    }
                }
                2
            }
            // unknown or truncated sequence
            _ => {
                self.complete = false;
                rest.len().min(1)
            }
        }
    }

    /// Skip the parameters of a C1 presentation control. These control
    /// rendering only (color, size, position, flashing); the engine
    /// carries no presentation state, so the text is reported as
    /// incompletely decoded.
    fn c1(&mut self, ctl: u8, rest: &[u8]) -> usize {
        self.complete = false;
        trace!("presentation control {ctl:#04X} dropped");
        match ctl {
            // COL / CDC take one parameter, or 0x20 plus one
            0x90 | 0x92 => {
                if rest.first() == Some(&0x20) {
                    2
                } else {
                    1
                }
            }
            // SZX, FLC, POL, WMM, HLC, RPC: one parameter
            0x8B | 0x91 | 0x93 | 0x94 | 0x97 | 0x98 => 1,
            // CSI: parameter bytes up to an intermediate plus final, or a
            // bare final
            0x9B => {
                let mut n = 0;
                while n < rest.len() {
                    let c = rest[n];
                    n += 1;
                    match c {
                        0x20 => {
                            n += 1;
                            break;
                        }
                        0x5B | 0x5C | 0x6F => break,
                        _ => {}
                    }
                }
                n
            }
            // TIME
            0x9D => 3,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(data: &[u8]) -> String {
        let d = decode(data);
        assert!(d.complete, "unexpected incomplete decode of {data:02X?}");
        d.text
    }

    #[test]
    fn test_empty() {
        let d = decode(&[]);
        assert_eq!(d.text, "");
        assert!(d.complete);
    }

    #[test]
    fn test_default_state() {
        // GL is kanji, GR is hiragana
        assert_eq!(text_of(&[0x3D, 0x29, 0x45, 0x44]), "秋田");
        assert_eq!(text_of(&[0xA2, 0xA4]), "あい");
    }

    #[test]
    fn test_locking_shifts() {
        // LS1 invokes G1 (alnum) in GL, LS0 goes back to G0 (kanji)
        assert_eq!(
            text_of(&[0x0E, 0x4E, 0x48, 0x4B, 0x0F, 0x41, 0x6D, 0x39, 0x67]),
            "NHK総合"
        );
        // LS2/LS3 via escape
        assert_eq!(text_of(&[0x1B, 0x6E, 0x24, 0x22]), "いあ");
        assert_eq!(text_of(&[0x1B, 0x6F, 0x24, 0x22]), "イア");
        // LS1R..LS3R switch GR
        assert_eq!(text_of(&[0x1B, 0x7E, 0xC1]), "A");
        assert_eq!(text_of(&[0x1B, 0x7D, 0xA4]), "い");
        assert_eq!(text_of(&[0x1B, 0x7C, 0xA4]), "イ");
    }

    #[test]
    fn test_single_shift_scope() {
        // SS2 invokes G2 (hiragana) for exactly one element; the next
        // element falls back to GL (kanji, whose row 4 is also kana)
        assert_eq!(text_of(&[0x19, 0x24, 0x24, 0x22]), "いあ");
        // SS3 invokes G3 (katakana) for exactly one element
        assert_eq!(text_of(&[0x1D, 0x24, 0x24, 0x22]), "イあ");
        // a single shift also applies to a GR element
        assert_eq!(text_of(&[0x1D, 0xA4, 0xA4]), "イい");
    }

    #[test]
    fn test_designations() {
        // 2-byte set into G0 (final 0x39 is an alias of the kanji table)
        assert_eq!(text_of(&[0x1B, 0x24, 0x39, 0x3D, 0x29]), "秋");
        // 2-byte set into G1 then LS1
        assert_eq!(text_of(&[0x1B, 0x24, 0x29, 0x42, 0x0E, 0x45, 0x44]), "田");
        // 1-byte set into G0
        assert_eq!(text_of(&[0x1B, 0x28, 0x4A, 0x61, 0x62]), "ab");
        // 1-byte set into G2, reached through GR
        assert_eq!(text_of(&[0x1B, 0x2A, 0x31, 0xA4]), "イ");
        // half-width katakana
        assert_eq!(text_of(&[0x1B, 0x28, 0x49, 0x21, 0x31]), "｡ｱ");
    }

    #[test]
    fn test_space_follows_invoked_width() {
        // GL kanji: 0x20 is the ideographic space
        assert_eq!(text_of(&[0x20]), "\u{3000}");
        // GL alnum: ASCII space
        assert_eq!(text_of(&[0x0E, 0x20]), " ");
        // GR hiragana (1-byte): 0xA0 is an ASCII space
        assert_eq!(text_of(&[0xA0]), " ");
    }

    #[test]
    fn test_kana_tails() {
        // hiragana/katakana cells past the JIS run
        assert_eq!(text_of(&[0xF7, 0xF8, 0xF9, 0xFA]), "ゝゞー。");
        assert_eq!(text_of(&[0x1B, 0x7C, 0xF7, 0xFE]), "ヽ・");
    }

    #[test]
    fn test_additional_symbols() {
        // ARIB row 90: enclosed broadcast symbols, above the BMP
        assert_eq!(text_of(&[0x7A, 0x5A]), "\u{1F214}");
        assert_eq!(text_of(&[0x7A, 0x72]), "\u{1F226}");
    }

    #[test]
    fn test_macro_expansion() {
        // designate the macro set into G0 and invoke macro 0x60, whose
        // body restores the default SI designations
        let d = decode(&[0x1B, 0x28, 0x20, 0x70, 0x60, 0x3D, 0x29, 0xA4]);
        assert!(d.complete);
        assert_eq!(d.text, "秋い");
        // codes outside 0x60..=0x6F have no predefined body
        let d = decode(&[0x1B, 0x28, 0x20, 0x70, 0x21]);
        assert!(!d.complete);
        assert_eq!(d.text, "");
    }

    #[test]
    fn test_mosaic_and_drcs_flagged() {
        let d = decode(&[0x1B, 0x28, 0x32, 0x41]);
        assert!(!d.complete);
        assert_eq!(d.text, "");
        let d = decode(&[0x1B, 0x28, 0x20, 0x41, 0x41]);
        assert!(!d.complete);
        let d = decode(&[0x1B, 0x24, 0x28, 0x20, 0x41, 0x41, 0x41]);
        assert!(!d.complete);
    }

    #[test]
    fn test_truncation_flagged() {
        // 2-byte element cut short
        let d = decode(&[0x3D]);
        assert!(!d.complete);
        assert_eq!(d.text, "");
        // escape cut short
        let d = decode(&[0x41, 0x6D, 0x1B]);
        assert!(!d.complete);
        assert_eq!(d.text, "総");
        let d = decode(&[0x1B, 0x24]);
        assert!(!d.complete);
    }

    #[test]
    fn test_unassigned_cell_flagged() {
        // JIS row 9 is empty; decoding continues afterwards
        let d = decode(&[0x29, 0x21, 0x3D, 0x29]);
        assert!(!d.complete);
        assert_eq!(d.text, "秋");
    }

    #[test]
    fn test_presentation_controls_flagged() {
        // MSZ/NSZ produce no text but poison completeness
        let d = decode(&[0x89, 0x3D, 0x29]);
        assert!(!d.complete);
        assert_eq!(d.text, "秋");
        // COL with an 0x20-prefixed parameter
        let d = decode(&[0x90, 0x20, 0x41, 0x3D, 0x29]);
        assert!(!d.complete);
        assert_eq!(d.text, "秋");
    }

    #[test]
    fn test_other_c0_ignored() {
        let d = decode(&[0x0A, 0x0D, 0x3D, 0x29]);
        assert!(d.complete);
        assert_eq!(d.text, "秋");
    }
}
