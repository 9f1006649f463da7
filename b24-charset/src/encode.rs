//! Encoder: Unicode text to an ARIB STD-B24 8-bit code byte stream.
//!
//! The encoder never redesignates a register. It relies on the default
//! designations only: kanji-set elements go out through GL as plain
//! byte pairs, one-byte set elements through GR with the high bit set,
//! switching the GR invocation with a locking shift when the set
//! changes. Every output stream therefore decodes back to its input
//! with the same default initial state.

use std::collections::HashMap;
use std::sync::OnceLock;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::EncodeError;
use crate::sets::GraphicSet;

/// A character's cell in one of the graphic sets the encoder uses.
#[derive(Debug, Clone, Copy)]
enum Coded {
    /// Two-byte kanji element, stored as the raw GL byte pair.
    Kanji(u8, u8),
    /// One-byte element, stored as the 7-bit code.
    Single(GraphicSet, u8),
}

/// Reverse index over the encodable sets, built once per process.
///
/// Insertion order fixes the set priority for characters present in
/// more than one table: kanji, then alphanumeric, hiragana, katakana.
fn index() -> &'static HashMap<char, Coded> {
    static INDEX: OnceLock<HashMap<char, Coded>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for c1 in 0x21..=0x7Eu8 {
            for c2 in 0x21..=0x7Eu8 {
                if let Some(ch) = GraphicSet::Kanji.lookup(c1, c2) {
                    map.entry(ch).or_insert(Coded::Kanji(c1, c2));
                }
            }
        }
        for set in [GraphicSet::Alnum, GraphicSet::Hiragana, GraphicSet::Katakana] {
            for code in 0x21..=0x7Eu8 {
                if let Some(ch) = set.lookup(code, 0) {
                    map.entry(ch).or_insert(Coded::Single(set, code));
                }
            }
        }
        map
    })
}

/// Locking shift that invokes the register holding `set` in GR.
fn gr_shift(set: GraphicSet) -> u8 {
    match set {
        GraphicSet::Alnum => 0x7E,    // LS1R
        GraphicSet::Hiragana => 0x7D, // LS2R
        _ => 0x7C,                    // LS3R
    }
}

/// Encode `text` into an ARIB STD-B24 8-bit code byte stream.
///
/// The output is minimal in the sense that a locking shift is emitted
/// only when the GR set actually changes. U+0020 is always emitted as
/// the GR space `0xA0`, which decodes to an ASCII space regardless of
/// the surrounding GL state.
pub fn encode(text: &str) -> Result<Bytes, EncodeError> {
    let map = index();
    let mut out = BytesMut::with_capacity(text.len() * 2);
    // G2 (hiragana) is invoked in GR initially
    let mut gr = GraphicSet::Hiragana;
    for (index, ch) in text.chars().enumerate() {
        if ch == ' ' {
            out.put_u8(0xA0);
            continue;
        }
        match map.get(&ch) {
            Some(&Coded::Kanji(c1, c2)) => {
                out.put_u8(c1);
                out.put_u8(c2);
            }
            Some(&Coded::Single(set, code)) => {
                if set != gr {
                    out.put_u8(0x1B);
                    out.put_u8(gr_shift(set));
                    gr = set;
                }
                out.put_u8(code | 0x80);
            }
            None => {
                return Err(EncodeError::Unencodable {
                    index,
                    codepoint: u32::from(ch),
                })
            }
        }
    }
    Ok(out.freeze())
}

/// Whether every character of `text` is representable.
///
/// Agrees exactly with `encode(text).is_ok()` without allocating.
pub fn can_encode(text: &str) -> bool {
    let map = index();
    text.chars().all(|ch| ch == ' ' || map.contains_key(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn test_empty() {
        assert_eq!(encode("").unwrap(), Bytes::new());
        assert!(can_encode(""));
    }

    #[test]
    fn test_kanji_through_gl() {
        assert_eq!(encode("秋田").unwrap().as_ref(), &[0x3D, 0x29, 0x45, 0x44]);
    }

    #[test]
    fn test_gr_shift_only_on_change() {
        // alnum needs LS1R once, the following letters reuse it
        assert_eq!(
            encode("NHK").unwrap().as_ref(),
            &[0x1B, 0x7E, 0xCE, 0xC8, 0xCB]
        );
        // and GL kanji stays reachable without shifting back
        assert_eq!(
            encode("NHK総").unwrap().as_ref(),
            &[0x1B, 0x7E, 0xCE, 0xC8, 0xCB, 0x41, 0x6D]
        );
    }

    #[test]
    fn test_kana_through_kanji_rows() {
        // the kanji plane's rows 4 and 5 cover the kana, and kanji has
        // priority, so no GR switch to the kana sets ever happens
        assert_eq!(encode("あい").unwrap().as_ref(), &[0x24, 0x22, 0x24, 0x24]);
        assert_eq!(encode("カキ").unwrap().as_ref(), &[0x25, 0x2B, 0x25, 0x2D]);
    }

    #[test]
    fn test_space_is_gr_space() {
        // U+0020 must stay width-neutral against any GL designation
        assert_eq!(encode("a b").unwrap().as_ref(), &[0x1B, 0x7E, 0xE1, 0xA0, 0xE2]);
        // the ideographic space is kanji cell 1-1
        assert_eq!(encode("\u{3000}").unwrap().as_ref(), &[0x21, 0x21]);
    }

    #[test]
    fn test_kanji_priority_over_kana_tails() {
        // ー and ・ live in both the kana tails and the kanji plane; the
        // kanji cell wins
        assert_eq!(encode("ー").unwrap().as_ref(), &[0x21, 0x3C]);
        assert_eq!(encode("・").unwrap().as_ref(), &[0x21, 0x26]);
    }

    #[test]
    fn test_supplementary_round_trip() {
        for text in ["\u{1F214}", "れ\u{1F211}あ", "\u{1F226}"] {
            let bytes = encode(text).unwrap();
            let d = decode(&bytes);
            assert!(d.complete);
            assert_eq!(d.text, text);
        }
    }

    #[test]
    fn test_unencodable() {
        let err = encode("ab\u{00E1}c").unwrap_err();
        assert_eq!(
            err,
            EncodeError::Unencodable {
                index: 2,
                codepoint: 0xE1
            }
        );
        assert!(!can_encode("ab\u{00E1}c"));
        assert!(!can_encode("\u{10FFFF}"));
    }

    #[test]
    fn test_can_encode_agrees_with_encode() {
        for text in ["", "alpha num 09", "NHK総合1・秋田", "caf\u{00E9}", "ｱｲｳ", "♪"] {
            assert_eq!(can_encode(text), encode(text).is_ok(), "{text:?}");
        }
    }
}
