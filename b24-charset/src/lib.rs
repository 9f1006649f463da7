//! ARIB STD-B24 8-bit character code decoder and encoder.
//!
//! ISDB service information (EIT, SDT and friends) carries its strings
//! in the ARIB STD-B24 8-bit code, an ISO/IEC 2022 derivative with four
//! graphic-set registers (G0..G3), locking and single shifts, and
//! broadcast-specific tables: JIS X 0208 kanji extended with the ARIB
//! additional symbols, kana, half-width katakana, mosaics and DRCS.
//! This crate converts such byte streams to and from Unicode text.
//!
//! ```
//! let bytes = [
//!     0x0E, 0x4E, 0x48, 0x4B, 0x0F, 0x41, 0x6D, 0x39, 0x67,
//!     0x0E, 0x31, 0xFE, 0x0F, 0x3D, 0x29, 0x45, 0x44,
//! ];
//! let decoded = b24_charset::decode(&bytes);
//! assert_eq!(decoded.text, "NHK総合1・秋田");
//! assert!(decoded.complete);
//!
//! let encoded = b24_charset::encode(&decoded.text).unwrap();
//! assert_eq!(b24_charset::decode(&encoded).text, decoded.text);
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod sets;
mod tables;

pub use decode::{decode, Decoded};
pub use encode::{can_encode, encode};
pub use error::EncodeError;
pub use sets::{CodeWidth, GraphicSet};
