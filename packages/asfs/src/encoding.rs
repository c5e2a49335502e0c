//! Text encodings for reading files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::str::FromStr;

use base64::Engine;

use crate::error::AsfsError;

/// How file bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8; invalid sequences become U+FFFD.
    Utf8,
    /// Standard base64 alphabet with padding.
    Base64,
    /// Lowercase hexadecimal.
    Hex,
    /// One char per byte (ISO-8859-1).
    Latin1,
    /// 7-bit ASCII; the high bit of each byte is dropped.
    Ascii,
    /// UTF-16 little endian; a trailing odd byte is ignored and unpaired
    /// surrogates become U+FFFD.
    Utf16Le,
}

impl Encoding {
    /// Render `bytes` as text in this encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
            Self::Hex => hex::encode(bytes),
            Self::Latin1 => bytes.iter().copied().map(char::from).collect(),
            Self::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Self::Utf16Le => {
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect()
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = AsfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            "latin1" | "binary" => Ok(Self::Latin1),
            "ascii" => Ok(Self::Ascii),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Self::Utf16Le),
            _ => Err(AsfsError::UnknownEncoding(s.to_string())),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf8"),
            Self::Base64 => write!(f, "base64"),
            Self::Hex => write!(f, "hex"),
            Self::Latin1 => write!(f, "latin1"),
            Self::Ascii => write!(f, "ascii"),
            Self::Utf16Le => write!(f, "utf16le"),
        }
    }
}
