use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Signature,
    Format(String),
    Compression(String),
    PaletteIndex { index: usize, palette_len: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature => write!(f, "input does not start with the PNG signature"),
            Self::Format(msg) => write!(f, "malformed PNG: {msg}"),
            Self::Compression(msg) => write!(f, "failed to decompress image data: {msg}"),
            Self::PaletteIndex { index, palette_len } => write!(
                f,
                "palette index {index} is out of range ({palette_len} palette entries)"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
