use std::fmt::{Debug, Display, Error, Formatter};

use crate::common::metadata::Channel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RainbowError {
    // Configuration & encoding
    EmptyData,
    InvalidVersion,
    InvalidColorTag,
    UnsupportedConfiguration,
    SymbolEncode(String),
    DimensionMismatch { channel: Channel, expected: (u32, u32), actual: (u32, u32) },

    // Decoding
    SymbolDecodeFailure(String),
    PartialPacketDecode { packet: usize, failed: Vec<Channel> },

    // Orchestration boundary
    Image(String),
}

impl Display for RainbowError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Self::EmptyData => f.write_str("Empty data"),
            Self::InvalidVersion => f.write_str("Invalid version"),
            Self::InvalidColorTag => f.write_str("Color must be one of red, green, blue"),
            Self::UnsupportedConfiguration => {
                f.write_str("Transparency channel encoding is not supported")
            }
            Self::SymbolEncode(msg) => write!(f, "Symbol generation failed: {msg}"),
            Self::DimensionMismatch { channel, expected, actual } => write!(
                f,
                "Dimension mismatch: {channel} symbol is {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::SymbolDecodeFailure(msg) => write!(f, "Could not decode symbol: {msg}"),
            Self::PartialPacketDecode { packet, failed } => {
                let names: Vec<_> = failed.iter().map(|c| c.name()).collect();
                write!(f, "Packet {packet} decode failed on channel(s): {}", names.join(", "))
            }
            Self::Image(msg) => write!(f, "Image error: {msg}"),
        }
    }
}

impl std::error::Error for RainbowError {}

impl From<image::ImageError> for RainbowError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

pub type RainbowResult<T> = Result<T, RainbowError>;

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RainbowError::PartialPacketDecode {
            packet: 3,
            failed: vec![Channel::Green, Channel::Blue],
        };
        assert_eq!(err.to_string(), "Packet 3 decode failed on channel(s): green, blue");

        let err = RainbowError::DimensionMismatch {
            channel: Channel::Blue,
            expected: (264, 264),
            actual: (232, 232),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: blue symbol is 232x232, expected 264x264"
        );
    }
}
