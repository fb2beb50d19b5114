//! # rainbowqr
//!
//! A Rust library for multiplexing byte streams across the red, green and blue
//! channels of composite QR images. Each packet of data is split three ways,
//! encoded as three independent monochrome QR symbols, and merged pixel for
//! pixel into a single color raster with 3x the per-image storage capacity of
//! a plain QR code.
//!
//! ## Features
//!
//! - **Payload packetization**: Arbitrary byte streams split into fixed-size packets, one composite image per packet
//! - **Channel multiplexing**: Three QR symbols per packet, one per color channel, merged by per-pixel thresholding
//! - **Explicit failure reporting**: A channel that fails to decode names itself and its packet instead of vanishing
//! - **Parallel encoding**: Packets are independent and can be encoded concurrently without changing the output
//!
//! ## How It Works
//!
//! Encoding splits the payload into packets of at most `symbol capacity x 3`
//! bytes, splits each packet into three near-equal chunks in red, green, blue
//! order, encodes each chunk as a monochrome QR symbol at a fixed version and
//! EC level, and merges the three symbols into one composite image: a pixel
//! component is 255 where the matching symbol's pixel is lit, 0 otherwise.
//!
//! Decoding runs the same pipe backwards. Each component of every pixel is
//! thresholded independently to reconstruct the three symbol planes, each
//! plane is decoded with a standard QR reader, and the three chunks are
//! concatenated in channel order. Packets are reassembled in index order.
//!
//! ## Quick Start
//!
//! ```rust
//! use rainbowqr::{RainbowBuilder, RainbowReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rainbow = RainbowBuilder::new(b"Hello, World!").build()?;
//!
//! let payload = RainbowReader::new().read_images(rainbow.images())?;
//! assert_eq!(payload, b"Hello, World!");
//! # Ok(())
//! # }
//! ```
//!
//! ## Full Configuration
//!
//! ```rust
//! use rainbowqr::{ECLevel, Palette, RainbowBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = "Hello, World!";
//! let rainbow = RainbowBuilder::new(data.as_bytes())
//!     .version(Version::Normal(4))  // QR version (size) of every symbol - defaults to Normal(4)
//!     .ec_level(ECLevel::L)         // Error correction level - defaults to ECLevel::L
//!     .palette(Palette::Rgb)        // Channel layout - defaults to Palette::Rgb
//!     .threshold(100)               // Intensity cutoff for a lit component - defaults to 100
//!     .build()?;
//!
//! assert_eq!(rainbow.packet_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Persisting and Reading Back
//!
//! Composite images are written one per packet as `P<index>.png`; the
//! returned manifest is the ordered artifact list a reader needs. Nothing in
//! the artifacts themselves records how many packets make up a payload, so
//! the manifest must travel with them out of band.
//!
//! ```rust,no_run
//! use rainbowqr::{RainbowBuilder, RainbowReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rainbow = RainbowBuilder::new(b"persisted payload").build()?;
//! let manifest = rainbow.save("out")?;
//!
//! let payload = RainbowReader::new().read_payload(&manifest)?;
//! assert_eq!(payload, b"persisted payload");
//! # Ok(())
//! # }
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod reader;

pub use builder::{Rainbow, RainbowBuilder};
pub use common::error::{RainbowError, RainbowResult};
pub use common::metadata::{Channel, Config, ECLevel, Manifest, Palette, Version, COLOR_THRESHOLD};
pub use reader::RainbowReader;
