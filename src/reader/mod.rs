mod decompose;

pub(crate) use decompose::decompose;

use image::RgbImage;

use crate::common::{
    codec::decode_symbol,
    error::{RainbowError, RainbowResult},
    metadata::{Channel, Config, Manifest},
};

// Reader
//------------------------------------------------------------------------------

/// Decodes composite images back into payload bytes.
///
/// One composite image is one packet; reconstructing a payload means reading
/// every artifact in ascending packet index order and concatenating the
/// results, which [`RainbowReader::read_images`] and
/// [`RainbowReader::read_payload`] do for ordered inputs.
#[derive(Debug, Clone)]
pub struct RainbowReader {
    cfg: Config,
}

impl Default for RainbowReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowReader {
    pub fn new() -> Self {
        Self { cfg: Config::default() }
    }

    pub fn with_config(cfg: Config) -> RainbowResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn threshold(&mut self, threshold: u8) -> &mut Self {
        self.cfg.threshold = threshold;
        self
    }

    pub fn verbose(&mut self, verbose: bool) -> &mut Self {
        self.cfg.verbose = verbose;
        self
    }

    /// Decodes one composite image, the packet at index `packet`.
    ///
    /// The three channel planes are recovered by thresholding, decoded in
    /// channel order and concatenated. If any channel's symbol fails to
    /// decode the whole packet fails with
    /// [`RainbowError::PartialPacketDecode`] naming the failed channel(s);
    /// a failure is never passed off as an empty chunk.
    pub fn read_packet(&self, composite: &RgbImage, packet: usize) -> RainbowResult<Vec<u8>> {
        if self.cfg.verbose {
            println!("Reading packet {packet}...");
        }

        let planes = decompose(composite, self.cfg.threshold);

        let mut bytes = Vec::new();
        let mut failed = Vec::new();
        for ch in Channel::ALL {
            match decode_symbol(&planes[ch.index()]) {
                Ok(chunk) => {
                    if self.cfg.verbose {
                        println!("Decoded {ch} chunk of {} bytes...", chunk.len());
                    }
                    bytes.extend(chunk);
                }
                Err(e) => {
                    if self.cfg.verbose {
                        println!("Failed to decode {ch} channel: {e}");
                    }
                    failed.push(ch);
                }
            }
        }

        if !failed.is_empty() {
            return Err(RainbowError::PartialPacketDecode { packet, failed });
        }

        Ok(bytes)
    }

    /// Decodes an ordered sequence of composite images into the payload.
    pub fn read_images(&self, composites: &[RgbImage]) -> RainbowResult<Vec<u8>> {
        let mut payload = Vec::new();
        for (i, img) in composites.iter().enumerate() {
            payload.extend(self.read_packet(img, i)?);
        }
        Ok(payload)
    }

    /// Loads and decodes every artifact of a manifest in packet order.
    pub fn read_payload(&self, manifest: &Manifest) -> RainbowResult<Vec<u8>> {
        let mut payload = Vec::new();
        for (i, path) in manifest.iter().enumerate() {
            if self.cfg.verbose {
                println!("Reading {}...", path.display());
            }
            let img = image::open(path)?.to_rgb8();
            payload.extend(self.read_packet(&img, i)?);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod reader_tests {
    use image::Rgb;

    use super::*;
    use crate::builder::RainbowBuilder;

    #[test]
    fn test_with_config_rejects_alpha() {
        use crate::common::metadata::Palette;

        let cfg = Config { palette: Palette::Rgba, ..Config::default() };
        assert_eq!(RainbowReader::with_config(cfg).unwrap_err(), RainbowError::UnsupportedConfiguration);
    }

    #[test]
    fn test_read_packet_roundtrip() {
        let data = b"Hello, rainbow!";
        let rainbow = RainbowBuilder::new(data).build().unwrap();
        assert_eq!(rainbow.packet_count(), 1);

        let decoded = RainbowReader::new().read_packet(&rainbow.images()[0], 0).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_corrupted_channel_reported() {
        let rainbow = RainbowBuilder::new(b"channel failure").build().unwrap();
        let mut composite = rainbow.images()[0].clone();

        // Blank out the green component; its plane no longer holds a symbol.
        for p in composite.pixels_mut() {
            *p = Rgb([p.0[0], 0, p.0[2]]);
        }

        let err = RainbowReader::new().read_packet(&composite, 7).unwrap_err();
        assert_eq!(
            err,
            RainbowError::PartialPacketDecode { packet: 7, failed: vec![Channel::Green] }
        );
    }

    #[test]
    fn test_read_images_concatenates_in_order() {
        let cfg = Config::default();
        let payload: Vec<u8> = (0..cfg.max_packet_size() + 10).map(|i| (i % 256) as u8).collect();

        let rainbow = RainbowBuilder::new(&payload).build().unwrap();
        assert_eq!(rainbow.packet_count(), 2);

        let decoded = RainbowReader::new().read_images(rainbow.images()).unwrap();
        assert_eq!(decoded, payload);
    }
}
