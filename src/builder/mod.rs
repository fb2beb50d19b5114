mod compose;
mod packet;

pub(crate) use compose::compose;
pub(crate) use packet::{split_channels, split_packets};

use std::path::Path;

use image::RgbImage;
use rayon::prelude::*;

use crate::common::{
    codec::encode_symbol,
    error::{RainbowError, RainbowResult},
    metadata::{Config, ECLevel, Manifest, Palette, Version},
};

pub struct RainbowBuilder<'a> {
    data: &'a [u8],
    cfg: Config,
}

impl<'a> RainbowBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cfg: Config::default() }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.cfg.version = version;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.cfg.ec_level = ec_level;
        self
    }

    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.cfg.palette = palette;
        self
    }

    pub fn threshold(&mut self, threshold: u8) -> &mut Self {
        self.cfg.threshold = threshold;
        self
    }

    pub fn module_size(&mut self, module_size: u32) -> &mut Self {
        self.cfg.module_size = module_size;
        self
    }

    pub fn verbose(&mut self, verbose: bool) -> &mut Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.cfg.parallel = parallel;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {:?}, Ec level: {:?}, Palette: {:?} }}",
            *self.cfg.version, self.cfg.ec_level, self.cfg.palette
        )
    }
}


impl RainbowBuilder<'_> {
    pub fn build(&self) -> RainbowResult<Rainbow> {
        self.cfg.validate()?;
        if self.data.is_empty() {
            return Err(RainbowError::EmptyData);
        }

        let cfg = self.cfg;
        if cfg.verbose {
            println!("\nGenerating rainbow QR {}...", self.metadata());
        }

        let packets = split_packets(self.data, cfg.max_packet_size());
        if cfg.verbose {
            println!("Total data of {} bytes split into {} packet(s)...", self.data.len(), packets.len());
        }

        let results: Vec<_> = if cfg.parallel {
            packets.par_iter().map(|p| Self::encode_packet(p, &cfg)).collect()
        } else {
            packets.iter().map(|p| Self::encode_packet(p, &cfg)).collect()
        };
        let composites = results.into_iter().collect::<RainbowResult<Vec<_>>>()?;

        if cfg.verbose {
            println!("Each packet merged into a composite image.");
        }

        Ok(Rainbow { composites, cfg })
    }

    /// Encodes one packet: three chunks, three symbols, one composite.
    fn encode_packet(packet: &[u8], cfg: &Config) -> RainbowResult<RgbImage> {
        let chunks = split_channels(packet);
        if cfg.verbose {
            println!(
                "Packet of {} bytes split into chunks of {}, {} and {} bytes...",
                packet.len(),
                chunks[0].len(),
                chunks[1].len(),
                chunks[2].len()
            );
        }

        let planes =
            [encode_symbol(chunks[0], cfg)?, encode_symbol(chunks[1], cfg)?, encode_symbol(chunks[2], cfg)?];

        compose(&planes, cfg.threshold)
    }
}

// Rainbow
//------------------------------------------------------------------------------

/// The encoded form of one payload: an ordered sequence of composite images,
/// one per packet. The sequence as a whole is the encoding; a consumer must
/// process every image in index order to recover the payload.
#[derive(Debug, Clone)]
pub struct Rainbow {
    composites: Vec<RgbImage>,
    cfg: Config,
}

impl Rainbow {
    /// Composite images in packet index order.
    pub fn images(&self) -> &[RgbImage] {
        &self.composites
    }

    pub fn into_images(self) -> Vec<RgbImage> {
        self.composites
    }

    pub fn packet_count(&self) -> usize {
        self.composites.len()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Writes one `P<index>.png` per packet into `dir` and returns the
    /// ordered artifact manifest.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> RainbowResult<Manifest> {
        let dir = dir.as_ref();
        let mut artifacts = Vec::with_capacity(self.composites.len());

        for (i, img) in self.composites.iter().enumerate() {
            let path = dir.join(format!("P{i}.png"));
            if self.cfg.verbose {
                println!("Writing {}...", path.display());
            }
            img.save(&path)?;
            artifacts.push(path);
        }

        Ok(Manifest::new(artifacts))
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_empty_data_rejected() {
        assert_eq!(RainbowBuilder::new(b"").build().unwrap_err(), RainbowError::EmptyData);
    }

    #[test]
    fn test_alpha_palette_rejected() {
        let err = RainbowBuilder::new(b"data").palette(Palette::Rgba).build().unwrap_err();
        assert_eq!(err, RainbowError::UnsupportedConfiguration);
    }

    #[test]
    fn test_invalid_version_rejected() {
        let err = RainbowBuilder::new(b"data").version(Version::Normal(0)).build().unwrap_err();
        assert_eq!(err, RainbowError::InvalidVersion);
    }

    #[test]
    fn test_packet_count_follows_capacity() {
        let cfg = Config::default();
        let payload = vec![0xA5u8; cfg.max_packet_size() * 2 + 1];
        let rainbow = RainbowBuilder::new(&payload).build().unwrap();
        assert_eq!(rainbow.packet_count(), 3);
    }

    #[test]
    fn test_composite_components_are_saturated() {
        let rainbow = RainbowBuilder::new(b"saturation check").build().unwrap();
        let img = &rainbow.images()[0];
        assert!(img.pixels().all(|p| p.0.iter().all(|&c| c == 0 || c == 255)));
    }

    #[test]
    fn test_parallel_encode_matches_sequential() {
        let cfg = Config::default();
        let payload: Vec<u8> = (0..cfg.max_packet_size() * 3).map(|i| (i % 251) as u8).collect();

        let sequential = RainbowBuilder::new(&payload).build().unwrap();
        let parallel = RainbowBuilder::new(&payload).parallel(true).build().unwrap();

        assert_eq!(sequential.packet_count(), parallel.packet_count());
        for (a, b) in sequential.images().iter().zip(parallel.images()) {
            assert_eq!(a.as_raw(), b.as_raw());
        }
    }
}
