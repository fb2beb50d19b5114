use image::{GrayImage, Luma};
use qrcode::QrCode;

use crate::common::error::{RainbowError, RainbowResult};
use crate::common::metadata::Config;

// Symbol encoder
//------------------------------------------------------------------------------

/// Encodes one channel chunk into a monochrome symbol image.
///
/// The symbol version and EC level come from the config, so every chunk of a
/// run renders at identical pixel dimensions regardless of its length. A
/// zero-length chunk is valid and produces a minimal symbol.
pub fn encode_symbol(chunk: &[u8], cfg: &Config) -> RainbowResult<GrayImage> {
    let code = QrCode::with_version(chunk, cfg.version.into(), cfg.ec_level.into())
        .map_err(|e| RainbowError::SymbolEncode(e.to_string()))?;

    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(cfg.module_size, cfg.module_size)
        .build();

    debug_assert_eq!(img.width(), cfg.symbol_px(), "Unexpected symbol render width");

    Ok(img)
}
