use image::GrayImage;
use rqrr::PreparedImage;

use crate::common::error::{RainbowError, RainbowResult};

// Symbol decoder
//------------------------------------------------------------------------------

/// Decodes one monochrome symbol image back into its chunk bytes.
///
/// Fails with [`RainbowError::SymbolDecodeFailure`] if no symbol is found or
/// the symbol is unreadable, e.g. after threshold-induced corruption. Failure
/// is never reported as empty bytes; an empty chunk decodes to an empty
/// vector only when the symbol itself carries no payload.
pub fn decode_symbol(plane: &GrayImage) -> RainbowResult<Vec<u8>> {
    let mut prepared = PreparedImage::prepare(plane.clone());
    let grids = prepared.detect_grids();

    let grid = grids
        .first()
        .ok_or_else(|| RainbowError::SymbolDecodeFailure("no symbol found".into()))?;

    let mut chunk = Vec::new();
    grid.decode_to(&mut chunk)
        .map_err(|e| RainbowError::SymbolDecodeFailure(e.to_string()))?;

    Ok(chunk)
}
