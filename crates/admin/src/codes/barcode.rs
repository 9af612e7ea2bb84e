//! CODE128 barcode rendering.

use barcoders::generators::svg::SVG;
use barcoders::sym::code128::Code128;

use super::{CodeError, Symbol, SymbolKind};

/// Width of the narrowest bar, in CSS pixels.
pub const BARCODE_MODULE_WIDTH: u32 = 2;

/// Bar height, in CSS pixels.
pub const BARCODE_HEIGHT: u32 = 50;

/// Character set B prefix: printable ASCII.
const CHARSET_B: char = 'Ɓ';

/// Render `payload` as a CODE128 barcode.
///
/// # Errors
///
/// Returns `CodeError::Barcode` if the payload is empty or contains
/// characters outside printable ASCII.
pub fn render_code128(payload: &str) -> Result<Symbol, CodeError> {
    if payload.is_empty() {
        return Err(CodeError::Barcode("empty payload".to_string()));
    }

    let barcode = Code128::new(format!("{CHARSET_B}{payload}"))
        .map_err(|e| CodeError::Barcode(e.to_string()))?;
    let modules = barcode.encode();

    let generator = SVG {
        xdim: BARCODE_MODULE_WIDTH,
        ..SVG::new(BARCODE_HEIGHT)
    };
    let image = generator
        .generate(&modules[..])
        .map_err(|e| CodeError::Barcode(e.to_string()))?;

    let width = u32::try_from(modules.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(BARCODE_MODULE_WIDTH);

    Ok(Symbol::new(
        SymbolKind::Code128,
        payload.to_owned(),
        image,
        width,
        BARCODE_HEIGHT,
    ))
}
