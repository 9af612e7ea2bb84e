//! QR symbol rendering.

use qrcode::QrCode;
use qrcode::render::svg;

use super::{CodeError, Symbol, SymbolKind};

/// Edge length of the QR symbol, in CSS pixels.
pub const QR_SIZE: u32 = 128;

/// Render `payload` as a square QR symbol of [`QR_SIZE`] units.
///
/// # Errors
///
/// Returns `CodeError::Qr` if the payload is too long for any QR version.
pub fn render_qr(payload: &str) -> Result<Symbol, CodeError> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| CodeError::Qr(e.to_string()))?;

    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(Symbol::new(
        SymbolKind::Qr,
        payload.to_owned(),
        image,
        QR_SIZE,
        QR_SIZE,
    ))
}
