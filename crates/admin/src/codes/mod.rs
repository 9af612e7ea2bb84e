//! Display symbols for orders: QR codes and CODE128 barcodes.
//!
//! Symbols are rendered to SVG and embedded in pages as base64 data URIs, so
//! nothing is written to disk or served separately.

mod barcode;
mod qr;

pub use barcode::{BARCODE_HEIGHT, BARCODE_MODULE_WIDTH, render_code128};
pub use qr::{QR_SIZE, render_qr};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Errors that can occur while encoding a symbol.
#[derive(Debug, Error)]
pub enum CodeError {
    /// Payload does not fit in a QR symbol.
    #[error("QR encoding failed: {0}")]
    Qr(String),

    /// Payload cannot be expressed in CODE128.
    #[error("Barcode encoding failed: {0}")]
    Barcode(String),
}

/// Symbology of a rendered symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// 2D matrix code.
    Qr,
    /// 1D linear code, CODE128 symbology.
    Code128,
}

/// A rendered symbol ready to be embedded in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    kind: SymbolKind,
    payload: String,
    svg: String,
    data_uri: String,
    width: u32,
    height: u32,
}

impl Symbol {
    pub(crate) fn new(kind: SymbolKind, payload: String, svg: String, width: u32, height: u32) -> Self {
        let data_uri = format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()));
        Self {
            kind,
            payload,
            svg,
            data_uri,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// The text encoded in the symbol.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Raw SVG document.
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// `data:` URI usable as an `<img src>`.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Display width in CSS pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Display height in CSS pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_round_trips_svg() {
        let symbol = Symbol::new(
            SymbolKind::Qr,
            "x".to_string(),
            "<svg></svg>".to_string(),
            1,
            1,
        );
        let encoded = symbol
            .data_uri()
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data uri prefix");
        let decoded = STANDARD.decode(encoded).expect("valid base64");
        assert_eq!(decoded, b"<svg></svg>");
    }
}
