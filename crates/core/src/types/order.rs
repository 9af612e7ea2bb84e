//! Orders (pedidos) and the order create form.
//!
//! Wire field names follow the store API, which uses Spanish names for the
//! customer fields (`direccion`, `nombre`, `producto`, `telefono`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::form::FormRecord;
use super::id::{Entity, EntityId};
use super::lenient;

/// A purchase record as served by `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// API-assigned identifier.
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// Number of units ordered.
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub quantity: u32,
    /// Price of a single unit.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub unit_price: Decimal,
    /// Shipping address.
    #[serde(rename = "direccion", default, deserialize_with = "lenient::text")]
    pub address: String,
    /// Customer name.
    #[serde(rename = "nombre", default, deserialize_with = "lenient::text")]
    pub customer_name: String,
    /// Customer email.
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    /// Product reference.
    #[serde(rename = "producto", default, deserialize_with = "lenient::text")]
    pub product: String,
    /// Customer phone. Not collected by the order form, so only present when
    /// the record was created through another channel.
    #[serde(
        rename = "telefono",
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
}

impl Order {
    /// Text encoded into the order's QR symbol: `"name, address, phone"`.
    ///
    /// A missing phone is rendered as an empty token.
    #[must_use]
    pub fn qr_payload(&self) -> String {
        format!(
            "{}, {}, {}",
            self.customer_name,
            self.address,
            self.phone.as_deref().unwrap_or_default()
        )
    }

    /// Text encoded into the order's barcode: the identifier.
    #[must_use]
    pub fn barcode_payload(&self) -> String {
        self.id.to_string()
    }
}

impl Entity for Order {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// The order create form, submitted to `POST /api/create-order` as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit_price: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "nombre", default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "producto", default)]
    pub product: String,
}

impl FormRecord for OrderForm {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("quantity", self.quantity.as_str()),
            ("unit_price", self.unit_price.as_str()),
            ("direccion", self.address.as_str()),
            ("nombre", self.customer_name.as_str()),
            ("email", self.email.as_str()),
            ("producto", self.product.as_str()),
        ]
    }
}
