//! Catalog products (productos) and the product create form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::form::FormRecord;
use super::id::{Entity, EntityId};
use super::lenient;

/// A catalog entry as served by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// API-assigned identifier.
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Image URI.
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
}

impl Entity for Product {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// The product create form, submitted to `POST /api/products` as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl FormRecord for ProductForm {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("price", self.price.as_str()),
            ("image", self.image.as_str()),
            ("category", self.category.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_decodes_string_price() {
        let product: Product = serde_json::from_value(json!({
            "id": 42,
            "name": "Lamp",
            "price": "19.90",
            "description": "Desk lamp",
            "image": "https://img.example/lamp.png",
            "category": "home"
        }))
        .expect("product should decode");

        assert_eq!(product.id, EntityId::Number(42));
        assert_eq!(product.price, Decimal::new(1990, 2));
        assert_eq!(product.category, "home");
    }

    #[test]
    fn test_product_tolerates_loose_records() {
        let product: Product = serde_json::from_value(json!({
            "_id": "65a1",
            "name": "Mug",
            "price": "",
            "description": null,
            "category": 3
        }))
        .expect("loose product should decode");

        assert_eq!(product.id, EntityId::Text("65a1".to_string()));
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.description, "");
        assert_eq!(product.category, "3");
        assert_eq!(product.image, "");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_value::<Product>(json!({"name": "Lamp"})).is_err());
    }

    #[test]
    fn test_form_required_fields() {
        let form = ProductForm {
            name: "Lamp".to_string(),
            price: "19.9".to_string(),
            description: String::new(),
            image: "https://img.example/lamp.png".to_string(),
            category: "home".to_string(),
        };
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), vec!["description"]);
        assert!(ProductForm::default().is_blank());
        assert_eq!(ProductForm::default().fields().len(), 5);
    }
}
