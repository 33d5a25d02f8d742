//! Product records.

use super::pipeline::numeric_or_zero;
use fake::Dummy;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Suffix appended to the name of copied and duplicated products.
pub const COPY_SUFFIX: &str = " (Copia)";

/// Maximum number of characters accepted in a product description.
pub const MAX_DESCRIPTION_LENGTH: usize = 350;

/// Identifies a product within a store.
///
#[derive(
    Clone, Copy, Debug, Default, Dummy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defines product data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(rename = "codigo", deserialize_with = "deserialize_code")]
    pub code: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "cantidad", default, deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(rename = "creacion", default)]
    pub created_at: String, // ISO 8601, UTC
}

/// User-editable part of a product, as produced by the form.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct ProductDraft {
    pub code: u64,
    pub name: String,
    pub description: String,
    pub quantity: u32,
}

impl Product {
    /// Build a product from a draft and the store-assigned identity.
    ///
    pub fn from_draft(id: ProductId, created_at: String, draft: ProductDraft) -> Self {
        Product {
            id,
            code: draft.code,
            name: draft.name,
            description: draft.description,
            quantity: draft.quantity,
            created_at,
        }
    }

    /// Return the editable fields of this product.
    ///
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            code: self.code,
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
        }
    }

    /// Name given to copies of this product.
    ///
    pub fn copy_name(&self) -> String {
        format!("{}{}", self.name, COPY_SUFFIX)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Integer(n) if n >= 0 => Ok(n as u64),
        RawNumber::Text(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("product code out of range: {}", s))),
        _ => Err(serde::de::Error::custom("product code must be a non-negative integer")),
    }
}

/// Quantities coming from files are coerced like the stock sort does:
/// anything that is not a number counts as zero.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawNumber::deserialize(deserializer)? {
        RawNumber::Integer(n) => n as f64,
        RawNumber::Float(f) => f,
        RawNumber::Text(s) => numeric_or_zero(&s),
    };
    if value.is_finite() && value > 0.0 {
        Ok(value.min(u32::MAX as f64) as u32)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn from_draft_keeps_identity() {
        let draft = Faker.fake::<ProductDraft>();
        let product = Product::from_draft(
            ProductId(7),
            "2024-01-01T00:00:00.000Z".to_string(),
            draft.clone(),
        );
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(product.draft(), draft);
    }

    #[test]
    fn copy_name_appends_suffix() {
        let product = Product {
            name: "Laptop".to_string(),
            ..Faker.fake::<Product>()
        };
        assert_eq!(product.copy_name(), "Laptop (Copia)");
    }

    #[test]
    fn deserializes_spanish_field_names() {
        let yaml = "id: 3\ncodigo: \"12345\"\nnombre: Teclado\ndescripcion: Mecanico\ncantidad: 4\ncreacion: \"2024-03-05T12:00:00.000Z\"\n";
        let product: Product = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.code, 12345);
        assert_eq!(product.name, "Teclado");
        assert_eq!(product.quantity, 4);
    }

    #[test]
    fn non_numeric_quantity_becomes_zero() {
        let yaml = "codigo: 1\nnombre: Raton\ncantidad: abc\n";
        let product: Product = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.id, ProductId(0));
        assert!(product.created_at.is_empty());
    }

    #[test]
    fn negative_quantity_becomes_zero() {
        let product: Product =
            serde_json::from_str(r#"{"codigo": 1, "nombre": "Raton", "cantidad": -4}"#).unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn rejects_non_numeric_code() {
        let result: Result<Product, _> = serde_yaml::from_str("codigo: abc\nnombre: Raton\n");
        assert!(result.is_err());
    }
}
