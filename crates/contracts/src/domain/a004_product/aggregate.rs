use crate::domain::a001_category::Category;
use crate::domain::a002_model::Model;
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// References
// ============================================================================

/// Category of a product: a populated record or just its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Record(Category),
    Name(String),
}

impl CategoryRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Record(c) => &c.category_name,
            Self::Name(n) => n,
        }
    }
}

/// Model of a product: a populated record or just its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelRef {
    Record(Model),
    Name(String),
}

impl ModelRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Record(m) => &m.model_name,
            Self::Name(n) => n,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "productName")]
    pub product_name: String,

    // Prices travel as strings but older records hold numbers
    #[serde(rename = "productPrice", default, deserialize_with = "string_or_number")]
    pub product_price: String,

    #[serde(
        rename = "productDiscountPrice",
        default,
        deserialize_with = "string_or_number"
    )]
    pub product_discount_price: String,

    #[serde(rename = "productImage", default)]
    pub product_image: String,

    #[serde(
        rename = "productCategory",
        alias = "categoryName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<CategoryRef>,

    #[serde(
        rename = "productModel",
        alias = "modelName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<ModelRef>,
}

impl Product {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(CategoryRef::name).unwrap_or("")
    }

    pub fn model_name(&self) -> &str {
        self.model.as_ref().map(ModelRef::name).unwrap_or("")
    }

    pub fn discount_price(&self) -> Option<f64> {
        self.product_discount_price.trim().parse::<f64>().ok()
    }

    /// Products with a positive discount price get the "Sale" badge.
    pub fn is_on_sale(&self) -> bool {
        self.discount_price().map(|p| p > 0.0).unwrap_or(false)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected price as string or number, got {}",
            other
        ))),
    }
}

/// Multipart field names of the add/update product endpoints
pub mod fields {
    pub const PRODUCT_NAME: &str = "productName";
    pub const PRODUCT_PRICE: &str = "productPrice";
    pub const PRODUCT_DISCOUNT_PRICE: &str = "productDiscountPrice";
    pub const CATEGORY_NAME: &str = "categoryName";
    pub const MODEL_NAME: &str = "modelName";
    pub const PRODUCT_IMAGE: &str = "productImage";
}

pub const NAME_RULES: ValidationRules = ValidationRules::required();
pub const PRICE_RULES: ValidationRules = ValidationRules::required();
pub const DISCOUNT_PRICE_RULES: ValidationRules = ValidationRules::none();
pub const CATEGORY_RULES: ValidationRules = ValidationRules::required();
pub const MODEL_RULES: ValidationRules = ValidationRules::none();
/// An edit keeps the stored image unless a new file is picked
pub const IMAGE_RULES: ValidationRules = ValidationRules::required_on_create();
