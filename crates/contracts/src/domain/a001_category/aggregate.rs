use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product category.
///
/// The storefront keeps category names unique and the list endpoint only
/// guarantees `categoryName`, so the name doubles as the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    #[serde(rename = "categoryName")]
    pub category_name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record_id: None,
            category_name: name.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.category_name
    }
}

pub mod fields {
    pub const CATEGORY_NAME: &str = "categoryName";
}

pub const CATEGORY_NAME_RULES: ValidationRules = ValidationRules::required();
