use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product model (line or series within a category).
///
/// The storefront keeps model names unique and the list endpoint only
/// guarantees `modelName`, so the name doubles as the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    #[serde(rename = "modelName")]
    pub model_name: String,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record_id: None,
            model_name: name.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.model_name
    }
}

pub mod fields {
    pub const MODEL_NAME: &str = "modelName";
}

pub const MODEL_NAME_RULES: ValidationRules = ValidationRules::required();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_record_id() {
        let m: Model =
            serde_json::from_str(r#"{"_id":"66f0a1","modelName":"Air Max"}"#).unwrap();
        assert_eq!(m.record_id.as_deref(), Some("66f0a1"));
        assert_eq!(m.key(), "Air Max");
    }
}
