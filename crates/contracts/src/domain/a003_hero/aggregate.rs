use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Promotional banner shown at the top of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub desc: String,

    /// Public URL of the uploaded banner image
    #[serde(default)]
    pub image: String,
}

/// Multipart field names of `POST /auth/add-hero`
pub mod fields {
    pub const TITLE: &str = "title";
    pub const DESC: &str = "desc";
    pub const IMAGE: &str = "image";
}

pub const TITLE_RULES: ValidationRules = ValidationRules::required();
pub const DESC_RULES: ValidationRules = ValidationRules::required();
pub const IMAGE_RULES: ValidationRules =
    ValidationRules::required_on_create().with_error("Please upload a banner image");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_item() {
        let json = r#"{"_id":"h1","title":"Summer sale","desc":"Up to 50%","image":"https://cdn/x.png","__v":0}"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id, "h1");
        assert_eq!(hero.title, "Summer sale");
        assert_eq!(hero.image, "https://cdn/x.png");
    }
}
