use crate::shared::resource::{FieldBag, Resource, ResourceKind};
use contracts::domain::a001_category::aggregate::{fields, CATEGORY_NAME_RULES};
use contracts::domain::a001_category::Category;
use contracts::shared::validation::FormMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl Resource for Category {
    type Draft = CategoryDraft;

    const KIND: ResourceKind = ResourceKind::Category;
    const LABEL: &'static str = "Category";
    const COLLECTION_LABEL: &'static str = "categories";

    fn id(&self) -> &str {
        self.key()
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.category_name.clone(),
        }
    }

    fn validate(draft: &CategoryDraft, mode: FormMode) -> Result<(), String> {
        CATEGORY_NAME_RULES.validate_string(&draft.name, "Category name", mode)
    }

    fn to_payload(draft: &CategoryDraft) -> FieldBag {
        FieldBag::json().text(fields::CATEGORY_NAME, draft.name.trim())
    }

    // The server keys categories by name, so the acknowledged draft is the record.
    fn settle(draft: &CategoryDraft, _id: Option<&str>) -> Option<Self> {
        Some(Category::new(draft.name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::payload::PayloadEncoding;

    #[test]
    fn test_blank_name_is_rejected() {
        let draft = CategoryDraft {
            name: "   ".into(),
        };
        assert_eq!(
            Category::validate(&draft, FormMode::Create),
            Err("Category name is required".to_string())
        );
    }

    #[test]
    fn test_payload_is_trimmed_json() {
        let draft = CategoryDraft {
            name: "  Shoes ".into(),
        };
        let bag = Category::to_payload(&draft);
        assert_eq!(bag.encoding(), PayloadEncoding::Json);
        assert_eq!(bag.to_json(), serde_json::json!({"categoryName": "Shoes"}));

        let settled = Category::settle(&draft, None).unwrap();
        assert_eq!(settled.id(), "Shoes");
    }
}
