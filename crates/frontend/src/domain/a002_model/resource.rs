use crate::shared::resource::{FieldBag, Resource, ResourceKind};
use contracts::domain::a002_model::aggregate::{fields, MODEL_NAME_RULES};
use contracts::domain::a002_model::Model;
use contracts::shared::validation::FormMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelDraft {
    pub name: String,
}

impl Resource for Model {
    type Draft = ModelDraft;

    const KIND: ResourceKind = ResourceKind::Model;
    const LABEL: &'static str = "Model";
    const COLLECTION_LABEL: &'static str = "models";

    fn id(&self) -> &str {
        self.key()
    }

    fn to_draft(&self) -> ModelDraft {
        ModelDraft {
            name: self.model_name.clone(),
        }
    }

    fn validate(draft: &ModelDraft, mode: FormMode) -> Result<(), String> {
        MODEL_NAME_RULES.validate_string(&draft.name, "Model name", mode)
    }

    fn to_payload(draft: &ModelDraft) -> FieldBag {
        FieldBag::json().text(fields::MODEL_NAME, draft.name.trim())
    }

    fn settle(draft: &ModelDraft, _id: Option<&str>) -> Option<Self> {
        Some(Model::new(draft.name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_payload() {
        let draft = ModelDraft {
            name: "Air Max ".into(),
        };
        assert!(Model::validate(&draft, FormMode::Create).is_ok());
        assert_eq!(
            Model::to_payload(&draft).get_text("modelName"),
            Some("Air Max")
        );
        assert!(Model::validate(&ModelDraft::default(), FormMode::Create).is_err());
    }
}
