use crate::shared::resource::{FieldBag, ImageField, Resource, ResourceKind};
use contracts::domain::a003_hero::aggregate::{fields, DESC_RULES, IMAGE_RULES, TITLE_RULES};
use contracts::domain::a003_hero::Hero;
use contracts::shared::validation::FormMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroDraft {
    pub title: String,
    pub desc: String,
    pub image: ImageField,
}

impl Resource for Hero {
    type Draft = HeroDraft;

    const KIND: ResourceKind = ResourceKind::Hero;
    const LABEL: &'static str = "Hero";
    const COLLECTION_LABEL: &'static str = "heroes";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> HeroDraft {
        HeroDraft {
            title: self.title.clone(),
            desc: self.desc.clone(),
            image: ImageField::from_url(&self.image),
        }
    }

    fn validate(draft: &HeroDraft, mode: FormMode) -> Result<(), String> {
        TITLE_RULES.validate_string(&draft.title, "Title", mode)?;
        DESC_RULES.validate_string(&draft.desc, "Description", mode)?;
        IMAGE_RULES.validate_present(draft.image.is_selected(), "Image", mode)
    }

    fn to_payload(draft: &HeroDraft) -> FieldBag {
        FieldBag::multipart()
            .text(fields::TITLE, draft.title.as_str())
            .text(fields::DESC, draft.desc.as_str())
            .image(fields::IMAGE, &draft.image)
    }

    // Id and image URL are assigned by the server
    fn settle(_draft: &HeroDraft, _id: Option<&str>) -> Option<Self> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::FileUpload;

    fn filled() -> HeroDraft {
        HeroDraft {
            title: "Summer sale".into(),
            desc: "Up to 50%".into(),
            image: ImageField::Selected(FileUpload::new("b.png", "image/png", vec![1, 2])),
        }
    }

    #[test]
    fn test_image_is_required() {
        let mut draft = filled();
        assert!(Hero::validate(&draft, FormMode::Create).is_ok());

        draft.image = ImageField::Empty;
        assert_eq!(
            Hero::validate(&draft, FormMode::Create),
            Err("Please upload a banner image".to_string())
        );
    }

    #[test]
    fn test_title_checked_first() {
        let draft = HeroDraft::default();
        assert_eq!(
            Hero::validate(&draft, FormMode::Create),
            Err("Title is required".to_string())
        );
    }

    #[test]
    fn test_payload_is_multipart_with_file() {
        let bag = Hero::to_payload(&filled());
        assert_eq!(bag.get_text("title"), Some("Summer sale"));
        assert!(bag.has_file("image"));
        assert!(Hero::settle(&filled(), None).is_none());
    }
}
