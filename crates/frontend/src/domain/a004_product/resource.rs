use crate::shared::resource::{FieldBag, ImageField, Resource, ResourceKind};
use contracts::domain::a004_product::aggregate::{
    fields, CategoryRef, ModelRef, CATEGORY_RULES, DISCOUNT_PRICE_RULES, IMAGE_RULES,
    MODEL_RULES, NAME_RULES, PRICE_RULES,
};
use contracts::domain::a004_product::Product;
use contracts::shared::validation::FormMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub discount_price: String,
    pub category_name: String,
    pub model_name: String,
    pub image: ImageField,
}

impl Resource for Product {
    type Draft = ProductDraft;

    const KIND: ResourceKind = ResourceKind::Product;
    const LABEL: &'static str = "Product";
    const COLLECTION_LABEL: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.product_name.clone(),
            price: self.product_price.clone(),
            discount_price: self.product_discount_price.clone(),
            category_name: self.category_name().to_string(),
            model_name: self.model_name().to_string(),
            image: ImageField::from_url(&self.product_image),
        }
    }

    fn validate(draft: &ProductDraft, mode: FormMode) -> Result<(), String> {
        NAME_RULES.validate_string(&draft.name, "Product name", mode)?;
        PRICE_RULES.validate_string(&draft.price, "Price", mode)?;
        DISCOUNT_PRICE_RULES.validate_string(&draft.discount_price, "Discount price", mode)?;
        CATEGORY_RULES.validate_string(&draft.category_name, "Category", mode)?;
        MODEL_RULES.validate_string(&draft.model_name, "Model", mode)?;
        IMAGE_RULES.validate_present(draft.image.is_selected(), "Product image", mode)
    }

    /// Only the name is trimmed; an edit without a new file keeps the stored image.
    fn to_payload(draft: &ProductDraft) -> FieldBag {
        FieldBag::multipart()
            .text(fields::PRODUCT_NAME, draft.name.trim())
            .text(fields::PRODUCT_PRICE, draft.price.as_str())
            .text(fields::PRODUCT_DISCOUNT_PRICE, draft.discount_price.as_str())
            .text(fields::CATEGORY_NAME, draft.category_name.as_str())
            .text(fields::MODEL_NAME, draft.model_name.as_str())
            .image(fields::PRODUCT_IMAGE, &draft.image)
    }

    fn settle(draft: &ProductDraft, id: Option<&str>) -> Option<Self> {
        // A create needs the server id; a new upload needs the server URL
        let id = id?;
        let image = draft.image.existing_url()?;
        Some(Product {
            id: id.to_string(),
            product_name: draft.name.trim().to_string(),
            product_price: draft.price.clone(),
            product_discount_price: draft.discount_price.clone(),
            product_image: image.to_string(),
            category: Some(CategoryRef::Name(draft.category_name.clone())),
            model: (!draft.model_name.is_empty()).then(|| ModelRef::Name(draft.model_name.clone())),
        })
    }
}
