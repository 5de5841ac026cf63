use super::config::ResourceKind;
use super::payload::FieldBag;
use contracts::shared::validation::FormMode;
use serde::de::DeserializeOwned;

/// An entity kind editable through a [`ResourceListController`](super::ResourceListController).
///
/// Implementations are thin: they name the collection, describe the draft,
/// validate required fields and encode the request payload.
pub trait Resource: Clone + DeserializeOwned + 'static {
    /// Editable working copy of the entity's fields
    type Draft: Clone + Default + 'static;

    const KIND: ResourceKind;
    /// Singular label used in notifications, e.g. "Product"
    const LABEL: &'static str;
    /// Plural label used in notifications, e.g. "products"
    const COLLECTION_LABEL: &'static str;

    /// Identifier assigned by the server
    fn id(&self) -> &str;

    /// Seed a draft for editing this entity
    fn to_draft(&self) -> Self::Draft;

    /// Client-side required-field check. `Err` carries the message shown to the user.
    fn validate(draft: &Self::Draft, mode: FormMode) -> Result<(), String>;

    fn to_payload(draft: &Self::Draft) -> FieldBag;

    /// Entity to apply locally when the server acknowledged a write without
    /// returning the saved record. `None` makes the controller refresh instead.
    ///
    /// `id` is the target of an update, `None` for a create.
    fn settle(draft: &Self::Draft, id: Option<&str>) -> Option<Self>;
}
