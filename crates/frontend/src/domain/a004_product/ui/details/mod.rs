use crate::domain::a004_product::ProductDraft;
use crate::shared::catalog::use_catalog;
use crate::shared::components::image_input::ImageInput;
use crate::shared::resource::{FileUpload, ImageField, SessionState};
use leptos::prelude::*;
use thaw::*;

/// Add / edit product dialog bound to the product form session.
///
/// Category and model options come from their own controllers.
#[component]
#[allow(non_snake_case)]
pub fn ProductDialog() -> impl IntoView {
    let catalog = use_catalog();
    let products = catalog.products;
    let open = products.dialog_open();

    let is_edit = move || {
        products.read(|c| match c.session_state() {
            SessionState::OpenEdit(_) => true,
            SessionState::Submitting(mode) => mode.target_id().is_some(),
            _ => false,
        })
    };
    let submitting = Signal::derive(move || products.read(|c| c.is_submitting()));
    let field = move |get: fn(&ProductDraft) -> String| {
        move || products.read(|c| c.draft().map(|d| get(&d)).unwrap_or_default())
    };
    let set = move |apply: fn(&mut ProductDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            products.get().edit_draft(|d| apply(d, value));
        }
    };

    let existing_image = Signal::derive(move || {
        products.read(|c| {
            c.draft()
                .and_then(|d| d.image.existing_url().map(str::to_string))
        })
    });
    let picked_image = Signal::derive(move || {
        products.read(|c| {
            c.draft()
                .and_then(|d| d.image.upload().map(|f| f.file_name.clone()))
        })
    });
    let on_pick = Callback::new(move |upload: FileUpload| {
        products
            .get()
            .edit_draft(|d| d.image = ImageField::Selected(upload));
    });

    let category_options = move || {
        catalog.categories.read(|c| c.items()).into_iter().map(|category| {
            let name = category.category_name;
            view! { <option value=name.clone()>{name.clone()}</option> }
        }).collect_view()
    };
    let model_options = move || {
        catalog.models.read(|c| c.items()).into_iter().map(|model| {
            let name = model.model_name;
            view! { <option value=name.clone()>{name.clone()}</option> }
        }).collect_view()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if is_edit() { "Edit Product" } else { "Add Product" }}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form">
                            <label class="form__field">
                                <span class="form__label">"Product name"</span>
                                <input
                                    type="text"
                                    class="form__input"
                                    prop:value=field(|d| d.name.clone())
                                    on:input=set(|d, v| d.name = v)
                                />
                            </label>
                            <div class="form__row">
                                <label class="form__field">
                                    <span class="form__label">"Price"</span>
                                    <input
                                        type="number"
                                        min="0"
                                        class="form__input"
                                        prop:value=field(|d| d.price.clone())
                                        on:input=set(|d, v| d.price = v)
                                    />
                                </label>
                                <label class="form__field">
                                    <span class="form__label">"Discount price"</span>
                                    <input
                                        type="number"
                                        min="0"
                                        class="form__input"
                                        prop:value=field(|d| d.discount_price.clone())
                                        on:input=set(|d, v| d.discount_price = v)
                                    />
                                </label>
                            </div>
                            <div class="form__row">
                                <label class="form__field">
                                    <span class="form__label">"Category"</span>
                                    <select
                                        class="form__input"
                                        prop:value=field(|d| d.category_name.clone())
                                        on:change=set(|d, v| d.category_name = v)
                                    >
                                        <option value="">"Select category"</option>
                                        {category_options}
                                    </select>
                                </label>
                                <label class="form__field">
                                    <span class="form__label">"Model"</span>
                                    <select
                                        class="form__input"
                                        prop:value=field(|d| d.model_name.clone())
                                        on:change=set(|d, v| d.model_name = v)
                                    >
                                        <option value="">"No model"</option>
                                        {model_options}
                                    </select>
                                </label>
                            </div>
                            <ImageInput
                                label="Product image"
                                existing=existing_image
                                picked=picked_image
                                on_pick=on_pick
                            />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| products.get().cancel()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            disabled=submitting
                            on_click=move |_| products.submit()
                        >
                            {move || if is_edit() { "Update" } else { "Add" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
