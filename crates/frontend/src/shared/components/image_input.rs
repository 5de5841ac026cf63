use crate::shared::icons::icon;
use crate::shared::resource::FileUpload;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// File picker for an image field.
///
/// Shows the stored image while no new file is picked, then the picked
/// file's name. The file is read in the background and handed to `on_pick`.
#[component]
pub fn ImageInput(
    #[prop(into)]
    label: String,
    /// URL of the image already stored with the entity
    #[prop(into)]
    existing: Signal<Option<String>>,
    /// Name of the newly picked file
    #[prop(into)]
    picked: Signal<Option<String>>,
    on_pick: Callback<FileUpload>,
) -> impl IntoView {
    let handle_file_select = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match FileUpload::read(&file).await {
                Ok(upload) => on_pick.run(upload),
                Err(e) => log::warn!("failed to read {}: {}", file.name(), e),
            }
        });
    };

    view! {
        <div class="image-input">
            <label class="image-input__label">
                {icon("image")}
                <span>{label}</span>
                <input type="file" accept="image/*" class="hidden" on:change=handle_file_select />
            </label>
            {move || match (picked.get(), existing.get()) {
                (Some(name), _) => view! { <span class="image-input__file">{name}</span> }.into_any(),
                (None, Some(url)) => view! { <img class="image-input__preview" src=url alt="" /> }.into_any(),
                (None, None) => view! { <span class="text-muted">"No image selected"</span> }.into_any(),
            }}
        </div>
    }
}
