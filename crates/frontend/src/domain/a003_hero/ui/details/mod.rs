use crate::domain::a003_hero::HeroDraft;
use crate::shared::catalog::use_catalog;
use crate::shared::components::image_input::ImageInput;
use crate::shared::resource::{FileUpload, ImageField};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn HeroDialog() -> impl IntoView {
    let heroes = use_catalog().heroes;
    let open = heroes.dialog_open();
    let submitting = Signal::derive(move || heroes.read(|c| c.is_submitting()));

    let draft = move || heroes.read(|c| c.draft().unwrap_or_default());
    let edit = move |apply: fn(&mut HeroDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            heroes.get().edit_draft(|d| apply(d, value));
        }
    };
    let picked = Signal::derive(move || draft().image.upload().map(|f| f.file_name.clone()));
    let on_pick = Callback::new(move |upload: FileUpload| {
        heroes
            .get()
            .edit_draft(|d| d.image = ImageField::Selected(upload));
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Hero"</DialogTitle>
                    <DialogContent>
                        <div class="form">
                            <label class="form__field">
                                <span class="form__label">"Title"</span>
                                <input
                                    type="text"
                                    class="form__input"
                                    prop:value=move || draft().title
                                    on:input=edit(|d, v| d.title = v)
                                />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Description"</span>
                                <textarea
                                    rows="3"
                                    class="form__input"
                                    prop:value=move || draft().desc
                                    on:input=edit(|d, v| d.desc = v)
                                />
                            </label>
                            <ImageInput
                                label="Banner image"
                                existing=Signal::derive(|| None::<String>)
                                picked=picked
                                on_pick=on_pick
                            />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| heroes.get().cancel()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            disabled=submitting
                            on_click=move |_| heroes.submit()
                        >
                            "Add"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
