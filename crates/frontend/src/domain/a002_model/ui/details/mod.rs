use crate::shared::catalog::use_catalog;
use leptos::prelude::*;
use thaw::*;

/// Single-field "Add Model" dialog bound to the model form session
#[component]
#[allow(non_snake_case)]
pub fn ModelDialog() -> impl IntoView {
    let models = use_catalog().models;
    let open = models.dialog_open();
    let name = move || models.read(|c| c.draft().map(|d| d.name).unwrap_or_default());
    let submitting = Signal::derive(move || models.read(|c| c.is_submitting()));

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Model"</DialogTitle>
                    <DialogContent>
                        <label class="form__field">
                            <span class="form__label">"Model name"</span>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="e.g. Air Max"
                                prop:value=name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    models.get().edit_draft(|d| d.name = value);
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        models.submit();
                                    }
                                }
                            />
                        </label>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| models.get().cancel()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            disabled=submitting
                            on_click=move |_| models.submit()
                        >
                            "Add"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
