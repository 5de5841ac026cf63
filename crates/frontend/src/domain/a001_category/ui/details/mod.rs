use crate::shared::catalog::use_catalog;
use leptos::prelude::*;
use thaw::*;

/// Single-field "Add Category" dialog bound to the category form session
#[component]
#[allow(non_snake_case)]
pub fn CategoryDialog() -> impl IntoView {
    let categories = use_catalog().categories;
    let open = categories.dialog_open();
    let name = move || categories.read(|c| c.draft().map(|d| d.name).unwrap_or_default());
    let submitting = Signal::derive(move || categories.read(|c| c.is_submitting()));

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Category"</DialogTitle>
                    <DialogContent>
                        <label class="form__field">
                            <span class="form__label">"Category name"</span>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="e.g. Shoes"
                                prop:value=name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    categories.get().edit_draft(|d| d.name = value);
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        categories.submit();
                                    }
                                }
                            />
                        </label>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| categories.get().cancel()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            disabled=submitting
                            on_click=move |_| categories.submit()
                        >
                            "Add"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
