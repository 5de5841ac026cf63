use leptos::prelude::*;
use thaw::*;

/// Yes/no confirmation in front of a destructive action
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    title: &'static str,
    message: &'static str,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{message}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
