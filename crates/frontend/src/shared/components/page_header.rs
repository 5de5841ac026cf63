use leptos::prelude::*;
use thaw::*;

/// Header of a routed page: title, live item count and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// e.g. "36 products"
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Shows a spinner next to the title while the list reloads
    #[prop(optional, into)]
    loading: Signal<bool>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    <Show when=move || loading.get()>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
