use crate::domain::a003_hero::ui::details::HeroDialog;
use crate::shared::catalog::use_catalog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_GALLERY};
use crate::shared::resource::Verb;
use leptos::prelude::*;
use thaw::*;

/// Gallery of the storefront hero banners
#[component]
#[allow(non_snake_case)]
pub fn HeroList() -> impl IntoView {
    let heroes = use_catalog().heroes;
    let pending_delete = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);

    heroes.refresh();

    let can_delete = Signal::derive(move || heroes.read(|c| c.supports(Verb::Delete)));
    let confirm_delete = Callback::new(move |_: ()| {
        if let Some(id) = pending_delete.get_untracked() {
            heroes.delete(id);
        }
        pending_delete.set(None);
    });

    view! {
        <PageFrame page_id="a003_hero--gallery" category=PAGE_CAT_GALLERY>
            <PageHeader
                title="Hero banners"
                loading=Signal::derive(move || heroes.read(|c| c.is_loading()))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| heroes.get().open_create()
                >
                    {icon("plus")}
                    " Add Hero"
                </Button>
            </PageHeader>

            <div class="page__content hero-gallery">
                {move || heroes.read(|c| c.items()).into_iter().map(|hero| {
                    let id = hero.id.clone();
                    view! {
                        <div class="hero-card">
                            <img class="hero-card__image" src=hero.image alt="" />
                            <div class="hero-card__body">
                                <div class="hero-card__title">{hero.title}</div>
                                <div class="hero-card__desc">{hero.desc}</div>
                            </div>
                            <Show when=move || can_delete.get()>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click={
                                        let id = id.clone();
                                        move |_| {
                                            pending_delete.set(Some(id.clone()));
                                            confirm_open.set(true);
                                        }
                                    }
                                >
                                    {icon("delete")}
                                </Button>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>

            <HeroDialog />
            <ConfirmDialog
                open=confirm_open
                title="Delete hero"
                message="Are you sure you want to delete this hero banner?"
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
