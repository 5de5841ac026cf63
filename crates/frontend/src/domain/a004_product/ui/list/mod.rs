mod card;

use crate::domain::a001_category::ui::details::CategoryDialog;
use crate::domain::a002_model::ui::details::ModelDialog;
use crate::domain::a004_product::ui::details::ProductDialog;
use crate::shared::catalog::use_catalog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::resource::Verb;
use card::ProductCard;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let catalog = use_catalog();
    let products = catalog.products;

    let pending_delete = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);

    let reload = move || {
        products.refresh();
        catalog.categories.refresh();
        catalog.models.refresh();
    };
    reload();

    let handle_edit = Callback::new(move |id: String| {
        products.get().open_edit(&id);
    });
    let handle_delete = Callback::new(move |id: String| {
        pending_delete.set(Some(id));
        confirm_open.set(true);
    });
    let confirm_delete = Callback::new(move |_: ()| {
        if let Some(id) = pending_delete.get_untracked() {
            products.delete(id);
        }
        pending_delete.set(None);
    });

    let can_edit = Signal::derive(move || products.read(|c| c.supports(Verb::Update)));
    let total_count = Signal::derive(move || products.read(|c| c.with_store(|s| s.len())));

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Products"
                subtitle=Signal::derive(move || format!("{} products", total_count.get()))
                loading=Signal::derive(move || products.read(|c| c.is_loading()))
            >
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| catalog.categories.get().open_create()
                    >
                        {icon("plus")}
                        " Add Category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| catalog.models.get().open_create()
                    >
                        {icon("plus")}
                        " Add Model"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| products.get().open_create()
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| reload()
                    >
                        {icon("refresh")}
                    </Button>
                </Space>
            </PageHeader>

            <div class="page__content">
                <div class="product-grid">
                    {move || products.read(|c| c.current_page()).into_iter().map(|product| {
                        view! {
                            <ProductCard
                                product=product
                                can_edit=can_edit
                                on_edit=handle_edit
                                on_delete=handle_delete
                            />
                        }
                    }).collect_view()}
                </div>
                <Show when=move || total_count.get() == 0 && !products.read(|c| c.is_loading())>
                    <div class="empty-state">"No products yet."</div>
                </Show>
                <PaginationControls
                    current_page=Signal::derive(move || products.read(|c| c.active_page()))
                    total_pages=Signal::derive(move || products.read(|c| c.total_pages()))
                    total_count=total_count
                    on_page_change=Callback::new(move |page| products.get().set_page(page))
                />
            </div>

            <CategoryDialog />
            <ModelDialog />
            <ProductDialog />
            <ConfirmDialog
                open=confirm_open
                title="Delete product"
                message="Are you sure you want to delete this product?"
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
