use crate::shared::icons::icon;
use contracts::domain::a004_product::Product;
use leptos::prelude::*;
use thaw::*;

fn format_price(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) => format!("${:.2}", value),
        Err(_) => raw.to_string(),
    }
}

#[component]
pub fn ProductCard(
    product: Product,
    /// Hidden when the product cannot be edited
    #[prop(into)]
    can_edit: Signal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id_for_edit = product.id.clone();
    let id_for_delete = product.id.clone();
    let on_sale = product.is_on_sale();
    let price = format_price(&product.product_price);
    let discount = format_price(&product.product_discount_price);
    let name = product.product_name.clone();
    let image = product.product_image.clone();
    let alt = name.clone();
    let subtitle = match product.model_name() {
        "" => product.category_name().to_string(),
        model => format!("{} · {}", product.category_name(), model),
    };

    view! {
        <div class="product-card">
            <div class="product-card__media">
                {on_sale.then(|| view! { <span class="product-card__badge">"Sale"</span> })}
                <img src=image alt=alt />
            </div>
            <div class="product-card__body">
                <div class="product-card__title">{name}</div>
                <div class="product-card__subtitle">{subtitle}</div>
                // The discount field holds the struck "was" price; the live
                // price is always `productPrice`.
                <div class="product-card__price">
                    {on_sale
                        .then(|| view! { <span class="product-card__price--old">{discount}</span> })}
                    <span>{price}</span>
                </div>
            </div>
            <div class="product-card__actions">
                <Show when=move || can_edit.get()>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click={
                            let id = id_for_edit.clone();
                            move |_| on_edit.run(id.clone())
                        }
                    >
                        {icon("edit")}
                    </Button>
                </Show>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_delete.run(id_for_delete.clone())
                >
                    {icon("delete")}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("120"), "$120.00");
        assert_eq!(format_price(" 9.5 "), "$9.50");
        assert_eq!(format_price("n/a"), "n/a");
    }
}
