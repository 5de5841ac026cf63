//! PageFrame: root wrapper of every routed page.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a004_product--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it leads to `domain/a004_product/`.

use leptos::prelude::*;

/// Paged grid of records with edit/delete actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Card gallery without pagination.
pub const PAGE_CAT_GALLERY: &str = "gallery";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id `{}` does not follow entity--category", page_id);
    }
    let class = match category {
        PAGE_CAT_GALLERY => "page page--gallery",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a004_product--list"));
        assert!(!is_valid_page_id("a004_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_hero--"));
    }
}
