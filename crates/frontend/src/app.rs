use crate::domain::a003_hero::ui::list::HeroList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::shared::catalog::Catalog;
use crate::shared::icons::icon;
use crate::shared::resource::{ApiConfig, Notifier};
use crate::shared::toast::ToastNotifier;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <Console />
            </ToasterProvider>
        </ConfigProvider>
    }
}

/// Builds the resource controllers and provides them to every page
#[component]
fn Console() -> impl IntoView {
    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::from_context());

    let catalog = match ApiConfig::load().and_then(|config| Catalog::new(config, notifier)) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Cannot start the console: {}", e);
            return view! {
                <div class="config-error">
                    <h1>"Configuration error"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };
    provide_context(catalog);

    view! {
        <Router>
            <nav class="top-nav">
                <A href="/">{icon("products")}" Products"</A>
                <A href="/hero">{icon("image")}" Hero"</A>
            </nav>
            <main class="content">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/hero") view=HeroList />
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
