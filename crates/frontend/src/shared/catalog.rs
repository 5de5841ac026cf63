//! Reactive handles over the resource controllers, shared through context.

use crate::shared::resource::{
    ApiConfig, ConfigError, HttpGateway, Notifier, Resource, ResourceListController,
};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_model::Model;
use contracts::domain::a003_hero::Hero;
use contracts::domain::a004_product::Product;
use leptos::prelude::*;
use std::future::Future;
use std::rc::Rc;

/// Products per page of the catalogue grid
pub const PRODUCTS_PER_PAGE: usize = 12;
/// Categories, models and heroes are shown whole, never paged
const UNPAGED_SIZE: usize = 100;

pub type HttpController<R> = ResourceListController<R, HttpGateway<R>>;

/// Copyable view handle of one controller.
///
/// The controller is not `Send`, so it lives in local storage; every state
/// change bumps `revision`, which reactive readers track.
pub struct ControllerHandle<R: Resource> {
    controller: StoredValue<HttpController<R>, LocalStorage>,
    revision: RwSignal<u64>,
}

impl<R: Resource> Clone for ControllerHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ControllerHandle<R> {}

impl<R: Resource> ControllerHandle<R> {
    pub fn new(
        config: Rc<ApiConfig>,
        notifier: Rc<dyn Notifier>,
        page_size: usize,
    ) -> Result<Self, ConfigError> {
        let revision = RwSignal::new(0u64);
        let controller =
            ResourceListController::new(HttpGateway::new(config)?, notifier, page_size)
                .with_observer(move || revision.update(|r| *r += 1));
        Ok(Self {
            controller: StoredValue::new_local(controller),
            revision,
        })
    }

    /// Read controller state and subscribe to its changes
    pub fn read<T>(&self, f: impl FnOnce(&HttpController<R>) -> T) -> T {
        self.revision.track();
        self.controller.with_value(f)
    }

    pub fn get(&self) -> HttpController<R> {
        self.controller.get_value()
    }

    /// Run an async command without blocking the event handler
    pub fn spawn<F, Fut>(&self, command: F)
    where
        F: FnOnce(HttpController<R>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(command(self.get()));
    }

    pub fn refresh(&self) {
        self.spawn(|c| async move {
            c.refresh().await;
        });
    }

    pub fn submit(&self) {
        self.spawn(|c| async move {
            c.submit().await;
        });
    }

    pub fn delete(&self, id: String) {
        self.spawn(|c| async move {
            c.delete(&id).await;
        });
    }

    /// Dialog visibility bound to the form session.
    ///
    /// Closing the dialog from the UI (mask click, Esc) cancels the session.
    pub fn dialog_open(&self) -> RwSignal<bool> {
        let open = RwSignal::new(false);
        let handle = *self;
        Effect::new(move |_| {
            let is_open = handle.read(|c| c.is_open() || c.is_submitting());
            if open.get_untracked() != is_open {
                open.set(is_open);
            }
        });
        Effect::new(move |_| {
            if !open.get() {
                let controller = handle.get();
                if controller.is_open() || controller.is_submitting() {
                    controller.cancel();
                }
            }
        });
        open
    }
}

/// Controllers of every resource managed by the console
#[derive(Clone, Copy)]
pub struct Catalog {
    pub categories: ControllerHandle<Category>,
    pub models: ControllerHandle<Model>,
    pub heroes: ControllerHandle<Hero>,
    pub products: ControllerHandle<Product>,
}

impl Catalog {
    pub fn new(config: ApiConfig, notifier: Rc<dyn Notifier>) -> Result<Self, ConfigError> {
        let config = Rc::new(config);
        Ok(Self {
            categories: ControllerHandle::new(config.clone(), notifier.clone(), UNPAGED_SIZE)?,
            models: ControllerHandle::new(config.clone(), notifier.clone(), UNPAGED_SIZE)?,
            heroes: ControllerHandle::new(config.clone(), notifier.clone(), UNPAGED_SIZE)?,
            products: ControllerHandle::new(config, notifier, PRODUCTS_PER_PAGE)?,
        })
    }
}

pub fn use_catalog() -> Catalog {
    use_context::<Catalog>().expect("Catalog not found in context")
}
