//! Resource list controller: gateway + store + form session + notifications.
//!
//! One controller backs one editing screen. It is cheap to clone; clones
//! share state. State lives in a `RefCell` that is never borrowed across an
//! `.await`, so UI events may run while a request is in flight.

use super::gateway::{ResourceGateway, Verb};
use super::notify::{Notification, Notifier};
use super::session::{FormSession, SessionState, SubmitMode, SubmitRejected};
use super::store::{CreateEffect, ResourceStore};
use super::traits::Resource;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Client-side validation failed; nothing was sent
    Rejected,
    /// The server call failed; the draft is kept
    Failed,
    /// No open session, or a submission is already in flight
    Ignored,
}

struct ControllerState<R: Resource> {
    store: ResourceStore<R>,
    session: FormSession<R::Draft>,
    refresh_seq: u64,
    loading: bool,
}

pub struct ResourceListController<R: Resource, G> {
    gateway: Rc<G>,
    state: Rc<RefCell<ControllerState<R>>>,
    notifier: Rc<dyn Notifier>,
    observer: Option<Rc<dyn Fn()>>,
}

impl<R: Resource, G> Clone for ResourceListController<R, G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            state: Rc::clone(&self.state),
            notifier: Rc::clone(&self.notifier),
            observer: self.observer.clone(),
        }
    }
}

impl<R: Resource, G: ResourceGateway<R>> ResourceListController<R, G> {
    pub fn new(gateway: G, notifier: Rc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            gateway: Rc::new(gateway),
            state: Rc::new(RefCell::new(ControllerState {
                store: ResourceStore::new(page_size),
                session: FormSession::new(),
                refresh_seq: 0,
                loading: false,
            })),
            notifier,
            observer: None,
        }
    }

    /// Called after every state change (views use it to re-render)
    pub fn with_observer(mut self, observer: impl Fn() + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn changed(&self) {
        if let Some(observer) = &self.observer {
            observer();
        }
    }

    /// Drop the result of a list request started before a confirmed write.
    /// Returns whether one was in flight, in which case the caller reloads.
    fn supersede_refresh(state: &mut ControllerState<R>) -> bool {
        if !state.loading {
            return false;
        }
        state.refresh_seq += 1;
        state.loading = false;
        true
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn with_store<T>(&self, f: impl FnOnce(&ResourceStore<R>) -> T) -> T {
        f(&self.state.borrow().store)
    }

    pub fn items(&self) -> Vec<R> {
        self.with_store(|s| s.items().to_vec())
    }

    pub fn current_page(&self) -> Vec<R> {
        self.with_store(|s| s.current_page().to_vec())
    }

    pub fn active_page(&self) -> usize {
        self.with_store(|s| s.active_page())
    }

    pub fn total_pages(&self) -> usize {
        self.with_store(|s| s.active_total_pages())
    }

    pub fn session_state(&self) -> SessionState {
        self.state.borrow().session.state().clone()
    }

    pub fn draft(&self) -> Option<R::Draft> {
        self.state.borrow().session.draft().cloned()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().session.is_open()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().session.is_submitting()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn supports(&self, verb: Verb) -> bool {
        self.gateway.supports(verb)
    }

    // ------------------------------------------------------------------
    // Local commands
    // ------------------------------------------------------------------

    pub fn set_page(&self, page: usize) {
        self.state.borrow_mut().store.set_page(page);
        self.changed();
    }

    pub fn open_create(&self) {
        self.state.borrow_mut().session.open_create();
        self.changed();
    }

    /// Open an edit draft of `id`. Refused when the resource has no update
    /// endpoint or the id is not in the list.
    pub fn open_edit(&self, id: &str) -> bool {
        if !self.gateway.supports(Verb::Update) {
            log::warn!("{} cannot be edited", R::LABEL);
            return false;
        }
        let opened = {
            let mut state = self.state.borrow_mut();
            match state.store.get(id).map(Resource::to_draft) {
                Some(draft) => {
                    state.session.open_edit(id, draft);
                    true
                }
                None => false,
            }
        };
        if opened {
            self.changed();
        } else {
            log::warn!("{} {} is not in the list", R::LABEL, id);
        }
        opened
    }

    /// Close the form and drop the draft. A submission in flight still
    /// completes and updates the list.
    pub fn cancel(&self) {
        self.state.borrow_mut().session.cancel();
        self.changed();
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut R::Draft)) -> bool {
        let edited = self.state.borrow_mut().session.edit_draft(f);
        if edited {
            self.changed();
        }
        edited
    }

    // ------------------------------------------------------------------
    // Remote commands
    // ------------------------------------------------------------------

    /// Reload the whole collection. Results of a superseded refresh are dropped.
    pub async fn refresh(&self) -> bool {
        self.reload(true).await
    }

    /// `notify` is off for follow-up reloads of a command that already
    /// raised its own notification; their failures only go to the log.
    async fn reload(&self, notify: bool) -> bool {
        let seq = {
            let mut state = self.state.borrow_mut();
            state.refresh_seq += 1;
            state.loading = true;
            state.refresh_seq
        };
        self.changed();

        let result = self.gateway.list().await;

        let outcome = {
            let mut state = self.state.borrow_mut();
            if state.refresh_seq != seq {
                log::debug!("{}: dropping superseded list response", R::KIND.as_str());
                return false;
            }
            state.loading = false;
            result.map(|items| {
                state.store.replace_all(items);
            })
        };

        if let Err(err) = &outcome {
            if notify {
                self.notifier.notify(Notification::error(format!(
                    "Failed to load {}: {}",
                    R::COLLECTION_LABEL,
                    err.user_message()
                )));
            } else {
                log::warn!("reloading {} failed: {}", R::COLLECTION_LABEL, err);
            }
        }
        self.changed();
        outcome.is_ok()
    }

    /// Validate the draft and send it.
    ///
    /// Every rejection and failure raises one error notification; a success
    /// raises one confirmation unless the form was closed meanwhile.
    pub async fn submit(&self) -> SubmitOutcome {
        let begun = self.state.borrow_mut().session.begin_submit(R::validate);
        let ticket = match begun {
            Ok(ticket) => ticket,
            Err(SubmitRejected::Invalid(message)) => {
                self.notifier.notify(Notification::error(message));
                return SubmitOutcome::Rejected;
            }
            Err(rejected) => {
                log::debug!("{} submit ignored: {:?}", R::LABEL, rejected);
                return SubmitOutcome::Ignored;
            }
        };
        self.changed();

        let payload = R::to_payload(&ticket.draft);
        let result = match &ticket.mode {
            SubmitMode::Create => self.gateway.create(payload).await,
            SubmitMode::Update(id) => self.gateway.update(id, payload).await,
        };

        match result {
            Ok(saved) => {
                let (current, needs_refresh) = {
                    let mut state = self.state.borrow_mut();
                    let current = state.session.finish(&ticket, true);
                    let target = ticket.mode.target_id();
                    let entity = saved.or_else(|| R::settle(&ticket.draft, target));
                    let needs_refresh = match (entity, target) {
                        (Some(entity), None) => {
                            state.store.apply_create(entity) == CreateEffect::Duplicate
                        }
                        (Some(entity), Some(id)) => {
                            let replaced = state.store.apply_update(entity);
                            if !replaced {
                                log::warn!("updated {} {} is not in the list", R::LABEL, id);
                            }
                            !replaced
                        }
                        (None, _) => true,
                    };
                    let superseded = Self::supersede_refresh(&mut state);
                    (current, needs_refresh || superseded)
                };

                let verb = match ticket.mode {
                    SubmitMode::Create => "added",
                    SubmitMode::Update(_) => "updated",
                };
                // A form closed while the request was in flight gets no toast.
                if current {
                    self.notifier.notify(Notification::success(format!(
                        "{} {} successfully",
                        R::LABEL,
                        verb
                    )));
                } else {
                    log::info!("{} {} after its form was closed", R::LABEL, verb);
                }
                self.changed();

                if needs_refresh {
                    self.reload(false).await;
                }
                SubmitOutcome::Saved
            }
            Err(err) => {
                self.state.borrow_mut().session.finish(&ticket, false);
                self.notifier.notify(Notification::error(err.user_message()));
                self.changed();
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete on the server, then drop the entity locally.
    pub async fn delete(&self, id: &str) -> bool {
        match self.gateway.delete(id).await {
            Ok(()) => {
                let superseded = {
                    let mut state = self.state.borrow_mut();
                    state.store.apply_delete(id);
                    if state.session.state() == &SessionState::OpenEdit(id.to_string()) {
                        state.session.cancel();
                    }
                    Self::supersede_refresh(&mut state)
                };
                self.notifier
                    .notify(Notification::success(format!("{} deleted successfully", R::LABEL)));
                self.changed();
                if superseded {
                    self.reload(false).await;
                }
                true
            }
            Err(err) => {
                self.notifier.notify(Notification::error(err.user_message()));
                false
            }
        }
    }
}
