//! Reactive wrapper that list pages talk to.
//!
//! [`ListController`] owns a `RwSignal<ListState<_>>`, applies transitions
//! synchronously (so `is_loading` flips immediately) and runs the resulting
//! requests on `spawn_local`.

use super::alert::Alert;
use super::debounce::Debouncer;
use super::driver::{run_request, HttpSource};
use super::filters::FilterSet;
use super::mutation::{confirm_and_mutate, mutate_then_refresh, Mutation, MutationOutcome};
use super::query_mirror::{mirror_to_location, read_location};
use super::resource::ListResource;
use super::state::{ListRequest, ListState, LoadOutcome, MutationSettled};
use contracts::shared::paging::EntityId;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ListController<R: ListResource> {
    pub state: RwSignal<ListState<R::Item>>,
    source: HttpSource<R>,
}

impl<R: ListResource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ListController<R> {}

impl<R: ListResource> ListController<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::from_config(R::config())),
            source: HttpSource::new(),
        }
    }

    fn run(self, transition: impl FnOnce(&mut ListState<R::Item>) -> Option<ListRequest>) {
        let Some(request) = self.state.try_update(transition).flatten() else {
            return;
        };
        spawn_local(async move {
            if let Some(LoadOutcome::Failed { alert_id }) =
                run_request(&self.state, &self.source, request).await
            {
                self.expire_alert(alert_id);
            }
        });
    }

    /// Hides alert `id` once its lifetime is over.
    fn expire_alert(self, id: u64) {
        let state = self.state;
        let lifetime = R::config().alert_lifetime.as_millis() as u32;
        Timeout::new(lifetime, move || {
            state.try_update(|s| s.dismiss_alert(id));
        })
        .forget();
    }

    fn settle(self, outcome: Option<MutationOutcome>) {
        let Some(outcome) = outcome else { return };
        match outcome.settled {
            MutationSettled::Succeeded { notice_id, .. } => self.expire_alert(notice_id),
            MutationSettled::Failed { alert_id } => self.expire_alert(alert_id),
        }
        if let Some(LoadOutcome::Failed { alert_id }) = outcome.refresh {
            self.expire_alert(alert_id);
        }
    }

    pub fn load(self, page: u32, filters: FilterSet) {
        self.run(move |s| Some(s.load(page, filters)));
    }

    pub fn go_to_page(self, page: u32) {
        self.run(move |s| s.go_to_page(page));
    }

    pub fn next_page(self) {
        self.run(|s| s.next_page());
    }

    pub fn prev_page(self) {
        self.run(|s| s.prev_page());
    }

    pub fn apply_filters(self, filters: FilterSet) {
        mirror_to_location(&filters);
        self.run(move |s| Some(s.apply_filters(filters)));
    }

    pub fn clear_filters(self) {
        mirror_to_location(&FilterSet::new());
        self.run(|s| Some(s.clear_filters()));
    }

    pub fn refresh(self) {
        self.run(|s| Some(s.refresh()));
    }

    pub fn request_confirm(self, id: EntityId, mutation: Mutation) {
        self.state.update(|s| s.request_confirm(id, mutation));
    }

    pub fn cancel_confirm(self) {
        self.state.update(|s| s.cancel_confirm());
    }

    /// Runs the mutation waiting in the confirmation dialog.
    pub fn confirm(self) {
        spawn_local(async move {
            let outcome = confirm_and_mutate(&self.state, &self.source).await;
            self.settle(outcome);
        });
    }

    /// Runs a mutation that needs no confirmation (status dropdowns).
    pub fn mutate(self, id: EntityId, mutation: Mutation) {
        spawn_local(async move {
            let outcome = mutate_then_refresh(&self.state, &self.source, id, mutation).await;
            self.settle(outcome);
        });
    }
}

/// Non-generic view of a controller for the shared list chrome.
#[derive(Clone, Copy)]
pub struct ListBindings {
    pub alert: Signal<Option<Alert>>,
    pub is_loading: Signal<bool>,
    pub is_empty: Signal<bool>,
    pub current_page: Signal<u32>,
    pub total_pages: Signal<u32>,
    pub has_prev: Signal<bool>,
    pub has_next: Signal<bool>,
    pub max_pages_to_show: u32,
    /// Question shown while a mutation awaits confirmation.
    pub confirm_prompt: Signal<Option<&'static str>>,
    pub on_refresh: Callback<()>,
    pub on_page_change: Callback<u32>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_dismiss: Callback<u64>,
}

impl<R: ListResource> ListController<R> {
    pub fn bindings(self) -> ListBindings {
        let state = self.state;
        ListBindings {
            alert: Signal::derive(move || state.with(|s| s.alert().cloned())),
            is_loading: Signal::derive(move || state.with(|s| s.is_loading())),
            is_empty: Signal::derive(move || state.with(|s| s.is_empty())),
            current_page: Signal::derive(move || state.with(|s| s.current_page())),
            total_pages: Signal::derive(move || state.with(|s| s.total_pages())),
            has_prev: Signal::derive(move || state.with(|s| s.has_prev())),
            has_next: Signal::derive(move || state.with(|s| s.has_next())),
            max_pages_to_show: R::config().max_pages_to_show,
            confirm_prompt: Signal::derive(move || {
                state.with(|s| s.pending_confirmation().map(|p| confirm_prompt(&p.mutation)))
            }),
            on_refresh: Callback::new(move |_| self.refresh()),
            on_page_change: Callback::new(move |page| self.go_to_page(page)),
            on_prev: Callback::new(move |_| self.prev_page()),
            on_next: Callback::new(move |_| self.next_page()),
            on_confirm: Callback::new(move |_| self.confirm()),
            on_cancel: Callback::new(move |_| self.cancel_confirm()),
            on_dismiss: Callback::new(move |id| {
                state.update(|s| {
                    s.dismiss_alert(id);
                });
            }),
        }
    }
}

fn confirm_prompt(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::Delete => "Bạn có muốn xóa không?",
        Mutation::Lock => "Bạn có muốn khóa tài khoản này không?",
        Mutation::Unlock => "Bạn có muốn mở khóa tài khoản này không?",
        Mutation::Update(_) | Mutation::SetStatus(_) => "Bạn có chắc chắn muốn cập nhật không?",
    }
}

/// Creates the controller of a list page and loads the first page using the
/// filters found in the address bar.
pub fn use_list<R: ListResource>() -> ListController<R> {
    let ctrl = ListController::<R>::new();
    let filters = read_location(R::SEARCH_KEYS);
    ctrl.load(1, filters);
    ctrl
}

/// Debounced entry point for search inputs.
pub struct SearchHandle {
    debouncer: StoredValue<Debouncer<FilterSet>, LocalStorage>,
}

impl Clone for SearchHandle {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for SearchHandle {}

impl SearchHandle {
    pub fn schedule(&self, filters: FilterSet) {
        self.debouncer.with_value(|d| d.schedule(filters));
    }

    pub fn cancel(&self) {
        self.debouncer.try_with_value(|d| d.cancel());
    }
}

/// Search box helper: applies filters after the resource's quiet window.
/// The pending call is dropped when the view unmounts.
pub fn use_debounced_search<R: ListResource>(ctrl: ListController<R>) -> SearchHandle {
    let delay = R::config().debounce;
    let debouncer = StoredValue::new_local(Debouncer::browser(delay, move |filters: FilterSet| {
        ctrl.apply_filters(filters)
    }));
    let handle = SearchHandle { debouncer };
    on_cleanup(move || handle.cancel());
    handle
}
