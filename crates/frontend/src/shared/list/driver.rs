//! Async glue between [`ListState`] and a data source.

use super::filters::FilterSet;
use super::mutation::Mutation;
use super::resource::{request_path, ListResource};
use super::state::{ListRequest, ListState, LoadOutcome};
use crate::shared::http::{self, ApiError};
use contracts::shared::api::{ApiEnvelope, MessageResponse};
use contracts::shared::paging::{EntityId, PageData, PagePayload};
use leptos::prelude::{RwSignal, Update};
use std::cell::RefCell;
use std::marker::PhantomData;

/// Somewhere a [`ListState`] lives. Returns `None` once the state is gone,
/// so late responses are dropped instead of panicking.
pub trait StateHost<T> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R>;
}

impl<T> StateHost<T> for RefCell<ListState<T>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateHost<T> for RwSignal<ListState<T>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Where pages come from and where mutations go.
#[allow(async_fn_in_trait)]
pub trait ListSource {
    type Item;

    async fn fetch_page(&self, request: &ListRequest) -> Result<PageData<Self::Item>, ApiError>;

    async fn mutate(&self, id: &EntityId, mutation: &Mutation) -> Result<MessageResponse, ApiError>;
}

/// Fetches `request` and applies it, following re-clamp requests.
pub async fn run_request<T, H, S>(host: &H, source: &S, request: ListRequest) -> Option<LoadOutcome>
where
    H: StateHost<T>,
    S: ListSource<Item = T>,
{
    let mut request = request;
    loop {
        let result = source.fetch_page(&request).await;
        match host.with_state(|state| state.receive(request.seq, result))? {
            LoadOutcome::Reclamp(next) => request = next,
            outcome => return Some(outcome),
        }
    }
}

/// Applies a state transition and runs the request it produced, if any.
pub async fn dispatch<T, H, S>(
    host: &H,
    source: &S,
    transition: impl FnOnce(&mut ListState<T>) -> Option<ListRequest>,
) -> Option<LoadOutcome>
where
    H: StateHost<T>,
    S: ListSource<Item = T>,
{
    let request = host.with_state(transition).flatten()?;
    run_request(host, source, request).await
}

/// Loads `page` with `filters`.
pub async fn load<T, H, S>(
    host: &H,
    source: &S,
    page: u32,
    filters: FilterSet,
) -> Option<LoadOutcome>
where
    H: StateHost<T>,
    S: ListSource<Item = T>,
{
    dispatch(host, source, |state| Some(state.load(page, filters))).await
}

/// REST-backed source for resource `R`.
pub struct HttpSource<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R> HttpSource<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

impl<R> Default for HttpSource<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for HttpSource<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for HttpSource<R> {}

impl<R: ListResource> ListSource for HttpSource<R> {
    type Item = R::Item;

    async fn fetch_page(&self, request: &ListRequest) -> Result<PageData<R::Item>, ApiError> {
        let path = request_path::<R>(request);
        let envelope: ApiEnvelope<PagePayload<R::Item>> = http::get_json(&path).await?;
        // a missing `data` field means "nothing to show"
        Ok(envelope
            .data
            .map(PageData::from)
            .unwrap_or_else(|| PageData::new(Vec::new(), 1)))
    }

    async fn mutate(&self, id: &EntityId, mutation: &Mutation) -> Result<MessageResponse, ApiError> {
        let route = R::mutation_route(id, mutation);
        match mutation.body() {
            Some(body) => http::send_message(route.method, &route.path, &body).await,
            None => http::send_empty(route.method, &route.path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Serves a fixed sequence of answers, one per fetch.
    struct Scripted {
        answers: RefCell<Vec<Result<PageData<&'static str>, ApiError>>>,
        calls: Cell<u32>,
    }

    impl Scripted {
        fn new(mut answers: Vec<Result<PageData<&'static str>, ApiError>>) -> Self {
            answers.reverse();
            Self {
                answers: RefCell::new(answers),
                calls: Cell::new(0),
            }
        }
    }

    impl ListSource for Scripted {
        type Item = &'static str;

        async fn fetch_page(&self, _request: &ListRequest) -> Result<PageData<&'static str>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.answers
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(ApiError::Network("script exhausted".into())))
        }

        async fn mutate(&self, _id: &EntityId, _mutation: &Mutation) -> Result<MessageResponse, ApiError> {
            Ok(MessageResponse::with_message("ok"))
        }
    }

    /// Host whose view has been torn down.
    struct Gone;

    impl StateHost<&'static str> for Gone {
        fn with_state<R>(&self, _f: impl FnOnce(&mut ListState<&'static str>) -> R) -> Option<R> {
            None
        }
    }

    #[test]
    fn test_load_applies_page() {
        let source = Scripted::new(vec![Ok(PageData::new(vec!["a", "b"], 2))]);
        let host = RefCell::new(ListState::new());
        let outcome = block_on(load(&host, &source, 1, FilterSet::new()));
        assert_eq!(outcome, Some(LoadOutcome::Applied));
        assert_eq!(host.borrow().items(), &["a", "b"]);
    }

    #[test]
    fn test_response_for_superseded_request_is_dropped() {
        let source = Scripted::new(vec![Ok(PageData::new(vec!["old"], 1))]);
        let host = RefCell::new(ListState::new());
        let first = host.borrow_mut().load(1, FilterSet::new().with("name", "a"));
        let _second = host.borrow_mut().load(1, FilterSet::new().with("name", "ab"));

        assert_eq!(block_on(run_request(&host, &source, first)), Some(LoadOutcome::Stale));
        assert!(host.borrow().items().is_empty());
        assert!(host.borrow().is_loading());
    }

    #[test]
    fn test_reclamp_issues_one_follow_up() {
        let source = Scripted::new(vec![
            Ok(PageData::new(vec![], 2)),
            Ok(PageData::new(vec!["x"], 2)),
        ]);
        let host = RefCell::new(ListState::new());
        let outcome = block_on(load(&host, &source, 4, FilterSet::new()));
        assert_eq!(outcome, Some(LoadOutcome::Applied));
        assert_eq!(source.calls.get(), 2);
        assert_eq!(host.borrow().current_page(), 2);
        assert_eq!(host.borrow().items(), &["x"]);
    }

    #[test]
    fn test_repeated_loads_are_idempotent() {
        let page = || Ok(PageData::new(vec!["a"], 3));
        let source = Scripted::new(vec![page(), page()]);
        let host = RefCell::new(ListState::new());
        block_on(load(&host, &source, 2, FilterSet::new()));
        block_on(dispatch(&host, &source, |s| Some(s.refresh())));
        let state = host.borrow();
        assert_eq!((state.current_page(), state.total_pages()), (2, 3));
        assert_eq!(state.items(), &["a"]);
    }

    #[test]
    fn test_out_of_range_transition_fetches_nothing() {
        let source = Scripted::new(vec![]);
        let host = RefCell::new(ListState::<&'static str>::new());
        assert_eq!(block_on(dispatch(&host, &source, |s| s.go_to_page(9))), None);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_disposed_host_drops_response() {
        let source = Scripted::new(vec![Ok(PageData::new(vec!["a"], 1))]);
        let host = RefCell::new(ListState::<&'static str>::new());
        let req = host.borrow_mut().load(1, FilterSet::new());
        assert_eq!(block_on(run_request(&Gone, &source, req)), None);
        assert_eq!(source.calls.get(), 1);
        assert!(host.borrow().items().is_empty());
    }
}
