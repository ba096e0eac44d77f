//! Row mutations and the mutate-then-refresh sequence.

use super::driver::{run_request, ListSource, StateHost};
use super::state::{LoadOutcome, MutationSettled};
use contracts::shared::paging::EntityId;
use serde_json::{json, Value};

/// A change applied to a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Delete,
    Update(Value),
    Lock,
    Unlock,
    SetStatus(String),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Delete => "delete",
            Mutation::Update(_) => "update",
            Mutation::Lock => "lock",
            Mutation::Unlock => "unlock",
            Mutation::SetStatus(_) => "set status",
        }
    }

    /// JSON request body, if the mutation carries one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Mutation::Update(body) => Some(body.clone()),
            Mutation::SetStatus(status) => Some(json!({ "status": status })),
            Mutation::Delete | Mutation::Lock | Mutation::Unlock => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub settled: MutationSettled,
    /// Outcome of the follow-up reload; `None` when the mutation failed.
    pub refresh: Option<LoadOutcome>,
}

/// Runs `mutation` against row `id`, then reloads the page and filters that
/// were active before it. A failed mutation does not reload.
///
/// Returns `None` when the state went away in the meantime (view unmounted).
pub async fn mutate_then_refresh<T, H, S>(
    host: &H,
    source: &S,
    id: EntityId,
    mutation: Mutation,
) -> Option<MutationOutcome>
where
    H: StateHost<T>,
    S: ListSource<Item = T>,
{
    log::debug!("{} {}", mutation.name(), id);
    let result = source.mutate(&id, &mutation).await;
    let settled = host.with_state(|state| state.finish_mutation(result))?;

    let refresh = match &settled {
        MutationSettled::Succeeded { refresh, .. } => {
            run_request(host, source, refresh.clone()).await
        }
        MutationSettled::Failed { .. } => None,
    };
    Some(MutationOutcome { settled, refresh })
}

/// Executes the mutation the user confirmed in the dialog, if any.
pub async fn confirm_and_mutate<T, H, S>(host: &H, source: &S) -> Option<MutationOutcome>
where
    H: StateHost<T>,
    S: ListSource<Item = T>,
{
    let pending = host.with_state(|state| state.take_confirmed()).flatten()?;
    mutate_then_refresh(host, source, pending.id, pending.mutation).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::ApiError;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::state::{ListRequest, ListState};
    use contracts::shared::api::MessageResponse;
    use contracts::shared::paging::PageData;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// In-memory backend: one row per id, pages of `limit` rows.
    struct FakeSource {
        rows: RefCell<Vec<i64>>,
        fail_mutations: bool,
        fetches: RefCell<Vec<ListRequest>>,
    }

    impl FakeSource {
        fn new(rows: Vec<i64>) -> Self {
            Self {
                rows: RefCell::new(rows),
                fail_mutations: false,
                fetches: RefCell::new(Vec::new()),
            }
        }
    }

    impl ListSource for FakeSource {
        type Item = i64;

        async fn fetch_page(&self, request: &ListRequest) -> Result<PageData<i64>, ApiError> {
            self.fetches.borrow_mut().push(request.clone());
            let rows = self.rows.borrow();
            let limit = request.limit as usize;
            let total = rows.len().div_ceil(limit) as u32;
            let content = rows
                .iter()
                .skip((request.page as usize - 1) * limit)
                .take(limit)
                .copied()
                .collect();
            Ok(PageData::new(content, total))
        }

        async fn mutate(&self, id: &EntityId, mutation: &Mutation) -> Result<MessageResponse, ApiError> {
            if self.fail_mutations {
                return Err(ApiError::Server {
                    status: 409,
                    message: "Row is in use".into(),
                });
            }
            if let (Mutation::Delete, EntityId::Int(id)) = (mutation, id) {
                self.rows.borrow_mut().retain(|row| row != id);
            }
            Ok(MessageResponse::with_message("Deleted successfully"))
        }
    }

    fn loaded(source: &FakeSource, page: u32, filters: FilterSet) -> RefCell<ListState<i64>> {
        let host = RefCell::new(ListState::new());
        let req = host.borrow_mut().load(page, filters);
        block_on(run_request(&host, source, req));
        source.fetches.borrow_mut().clear();
        host
    }

    #[test]
    fn test_successful_delete_refreshes_once() {
        let source = FakeSource::new((1..=12).collect());
        let filters = FilterSet::new().with("name", "x");
        let host = loaded(&source, 2, filters.clone());

        let outcome = block_on(mutate_then_refresh(&host, &source, EntityId::Int(6), Mutation::Delete)).unwrap();

        assert!(matches!(outcome.settled, MutationSettled::Succeeded { .. }));
        assert_eq!(outcome.refresh, Some(LoadOutcome::Applied));
        let fetches = source.fetches.borrow();
        assert_eq!(fetches.len(), 1);
        assert_eq!((fetches[0].page, &fetches[0].filters), (2, &filters));
        assert_eq!(host.borrow().items(), &[7, 8, 9, 10, 11]);
        assert_eq!(host.borrow().alert().unwrap().text, "Deleted successfully");
    }

    #[test]
    fn test_failed_delete_changes_nothing() {
        let mut source = FakeSource::new((1..=12).collect());
        source.fail_mutations = true;
        let host = loaded(&source, 1, FilterSet::new());
        host.borrow_mut().request_confirm(EntityId::Int(1), Mutation::Delete);

        let outcome = block_on(confirm_and_mutate(&host, &source)).unwrap();

        assert!(matches!(outcome.settled, MutationSettled::Failed { .. }));
        assert_eq!(outcome.refresh, None);
        assert!(source.fetches.borrow().is_empty());
        let state = host.borrow();
        assert_eq!(state.items(), &[1, 2, 3, 4, 5]);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.alert().unwrap().text, "Row is in use");
        assert!(state.pending_confirmation().is_none());
    }

    #[test]
    fn test_deleting_last_row_of_last_page() {
        let source = FakeSource::new((1..=11).collect());
        let host = loaded(&source, 3, FilterSet::new());
        assert_eq!(host.borrow().items(), &[11]);

        block_on(mutate_then_refresh(&host, &source, EntityId::Int(11), Mutation::Delete));

        let fetches: Vec<u32> = source.fetches.borrow().iter().map(|r| r.page).collect();
        assert_eq!(fetches, vec![3, 2]);
        let state = host.borrow();
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.items(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let source = FakeSource::new(vec![1]);
        let host = RefCell::new(ListState::<i64>::new());
        assert!(block_on(confirm_and_mutate(&host, &source)).is_none());
    }

    #[test]
    fn test_bodies() {
        assert_eq!(Mutation::Delete.body(), None);
        assert_eq!(
            Mutation::SetStatus("SHIPPING".into()).body(),
            Some(json!({ "status": "SHIPPING" }))
        );
        assert_eq!(Mutation::Lock.name(), "lock");
    }
}
