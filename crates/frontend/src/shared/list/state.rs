//! Paginated list state machine.
//!
//! [`ListState`] never talks to the network. Every transition that needs data
//! returns a [`ListRequest`]; the caller fetches it and feeds the result back
//! through [`ListState::receive`]. Requests carry a sequence number and only
//! the most recently dispatched one is allowed to change the state.

use super::alert::{Alert, AlertSlot};
use super::filters::FilterSet;
use super::mutation::Mutation;
use super::page_items::{page_items, PageItem};
use crate::shared::config::ListConfig;
use crate::shared::http::ApiError;
use contracts::shared::api::MessageResponse;
use contracts::shared::paging::{EntityId, PageData};

const LOAD_FAILED: &str = "Không thể tải dữ liệu";
const MUTATION_FAILED: &str = "Thao tác thất bại";
const MUTATION_SUCCEEDED: &str = "Thao tác thành công";

/// Which backend endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Listing,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub seq: u64,
    pub endpoint: Endpoint,
    pub page: u32,
    pub limit: u32,
    pub filters: FilterSet,
}

/// What [`ListState::receive`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was dispatched in the meantime; nothing changed.
    Stale,
    Failed { alert_id: u64 },
    /// The current page no longer exists; fetch this one instead.
    Reclamp(ListRequest),
}

/// Mutation awaiting user confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    pub id: EntityId,
    pub mutation: Mutation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationSettled {
    Succeeded { notice_id: u64, refresh: ListRequest },
    Failed { alert_id: u64 },
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    config: ListConfig,
    items: Vec<T>,
    /// Page whose rows are on screen; moves only when a response is applied.
    current_page: u32,
    /// Page of the latest dispatched request.
    requested_page: u32,
    total_pages: u32,
    page_size: u32,
    filters: FilterSet,
    loading: bool,
    loaded: bool,
    seq: u64,
    alert: AlertSlot,
    confirmation: Option<PendingMutation>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::from_config(ListConfig::default())
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ListConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            current_page: 1,
            requested_page: 1,
            total_pages: 1,
            page_size: config.page_size.max(1),
            filters: FilterSet::new(),
            loading: false,
            loaded: false,
            seq: 0,
            alert: AlertSlot::default(),
            confirmation: None,
        }
    }

    // ---- accessors ----

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// 1-based row number of the first row on screen.
    pub fn first_row_number(&self) -> u32 {
        (self.current_page - 1) * self.page_size + 1
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once a response has been applied and it had no rows.
    pub fn is_empty(&self) -> bool {
        self.loaded && self.items.is_empty()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.current()
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        page_items(
            self.current_page,
            self.total_pages,
            self.config.max_pages_to_show,
        )
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    // ---- transitions ----

    /// Records `page` and `filters` and dispatches a new request.
    pub fn load(&mut self, page: u32, filters: FilterSet) -> ListRequest {
        self.requested_page = page.max(1);
        self.filters = filters;
        self.dispatch()
    }

    /// `None` when `page` is outside `1..=total_pages`.
    pub fn go_to_page(&mut self, page: u32) -> Option<ListRequest> {
        if page < 1 || page > self.total_pages {
            return None;
        }
        let filters = self.filters.clone();
        Some(self.load(page, filters))
    }

    pub fn next_page(&mut self) -> Option<ListRequest> {
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> Option<ListRequest> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// New search terms always start over at page 1.
    pub fn apply_filters(&mut self, filters: FilterSet) -> ListRequest {
        self.load(1, filters)
    }

    pub fn clear_filters(&mut self) -> ListRequest {
        self.load(1, FilterSet::new())
    }

    /// Reloads the page on screen with the current filters.
    pub fn refresh(&mut self) -> ListRequest {
        self.requested_page = self.current_page;
        self.dispatch()
    }

    fn dispatch(&mut self) -> ListRequest {
        self.seq += 1;
        self.loading = true;
        let endpoint = if self.filters.is_active() {
            Endpoint::Search
        } else {
            Endpoint::Listing
        };
        let request = ListRequest {
            seq: self.seq,
            endpoint,
            page: self.requested_page,
            limit: self.page_size,
            filters: self.filters.clone(),
        };
        log::debug!(
            "list request #{} {:?} page={} limit={}",
            request.seq,
            request.endpoint,
            request.page,
            request.limit
        );
        request
    }

    /// Applies the response of request `seq`.
    pub fn receive(&mut self, seq: u64, result: Result<PageData<T>, ApiError>) -> LoadOutcome {
        if seq != self.seq {
            log::debug!("dropping stale response #{} (latest #{})", seq, self.seq);
            return LoadOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.items = page.content;
                self.total_pages = page.total_pages.max(1);
                self.loaded = true;
                if self.requested_page > self.total_pages {
                    log::debug!(
                        "page {} is gone, moving to {}",
                        self.requested_page,
                        self.total_pages
                    );
                    self.requested_page = self.total_pages;
                    self.current_page = self.total_pages;
                    return LoadOutcome::Reclamp(self.dispatch());
                }
                self.current_page = self.requested_page;
                LoadOutcome::Applied
            }
            Err(err) => {
                log::warn!("list request #{} failed: {}", seq, err);
                // rows on screen still belong to the previous page
                self.requested_page = self.current_page;
                let alert_id = self.alert.error(err.user_message(LOAD_FAILED));
                LoadOutcome::Failed { alert_id }
            }
        }
    }

    pub fn dismiss_alert(&mut self, id: u64) -> bool {
        self.alert.dismiss(id)
    }

    // ---- confirmation ----

    pub fn request_confirm(&mut self, id: EntityId, mutation: Mutation) {
        self.confirmation = Some(PendingMutation { id, mutation });
    }

    pub fn cancel_confirm(&mut self) {
        self.confirmation = None;
    }

    pub fn pending_confirmation(&self) -> Option<&PendingMutation> {
        self.confirmation.as_ref()
    }

    /// Hands the confirmed mutation over and closes the dialog.
    pub fn take_confirmed(&mut self) -> Option<PendingMutation> {
        self.confirmation.take()
    }

    /// Settles a mutation. Success raises a notice and asks for one refresh of
    /// the page the user was looking at; failure leaves the rows untouched.
    pub fn finish_mutation(&mut self, result: Result<MessageResponse, ApiError>) -> MutationSettled {
        self.confirmation = None;
        match result {
            Ok(response) => {
                let text = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MUTATION_SUCCEEDED.to_string());
                let notice_id = self.alert.success(text);
                MutationSettled::Succeeded {
                    notice_id,
                    refresh: self.refresh(),
                }
            }
            Err(err) => {
                log::warn!("mutation failed: {}", err);
                let alert_id = self.alert.error(err.user_message(MUTATION_FAILED));
                MutationSettled::Failed { alert_id }
            }
        }
    }
}
