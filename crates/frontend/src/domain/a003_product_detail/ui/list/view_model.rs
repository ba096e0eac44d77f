use crate::domain::a003_product_detail::api;
use crate::shared::list::alert::{dismiss_later, Alert, AlertSlot};
use contracts::domain::a003_product_detail::ProductDetail;
use leptos::prelude::*;

/// Adds `id` to the selection, or removes it when already there.
pub fn toggle_one(selected: &mut Vec<i64>, id: i64) {
    match selected.iter().position(|&s| s == id) {
        Some(i) => {
            selected.remove(i);
        }
        None => selected.push(id),
    }
}

/// Selects every id, or clears the selection when all are already selected.
pub fn toggle_all(selected: &mut Vec<i64>, all: &[i64]) {
    if is_all_selected(selected, all) {
        selected.clear();
    } else {
        *selected = all.to_vec();
    }
}

pub fn is_all_selected(selected: &[i64], all: &[i64]) -> bool {
    !all.is_empty() && all.iter().all(|id| selected.contains(id))
}

#[derive(Clone, Copy)]
pub struct ProductVariantsViewModel {
    pub product_id: Option<i64>,
    pub variants: RwSignal<Vec<ProductDetail>>,
    pub selected: RwSignal<Vec<i64>>,
    pub loading: RwSignal<bool>,
    pub confirming: RwSignal<bool>,
    pub alert: RwSignal<AlertSlot>,
}

impl ProductVariantsViewModel {
    pub fn new(product_id: Option<i64>) -> Self {
        Self {
            product_id,
            variants: RwSignal::new(Vec::new()),
            selected: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            confirming: RwSignal::new(false),
            alert: RwSignal::new(AlertSlot::default()),
        }
    }

    pub fn current_alert(&self) -> Option<Alert> {
        self.alert.with(|a| a.current().cloned())
    }

    fn raise_error(&self, text: String) {
        let id = self.alert.try_update(|a| a.error(text));
        if let Some(id) = id {
            dismiss_later(self.alert, id);
        }
    }

    pub fn load(&self) {
        let Some(product_id) = self.product_id else {
            self.raise_error("Không tìm thấy sản phẩm".to_string());
            return;
        };
        self.loading.set(true);
        let this = *self;
        leptos::task::spawn_local(async move {
            let result = api::fetch_by_product(product_id).await;
            this.loading.set(false);
            match result {
                Ok(variants) => {
                    // drop selections whose rows are gone
                    this.selected.update(|s| s.retain(|id| variants.iter().any(|v| v.id == *id)));
                    this.variants.set(variants);
                }
                Err(e) => this.raise_error(e.user_message("Không thể tải danh sách phiên bản")),
            }
        });
    }

    pub fn toggle(&self, id: i64) {
        self.selected.update(|s| toggle_one(s, id));
    }

    pub fn toggle_all(&self) {
        let all: Vec<i64> = self.variants.with(|v| v.iter().map(|d| d.id).collect());
        self.selected.update(|s| toggle_all(s, &all));
    }

    pub fn all_selected(&self) -> bool {
        let all: Vec<i64> = self.variants.with(|v| v.iter().map(|d| d.id).collect());
        self.selected.with(|s| is_all_selected(s, &all))
    }

    pub fn request_delete(&self) {
        if self.selected.with(|s| !s.is_empty()) {
            self.confirming.set(true);
        }
    }

    pub fn cancel_delete(&self) {
        self.confirming.set(false);
    }

    pub fn delete_selected(&self) {
        self.confirming.set(false);
        let ids = self.selected.get_untracked();
        if ids.is_empty() {
            return;
        }
        let this = *self;
        leptos::task::spawn_local(async move {
            let failed = api::delete_many(&ids).await;
            let id = this.alert.try_update(|a| {
                if failed.is_empty() {
                    a.success("Xóa phiên bản thành công")
                } else {
                    a.error(format!("Không thể xóa {} phiên bản", failed.len()))
                }
            });
            if let Some(id) = id {
                dismiss_later(this.alert, id);
            }
            this.selected.set(failed);
            this.load();
        });
    }
}
