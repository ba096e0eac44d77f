use crate::domain::a012_purchase_order_detail::api;
use crate::shared::list::alert::{dismiss_later, Alert, AlertSlot};
use contracts::domain::a012_purchase_order_detail::{PurchaseOrderDetail, PurchaseOrderDetailUpdate};
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;

/// Errors of one edited line.
pub type LineErrors = (i64, Vec<FieldError>);

/// Unparseable input becomes a value the validator rejects.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Lines whose price or quantity differ from what was loaded, validated.
pub fn pending_updates(
    loaded: &[PurchaseOrderDetail],
    edited: &[PurchaseOrderDetail],
) -> Result<Vec<(i64, PurchaseOrderDetailUpdate)>, Vec<LineErrors>> {
    let mut updates = Vec::new();
    let mut errors = Vec::new();
    for line in edited {
        let body = line.to_update();
        let unchanged = loaded
            .iter()
            .any(|l| l.id == line.id && l.to_update() == body);
        if unchanged {
            continue;
        }
        match body.validate() {
            Ok(()) => updates.push((line.id, body)),
            Err(e) => errors.push((line.id, e)),
        }
    }
    if errors.is_empty() {
        Ok(updates)
    } else {
        Err(errors)
    }
}

#[derive(Clone, Copy)]
pub struct PurchaseOrderDetailsViewModel {
    pub purchase_order_id: Option<i64>,
    /// Lines as last fetched.
    pub loaded: RwSignal<Vec<PurchaseOrderDetail>>,
    /// Lines with the user's edits.
    pub lines: RwSignal<Vec<PurchaseOrderDetail>>,
    pub line_errors: RwSignal<Vec<LineErrors>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub alert: RwSignal<AlertSlot>,
}

impl PurchaseOrderDetailsViewModel {
    pub fn new(purchase_order_id: Option<i64>) -> Self {
        Self {
            purchase_order_id,
            loaded: RwSignal::new(Vec::new()),
            lines: RwSignal::new(Vec::new()),
            line_errors: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            alert: RwSignal::new(AlertSlot::default()),
        }
    }

    pub fn current_alert(&self) -> Option<Alert> {
        self.alert.with(|a| a.current().cloned())
    }

    pub fn line_error(&self, id: i64, field: &'static str) -> Option<String> {
        self.line_errors.with(|all| {
            all.iter()
                .find(|(line, _)| *line == id)
                .and_then(|(_, e)| error_for(e, field).map(str::to_string))
        })
    }

    fn notify(&self, success: bool, text: String) {
        let id = self
            .alert
            .try_update(|a| if success { a.success(text) } else { a.error(text) });
        if let Some(id) = id {
            dismiss_later(self.alert, id);
        }
    }

    pub fn load(&self) {
        let Some(purchase_order_id) = self.purchase_order_id else {
            self.notify(false, "Không tìm thấy đơn đặt hàng".to_string());
            return;
        };
        self.loading.set(true);
        let this = *self;
        leptos::task::spawn_local(async move {
            let result = api::fetch_by_purchase_order(purchase_order_id).await;
            this.loading.set(false);
            match result {
                Ok(rows) => {
                    this.loaded.set(rows.clone());
                    this.lines.set(rows);
                    this.line_errors.set(Vec::new());
                }
                Err(e) => this.notify(false, e.user_message("Không thể tải chi tiết đơn đặt hàng")),
            }
        });
    }

    pub fn set_quantity(&self, id: i64, raw: &str) {
        let quantity = parse_quantity(raw);
        self.lines.update(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
                line.quantity = quantity;
            }
        });
    }

    pub fn set_price(&self, id: i64, raw: &str) {
        let price = parse_price(raw);
        self.lines.update(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
                line.price = price;
            }
        });
    }

    pub fn save_command(&self) {
        let updates = match self
            .loaded
            .with_untracked(|loaded| self.lines.with_untracked(|lines| pending_updates(loaded, lines)))
        {
            Ok(updates) => updates,
            Err(errors) => {
                self.line_errors.set(errors);
                return;
            }
        };
        self.line_errors.set(Vec::new());
        if updates.is_empty() {
            return;
        }
        self.saving.set(true);

        let this = *self;
        leptos::task::spawn_local(async move {
            let mut failed = 0;
            for (id, body) in &updates {
                if let Err(e) = api::update(*id, body).await {
                    log::warn!("update purchase order line {}: {}", id, e);
                    failed += 1;
                }
            }
            this.saving.set(false);
            if failed == 0 {
                this.notify(true, "Cập nhật đơn hàng thành công!".to_string());
            } else {
                this.notify(false, "Không thể cập nhật đơn hàng!".to_string());
            }
            this.load();
        });
    }
}
