use crate::domain::a006_supplier::api;
use contracts::domain::a006_supplier::{Supplier, SupplierDto};
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<SupplierDto>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
}

fn to_dto(s: &Supplier) -> SupplierDto {
    SupplierDto {
        name: s.name.clone(),
        phone_number: s.phone_number.clone(),
        address: s.address.clone(),
        email: s.email.clone(),
    }
}

impl SupplierDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            form: RwSignal::new(SupplierDto::default()),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            saved: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn field_error(&self, field: &'static str) -> impl Fn() -> Option<String> + Copy + Send + Sync + 'static {
        let errors = self.field_errors;
        move || errors.with(|e| error_for(e, field).map(str::to_string))
    }

    pub fn load(&self) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(supplier) => this.form.set(to_dto(&supplier)),
                Err(e) => this.error.set(Some(e.user_message("Không tìm thấy nhà cung cấp"))),
            }
        });
    }

    pub fn save_command(&self) {
        let mut current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.field_errors.set(errors);
            return;
        }
        // blank email is sent as null
        if current.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            current.email = None;
        }
        self.field_errors.set(Vec::new());
        self.error.set(None);
        self.saving.set(true);

        let this = *self;
        leptos::task::spawn_local(async move {
            let result = match this.id {
                Some(id) => api::update(id, &current).await,
                None => api::create(&current).await,
            };
            this.saving.set(false);
            match result {
                Ok(_) => this.saved.set(true),
                Err(e) => this.error.set(Some(e.user_message("Không thể lưu nhà cung cấp"))),
            }
        });
    }
}
