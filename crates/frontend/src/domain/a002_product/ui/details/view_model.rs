use crate::domain::a001_category::api as categories;
use crate::domain::a002_product::api;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::ProductDto;
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<ProductDto>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub categories: RwSignal<Vec<Category>>,
    pub saving: RwSignal<bool>,
    /// Set once the server accepted the form; the view redirects back to the list.
    pub saved: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            form: RwSignal::new(ProductDto::default()),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            categories: RwSignal::new(Vec::new()),
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

    /// Loads categories, and the product itself in edit mode.
    pub fn load(&self) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match categories::fetch_all().await {
                Ok(list) => this.categories.set(list),
                Err(e) => this.error.set(Some(e.user_message("Không thể tải danh mục"))),
            }
            if let Some(id) = this.id {
                match api::fetch_by_id(id).await {
                    Ok(product) => this.form.set(ProductDto::from(&product)),
                    Err(e) => this.error.set(Some(e.user_message("Không tìm thấy sản phẩm"))),
                }
            }
        });
    }

    pub fn save_command(&self) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.field_errors.set(errors);
            return;
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
                Err(e) => this.error.set(Some(e.user_message("Không thể lưu sản phẩm"))),
            }
        });
    }
}
