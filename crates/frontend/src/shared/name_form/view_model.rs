use super::api::{self, NamedResource};
use contracts::shared::named::NameDto;
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;
use std::marker::PhantomData;

pub struct NameFormViewModel<R> {
    pub id: Option<i64>,
    pub form: RwSignal<NameDto>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for NameFormViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for NameFormViewModel<R> {}

impl<R: NamedResource> NameFormViewModel<R> {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            form: RwSignal::new(NameDto::default()),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            saved: RwSignal::new(false),
            _resource: PhantomData,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn name_error(&self) -> impl Fn() -> Option<String> + Copy + Send + Sync + 'static {
        let errors = self.field_errors;
        move || errors.with(|e| error_for(e, "name").map(str::to_string))
    }

    pub fn load(&self) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_by_id::<R>(id).await {
                Ok(dto) => this.form.set(dto),
                Err(e) => this.error.set(Some(e.user_message("Không tìm thấy dữ liệu"))),
            }
        });
    }

    pub fn save_command(&self) {
        let mut current = self.form.get_untracked();
        if let Err(errors) = current.validate(R::NAME_REQUIRED) {
            self.field_errors.set(errors);
            return;
        }
        current.name = current.name.trim().to_string();
        self.field_errors.set(Vec::new());
        self.error.set(None);
        self.saving.set(true);

        let this = *self;
        leptos::task::spawn_local(async move {
            let result = match this.id {
                Some(id) => api::update::<R>(id, &current).await,
                None => api::create::<R>(&current).await,
            };
            this.saving.set(false);
            match result {
                Ok(_) => this.saved.set(true),
                Err(e) => this.error.set(Some(e.user_message("Không thể lưu"))),
            }
        });
    }
}
