use crate::system::users::api::{self, DEFAULT_ROLE_ID};
use contracts::system::users::CreateUserDto;
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UserRegisterViewModel {
    pub form: RwSignal<CreateUserDto>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
}

impl UserRegisterViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CreateUserDto {
                role_id: DEFAULT_ROLE_ID.to_string(),
                ..Default::default()
            }),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            saved: RwSignal::new(false),
        }
    }

    pub fn field_error(&self, field: &'static str) -> impl Fn() -> Option<String> + Copy + Send + Sync + 'static {
        let errors = self.field_errors;
        move || errors.with(|e| error_for(e, field).map(str::to_string))
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
            let result = api::register(&current).await;
            this.saving.set(false);
            match result {
                Ok(_) => this.saved.set(true),
                Err(e) => this.error.set(Some(e.user_message("Không thể tạo người dùng"))),
            }
        });
    }
}
