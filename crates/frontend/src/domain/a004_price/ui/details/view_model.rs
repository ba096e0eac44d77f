use crate::domain::a004_price::api;
use contracts::domain::a004_price::{Price, PriceUpdate};
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;

/// Text of the two inputs; a blank promotion price means none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceForm {
    pub price_selling: String,
    pub promotion_price: String,
}

impl PriceForm {
    pub fn from_price(price: &Price) -> Self {
        let update = price.to_update();
        Self {
            price_selling: update.price_selling.map(|p| p.to_string()).unwrap_or_default(),
            promotion_price: update.promotion_price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// Unparseable text becomes NaN so validation rejects it.
    pub fn to_update(&self) -> PriceUpdate {
        let parse = |raw: &str| {
            let raw = raw.trim();
            (!raw.is_empty()).then(|| raw.parse::<f64>().unwrap_or(f64::NAN))
        };
        PriceUpdate {
            price_selling: parse(&self.price_selling),
            promotion_price: parse(&self.promotion_price),
        }
    }
}

#[derive(Clone, Copy)]
pub struct PriceDetailsViewModel {
    pub id: Option<i64>,
    pub version_name: RwSignal<String>,
    pub form: RwSignal<PriceForm>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
}

impl PriceDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            version_name: RwSignal::new(String::new()),
            form: RwSignal::new(PriceForm::default()),
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

    pub fn load(&self) {
        let Some(id) = self.id else {
            self.error.set(Some("Không tìm thấy giá".to_string()));
            return;
        };
        let this = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(price) => {
                    this.version_name.set(price.version_name().to_string());
                    this.form.set(PriceForm::from_price(&price));
                }
                Err(e) => this.error.set(Some(e.user_message("Không tìm thấy giá"))),
            }
        });
    }

    pub fn save_command(&self) {
        let Some(id) = self.id else {
            return;
        };
        let body = self.form.with_untracked(PriceForm::to_update);
        if let Err(errors) = body.validate() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(Vec::new());
        self.error.set(None);
        self.saving.set(true);

        let this = *self;
        leptos::task::spawn_local(async move {
            let result = api::update(id, &body).await;
            this.saving.set(false);
            match result {
                Ok(_) => this.saved.set(true),
                Err(e) => this.error.set(Some(e.user_message("Có lỗi xảy ra!"))),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_promotion_is_none() {
        let form = PriceForm {
            price_selling: " 150000 ".into(),
            promotion_price: "".into(),
        };
        assert_eq!(
            form.to_update(),
            PriceUpdate {
                price_selling: Some(150000.0),
                promotion_price: None
            }
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        let form = PriceForm {
            price_selling: "abc".into(),
            promotion_price: "".into(),
        };
        assert!(form.to_update().validate().is_err());
    }

    #[test]
    fn test_form_from_price() {
        let price: Price = serde_json::from_str(
            r#"{"id":3,"price_selling":200000,"promotion_price":180000}"#,
        )
        .unwrap();
        let form = PriceForm::from_price(&price);
        assert_eq!(form.price_selling, "200000");
        assert_eq!(form.promotion_price, "180000");
    }
}
