use crate::shared::icons::icon;
use crate::shared::list::alert::{Alert, AlertKind};
use leptos::prelude::*;

/// Transient error/success message above a list.
#[component]
pub fn AlertBanner(
    #[prop(into)] alert: Signal<Option<Alert>>,
    /// Called with the alert id when the user closes it
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    move || {
        alert.get().map(|alert| {
            let (modifier, glyph) = match alert.kind {
                AlertKind::Error => ("warning-box--error", "⚠"),
                AlertKind::Success => ("warning-box--success", "✓"),
            };
            let id = alert.id;
            view! {
                <div class=format!("warning-box {}", modifier) role="alert">
                    <span class="warning-box__icon">{glyph}</span>
                    <span class="warning-box__text">{alert.text}</span>
                    <button class="button button--icon" on:click=move |_| on_dismiss.run(id)>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
