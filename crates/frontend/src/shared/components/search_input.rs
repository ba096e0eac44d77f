use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text box that reports every keystroke; debouncing is up to the caller.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    let is_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    value.set(text.clone());
                    on_change.run(text);
                }
            />
            <Show when=is_active>
                <button
                    class="search-input__clear"
                    title="Xóa"
                    on:click=move |_| {
                        value.set(String::new());
                        on_change.run(String::new());
                    }
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
