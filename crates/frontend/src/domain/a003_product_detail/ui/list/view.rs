use super::view_model::ProductVariantsViewModel;
use crate::shared::api_utils::upload_url;
use crate::shared::components::alert_banner::AlertBanner;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::components::list_frame::EmptyRow;
use crate::shared::format::{format_date, format_optional_vnd, format_vnd};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

const COLUMNS: &[&str] = &[
    "Hình ảnh",
    "Tên phiên bản",
    "Giá bán",
    "Giá khuyến mãi",
    "Ngày bắt đầu",
    "Ngày kết thúc",
];

/// Variants of one product with multi-select delete.
#[component]
pub fn ProductVariantList() -> impl IntoView {
    let params = use_params_map();
    let product_id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let vm = ProductVariantsViewModel::new(product_id);
    vm.load();

    let alert = Signal::derive(move || vm.current_alert());
    let on_dismiss = Callback::new(move |id: u64| {
        vm.alert.update(|a| {
            a.dismiss(id);
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/products" attr:class="button button--icon" attr:title="Quay lại">
                        {icon("arrow-left")}
                    </A>
                    <h1 class="page__title">"Phiên bản sản phẩm"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.request_delete()
                        disabled=Signal::derive(move || vm.selected.with(|s| s.is_empty()))
                    >
                        {icon("delete")}
                        {move || format!(" Xóa đã chọn ({})", vm.selected.with(|s| s.len()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load()
                        disabled=vm.loading
                    >
                        {icon("refresh")}
                        {move || if vm.loading.get() { " Đang tải..." } else { " Làm mới" }}
                    </Button>
                </div>
            </div>

            <AlertBanner alert=alert on_dismiss=on_dismiss />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.all_selected()
                                    on:change=move |_| vm.toggle_all()
                                />
                            </th>
                            {COLUMNS
                                .iter()
                                .map(|c| view! { <th class="table__header-cell">{*c}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let variants = vm.variants.get();
                            if variants.is_empty() {
                                return view! { <EmptyRow colspan=COLUMNS.len() + 1 /> }.into_any();
                            }
                            variants
                                .into_iter()
                                .map(|variant| {
                                    let id = variant.id;
                                    let image = variant.cover_image().map(upload_url);
                                    let price = variant.price.clone();
                                    let selling = price
                                        .as_ref()
                                        .map(|p| format_vnd(p.price_selling))
                                        .unwrap_or_else(|| "-".to_string());
                                    let promotion = format_optional_vnd(
                                        price.as_ref().and_then(|p| p.promotion_price),
                                    );
                                    let start = price
                                        .as_ref()
                                        .and_then(|p| p.start_date.as_deref())
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    let end = price
                                        .as_ref()
                                        .and_then(|p| p.end_date.as_deref())
                                        .map(format_date)
                                        .unwrap_or_else(|| "Không giới hạn".to_string());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || vm.selected.with(|s| s.contains(&id))
                                                    on:change=move |_| vm.toggle(id)
                                                />
                                            </td>
                                            <td class="table__cell">
                                                {image.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                                            </td>
                                            <td class="table__cell">{variant.version_name}</td>
                                            <td class="table__cell">{selling}</td>
                                            <td class="table__cell">{promotion}</td>
                                            <td class="table__cell">{start}</td>
                                            <td class="table__cell">{end}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                vm.confirming.get().then(|| view! {
                    <ConfirmModal
                        title="Xác nhận"
                        message=Signal::derive(|| "Bạn có muốn xóa các sản phẩm đã chọn không?".to_string())
                        on_confirm=Callback::new(move |_| vm.delete_selected())
                        on_cancel=Callback::new(move |_| vm.cancel_delete())
                    />
                })
            }}
        </div>
    }
}
