use super::view_model::PurchaseOrderDetailsViewModel;
use crate::shared::api_utils::upload_url;
use crate::shared::components::alert_banner::AlertBanner;
use crate::shared::components::list_frame::EmptyRow;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

const COLUMNS: &[&str] = &["STT", "Hình ảnh", "Sản phẩm", "Mã sku", "Giá", "Số lượng", "Ghi chú"];

/// Lines of one purchase order with editable price and quantity.
#[component]
pub fn PurchaseOrderDetailList() -> impl IntoView {
    let params = use_params_map();
    let purchase_order_id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
    let vm = PurchaseOrderDetailsViewModel::new(purchase_order_id);
    vm.load();

    let alert = Signal::derive(move || vm.current_alert());
    let on_dismiss = Callback::new(move |id: u64| {
        vm.alert.update(|a| {
            a.dismiss(id);
        });
    });
    let busy = Signal::derive(move || vm.saving.get() || vm.loading.get());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/purchase-orders" attr:class="button button--icon" attr:title="Quay lại">
                        {icon("arrow-left")}
                    </A>
                    <h1 class="page__title">"Chi tiết đơn đặt hàng"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command()
                        disabled=busy
                    >
                        {icon("check")}
                        {move || if vm.saving.get() { " Đang lưu..." } else { " Cập nhật đơn hàng" }}
                    </Button>
                </div>
            </div>

            <AlertBanner alert=alert on_dismiss=on_dismiss />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|c| view! { <th class="table__header-cell">{*c}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            // rows are rebuilt per load; edits only touch `vm.lines`
                            let lines = vm.loaded.get();
                            if lines.is_empty() {
                                return view! { <EmptyRow colspan=COLUMNS.len() /> }.into_any();
                            }
                            lines
                                .into_iter()
                                .enumerate()
                                .map(|(i, line)| {
                                    let id = line.id;
                                    let image = line.cover_image().map(upload_url);
                                    let name = line.version_name().to_string();
                                    let sku = line.version_sku().to_string();
                                    let price = line.price.to_string();
                                    let quantity = line.quantity.to_string();
                                    let note = line.note.clone().unwrap_or_default();
                                    let price_error = move || vm.line_error(id, "price");
                                    let quantity_error = move || vm.line_error(id, "quantity");
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{i + 1}</td>
                                            <td class="table__cell">
                                                {image.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                                            </td>
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{sku}</td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    min="0"
                                                    class:is-invalid=move || price_error().is_some()
                                                    value=price
                                                    on:input=move |ev| vm.set_price(id, &event_target_value(&ev))
                                                />
                                                <div class="invalid-feedback">{price_error}</div>
                                            </td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    min="1"
                                                    class:is-invalid=move || quantity_error().is_some()
                                                    value=quantity
                                                    on:input=move |ev| vm.set_quantity(id, &event_target_value(&ev))
                                                />
                                                <div class="invalid-feedback">{quantity_error}</div>
                                            </td>
                                            <td class="table__cell">{note}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
