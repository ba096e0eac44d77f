use crate::domain::a011_order_detail::api;
use crate::shared::api_utils::upload_url;
use crate::shared::components::list_frame::EmptyRow;
use crate::shared::icons::icon;
use contracts::domain::a011_order_detail::OrderDetail;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

const COLUMNS: &[&str] = &["STT", "Hình ảnh", "Tên sản phẩm", "Số lượng"];

/// Read-only lines of one customer order.
#[component]
pub fn OrderDetailList() -> impl IntoView {
    let params = use_params_map();
    let order_id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));

    let lines = RwSignal::new(Vec::<OrderDetail>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    match order_id {
        Some(order_id) => leptos::task::spawn_local(async move {
            let result = api::fetch_by_order(order_id).await;
            loading.set(false);
            match result {
                Ok(rows) => lines.set(rows),
                Err(e) => error.set(Some(e.user_message("Không thể tải chi tiết đơn hàng"))),
            }
        }),
        None => {
            loading.set(false);
            error.set(Some("Không tìm thấy đơn hàng".to_string()));
        }
    }

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/orders" attr:class="button button--icon" attr:title="Quay lại">
                        {icon("arrow-left")}
                    </A>
                    <h1 class="page__title">"Chi tiết đơn hàng"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

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
                            if loading.get() {
                                return view! { <EmptyRow colspan=COLUMNS.len() text="Đang tải..." /> }.into_any();
                            }
                            let rows = lines.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=COLUMNS.len() /> }.into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(i, line)| {
                                    let image = line.cover_image().map(upload_url);
                                    let name = line.version_name().to_string();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{i + 1}</td>
                                            <td class="table__cell">
                                                {image.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                                            </td>
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{line.quantity}</td>
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
