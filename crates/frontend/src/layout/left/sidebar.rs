//! Sidebar with collapsible menu groups

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Hàng hóa",
            icon: "products",
            items: vec![
                ("/products", "Sản phẩm", "products"),
                ("/categories", "Danh mục", "categories"),
                ("/prices", "Giá sản phẩm", "prices"),
                ("/inventories", "Tồn kho", "inventory"),
                ("/colors", "Màu sắc", "colors"),
                ("/sizes", "Kích thước", "sizes"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Bán hàng",
            icon: "orders",
            items: vec![("/orders", "Đơn hàng", "orders")],
        },
        MenuGroup {
            id: "purchasing",
            label: "Nhập hàng",
            icon: "purchases",
            items: vec![
                ("/purchase-orders", "Đơn nhập hàng", "purchases"),
                ("/suppliers", "Nhà cung cấp", "suppliers"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Hệ thống",
            icon: "users",
            items: vec![("/users", "Người dùng", "users")],
        },
    ]
}

/// True when `pathname` is `href` itself or one of its sub-pages.
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_exp = group_id.clone();
                    let items = group.items;
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |ids| {
                                        if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|ids| ids.contains(&gid_exp))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                                <div class="app-sidebar__children">
                                    {items
                                        .iter()
                                        .map(|&(href, label, icon_name)| {
                                            view! {
                                                <A href=href attr:class="app-sidebar__link">
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            pathname.with(|p| is_active(p, href))
                                                        }
                                                        style:padding-left="10px"
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
