use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_product_detail::ui::list::ProductVariantList;
use crate::domain::a004_price::ui::details::PriceDetails;
use crate::domain::a004_price::ui::list::PriceList;
use crate::domain::a005_inventory::ui::list::InventoryList;
use crate::domain::a006_supplier::ui::details::SupplierDetails;
use crate::domain::a006_supplier::ui::list::SupplierList;
use crate::domain::a007_order::ui::list::OrderList;
use crate::domain::a008_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a009_color::ui::details::ColorDetails;
use crate::domain::a009_color::ui::list::ColorList;
use crate::domain::a010_size::ui::details::SizeDetails;
use crate::domain::a010_size::ui::list::SizeList;
use crate::domain::a011_order_detail::ui::list::OrderDetailList;
use crate::domain::a012_purchase_order_detail::ui::list::PurchaseOrderDetailList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::users::ui::details::UserRegister;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Không tìm thấy trang"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell left=|| view! { <Sidebar /> }.into_any()>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/products/create") view=ProductDetails />
                    <Route path=path!("/products/:id") view=ProductDetails />
                    <Route path=path!("/products/:id/variants") view=ProductVariantList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/categories/create") view=CategoryDetails />
                    <Route path=path!("/categories/:id") view=CategoryDetails />
                    <Route path=path!("/colors") view=ColorList />
                    <Route path=path!("/colors/create") view=ColorDetails />
                    <Route path=path!("/colors/:id") view=ColorDetails />
                    <Route path=path!("/sizes") view=SizeList />
                    <Route path=path!("/sizes/create") view=SizeDetails />
                    <Route path=path!("/sizes/:id") view=SizeDetails />
                    <Route path=path!("/prices") view=PriceList />
                    <Route path=path!("/prices/:id") view=PriceDetails />
                    <Route path=path!("/inventories") view=InventoryList />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/orders/:id/details") view=OrderDetailList />
                    <Route path=path!("/purchase-orders") view=PurchaseOrderList />
                    <Route path=path!("/purchase-orders/:id/details") view=PurchaseOrderDetailList />
                    <Route path=path!("/suppliers") view=SupplierList />
                    <Route path=path!("/suppliers/create") view=SupplierDetails />
                    <Route path=path!("/suppliers/:id") view=SupplierDetails />
                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/users/create") view=UserRegister />
                </Routes>
            </Shell>
        </Router>
    }
}
