pub mod a001_category;
pub mod a002_product;
pub mod a003_product_detail;
pub mod a004_price;
pub mod a005_inventory;
pub mod a006_supplier;
pub mod a007_order;
pub mod a008_purchase_order;
pub mod a009_color;
pub mod a010_size;
pub mod a011_order_detail;
pub mod a012_purchase_order_detail;
