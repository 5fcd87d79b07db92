// ============================================================
// CATALOG DOMAIN LAYER
// ============================================================
// Core types for imported rows, products and the cart
// No I/O, no async

mod cart;
mod cell_value;
mod product;
mod product_field;
mod raw_row;
mod sample_products;

pub use cart::{Cart, CartItem};
pub use cell_value::{parse_leading_float, CellValue};
pub use product::{HeaderMapping, ImportBatch, Product};
pub use product_field::{ProductField, HEADER_RULES};
pub use raw_row::{unique_headers, RawRow, EMPTY_HEADER};
pub use sample_products::sample_products;
