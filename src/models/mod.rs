pub mod common;
pub mod coupon;
pub mod credit_card;

pub use common::*;
pub use coupon::*;
pub use credit_card::*;
