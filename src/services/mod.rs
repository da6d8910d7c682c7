pub mod coupon_service;
pub mod credit_card_service;

pub use coupon_service::*;
pub use credit_card_service::*;
