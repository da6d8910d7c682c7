pub mod coupon;
pub mod credit_card;

pub use coupon::coupon_config;
pub use credit_card::credit_card_config;
