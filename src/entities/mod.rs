pub mod coupons;
pub mod credit_cards;

pub use coupons as coupon_entity;
pub use credit_cards as credit_card_entity;
