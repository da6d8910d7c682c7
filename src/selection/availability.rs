use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::coupon_entity;

/// 返回属于 `card_id` 且在 `at` 时刻有效的优惠，保持输入顺序
pub fn available(
    coupons: &[coupon_entity::Model],
    card_id: Uuid,
    at: DateTime<Utc>,
) -> Vec<coupon_entity::Model> {
    coupons
        .iter()
        .filter(|c| c.card_id == card_id && c.is_available_at(at))
        .cloned()
        .collect()
}
