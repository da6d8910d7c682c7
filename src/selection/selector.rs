use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::availability::available;
use super::validation::Constraints;
use crate::entities::coupon_entity;
use crate::error::InvalidQueryError;

/// 通用优惠 (0,0,0) 中折扣率最高的一条；折扣率相同时取先出现的
pub fn select_general_best(available: &[coupon_entity::Model]) -> Option<&coupon_entity::Model> {
    available
        .iter()
        .filter(|c| c.is_general())
        .fold(None, |best: Option<&coupon_entity::Model>, c| match best {
            Some(b) if c.rate <= b.rate => Some(b),
            _ => Some(c),
        })
}

/// 按限制匹配，结果按优惠自身的 (category, payment, merchant) 升序；
/// 排序稳定，相同标签保持输入顺序
pub fn select_constrained(
    available: &[coupon_entity::Model],
    constraints: Constraints,
) -> Vec<coupon_entity::Model> {
    let mut matched: Vec<coupon_entity::Model> = available
        .iter()
        .filter(|c| constraints.matches(c))
        .cloned()
        .collect();
    matched.sort_by_key(coupon_entity::Model::constraint_key);
    matched
}

/// 通用最优（0 或 1 条）在前，限制匹配结果在后。
///
/// 通用最优若同时满足限制条件会出现两次，调用方依赖这一顺序，不做去重。
pub fn select_with_constraints(
    coupons: &[coupon_entity::Model],
    card_id: Uuid,
    at: DateTime<Utc>,
    constraints: Constraints,
) -> Result<Vec<coupon_entity::Model>, InvalidQueryError> {
    constraints.validate()?;

    let candidates = available(coupons, card_id, at);
    let mut result: Vec<coupon_entity::Model> =
        select_general_best(&candidates).into_iter().cloned().collect();
    result.extend(select_constrained(&candidates, constraints));
    Ok(result)
}

/// 不做限制过滤，也不校验
pub fn select_all_available(
    coupons: &[coupon_entity::Model],
    card_id: Uuid,
    at: DateTime<Utc>,
) -> Vec<coupon_entity::Model> {
    available(coupons, card_id, at)
}
