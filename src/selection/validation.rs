use crate::entities::coupon_entity;
use crate::error::InvalidQueryError;

/// 单个维度的匹配: 请求值为 0 表示不限
pub fn matches_dimension(requested: i32, actual: i32) -> bool {
    requested == 0 || requested == actual
}

/// 调用方请求的 (category, payment, merchant)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub category: i32,
    pub payment: i32,
    pub merchant: i32,
}

impl Constraints {
    pub fn new(category: i32, payment: i32, merchant: i32) -> Self {
        Self {
            category,
            payment,
            merchant,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category == 0 && self.payment == 0 && self.merchant == 0
    }

    pub fn validate(&self) -> Result<(), InvalidQueryError> {
        if self.is_unconstrained() {
            return Err(InvalidQueryError);
        }
        Ok(())
    }

    /// 三个维度同时匹配
    pub fn matches(&self, coupon: &coupon_entity::Model) -> bool {
        matches_dimension(self.category, coupon.category)
            && matches_dimension(self.payment, coupon.payment)
            && matches_dimension(self.merchant, coupon.merchant)
    }
}

pub fn validate_constraints(
    category: i32,
    payment: i32,
    merchant: i32,
) -> Result<(), InvalidQueryError> {
    Constraints::new(category, payment, merchant).validate()
}
