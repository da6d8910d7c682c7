use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::models::UpperLimit;

/// 优惠规则实体
/// 概念说明:
/// - rate: 折扣率 (0.05 = 5%)
/// - lower_limit / upper_limit: 消费金额区间，upper_limit 为 NULL 表示无上限
/// - [start_datetime, end_datetime): 有效期，左闭右开
/// - category / payment / merchant: 限制标签，0 表示不限
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rate: f64,
    pub lower_limit: f64,
    pub upper_limit: Option<f64>,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub card_id: Uuid,
    pub category: i32,
    pub payment: i32,
    pub merchant: i32,
    pub created_at: DateTime<Utc>,
}

impl Model {
    /// 是否在 t 时刻有效: start <= t < end
    pub fn is_available_at(&self, at: DateTime<Utc>) -> bool {
        self.start_datetime <= at && at < self.end_datetime
    }

    /// 三个维度都为 0 的通用优惠
    pub fn is_general(&self) -> bool {
        self.category == 0 && self.payment == 0 && self.merchant == 0
    }

    pub fn constraint_key(&self) -> (i32, i32, i32) {
        (self.category, self.payment, self.merchant)
    }

    pub fn upper_limit(&self) -> UpperLimit {
        UpperLimit::from(self.upper_limit)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::credit_cards::Entity",
        from = "Column::CardId",
        to = "super::credit_cards::Column::Id"
    )]
    CreditCard,
}

impl Related<super::credit_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
