use crate::entities::{coupon_entity as coupons, credit_card_entity as cards};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::selection::{self, Constraints};
use crate::utils::parse_datetime;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct CouponService {
    pool: DatabaseConnection,
}

impl CouponService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 新增优惠，卡片必须已存在
    pub async fn create_coupon(&self, request: CreateCouponRequest) -> AppResult<coupons::Model> {
        if !request.rate.is_finite() || !request.lower_limit.is_finite() {
            return Err(AppError::ValidationError(
                "rate and lower_limit must be finite numbers".to_string(),
            ));
        }
        if let UpperLimit::Bounded(v) = request.upper_limit
            && !v.is_finite()
        {
            return Err(AppError::ValidationError(
                "upper_limit must be a finite number or \"Infinity\"".to_string(),
            ));
        }
        let start = parse_datetime(&request.start_datetime)?;
        let end = parse_datetime(&request.end_datetime)?;
        if start >= end {
            log::warn!(
                "Coupon window for card {} is empty ({start} >= {end}), it will never be available",
                request.card_id
            );
        }

        cards::Entity::find_by_id(request.card_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Credit card {} not found", request.card_id))
            })?;

        let coupon = coupons::ActiveModel {
            rate: Set(request.rate),
            lower_limit: Set(request.lower_limit),
            upper_limit: Set(request.upper_limit.into_option()),
            start_datetime: Set(start),
            end_datetime: Set(end),
            card_id: Set(request.card_id),
            category: Set(request.category),
            payment: Set(request.payment),
            merchant: Set(request.merchant),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Created coupon {} for card {} (rate {}, tags {:?})",
            coupon.id,
            coupon.card_id,
            coupon.rate,
            coupon.constraint_key()
        );
        Ok(coupon)
    }

    /// 该卡全部优惠，按插入顺序
    async fn card_coupons(&self, card_id: Uuid) -> AppResult<Vec<coupons::Model>> {
        let list = coupons::Entity::find()
            .filter(coupons::Column::CardId.eq(card_id))
            .order_by_asc(coupons::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    /// 获取 `at` 时刻该卡所有有效优惠
    pub async fn get_all_available_coupons(
        &self,
        card_id: Uuid,
        at: DateTime<Utc>,
    ) -> AppResult<Vec<CouponResponse>> {
        let records = self.card_coupons(card_id).await?;
        let list = selection::select_all_available(&records, card_id, at);
        log::debug!("{} available coupons for card {card_id} at {at}", list.len());
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 获取 `at` 时刻该卡的通用最优优惠及满足限制条件的优惠
    pub async fn get_available_coupons_with_constraints(
        &self,
        card_id: Uuid,
        at: DateTime<Utc>,
        constraints: Constraints,
    ) -> AppResult<Vec<CouponResponse>> {
        // 先校验，非法请求不访问数据库
        constraints.validate()?;

        let records = self.card_coupons(card_id).await?;
        let list = selection::select_with_constraints(&records, card_id, at, constraints)?;
        log::debug!(
            "{} coupons for card {card_id} at {at} with {constraints:?}",
            list.len()
        );
        Ok(list.into_iter().map(Into::into).collect())
    }
}
