use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::coupon_entity;

/// 无上限在 JSON 中的写法（与导入数据文件一致）
pub const UNBOUNDED_LITERAL: &str = "Infinity";

/// 消费金额上限：具体数值或无上限
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpperLimit {
    Bounded(f64),
    Unbounded,
}

impl UpperLimit {
    /// `+inf` 归一为 `Unbounded`
    pub fn new(value: f64) -> Self {
        if value == f64::INFINITY {
            UpperLimit::Unbounded
        } else {
            UpperLimit::Bounded(value)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, UpperLimit::Unbounded)
    }

    /// 存储形式，NULL 表示无上限
    pub fn into_option(self) -> Option<f64> {
        match self {
            UpperLimit::Bounded(v) => Some(v),
            UpperLimit::Unbounded => None,
        }
    }
}

impl From<Option<f64>> for UpperLimit {
    fn from(value: Option<f64>) -> Self {
        value.map_or(UpperLimit::Unbounded, UpperLimit::new)
    }
}

impl Serialize for UpperLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UpperLimit::Bounded(v) => serializer.serialize_f64(*v),
            UpperLimit::Unbounded => serializer.serialize_str(UNBOUNDED_LITERAL),
        }
    }
}

struct UpperLimitVisitor;

impl Visitor<'_> for UpperLimitVisitor {
    type Value = UpperLimit;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number or the string \"{UNBOUNDED_LITERAL}\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<UpperLimit, E> {
        Ok(UpperLimit::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<UpperLimit, E> {
        Ok(UpperLimit::Bounded(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<UpperLimit, E> {
        Ok(UpperLimit::Bounded(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<UpperLimit, E> {
        match v {
            UNBOUNDED_LITERAL | "+Infinity" | "inf" => Ok(UpperLimit::Unbounded),
            other => other
                .parse::<f64>()
                .map(UpperLimit::new)
                .map_err(|_| E::invalid_value(Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for UpperLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UpperLimitVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCouponRequest {
    #[schema(example = 0.05)]
    pub rate: f64,
    #[schema(example = 0.0)]
    pub lower_limit: f64,
    /// 数值或 "Infinity"
    #[schema(value_type = f64, example = 10000.0)]
    pub upper_limit: UpperLimit,
    /// RFC 3339 或 ISO 8601 (无时区按 UTC)
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub start_datetime: String,
    #[schema(example = "2024-07-01T00:00:00Z")]
    pub end_datetime: String,
    pub card_id: Uuid,
    #[serde(default)]
    pub category: i32,
    #[serde(default)]
    pub payment: i32,
    #[serde(default)]
    pub merchant: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCouponResponse {
    pub id: i64,
}

/// 查询返回的优惠信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CouponResponse {
    pub id: i64,
    pub rate: f64,
    pub lower_limit: f64,
    #[schema(value_type = f64)]
    pub upper_limit: UpperLimit,
    pub category: i32,
    pub payment: i32,
    pub merchant: i32,
}

impl From<coupon_entity::Model> for CouponResponse {
    fn from(m: coupon_entity::Model) -> Self {
        CouponResponse {
            id: m.id,
            rate: m.rate,
            lower_limit: m.lower_limit,
            upper_limit: m.upper_limit(),
            category: m.category,
            payment: m.payment,
            merchant: m.merchant,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvailableCouponsQuery {
    pub card_id: Uuid,
    /// 省略时取当前时间
    pub datetime: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ConstrainedCouponsQuery {
    pub card_id: Uuid,
    pub datetime: Option<String>,
    #[serde(default)]
    pub category: i32,
    #[serde(default)]
    pub payment: i32,
    #[serde(default)]
    pub merchant: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_limit_from_storage() {
        assert_eq!(UpperLimit::from(None), UpperLimit::Unbounded);
        assert_eq!(UpperLimit::from(Some(500.0)), UpperLimit::Bounded(500.0));
        assert_eq!(UpperLimit::from(Some(f64::INFINITY)), UpperLimit::Unbounded);
        assert_eq!(UpperLimit::Unbounded.into_option(), None);
    }

    #[test]
    fn test_upper_limit_json() {
        assert_eq!(
            serde_json::to_string(&UpperLimit::Unbounded).unwrap(),
            "\"Infinity\""
        );
        assert_eq!(
            serde_json::to_string(&UpperLimit::Bounded(1500.5)).unwrap(),
            "1500.5"
        );

        let parsed: UpperLimit = serde_json::from_str("\"Infinity\"").unwrap();
        assert!(parsed.is_unbounded());
        let parsed: UpperLimit = serde_json::from_str("3000").unwrap();
        assert_eq!(parsed, UpperLimit::Bounded(3000.0));
        assert!(serde_json::from_str::<UpperLimit>("\"lots\"").is_err());
    }

    #[test]
    fn test_create_request_defaults_tags_to_zero() {
        let body = r#"{
            "rate": 0.03,
            "lower_limit": 0,
            "upper_limit": "Infinity",
            "start_datetime": "2024-01-01T00:00:00Z",
            "end_datetime": "2024-02-01T00:00:00Z",
            "card_id": "6f1c1f2e-3a57-4d8e-9a55-2b1d8a7e9c10",
            "merchant": 12
        }"#;
        let req: CreateCouponRequest = serde_json::from_str(body).unwrap();
        assert_eq!((req.category, req.payment, req.merchant), (0, 0, 12));
        assert!(req.upper_limit.is_unbounded());
    }
}
