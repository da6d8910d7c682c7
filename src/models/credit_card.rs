use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::credit_card_entity;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCreditCardRequest {
    #[schema(example = "Cube Card")]
    pub name: String,
    #[schema(example = "Cathay United Bank")]
    pub issuer: String,
    #[schema(example = "Visa")]
    pub system: String,
    /// 联名品牌，可省略
    #[serde(default)]
    pub cobranded: Option<String>,
    /// 卡面图片引用（文件名或 URL）
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCreditCardResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreditCardResponse {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub system: String,
    pub cobranded: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<credit_card_entity::Model> for CreditCardResponse {
    fn from(m: credit_card_entity::Model) -> Self {
        CreditCardResponse {
            id: m.id,
            name: m.name,
            issuer: m.issuer,
            system: m.system,
            cobranded: m.cobranded,
            image_url: m.image_url,
            created_at: m.created_at,
        }
    }
}
