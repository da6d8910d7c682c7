use crate::entities::credit_card_entity as cards;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct CreditCardService {
    pool: DatabaseConnection,
}

impl CreditCardService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建信用卡，ID 由服务端生成
    pub async fn create_credit_card(
        &self,
        request: CreateCreditCardRequest,
    ) -> AppResult<CreditCardResponse> {
        let name = required_field("name", &request.name)?;
        let issuer = required_field("issuer", &request.issuer)?;
        let system = required_field("system", &request.system)?;

        let card = cards::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            issuer: Set(issuer),
            system: Set(system),
            cobranded: Set(request.cobranded.unwrap_or_default().trim().to_string()),
            image_url: Set(request.image_url.unwrap_or_default()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created credit card {} ({})", card.id, card.name);
        Ok(card.into())
    }

    pub async fn list_credit_cards(&self) -> AppResult<Vec<CreditCardResponse>> {
        let list = cards::Entity::find()
            .order_by_asc(cards::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_credit_card(&self, card_id: Uuid) -> AppResult<CreditCardResponse> {
        cards::Entity::find_by_id(card_id)
            .one(&self.pool)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Credit card {card_id} not found")))
    }
}

fn required_field(name: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::ValidationError(format!("{name} is required")));
    }
    Ok(value.to_string())
}
