use crate::models::*;
use crate::services::CreditCardService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/credit_card/create_credit_card",
    tag = "credit_card",
    request_body = CreateCreditCardRequest,
    responses(
        (status = 201, description = "创建信用卡成功", body = CreateCreditCardResponse),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn create_credit_card(
    card_service: web::Data<CreditCardService>,
    request: web::Json<CreateCreditCardRequest>,
) -> Result<HttpResponse> {
    match card_service.create_credit_card(request.into_inner()).await {
        Ok(card) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(CreateCreditCardResponse { id: card.id }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/credit_card/get_all_credit_cards",
    tag = "credit_card",
    responses(
        (status = 200, description = "获取信用卡列表成功", body = [CreditCardResponse])
    )
)]
pub async fn get_all_credit_cards(
    card_service: web::Data<CreditCardService>,
) -> Result<HttpResponse> {
    match card_service.list_credit_cards().await {
        Ok(cards) => Ok(HttpResponse::Ok().json(ApiResponse::success(cards))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/credit_card/{card_id}",
    tag = "credit_card",
    params(
        ("card_id" = uuid::Uuid, Path, description = "信用卡ID")
    ),
    responses(
        (status = 200, description = "获取信用卡成功", body = CreditCardResponse),
        (status = 404, description = "信用卡不存在")
    )
)]
pub async fn get_credit_card(
    card_service: web::Data<CreditCardService>,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse> {
    match card_service.get_credit_card(path.into_inner()).await {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success(card))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn credit_card_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credit_card")
            .route("/create_credit_card", web::post().to(create_credit_card))
            .route("/get_all_credit_cards", web::get().to(get_all_credit_cards))
            .route("/{card_id}", web::get().to(get_credit_card)),
    );
}
