use crate::models::*;
use crate::selection::Constraints;
use crate::services::CouponService;
use crate::utils::resolve_query_datetime;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/coupon/add_coupon",
    tag = "coupon",
    request_body = CreateCouponRequest,
    responses(
        (status = 201, description = "新增优惠成功", body = CreateCouponResponse),
        (status = 400, description = "请求参数错误"),
        (status = 404, description = "信用卡不存在")
    )
)]
pub async fn add_coupon(
    coupon_service: web::Data<CouponService>,
    request: web::Json<CreateCouponRequest>,
) -> Result<HttpResponse> {
    match coupon_service.create_coupon(request.into_inner()).await {
        Ok(coupon) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(CreateCouponResponse { id: coupon.id }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/coupon/get_all_available_coupons",
    tag = "coupon",
    params(
        ("card_id" = uuid::Uuid, Query, description = "信用卡ID"),
        ("datetime" = Option<String>, Query, description = "查询时间 (ISO 8601)，默认当前时间")
    ),
    responses(
        (status = 200, description = "获取有效优惠成功", body = [CouponResponse]),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn get_all_available_coupons(
    coupon_service: web::Data<CouponService>,
    query: web::Query<AvailableCouponsQuery>,
) -> Result<HttpResponse> {
    let at = match resolve_query_datetime(query.datetime.as_deref()) {
        Ok(at) => at,
        Err(e) => return Ok(e.error_response()),
    };

    match coupon_service
        .get_all_available_coupons(query.card_id, at)
        .await
    {
        Ok(coupons) => Ok(HttpResponse::Ok().json(ApiResponse::success(coupons))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/coupon/get_available_coupons_with_constraints",
    tag = "coupon",
    params(
        ("card_id" = uuid::Uuid, Query, description = "信用卡ID"),
        ("datetime" = Option<String>, Query, description = "查询时间 (ISO 8601)，默认当前时间"),
        ("category" = Option<i32>, Query, description = "消费类别，0 表示不限"),
        ("payment" = Option<i32>, Query, description = "支付方式，0 表示不限"),
        ("merchant" = Option<i32>, Query, description = "商户，0 表示不限")
    ),
    responses(
        (status = 200, description = "通用最优优惠在前，其余按 (category, payment, merchant) 排序", body = [CouponResponse]),
        (status = 400, description = "三个限制全部为 0 或参数错误")
    )
)]
pub async fn get_available_coupons_with_constraints(
    coupon_service: web::Data<CouponService>,
    query: web::Query<ConstrainedCouponsQuery>,
) -> Result<HttpResponse> {
    let at = match resolve_query_datetime(query.datetime.as_deref()) {
        Ok(at) => at,
        Err(e) => return Ok(e.error_response()),
    };
    let constraints = Constraints::new(query.category, query.payment, query.merchant);

    match coupon_service
        .get_available_coupons_with_constraints(query.card_id, at, constraints)
        .await
    {
        Ok(coupons) => Ok(HttpResponse::Ok().json(ApiResponse::success(coupons))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn coupon_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/coupon")
            .route("/add_coupon", web::post().to(add_coupon))
            .route(
                "/get_all_available_coupons",
                web::get().to(get_all_available_coupons),
            )
            .route(
                "/get_available_coupons_with_constraints",
                web::get().to(get_available_coupons_with_constraints),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::handlers::credit_card_config;
    use crate::services::CreditCardService;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_coupon_endpoints() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CreditCardService::new(pool.clone())))
                .app_data(web::Data::new(CouponService::new(pool)))
                .service(
                    web::scope("/api")
                        .configure(credit_card_config)
                        .configure(coupon_config),
                ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/credit_card/create_credit_card")
            .set_json(json!({"name": "Line Bank", "issuer": "Line", "system": "Visa"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let card_id = body["data"]["id"].as_str().unwrap().to_string();

        for (rate, category) in [(0.05, 0), (0.10, 1)] {
            let req = test::TestRequest::post()
                .uri("/api/coupon/add_coupon")
                .set_json(json!({
                    "rate": rate,
                    "lower_limit": 0,
                    "upper_limit": "Infinity",
                    "start_datetime": "2024-01-01T00:00:00",
                    "end_datetime": "2024-12-31T00:00:00",
                    "card_id": card_id,
                    "category": category
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/coupon/get_available_coupons_with_constraints?card_id={card_id}&datetime=2024-06-01T00:00:00Z&category=1"
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["category"], 0);
        assert_eq!(data[0]["upper_limit"], "Infinity");
        assert_eq!(data[1]["category"], 1);

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/coupon/get_available_coupons_with_constraints?card_id={card_id}&datetime=2024-06-01T00:00:00Z"
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_QUERY");

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/coupon/get_all_available_coupons?card_id={card_id}&datetime=2024-12-31T00:00:00Z"
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_add_coupon_unknown_card() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CouponService::new(pool)))
                .configure(coupon_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/coupon/add_coupon")
            .set_json(json!({
                "rate": 0.01,
                "lower_limit": 0,
                "upper_limit": 100,
                "start_datetime": "2024-01-01T00:00:00Z",
                "end_datetime": "2024-02-01T00:00:00Z",
                "card_id": uuid::Uuid::new_v4()
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
