use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::credit_card::create_credit_card,
        handlers::credit_card::get_all_credit_cards,
        handlers::credit_card::get_credit_card,
        handlers::coupon::add_coupon,
        handlers::coupon::get_all_available_coupons,
        handlers::coupon::get_available_coupons_with_constraints,
    ),
    components(
        schemas(
            CreateCreditCardRequest,
            CreateCreditCardResponse,
            CreditCardResponse,
            CreateCouponRequest,
            CreateCouponResponse,
            CouponResponse,
            AvailableCouponsQuery,
            ConstrainedCouponsQuery,
            ApiError,
        )
    ),
    tags(
        (name = "credit_card", description = "Credit card API"),
        (name = "coupon", description = "Coupon query API"),
    ),
    info(
        title = "Card Coupon Backend API",
        version = "1.0.0",
        description = "Credit card coupon lookup REST API documentation"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_coupon_paths() {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths
                .paths
                .contains_key("/coupon/get_available_coupons_with_constraints")
        );
        assert!(doc.paths.paths.contains_key("/credit_card/create_credit_card"));
    }
}
