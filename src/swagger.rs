use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{LoanRequestStatus, OrderStatus, PrizeType, ProductCategory};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::user::get_profile,
        handlers::user::update_profile,
        handlers::wheel::spin,
        handlers::wheel::buy_spins,
        handlers::wheel::get_config,
        handlers::wheel::get_spins,
        handlers::prize::get_prizes,
        handlers::coupon::get_coupons,
        handlers::coupon::validate_coupon,
        handlers::product::get_products,
        handlers::product::get_product,
        handlers::order::create_order,
        handlers::order::get_orders,
        handlers::loan_request::create_loan_request,
        handlers::loan_request::get_loan_requests,
        handlers::admin::list_users,
        handlers::admin::list_prizes,
        handlers::admin::create_prize,
        handlers::admin::update_prize,
        handlers::admin::delete_prize,
        handlers::admin::create_product,
        handlers::admin::update_product,
        handlers::admin::delete_product,
        handlers::admin::list_orders,
        handlers::admin::update_order_status,
        handlers::admin::list_coupons,
        handlers::admin::list_spins,
        handlers::admin::list_loan_requests,
        handlers::admin::update_loan_request_status,
        handlers::admin::update_wheel_config,
    ),
    components(
        schemas(
            UserResponse,
            UpdateUserRequest,
            PrizeType,
            PrizeResponse,
            CreatePrizeRequest,
            UpdatePrizeRequest,
            CouponResponse,
            CouponQuery,
            ProductCategory,
            ProductResponse,
            CreateProductRequest,
            UpdateProductRequest,
            OrderStatus,
            OrderResponse,
            OrderQuery,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            LoanRequestStatus,
            LoanRequestResponse,
            CreateLoanRequestRequest,
            UpdateLoanRequestStatusRequest,
            SpinResponse,
            BuySpinsResponse,
            WheelConfigResponse,
            UpdateWheelConfigRequest,
            WheelSpinResponse,
            WheelSpinQuery,
            PaginationParams,
            PaginatedOrderResponse,
            PaginatedCouponResponse,
            PaginatedWheelSpinResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "User profile API"),
        (name = "wheel", description = "Fortune wheel API"),
        (name = "prize", description = "Prize catalog API"),
        (name = "coupon", description = "Coupon API"),
        (name = "product", description = "Product catalog API"),
        (name = "order", description = "Order API"),
        (name = "loan", description = "Gold loan request API"),
        (name = "admin", description = "Admin management API"),
    ),
    info(
        title = "GoldFortune Backend API",
        version = "1.0.0",
        description = "GoldFortune jewellery storefront REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
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
