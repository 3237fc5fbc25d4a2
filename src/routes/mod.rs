use actix_web::HttpResponse;

use crate::dto::response::ApiResponse;
use crate::services::ServiceError;

pub mod products;

/// Log a service failure and respond with an opaque 500 envelope.
pub(crate) fn internal_error(err: &ServiceError) -> HttpResponse {
    log::error!("Service failure: {err}");
    HttpResponse::InternalServerError().json(ApiResponse::<()>::message(500, "Internal server error"))
}

/// 404 envelope for a missing product.
pub(crate) fn product_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::message(404, "Product not found"))
}
