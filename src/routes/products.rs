use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::product::NewProduct;
use crate::dto::response::ApiResponse;
use crate::repository::DieselRepository;
use crate::routes::{internal_error, product_not_found};
use crate::services::ServiceError;
use crate::services::products::{
    check_stock as check_stock_service, create_product as create_product_service,
    delete_product as delete_product_service, get_product as get_product_service,
    list_products as list_products_service,
    list_products_by_price as list_products_by_price_service,
    update_product as update_product_service,
};

#[derive(Deserialize)]
struct CheckStockQueryParams {
    #[serde(default)]
    count: i32,
}

#[post("/products")]
pub async fn create_product(
    payload: web::Json<NewProduct>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_product_service(payload.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Created()
            .json(ApiResponse::created("Product created successfully", product)),
        Err(err) => internal_error(&err),
    }
}

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok()
            .json(ApiResponse::ok("Product list fetched successfully", products)),
        Err(err) => internal_error(&err),
    }
}

// Must be registered ahead of `get_product` so the literal path segment is
// not captured by the `{id}` matcher.
#[get("/products/sorted-by-price")]
pub async fn list_products_by_price(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_by_price_service(repo.get_ref()) {
        Ok(products) => {
            HttpResponse::Ok().json(ApiResponse::ok("Products sorted by price", products))
        }
        Err(err) => internal_error(&err),
    }
}

#[get("/products/{id}/check-stock")]
pub async fn check_stock(
    id: web::Path<i32>,
    params: web::Query<CheckStockQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match check_stock_service(id.into_inner(), params.count, repo.get_ref()) {
        Ok(available) => {
            let message = if available {
                "Stock is available"
            } else {
                "Stock is not available"
            };
            HttpResponse::Ok().json(ApiResponse::ok(message, available))
        }
        Err(err) => internal_error(&err),
    }
}

#[get("/products/{id}")]
pub async fn get_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(id.into_inner(), repo.get_ref()) {
        Ok(Some(product)) => HttpResponse::Ok().json(ApiResponse::ok("Product found", product)),
        Ok(None) => product_not_found(),
        Err(err) => internal_error(&err),
    }
}

#[put("/products/{id}")]
pub async fn update_product(
    id: web::Path<i32>,
    payload: web::Json<NewProduct>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_product_service(id.into_inner(), payload.into_inner(), repo.get_ref()) {
        Ok(product) => {
            HttpResponse::Ok().json(ApiResponse::ok("Product updated successfully", product))
        }
        Err(ServiceError::NotFound) => product_not_found(),
        Err(err) => internal_error(&err),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok()
            .json(ApiResponse::<()>::message(200, "Product deleted successfully")),
        Err(err) => internal_error(&err),
    }
}
