use actix_web::{App, HttpServer, web};

use product_catalog::db::establish_connection_pool;
use product_catalog::models::config::ServerConfig;
use product_catalog::repository::DieselRepository;
use product_catalog::routes::products::{
    check_stock, create_product, delete_product, get_product, list_products,
    list_products_by_price, update_product,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load().unwrap_or_else(|e| {
        log::error!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    let pool = establish_connection_pool(&config.database_url).unwrap_or_else(|e| {
        log::error!("Failed to establish database connection pool: {e}");
        std::process::exit(1);
    });

    let repo = DieselRepository::new(pool);

    log::info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            // Literal paths register ahead of the `{id}` matchers.
            .service(list_products_by_price)
            .service(check_stock)
            .service(create_product)
            .service(list_products)
            .service(get_product)
            .service(update_product)
            .service(delete_product)
    })
    .bind(config.bind_address)?
    .run()
    .await
}
