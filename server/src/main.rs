mod commands;
mod endpoints;
mod error;
mod events;
mod queries;
mod services;

use crate::services::{ProductStore, SharedProductStore};
use actix_web::middleware::TrailingSlash;
use actix_web::web::Data;
use actix_web::{middleware, web, App, HttpServer};
use mediator::DefaultMediator;
use std::sync::{Arc, Mutex};

pub type SharedMediator = Arc<Mutex<DefaultMediator>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = std::env::var("PORT")
        .map(|port| port.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);

    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_owned());

    let store = create_product_store(&redis_url);
    let mediator = create_mediator_service(&store);

    log::info!("products API listening on port {}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Always))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .app_data(Data::new(store.clone()))
            .service(
                web::scope("/api/products")
                    .service(endpoints::products::create)
                    .service(endpoints::products::update)
                    .service(endpoints::products::delete)
                    .service(endpoints::products::get)
                    .service(endpoints::products::get_all),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

fn create_mediator_service(store: &SharedProductStore) -> SharedMediator {
    use commands::*;
    use events::*;
    use queries::*;

    let store = store.clone();
    let mediator = DefaultMediator::builder()
        // Queries
        .add_handler(GetProductRequestHandler(store.clone()))
        .add_handler(GetAllProductsRequestHandler(store.clone()))
        // Commands
        .add_handler_deferred(|m| AddProductRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| UpdateProductRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| DeleteProductRequestHandler(store.clone(), m))
        // Events
        .subscribe_fn(|event: ProductAddedEvent| {
            log::info!("added: {} [{}] x{}", event.0.name, event.0.code, event.0.count);
        })
        .subscribe_fn(|event: ProductUpdatedEvent| {
            log::info!("updated: {} [{}] x{}", event.0.name, event.0.code, event.0.count);
        })
        .subscribe_fn(|event: ProductDeletedEvent| {
            log::info!("deleted: {} [{}]", event.0.name, event.0.code);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}

fn create_product_store(redis_url: &str) -> SharedProductStore {
    let client = redis::Client::open(redis_url).expect("Failed to connect to Redis");
    let store = ProductStore::new(client, "products".to_owned());
    Arc::new(Mutex::new(store))
}
