use actix_web::http::StatusCode;
use actix_web::web::{Data, Json};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use mediator::Mediator;
use serde::Serialize;
use stockroom::api::Envelope;

use crate::commands::{
    AddProductCommand, DeleteProductCommand, UpdateProductBody, UpdateProductCommand,
};
use crate::error::ProductError;
use crate::queries::{GetAllProductsRequest, GetProductRequest};
use crate::SharedMediator;

#[post("/")]
pub async fn create(mediator: Data<SharedMediator>, body: Json<AddProductCommand>) -> impl Responder {
    let mut mediator = mediator.lock().expect("unable to lock mediator");
    let result = mediator.send(body.into_inner()).expect("unable to send command");
    respond(result)
}

#[put("/{id}/")]
pub async fn update(
    path: web::Path<String>,
    mediator: Data<SharedMediator>,
    body: Json<UpdateProductBody>,
) -> impl Responder {
    let command = UpdateProductCommand {
        id: path.into_inner(),
        body: body.into_inner(),
    };

    let mut mediator = mediator.lock().expect("unable to lock mediator");
    let result = mediator.send(command).expect("unable to send command");
    respond(result)
}

#[delete("/{id}/")]
pub async fn delete(path: web::Path<String>, mediator: Data<SharedMediator>) -> impl Responder {
    let mut mediator = mediator.lock().expect("unable to lock mediator");
    let result = mediator
        .send(DeleteProductCommand(path.into_inner()))
        .expect("unable to send command");

    match result {
        Ok(_) => HttpResponse::Ok().json(Envelope::<()>::message("product removed")),
        Err(err) => error_response(err),
    }
}

#[get("/{id}/")]
pub async fn get(path: web::Path<String>, mediator: Data<SharedMediator>) -> impl Responder {
    let mut mediator = mediator.lock().expect("unable to lock mediator");
    let result = mediator
        .send(GetProductRequest(path.into_inner()))
        .expect("unable to send command");
    respond(result)
}

#[get("/")]
pub async fn get_all(mediator: Data<SharedMediator>) -> impl Responder {
    let mut mediator = mediator.lock().expect("unable to lock mediator");
    let result = mediator.send(GetAllProductsRequest).expect("unable to send command");
    respond(result)
}

fn respond<T: Serialize>(result: Result<T, ProductError>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(Envelope::ok(data)),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ProductError) -> HttpResponse {
    if err.status() == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("products request failed: {:?}", err);
    }

    HttpResponse::build(err.status()).json(Envelope::<()>::fail(err.to_string()))
}
