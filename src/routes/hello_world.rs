use actix_web::{get, HttpResponse};
use crate::models::greeting::GreetingResponse;

#[get("/hello_world")]
pub async fn hello_world() -> HttpResponse {
    HttpResponse::Ok().json(GreetingResponse::now())
}
