pub mod hello_world;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello_world::hello_world);
}
