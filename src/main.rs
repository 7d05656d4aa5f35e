mod models;
mod routes;
mod config;
use actix_web::{App, HttpServer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let host = config::server_host();
    let port = config::server_port();

    println!("🚀 Starting server on http://{}:{}", host, port);

    let server = HttpServer::new(|| {
        App::new()
            .configure(routes::configure_routes)
    })
        .bind((host.as_str(), port))?;

    // Nombre de workers imposé par le déploiement, sinon actix décide
    let server = match config::server_workers() {
        Some(workers) => {
            println!("⚙️  Running with {} workers", workers);
            server.workers(workers)
        }
        None => server,
    };

    server.run().await
}
