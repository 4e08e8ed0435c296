#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the PostgreSQL database.
    let pool = establish_connection_pool(
        &server_config.database_url,
        server_config.pool_max_size,
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(routes::configure::<DieselRepository>)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?;

    log::info!(
        "Quote search listening on {}:{}",
        server_config.address,
        server_config.port
    );

    server.run().await
}
