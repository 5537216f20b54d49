mod config;
mod error;
mod query;
mod services;
mod store;
#[cfg(test)]
mod test_support;
mod validation;

use crate::config::Config;
use crate::store::FeedbackStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;

    info!("Opening feedback store at {}", config.db_path.display());
    let store = FeedbackStore::open(&config.db_path).map_err(io::Error::other)?;
    store.ping().await.map_err(io::Error::other)?;
    let store = web::Data::new(store);

    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {}", url);

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(services::configure_app(store.clone(), json_limit))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
