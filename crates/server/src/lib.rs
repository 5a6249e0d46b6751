//! HTTP adapter for the deck repository.
//!
//! Binds requests, calls into [`odk_decks::Repository`], and turns each
//! refusal into a status code. No rules live here.
//!
//! ## Routes
//!
//! - `POST /decks?cards=AS,KD` — create a full or partial deck
//! - `GET  /decks/{id}` — open a deck, cards included
//! - `POST /decks/{id}/shuffle` — shuffle the remaining cards
//! - `POST /decks/{id}/draw` — deal cards off the top
mod config;
pub mod handlers;

pub use config::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use odk_decks::Random;
use odk_decks::Repository;

/// Registers every route; shared by the server and the handler tests.
#[rustfmt::skip]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/decks")
                .route("", web::post().to(handlers::create))
                .route("/{id}", web::get().to(handlers::open))
                .route("/{id}/shuffle", web::post().to(handlers::shuffle))
                .route("/{id}/draw", web::post().to(handlers::draw)),
        );
}

pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let repo = web::Data::new(Repository::new(Random));
    log::info!("starting deck server on {} ({} workers)", config.bind, config.workers);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(repo.clone())
            .configure(configure)
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await
}
