use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use campus_transit::auth::Authenticator;
use campus_transit::config::AppConfig;
use campus_transit::db::Store;
use campus_transit::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let auth = match Authenticator::from_config(&config) {
        Ok(auth) => web::Data::new(auth),
        Err(e) => {
            error!("Failed to prepare admin credentials: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };
    let store = web::Data::new(Store::seeded(config.semester_fee, config.latency));

    if !config.latency.is_zero() {
        info!("Simulating {:?} latency per store call", config.latency);
    }
    info!("Listening on {}:{}", config.host, config.port);

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(auth.clone())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
