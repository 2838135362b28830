use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use taskgate::{auth::TokenService, config::Config, routes, store::AppState, AppError};

fn init() -> Result<(Config, TokenService, AppState), AppError> {
    let config = Config::from_env()?;
    let tokens = TokenService::new(&config.jwt_secret)?;
    let state = AppState::seeded()?;
    Ok((config, tokens, state))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let (config, tokens, state) = match init() {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let tokens = web::Data::new(tokens);
    let state = web::Data::new(state);

    log::info!("Starting server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(tokens.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(web::scope("/api").configure(routes::config))
            .default_service(web::route().to(routes::not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
