mod api;
mod app_state;
mod riot;
mod tft;

use std::sync::LazyLock;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

static ENV_VARS: LazyLock<env_handler::EnvSettings> = LazyLock::new(|| {
    println!("- Loading environment variables");
    let mut env_vars =
        env_handler::EnvSettings::from_env_vars().expect("Couldn't load env vars");
    env_vars.from_cli();
    env_vars
});

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("| RIOT API BASE URL: {}", ENV_VARS.riot_api_base_url);
    println!(
        "| RIOT API KEY: {}",
        if ENV_VARS.riot_api_key.is_empty() {
            "missing"
        } else {
            "set"
        }
    );
    println!(
        "| SERVER ADDRESS: {}:{}",
        ENV_VARS.server_ip, ENV_VARS.server_port
    );
    println!(
        "| SERVER CLIENT REQUEST TIMEOUT: {}",
        ENV_VARS.client_request_timeout
    );
    println!("| SERVER CONNECTION KEEP ALIVE: {}", ENV_VARS.keep_alive);
    println!(
        "| DOUBLE UP: {} most recent of {} matches, batches of {} every {}ms",
        ENV_VARS.double_up_recency_window,
        ENV_VARS.double_up_match_list_count,
        ENV_VARS.double_up_batch_size,
        ENV_VARS.double_up_batch_delay
    );

    println!("- Reading CLI args");
    if std::env::args().any(|arg| arg == "generate_env") {
        let mut file = std::fs::File::create(".env.example")?;
        ENV_VARS
            .to_env_file(&mut file)
            .map_err(std::io::Error::other)?;
        println!("- Wrote default settings to .env.example");
        return Ok(());
    }

    println!("- Enabling environment logger");
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if ENV_VARS.riot_api_key.is_empty() {
        log::warn!("RIOT_API_KEY is empty, Riot will reject every upstream request");
    }

    let app_state =
        web::Data::new(app_state::AppState::from_env(&ENV_VARS).map_err(std::io::Error::other)?);

    println!("- Starting Backend");
    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::NormalizePath::new(
                middleware::TrailingSlash::Trim,
            ))
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .service(api::tft::tft::<riot::RiotClient>())
    })
    .bind((ENV_VARS.server_ip.as_str(), ENV_VARS.server_port))?
    .client_request_timeout(std::time::Duration::from_millis(
        ENV_VARS.client_request_timeout,
    ))
    .keep_alive(std::time::Duration::from_millis(ENV_VARS.keep_alive))
    .run()
    .await
}
