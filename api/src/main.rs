//! Onboardly API server entry point.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use ob_core::services::auth::AuthService;
use ob_core::services::otp::{OtpService, OtpServiceConfig};
use ob_core::services::password::PasswordService;
use ob_core::services::social::SocialLoginService;
use ob_core::services::token::TokenService;
use ob_infra::{
    DatabasePool, HttpProfileFetcher, MySqlOtpRepository, MySqlTokenRepository,
    MySqlUserRepository, SmtpMailer,
};
use ob_shared::config::{DatabaseConfig, JwtConfig, MailerConfig, ServerConfig};

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use app::ProductionState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let mailer_config = MailerConfig::from_env();

    let pool = DatabasePool::connect(&database_config)
        .await
        .context("database connection failed")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.inner()));
    let otp_repository = Arc::new(MySqlOtpRepository::new(pool.inner()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool.inner()));

    let mailer = Arc::new(SmtpMailer::new(&mailer_config).map_err(|e| anyhow::anyhow!("{}", e))?);
    let fetcher = Arc::new(HttpProfileFetcher::new().map_err(|e| anyhow::anyhow!("{}", e))?);

    let token_service = Arc::new(TokenService::new(
        Arc::clone(&token_repository),
        jwt_config.into(),
    ));
    let otp_service = Arc::new(OtpService::new(
        Arc::clone(&user_repository),
        otp_repository,
        mailer,
        Arc::clone(&token_service),
        OtpServiceConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&otp_service),
        Arc::clone(&token_service),
    ));
    let password_service = Arc::new(PasswordService::new(Arc::clone(&user_repository)));
    let social_service = Arc::new(SocialLoginService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        fetcher,
    ));

    let state = web::Data::new(ProductionState {
        auth_service,
        otp_service,
        password_service,
        social_service,
    });

    let bind_address = server_config.bind_address();
    tracing::info!(address = %bind_address, event = "server_starting", "binding HTTP server");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(app::configure)
    });

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated abnormally")
}
