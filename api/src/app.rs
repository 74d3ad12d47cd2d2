//! Route table for the production service wiring.

use actix_web::web;

use ob_infra::{HttpProfileFetcher, MySqlOtpRepository, MySqlTokenRepository, MySqlUserRepository, SmtpMailer};

use crate::routes::auth::{
    change_password, login, logout, otp_send, otp_verify, refresh, register, social_login, AppState,
};
use crate::routes::health;

/// Concrete state type for the MySQL + SMTP deployment.
pub type ProductionState =
    AppState<MySqlUserRepository, MySqlOtpRepository, SmtpMailer, MySqlTokenRepository, HttpProfileFetcher>;

/// Register every route against the production state type.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1/auth")
                .route(
                    "/register",
                    web::post().to(register::register::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/login",
                    web::post().to(login::login::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/logout",
                    web::post().to(logout::logout::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/refresh",
                    web::post().to(refresh::refresh::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/otp/send",
                    web::post().to(otp_send::otp_send::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/otp/verify",
                    web::post().to(otp_verify::otp_verify::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/password/change",
                    web::post().to(change_password::change_password::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                )
                .route(
                    "/social-login",
                    web::post().to(social_login::social_login::<
                        MySqlUserRepository,
                        MySqlOtpRepository,
                        SmtpMailer,
                        MySqlTokenRepository,
                        HttpProfileFetcher,
                    >),
                ),
        );
}
