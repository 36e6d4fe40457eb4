use crate::{
    api::{admin, application},
    auth::{handlers, middleware::session_middleware},
    config::Config,
    error::ApiError,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Malformed bodies get the JSON envelope too
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid request body: {err}")).into()
    }));

    cfg.service(
        web::scope(&config.api_prefix)
            // Public routes
            .service(
                web::scope("/auth")
                    .service(
                        web::resource("/login")
                            .route(web::post().to(handlers::login))
                            .route(web::get().to(handlers::list_users)),
                    )
                    .service(web::resource("/logout").route(web::post().to(handlers::logout))),
            )
            // Any signed-in user
            .service(
                web::scope("/applications")
                    .wrap(from_fn(session_middleware))
                    .service(
                        web::resource("").route(web::post().to(application::submit_application)),
                    )
                    .service(
                        web::resource("/status")
                            .route(web::get().to(application::application_status)),
                    ),
            )
            // Admin role is checked per handler
            .service(
                web::scope("/admin")
                    .wrap(from_fn(session_middleware))
                    .service(
                        web::resource("/applications")
                            .route(web::get().to(admin::list_applications))
                            .route(web::patch().to(admin::update_tracking)),
                    ),
            ),
    );
}

// LOGIN
//  └─ Set-Cookie: authorization=<jwt>; HttpOnly; Max-Age=86400

// API REQUEST
//  └─ Cookie: authorization=<jwt>

// EXPIRED / TAMPERED
//  └─ 401 {code: 401, msg: "Unauthorized"}
