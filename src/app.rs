use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::consts::{API_PREFIX, CORS_MAX_AGE_SECS, CORS_WILDCARD, DOCS_PATH};
use crate::{config, frontend, handlers, openapi, service};

pub fn cors_policy(origins: &[String]) -> Cors {
    let cors = if origins.iter().any(|origin| origin == CORS_WILDCARD) {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(CORS_MAX_AGE_SECS)
}

pub fn create_app(
    debate_service: Arc<service::DebateService>,
    settings: Arc<config::Settings>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = cors_policy(&settings.cors_origins);

    App::new()
        .wrap(cors)
        .wrap(Logger::default())
        .app_data(Data::from(debate_service))
        .app_data(Data::from(settings))
        .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .route("/", web::get().to(handlers::root))
        .route("/health", web::get().to(handlers::health))
        .route(DOCS_PATH, web::get().to(openapi::docs))
        .route("/openapi.json", web::get().to(openapi::openapi))
        .route("/ui", web::get().to(frontend::index))
        .service(web::scope(API_PREFIX).route("/debate", web::post().to(handlers::debate)))
}
