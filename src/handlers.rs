use actix_web::error::JsonPayloadError;
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, Responder};

use crate::config::Settings;
use crate::consts::DOCS_PATH;
use crate::errors::{AxiomError, FieldViolation};
use crate::models::info::{HealthStatus, ServiceInfo};
use crate::models::DebateRequest;
use crate::service::DebateService;

pub async fn debate(
    service: Data<DebateService>,
    request: Json<DebateRequest>,
) -> Result<HttpResponse, AxiomError> {
    match service.debate(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            match &e {
                AxiomError::ValidationError(_) => log::info!("rejected debate request: {}", e),
                _ => log::error!("debate error: {}", e),
            }
            Err(e)
        }
    }
}

pub async fn health(settings: Data<Settings>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        version: settings.version.clone(),
    })
}

pub async fn root(settings: Data<Settings>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: settings.title.clone(),
        version: settings.version.clone(),
        docs: DOCS_PATH.to_string(),
    })
}

/// Malformed or incomplete JSON bodies are reported like any other validation failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::info!("rejected request body: {}", err);
    AxiomError::ValidationError(vec![FieldViolation::new(
        &["body"],
        err.to_string(),
        "json_invalid",
    )])
    .into()
}
