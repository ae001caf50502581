use actix_web::web::Data;
use actix_web::{HttpResponse, Responder, mime};
use askama::Template;
use serde_json::{Value, json};

use crate::config::Settings;
use crate::consts::{API_PREFIX, MAX_MESSAGE_CHARS, MIN_MESSAGE_CHARS};
use crate::errors::AxiomError;

#[derive(Template)]
#[template(path = "docs.html")]
struct DocsPage<'a> {
    title: &'a str,
    version: &'a str,
    debate_path: String,
}

pub fn openapi_document(settings: &Settings) -> Value {
    let detail_schema = json!({
        "type": "object",
        "properties": {"detail": {"type": "string"}}
    });

    json!({
        "openapi": "3.0.3",
        "info": {"title": settings.title, "version": settings.version},
        "paths": {
            (format!("{}/debate", API_PREFIX)): {
                "post": {
                    "tags": ["debate"],
                    "summary": "Debate an argument",
                    "description": "Submit an argument or claim to receive a logical debate response",
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/DebateRequest"}}}
                    },
                    "responses": {
                        "200": {
                            "description": "Generated response",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/DebateResponse"}}}
                        },
                        "422": {
                            "description": "Validation error",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationError"}}}
                        },
                        "500": {
                            "description": "Generation failed",
                            "content": {"application/json": {"schema": detail_schema}}
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "tags": ["health"],
                    "summary": "Health check",
                    "responses": {"200": {"description": "Service is up"}}
                }
            },
            "/": {
                "get": {
                    "tags": ["root"],
                    "summary": "Service information",
                    "responses": {"200": {"description": "Name, version and docs location"}}
                }
            }
        },
        "components": {
            "schemas": {
                "DebateRequest": {
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": {
                            "type": "string",
                            "minLength": MIN_MESSAGE_CHARS,
                            "maxLength": MAX_MESSAGE_CHARS,
                            "description": "The argument or claim to be debated"
                        }
                    }
                },
                "DebateResponse": {
                    "type": "object",
                    "required": ["response", "model"],
                    "properties": {
                        "response": {"type": "string", "description": "The model's debate response"},
                        "model": {"type": "string", "description": "The model used for generation"}
                    }
                },
                "ValidationError": {
                    "type": "object",
                    "properties": {
                        "detail": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "loc": {"type": "array", "items": {"type": "string"}},
                                    "msg": {"type": "string"},
                                    "type": {"type": "string"}
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

pub async fn openapi(settings: Data<Settings>) -> impl Responder {
    HttpResponse::Ok().json(openapi_document(&settings))
}

pub async fn docs(settings: Data<Settings>) -> Result<HttpResponse, AxiomError> {
    let page = DocsPage {
        title: &settings.title,
        version: &settings.version,
        debate_path: format!("{}/debate", API_PREFIX),
    };
    Ok(HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(page.render()?))
}
