use actix_web::web::Data;
use actix_web::{HttpResponse, mime};
use askama::Template;

use crate::config::Settings;
use crate::consts::API_PREFIX;
use crate::errors::AxiomError;

/// Browser form for submitting arguments. The backend base URL is editable
/// in the page and starts at the configured default.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub version: &'a str,
    pub default_api_url: &'a str,
    pub api_prefix: &'a str,
}

pub async fn index(settings: Data<Settings>) -> Result<HttpResponse, AxiomError> {
    let page = IndexPage {
        title: &settings.title,
        version: &settings.version,
        default_api_url: &settings.frontend_api_url,
        api_prefix: API_PREFIX,
    };
    Ok(HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(page.render()?))
}
