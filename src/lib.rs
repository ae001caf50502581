pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod frontend;
pub mod handlers;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod prompt;
pub mod service;
