use std::sync::Arc;

use axiom::app::create_app;
use axiom::config;
use axiom::llm_client::GeminiClient;
use axiom::logging::init_logging;
use axiom::prompt::PromptStore;
use axiom::service::DebateService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = config::load_settings();
    init_logging(settings.as_ref().map(|s| s.debug).unwrap_or(false));

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Initializing {} {} ({}), model {}",
        settings.title,
        settings.version,
        settings.environment,
        settings.llm_model
    );

    let http_client = reqwest::Client::builder()
        .build()
        .map_err(std::io::Error::other)?;

    let model_client = Arc::new(GeminiClient::from_settings(http_client, &settings));
    let prompts = PromptStore::new(settings.prompt_file_path.clone());
    log::info!("system prompt will be read from {}", prompts.path().display());
    let debate_service = Arc::new(DebateService::new(
        model_client,
        prompts,
        &settings.llm_model,
    ));
    log::info!("debate service ready, model {}", debate_service.model());
    let settings = Arc::new(settings);

    let bind_addr = (settings.host.clone(), settings.port);
    let workers = settings.workers;

    let app_factory = move || create_app(debate_service.clone(), settings.clone());

    let mut server = actix_web::HttpServer::new(app_factory);
    if let Some(workers) = workers {
        server = server.workers(workers.get());
    }

    log::info!("listening on {}:{}", bind_addr.0, bind_addr.1);
    server.bind(bind_addr)?.run().await
}
