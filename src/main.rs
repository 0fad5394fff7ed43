use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use edc_lookup::app::State;
use edc_lookup::config;
use edc_lookup::lookup::http::HttpLookup;
use edc_lookup::lookup::Lookup;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();

    let lookup: Arc<dyn Lookup> = match HttpLookup::new(&config.endpoint) {
        Ok(lookup) => Arc::new(lookup),
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            process::exit(1);
        }
    };

    tracing::info!("Starting EDC lookup against {}", config.endpoint.base_url);

    iced::daemon(
        move || State::new(config.clone(), Arc::clone(&lookup)),
        State::update,
        State::view,
    )
    .title(State::title)
    .subscription(State::subscription)
    .theme(State::theme)
    .style(State::style)
    .run()
}
