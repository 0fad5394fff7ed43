use std::process;

use tracing_subscriber::EnvFilter;

use edc_lookup::config;
use edc_lookup::lookup::http::HttpLookup;
use edc_lookup::query::{self, EXIT_FAILURE};

/// Look up one serial number and print the record as `field<TAB>value` lines.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A missing serial is looked up as an empty query.
    let serial = std::env::args_os()
        .nth(1)
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_default();
    let config = config::load();

    let lookup = match HttpLookup::new(&config.endpoint) {
        Ok(lookup) => lookup,
        Err(e) => {
            eprintln!("edc-lookup-query: {e}");
            process::exit(EXIT_FAILURE);
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("edc-lookup-query: failed to create tokio runtime: {e}");
            process::exit(EXIT_FAILURE);
        }
    };

    let code = rt.block_on(query::run(
        serial,
        &lookup,
        &config.search,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    ));
    process::exit(code);
}
