use anyhow::Result;
use pyexpert_chat::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a level or a directive list such as `pyexpert_chat=debug,tower_http=info`.
fn build_env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter: '{}' ({}). Use a level (error, warn, info, debug, trace) or target=level directives",
            directives,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing credentials stop the process before anything is served
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match build_env_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting Python expert chat server with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("info")]
    #[case("debug")]
    #[case("pyexpert_chat=debug")]
    #[case("pyexpert_chat=debug,tower_http=info")]
    #[case("warn,pyexpert_chat::llm=trace")]
    fn test_accepts_levels_and_directives(#[case] directives: &str) {
        assert!(build_env_filter(directives).is_ok());
    }

    #[rstest]
    #[case("pyexpert_chat=loud")]
    #[case("tower_http=verbose")]
    fn test_rejects_malformed_filters(#[case] directives: &str) {
        let err = build_env_filter(directives).unwrap_err();
        assert!(err.to_string().contains(directives));
    }
}
