//! Pokedex CLI - an interactive client for the PokeAPI
//!
//! Pages through location areas, catches Pokemon, and memoizes API
//! responses in a TTL cache swept by a background task.
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (stderr, so command
//!    output on stdout stays clean)
//! 2. Load configuration from environment variables
//! 3. Create the session: API client, response cache, and its sweep task
//! 4. Run the REPL until exit, end of input, or Ctrl-C
//! 5. Log cache statistics; dropping the session stops the sweep task

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::{self, Session};
use pokedex::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        cache_ttl_secs = config.cache_ttl_secs,
        base_url = %config.base_url,
        "starting Pokedex session"
    );

    let mut session = Session::from_config(&config);
    repl::run(&mut session).await?;

    let stats = session.client.cache().stats().await;
    info!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        entries = stats.entries,
        "cache statistics at shutdown"
    );

    Ok(())
}
