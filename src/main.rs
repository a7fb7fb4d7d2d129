//! ledgerd - concurrency-safe account ledger service.
//!
//! Loads configuration, initialises logging, wires the in-memory store,
//! transfer engine, and notifier together, and serves the HTTP gateway.

use std::sync::Arc;
use std::time::Duration;

use ledgerd::config::AppConfig;
use ledgerd::gateway::{self, state::AppState};
use ledgerd::ledger::Ledger;
use ledgerd::logging::init_logging;
use ledgerd::notifier::EmailNotifier;
use ledgerd::store::AccountStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = init_logging(&config);

    tracing::info!("starting ledgerd in {} mode", env);

    let store = Arc::new(AccountStore::new());
    let ledger = Arc::new(Ledger::with_lock_timeout(
        store.clone(),
        Arc::new(EmailNotifier),
        Duration::from_millis(config.ledger.lock_timeout_ms),
    ));
    let state = Arc::new(AppState::new(store, ledger));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await
}
