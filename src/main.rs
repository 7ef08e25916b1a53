//! Composition root: wires configuration, logging, storage and the store,
//! then prints the journal.

use std::sync::Arc;

use decision_journal::adapters::FileKeyValueStorage;
use decision_journal::application::{DecisionStore, LoadReport};
use decision_journal::config::{AppConfig, ConfigError};
use decision_journal::domain::journal::Decision;

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init();

    let storage = Arc::new(FileKeyValueStorage::new(&config.storage.data_dir));
    let store = DecisionStore::open(storage, config.storage.key.clone()).await;

    if let LoadReport::Corrupt { reason } = store.load_report() {
        tracing::warn!(
            "Stored journal could not be read ({}); it will be replaced on the next save",
            reason
        );
    }

    print!("{}", render(&store));
    Ok(())
}

fn render(store: &DecisionStore) -> String {
    if store.is_empty() {
        return "No decisions recorded yet.\n".to_string();
    }

    let mut out = format!(
        "{} decisions ({} completed)\n",
        store.len(),
        store.completed().count()
    );
    for decision in store.decisions() {
        out.push_str(&render_line(decision));
        out.push('\n');
    }
    out
}

fn render_line(decision: &Decision) -> String {
    let status = if decision.is_complete() {
        format!("done: {}", decision.actual_outcome())
    } else if decision.outcomes().is_empty() {
        "open".to_string()
    } else {
        format!("open: {}", decision.outcomes().join(" / "))
    };
    format!(
        "{}  {}  [pros {} / cons {}]  {}",
        decision.created_at().date_label(),
        decision.title(),
        decision.pro_score(),
        decision.con_score(),
        status
    )
}
