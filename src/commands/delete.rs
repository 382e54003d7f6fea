use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use standings_core::EventStore;

pub async fn run(store: &EventStore, id: &str) -> Result<()> {
    store
        .delete(id)
        .await
        .with_context(|| format!("Could not delete event '{}'", id))?;

    println!("{} {}", "Deleted".red(), id);
    Ok(())
}
