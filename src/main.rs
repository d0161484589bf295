mod engine;
mod ledger;
mod models;
mod run;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let ledger_path = get_ledger_path()?;
    let store = ledger::LedgerStore::new(ledger_path);

    run::as_cli(&args, &store)
}

fn get_ledger_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "flatsplit", "FlatSplit")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("ledger.csv"))
}
