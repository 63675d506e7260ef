use std::io;

use anyhow::Context;
use stockroom_shell::{ConsoleSink, Session, ShellConfig};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init().context("invalid logging configuration")?;

    let config = ShellConfig::from_env().context("invalid inventory configuration")?;
    tracing::info!(
        threshold = config.inventory.low_stock_threshold,
        negative_stock = ?config.inventory.negative_stock,
        "stockroom shell starting"
    );

    println!("stockroom: type \"help\" for commands");
    let mut session = Session::new(config, ConsoleSink);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    tracing::info!(products = session.service().len(), "stockroom shell exiting");
    Ok(())
}
