//! Interactive session: read a line, run it, render.

use std::io::{BufRead, Write};

use anyhow::Context;
use stockroom_core::{DomainResult, Entity};
use stockroom_inventory::{
    AddProduct, InventoryService, NotificationSink, parse_delta, parse_quantity,
};

use crate::config::ShellConfig;
use crate::input::{HELP, ShellCommand};
use crate::render::TableView;

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    service: InventoryService,
}

impl Session {
    pub fn new(config: ShellConfig, sink: impl NotificationSink + 'static) -> Self {
        Self {
            service: InventoryService::with_config(config.inventory, sink),
        }
    }

    pub fn service(&self) -> &InventoryService {
        &self.service
    }

    /// Process lines from `input` until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "error: {err}")?;
                    continue;
                }
            };
            if self.handle(command, output)? == Flow::Quit {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Run one command. Domain failures are reported on `output`, not returned.
    pub fn handle<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> anyhow::Result<Flow> {
        tracing::debug!(?command, "shell command");

        match command {
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::List => self.write_table(output)?,
            ShellCommand::Low => {
                let low = self.service.low_stock();
                if low.is_empty() {
                    writeln!(output, "nothing is low on stock")?;
                }
                for product in low {
                    writeln!(output, "{}  {product}", product.id())?;
                }
            }
            ShellCommand::Json => {
                let rows = self.service.sorted_for_display();
                let json = serde_json::to_string_pretty(&rows).context("failed to encode products")?;
                writeln!(output, "{json}")?;
            }
            mutation => match self.apply(mutation) {
                Ok(summary) => {
                    tracing::info!(%summary, "inventory updated");
                    writeln!(output, "{summary}")?;
                    self.write_table(output)?;
                }
                Err(err) => {
                    tracing::info!(error = %err, "inventory command rejected");
                    writeln!(output, "error: {err}")?;
                }
            },
        }
        Ok(Flow::Continue)
    }

    fn apply(&mut self, command: ShellCommand) -> DomainResult<String> {
        match command {
            ShellCommand::Add {
                id,
                name,
                quantity,
                expiry_date,
            } => {
                let quantity = parse_quantity(&quantity)?;
                let mut cmd = AddProduct::new(id, name, quantity);
                cmd.expiry_date = expiry_date;
                let id = cmd.id.clone();
                self.service.add_product(cmd)?;
                Ok(format!("added {}", self.service.get(id.trim())?))
            }
            ShellCommand::Remove { id } => {
                let removed = self.service.remove_product(&id)?;
                Ok(format!("removed {}", removed.name()))
            }
            ShellCommand::Adjust { id, delta } => {
                let delta = parse_delta(&delta)?;
                let quantity = self.service.update_quantity(&id, delta)?;
                Ok(format!("{} now at {quantity}", id.trim()))
            }
            ShellCommand::AdjustByName { name, delta } => {
                let delta = parse_delta(&delta)?;
                let quantity = self.service.adjust_quantity_by_name(&name, delta)?;
                Ok(format!("{name} now at {quantity}"))
            }
            ShellCommand::List
            | ShellCommand::Low
            | ShellCommand::Json
            | ShellCommand::Help
            | ShellCommand::Quit => Ok(String::new()),
        }
    }

    fn write_table<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        let mut view = TableView::new();
        self.service.render(&mut view);
        output.write_all(view.output().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::CollectingSink;

    fn run(script: &str) -> (Session, String, CollectingSink) {
        let sink = CollectingSink::new();
        let mut session = Session::new(ShellConfig::default(), sink.clone());
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap(), sink)
    }

    #[test]
    fn add_adjust_remove_round_trip() {
        let (session, out, sink) = run("add 001 TestProduct 20\nadjust 001 -15\nadjust 001 20\nremove 001\n");

        assert!(out.contains("added TestProduct - 20 left. No expiry date"));
        assert!(out.contains("001 now at 5"));
        assert!(out.contains("001 now at 25"));
        assert!(out.contains("removed TestProduct"));
        assert_eq!(
            sink.messages(),
            ["The following items are low on stock: TestProduct"]
        );
        assert!(session.service().is_empty());
    }

    #[test]
    fn domain_errors_are_reported_and_loop_continues() {
        let (session, out, _) = run("adjust nope 1\nadd 001 Milk many\nadd 001 Milk 3\nadd 001 Milk 3\n");

        assert!(out.contains("error: not found: nope"));
        assert!(out.contains("error: validation failed: quantity must be a whole number"));
        assert!(out.contains("error: duplicate id: 001"));
        assert_eq!(session.service().len(), 1);
    }

    #[test]
    fn parse_errors_do_not_stop_the_session() {
        let (session, out, _) = run("frobnicate\nadd 1 Milk 12\n");
        assert!(out.contains("error: unknown command"));
        assert_eq!(session.service().len(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _, _) = run("quit\nadd 1 Milk 12\n");
        assert!(session.service().is_empty());
    }

    #[test]
    fn adjust_by_name_and_low_listing() {
        let (_, out, _) = run("add 1 \"Oat milk\" 12\nadjust-name \"Oat milk\" -5\nlow\n");
        assert!(out.contains("Oat milk now at 7"));
        assert!(out.contains("1  Oat milk - 7 left. No expiry date"));
    }

    #[test]
    fn json_lists_sorted_rows_with_flags() {
        let (_, out, _) = run("add a Salt 40\nadd b Milk 2\njson\n");
        let start = out.find('[').unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();

        assert_eq!(rows[0]["name"], "Milk");
        assert_eq!(rows[0]["low_stock"], true);
        assert_eq!(rows[1]["name"], "Salt");
        assert_eq!(rows[1]["low_stock"], false);
    }
}
