use anyhow::Result;
use std::io::Write;

use crate::render::{table_row, OutputFormat};
use crate::store::TicketStore;

pub fn run(store: &TicketStore, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let tickets = store.list();

    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(tickets)?)?;
        return Ok(());
    }

    if tickets.is_empty() {
        writeln!(out, "No tickets.")?;
        return Ok(());
    }

    for ticket in tickets {
        writeln!(out, "{}", table_row(ticket))?;
    }

    Ok(())
}
