use anyhow::Result;
use std::io::Write;

use crate::render::OutputFormat;
use crate::store::{EditState, StoreError, TicketStore};

pub fn run(store: &TicketStore, id: i64, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let ticket = store.get(id).ok_or(StoreError::NotFound(id))?;

    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(ticket)?)?;
        return Ok(());
    }

    let editing = if store.edit_state() == EditState::Editing(id) {
        " (being edited)"
    } else {
        ""
    };
    writeln!(out, "Ticket #{}: {}{}", ticket.id, ticket.title, editing)?;
    writeln!(out, "Category: {}", ticket.category)?;
    writeln!(out, "Status: {}", ticket.status)?;

    if !ticket.description.is_empty() {
        writeln!(out, "\nDescription:")?;
        for line in ticket.description.lines() {
            writeln!(out, "  {}", line)?;
        }
    }

    Ok(())
}
