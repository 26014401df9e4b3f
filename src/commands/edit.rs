use anyhow::Result;
use std::io::Write;

use crate::models::DraftTicket;
use crate::store::TicketStore;

/// Stages ticket `id` for editing and returns its fields as the new draft.
pub fn begin(store: &mut TicketStore, id: i64, out: &mut impl Write) -> Result<DraftTicket> {
    let ticket = store.begin_edit(id)?;
    let draft = DraftTicket::from(ticket);

    writeln!(out, "Editing ticket #{}", id)?;
    writeln!(out, "  Title: {}", draft.title)?;
    writeln!(out, "  Category: {}", draft.category)?;
    writeln!(out, "  Status: {}", draft.status)?;
    writeln!(out, "  Description: {}", draft.description)?;
    Ok(draft)
}

pub fn cancel(
    store: &mut TicketStore,
    draft: &mut Option<DraftTicket>,
    out: &mut impl Write,
) -> Result<()> {
    store.cancel_edit();
    if draft.take().is_some() {
        writeln!(out, "Edit cancelled.")?;
    }
    Ok(())
}
