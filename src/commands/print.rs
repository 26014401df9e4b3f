use anyhow::Result;
use std::io::Write;

use crate::render::{print_ticket, OutputFormat};
use crate::store::{StoreError, TicketStore};

pub fn run(store: &TicketStore, id: i64, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let ticket = store.get(id).ok_or(StoreError::NotFound(id))?;
    out.write_all(print_ticket(ticket, format)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
