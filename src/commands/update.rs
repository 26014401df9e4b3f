use anyhow::Result;
use std::io::Write;

use crate::models::DraftTicket;
use crate::store::{StoreError, TicketStore};

/// Field overrides typed into the edit form.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub status: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Applies `overrides` to the staged draft and submits it to the ticket
/// being edited. The draft is consumed on success.
pub fn run(
    store: &mut TicketStore,
    draft: &mut Option<DraftTicket>,
    overrides: Overrides<'_>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(staged) = draft.as_ref() else {
        return Err(StoreError::NotEditing.into());
    };

    let mut submitted = staged.clone();
    if let Some(title) = overrides.title {
        submitted.title = title.to_string();
    }
    if let Some(category) = overrides.category {
        submitted.category = category.parse()?;
    }
    if let Some(status) = overrides.status {
        submitted.status = status.parse()?;
    }
    if let Some(description) = overrides.description {
        submitted.description = description.to_string();
    }

    let ticket = store.commit_edit(submitted)?;
    *draft = None;
    writeln!(out, "Updated ticket #{}", ticket.id)?;
    Ok(())
}
