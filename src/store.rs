use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Category, DraftTicket, Status, Ticket};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Ticket #{0} not found")]
    NotFound(i64),
    #[error("Ticket #{0} is being edited. Finish with 'update' or 'cancel' first")]
    EditInProgress(i64),
    #[error("No ticket is being edited. Use 'edit <id>' first")]
    NotEditing,
    #[error("Ticket #{requested} is not being edited (editing #{staged})")]
    NotStaged { staged: i64, requested: i64 },
}

/// Edit staging state of a [`TicketStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(i64),
}

/// Ordered in-memory ticket collection.
///
/// Insertion order is display order. New ids are `len() + 1`, so an add
/// that follows a delete may reuse an id still held by another ticket.
/// Lookups return the first match; update and delete act on all matches.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    edit: EditState,
}

impl TicketStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's starting collection of three example tickets.
    pub fn seeded() -> Self {
        let seed = [
            ("Ticket 1", Category::Hardware, "Description 1", Status::Open),
            ("Ticket 2", Category::Software, "Description 2", Status::InProgress),
            ("Ticket 3", Category::Network, "Description 3", Status::Resolved),
        ];
        let tickets = seed
            .into_iter()
            .zip(1i64..)
            .map(|((title, category, description, status), id)| {
                DraftTicket::new(title, category, description, status).into_ticket(id)
            })
            .collect();
        TicketStore {
            tickets,
            edit: EditState::Idle,
        }
    }

    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// First ticket carrying `id`, in display order.
    pub fn get(&self, id: i64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn add(&mut self, draft: DraftTicket) -> Result<Ticket, StoreError> {
        if let EditState::Editing(staged) = self.edit {
            return Err(StoreError::EditInProgress(staged));
        }

        let id = self.tickets.len() as i64 + 1;
        if self.get(id).is_some() {
            warn!(id, "assigned ticket id collides with an existing ticket");
        }

        let ticket = draft.into_ticket(id);
        self.tickets.push(ticket.clone());
        debug!(id, count = self.tickets.len(), "added ticket");
        Ok(ticket)
    }

    /// Replaces title, category, description and status of every ticket
    /// carrying `id`, then returns the store to [`EditState::Idle`].
    ///
    /// Only valid while `id` is the staged ticket.
    pub fn update(&mut self, id: i64, draft: DraftTicket) -> Result<Ticket, StoreError> {
        match self.edit {
            EditState::Idle => return Err(StoreError::NotEditing),
            EditState::Editing(staged) if staged != id => {
                return Err(StoreError::NotStaged {
                    staged,
                    requested: id,
                })
            }
            EditState::Editing(_) => {}
        }

        let updated = draft.into_ticket(id);
        let mut matched = 0;
        for ticket in self.tickets.iter_mut().filter(|t| t.id == id) {
            *ticket = updated.clone();
            matched += 1;
        }
        if matched == 0 {
            return Err(StoreError::NotFound(id));
        }

        self.edit = EditState::Idle;
        debug!(id, matched, "updated ticket");
        Ok(updated)
    }

    /// Removes every ticket carrying `id`. Returns how many were removed.
    pub fn delete(&mut self, id: i64) -> Result<usize, StoreError> {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        let removed = before - self.tickets.len();
        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }

        if self.edit == EditState::Editing(id) {
            debug!(id, "staged ticket deleted, leaving edit mode");
            self.edit = EditState::Idle;
        }
        debug!(id, removed, count = self.tickets.len(), "deleted ticket");
        Ok(removed)
    }

    /// Stages ticket `id` for editing. Re-targets if another ticket is staged.
    pub fn begin_edit(&mut self, id: i64) -> Result<&Ticket, StoreError> {
        let pos = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.edit = EditState::Editing(id);
        debug!(id, "editing ticket");
        Ok(&self.tickets[pos])
    }

    pub fn cancel_edit(&mut self) {
        if let EditState::Editing(id) = self.edit {
            debug!(id, "edit cancelled");
        }
        self.edit = EditState::Idle;
    }

    /// Submits the edit form: updates the staged ticket with `draft`.
    pub fn commit_edit(&mut self, draft: DraftTicket) -> Result<Ticket, StoreError> {
        match self.edit {
            EditState::Idle => Err(StoreError::NotEditing),
            EditState::Editing(id) => self.update(id, draft),
        }
    }
}
