#![no_main]

//! Fuzz target for the ticket store's edit state machine.
//!
//! Applies arbitrary operation sequences and checks the invariants that
//! hold for every sequence: adds append, failed operations leave the
//! collection alone, and the edit state only names a present ticket.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ticketdesk::models::{Category, DraftTicket, Status};
use ticketdesk::render::{print_ticket, table_row, OutputFormat};
use ticketdesk::store::{EditState, TicketStore};

#[derive(Arbitrary, Debug)]
struct Draft {
    title: String,
    description: String,
    category: u8,
    status: u8,
}

impl Draft {
    fn build(self) -> DraftTicket {
        DraftTicket::new(
            self.title,
            Category::ALL[self.category as usize % 4],
            self.description,
            Status::ALL[self.status as usize % 4],
        )
    }
}

#[derive(Arbitrary, Debug)]
enum Op {
    Add(Draft),
    Update(i8, Draft),
    Delete(i8),
    BeginEdit(i8),
    CancelEdit,
    CommitEdit(Draft),
    Print(i8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    seeded: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut store = if input.seeded {
        TicketStore::seeded()
    } else {
        TicketStore::new()
    };

    for op in input.ops.into_iter().take(64) {
        let before = store.list().to_vec();

        match op {
            Op::Add(draft) => match store.add(draft.build()) {
                Ok(ticket) => {
                    assert_eq!(store.len(), before.len() + 1);
                    assert_eq!(ticket.id, before.len() as i64 + 1);
                    assert_eq!(store.list().last(), Some(&ticket));
                }
                Err(_) => assert_eq!(store.list(), before.as_slice()),
            },
            Op::Update(id, draft) => {
                let id = id as i64;
                let staged = store.edit_state() == EditState::Editing(id);
                match store.update(id, draft.build()) {
                    Ok(ticket) => {
                        assert!(staged);
                        assert_eq!(store.len(), before.len());
                        assert!(store.list().iter().filter(|t| t.id == id).all(|t| *t == ticket));
                        assert_eq!(store.edit_state(), EditState::Idle);
                    }
                    Err(_) => assert_eq!(store.list(), before.as_slice()),
                }
            }
            Op::Delete(id) => {
                let id = id as i64;
                match store.delete(id) {
                    Ok(removed) => {
                        assert!(removed >= 1);
                        assert_eq!(store.len(), before.len() - removed);
                        assert!(store.get(id).is_none());
                    }
                    Err(_) => assert_eq!(store.list(), before.as_slice()),
                }
            }
            Op::BeginEdit(id) => {
                let _ = store.begin_edit(id as i64);
                assert_eq!(store.list(), before.as_slice());
            }
            Op::CancelEdit => {
                store.cancel_edit();
                assert_eq!(store.edit_state(), EditState::Idle);
                assert_eq!(store.list(), before.as_slice());
            }
            Op::CommitEdit(draft) => {
                let _ = store.commit_edit(draft.build());
                assert_eq!(store.len(), before.len());
            }
            Op::Print(id) => {
                if let Some(ticket) = store.get(id as i64) {
                    let _ = table_row(ticket);
                    let _ = print_ticket(ticket, OutputFormat::Text);
                    let _ = print_ticket(ticket, OutputFormat::Json);
                }
            }
        }

        if let EditState::Editing(id) = store.edit_state() {
            assert!(store.get(id).is_some());
        }
    }
});
