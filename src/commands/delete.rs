use anyhow::Result;
use std::io::Write;

use crate::models::DraftTicket;
use crate::store::{EditState, TicketStore};

pub fn run(
    store: &mut TicketStore,
    id: i64,
    draft: &mut Option<DraftTicket>,
    out: &mut impl Write,
) -> Result<()> {
    store.delete(id)?;

    // Deleting the staged ticket drops the store back to idle.
    if store.edit_state() == EditState::Idle {
        *draft = None;
    }

    writeln!(out, "Deleted ticket #{}", id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, setup_store};
    use crate::models::{Category, Status};
    use proptest::prelude::*;

    fn ids(store: &TicketStore) -> Vec<i64> {
        store.list().iter().map(|t| t.id).collect()
    }

    // ==================== Unit Tests ====================

    #[test]
    fn test_delete_existing_ticket() {
        let (mut store, mut out) = setup_store();
        run(&mut store, 2, &mut None, &mut out).unwrap();

        assert_eq!(output(&out), "Deleted ticket #2\n");
        assert_eq!(ids(&store), vec![1, 3]);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_delete_nonexistent_ticket() {
        let (mut store, mut out) = setup_store();
        let result = run(&mut store, 99999, &mut None, &mut out);
        assert!(result.unwrap_err().to_string().contains("not found"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_then_add_collides() {
        let (mut store, mut out) = setup_store();
        run(&mut store, 2, &mut None, &mut out).unwrap();

        let created = store
            .add(DraftTicket::new("X", Category::Software, "", Status::Open))
            .unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(ids(&store), vec![1, 3, 3]);

        run(&mut store, 3, &mut None, &mut out).unwrap();
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_delete_staged_ticket_drops_draft() {
        let (mut store, mut out) = setup_store();
        store.begin_edit(1).unwrap();
        let mut draft = Some(DraftTicket::from(store.get(1).unwrap()));

        run(&mut store, 1, &mut draft, &mut out).unwrap();

        assert!(draft.is_none());
    }

    #[test]
    fn test_delete_other_ticket_keeps_draft() {
        let (mut store, mut out) = setup_store();
        store.begin_edit(1).unwrap();
        let mut draft = Some(DraftTicket::from(store.get(1).unwrap()));

        run(&mut store, 3, &mut draft, &mut out).unwrap();

        assert!(draft.is_some());
    }

    #[test]
    fn test_delete_all() {
        let (mut store, mut out) = setup_store();
        for id in 1..=3 {
            run(&mut store, id, &mut None, &mut out).unwrap();
        }
        assert!(store.is_empty());
    }

    // ==================== Property-Based Tests ====================

    proptest! {
        #[test]
        fn prop_delete_nonexistent_fails(id in 1000i64..10000) {
            let (mut store, mut out) = setup_store();
            prop_assert!(run(&mut store, id, &mut None, &mut out).is_err());
            prop_assert_eq!(store.len(), 3);
        }

        #[test]
        fn prop_delete_twice_second_fails(id in 1i64..4) {
            let (mut store, mut out) = setup_store();
            run(&mut store, id, &mut None, &mut out).unwrap();
            prop_assert!(run(&mut store, id, &mut None, &mut out).is_err());
            prop_assert_eq!(store.len(), 2);
        }
    }
}
