use anyhow::Result;
use std::io::Write;

use crate::models::{Category, DraftTicket, Status};
use crate::store::TicketStore;

pub fn run(
    store: &mut TicketStore,
    title: &str,
    category: &str,
    status: &str,
    description: &str,
    out: &mut impl Write,
) -> Result<()> {
    let category: Category = category.parse()?;
    let status: Status = status.parse()?;

    let ticket = store.add(DraftTicket::new(title, category, description, status))?;
    writeln!(out, "Created ticket #{}", ticket.id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, setup_store};
    use proptest::prelude::*;

    // ==================== Unit Tests ====================

    #[test]
    fn test_add_printer_ticket() {
        let (mut store, mut out) = setup_store();
        run(&mut store, "Printer down", "Hardware", "Open", "No toner", &mut out).unwrap();

        assert_eq!(output(&out), "Created ticket #4\n");
        let ticket = store.get(4).unwrap();
        assert_eq!(ticket.title, "Printer down");
        assert_eq!(ticket.category, Category::Hardware);
        assert_eq!(ticket.description, "No toner");
        assert_eq!(ticket.status, Status::Open);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_add_lowercase_inputs() {
        let (mut store, mut out) = setup_store();
        run(&mut store, "DB slow", "database", "in progress", "", &mut out).unwrap();

        let ticket = store.get(4).unwrap();
        assert_eq!(ticket.category, Category::Database);
        assert_eq!(ticket.status, Status::InProgress);
    }

    #[test]
    fn test_add_invalid_category() {
        let (mut store, mut out) = setup_store();
        let result = run(&mut store, "x", "Printer", "Open", "", &mut out);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid category"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_invalid_status() {
        let (mut store, mut out) = setup_store();
        let result = run(&mut store, "x", "Network", "pending", "", &mut out);
        assert!(result.unwrap_err().to_string().contains("Invalid status"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_while_editing_fails() {
        let (mut store, mut out) = setup_store();
        store.begin_edit(1).unwrap();
        let result = run(&mut store, "x", "Network", "Open", "", &mut out);
        assert!(result.unwrap_err().to_string().contains("being edited"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_add_unicode_title() {
        let (mut store, mut out) = setup_store();
        run(&mut store, "プリンター故障 🖨", "Hardware", "Open", "", &mut out).unwrap();
        assert_eq!(store.get(4).unwrap().title, "プリンター故障 🖨");
    }

    // ==================== Property-Based Tests ====================

    proptest! {
        #[test]
        fn prop_add_valid_category(category in "Hardware|Software|Network|Database") {
            let (mut store, mut out) = setup_store();
            let result = run(&mut store, "Test", &category, "Open", "", &mut out);
            prop_assert!(result.is_ok());
            prop_assert_eq!(store.get(4).unwrap().category.as_str(), category.as_str());
        }

        #[test]
        fn prop_add_title_roundtrip(title in "[a-zA-Z0-9 ]{1,50}") {
            let (mut store, mut out) = setup_store();
            run(&mut store, &title, "Software", "Open", "", &mut out).unwrap();
            prop_assert_eq!(&store.list()[3].title, &title);
        }
    }
}
