use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::models::Ticket;
use crate::store::TicketStore;

pub const EXPORT_VERSION: i32 = 1;

#[derive(Serialize, Deserialize)]
pub struct ExportData {
    pub version: i32,
    pub tickets: Vec<Ticket>,
}

pub fn run(store: &TicketStore, out: &mut impl Write) -> Result<()> {
    let data = ExportData {
        version: EXPORT_VERSION,
        tickets: store.list().to_vec(),
    };

    let json = serde_json::to_string_pretty(&data)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::setup_store;
    use crate::models::{Category, DraftTicket, Status};

    #[test]
    fn test_export_seed() {
        let (store, mut out) = setup_store();
        run(&store, &mut out).unwrap();

        let data: ExportData = serde_json::from_slice(&out).unwrap();
        assert_eq!(data.version, EXPORT_VERSION);
        assert_eq!(data.tickets, store.list());
    }

    #[test]
    fn test_export_uses_display_names() {
        let (store, mut out) = setup_store();
        run(&store, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["tickets"][1]["status"], "In Progress");
        assert_eq!(value["tickets"][1]["category"], "Software");
    }

    #[test]
    fn test_export_preserves_duplicate_ids() {
        let (mut store, mut out) = setup_store();
        store.delete(1).unwrap();
        store
            .add(DraftTicket::new("dup", Category::Database, "", Status::Closed))
            .unwrap();
        run(&store, &mut out).unwrap();

        let data: ExportData = serde_json::from_slice(&out).unwrap();
        let ids: Vec<i64> = data.tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 3]);
    }

    #[test]
    fn test_export_empty_store() {
        let store = TicketStore::new();
        let mut out = Vec::new();
        run(&store, &mut out).unwrap();

        let data: ExportData = serde_json::from_slice(&out).unwrap();
        assert!(data.tickets.is_empty());
    }
}
