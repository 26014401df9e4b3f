//! Text and JSON renderings shared by the session commands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::models::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The printable part of a ticket: everything but the id.
#[derive(Serialize)]
struct PrintedTicket<'a> {
    title: &'a str,
    category: &'a str,
    description: &'a str,
    status: &'a str,
}

/// Renders a single ticket for printing.
pub fn print_ticket(ticket: &Ticket, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut page = String::new();
            page.push_str(&ticket.title);
            page.push('\n');
            page.push_str(&"=".repeat(ticket.title.chars().count().max(1)));
            page.push('\n');
            page.push_str(&format!("Category: {}\n", ticket.category));
            page.push_str(&format!("Description: {}\n", ticket.description));
            page.push_str(&format!("Status: {}\n", ticket.status));
            Ok(page)
        }
        OutputFormat::Json => {
            let printed = PrintedTicket {
                title: &ticket.title,
                category: ticket.category.as_str(),
                description: &ticket.description,
                status: ticket.status.as_str(),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&printed)?))
        }
    }
}

/// One row of the ticket table.
pub fn table_row(ticket: &Ticket) -> String {
    let status_display = format!("[{}]", ticket.status);
    format!(
        "#{:<4} {:13} {:<40} {}",
        ticket.id,
        status_display,
        truncate(&ticket.title, 40),
        ticket.category
    )
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
