use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const VALID_CATEGORIES: [&str; 4] = ["Hardware", "Software", "Network", "Database"];
pub const VALID_STATUSES: [&str; 4] = ["Open", "In Progress", "Resolved", "Closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hardware,
    Software,
    Network,
    Database,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hardware,
        Category::Software,
        Category::Network,
        Category::Database,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hardware => "Hardware",
            Category::Software => "Software",
            Category::Network => "Network",
            Category::Database => "Database",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = normalize(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.as_str()) == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid category '{}'. Must be one of: {}",
                    s,
                    VALID_CATEGORIES.join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Open,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    /// Accepts the display name in any case, with spaces, dashes or
    /// underscores between words ("in progress", "in-progress", "In_Progress").
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = normalize(s);
        Status::ALL
            .into_iter()
            .find(|st| normalize(st.as_str()) == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid status '{}'. Must be one of: {}",
                    s,
                    VALID_STATUSES.join(", ")
                )
            })
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub status: Status,
}

/// Field values for a ticket that has not been committed yet.
///
/// Drafts carry no id: the store assigns one on add and keeps the existing
/// one on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTicket {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub status: Status,
}

impl DraftTicket {
    pub fn new(
        title: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        DraftTicket {
            title: title.into(),
            category,
            description: description.into(),
            status,
        }
    }

    pub fn into_ticket(self, id: i64) -> Ticket {
        Ticket {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            status: self.status,
        }
    }
}

impl From<&Ticket> for DraftTicket {
    fn from(ticket: &Ticket) -> Self {
        DraftTicket {
            title: ticket.title.clone(),
            category: ticket.category,
            description: ticket.description.clone(),
            status: ticket.status,
        }
    }
}
