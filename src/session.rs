//! Line-oriented command session over one [`TicketStore`].
//!
//! Each input line is split with shell quoting rules and parsed with clap.
//! The session owns the store and the edit form's draft; every command runs
//! to completion before the next line is read.

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::commands::{self, update::Overrides};
use crate::models::DraftTicket;
use crate::render::OutputFormat;
use crate::store::{EditState, TicketStore};

#[derive(Parser, Debug)]
#[command(name = "ticketdesk", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// List tickets in display order
    List,

    /// Show ticket details
    Show {
        /// Ticket ID
        id: i64,
    },

    /// Create a new ticket
    Add {
        /// Ticket title
        title: String,
        /// Category (Hardware, Software, Network, Database)
        #[arg(short, long)]
        category: String,
        /// Status (Open, In Progress, Resolved, Closed)
        #[arg(short, long, default_value = "Open")]
        status: String,
        /// Ticket description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Start editing a ticket
    Edit {
        /// Ticket ID
        id: i64,
    },

    /// Submit the ticket being edited
    Update {
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New status
        #[arg(short, long)]
        status: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Abandon the current edit
    Cancel,

    /// Delete a ticket
    Delete {
        /// Ticket ID
        id: i64,
    },

    /// Print a ticket
    Print {
        /// Ticket ID
        id: i64,
    },

    /// Export all tickets as JSON
    Export,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print a prompt before each line.
    pub interactive: bool,
    /// Keep reading after a command fails.
    pub keep_going: bool,
}

pub struct Session {
    store: TicketStore,
    draft: Option<DraftTicket>,
    format: OutputFormat,
}

impl Session {
    pub fn new(store: TicketStore, format: OutputFormat) -> Self {
        Session {
            store,
            draft: None,
            format,
        }
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    /// The edit form's staged values, if a ticket is being edited.
    pub fn draft(&self) -> Option<&DraftTicket> {
        self.draft.as_ref()
    }

    pub fn prompt(&self) -> String {
        match self.store.edit_state() {
            EditState::Idle => "ticketdesk> ".to_string(),
            EditState::Editing(id) => format!("ticketdesk[edit #{}]> ", id),
        }
    }

    /// Runs one input line. Blank lines and `#` comments are ignored.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let Some(tokens) = shlex::split(trimmed) else {
            bail!("Invalid quoting");
        };

        let parsed = match SessionLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e.into()),
        };

        debug!(command = ?parsed.command, "executing");
        self.dispatch(parsed.command, out)
    }

    fn dispatch(&mut self, command: SessionCommand, out: &mut impl Write) -> Result<Flow> {
        let format = self.format;
        match command {
            SessionCommand::List => commands::list::run(&self.store, format, out)?,

            SessionCommand::Show { id } => commands::show::run(&self.store, id, format, out)?,

            SessionCommand::Add {
                title,
                category,
                status,
                description,
            } => commands::add::run(
                &mut self.store,
                &title,
                &category,
                &status,
                &description,
                out,
            )?,

            SessionCommand::Edit { id } => {
                self.draft = Some(commands::edit::begin(&mut self.store, id, out)?);
            }

            SessionCommand::Update {
                title,
                category,
                status,
                description,
            } => commands::update::run(
                &mut self.store,
                &mut self.draft,
                Overrides {
                    title: title.as_deref(),
                    category: category.as_deref(),
                    status: status.as_deref(),
                    description: description.as_deref(),
                },
                out,
            )?,

            SessionCommand::Cancel => {
                commands::edit::cancel(&mut self.store, &mut self.draft, out)?
            }

            SessionCommand::Delete { id } => {
                commands::delete::run(&mut self.store, id, &mut self.draft, out)?
            }

            SessionCommand::Print { id } => commands::print::run(&self.store, id, format, out)?,

            SessionCommand::Export => commands::export::run(&self.store, out)?,

            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Executes lines from `input` until EOF or `quit`.
    ///
    /// Failed commands are reported on `err`. Returns the number of failed
    /// commands; without `keep_going` the first failure ends the run with an
    /// error instead.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
        opts: RunOptions,
    ) -> Result<usize> {
        info!(tickets = self.store.len(), "session started");
        let mut lines = input.lines();
        let mut failures = 0;
        let mut line_no = 0;

        loop {
            if opts.interactive {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;
            line_no += 1;

            match self.execute(&line, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    warn!(line = line_no, error = %e, "command failed");
                    if !opts.keep_going {
                        return Err(e.context(format!("line {}", line_no)));
                    }
                    failures += 1;
                    let message = e.to_string();
                    let message = message.trim_end();
                    // clap renders its own "error:" prefix
                    if message.starts_with("error:") {
                        writeln!(err, "{}", message)?;
                    } else {
                        writeln!(err, "error: {}", message)?;
                    }
                }
            }
        }

        info!(tickets = self.store.len(), failures, "session ended");
        Ok(failures)
    }

    pub fn run_script(
        &mut self,
        path: &Path,
        out: &mut impl Write,
        err: &mut impl Write,
        keep_going: bool,
    ) -> Result<usize> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open script {}", path.display()))?;
        self.run(
            BufReader::new(file),
            out,
            err,
            RunOptions {
                interactive: false,
                keep_going,
            },
        )
    }
}
