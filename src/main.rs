use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use ticketdesk::logging::{self, LogFormat};
use ticketdesk::render::OutputFormat;
use ticketdesk::session::{RunOptions, Session};
use ticketdesk::store::TicketStore;

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "An in-memory support ticket desk")]
#[command(version)]
struct Cli {
    /// Output format for list, show, and print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "TICKETDESK_FORMAT")]
    format: OutputFormat,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "TICKETDESK_LOG_FORMAT")]
    log_format: LogFormat,

    /// Start without the example tickets
    #[arg(long, env = "TICKETDESK_EMPTY")]
    empty: bool,

    /// Read commands from a file instead of stdin
    #[arg(long, env = "TICKETDESK_SCRIPT")]
    script: Option<PathBuf>,

    /// Continue a script past failing commands
    #[arg(long, env = "TICKETDESK_KEEP_GOING")]
    keep_going: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let store = if cli.empty {
        TicketStore::new()
    } else {
        TicketStore::seeded()
    };
    let mut session = Session::new(store, cli.format);

    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let failures = match &cli.script {
        Some(path) => session.run_script(path, &mut out, &mut err, cli.keep_going)?,
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session.run(
                stdin.lock(),
                &mut out,
                &mut err,
                RunOptions {
                    interactive,
                    keep_going: true,
                },
            )?
        }
    };

    if cli.script.is_some() && failures > 0 {
        bail!("{} command(s) failed", failures);
    }

    Ok(())
}
