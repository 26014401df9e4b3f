#![no_main]

//! Fuzz target for session line parsing.
//!
//! Arbitrary input lines must never panic the tokenizer, the clap parser or
//! any command, whatever quoting or Unicode they contain.

use libfuzzer_sys::fuzz_target;

use ticketdesk::render::OutputFormat;
use ticketdesk::session::Session;
use ticketdesk::store::TicketStore;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut session = Session::new(TicketStore::seeded(), OutputFormat::Text);
    let mut sink = std::io::sink();
    for line in text.lines().take(32) {
        let _ = session.execute(line, &mut sink);
    }
});
