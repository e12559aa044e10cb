use colored::Colorize;
use tablefilter::api::{CmdMessage, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Prints rendered output that already carries its own line breaks.
pub(super) fn print_rendered(output: &str) {
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Sends warnings to stderr, keeping stdout machine-readable.
pub(super) fn eprint_warnings(messages: &[CmdMessage]) {
    for message in messages {
        if message.level == MessageLevel::Warning {
            eprintln!("{}", message.content.yellow());
        }
    }
}
