use super::Drain;
use crate::event::Event;
use crate::level::Level;
use crate::marker::DONTPRINT_TAG;
use chrono::prelude::*;
use chrono::{DateTime, Local, Utc};
use colored::*;

/// Simple drain that prints every event it receives as a single line.
pub struct StdoutDrain {
    pub timestamp_format: Option<TimestampFormat>,
    /// By default this drain writes to STDERR,
    /// this flag will make it write to STDOUT instead
    pub use_stdout: bool,
}

impl StdoutDrain {
    pub fn new() -> Self {
        Self {
            timestamp_format: None,
            use_stdout: false,
        }
    }

    /// The line this drain prints for `event`, if any.
    pub fn format_event(&self, event: &Event) -> Option<String> {
        if !should_print(event) {
            return None;
        }
        let timestamp_format = self.timestamp_format.unwrap_or(TimestampFormat::UTC);
        Some(make_string(event, timestamp_format))
    }
}

#[derive(Clone, Copy, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub enum TimestampFormat {
    UTC,
    Local,
    None,
    Redacted,
}

pub fn should_print(event: &Event) -> bool {
    !event.has_tag(DONTPRINT_TAG)
}

impl Drain for StdoutDrain {
    fn log_event(&mut self, event: Event) {
        let result = match self.format_event(&event) {
            Some(result) => result,
            None => return,
        };

        if self.use_stdout {
            println!("{}", result);
        } else {
            eprintln!("{}", result);
        }
    }
}

pub fn make_string(event: &Event, timestamp_format: TimestampFormat) -> String {
    let timestamp = match timestamp_format {
        TimestampFormat::None => String::new(),
        TimestampFormat::Redacted => "[ ] ".to_string(), // for testing
        TimestampFormat::Local => {
            let datetime: DateTime<Local> = event.created_at().into();
            let rounded = datetime.round_subsecs(0);
            let formatted = rounded.format("%I:%M:%S%p");
            format!("[{}] ", formatted).dimmed().to_string()
        }
        TimestampFormat::UTC => {
            let datetime: DateTime<Utc> = event.created_at().into();
            let rounded = datetime.round_subsecs(0);
            format!("[{:?}] ", rounded).dimmed().to_string()
        }
    };

    let level = format!("{:<5}", event.level());
    let level = match event.level() {
        Level::Error => level.red(),
        Level::Warn => level.yellow(),
        Level::Info => level.green(),
        Level::Debug => level.blue(),
        Level::Trace => level.dimmed(),
    };

    let mut result = format!("{}{} {}", timestamp, level, event.template());

    if !event.arguments().is_empty() {
        let arguments = event
            .arguments()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        result.push_str(&format!(" [{}]", arguments).dimmed().to_string());
    }

    if let Some(error) = event.error() {
        result.push_str(&format!(" | error: {:#}", error).red().to_string());
    }

    result
}
