use lltree::drains::stdout::{make_string, should_print, TimestampFormat};
use lltree::utils::strip_ansi;
use lltree::{Drain, Event};
use std::sync::{Arc, Mutex};

/// Keeps every printable event as a line of text, in the order received.
#[derive(Clone)]
pub struct TestDrain {
    pub output: Arc<Mutex<String>>,
}

impl TestDrain {
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(String::new())),
        }
    }
}

impl Drain for TestDrain {
    fn log_event(&mut self, event: Event) {
        if !should_print(&event) {
            return;
        }
        let line = make_string(&event, TimestampFormat::Redacted);
        let line = strip_ansi(&line).expect("can't strip ansi");
        let mut output = self.output.lock().expect("poisoned lock");
        output.push_str(&line);
        output.push('\n');
    }
}

impl std::fmt::Display for TestDrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.output.lock().expect("poisoned lock");
        write!(f, "{}", &s)
    }
}
