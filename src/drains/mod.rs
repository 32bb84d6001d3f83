pub mod stdout;

use crate::argument::Argument;
use crate::event::Event;
use crate::level::Level;
use crate::marker::Marker;

/// Anything that accepts log events. Every provided method builds an `Event`
/// (moving a trailing error argument into the error slot) and hands it to
/// `log_event`.
pub trait Drain {
    fn log_event(&mut self, event: Event);

    /// Events are never filtered by level.
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(
        &mut self,
        marker: Option<Marker>,
        level: Level,
        template: &str,
        arguments: Vec<Argument>,
    ) {
        self.log_event(Event::new(marker, level, template, arguments));
    }

    fn trace(&mut self, template: &str, arguments: Vec<Argument>) {
        self.log(None, Level::Trace, template, arguments);
    }

    fn debug(&mut self, template: &str, arguments: Vec<Argument>) {
        self.log(None, Level::Debug, template, arguments);
    }

    fn info(&mut self, template: &str, arguments: Vec<Argument>) {
        self.log(None, Level::Info, template, arguments);
    }

    fn warn(&mut self, template: &str, arguments: Vec<Argument>) {
        self.log(None, Level::Warn, template, arguments);
    }

    fn error(&mut self, template: &str, arguments: Vec<Argument>) {
        self.log(None, Level::Error, template, arguments);
    }

    /// Open a scope.
    fn begin(&mut self, level: Level, template: &str, arguments: Vec<Argument>) {
        self.log(Some(Marker::begin()), level, template, arguments);
    }

    /// Close the innermost open scope.
    fn end(&mut self, level: Level, template: &str, arguments: Vec<Argument>) {
        self.log(Some(Marker::end()), level, template, arguments);
    }
}
