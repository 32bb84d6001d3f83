use crate::argument::{Argument, EventError};
use crate::level::Level;
use crate::marker::{Marker, BEGIN_TAG, END_TAG};
use crate::uniq_id::UniqID;
use std::time::SystemTime;

/// A single log event. Immutable once constructed; cloning keeps the id.
#[derive(Debug, Clone)]
pub struct Event {
    id: UniqID,
    level: Level,
    marker: Option<Marker>,
    template: String,
    arguments: Vec<Argument>,
    error: Option<EventError>,
    created_at: SystemTime,
}

impl Event {
    /// If the last argument is an error it's moved into the error slot.
    pub fn new<S: Into<String>>(
        marker: Option<Marker>,
        level: Level,
        template: S,
        mut arguments: Vec<Argument>,
    ) -> Self {
        let error = if arguments.last().map_or(false, Argument::is_error) {
            arguments.pop().and_then(Argument::into_error)
        } else {
            None
        };
        Self::with_error(marker, level, template, arguments, error)
    }

    pub fn with_error<S: Into<String>>(
        marker: Option<Marker>,
        level: Level,
        template: S,
        arguments: Vec<Argument>,
        error: Option<EventError>,
    ) -> Self {
        Self {
            id: UniqID::new(),
            level,
            marker,
            template: template.into(),
            arguments,
            error,
            created_at: SystemTime::now(),
        }
    }

    pub fn id(&self) -> UniqID {
        self.id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn error(&self) -> Option<&EventError> {
        self.error.as_ref()
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.marker.as_ref().map_or(false, |m| m.contains(tag))
    }

    pub fn is_begin(&self) -> bool {
        self.has_tag(BEGIN_TAG)
    }

    /// A marker carrying both tags counts as BEGIN only.
    pub fn is_end(&self) -> bool {
        !self.is_begin() && self.has_tag(END_TAG)
    }
}
