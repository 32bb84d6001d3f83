use std::sync::Arc;

/// Error attached to an event. Shared so events stay cheap to clone.
pub type EventError = Arc<anyhow::Error>;

/// A substitution value passed along with a message template.
#[derive(Debug, Clone)]
pub enum Argument {
    String(String),
    Int(i64),
    Float(f64),
    Error(EventError),
    None,
}

impl Argument {
    pub fn is_error(&self) -> bool {
        matches!(self, Argument::Error(_))
    }

    pub fn into_error(self) -> Option<EventError> {
        match self {
            Argument::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Builds a `Vec<Argument>` out of anything convertible into an `Argument`.
///
/// ```
/// let args = lltree::args!["user", 42, anyhow::anyhow!("boom")];
/// assert!(args[2].is_error());
/// ```
#[macro_export]
macro_rules! args {
    ( $( $arg:expr ),* $(,)? ) => {
        vec![ $( $crate::Argument::from($arg) ),* ]
    };
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::String(string) => write!(f, "{}", string),
            Argument::Int(i) => write!(f, "{}", i),
            Argument::Float(float) => write!(f, "{}", float),
            Argument::Error(e) => write!(f, "{:#}", e),
            Argument::None => Ok(()),
        }
    }
}

impl<'a> From<&'a str> for Argument {
    fn from(v: &'a str) -> Self {
        Argument::String(v.to_owned())
    }
}

impl<'a> From<&'a String> for Argument {
    fn from(v: &'a String) -> Self {
        Argument::String(v.clone())
    }
}

impl From<String> for Argument {
    fn from(v: String) -> Self {
        Argument::String(v)
    }
}

impl From<bool> for Argument {
    fn from(v: bool) -> Self {
        Argument::String(format!("{}", v))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<Option<String>> for Argument {
    fn from(maybe_value: Option<String>) -> Self {
        match maybe_value {
            Some(v) => v.into(),
            None => Argument::None,
        }
    }
}

impl From<anyhow::Error> for Argument {
    fn from(e: anyhow::Error) -> Self {
        Argument::Error(Arc::new(e))
    }
}

impl From<EventError> for Argument {
    fn from(e: EventError) -> Self {
        Argument::Error(e)
    }
}

macro_rules! from_int_types {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Argument {
                fn from(value: $t) -> Self {
                    Argument::Int(value as i64)
                }
            }
        )*
    };
}

from_int_types!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
