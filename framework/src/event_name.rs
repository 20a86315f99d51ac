use std::fmt;

use twilight_gateway::EventType;

/// Identifies an event a listener subscribes to. Gateway events use the
/// closed [`EventType`] set, `Custom` covers synthetic events a plugin
/// dispatches itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    Gateway(EventType),
    Custom(String),
}

impl EventName {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }
}

impl From<EventType> for EventName {
    fn from(kind: EventType) -> Self {
        Self::Gateway(kind)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gateway(kind) => write!(f, "{:?}", kind),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
