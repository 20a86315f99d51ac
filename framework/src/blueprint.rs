use std::{future::Future, marker::PhantomData, pin::Pin};

use crate::{context::EventContext, event_name::EventName, Error};

pub type ListenerFunc<T> =
    fn(EventContext<T>) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;

/// Flags for the dispatch layer (priority, once-only, ...). Carried verbatim
/// and never interpreted here.
pub type DispatchOptions = serde_json::Map<String, serde_json::Value>;

/// A not-yet-registered event subscription: which event, which listener, and
/// whatever dispatch flags the registering side wants to pass along.
///
/// `event` and `listener` are dedicated fields, so keys of the same name
/// inside the options bag can never override them.
#[derive(Clone, Debug)]
pub struct EventListenerBlueprint<T: Clone + Send + Sync> {
    pub event: EventName,
    pub listener: ListenerFunc<T>,
    pub options: DispatchOptions,
}

// manual impl, a derive would require T: PartialEq even though the service
// type takes no part in comparisons
impl<T: Clone + Send + Sync> PartialEq for EventListenerBlueprint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.event == other.event
            && self.listener == other.listener
            && self.options == other.options
    }
}

impl<T: Clone + Send + Sync> EventListenerBlueprint<T> {
    pub fn new(event: impl Into<EventName>, listener: ListenerFunc<T>) -> Self {
        Self {
            event: event.into(),
            listener,
            options: DispatchOptions::new(),
        }
    }

    pub fn with_options(
        event: impl Into<EventName>,
        options: DispatchOptions,
        listener: ListenerFunc<T>,
    ) -> Self {
        Self {
            event: event.into(),
            listener,
            options,
        }
    }
}

/// Pins the service type before the event and listener are known, the
/// counterpart of calling the original builder with no arguments.
pub fn event_listener<T: Clone + Send + Sync>() -> BlueprintBuilder<T> {
    BlueprintBuilder::new()
}

#[derive(Debug)]
pub struct BlueprintBuilder<T: Clone + Send + Sync> {
    services: PhantomData<fn(T)>,
}

impl<T: Clone + Send + Sync> Default for BlueprintBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> BlueprintBuilder<T> {
    pub fn new() -> Self {
        Self {
            services: PhantomData,
        }
    }

    pub fn event(
        &self,
        event: impl Into<EventName>,
        listener: ListenerFunc<T>,
    ) -> EventListenerBlueprint<T> {
        EventListenerBlueprint::new(event, listener)
    }

    pub fn event_with_options(
        &self,
        event: impl Into<EventName>,
        options: DispatchOptions,
        listener: ListenerFunc<T>,
    ) -> EventListenerBlueprint<T> {
        EventListenerBlueprint::with_options(event, options, listener)
    }
}
