use std::collections::HashMap;

use crate::{blueprint::EventListenerBlueprint, context::EventContext, event_name::EventName};

/// Holds registered blueprints per event, in registration order. Dispatch
/// options ride along untouched for an outer dispatch layer to act on.
pub struct BlueprintRegistry<T: Clone + Send + Sync> {
    listeners: HashMap<EventName, Vec<EventListenerBlueprint<T>>>,
}

impl<T: Clone + Send + Sync> BlueprintRegistry<T> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    pub fn register(&mut self, blueprint: EventListenerBlueprint<T>) {
        self.listeners
            .entry(blueprint.event.clone())
            .or_default()
            .push(blueprint);
    }

    pub fn remove(&mut self, blueprint: &EventListenerBlueprint<T>) -> bool {
        let Some(listeners) = self.listeners.get_mut(&blueprint.event) else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|registered| registered != blueprint);
        listeners.len() != before
    }

    pub fn get_all(&self, event: &EventName) -> Option<Vec<&EventListenerBlueprint<T>>> {
        self.listeners.get(event).map(|list| list.iter().collect())
    }

    /// Runs every listener registered for `event`. A failing listener is
    /// logged and does not stop the ones after it.
    pub async fn dispatch(&self, event: &EventName, ctx: EventContext<T>) {
        let Some(blueprints) = self.listeners.get(event) else {
            return;
        };

        tracing::debug!(%event, listeners = blueprints.len(), "dispatching event");

        for blueprint in blueprints {
            if let Err(err) = (blueprint.listener)(ctx.clone()).await {
                tracing::warn!(%event, "error running event listener: {}", err);
            }
        }
    }
}

impl<T: Clone + Send + Sync> Default for BlueprintRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
