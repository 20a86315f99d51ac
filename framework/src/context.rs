use std::sync::Arc;

use twilight_gateway::Event;
use twilight_http::Client;

/// Handed to every listener when its event fires.
#[derive(Clone, Debug)]
pub struct EventContext<T: Clone + Send + Sync> {
    pub services: T,
    pub client: Arc<Client>,

    pub event: Event,
}
