pub use blueprint::{
    event_listener, BlueprintBuilder, DispatchOptions, EventListenerBlueprint, ListenerFunc,
};
pub use context::EventContext;
pub use event_name::EventName;
pub use registry::BlueprintRegistry;
pub use resolver::{related_channel_id, related_guild_id, related_message_id, related_user};

pub mod blueprint;
pub mod context;
pub mod event_name;
pub mod macros;
pub mod registry;
pub mod resolver;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
