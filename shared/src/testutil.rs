use serde_json::json;
use twilight_model::{
    channel::Channel,
    guild::{Member, Role},
    user::User,
};

// Entities are built from minimal Discord-shaped JSON, the same payloads the
// gateway would deliver, instead of spelling out every struct field.

pub(crate) fn user(id: u64, name: &str) -> User {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "username": name,
        "discriminator": "0",
        "avatar": null,
    }))
    .expect("invalid user fixture")
}

pub(crate) fn member(user_id: u64, name: &str) -> Member {
    serde_json::from_value(json!({
        "roles": [],
        "joined_at": "2024-01-01T00:00:00+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0,
        "user": {
            "id": user_id.to_string(),
            "username": name,
            "discriminator": "0",
            "avatar": null,
        },
    }))
    .expect("invalid member fixture")
}

pub(crate) fn channel(id: u64, guild_id: u64) -> Channel {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "type": 0,
        "guild_id": guild_id.to_string(),
        "name": "general",
    }))
    .expect("invalid channel fixture")
}

pub(crate) fn role(id: u64, name: &str) -> Role {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "managed": false,
        "mentionable": false,
        "permissions": "0",
        "position": 0,
        "flags": 0,
    }))
    .expect("invalid role fixture")
}
