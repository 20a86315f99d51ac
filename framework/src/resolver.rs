use twilight_gateway::Event;
use twilight_model::{
    gateway::presence::UserOrId,
    id::{
        marker::{ChannelMarker, GuildMarker, MessageMarker},
        Id,
    },
    user::User,
};

use plugboard_shared::CacheView;

// One arm per event kind that carries the entity, nothing else. An event
// kind without an arm has no related entity of that kind, which callers
// treat the same as a broken link inside the payload: None.

pub fn related_guild_id(event: &Event) -> Option<Id<GuildMarker>> {
    match event {
        Event::ChannelCreate(c) => c.guild_id,
        Event::ChannelDelete(c) => c.guild_id,
        Event::ChannelUpdate(c) => c.guild_id,
        Event::ChannelPinsUpdate(p) => p.guild_id,
        Event::BanAdd(b) => Some(b.guild_id),
        Event::BanRemove(b) => Some(b.guild_id),
        // covers both the available and unavailable guild-create payloads
        Event::GuildCreate(_) => event.guild_id(),
        Event::GuildDelete(g) => Some(g.id),
        Event::GuildEmojisUpdate(e) => Some(e.guild_id),
        Event::GuildUpdate(g) => Some(g.id),
        Event::UnavailableGuild(g) => Some(g.id),
        Event::MemberAdd(m) => Some(m.guild_id),
        Event::MemberChunk(c) => Some(c.guild_id),
        Event::MemberRemove(m) => Some(m.guild_id),
        Event::MemberUpdate(m) => Some(m.guild_id),
        Event::RoleCreate(r) => Some(r.guild_id),
        Event::RoleDelete(r) => Some(r.guild_id),
        Event::RoleUpdate(r) => Some(r.guild_id),
        Event::MessageCreate(m) => m.guild_id,
        Event::MessageDelete(m) => m.guild_id,
        Event::MessageDeleteBulk(m) => m.guild_id,
        Event::MessageUpdate(m) => m.guild_id,
        Event::ReactionAdd(r) => r.guild_id,
        Event::ReactionRemove(r) => r.guild_id,
        Event::ReactionRemoveAll(r) => r.guild_id,
        Event::PresenceUpdate(p) => Some(p.guild_id),
        Event::TypingStart(t) => t.guild_id,
        Event::VoiceStateUpdate(v) => v.guild_id,
        _ => None,
    }
}

pub fn related_channel_id(event: &Event) -> Option<Id<ChannelMarker>> {
    match event {
        Event::ChannelCreate(c) => Some(c.id),
        Event::ChannelDelete(c) => Some(c.id),
        Event::ChannelUpdate(c) => Some(c.id),
        Event::ChannelPinsUpdate(p) => Some(p.channel_id),
        Event::MessageCreate(m) => Some(m.channel_id),
        Event::MessageDelete(m) => Some(m.channel_id),
        Event::MessageDeleteBulk(m) => Some(m.channel_id),
        Event::MessageUpdate(m) => Some(m.channel_id),
        Event::ReactionAdd(r) => Some(r.channel_id),
        Event::ReactionRemove(r) => Some(r.channel_id),
        Event::ReactionRemoveAll(r) => Some(r.channel_id),
        Event::TypingStart(t) => Some(t.channel_id),
        // None when the state is a disconnect rather than a join or move
        Event::VoiceStateUpdate(v) => v.channel_id,
        _ => None,
    }
}

pub fn related_message_id(event: &Event) -> Option<Id<MessageMarker>> {
    match event {
        Event::MessageCreate(m) => Some(m.id),
        Event::MessageDelete(m) => Some(m.id),
        // a bulk delete is reported as one batch, keyed by its first entry
        Event::MessageDeleteBulk(m) => m.ids.first().copied(),
        Event::MessageUpdate(m) => Some(m.id),
        Event::ReactionAdd(r) => Some(r.message_id),
        Event::ReactionRemove(r) => Some(r.message_id),
        Event::ReactionRemoveAll(r) => Some(r.message_id),
        _ => None,
    }
}

/// Resolves the user an event is about. Reaction, presence, typing and
/// voice payloads may only carry a user id; those fall back to the member
/// cache, so an uncached member yields `None`.
pub fn related_user(event: &Event, cache: &impl CacheView) -> Option<User> {
    match event {
        Event::BanAdd(b) => Some(b.user.clone()),
        Event::BanRemove(b) => Some(b.user.clone()),
        Event::MemberAdd(m) => Some(m.user.clone()),
        Event::MemberChunk(c) => c.members.first().map(|m| m.user.clone()),
        Event::MemberRemove(m) => Some(m.user.clone()),
        Event::MemberUpdate(m) => Some(m.user.clone()),
        Event::MessageCreate(m) => Some(m.author.clone()),
        Event::MessageUpdate(m) => m.author.clone(),
        Event::PresenceUpdate(p) => match &p.user {
            UserOrId::User(user) => Some(user.clone()),
            UserOrId::UserId { id } => cache.member(p.guild_id, *id).map(|m| m.user),
        },
        Event::ReactionAdd(r) => {
            if let Some(member) = &r.member {
                return Some(member.user.clone());
            }
            cache.member(r.guild_id?, r.user_id).map(|m| m.user)
        }
        Event::ReactionRemove(r) => {
            if let Some(member) = &r.member {
                return Some(member.user.clone());
            }
            cache.member(r.guild_id?, r.user_id).map(|m| m.user)
        }
        Event::TypingStart(t) => {
            if let Some(member) = &t.member {
                return Some(member.user.clone());
            }
            cache.member(t.guild_id?, t.user_id).map(|m| m.user)
        }
        Event::VoiceStateUpdate(v) => {
            if let Some(member) = &v.member {
                return Some(member.user.clone());
            }
            cache.member(v.guild_id?, v.user_id).map(|m| m.user)
        }
        _ => None,
    }
}
