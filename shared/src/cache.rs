use std::collections::HashMap;

use twilight_model::{
    channel::Channel,
    guild::{Member, Role},
    id::{
        marker::{ChannelMarker, GuildMarker, RoleMarker, UserMarker},
        Id,
    },
    user::User,
};

/// Read-only view into the entity caches owned by the gateway client.
///
/// Misses are `None`, both for entities the client never saw and for
/// entities it evicted. Implementations must not block.
pub trait CacheView {
    fn user(&self, user_id: Id<UserMarker>) -> Option<User>;
    fn member(&self, guild_id: Id<GuildMarker>, user_id: Id<UserMarker>) -> Option<Member>;
    fn channel(&self, channel_id: Id<ChannelMarker>) -> Option<Channel>;
    fn role(&self, guild_id: Id<GuildMarker>, role_id: Id<RoleMarker>) -> Option<Role>;
}

/// Plain map-backed [`CacheView`], filled by hand. Enough for tests and for
/// bots that track the handful of entities they care about themselves.
#[derive(Debug, Default)]
pub struct MemoryCache {
    users: HashMap<Id<UserMarker>, User>,
    members: HashMap<(Id<GuildMarker>, Id<UserMarker>), Member>,
    channels: HashMap<Id<ChannelMarker>, Channel>,
    roles: HashMap<(Id<GuildMarker>, Id<RoleMarker>), Role>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn insert_member(&mut self, guild_id: Id<GuildMarker>, member: Member) {
        self.members.insert((guild_id, member.user.id), member);
    }

    pub fn insert_channel(&mut self, channel: Channel) {
        self.channels.insert(channel.id, channel);
    }

    pub fn insert_role(&mut self, guild_id: Id<GuildMarker>, role: Role) {
        self.roles.insert((guild_id, role.id), role);
    }
}

impl CacheView for MemoryCache {
    fn user(&self, user_id: Id<UserMarker>) -> Option<User> {
        self.users.get(&user_id).cloned()
    }

    fn member(&self, guild_id: Id<GuildMarker>, user_id: Id<UserMarker>) -> Option<Member> {
        self.members.get(&(guild_id, user_id)).cloned()
    }

    fn channel(&self, channel_id: Id<ChannelMarker>) -> Option<Channel> {
        self.channels.get(&channel_id).cloned()
    }

    fn role(&self, guild_id: Id<GuildMarker>, role_id: Id<RoleMarker>) -> Option<Role> {
        self.roles.get(&(guild_id, role_id)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use super::*;
    use crate::testutil;

    #[test]
    fn memory_cache_round_trips() {
        let mut cache = MemoryCache::new();
        cache.insert_user(testutil::user(123_456, "ava"));
        cache.insert_member(Id::new(1), testutil::member(123_456, "ava"));
        cache.insert_channel(testutil::channel(42, 1));
        cache.insert_role(Id::new(1), testutil::role(7, "mods"));

        assert_eq!(
            cache.user(Id::new(123_456)).map(|u| u.name),
            Some("ava".to_string())
        );
        assert_eq!(
            cache
                .member(Id::new(1), Id::new(123_456))
                .map(|m| m.user.id),
            Some(Id::new(123_456))
        );
        assert_eq!(cache.channel(Id::new(42)).map(|c| c.id), Some(Id::new(42)));
        assert_eq!(
            cache.role(Id::new(1), Id::new(7)).map(|r| r.name),
            Some("mods".to_string())
        );
    }

    #[test]
    fn memory_cache_misses_are_none() {
        let cache = MemoryCache::new();

        assert!(cache.user(Id::new(1)).is_none());
        assert!(cache.member(Id::new(1), Id::new(2)).is_none());
        assert!(cache.channel(Id::new(3)).is_none());
        assert!(cache.role(Id::new(1), Id::new(4)).is_none());
    }

    #[test]
    fn member_lookup_is_guild_scoped() {
        let mut cache = MemoryCache::new();
        cache.insert_member(Id::new(1), testutil::member(123_456, "ava"));

        assert!(cache.member(Id::new(2), Id::new(123_456)).is_none());
    }
}
