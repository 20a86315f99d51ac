use twilight_model::{
    channel::Channel,
    guild::{Member, Role},
    id::{marker::GuildMarker, Id},
    user::User,
};

use crate::{cache::CacheView, mention};

// Each helper pairs mention/snowflake parsing with a cache read. A string
// that doesn't parse short-circuits to None without touching the cache; a
// parsed id that isn't cached is also None, callers can't tell the two
// apart and don't need to.

pub fn resolve_user(cache: &impl CacheView, input: &str) -> Option<User> {
    let user_id = mention::user_id(input)?;
    let user = cache.user(user_id);

    if user.is_none() {
        tracing::trace!(%user_id, "user not in cache");
    }

    user
}

pub fn resolve_member(
    cache: &impl CacheView,
    guild_id: Id<GuildMarker>,
    input: &str,
) -> Option<Member> {
    let user_id = mention::user_id(input)?;
    cache.member(guild_id, user_id)
}

pub fn resolve_channel(cache: &impl CacheView, input: &str) -> Option<Channel> {
    let channel_id = mention::channel_id(input)?;
    cache.channel(channel_id)
}

pub fn resolve_role(
    cache: &impl CacheView,
    guild_id: Id<GuildMarker>,
    input: &str,
) -> Option<Role> {
    let role_id = mention::role_id(input)?;
    cache.role(guild_id, role_id)
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use super::*;
    use crate::{cache::MemoryCache, testutil};

    fn cache() -> MemoryCache {
        let mut cache = MemoryCache::new();
        cache.insert_user(testutil::user(123_456, "ava"));
        cache.insert_member(Id::new(1), testutil::member(123_456, "ava"));
        cache.insert_channel(testutil::channel(42_424_242, 1));
        cache.insert_role(Id::new(1), testutil::role(777_777, "mods"));
        cache
    }

    #[test]
    fn resolve_user_from_id_and_mention() {
        let cache = cache();

        assert_eq!(
            resolve_user(&cache, "123456").map(|u| u.id),
            Some(Id::new(123_456))
        );
        assert_eq!(
            resolve_user(&cache, "<@!123456>").map(|u| u.id),
            Some(Id::new(123_456))
        );
    }

    #[test]
    fn resolve_user_unparseable_input_is_none() {
        assert!(resolve_user(&cache(), "not-a-user").is_none());
        assert!(resolve_user(&cache(), "<#123456>").is_none());
    }

    #[test]
    fn resolve_user_cache_miss_is_none() {
        assert!(resolve_user(&cache(), "999999").is_none());
    }

    #[test]
    fn resolve_member_is_guild_scoped() {
        let cache = cache();

        assert!(resolve_member(&cache, Id::new(1), "<@123456>").is_some());
        assert!(resolve_member(&cache, Id::new(2), "<@123456>").is_none());
    }

    #[test]
    fn resolve_channel_and_role() {
        let cache = cache();

        assert_eq!(
            resolve_channel(&cache, "<#42424242>").map(|c| c.id),
            Some(Id::new(42_424_242))
        );
        assert_eq!(
            resolve_role(&cache, Id::new(1), "<@&777777>").map(|r| r.name),
            Some("mods".to_string())
        );
        assert!(resolve_role(&cache, Id::new(1), "<@777777>").is_none());
    }
}
