use std::sync::LazyLock;

use regex::Regex;
use twilight_model::id::{
    marker::{ChannelMarker, RoleMarker, UserMarker},
    Id,
};

// 6-20 digits, no leading zero
static SNOWFLAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5,19}$").unwrap());
static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<@!?([0-9]+)>$").unwrap());
static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<#([0-9]+)>$").unwrap());
static ROLE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<@&([0-9]+)>$").unwrap());

/// Parses a bare snowflake or a `<@id>` / `<@!id>` mention into a user id.
pub fn user_id(input: &str) -> Option<Id<UserMarker>> {
    parse_id(input, &USER_MENTION)
}

/// Parses a bare snowflake or a `<#id>` mention into a channel id.
pub fn channel_id(input: &str) -> Option<Id<ChannelMarker>> {
    parse_id(input, &CHANNEL_MENTION)
}

/// Parses a bare snowflake or a `<@&id>` mention into a role id.
pub fn role_id(input: &str) -> Option<Id<RoleMarker>> {
    parse_id(input, &ROLE_MENTION)
}

fn parse_id<M>(input: &str, mention: &Regex) -> Option<Id<M>> {
    let input = input.trim();

    if SNOWFLAKE.is_match(input) {
        return Id::new_checked(input.parse().ok()?);
    }

    let captures = mention.captures(input)?;
    Id::new_checked(captures[1].parse().ok()?)
}
