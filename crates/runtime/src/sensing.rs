//! Search helpers on top of the framework's raw entity and item queries.
//!
//! The framework returns every match in range; value and sort functions are
//! applied here so strategies can express preferences in plain Rust.
use bot_api::{BotFramework, Entity, EntityQuery, Found, MatchInfo};
use tracing::debug;

/// Sorts hits ascending by `sort_key(distance, value(hit))` and keeps the
/// first `max_count`.
pub fn rank<T>(
    found: Vec<Found<T>>,
    value: impl Fn(&T) -> f64,
    sort_key: impl Fn(f64, f64) -> f64,
    max_count: Option<usize>,
) -> Vec<Found<T>> {
    let mut keyed: Vec<(f64, Found<T>)> = found
        .into_iter()
        .map(|hit| (sort_key(hit.distance, value(&hit.result)), hit))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    if let Some(max) = max_count {
        keyed.truncate(max);
    }
    keyed.into_iter().map(|(_, hit)| hit).collect()
}

/// Nearest attackable opponents, closest first.
///
/// In practice mode there is no other team. An empty name list would match
/// nothing anyway, so no query is made.
pub fn nearest_opponents(
    bot: &dyn BotFramework,
    opponent_names: Vec<String>,
    max_distance: f64,
    max_count: usize,
) -> Vec<Entity> {
    if opponent_names.is_empty() {
        return Vec::new();
    }
    let found = bot.find_entities(&EntityQuery {
        names: opponent_names,
        attackable: true,
        max_distance,
    });
    rank(found, |_| 0.0, |distance, _| distance, Some(max_count))
        .into_iter()
        .map(|hit| hit.result)
        .collect()
}

/// Teammates within `max_distance`, closest first.
///
/// Bots only see about 30 blocks, so a teammate 40 blocks away is not found
/// even if it exists.
pub fn nearest_teammates(
    bot: &dyn BotFramework,
    match_info: &MatchInfo,
    max_distance: f64,
    bots_only: bool,
) -> Vec<Entity> {
    let me = bot.username();
    let Some(team) = match_info.team_of(&me) else {
        return Vec::new();
    };
    debug!("Checking for any team-mates in range: {}", max_distance);

    let names: Vec<String> = match_info
        .players
        .iter()
        .filter(|p| p.team.as_deref() == Some(team))
        .filter(|p| !bots_only || p.is_bot)
        .filter(|p| p.username != me)
        .map(|p| p.username.clone())
        .collect();
    if names.is_empty() {
        return Vec::new();
    }

    let found = bot.find_entities(&EntityQuery {
        names,
        attackable: true,
        max_distance,
    });
    rank(found, |_| 0.0, |distance, _| distance, None)
        .into_iter()
        .map(|hit| hit.result)
        .collect()
}
