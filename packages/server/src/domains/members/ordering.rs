//! Member presentation-order resolution.
//!
//! The members gallery supports three ordering sources, applied in priority
//! order:
//!
//! 1. A client-local ordering map (member id -> integer rank), mirrored from
//!    the UI's localStorage. Unknown ids sort last (rank 999).
//! 2. The server-side `display_order` column. Rows without one sort after
//!    every row that has one.
//! 3. Creation time, ascending.
//!
//! A malformed ordering map falls back to creation time alone, matching the
//! UI's behavior when the stored JSON fails to parse: `display_order` is not
//! consulted on that path.

use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use crate::domains::members::models::Member;

/// Rank assigned to members absent from a client ordering map.
const UNRANKED: i64 = 999;

/// Parse a client ordering map from its JSON form (`{"<uuid>": rank, ...}`).
///
/// Returns None when the JSON is malformed or a key is not a UUID, which
/// callers treat as "no map" (fall back to creation time).
pub fn parse_order_map(raw: &str) -> Option<HashMap<Uuid, i64>> {
    let parsed: HashMap<String, i64> = serde_json::from_str(raw).ok()?;
    parsed
        .into_iter()
        .map(|(k, v)| Uuid::parse_str(&k).ok().map(|id| (id, v)))
        .collect()
}

/// Sort members in place according to the resolution rules above.
///
/// `raw_order` is the client's ordering map as received (the `order` query
/// parameter). `Some` with JSON that fails to parse sorts by creation time
/// alone; `None` applies the server-side ordering.
pub fn sort_members(members: &mut [Member], raw_order: Option<&str>) {
    match raw_order {
        Some(raw) => match parse_order_map(raw) {
            Some(map) => {
                members.sort_by(|a, b| {
                    let rank_a = map.get(&a.id).copied().unwrap_or(UNRANKED);
                    let rank_b = map.get(&b.id).copied().unwrap_or(UNRANKED);
                    rank_a
                        .cmp(&rank_b)
                        .then_with(|| a.created_at.cmp(&b.created_at))
                });
            }
            None => {
                members.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            }
        },
        None => {
            members.sort_by(|a, b| compare_server_order(a, b));
        }
    }
}

/// Server-side comparator: display_order ascending, members without one
/// after every ordered member, creation time as the tie-break.
fn compare_server_order(a: &Member, b: &Member) -> Ordering {
    let rank_a = a.display_order.map_or(i64::MAX, i64::from);
    let rank_b = b.display_order.map_or(i64::MAX, i64::from);
    rank_a
        .cmp(&rank_b)
        .then_with(|| a.created_at.cmp(&b.created_at))
}
