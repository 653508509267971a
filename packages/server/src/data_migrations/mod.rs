// One-off schema upgrades, triggered over HTTP for databases created before
// the corresponding sqlx migration existed.
pub mod member_columns;

pub use member_columns::{ensure_member_columns, MemberColumnsReport};
