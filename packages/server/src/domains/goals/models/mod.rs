pub mod goal;

pub use goal::{Goal, GoalStatus};
