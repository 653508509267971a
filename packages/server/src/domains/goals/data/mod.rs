pub mod goal;

pub use goal::{GoalData, GoalInput};
