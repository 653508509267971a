pub mod meeting;

pub use meeting::{MeetingData, MeetingInput};
