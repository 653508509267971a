pub mod contact;

pub use contact::{ContactData, ContactInput};
