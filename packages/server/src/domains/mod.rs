// Domain modules - one per row-shaped entity in the external store
pub mod contact;
pub mod goals;
pub mod meetings;
pub mod members;
pub mod messages;

pub mod seed;
