pub mod data;
pub mod models;
pub mod ordering;
