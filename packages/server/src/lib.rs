// Dasi Hakgyo ("다시 학교") community site - API core
//
// Backend for the community website: members gallery, meeting records,
// goals dashboard, public message board, contact info, and image handling.
// Domain-driven layout: each entity owns its persistence model and API
// representation under domains/*.

pub mod config;
pub mod data_migrations;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
