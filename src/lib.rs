pub mod agent;
pub mod config_manager;
pub mod error;
pub mod routes;
pub mod state;
pub mod translate;
