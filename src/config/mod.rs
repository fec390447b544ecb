pub mod config_command;
pub mod loader;
pub mod schema;
