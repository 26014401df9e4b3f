pub mod commands;
pub mod logging;
pub mod models;
pub mod render;
pub mod session;
pub mod store;
