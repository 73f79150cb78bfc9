pub mod loader;
pub mod models;
pub mod table;
