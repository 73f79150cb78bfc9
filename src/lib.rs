pub mod analysis;
pub mod cache;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
