pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod utils;
