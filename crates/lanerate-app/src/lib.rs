//! Application service layer - search handler, queries, config, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
