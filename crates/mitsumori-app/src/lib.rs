//! Application service layer - use cases, config, export

pub mod config;
pub mod constants;
pub mod estimate_service;
pub mod export;
pub mod repository;
