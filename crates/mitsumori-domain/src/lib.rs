//! Domain layer - models, pricing services, repository traits

pub mod model;
pub mod repository;
pub mod service;
