// Library exports for the parents portal
// This allows integration tests and external code to use portal modules

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod portal;
pub mod routes;
pub mod state;
