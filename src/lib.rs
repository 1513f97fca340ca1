//! Bloom backend: identity login proxy, bloom data API and frontend route table.

pub mod config;
pub mod routes;
pub mod services;
pub mod site;
pub mod state;
