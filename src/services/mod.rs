//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream calls and pure domain logic so route handlers
//! can stay focused on protocol translation.

pub mod catalog;
pub mod identity;
pub mod occurrence;
pub mod phenology;
