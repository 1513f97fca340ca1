//! Frontend route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single-page frontend's router maps each URL path to a page component
//! and reads `meta` to pick the header variant. This module owns that table as
//! plain data; matching precedence belongs to the frontend router. The binary
//! validates the table at startup so a duplicated path never ships.

use std::collections::{BTreeMap, HashSet};

/// Header variant for the landing page.
pub const HEADER_HOME: &str = "home";
/// Header variant for every other page.
pub const HEADER_INNER: &str = "inner";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: &'static str,
    pub meta: BTreeMap<&'static str, &'static str>,
}

impl RouteEntry {
    fn new(path: &'static str, page: &'static str, header_variant: &'static str) -> Self {
        Self { path, page, meta: BTreeMap::from([("headerVariant", header_variant)]) }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path {0:?} must start with '/'")]
    RelativePath(String),
    #[error("route {0:?} has no page")]
    MissingPage(String),
    #[error("route path {0:?} is declared more than once")]
    DuplicatePath(String),
}

/// The ordered route table handed to the frontend router.
#[must_use]
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", "HomePage", HEADER_HOME),
        RouteEntry::new("/about", "AboutPage", HEADER_INNER),
        RouteEntry::new("/monitor", "MonitorPage", HEADER_INNER),
        RouteEntry::new("/faq", "FaqPage", HEADER_INNER),
        RouteEntry::new("/contact", "ContactPage", HEADER_INNER),
    ]
}

/// Check every entry is well-formed and no path appears twice.
///
/// # Errors
///
/// Returns the first offending entry.
pub fn validate(table: &[RouteEntry]) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();
    for entry in table {
        if !entry.path.starts_with('/') {
            return Err(RouteTableError::RelativePath(entry.path.to_owned()));
        }
        if entry.page.trim().is_empty() {
            return Err(RouteTableError::MissingPage(entry.path.to_owned()));
        }
        if !seen.insert(entry.path) {
            return Err(RouteTableError::DuplicatePath(entry.path.to_owned()));
        }
    }
    Ok(())
}

/// Exact-path lookup. First declared entry wins.
#[must_use]
pub fn resolve<'a>(table: &'a [RouteEntry], path: &str) -> Option<&'a RouteEntry> {
    table.iter().find(|entry| entry.path == path)
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
