//! Core contracts for incidentforge.
//!
//! This crate defines the incident record shape, the fixed categorical
//! catalogs it draws from, and the canonical column order of the generated
//! dataset.

pub mod catalog;
pub mod record;

pub use catalog::{
    ASSIGNMENT_GROUPS, CATEGORIES, CHANNELS, Priority, SUBCATEGORIES, Status, window_end,
    window_start,
};
pub use record::{FIELD_NAMES, IncidentRecord};
