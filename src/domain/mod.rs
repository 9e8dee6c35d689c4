//! Domain values exposed to the patient list view.

pub mod action;
pub mod patient;
pub mod types;
