//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::types::{PageSize, TypeConstraintError};

#[derive(Clone, Debug, Deserialize)]
/// Settings of the patient list server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Rows per page of the patient list.
    pub page_size: usize,
    /// JSON file the in-memory patient store is seeded from.
    pub fixtures_path: String,
    /// Signing key for flash message cookies; at least 64 bytes.
    pub secret: String,
    /// Directory served under `/assets/static`.
    pub assets_dir: String,
}

impl ServerConfig {
    pub fn page_size(&self) -> Result<PageSize, TypeConstraintError> {
        PageSize::new(self.page_size)
    }
}
