//! In-memory patient store backing the preview shell and tests.

use std::collections::HashSet;
use std::path::Path;
use std::sync::RwLock;

use crate::domain::action::{ActionKind, ActionSet};
use crate::domain::patient::Patient;
use crate::domain::types::{PageSize, PatientId, SearchQuery};
use crate::repository::errors::{
    ActionError, ActionResult, FetchError, FetchResult, RepositoryError, RepositoryResult,
};
use crate::repository::{FetchedPage, PatientMutator, PatientSource};

/// Patient list held in memory, newest registrations first.
#[derive(Debug)]
pub struct InMemoryPatientRepository {
    patients: RwLock<Vec<Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new(mut patients: Vec<Patient>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        for patient in &patients {
            if !seen.insert(patient.id) {
                return Err(RepositoryError::DuplicateId(patient.id));
            }
        }

        patients.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(Self {
            patients: RwLock::new(patients),
        })
    }

    /// Parses a JSON array of patients.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let patients: Vec<Patient> = serde_json::from_str(json)?;
        Self::new(patients)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.patients.read().map(|p| p.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PatientSource for InMemoryPatientRepository {
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: usize,
        page_size: PageSize,
    ) -> FetchResult<FetchedPage> {
        if page == 0 {
            return Err(FetchError::Server("page numbers start at 1".to_string()));
        }

        let patients = self
            .patients
            .read()
            .map_err(|_| FetchError::Server("patient store is unavailable".to_string()))?;

        let needle = query.as_str().to_lowercase();
        let matching: Vec<&Patient> = patients.iter().filter(|p| p.matches(&needle)).collect();

        // Pages past the end come back empty with the real total so the
        // caller can clamp.
        let rows = matching
            .iter()
            .skip((page - 1).saturating_mul(page_size.get()))
            .take(page_size.get())
            .map(|p| p.to_row(ActionSet::all()))
            .collect();

        Ok(FetchedPage::new(rows, matching.len()))
    }
}

impl PatientMutator for InMemoryPatientRepository {
    fn perform_action(&self, kind: ActionKind, target: PatientId) -> ActionResult<()> {
        let mut patients = self
            .patients
            .write()
            .map_err(|_| ActionError::Failed("patient store is unavailable".to_string()))?;

        let position = patients
            .iter()
            .position(|p| p.id == target)
            .ok_or(ActionError::NotFound(target))?;

        if kind == ActionKind::Delete {
            let removed = patients.remove(position);
            log::info!("Deleted patient {} ({})", removed.id, removed.file_number);
        }

        Ok(())
    }
}
