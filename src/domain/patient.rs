use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::action::ActionSet;
use crate::domain::types::{FileNumber, PatientId, PersonName};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "مرد",
            Gender::Female => "زن",
        }
    }
}

/// Patient record as delivered by the data source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: PatientId,
    pub file_number: FileNumber,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub national_id: Option<String>,
    pub phone: String,
    pub gender: Gender,
    pub created_at: NaiveDateTime,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match over the searchable columns.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.file_number.as_str(),
            self.national_id.as_deref().unwrap_or_default(),
            self.phone.as_str(),
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
    }

    /// Builds the display row with the given set of actions.
    pub fn to_row(&self, actions: ActionSet) -> PatientRow {
        PatientRow {
            id: self.id,
            file_number: self.file_number.to_string(),
            full_name: self.full_name(),
            national_id: self.national_id.clone(),
            phone: self.phone.clone(),
            gender: self.gender,
            registered_on: self.created_at.date(),
            actions,
        }
    }
}

/// Display-ready patient summary shown as one row of the results table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PatientRow {
    pub id: PatientId,
    pub file_number: String,
    pub full_name: String,
    pub national_id: Option<String>,
    pub phone: String,
    pub gender: Gender,
    pub registered_on: NaiveDate,
    /// Actions the current user may trigger for this row.
    pub actions: ActionSet,
}
