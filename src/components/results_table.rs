use serde::Serialize;

use crate::breakpoint::Viewport;
use crate::components::action_buttons::{ActionButtonGroup, ActionButtonGroupView};
use crate::components::date_stamp::JalaliDate;
use crate::domain::patient::PatientRow;
use crate::domain::types::PatientId;
use crate::view::patient_list::ActionNotice;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
    /// Narrowest width at which the column content stays readable.
    pub min_width_px: u32,
}

pub const COLUMNS: &[Column] = &[
    Column { key: "file_number", title: "شناسه بیمار", min_width_px: 90 },
    Column { key: "full_name", title: "نام و نام خانوادگی", min_width_px: 160 },
    Column { key: "national_id", title: "کد ملی", min_width_px: 110 },
    Column { key: "phone", title: "تلفن همراه", min_width_px: 120 },
    Column { key: "gender", title: "جنسیت", min_width_px: 70 },
    Column { key: "registered_on", title: "تاریخ ایجاد", min_width_px: 100 },
    Column { key: "actions", title: "عملیات", min_width_px: 130 },
];

/// How the table behaves when it does not fit the viewport.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    Fit,
    /// Columns keep their width and the table scrolls sideways.
    ScrollX,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowView {
    pub id: PatientId,
    pub cells: Vec<String>,
    pub actions: ActionButtonGroupView,
    /// Message of a failed action on this row.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResultsTableView {
    pub columns: Vec<Column>,
    pub rows: Vec<RowView>,
    pub empty: bool,
    pub overflow: Overflow,
}

/// Table of the patients on the current page.
pub struct ResultsTable<'a> {
    rows: &'a [PatientRow],
    notices: &'a [ActionNotice],
}

impl<'a> ResultsTable<'a> {
    pub fn new(rows: &'a [PatientRow]) -> Self {
        Self { rows, notices: &[] }
    }

    pub fn with_notices(mut self, notices: &'a [ActionNotice]) -> Self {
        self.notices = notices;
        self
    }

    /// Sum of the column minimum widths.
    pub fn min_width_px() -> u32 {
        COLUMNS.iter().map(|c| c.min_width_px).sum()
    }

    pub fn overflow(viewport: Viewport) -> Overflow {
        if viewport.is_narrow() || viewport.width < Self::min_width_px() {
            Overflow::ScrollX
        } else {
            Overflow::Fit
        }
    }

    /// Action buttons bound to `row`.
    pub fn action_group(row: &PatientRow) -> ActionButtonGroup<'_> {
        ActionButtonGroup::new(row.id, &row.actions)
    }

    pub fn view(&self, viewport: Viewport) -> ResultsTableView {
        let rows = self
            .rows
            .iter()
            .map(|row| RowView {
                id: row.id,
                cells: cells(row),
                actions: Self::action_group(row).view(viewport),
                notice: self
                    .notices
                    .iter()
                    .rev()
                    .find(|notice| notice.target == row.id)
                    .map(|notice| notice.message.clone()),
            })
            .collect::<Vec<_>>();

        ResultsTableView {
            columns: COLUMNS.to_vec(),
            empty: rows.is_empty(),
            rows,
            overflow: Self::overflow(viewport),
        }
    }
}

/// Cell texts for every column except the trailing actions column.
fn cells(row: &PatientRow) -> Vec<String> {
    vec![
        row.file_number.clone(),
        row.full_name.clone(),
        row.national_id.clone().unwrap_or_else(|| "-".to_string()),
        row.phone.clone(),
        row.gender.label().to_string(),
        JalaliDate::from(row.registered_on).to_persian_string(),
    ]
}
