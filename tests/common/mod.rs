#![allow(dead_code)]

use chrono::NaiveDate;
use sleep_clinic::domain::action::ActionSet;
use sleep_clinic::domain::patient::{Gender, PatientRow};
use sleep_clinic::domain::types::{PageSize, PatientId};
use sleep_clinic::repository::FetchedPage;

pub fn size(n: usize) -> PageSize {
    PageSize::new(n).expect("valid page size")
}

pub fn id(n: i32) -> PatientId {
    PatientId::new(n).expect("valid id")
}

pub fn row(n: i32) -> PatientRow {
    PatientRow {
        id: id(n),
        file_number: format!("P-{n}"),
        full_name: format!("Patient {n}"),
        national_id: Some(format!("{n:010}")),
        phone: "09120000000".to_string(),
        gender: Gender::Female,
        registered_on: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
        actions: ActionSet::all(),
    }
}

pub fn page_of(ids: &[i32], total: usize) -> FetchedPage {
    FetchedPage::new(ids.iter().copied().map(row).collect(), total)
}

pub fn ids(rows: &[PatientRow]) -> Vec<i32> {
    rows.iter().map(|row| row.id.get()).collect()
}

/// JSON store with `count` patients; newer ids were registered later.
pub fn patients_json(count: i32) -> String {
    let patients = (1..=count)
        .map(|n| {
            serde_json::json!({
                "id": n,
                "file_number": format!("P-{n}"),
                "first_name": if n % 2 == 0 { "Sara" } else { "Reza" },
                "last_name": if n % 3 == 0 { "Smith" } else { "Karimi" },
                "national_id": format!("{n:010}"),
                "phone": format!("0912{n:07}"),
                "gender": if n % 2 == 0 { "F" } else { "M" },
                "created_at": format!("2024-01-01T{:02}:{:02}:00", n / 60, n % 60),
            })
        })
        .collect::<Vec<_>>();
    serde_json::Value::Array(patients).to_string()
}
