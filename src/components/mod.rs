//! Stateless widgets of the patient list and the application shell.
//!
//! Each widget turns its inputs into a serializable view value that the
//! matching Tera template renders, and turns clicks into [`crate::view::ListEvent`]s.

use chrono::NaiveDate;
use serde::Serialize;
use tera::{Context, Tera};

use crate::components::date_stamp::DateStamp;
use crate::components::sidebar::SidebarView;

pub mod action_buttons;
pub mod date_stamp;
pub mod pagination_control;
pub mod results_table;
pub mod search_bar;
pub mod sidebar;
pub mod styles;

macro_rules! embedded_template {
    ($name:literal) => {
        ($name, include_str!(concat!("../../templates/", $name)))
    };
}

/// Builds the template registry with every page, widget and stylesheet.
pub fn templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        embedded_template!("base.html"),
        embedded_template!("components/sidebar.html"),
        embedded_template!("components/search_bar.html"),
        embedded_template!("components/results_table.html"),
        embedded_template!("components/action_buttons.html"),
        embedded_template!("components/pagination.html"),
        embedded_template!("patients/index.html"),
        embedded_template!("css/base.css"),
        embedded_template!("css/buttons.css"),
        embedded_template!("css/patient_list.css"),
        embedded_template!("css/login.css"),
        embedded_template!("css/device_form.css"),
    ])?;
    Ok(tera)
}

/// Flash message shown above the page content.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AlertView {
    pub message: String,
    /// Bootstrap-style level: `danger`, `warning`, `success` or `info`.
    pub level: &'static str,
}

/// Context shared by every page rendered inside the shell.
pub fn shell_context(sidebar: &SidebarView, today: NaiveDate, alerts: &[AlertView]) -> Context {
    let mut context = Context::new();
    context.insert("sidebar", sidebar);
    context.insert("date_stamp", &DateStamp::mount(today));
    context.insert("alerts", alerts);
    context
}
