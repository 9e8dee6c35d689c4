//! Stylesheets generated from templates so that every media query uses the
//! shared breakpoint.

use tera::{Context, Tera};

use crate::breakpoint::NARROW_MAX_WIDTH_PX;

/// The login card switches to its compact padding below this width.
pub const LOGIN_COMPACT_MAX_WIDTH_PX: u32 = 480;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stylesheet {
    Base,
    Buttons,
    PatientList,
    Login,
    DeviceForm,
}

impl Stylesheet {
    pub const ALL: [Stylesheet; 5] = [
        Stylesheet::Base,
        Stylesheet::Buttons,
        Stylesheet::PatientList,
        Stylesheet::Login,
        Stylesheet::DeviceForm,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Stylesheet::Base => "base.css",
            Stylesheet::Buttons => "buttons.css",
            Stylesheet::PatientList => "patient_list.css",
            Stylesheet::Login => "login.css",
            Stylesheet::DeviceForm => "device_form.css",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sheet| sheet.file_name() == name)
    }

    fn template_name(self) -> String {
        format!("css/{}", self.file_name())
    }

    pub fn render(self, tera: &Tera) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("narrow_max_width", &NARROW_MAX_WIDTH_PX);
        context.insert("login_compact_max_width", &LOGIN_COMPACT_MAX_WIDTH_PX);
        tera.render(&self.template_name(), &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::templates;

    #[test]
    fn resolves_file_names() {
        for sheet in Stylesheet::ALL {
            assert_eq!(Stylesheet::from_file_name(sheet.file_name()), Some(sheet));
        }
        assert_eq!(Stylesheet::from_file_name("missing.css"), None);
    }

    #[test]
    fn responsive_sheets_use_shared_breakpoint() {
        let tera = templates().expect("templates parse");
        let media_query = format!("@media (max-width: {NARROW_MAX_WIDTH_PX}px)");

        for sheet in [
            Stylesheet::Base,
            Stylesheet::PatientList,
            Stylesheet::DeviceForm,
        ] {
            let css = sheet.render(&tera).expect("stylesheet renders");
            assert!(
                css.contains(&media_query),
                "{} is missing the shared media query",
                sheet.file_name()
            );
        }
    }

    #[test]
    fn buttons_mark_delete_as_danger() {
        let tera = templates().expect("templates parse");

        let css = Stylesheet::Buttons.render(&tera).expect("stylesheet renders");

        assert!(css.contains(".btn-danger"));
    }
}
