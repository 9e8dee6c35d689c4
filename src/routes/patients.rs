use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Local;
use serde::Serialize;
use tera::Tera;

use crate::breakpoint::Viewport;
use crate::components::shell_context;
use crate::components::sidebar::{Interaction, NavItem, Sidebar, SidebarState};
use crate::domain::action::ActionKind;
use crate::domain::types::{PageSize, PatientId};
use crate::dto::patient_list::{ListLinks, PatientListQuery, RowActionCommand};
use crate::forms::patient_list::RowActionForm;
use crate::repository::memory::InMemoryPatientRepository;
use crate::routes::{alerts, redirect, render_template};
use crate::services::{ServiceError, patient_list as patient_list_service};

pub const PATIENT_LIST_PATH: &str = "/patients";

/// List state carried in the query string, apart from the page number.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListLocation<'a> {
    pub search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "SidebarState::is_closed")]
    pub sidebar: SidebarState,
}

impl ListLocation<'_> {
    /// Everything up to the page number, e.g. `/patients?search=ali&page=`.
    pub fn page_prefix(&self) -> String {
        match serde_html_form::to_string(self) {
            Ok(params) => format!("{PATIENT_LIST_PATH}?{params}&page="),
            Err(err) => {
                log::error!("Failed to encode list location: {err}");
                format!("{PATIENT_LIST_PATH}?page=")
            }
        }
    }

    pub fn url(&self, page: usize) -> String {
        format!("{}{page}", self.page_prefix())
    }
}

fn success_message(kind: ActionKind, target: PatientId) -> String {
    match kind {
        ActionKind::View => format!("پرونده بیمار {target} باز شد."),
        ActionKind::Edit => format!("بیمار {target} ویرایش شد."),
        ActionKind::Delete => format!("بیمار {target} حذف شد."),
    }
}

#[get("/")]
pub async fn index() -> impl Responder {
    redirect(PATIENT_LIST_PATH)
}

#[get("/patients")]
pub async fn show_patients(
    params: web::Query<PatientListQuery>,
    repo: web::Data<InMemoryPatientRepository>,
    page_size: web::Data<PageSize>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let width = params.width;
    let viewport = width.map(Viewport::new).unwrap_or_default();
    let sidebar = Sidebar::from(params.sidebar.unwrap_or_default());

    let list = patient_list_service::load_patient_list(repo.get_ref(), *page_size.get_ref(), params);
    let page = list.page.page;

    let here = ListLocation {
        search: &list.search_bar.query,
        width,
        sidebar: sidebar.state(),
    };
    // Any link other than the menu toggle is a click outside the sidebar.
    let onward = ListLocation {
        sidebar: sidebar.after(Interaction::Outside, viewport).state(),
        ..here
    };
    let toggled = ListLocation {
        sidebar: sidebar.after(Interaction::Toggle, viewport).state(),
        ..here
    };
    let links = ListLinks {
        page_prefix: onward.page_prefix(),
        retry: onward.url(page),
        dismiss_error: format!("{}&dismiss_error=true", onward.url(page)),
        width,
        sidebar: onward.sidebar,
    };

    let mut context = shell_context(
        &sidebar.view(NavItem::Patients, toggled.url(page)),
        Local::now().date_naive(),
        &alerts(&flash_messages),
    );
    context.insert("list", &list);
    context.insert("links", &links);

    render_template(&tera, "patients/index.html", &context)
}

#[post("/patients/action")]
pub async fn patient_action(
    repo: web::Data<InMemoryPatientRepository>,
    page_size: web::Data<PageSize>,
    web::Form(form): web::Form<RowActionForm>,
) -> impl Responder {
    let (width, sidebar) = (form.width, form.sidebar);
    let command = match RowActionCommand::try_from(form).map_err(ServiceError::from) {
        Ok(command) => command,
        Err(err) => {
            log::error!("Rejected row action: {err}");
            FlashMessage::error("درخواست نامعتبر است.").send();
            return redirect(PATIENT_LIST_PATH);
        }
    };

    let (kind, target) = (command.kind, command.target);
    let back = ListLocation {
        search: command.query.as_str(),
        width,
        sidebar,
    }
    .url(command.page);

    match patient_list_service::perform_row_action(repo.get_ref(), *page_size.get_ref(), command)
    {
        Ok(outcome) => {
            match outcome.notice {
                Some(notice) => FlashMessage::error(notice.message).send(),
                None => FlashMessage::success(success_message(kind, target)).send(),
            }
            let next = ListLocation {
                search: outcome.query.as_str(),
                width,
                sidebar,
            };
            redirect(&next.url(outcome.page))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning("این بیمار در صفحه فعلی نیست.").send();
            redirect(&back)
        }
        Err(err) => {
            log::error!("Failed to {kind} patient {target}: {err}");
            FlashMessage::error(format!("خطا در انجام عملیات: {err}")).send();
            redirect(&back)
        }
    }
}
