//! Navigation sidebar of the application shell.
//!
//! The open/closed state is a plain value. On narrow viewports the sidebar
//! overlays the page, and any interaction outside it while it is open closes
//! it again.

use serde::{Deserialize, Serialize};

use crate::breakpoint::Viewport;

/// Sidebar state as carried between requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    pub fn is_closed(&self) -> bool {
        *self == SidebarState::Closed
    }
}

/// Where a pointer interaction landed, relative to the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The menu toggle button in the top bar.
    Toggle,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Patients,
    NewPatient,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Dashboard, NavItem::Patients, NavItem::NewPatient];

    pub const fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "داشبورد",
            NavItem::Patients => "لیست بیماران",
            NavItem::NewPatient => "ثبت بیمار جدید",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard/",
            NavItem::Patients => "/patients",
            NavItem::NewPatient => "/form1/",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            NavItem::Dashboard => "fas fa-home",
            NavItem::Patients => "fas fa-users",
            NavItem::NewPatient => "fas fa-user-plus",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLinkView {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SidebarView {
    pub open: bool,
    /// Where the menu toggle leads: the current page with the state flipped.
    pub toggle_href: String,
    pub links: Vec<NavLinkView>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl From<SidebarState> for Sidebar {
    fn from(state: SidebarState) -> Self {
        Self {
            open: state == SidebarState::Open,
        }
    }
}

impl Sidebar {
    pub fn state(&self) -> SidebarState {
        if self.open {
            SidebarState::Open
        } else {
            SidebarState::Closed
        }
    }

    /// State after `interaction`, leaving `self` untouched.
    pub fn after(mut self, interaction: Interaction, viewport: Viewport) -> Self {
        self.interact(interaction, viewport);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Applies an interaction and reports whether the state changed.
    pub fn interact(&mut self, interaction: Interaction, viewport: Viewport) -> bool {
        match interaction {
            Interaction::Toggle => {
                self.toggle();
                true
            }
            Interaction::Outside if self.open && viewport.is_narrow() => {
                self.open = false;
                true
            }
            Interaction::Outside | Interaction::Inside => false,
        }
    }

    pub fn view(&self, current: NavItem, toggle_href: String) -> SidebarView {
        SidebarView {
            open: self.open,
            toggle_href,
            links: NavItem::ALL
                .into_iter()
                .map(|item| NavLinkView {
                    label: item.label(),
                    href: item.href(),
                    icon: item.icon(),
                    active: item == current,
                })
                .collect(),
        }
    }
}
