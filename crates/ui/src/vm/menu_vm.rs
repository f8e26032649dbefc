use course_core::model::{Mode, Module, ModuleId};

use crate::routes::Route;

/// One resource entry in the course menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuLinkVm {
    pub title: String,
    pub target: Route,
    pub href: String,
    pub active: bool,
    pub completed: bool,
}

impl MenuLinkVm {
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        if self.active { "menu-link active" } else { "menu-link" }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuModuleVm {
    pub id: ModuleId,
    pub title: String,
    pub links: Vec<MenuLinkVm>,
}

/// UI-ready course menu for the current mode and path.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuVm {
    pub is_view: bool,
    pub mode_label: &'static str,
    pub modules: Vec<MenuModuleVm>,
}

#[must_use]
pub fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::View => "Modo Vista",
        Mode::Edit => "Modo Edición",
    }
}

/// Build the menu. Every link targets its resource under `mode`; a link is
/// active only when `current_path` is that link's route.
#[must_use]
pub fn build_menu(modules: &[Module], mode: Mode, current_path: &str) -> MenuVm {
    let current = normalize_path(current_path);
    let modules = modules
        .iter()
        .map(|module| MenuModuleVm {
            id: module.id(),
            title: module.title().to_owned(),
            links: module
                .resources()
                .iter()
                .map(|resource| {
                    let target = Route::for_resource(mode, module.id(), resource.id().clone());
                    let href = target.to_string();
                    MenuLinkVm {
                        title: resource.title().to_owned(),
                        active: current == href,
                        completed: resource.completed(),
                        target,
                        href,
                    }
                })
                .collect(),
        })
        .collect();

    MenuVm {
        is_view: mode.is_view(),
        mode_label: mode_label(mode),
        modules,
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
