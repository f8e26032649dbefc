use course_core::model::{Module, ModuleId};

/// Read-only module summary shown on the idle page.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleOverviewVm {
    pub id: ModuleId,
    pub title: String,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub objectives: Vec<String>,
    pub progress: u8,
    pub score: String,
}

#[must_use]
pub fn map_module_overviews(modules: &[Module]) -> Vec<ModuleOverviewVm> {
    modules
        .iter()
        .map(|module| ModuleOverviewVm {
            id: module.id(),
            title: module.title().to_owned(),
            duration: module.duration().map(str::to_owned),
            description: module.description().map(str::to_owned),
            objectives: module.objectives().to_vec(),
            progress: module.progress(),
            score: format_score(module.score()),
        })
        .collect()
}

fn format_score(score: f32) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}
