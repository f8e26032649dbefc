mod assistant;
mod editor;
mod idle;
mod loading;
mod menu;
mod not_found;
mod resource;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantPanel;
pub use editor::EditorView;
pub use idle::IdleView;
pub use loading::LoadingScreen;
pub use menu::CourseMenu;
pub use not_found::{NotFoundNotice, NotFoundView};
pub use resource::{ResourceView, use_record_last_viewed};
