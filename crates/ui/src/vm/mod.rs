mod menu_vm;
mod overview_vm;
mod resource_vm;
mod time_fmt;

pub use menu_vm::{MenuLinkVm, MenuModuleVm, MenuVm, build_menu, mode_label};
pub use overview_vm::{ModuleOverviewVm, map_module_overviews};
pub use resource_vm::{ResourceDetailVm, map_resource_detail};
pub use time_fmt::format_deadline;
