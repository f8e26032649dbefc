use std::sync::Arc;
use std::time::Duration;

use course_core::model::{Mode, ModuleId, ResourceId};
use course_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CourseCatalog, ResumeController, ResumeService};
use storage::repository::Storage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::routes::{Route, ShellTestHandles};
use crate::views::{CourseMenu, EditorView, IdleView, ResourceView};
use crate::vm::build_menu;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> CourseCatalog {
        self.services.catalog()
    }

    fn resume(&self) -> Arc<ResumeService> {
        self.services.resume()
    }

    fn resume_controller(&self) -> Arc<ResumeController> {
        self.services.resume_controller()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    /// The real router and course shell, starting at `/`.
    Shell,
    Idle,
    Resource(ModuleId, ResourceId),
    Editor(ModuleId, ResourceId),
    Menu(Mode, String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    shell_handles: ShellTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = use_context_provider(|| props.view.clone());
    use_context_provider(|| props.shell_handles.clone());
    if view == ViewKind::Shell {
        return rsx! { Router::<Route> {} };
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let ctx = use_context::<AppContext>();
    match view {
        ViewKind::Shell | ViewKind::Idle => rsx! { IdleView {} },
        ViewKind::Resource(module_id, resource_id) => {
            rsx! { ResourceView { module_id, resource_id } }
        }
        ViewKind::Editor(module_id, resource_id) => {
            rsx! { EditorView { module_id, resource_id } }
        }
        ViewKind::Menu(mode, path) => {
            let menu = build_menu(ctx.catalog().modules(), mode, &path);
            rsx! { CourseMenu { menu, on_toggle: move |()| {} } }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
    shell_handles: ShellTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    /// Flip the shell's view/edit toggle the way the menu checkbox does.
    pub fn toggle_mode(&mut self) {
        let toggle = self.shell_handles.toggle_mode();
        self.dom.in_runtime(|| toggle.call(()));
        self.drive();
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks a few times so spawned work and navigation settle.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory(), Duration::ZERO)
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: Storage,
    resume_delay: Duration,
) -> ViewHarness {
    let services =
        AppServices::new(&storage, CourseCatalog::builtin(), fixed_clock(), resume_delay);
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let shell_handles = ShellTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            shell_handles: shell_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
        shell_handles,
    }
}
