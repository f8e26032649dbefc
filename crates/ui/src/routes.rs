use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};

use course_core::model::{Mode, ModuleId, ResourceId};
use services::ResumePlan;

use crate::context::AppContext;
use crate::views::{
    AssistantPanel, CourseMenu, EditorView, IdleView, LoadingScreen, NotFoundView, ResourceView,
};
use crate::vm::build_menu;

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(CourseShell)]
        #[route("/", IdleView)] Idle {},
        #[route("/modulo/:module_id/vista/:resource_id", ResourceView)]
        ResourceDetail { module_id: ModuleId, resource_id: ResourceId },
        #[route("/modulo/:module_id/editar/:resource_id", EditorView)]
        ResourceEditor { module_id: ModuleId, resource_id: ResourceId },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// The route a menu link or resume redirect targets under `mode`.
    #[must_use]
    pub fn for_resource(mode: Mode, module_id: ModuleId, resource_id: ResourceId) -> Self {
        match mode {
            Mode::View => Self::ResourceDetail {
                module_id,
                resource_id,
            },
            Mode::Edit => Self::ResourceEditor {
                module_id,
                resource_id,
            },
        }
    }
}

/// Always-visible layout: course menu, routed pane and assistant panel.
///
/// Until the startup resume sequence settles only the loading screen renders.
#[component]
fn CourseShell() -> Element {
    let ctx = use_context::<AppContext>();
    let mut mode = use_signal(Mode::default);
    let resuming = use_resume_redirect(mode);
    let route = use_route::<Route>();
    let toggle_mode = use_callback(move |()| {
        let next = mode.peek().toggled();
        mode.set(next);
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ShellTestHandles>() {
            handles.register(toggle_mode);
        }
    });

    if resuming() {
        return rsx! { LoadingScreen {} };
    }

    let current_path = route.to_string();
    let menu = build_menu(ctx.catalog().modules(), mode(), &current_path);

    rsx! {
        div { class: "app",
            CourseMenu { menu, on_toggle: toggle_mode }
            main { class: "content",
                Outlet::<Route> {}
            }
            AssistantPanel {}
        }
    }
}

/// Run the one-shot resume sequence for this shell.
///
/// The redirect task belongs to the calling scope, so unmounting the shell
/// before the delay elapses drops it and no navigation happens. The mode is
/// read when the delay elapses, not when the state was loaded.
fn use_resume_redirect(mode: Signal<Mode>) -> Signal<bool> {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut resuming = use_signal(|| true);

    use_hook(move || {
        let controller = ctx.resume_controller();
        spawn(async move {
            if let ResumePlan::Redirect { state, delay } = controller.begin().await {
                tokio::time::sleep(delay).await;
                let target = Route::for_resource(*mode.peek(), state.module_id, state.resource_id);
                tracing::info!(%target, "restoring last viewed resource");
                navigator.push(target);
                controller.finish();
            }
            resuming.set(false);
        })
    });

    resuming
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    toggle_mode: std::rc::Rc<std::cell::RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    fn register(&self, toggle_mode: Callback<()>) {
        *self.toggle_mode.borrow_mut() = Some(toggle_mode);
    }

    pub(crate) fn toggle_mode(&self) -> Callback<()> {
        (*self.toggle_mode.borrow()).expect("shell toggle registered")
    }
}
