use std::time::Duration;

use course_core::model::{Mode, ModuleId, ResourceId, ResumeState};
use course_core::time::fixed_now;
use services::{LAST_VIEWED_KEY, ResumePhase};
use storage::repository::Storage;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

const IDLE_TEXT: &str = "Selecciona un tema del menú izquierdo.";
const VIDEO_STATE: &str = r#"{"moduleId":1,"resourceId":"video-gerencia"}"#;

async fn seed_last_viewed(storage: &Storage, json: &str) {
    storage
        .kv
        .put_entry(LAST_VIEWED_KEY, json, fixed_now())
        .await
        .expect("seed last viewed");
}

fn resource(id: &str) -> ResourceId {
    ResourceId::new(id)
}

#[tokio::test(flavor = "current_thread")]
async fn shell_without_history_renders_idle_layout() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains(IDLE_TEXT), "missing idle text in {html}");
    assert!(html.contains("📚 Curso"), "missing menu in {html}");
    assert!(html.contains("Modo Vista"), "missing mode label in {html}");
    assert!(html.contains("🤖 Asistente Virtual"), "missing assistant in {html}");
    assert!(!html.contains("Cargando"), "unexpected loading screen in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_idle_renders_the_same_on_second_launch() {
    let storage = Storage::in_memory();
    let mut first =
        setup_view_harness_with_storage(ViewKind::Shell, storage.clone(), Duration::ZERO);
    first.rebuild();
    first.settle().await;
    let first_html = first.render();

    let mut second = setup_view_harness_with_storage(ViewKind::Shell, storage, Duration::ZERO);
    second.rebuild();
    second.settle().await;
    let second_html = second.render();

    assert_eq!(first_html, second_html);
    assert!(!second_html.contains("Cargando"), "unexpected loading screen in {second_html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_resumes_last_viewed_resource() {
    let storage = Storage::in_memory();
    seed_last_viewed(&storage, VIDEO_STATE).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, storage, Duration::ZERO);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Cargando tu última sesión"), "missing loading screen in {html}");
    assert!(!html.contains("📚 Curso"), "menu rendered while resuming: {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("¿Qué es gerencia?"), "missing resumed title in {html}");
    assert!(html.contains("Fecha límite: 24/6/2025, 12:00:00"), "missing deadline in {html}");
    assert!(html.contains("menu-link active"), "missing active link in {html}");
    assert!(!html.contains("Cargando"), "loading screen still up: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn loading_screen_holds_until_resume_delay_elapses() {
    let storage = Storage::in_memory();
    seed_last_viewed(&storage, VIDEO_STATE).await;
    let delay = Duration::from_millis(1000);
    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, storage, delay);

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Cargando tu última sesión"),
        "loading screen dropped early: {html}"
    );
    assert!(!html.contains("¿Qué es gerencia?"), "navigated before the delay: {html}");
    assert_eq!(harness.services.resume_controller().phase(), ResumePhase::Resuming);

    tokio::time::advance(delay).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("¿Qué es gerencia?"), "missing resumed title in {html}");
    assert!(!html.contains("Cargando"), "loading screen still up: {html}");
    assert_eq!(harness.services.resume_controller().phase(), ResumePhase::Ready);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn dropping_the_shell_before_the_delay_cancels_the_redirect() {
    let storage = Storage::in_memory();
    seed_last_viewed(&storage, VIDEO_STATE).await;
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Shell, storage, Duration::from_millis(1000));

    harness.rebuild();
    harness.settle().await;
    let controller = harness.services.resume_controller();
    let storage = harness.storage.clone();
    let seeded = storage.kv.get_entry(LAST_VIEWED_KEY).await.expect("read seeded");
    assert_eq!(controller.phase(), ResumePhase::Resuming);

    drop(harness);
    tokio::time::advance(Duration::from_millis(5000)).await;
    tokio::task::yield_now().await;

    assert_eq!(controller.phase(), ResumePhase::Resuming);
    let stored = storage.kv.get_entry(LAST_VIEWED_KEY).await.expect("read after drop");
    assert_eq!(stored, seeded);
    assert_eq!(stored.map(|entry| entry.value).as_deref(), Some(VIDEO_STATE));
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_mode_rewrites_menu_without_navigating() {
    let storage = Storage::in_memory();
    seed_last_viewed(&storage, VIDEO_STATE).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, storage, Duration::ZERO);
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains(r#"href="/modulo/1/vista/video-gerencia""#));

    harness.toggle_mode();
    let html = harness.render();
    assert!(html.contains("Modo Edición"), "missing edit label in {html}");
    assert!(html.contains("/modulo/1/editar/video-gerencia"), "missing edit href in {html}");
    assert!(!html.contains("/vista/"), "view hrefs left after toggle: {html}");
    assert!(html.contains("¿Qué es gerencia?"), "routed pane changed: {html}");
    assert!(!html.contains("Editor de recurso"), "navigated to the editor: {html}");
    assert!(
        !html.contains("menu-link active"),
        "active link under the other mode: {html}"
    );

    harness.toggle_mode();
    let html = harness.render();
    assert!(html.contains("Modo Vista"), "missing view label in {html}");
    assert!(html.contains("menu-link active"), "missing active link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_with_stale_state_lands_on_not_found() {
    let storage = Storage::in_memory();
    seed_last_viewed(&storage, r#"{"moduleId":9,"resourceId":"gone"}"#).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, storage, Duration::ZERO);

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Recurso no encontrado"), "missing not found in {html}");
    assert!(html.contains("📚 Curso"), "missing menu in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_with_malformed_state_starts_idle() {
    let storage = Storage::in_memory();
    seed_last_viewed(&storage, "{not json").await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, storage, Duration::ZERO);

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains(IDLE_TEXT), "missing idle text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn idle_view_lists_module_overview() {
    let mut harness = setup_view_harness(ViewKind::Idle);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Unidad 1: Introducción a la Gerencia y Ventaja Competitiva"),
        "missing module in {html}"
    );
    assert!(html.contains("Definir gerencia y administración"), "missing objective in {html}");
    assert!(html.contains("Progreso: 40% | Puntaje: 8"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn resource_view_shows_deadline_only_when_timer_active() {
    let reading = ViewKind::Resource(ModuleId::new(1), resource("lectura-funciones"));
    let mut timed = setup_view_harness(reading);
    timed.rebuild();
    let html = timed.render();
    assert!(html.contains("Tipo: reading | Duración: 8 minutos"), "missing meta in {html}");
    assert!(html.contains("Fecha límite: 24/6/2025, 15:00:00"), "missing deadline in {html}");
    assert!(html.contains("🧾 Aquí se presentaría"), "missing body in {html}");

    let essay = ViewKind::Resource(ModuleId::new(1), resource("reflexion"));
    let mut untimed = setup_view_harness(essay);
    untimed.rebuild();
    let html = untimed.render();
    assert!(html.contains("Tipo: task | Duración: N/A"), "missing meta in {html}");
    assert!(html.contains("Nivel Bloom: Evaluar"), "missing bloom in {html}");
    assert!(!html.contains("Fecha límite"), "unexpected deadline in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_resource_renders_not_found_and_records_nothing() {
    let view = ViewKind::Resource(ModuleId::new(1), resource("nope"));
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Recurso no encontrado"), "missing not found in {html}");
    let stored = harness.services.resume().load().await.expect("load");
    assert_eq!(stored, None);
}

#[tokio::test(flavor = "current_thread")]
async fn resource_view_records_last_viewed() {
    let view = ViewKind::Resource(ModuleId::new(1), resource("reflexion"));
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.settle().await;

    let stored = harness.services.resume().load().await.expect("load");
    assert_eq!(stored, Some(ResumeState::new(ModuleId::new(1), "reflexion")));
}

#[tokio::test(flavor = "current_thread")]
async fn editor_view_renders_placeholder_and_records() {
    let view = ViewKind::Editor(ModuleId::new(1), resource("caso-practico"));
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("🛠 Editor de recurso en desarrollo"),
        "missing placeholder in {html}"
    );
    let stored = harness.services.resume().load().await.expect("load");
    assert_eq!(stored, Some(ResumeState::new(ModuleId::new(1), "caso-practico")));
}

#[tokio::test(flavor = "current_thread")]
async fn editor_view_for_unknown_resource_keeps_placeholder_and_records_nothing() {
    let view = ViewKind::Editor(ModuleId::new(1), resource("gone"));
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("🛠 Editor de recurso en desarrollo"),
        "missing placeholder in {html}"
    );
    assert!(!html.contains("Recurso no encontrado"), "unexpected not found in {html}");
    let stored = harness.services.resume().load().await.expect("load");
    assert_eq!(stored, None);
}

#[tokio::test(flavor = "current_thread")]
async fn menu_in_edit_mode_links_to_editor_routes() {
    let mut harness = setup_view_harness(ViewKind::Menu(
        Mode::Edit,
        "/modulo/1/editar/quiz-diagnostico".to_string(),
    ));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Modo Edición"), "missing mode label in {html}");
    assert!(html.contains("/modulo/1/editar/video-gerencia"), "missing edit href in {html}");
    assert!(!html.contains("/vista/"), "unexpected view href in {html}");
    assert_eq!(
        html.matches("menu-link active").count(),
        1,
        "expected one active link in {html}"
    );
}
