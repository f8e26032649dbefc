//! Compiled-in course content used when no external catalog is configured.

use crate::model::course::Course;
use crate::model::ids::ModuleId;
use crate::model::module::ModuleDraft;
use crate::model::resource::{ResourceDraft, ResourceKind};

impl Course {
    /// The built-in management course.
    ///
    /// # Panics
    ///
    /// Panics if the built-in drafts fail validation.
    #[must_use]
    pub fn default_fixture() -> Self {
        Self::from_drafts(default_module_drafts()).expect("built-in course should be valid")
    }
}

fn timed(
    id: &str,
    kind: ResourceKind,
    title: &str,
    duration: &str,
    deadline: &str,
) -> ResourceDraft {
    ResourceDraft {
        duration: Some(duration.to_owned()),
        deadline: Some(deadline.to_owned()),
        timer_active: true,
        ..ResourceDraft::new(id, kind, title)
    }
}

fn activity(
    id: &str,
    kind: ResourceKind,
    title: &str,
    bloom: Option<&str>,
    completed: bool,
) -> ResourceDraft {
    ResourceDraft {
        bloom: bloom.map(str::to_owned),
        completed,
        ..ResourceDraft::new(id, kind, title)
    }
}

#[must_use]
pub(crate) fn default_module_drafts() -> Vec<ModuleDraft> {
    vec![ModuleDraft {
        duration: Some("1.5 horas".to_owned()),
        description: Some(
            "Explora qué es la gerencia, sus funciones clave y cómo las organizaciones \
             logran una ventaja competitiva."
                .to_owned(),
        ),
        objectives: vec![
            "Definir gerencia y administración".to_owned(),
            "Describir las funciones del proceso gerencial".to_owned(),
            "Explicar qué es la ventaja competitiva".to_owned(),
        ],
        resources: vec![
            timed(
                "video-gerencia",
                ResourceKind::Video,
                "¿Qué es gerencia?",
                "5 minutos",
                "2025-06-24T12:00",
            ),
            timed(
                "lectura-funciones",
                ResourceKind::Reading,
                "Funciones del proceso gerencial",
                "8 minutos",
                "2025-06-24T15:00",
            ),
            activity(
                "quiz-diagnostico",
                ResourceKind::Task,
                "Cuestionario diagnóstico",
                Some("Recordar"),
                true,
            ),
            activity(
                "reflexion",
                ResourceKind::Task,
                "Reflexión escrita",
                Some("Evaluar"),
                false,
            ),
            activity(
                "caso-practico",
                ResourceKind::Application,
                "Caso práctico",
                None,
                false,
            ),
            activity(
                "discusion",
                ResourceKind::Discussion,
                "Discusión: Ejemplo de ventaja competitiva",
                None,
                false,
            ),
        ],
        progress: 40,
        score: 8.0,
        ..ModuleDraft::new(
            ModuleId::new(1),
            "Unidad 1: Introducción a la Gerencia y Ventaja Competitiva",
        )
    }]
}
