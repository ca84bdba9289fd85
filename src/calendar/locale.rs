//! Spanish Labels
//!
//! Month names are fixed, not taken from the browser locale.

use chrono::{Datelike, NaiveDate};

pub const HEADING: &str = "Calendario de Tareas";

pub const MONTH_NAMES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Monday first
pub const WEEKDAY_SHORT: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

pub const BUTTON_TODAY: &str = "Hoy";
pub const BUTTON_PREV: &str = "‹";
pub const BUTTON_NEXT: &str = "›";
pub const ALL_DAY_LABEL: &str = "todo el día";

pub const PROMPT_NEW_TASK: &str = "Agrega una tarea";
pub const PROMPT_ACCEPT: &str = "Aceptar";
pub const PROMPT_CANCEL: &str = "Cancelar";
pub const CONFIRM_DELETE: &str = "¿Estás seguro que deseas eliminar esta tarea?";
pub const DELETE_ALT: &str = "Eliminar";
pub const MARK_DONE: &str = "Marcar como completada";
pub const MARK_PENDING: &str = "Marcar como pendiente";

pub const ALERT_RESCHEDULE_FAILED: &str = "No se pudo actualizar la fecha del evento.";
pub const ALERT_CREATE_FAILED: &str = "No se pudo crear la tarea.";
pub const ALERT_TOGGLE_FAILED: &str = "No se pudo actualizar el estado de la tarea.";
pub const ALERT_DELETE_FAILED: &str = "No se pudo eliminar la tarea.";

/// Structured value handed to the title formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleDate {
    /// 0-based month
    pub month: u32,
    pub year: i32,
}

impl From<NaiveDate> for TitleDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
        }
    }
}

/// "Enero 2024" for month index 0
pub fn format_title(date: TitleDate) -> String {
    let name = MONTH_NAMES.get(date.month as usize).copied().unwrap_or("");
    format!("{} {}", name, date.year)
}
