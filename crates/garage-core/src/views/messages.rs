//! User-facing strings shown by the views.

pub const LOAD_FAILED: &str = "Błąd pobierania";
pub const DELETED: &str = "Usunięto";
pub const DELETE_FAILED: &str = "Błąd usuwania";
pub const SAVED: &str = "Zapisano";
pub const SAVE_FAILED: &str = "Błąd";

pub const YES: &str = "Tak";
pub const NO: &str = "Nie";

pub const CREATE_TITLE: &str = "Dodawanie";
pub const EDIT_TITLE: &str = "Edycja";

pub const CONFIRM_DELETE: &str = "Czy na pewno chcesz usunąć ten rekord?";

/// Prefix of the inline form error.
pub const API_ERROR_PREFIX: &str = "Błąd API";
