use garage_protocol::{CarFields, CarId, CarRecord};
use tracing::{info, warn};

use super::list::LoadPhase;
use super::messages;
use super::route::Route;
use crate::errors::GarageError;
use crate::shell::Shell;
use crate::state::{Command, DispatchError, Event, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CarId),
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Create => messages::CREATE_TITLE,
            FormMode::Edit(_) => messages::EDIT_TITLE,
        }
    }

    pub fn route(self) -> Route {
        match self {
            FormMode::Create => Route::Add,
            FormMode::Edit(id) => Route::Edit(id),
        }
    }
}

/// A single-field change to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Model(String),
    Year(i32),
    Operational(bool),
}

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid year '{input}': expected a whole number")]
    InvalidYear { input: String },
}

impl GarageError for FieldError {
    fn error_code(&self) -> &'static str {
        match self {
            FieldError::InvalidYear { .. } => "INVALID_YEAR",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the record; the caller should move to `navigate_to`.
    Saved {
        navigate_to: Route,
        record: Option<CarRecord>,
    },
    /// The backend rejected the record; the form keeps the entered values.
    Failed,
}

/// Create/edit form for a single record.
#[derive(Debug)]
pub struct FormView {
    shell: Shell,
    mode: FormMode,
    fields: CarFields,
    error: Option<String>,
    phase: LoadPhase,
}

impl FormView {
    pub fn new(shell: Shell, mode: FormMode) -> Self {
        Self {
            shell,
            mode,
            fields: CarFields::default(),
            error: None,
            phase: LoadPhase::Idle,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn fields(&self) -> &CarFields {
        &self.fields
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Raw detail of the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Inline error as rendered under the form.
    pub fn error_text(&self) -> Option<String> {
        self.error
            .as_deref()
            .map(|detail| format!("{}: {detail}", messages::API_ERROR_PREFIX))
    }

    /// Pre-fill the fields in edit mode. Create mode needs no request.
    pub async fn load<S>(&mut self, store: &mut S)
    where
        S: Store<Error = DispatchError>,
    {
        let FormMode::Edit(id) = self.mode else {
            self.phase = LoadPhase::Loaded;
            return;
        };

        self.phase = LoadPhase::Loading;
        info!(event = "ui.form.load_started", id = %id);

        match store.dispatch(Command::FetchCar { id }).await {
            Ok(events) => {
                for event in events {
                    if let Some(car) = event.into_record() {
                        self.fields = car.fields;
                    }
                }
                self.phase = LoadPhase::Loaded;
                info!(event = "ui.form.load_completed", id = %id);
            }
            Err(e) => {
                self.phase = LoadPhase::Failed;
                warn!(event = "ui.form.load_failed", id = %id, error = %e);
                self.error = Some(e.detail().map_or_else(|| e.to_string(), str::to_string));
                self.shell.notify_error(messages::LOAD_FAILED);
            }
        }
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.fields.model = model.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.fields.year = year;
    }

    /// Parse user-entered text into the year; on error the year is unchanged.
    pub fn set_year_text(&mut self, text: &str) -> Result<(), FieldError> {
        let year = text
            .trim()
            .parse::<i32>()
            .map_err(|_| FieldError::InvalidYear {
                input: text.to_string(),
            })?;
        self.fields.year = year;
        Ok(())
    }

    pub fn set_operational(&mut self, operational: bool) {
        self.fields.operational = operational;
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Model(model) => self.set_model(model),
            FieldEdit::Year(year) => self.set_year(year),
            FieldEdit::Operational(operational) => self.set_operational(operational),
        }
    }

    /// Send the fields to the backend as a create or full update.
    pub async fn submit<S>(&mut self, store: &mut S) -> SubmitOutcome
    where
        S: Store<Error = DispatchError>,
    {
        self.error = None;
        let command = match self.mode {
            FormMode::Create => Command::CreateCar {
                fields: self.fields.clone(),
            },
            FormMode::Edit(id) => Command::UpdateCar {
                id,
                fields: self.fields.clone(),
            },
        };
        info!(event = "ui.form.submit_started", route = %self.mode.route());

        match store.dispatch(command).await {
            Ok(events) => {
                let record = events.into_iter().find_map(Event::into_record);
                info!(
                    event = "ui.form.submit_completed",
                    id = ?record.as_ref().map(|r| r.id.get())
                );
                self.shell.notify_success(messages::SAVED);
                SubmitOutcome::Saved {
                    navigate_to: Route::List,
                    record,
                }
            }
            Err(e) => {
                warn!(event = "ui.form.submit_failed", error = %e);
                self.shell.notify_error(messages::SAVE_FAILED);
                if let Some(detail) = e.detail() {
                    self.error = Some(detail.to_string());
                }
                SubmitOutcome::Failed
            }
        }
    }
}
