use garage_protocol::{CarFields, CarId, ListQuery};
use serde::{Deserialize, Serialize};

/// All backend operations that can be dispatched through the store.
///
/// Commands own their parameters so they can be logged, queued or sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Fetch the collection matching `query`.
    RefreshCars { query: ListQuery },
    /// Fetch a single record, e.g. to pre-fill the edit form.
    FetchCar { id: CarId },
    CreateCar { fields: CarFields },
    /// Replace all editable fields of an existing record.
    UpdateCar { id: CarId, fields: CarFields },
    DeleteCar { id: CarId },
}

impl Command {
    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Command::RefreshCars { .. } => "refresh_cars",
            Command::FetchCar { .. } => "fetch_car",
            Command::CreateCar { .. } => "create_car",
            Command::UpdateCar { .. } => "update_car",
            Command::DeleteCar { .. } => "delete_car",
        }
    }
}
