use garage_protocol::{CarId, CarRecord};
use serde::{Deserialize, Serialize};

/// State changes resulting from a dispatched command.
///
/// Each variant describes what happened on the backend. Only successful
/// commands produce events; failures come back through
/// `Err(DispatchError)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The collection was fetched; `cars` is in server order.
    CarsRefreshed { cars: Vec<CarRecord> },
    CarFetched { car: CarRecord },
    /// A record was created; `car` carries the server-assigned id.
    CarCreated { car: CarRecord },
    CarUpdated { car: CarRecord },
    CarDeleted { id: CarId },
}

impl Event {
    /// The single record carried by this event, if any.
    pub fn into_record(self) -> Option<CarRecord> {
        match self {
            Event::CarFetched { car } | Event::CarCreated { car } | Event::CarUpdated { car } => {
                Some(car)
            }
            Event::CarsRefreshed { .. } | Event::CarDeleted { .. } => None,
        }
    }
}
