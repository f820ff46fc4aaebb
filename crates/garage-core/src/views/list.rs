use garage_protocol::{CarFilter, CarId, CarRecord, ListQuery};
use tracing::{info, warn};

use super::messages;
use super::route::Route;
use crate::shell::Shell;
use crate::state::{Command, DispatchError, Event, Store};

/// Where the list view is in its fetch cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Display model of one record in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarTile {
    pub id: CarId,
    pub title: String,
    pub year_line: String,
    pub operational_line: String,
    pub edit_route: Route,
}

impl From<&CarRecord> for CarTile {
    fn from(car: &CarRecord) -> Self {
        let status = if car.operational() {
            messages::YES
        } else {
            messages::NO
        };
        Self {
            id: car.id,
            title: car.model().to_string(),
            year_line: format!("Rok: {}", car.year()),
            operational_line: format!("Na chodzie: {status}"),
            edit_route: Route::Edit(car.id),
        }
    }
}

/// Filterable list of car records with delete confirmation.
///
/// Owns everything it displays. A fetch failure keeps the previously shown
/// collection.
#[derive(Debug)]
pub struct ListView {
    shell: Shell,
    query: ListQuery,
    cars: Vec<CarRecord>,
    phase: LoadPhase,
    pending_delete: Option<CarId>,
}

impl ListView {
    pub fn new(shell: Shell) -> Self {
        Self::with_query(shell, ListQuery::default())
    }

    /// Start with explicit paging parameters. `filter` comes from `query`.
    pub fn with_query(shell: Shell, query: ListQuery) -> Self {
        Self {
            shell,
            query,
            cars: Vec::new(),
            phase: LoadPhase::Idle,
            pending_delete: None,
        }
    }

    pub fn filter(&self) -> CarFilter {
        self.query.filter
    }

    pub fn query(&self) -> ListQuery {
        self.query
    }

    pub fn cars(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn pending_delete(&self) -> Option<CarId> {
        self.pending_delete
    }

    pub fn confirm_prompt(&self) -> Option<&'static str> {
        self.pending_delete.map(|_| messages::CONFIRM_DELETE)
    }

    pub fn tiles(&self) -> Vec<CarTile> {
        self.cars.iter().map(CarTile::from).collect()
    }

    /// Fetch the collection for the current filter.
    pub async fn load<S>(&mut self, store: &mut S)
    where
        S: Store<Error = DispatchError>,
    {
        self.phase = LoadPhase::Loading;
        info!(event = "ui.list.load_started", filter = %self.query.filter);

        match store
            .dispatch(Command::RefreshCars { query: self.query })
            .await
        {
            Ok(events) => {
                for event in events {
                    self.apply(event);
                }
                self.phase = LoadPhase::Loaded;
                info!(
                    event = "ui.list.load_completed",
                    filter = %self.query.filter,
                    count = self.cars.len()
                );
            }
            Err(e) => {
                self.phase = LoadPhase::Failed;
                warn!(event = "ui.list.load_failed", filter = %self.query.filter, error = %e);
                self.shell.notify_error(messages::LOAD_FAILED);
            }
        }
    }

    /// Switch filter and reload. Returns false, without a request, when the
    /// filter is unchanged.
    pub async fn set_filter<S>(&mut self, store: &mut S, filter: CarFilter) -> bool
    where
        S: Store<Error = DispatchError>,
    {
        if self.query.filter == filter {
            return false;
        }
        info!(
            event = "ui.list.filter_changed",
            from = %self.query.filter,
            to = %filter
        );
        self.query.filter = filter;
        self.load(store).await;
        true
    }

    /// Open the confirmation step for deleting `id`. No request is made.
    pub fn request_delete(&mut self, id: CarId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            info!(event = "ui.list.delete_cancelled", id = %id);
        }
    }

    /// Delete the record awaiting confirmation, then reload on success.
    ///
    /// Returns true if the record was deleted. Without a pending
    /// confirmation nothing happens.
    pub async fn confirm_delete<S>(&mut self, store: &mut S) -> bool
    where
        S: Store<Error = DispatchError>,
    {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        info!(event = "ui.list.delete_started", id = %id);

        match store.dispatch(Command::DeleteCar { id }).await {
            Ok(_) => {
                info!(event = "ui.list.delete_completed", id = %id);
                self.shell.notify_success(messages::DELETED);
                self.load(store).await;
                true
            }
            Err(e) => {
                warn!(event = "ui.list.delete_failed", id = %id, error = %e);
                self.shell.notify_error(messages::DELETE_FAILED);
                false
            }
        }
    }

    fn apply(&mut self, event: Event) {
        if let Event::CarsRefreshed { cars } = event {
            self.cars = cars;
        }
    }
}
