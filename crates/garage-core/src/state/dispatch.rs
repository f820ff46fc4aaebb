use tracing::{debug, error, info};

use crate::gateway::CarGateway;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation that routes commands to a [`CarGateway`].
pub struct CarStore<G> {
    gateway: G,
}

impl<G: CarGateway> CarStore<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    async fn execute(&self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        match cmd {
            Command::RefreshCars { query } => {
                let cars = self.gateway.list(&query).await?;
                Ok(vec![Event::CarsRefreshed { cars }])
            }
            Command::FetchCar { id } => {
                let car = self.gateway.get(id).await?;
                Ok(vec![Event::CarFetched { car }])
            }
            Command::CreateCar { fields } => {
                let car = self.gateway.create(&fields).await?;
                Ok(vec![Event::CarCreated { car }])
            }
            Command::UpdateCar { id, fields } => {
                let car = self.gateway.update(id, &fields).await?;
                Ok(vec![Event::CarUpdated { car }])
            }
            Command::DeleteCar { id } => {
                self.gateway.delete(id).await?;
                Ok(vec![Event::CarDeleted { id }])
            }
        }
    }
}

impl<G: CarGateway> Store for CarStore<G> {
    type Error = DispatchError;

    async fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        let command = cmd.name();
        debug!(
            event = "core.state.dispatch_started",
            command = command,
            params = ?cmd
        );

        let result = self.execute(cmd).await;

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                command = command,
                event_count = events.len()
            ),
            Err(e) => error!(
                event = "core.state.dispatch_failed",
                command = command,
                error = %e
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;
    use crate::gateway::testing::{Call, FakeGateway, car};
    use garage_protocol::{CarFields, CarFilter, CarId, CarRecord, ListQuery};

    #[test]
    fn test_car_store_implements_store_trait() {
        fn assert_store<T: Store>(_s: &T) {}
        let store = CarStore::new(FakeGateway::new());
        assert_store(&store);
    }

    #[tokio::test]
    async fn test_refresh_passes_query_through() {
        let gateway = FakeGateway::with_cars([
            car(1, "Polonez", 1985, true),
            car(2, "Syrena", 1968, false),
        ]);
        let mut store = CarStore::new(gateway.clone());

        let query = ListQuery::filtered(CarFilter::Operational);
        let events = store
            .dispatch(Command::RefreshCars { query })
            .await
            .unwrap();

        assert_eq!(
            events,
            vec![Event::CarsRefreshed {
                cars: vec![car(1, "Polonez", 1985, true)]
            }]
        );
        assert_eq!(gateway.calls(), vec![Call::List(query)]);
    }

    #[tokio::test]
    async fn test_create_returns_created_event_with_server_id() {
        let gateway = FakeGateway::with_cars([car(7, "Warszawa", 1957, true)]);
        let mut store = CarStore::new(gateway);

        let fields = CarFields {
            model: "Fiat 126p".to_string(),
            year: 1973,
            operational: false,
        };
        let events = store
            .dispatch(Command::CreateCar {
                fields: fields.clone(),
            })
            .await
            .unwrap();

        assert_eq!(
            events,
            vec![Event::CarCreated {
                car: CarRecord::new(CarId::new(8), fields)
            }]
        );
    }

    #[tokio::test]
    async fn test_update_fetch_and_delete_events() {
        let gateway = FakeGateway::with_cars([car(5, "Polonez", 1985, true)]);
        let mut store = CarStore::new(gateway.clone());

        let fields = CarFields {
            model: "Polonez Caro".to_string(),
            year: 1991,
            operational: false,
        };
        let events = store
            .dispatch(Command::UpdateCar {
                id: CarId::new(5),
                fields: fields.clone(),
            })
            .await
            .unwrap();
        assert!(matches!(&events[0], Event::CarUpdated { car } if car.fields == fields));

        let events = store
            .dispatch(Command::FetchCar { id: CarId::new(5) })
            .await
            .unwrap();
        assert!(matches!(&events[0], Event::CarFetched { car } if car.model() == "Polonez Caro"));

        let events = store
            .dispatch(Command::DeleteCar { id: CarId::new(5) })
            .await
            .unwrap();
        assert_eq!(events, vec![Event::CarDeleted { id: CarId::new(5) }]);
        assert!(gateway.cars().is_empty());
    }

    #[tokio::test]
    async fn test_failures_use_error_channel() {
        let gateway = FakeGateway::new();
        gateway.fail_next(GatewayError::Status {
            status: 500,
            detail: None,
        });
        let mut store = CarStore::new(gateway);

        let result = store
            .dispatch(Command::RefreshCars {
                query: ListQuery::default(),
            })
            .await;
        assert!(matches!(
            result,
            Err(DispatchError::Gateway(GatewayError::Status { status: 500, .. }))
        ));
    }

    #[tokio::test]
    async fn test_fetch_missing_record_is_not_found() {
        let mut store = CarStore::new(FakeGateway::new());
        let result = store.dispatch(Command::FetchCar { id: CarId::new(42) }).await;
        assert!(matches!(
            result,
            Err(DispatchError::Gateway(GatewayError::NotFound { .. }))
        ));
    }
}
