//! In-memory gateway used by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use garage_protocol::{CarFields, CarFilter, CarId, CarRecord, ListQuery};
use tokio::sync::watch;

use super::errors::GatewayError;
use super::traits::CarGateway;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ListQuery),
    Get(CarId),
    Create(CarFields),
    Update(CarId, CarFields),
    Delete(CarId),
}

type Hook = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct FakeState {
    cars: Vec<CarRecord>,
    next_id: i64,
    calls: Vec<Call>,
    failures: VecDeque<GatewayError>,
    hook: Option<Hook>,
    gate: Option<watch::Receiver<bool>>,
}

/// Holds every request until released.
pub struct FakeGate {
    tx: watch::Sender<bool>,
}

impl FakeGate {
    pub fn release(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Clone, Default)]
pub struct FakeGateway {
    state: Arc<Mutex<FakeState>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: impl IntoIterator<Item = CarRecord>) -> Self {
        let gateway = Self::new();
        {
            let mut state = gateway.lock();
            state.cars = cars.into_iter().collect();
            state.next_id = state.cars.iter().map(|c| c.id.get()).max().unwrap_or(0);
        }
        gateway
    }

    pub fn cars(&self) -> Vec<CarRecord> {
        self.lock().cars.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Make the next request fail with `err` after being recorded.
    pub fn fail_next(&self, err: GatewayError) {
        self.lock().failures.push_back(err);
    }

    /// Run `hook` at the start of every request.
    pub fn on_request(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.lock().hook = Some(Arc::new(hook));
    }

    pub fn hold_requests(&self) -> FakeGate {
        let (tx, rx) = watch::channel(false);
        self.lock().gate = Some(rx);
        FakeGate { tx }
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    async fn call<T>(
        &self,
        call: Call,
        op: impl FnOnce(&mut FakeState) -> Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        let (hook, gate) = {
            let mut state = self.lock();
            state.calls.push(call);
            (state.hook.clone(), state.gate.clone())
        };
        if let Some(hook) = hook {
            hook();
        }
        if let Some(mut gate) = gate {
            let _ = gate.wait_for(|open| *open).await;
        }

        let mut state = self.lock();
        if let Some(err) = state.failures.pop_front() {
            return Err(err);
        }
        op(&mut state)
    }
}

impl CarGateway for FakeGateway {
    async fn list(&self, query: &ListQuery) -> Result<Vec<CarRecord>, GatewayError> {
        let filter = query.filter;
        self.call(Call::List(*query), move |state| {
            Ok(state
                .cars
                .iter()
                .filter(|c| passes(filter, c.operational()))
                .cloned()
                .collect())
        })
        .await
    }

    async fn get(&self, id: CarId) -> Result<CarRecord, GatewayError> {
        self.call(Call::Get(id), move |state| {
            state
                .cars
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(GatewayError::NotFound { id, detail: None })
        })
        .await
    }

    async fn create(&self, fields: &CarFields) -> Result<CarRecord, GatewayError> {
        let fields = fields.clone();
        self.call(Call::Create(fields.clone()), move |state| {
            state.next_id += 1;
            let car = CarRecord::new(CarId::new(state.next_id), fields);
            state.cars.push(car.clone());
            Ok(car)
        })
        .await
    }

    async fn update(&self, id: CarId, fields: &CarFields) -> Result<CarRecord, GatewayError> {
        let fields = fields.clone();
        self.call(Call::Update(id, fields.clone()), move |state| {
            let car = state
                .cars
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(GatewayError::NotFound { id, detail: None })?;
            car.fields = fields;
            Ok(car.clone())
        })
        .await
    }

    async fn delete(&self, id: CarId) -> Result<(), GatewayError> {
        self.call(Call::Delete(id), move |state| {
            let before = state.cars.len();
            state.cars.retain(|c| c.id != id);
            if state.cars.len() == before {
                Err(GatewayError::NotFound { id, detail: None })
            } else {
                Ok(())
            }
        })
        .await
    }
}

/// Server-side filter semantics of `filter_type`.
fn passes(filter: CarFilter, operational: bool) -> bool {
    match filter {
        CarFilter::All => true,
        CarFilter::Operational => operational,
        CarFilter::NotOperational => !operational,
    }
}

pub fn car(id: i64, model: &str, year: i32, operational: bool) -> CarRecord {
    CarRecord::new(
        CarId::new(id),
        CarFields {
            model: model.to_string(),
            year,
            operational,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_applies_filter_type() {
        let gateway = FakeGateway::with_cars([
            car(1, "Polonez", 1985, true),
            car(2, "Syrena", 1968, false),
        ]);

        for (filter, expected) in [
            (CarFilter::All, vec![1, 2]),
            (CarFilter::Operational, vec![1]),
            (CarFilter::NotOperational, vec![2]),
        ] {
            let ids: Vec<i64> = gateway
                .list(&ListQuery::filtered(filter))
                .await
                .unwrap()
                .iter()
                .map(|c| c.id.get())
                .collect();
            assert_eq!(ids, expected, "filter {filter}");
        }
    }
}
