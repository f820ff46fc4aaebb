use garage_protocol::{CarFields, CarId, CarRecord, ListQuery};

use super::errors::GatewayError;
use super::traits::CarGateway;
use crate::shell::BusyTracker;

/// Gateway wrapper that raises the shell's busy flag for every call.
///
/// The flag is raised before the request goes out and released once the
/// response arrives, whatever the outcome.
#[derive(Debug, Clone)]
pub struct TrackedGateway<G> {
    inner: G,
    busy: BusyTracker,
}

impl<G: CarGateway> TrackedGateway<G> {
    pub fn new(inner: G, busy: BusyTracker) -> Self {
        Self { inner, busy }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: CarGateway> CarGateway for TrackedGateway<G> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<CarRecord>, GatewayError> {
        let _guard = self.busy.begin();
        self.inner.list(query).await
    }

    async fn get(&self, id: CarId) -> Result<CarRecord, GatewayError> {
        let _guard = self.busy.begin();
        self.inner.get(id).await
    }

    async fn create(&self, fields: &CarFields) -> Result<CarRecord, GatewayError> {
        let _guard = self.busy.begin();
        self.inner.create(fields).await
    }

    async fn update(&self, id: CarId, fields: &CarFields) -> Result<CarRecord, GatewayError> {
        let _guard = self.busy.begin();
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: CarId) -> Result<(), GatewayError> {
        let _guard = self.busy.begin();
        self.inner.delete(id).await
    }
}
