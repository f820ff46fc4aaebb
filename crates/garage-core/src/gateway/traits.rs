use std::future::Future;

use garage_protocol::{CarFields, CarId, CarRecord, ListQuery};

use super::errors::GatewayError;

/// Access to the car-record backend.
///
/// One method per REST operation. The views and the store only see this
/// trait.
pub trait CarGateway: Send + Sync {
    /// `GET /cars/?filter_type=..`: records in server order.
    fn list(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<Vec<CarRecord>, GatewayError>> + Send;

    /// `GET /cars/{id}`
    fn get(&self, id: CarId) -> impl Future<Output = Result<CarRecord, GatewayError>> + Send;

    /// `POST /cars/`: returns the record with its server-assigned id.
    fn create(
        &self,
        fields: &CarFields,
    ) -> impl Future<Output = Result<CarRecord, GatewayError>> + Send;

    /// `PUT /cars/{id}`: full replace of the editable fields.
    fn update(
        &self,
        id: CarId,
        fields: &CarFields,
    ) -> impl Future<Output = Result<CarRecord, GatewayError>> + Send;

    /// `DELETE /cars/{id}`
    fn delete(&self, id: CarId) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
