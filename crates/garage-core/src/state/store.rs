use std::future::Future;

use super::events::Event;
use super::types::Command;

/// Trait for dispatching backend commands.
///
/// Decouples what the views ask for from how it reaches the backend.
///
/// # Semantics
///
/// - **Ordering**: Commands complete in the order they are awaited. A caller
///   that needs a follow-up (e.g. refresh after delete) awaits the first
///   dispatch before issuing the second.
/// - **Idempotency**: Not guaranteed; `CreateCar` twice creates two records.
/// - **Events**: On success, dispatch returns the events describing what
///   changed. Each command currently produces exactly one event.
pub trait Store {
    type Error;
    fn dispatch(
        &mut self,
        cmd: Command,
    ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send;
}
