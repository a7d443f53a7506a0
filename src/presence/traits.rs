use crate::error::PresenceError;
use crate::presence::Activity;

/// Transport that delivers presence records to an external process.
///
/// The Discord implementation lives in [`crate::discord`]; tests substitute a
/// recording fake.
pub trait PresenceClient: Send {
    /// Returns the name of this client (for logging).
    fn name(&self) -> &'static str;

    /// Open the connection for the given application id.
    fn start(&mut self, app_id: i64) -> Result<(), PresenceError>;

    /// Transmit the current presence record. Delivery failures are handled
    /// by the transport itself; the caller gets no failure path.
    fn set_activity(&mut self, activity: &Activity);

    /// Close the connection.
    fn stop(&mut self);
}
