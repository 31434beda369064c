//! Remote access abstraction (network join + file upload service).

/// Remote-access collaborator.
///
/// The upload protocol itself is owned by the implementation; the navigator
/// only joins the network, shows the address and keeps the service ticking.
pub trait RemoteAccess {
    /// Make one non-blocking network join attempt.
    ///
    /// Returns `true` once the join has succeeded and the upload service is
    /// listening. The navigator spaces attempts out and gives up after a
    /// fixed count.
    fn connect(&mut self) -> bool;

    /// Human-readable address clients should connect to.
    fn address(&self) -> &str;

    /// Advance the upload service by one step. Called once per tick while a
    /// session is active.
    fn service_step(&mut self);

    /// Tear the session down.
    fn disconnect(&mut self);
}
