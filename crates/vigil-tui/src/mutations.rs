//! State mutations requested by modal key handlers.
//!
//! Modal handlers only see `&TuiState`; they describe the change and the
//! reducer applies it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMutation {
    /// Mark an auth request as in flight.
    BeginAuthRequest,
}
