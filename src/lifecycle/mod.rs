//! Process lifecycle.
//!
//! Startup is plain wiring in `main`; this module owns the other end:
//! translating OS signals into a broadcast every long-running task can
//! subscribe to.

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
