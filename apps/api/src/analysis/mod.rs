//! Analysis requests: pure composition of a FinalAnalysis, the background runner
//! that drives one request to a terminal status, persistence, and HTTP handlers.

pub mod handlers;
pub mod pipeline;
pub mod runner;
pub mod store;
