// Composition root for the workout tracker.
//
// Responsibilities
// - Read config from environment.
// - Pick the workout store and rebuild the tracker from it.
// - Wire handlers, CORS and request tracing into one router.

pub mod config;
pub mod http;
pub mod state;
