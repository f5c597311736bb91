// Composition root for the employees service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the configured repository and wire it into the service.
// - Expose the http router.

pub mod config;
pub mod http;
pub mod state;
