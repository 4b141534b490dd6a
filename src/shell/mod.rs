// Composition root for the time records service.
//
// - Load settings from defaults, an optional TOML file and the environment.
// - Instantiate the in-memory ports.
// - Wire the ports into use case handlers and expose them over HTTP.

pub mod config;
pub mod http;
pub mod state;
