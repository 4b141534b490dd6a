// Shared test fixtures, compiled into the crate only for tests.

pub mod app;
pub mod directory;
pub mod events;
pub mod reports;
