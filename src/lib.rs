// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app;
pub mod normalize;
pub mod runtime;
pub mod sample;
pub mod session;
pub mod term;
pub mod ui;
