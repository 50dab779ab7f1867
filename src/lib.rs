//! enersim - validated data access for a renewable-energy financial simulator
//!
//! Three independent, stateless pipelines (tariffs, emissions factors,
//! simulation parameters). Each reads a static JSON document from an
//! injected source, validates it against a declarative schema, and exposes
//! linear-scan lookup helpers over the typed result. Nothing is cached;
//! every call re-reads and re-validates.

pub mod emissions;
pub mod loader;
pub mod observability;
pub mod schema;
pub mod simulation;
pub mod source;
pub mod tariffs;
