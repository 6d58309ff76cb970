//! Test infrastructure for the ljson parser
//!
//! Provides fixture loading, stochastic reformatting, and shared helpers.

mod generators;
mod loader;

pub use generators::Gen;
pub use loader::{load_fixtures_by_name, Expect, TestCase};
