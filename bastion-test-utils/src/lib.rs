//! Test utilities for the Bastion war monitor.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables, alliance fixtures and
//! mock GraphQL endpoints a test needs, and `build()` returns a [`TestContext`] holding an
//! in-memory SQLite database and a mockito server standing in for the Politics & War API.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_API_KEY, TEST_USER_AGENT},
        fixtures::war::factory::{MockAlliance, MockWar},
        TestBuilder, TestContext, TestError,
    };
}
