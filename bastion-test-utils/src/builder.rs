//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    fixtures::war::factory::{MockAlliance, MockWar},
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables, alliance
/// fixtures and mock GraphQL endpoints. Methods can be chained together and finalized with
/// `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert
    alliances: Vec<MockAlliance>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    members_endpoints: Vec<(i64, Vec<(i64, String)>, usize)>, // (pnw_alliance_id, members, expected_requests)
    wars_endpoints: Vec<(Vec<MockWar>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            alliances: Vec::new(),
            mock_builders: Vec::new(),
            members_endpoints: Vec::new(),
            wars_endpoints: Vec::new(),
        }
    }

    /// Add the alliance, war and war alert tables to the test database.
    pub fn with_war_tables(self) -> Self {
        self.with_table(entity::prelude::Alliance)
            .with_table(entity::prelude::War)
            .with_table(entity::prelude::WarAlert)
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an alliance into the database.
    ///
    /// Inserted alliances are available in `TestContext::alliances` in the order they were added.
    pub fn with_alliance(mut self, alliance: MockAlliance) -> Self {
        self.alliances.push(alliance);
        self
    }

    /// Add a mock roster endpoint for an alliance.
    ///
    /// # Arguments
    /// - `pnw_alliance_id` - Politics & War alliance ID the query filters on
    /// - `members` - Nation ID and name of each member
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_members_endpoint(
        mut self,
        pnw_alliance_id: i64,
        members: &[(i64, &str)],
        expected_requests: usize,
    ) -> Self {
        let members = members
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect();

        self.members_endpoints
            .push((pnw_alliance_id, members, expected_requests));
        self
    }

    /// Add a mock endpoint answering the primary active wars query.
    pub fn with_wars_endpoint(mut self, wars: Vec<MockWar>, expected_requests: usize) -> Self {
        self.wars_endpoints.push((wars, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts alliance fixtures
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for alliance in self.alliances {
            let alliance = setup.war().insert_alliance(alliance).await?;
            setup.alliances.push(alliance);
        }

        // 3. Create mock endpoints
        // Note: Custom endpoints are created first so tests can register an error response
        // ahead of a success response for the same query
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (pnw_alliance_id, members, expected) in self.members_endpoints {
            let members: Vec<(i64, &str)> = members
                .iter()
                .map(|(id, name)| (*id, name.as_str()))
                .collect();

            mocks.push(
                setup
                    .war()
                    .create_members_endpoint(pnw_alliance_id, &members, expected),
            );
        }

        for (wars, expected) in self.wars_endpoints {
            mocks.push(setup.war().create_wars_endpoint(&wars, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
