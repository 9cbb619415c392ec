//! Test configuration constants.
//!
//! Placeholder values used when building test clients and alliance fixtures. None of these are
//! real credentials.

/// User agent for test Politics & War client requests.
pub static TEST_USER_AGENT: &str = "Bastion/1.0 (contact@example.com; +https://example.com/bastion)";

/// Politics & War API key stored on alliance fixtures.
pub static TEST_API_KEY: &str = "test_api_key";

/// Name given to alliance fixtures that don't set one.
pub static TEST_ALLIANCE_NAME: &str = "Test Alliance";
