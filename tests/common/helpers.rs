// Test helper functions

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rundeck_options::core::config::{Config, UserCredentials};
use rundeck_options::core::gateway::CatalogGateway;
use rundeck_options::core::services::Services;
use std::sync::Arc;

use super::fixtures::sample_catalog;

#[allow(dead_code)] // Used in integration tests
pub const TEST_USER: &str = "rundeck";
#[allow(dead_code)] // Used in integration tests
pub const TEST_PASSWORD: &str = "s3cret";

/// Default config with one Basic auth user
#[allow(dead_code)] // Used in integration tests
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.realm = "Test Realm".to_string();
    config.auth.users.push(UserCredentials {
        username: TEST_USER.to_string(),
        password: TEST_PASSWORD.to_string(),
    });
    config
}

/// Services over the in-memory sample catalog
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Arc<Services> {
    let gateway =
        CatalogGateway::from_catalog(sample_catalog()).expect("Sample catalog should be valid");
    Arc::new(Services::with_gateway(test_config(), Arc::new(gateway)))
}

/// `Authorization` header value for the given credentials
#[allow(dead_code)] // Used in integration tests
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
