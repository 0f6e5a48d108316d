// Test fixtures for integration testing

use chrono::{TimeZone, Utc};
use rundeck_options::core::gateway::{Catalog, CatalogRepository};
use rundeck_options::ArtifactRecord;
use std::path::PathBuf;
use tempfile::TempDir;

fn artifact(group: &str, artifact: &str, version: &str, day: u32) -> ArtifactRecord {
    ArtifactRecord {
        repository_id: String::new(),
        group_id: group.to_string(),
        artifact_id: artifact.to_string(),
        version: version.to_string(),
        packaging: Some("jar".to_string()),
        classifier: None,
        last_modified: Utc.with_ymd_and_hms(2011, 6, day, 8, 30, 0).unwrap(),
    }
}

/// Two repositories with overlapping coordinates
///
/// - `releases`: com.example:{lib,web,api} and org.other:{lib,server}
/// - `snapshots`: com.example:lib 1.3-SNAPSHOT and 2.0-SNAPSHOT
#[allow(dead_code)] // Used in integration tests
pub fn sample_catalog() -> Catalog {
    Catalog {
        repositories: vec![
            CatalogRepository {
                id: "releases".to_string(),
                name: Some("Releases".to_string()),
                artifacts: vec![
                    artifact("com.example", "lib", "1.0", 1),
                    artifact("com.example", "lib", "1.2", 3),
                    artifact("com.example", "lib", "1.1-beta", 2),
                    artifact("com.example", "lib", "1.10", 5),
                    artifact("com.example", "lib", "1.9", 4),
                    artifact("com.example", "web", "1.0", 1),
                    artifact("com.example", "api", "2.0", 6),
                    artifact("com.example", "web", "1.1", 7),
                    artifact("org.other", "lib", "9.0", 8),
                    artifact("org.other", "server", "1.0-sp1", 9),
                    artifact("org.other", "server", "1.0-jboss", 10),
                    artifact("org.other", "server", "1.0", 11),
                ],
            },
            CatalogRepository {
                id: "snapshots".to_string(),
                name: Some("Snapshots".to_string()),
                artifacts: vec![
                    artifact("com.example", "lib", "1.3-SNAPSHOT", 10),
                    artifact("com.example", "lib", "2.0-SNAPSHOT", 11),
                    // Same version as releases, later timestamp
                    artifact("com.example", "lib", "1.0", 12),
                ],
            },
        ],
    }
}

/// Catalog written to a temporary JSON file
#[allow(dead_code)] // Used in integration tests
pub struct CatalogFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl CatalogFile {
    #[allow(dead_code)] // Used in integration tests
    pub fn write(catalog: &Catalog) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(catalog).expect("Catalog should serialize");
        std::fs::write(&path, json).expect("Failed to write catalog");
        Self { dir, path }
    }
}
