//! Static JSON catalog gateway
//!
//! Loads a catalog of repositories and their artifact records once at
//! startup and answers searches with a linear scan. Records keep
//! catalog order, which the providers rely on for first-wins dedup.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    GatewayError, SearchGateway, SearchType, TERM_ARTIFACT_ID, TERM_CLASSIFIER, TERM_GROUP_ID,
    TERM_PACKAGING, TERM_VERSION,
};
use crate::core::error::{OptionsError, Result};
use crate::core::types::ArtifactRecord;

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub repositories: Vec<CatalogRepository>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRepository {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactRecord>,
}

/// In-memory [`SearchGateway`] over a [`Catalog`]
#[derive(Debug, Clone)]
pub struct CatalogGateway {
    repositories: Vec<CatalogRepository>,
}

impl CatalogGateway {
    /// Read and validate a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OptionsError::CatalogError(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&contents).map_err(|e| {
            OptionsError::CatalogError(format!("Invalid catalog {}: {e}", path.display()))
        })?;

        let gateway = Self::from_catalog(catalog)?;
        tracing::info!(
            path = %path.display(),
            repositories = gateway.repositories.len(),
            artifacts = gateway.artifact_count(),
            "Catalog loaded"
        );
        Ok(gateway)
    }

    /// Build from an already parsed catalog
    ///
    /// Records inherit the id of the repository that lists them.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut repositories = catalog.repositories;

        for repository in &mut repositories {
            if repository.id.is_empty() {
                return Err(OptionsError::CatalogError(
                    "Repository id must not be empty".to_string(),
                ));
            }
            if !seen.insert(repository.id.clone()) {
                return Err(OptionsError::CatalogError(format!(
                    "Duplicate repository id: {}",
                    repository.id
                )));
            }
            for artifact in &mut repository.artifacts {
                artifact.repository_id = repository.id.clone();
            }
        }

        Ok(Self { repositories })
    }

    /// Total number of records across repositories
    pub fn artifact_count(&self) -> usize {
        self.repositories.iter().map(|r| r.artifacts.len()).sum()
    }

    pub fn repositories(&self) -> &[CatalogRepository] {
        &self.repositories
    }
}

/// Coordinate terms understood by the catalog, empty values dropped
fn coordinate_terms(terms: &HashMap<String, String>) -> Vec<(&'static str, &str)> {
    [
        TERM_GROUP_ID,
        TERM_ARTIFACT_ID,
        TERM_VERSION,
        TERM_PACKAGING,
        TERM_CLASSIFIER,
    ]
    .into_iter()
    .filter_map(|key| {
        terms
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .map(|value| (key, value))
    })
    .collect()
}

fn field<'a>(record: &'a ArtifactRecord, key: &str) -> Option<&'a str> {
    match key {
        TERM_GROUP_ID => Some(&record.group_id),
        TERM_ARTIFACT_ID => Some(&record.artifact_id),
        TERM_VERSION => Some(&record.version),
        TERM_PACKAGING => record.packaging.as_deref(),
        TERM_CLASSIFIER => record.classifier.as_deref(),
        _ => None,
    }
}

fn field_matches(field: Option<&str>, value: &str, search_type: SearchType) -> bool {
    let Some(field) = field else {
        return false;
    };
    match search_type {
        SearchType::Exact => field == value,
        SearchType::Scored => field.to_lowercase().starts_with(&value.to_lowercase()),
    }
}

impl SearchGateway for CatalogGateway {
    fn flat_search(
        &self,
        terms: &HashMap<String, String>,
        repository_id: Option<&str>,
        search_type: SearchType,
    ) -> std::result::Result<Vec<ArtifactRecord>, GatewayError> {
        let scope: Vec<&CatalogRepository> = match repository_id {
            Some(id) => {
                let repository = self
                    .repositories
                    .iter()
                    .find(|r| r.id == id)
                    .ok_or_else(|| GatewayError::NoSuchRepository(id.to_string()))?;
                vec![repository]
            }
            None => self.repositories.iter().collect(),
        };

        let criteria = coordinate_terms(terms);
        // An empty query matches nothing
        if criteria.is_empty() {
            return Ok(Vec::new());
        }

        Ok(scope
            .into_iter()
            .flat_map(|repository| repository.artifacts.iter())
            .filter(|record| {
                criteria
                    .iter()
                    .all(|(key, value)| field_matches(field(record, key), value, search_type))
            })
            .cloned()
            .collect())
    }

    fn repository_ids(&self) -> Vec<String> {
        self.repositories.iter().map(|r| r.id.clone()).collect()
    }
}
