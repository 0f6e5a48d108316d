//! `artifactId` option provider

use std::collections::HashSet;
use std::sync::Arc;

use super::{search_exact, OptionProvider};
use crate::core::error::Result;
use crate::core::gateway::SearchGateway;
use crate::core::resource::ResourceDescriptor;
use crate::core::types::{QueryParams, RundeckOption};

/// Lists the distinct artifactIds matching the request, ascending
pub struct ArtifactIdOptionProvider {
    gateway: Arc<dyn SearchGateway>,
}

impl ArtifactIdOptionProvider {
    pub const RESOURCE_URI: &'static str = "/rundeck/options/artifactId";

    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self { gateway }
    }
}

impl OptionProvider for ArtifactIdOptionProvider {
    fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor::option_endpoint(Self::RESOURCE_URI)
    }

    fn options(&self, params: &QueryParams) -> Result<Vec<RundeckOption>> {
        let records = search_exact(self.gateway.as_ref(), params)?;

        let mut seen = HashSet::new();
        let mut artifact_ids: Vec<String> = records
            .into_iter()
            .map(|record| record.artifact_id)
            .filter(|artifact_id| seen.insert(artifact_id.clone()))
            .collect();
        artifact_ids.sort();

        tracing::debug!(
            repository = params.repository_id().unwrap_or("*"),
            count = artifact_ids.len(),
            "artifactId options resolved"
        );

        Ok(artifact_ids.into_iter().map(RundeckOption::plain).collect())
    }
}
