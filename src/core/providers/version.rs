//! `version` option provider
//!
//! Lists the distinct versions matching the request, newest first.
//! Each option is labelled with the record's last modification time.
//! Optional flags put the `RELEASE`/`LATEST` keywords in front, and
//! `l` caps how many real versions are returned.

use std::collections::HashSet;
use std::sync::Arc;

use super::{search_exact, OptionProvider};
use crate::core::error::Result;
use crate::core::gateway::SearchGateway;
use crate::core::resource::ResourceDescriptor;
use crate::core::types::{ArtifactRecord, QueryParams, RundeckOption};
use crate::core::version::ComparableVersion;

/// Flag prepending the `LATEST` keyword
pub const PARAM_INCLUDE_LATEST: &str = "includeLatest";
/// Flag prepending the `RELEASE` keyword
pub const PARAM_INCLUDE_RELEASE: &str = "includeRelease";
/// Maximum number of real versions
pub const PARAM_LIMIT: &str = "l";

const LATEST: &str = "LATEST";
const RELEASE: &str = "RELEASE";

/// Display timestamp, second precision without zone
const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct VersionOptionProvider {
    gateway: Arc<dyn SearchGateway>,
}

impl VersionOptionProvider {
    pub const RESOURCE_URI: &'static str = "/rundeck/options/version";

    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self { gateway }
    }
}

fn option_name(record: &ArtifactRecord) -> String {
    format!(
        "{} ({})",
        record.version,
        record.last_modified.format(LAST_MODIFIED_FORMAT)
    )
}

impl OptionProvider for VersionOptionProvider {
    fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor::option_endpoint(Self::RESOURCE_URI)
    }

    fn options(&self, params: &QueryParams) -> Result<Vec<RundeckOption>> {
        let records = search_exact(self.gateway.as_ref(), params)?;

        // First record seen for a version names it
        let mut seen = HashSet::new();
        let mut versions: Vec<(ComparableVersion, RundeckOption)> = records
            .iter()
            .filter(|record| seen.insert(record.version.as_str()))
            .map(|record| {
                (
                    ComparableVersion::parse(&record.version),
                    RundeckOption::new(option_name(record), record.version.clone()),
                )
            })
            .collect();

        // Newest first
        versions.sort_by(|(a, _), (b, _)| b.cmp(a));

        if let Some(limit) = params.positive_int(PARAM_LIMIT) {
            versions.truncate(limit);
        }

        let mut options: Vec<RundeckOption> =
            versions.into_iter().map(|(_, option)| option).collect();

        // Both flags yield RELEASE, LATEST, ...
        if params.flag(PARAM_INCLUDE_LATEST) {
            options.insert(0, RundeckOption::plain(LATEST));
        }
        if params.flag(PARAM_INCLUDE_RELEASE) {
            options.insert(0, RundeckOption::plain(RELEASE));
        }

        tracing::debug!(
            repository = params.repository_id().unwrap_or("*"),
            matched = seen.len(),
            returned = options.len(),
            "version options resolved"
        );

        Ok(options)
    }
}
