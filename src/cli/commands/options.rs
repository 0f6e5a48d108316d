//! Option commands - artifact-ids and versions
//!
//! Translate flags into the query parameters the HTTP endpoints
//! receive and run the same providers.

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::OptionsError;
use crate::core::gateway::{
    TERM_ARTIFACT_ID, TERM_CLASSIFIER, TERM_GROUP_ID, TERM_PACKAGING,
};
use crate::core::providers::{
    OptionProvider, PARAM_INCLUDE_LATEST, PARAM_INCLUDE_RELEASE, PARAM_LIMIT,
};
use crate::core::services::Services;
use crate::core::types::{QueryParams, RundeckOption, PARAM_REPOSITORY};
use clap::Args;

/// Search scope shared by the option commands
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Repository to search (all repositories when omitted)
    #[arg(long, short = 'r')]
    pub repository: Option<String>,

    /// Maven groupId
    #[arg(long, short = 'g')]
    pub group_id: Option<String>,

    /// Maven artifactId
    #[arg(long, short = 'a')]
    pub artifact_id: Option<String>,

    /// Packaging (jar, war, pom, ...)
    #[arg(long, short = 'p')]
    pub packaging: Option<String>,

    /// Classifier (sources, javadoc, ...)
    #[arg(long, short = 'c')]
    pub classifier: Option<String>,

    /// Additional search term as key=value (repeatable)
    #[arg(long = "term", short = 't', value_parser = parse_term)]
    pub terms: Vec<(String, String)>,
}

impl SearchArgs {
    /// Query parameters as the HTTP endpoint would receive them
    ///
    /// Named flags come first, so they win over a `--term` for the same key.
    pub fn to_params(&self) -> QueryParams {
        let named = [
            (PARAM_REPOSITORY, &self.repository),
            (TERM_GROUP_ID, &self.group_id),
            (TERM_ARTIFACT_ID, &self.artifact_id),
            (TERM_PACKAGING, &self.packaging),
            (TERM_CLASSIFIER, &self.classifier),
        ];

        let mut params = QueryParams::new();
        for (key, value) in named {
            if let Some(value) = value {
                params.insert(key, value.clone());
            }
        }
        for (key, value) in &self.terms {
            params.insert(key.clone(), value.clone());
        }
        params
    }
}

fn parse_term(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

/// Arguments for the artifact-ids command
#[derive(Args, Debug)]
pub struct ArtifactIdsArgs {
    #[command(flatten)]
    pub search: SearchArgs,
}

/// Arguments for the versions command
#[derive(Args, Debug)]
pub struct VersionsArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Prepend the LATEST keyword
    #[arg(long)]
    pub include_latest: bool,

    /// Prepend the RELEASE keyword
    #[arg(long)]
    pub include_release: bool,

    /// Maximum number of versions (non-numeric values are ignored, as over HTTP)
    #[arg(long, short = 'l')]
    pub limit: Option<String>,
}

impl VersionsArgs {
    pub fn to_params(&self) -> QueryParams {
        let mut params = self.search.to_params();
        if self.include_latest {
            params.insert(PARAM_INCLUDE_LATEST, "true");
        }
        if self.include_release {
            params.insert(PARAM_INCLUDE_RELEASE, "true");
        }
        if let Some(limit) = &self.limit {
            params.insert(PARAM_LIMIT, limit.clone());
        }
        params
    }
}

/// Execute the artifact-ids command
pub fn execute_artifact_ids(
    args: ArtifactIdsArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = args.search.to_params();
    let options = resolve(services.artifact_ids.as_ref(), &params)?;
    render("artifactId", &options, &params, format);
    Ok(())
}

/// Execute the versions command
pub fn execute_versions(
    args: VersionsArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = args.to_params();
    let options = resolve(services.versions.as_ref(), &params)?;
    render("version", &options, &params, format);
    Ok(())
}

fn resolve(
    provider: &dyn OptionProvider,
    params: &QueryParams,
) -> Result<Vec<RundeckOption>, Box<dyn std::error::Error>> {
    provider.options(params).map_err(|e| match e {
        OptionsError::NoSuchRepository(_) => format!(
            "{e}. Run 'rundeck-options list-repositories' to see available repositories."
        )
        .into(),
        other => other.into(),
    })
}

fn is_keyword(option: &RundeckOption) -> bool {
    option.value == "RELEASE" || option.value == "LATEST"
}

fn render(kind: &str, options: &[RundeckOption], params: &QueryParams, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            let scope = params.repository_id().unwrap_or("all repositories");
            if options.is_empty() {
                println!(
                    "No {} options found in {}",
                    colors::label(kind),
                    colors::repository(scope)
                );
                return;
            }

            output::print_header(&format!(
                "{} {} option(s) in {}:",
                colors::number(&options.len().to_string()),
                kind,
                colors::repository(scope)
            ));
            for option in options {
                // Version keywords only come from flags, never from artifactIds
                let keyword = kind == "version" && is_keyword(option);
                println!("  {}", output::format_option_colored(option, keyword));
            }
        }
        OutputFormat::Json => output::print_output(&options, format),
    }
}
