// Tests for the option, repository and config commands

use clap::Parser;
use rundeck_options::cli::commands::{
    config, options, repositories, ArtifactIdsArgs, ConfigArgs, RepositoriesArgs, SearchArgs,
    VersionsArgs,
};
use rundeck_options::cli::{Cli, Commands, OutputFormat};

use crate::common::{create_test_services, test_config};

fn search(repository: Option<&str>, artifact_id: Option<&str>) -> SearchArgs {
    SearchArgs {
        repository: repository.map(str::to_string),
        group_id: Some("com.example".to_string()),
        artifact_id: artifact_id.map(str::to_string),
        ..Default::default()
    }
}

/// Test artifact-ids with human output
#[test]
fn test_artifact_ids_human() {
    let services = create_test_services();
    let args = ArtifactIdsArgs {
        search: search(Some("releases"), None),
    };

    let result = options::execute_artifact_ids(args, &services, OutputFormat::Human);
    assert!(result.is_ok(), "artifact-ids failed: {:?}", result.err());
}

/// Test versions with JSON output and keywords
#[test]
fn test_versions_json() {
    let services = create_test_services();
    let args = VersionsArgs {
        search: search(None, Some("lib")),
        include_latest: true,
        include_release: true,
        limit: Some("3".to_string()),
    };

    let result = options::execute_versions(args, &services, OutputFormat::Json);
    assert!(result.is_ok(), "versions failed: {:?}", result.err());
}

/// Test that an empty result is not an error
#[test]
fn test_versions_no_matches() {
    let services = create_test_services();
    let args = VersionsArgs {
        search: search(Some("snapshots"), Some("web")),
        include_latest: false,
        include_release: false,
        limit: None,
    };

    let result = options::execute_versions(args, &services, OutputFormat::Human);
    assert!(result.is_ok());
}

/// Test that an unknown repository points at list-repositories
#[test]
fn test_unknown_repository_hint() {
    let services = create_test_services();
    let args = ArtifactIdsArgs {
        search: search(Some("thirdparty"), None),
    };

    let err = options::execute_artifact_ids(args, &services, OutputFormat::Human).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("No repository at thirdparty"));
    assert!(message.contains("list-repositories"));
}

#[test]
fn test_list_repositories() {
    let services = create_test_services();

    let result = repositories::execute(RepositoriesArgs {}, &services, OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_show_config() {
    let result = config::execute(ConfigArgs {}, &test_config(), OutputFormat::Human);
    assert!(result.is_ok());
}

/// Test parsing of the versions subcommand flags
#[test]
fn test_parse_versions_command() {
    let cli = Cli::try_parse_from([
        "rundeck-options",
        "--format",
        "json",
        "versions",
        "-r",
        "releases",
        "-a",
        "lib",
        "--include-latest",
        "-l",
        "5",
        "-t",
        "c=sources",
    ])
    .unwrap();

    assert!(matches!(cli.format, OutputFormat::Json));
    match cli.command {
        Commands::Versions(args) => {
            let params = args.to_params();
            assert_eq!(params.repository_id(), Some("releases"));
            assert_eq!(params.get("a"), Some("lib"));
            assert_eq!(params.get("c"), Some("sources"));
            assert_eq!(params.get("includeLatest"), Some("true"));
            assert_eq!(params.get("includeRelease"), None);
            assert_eq!(params.get("l"), Some("5"));
        }
        other => panic!("Expected versions command, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_malformed_term() {
    let result = Cli::try_parse_from(["rundeck-options", "artifact-ids", "-t", "novalue"]);
    assert!(result.is_err());
}
