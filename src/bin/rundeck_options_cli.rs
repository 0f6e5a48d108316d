//! rundeck-options CLI - option lists from the command line
//!
//! Runs the RunDeck option providers directly against the configured
//! artifact catalog. Use this to check what RunDeck will be offered,
//! for scripting, or without a running server.
//!
//! # Examples
//!
//! ```bash
//! # artifactIds of a group in one repository
//! rundeck-options artifact-ids -r releases -g com.example
//!
//! # Ten newest versions, with RELEASE and LATEST on top
//! rundeck-options versions -g com.example -a lib --include-release --include-latest -l 10
//!
//! # Same list as the HTTP endpoint would return it
//! rundeck-options versions -g com.example -a lib --format json
//!
//! # Show configuration
//! rundeck-options show-config
//! ```

use clap::Parser;
use rundeck_options::cli::output::print_error;
use rundeck_options::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
