// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::cmd::check::check_quiz;
use crate::cmd::present::present;
use crate::cmd::reset::reset_scores;
use crate::cmd::scores::ScoresFormat;
use crate::cmd::scores::print_scores;
use crate::config::Config;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. Defaults to `saturday-quiz.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Present this week's quiz in the browser.
    Present {
        /// URL of the quiz endpoint.
        #[arg(long)]
        endpoint: Option<String>,
        /// Read the quiz from a JSON file instead of the endpoint.
        #[arg(long, conflicts_with = "endpoint")]
        file: Option<PathBuf>,
        /// Path to the scores database.
        #[arg(long)]
        database: Option<PathBuf>,
        /// The port to use for the web server.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser automatically.
        #[arg(long)]
        no_open: bool,
    },
    /// Fetch the quiz and report whether it is valid.
    Check {
        /// URL of the quiz endpoint.
        #[arg(long)]
        endpoint: Option<String>,
        /// Read the quiz from a JSON file instead of the endpoint.
        #[arg(long, conflicts_with = "endpoint")]
        file: Option<PathBuf>,
    },
    /// Print saved scores.
    Scores {
        /// Quiz date, as YYYY-MM-DD. Lists every date if omitted.
        date: Option<String>,
        /// Path to the scores database.
        #[arg(long)]
        database: Option<PathBuf>,
        /// Output format.
        #[arg(long, default_value_t = ScoresFormat::Text)]
        format: ScoresFormat,
    },
    /// Delete all saved scores.
    Reset {
        /// Path to the scores database.
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Present {
            endpoint,
            file,
            database,
            port,
            no_open,
        } => {
            let source = config.source(endpoint, file);
            let database = config.database(database);
            present(
                source,
                &database,
                config.port(port),
                config.open_browser(no_open),
            )
            .await
        }
        Command::Check { endpoint, file } => check_quiz(config.source(endpoint, file)).await,
        Command::Scores {
            date,
            database,
            format,
        } => print_scores(&config.database(database), date, format),
        Command::Reset { database } => reset_scores(&config.database(database)),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_present() {
        let cli = Cli::parse_from([
            "saturday-quiz",
            "present",
            "--file",
            "quiz.json",
            "--port",
            "9000",
            "--no-open",
        ]);
        match cli.command {
            Command::Present {
                file,
                port,
                no_open,
                endpoint,
                ..
            } => {
                assert_eq!(file, Some(PathBuf::from("quiz.json")));
                assert_eq!(port, Some(9000));
                assert!(no_open);
                assert_eq!(endpoint, None);
            }
            _ => panic!("expected present"),
        }
    }

    #[test]
    fn test_file_conflicts_with_endpoint() {
        let result = Cli::try_parse_from([
            "saturday-quiz",
            "check",
            "--file",
            "quiz.json",
            "--endpoint",
            "http://localhost/api/quiz",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["saturday-quiz", "reset", "--config", "other.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
    }
}
