use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "rostername",
    about = "Generate unique usernames from given and family names",
    version
)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "rostername.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate a single username
    Generate {
        /// Given name
        #[arg(long)]
        first: String,
        /// Family name
        #[arg(long)]
        last: String,
        /// Minimum username length (overrides config)
        #[arg(long)]
        min: Option<usize>,
        /// Maximum username length (overrides config)
        #[arg(long)]
        max: Option<usize>,
        /// File of taken usernames, one per line
        #[arg(long)]
        existing: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Assign usernames to every row of a roster CSV
    Batch {
        /// Roster CSV with first_name,last_name columns
        #[arg(long)]
        input: String,
        /// File of taken usernames, one per line
        #[arg(long)]
        existing: Option<String>,
        /// Write assignments to this CSV instead of stdout
        #[arg(long)]
        output: Option<String>,
        /// Minimum username length (overrides config)
        #[arg(long)]
        min: Option<usize>,
        /// Maximum username length (overrides config)
        #[arg(long)]
        max: Option<usize>,
    },
    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(long, default_value = "rostername.toml")]
        path: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the active replacement rules in application order
    Rules,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            first,
            last,
            min,
            max,
            existing,
            json,
        } => {
            let args = commands::generate::GenerateArgs {
                first: &first,
                last: &last,
                min,
                max,
                existing: existing.as_deref(),
                json,
            };
            commands::generate::run(&cli.config, &args)?;
        }
        Commands::Batch {
            input,
            existing,
            output,
            min,
            max,
        } => {
            let args = commands::batch::BatchArgs {
                input: &input,
                existing: existing.as_deref(),
                output: output.as_deref(),
                min,
                max,
            };
            commands::batch::run(&cli.config, &args)?;
        }
        Commands::Init { path, force } => {
            commands::init::run(&path, force)?;
        }
        Commands::Rules => {
            commands::rules::run(&cli.config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_parse_generate_minimal() {
        let cli = Cli::parse_from(["rostername", "generate", "--first", "John", "--last", "Schmidt"]);
        assert_eq!(cli.config, "rostername.toml");
        match cli.command {
            Commands::Generate {
                first,
                last,
                min,
                max,
                existing,
                json,
            } => {
                assert_eq!(first, "John");
                assert_eq!(last, "Schmidt");
                assert!(min.is_none());
                assert!(max.is_none());
                assert!(existing.is_none());
                assert!(!json);
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn cli_parse_generate_full() {
        let cli = Cli::parse_from([
            "rostername",
            "--config",
            "/etc/rostername.toml",
            "generate",
            "--first",
            "Jürgen",
            "--last",
            "Müller",
            "--min",
            "8",
            "--max",
            "10",
            "--existing",
            "taken.txt",
            "--json",
        ]);
        assert_eq!(cli.config, "/etc/rostername.toml");
        match cli.command {
            Commands::Generate {
                min,
                max,
                existing,
                json,
                ..
            } => {
                assert_eq!(min, Some(8));
                assert_eq!(max, Some(10));
                assert_eq!(existing.as_deref(), Some("taken.txt"));
                assert!(json);
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn cli_generate_requires_names() {
        let result = Cli::try_parse_from(["rostername", "generate", "--first", "John"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_batch() {
        let cli = Cli::parse_from([
            "rostername",
            "batch",
            "--input",
            "roster.csv",
            "--output",
            "out.csv",
        ]);
        match cli.command {
            Commands::Batch {
                input,
                existing,
                output,
                ..
            } => {
                assert_eq!(input, "roster.csv");
                assert!(existing.is_none());
                assert_eq!(output.as_deref(), Some("out.csv"));
            }
            _ => panic!("expected Batch command"),
        }
    }

    #[test]
    fn cli_parse_init_defaults() {
        let cli = Cli::parse_from(["rostername", "init"]);
        match cli.command {
            Commands::Init { path, force } => {
                assert_eq!(path, "rostername.toml");
                assert!(!force);
            }
            _ => panic!("expected Init command"),
        }
    }

    #[test]
    fn cli_parse_rules() {
        let cli = Cli::parse_from(["rostername", "rules"]);
        assert!(matches!(cli.command, Commands::Rules));
    }
}
