use std::path::Path;

use rostername_core::config::RosternameConfig;
use rostername_core::roster::{assign_usernames, read_roster, write_assignments, Assignment};
use tracing::info;

use super::{load_config, load_existing, resolve_range};

/// Arguments for the `batch` command.
pub struct BatchArgs<'a> {
    pub input: &'a str,
    pub existing: Option<&'a str>,
    pub output: Option<&'a str>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

/// Run the `batch` command: assign usernames to every roster row.
pub fn run(config_path: &str, args: &BatchArgs<'_>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let assignments = assign(&config, args)?;

    match args.output {
        Some(out) => {
            write_assignments(Path::new(out), &assignments)?;
            info!("Wrote {} assignments to {}", assignments.len(), out);
        }
        None => {
            for assignment in &assignments {
                match (&assignment.username, &assignment.error) {
                    (Some(username), _) => println!(
                        "{} {} -> {username}",
                        assignment.first_name, assignment.last_name
                    ),
                    (None, Some(error)) => println!(
                        "{} {} -> FAILED ({error})",
                        assignment.first_name, assignment.last_name
                    ),
                    (None, None) => {}
                }
            }
        }
    }

    let assigned = assignments.iter().filter(|a| a.is_assigned()).count();
    println!("\nUsername assignment complete:");
    println!("  Assigned: {assigned}");
    println!("  Failed: {}", assignments.len() - assigned);

    if !assignments.is_empty() && assigned == 0 {
        anyhow::bail!("no usernames could be assigned");
    }

    Ok(())
}

fn assign(config: &RosternameConfig, args: &BatchArgs<'_>) -> anyhow::Result<Vec<Assignment>> {
    let (min, max) = resolve_range(config, args.min, args.max);
    let rows = read_roster(Path::new(args.input))?;
    info!("Read {} roster rows from {}", rows.len(), args.input);

    let mut existing = load_existing(args.existing)?;
    let generator = config.generator.build_generator();
    Ok(assign_usernames(&generator, &rows, min, max, &mut existing))
}
