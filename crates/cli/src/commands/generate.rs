use rostername_core::config::RosternameConfig;
use serde::Serialize;

use super::{load_config, load_existing, resolve_range};

/// Arguments for the `generate` command.
pub struct GenerateArgs<'a> {
    pub first: &'a str,
    pub last: &'a str,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub existing: Option<&'a str>,
    pub json: bool,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    first_name: &'a str,
    last_name: &'a str,
    username: &'a str,
}

/// Run the `generate` command.
pub fn run(config_path: &str, args: &GenerateArgs<'_>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let username = generate(&config, args)?;
    println!("{}", render(args, &username)?);
    Ok(())
}

fn generate(config: &RosternameConfig, args: &GenerateArgs<'_>) -> anyhow::Result<String> {
    let (min, max) = resolve_range(config, args.min, args.max);
    let existing = load_existing(args.existing)?;
    let generator = config.generator.build_generator();
    let username = generator.generate_unique_username(args.first, args.last, min, max, &existing)?;
    Ok(username)
}

fn render(args: &GenerateArgs<'_>, username: &str) -> anyhow::Result<String> {
    if args.json {
        let output = GenerateOutput {
            first_name: args.first,
            last_name: args.last,
            username,
        };
        Ok(serde_json::to_string(&output)?)
    } else {
        Ok(username.to_string())
    }
}
