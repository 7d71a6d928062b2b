use rostername_core::rules::ReplacementRules;

use super::load_config;

/// Run the `rules` command: list replacement rules in application order.
pub fn run(config_path: &str) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    print!("{}", format_rules(&config.generator.replacement_rules()));
    Ok(())
}

fn format_rules(rules: &ReplacementRules) -> String {
    if rules.is_empty() {
        return "(no replacement rules)\n".to_string();
    }
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{:>2}. {:?} -> {:?}\n", i + 1, rule.from, rule.to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_rules_in_order() {
        let rules = ReplacementRules::new([("Sch", "S"), ("ß", "ss")]);
        assert_eq!(format_rules(&rules), " 1. \"Sch\" -> \"S\"\n 2. \"ß\" -> \"ss\"\n");
    }

    #[test]
    fn empty_table_message() {
        assert_eq!(format_rules(&ReplacementRules::none()), "(no replacement rules)\n");
    }
}
