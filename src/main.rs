use anyhow::Result;

use forge_config::commands;
use forge_config::config::Config;

fn main() -> Result<()> {
    // Parse configuration from command line
    let config = Config::from_args_and_env()?;

    // RUST_LOG wins over --log-level when set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    commands::run(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use forge_config::config::{Action, Args};

    #[test]
    fn parses_inspect_command() {
        let args = Args::parse_from(["forge", "inspect", "tailwind.config.js"]);
        let config = Config::from_args(args, std::path::Path::new("/nonexistent"), None)
            .expect("create config");

        assert_eq!(config.log_level, "info");
        assert!(matches!(config.action, Action::Inspect { .. }));
    }
}
