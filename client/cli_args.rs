use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "algo42-cli",
    about = "A command line playground for classic sorting and graph algorithms",
    long_about = "algo42-cli runs the algorithm demos bundled with the algo42 library.\nInvoke a single command directly (e.g. `algo42-cli quick 5 1 4 2 8`) or enter\ninteractive mode with -i and explore the commands with HELP."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "algo42.toml")]
    pub config: String,

    /// Generate a default configuration file and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Load the demo graph from a JSON edge list file
    #[arg(short = 'g', long = "graph")]
    pub graph: Option<String>,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enter interactive mode
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Command to execute (if not in interactive mode)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.interactive && !self.generate_config && self.command.is_empty() {
            return Err(
                "No command specified. Use -i for interactive mode or provide a command."
                    .to_string(),
            );
        }

        Ok(())
    }

    pub fn should_run_interactive(&self) -> bool {
        self.interactive || self.command.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_invocation() {
        let args = CliArgs::parse_from(["algo42-cli"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_interactive_flag_allows_empty_command() {
        let args = CliArgs::parse_from(["algo42-cli", "-i"]);
        assert!(args.validate().is_ok());
        assert!(args.should_run_interactive());
    }

    #[test]
    fn test_trailing_command_words() {
        let args = CliArgs::parse_from(["algo42-cli", "quick", "5", "1", "4"]);
        assert!(args.validate().is_ok());
        assert!(!args.should_run_interactive());
        assert_eq!(args.command, vec!["quick", "5", "1", "4"]);
    }

    #[test]
    fn test_generate_config_needs_no_command() {
        let args = CliArgs::parse_from(["algo42-cli", "--generate-config"]);
        assert!(args.validate().is_ok());
    }
}
