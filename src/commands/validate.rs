use crate::Result;
use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the weight configuration file to validate
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: PathBuf,
}

#[expect(clippy::unnecessary_wraps, reason = "Consistent interface with other subcommands")]
pub fn validate_config(args: &ValidateArgs) -> Result<()> {
    match Config::load(&args.config).and_then(|config| config.category_weights()) {
        Ok(_) => {
            println!("Configuration validation successful");
            println!("Config file: {}", args.config.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Configuration validation failed: {e}");
            std::process::exit(1);
        }
    }
}
