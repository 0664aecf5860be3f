use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand. `path` is the file in use (`--config` or
/// the standard location). The file is only parsed for `--print`, after any
/// `--init`, so a broken file can still be replaced.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init_config,
        force,
    } = cmd
    {
        if *init_config {
            let written = Config::init_file(path, *force)?;
            success(format!("Configuration written to {}", written.display()));
        }

        if *print_config {
            let cfg = Config::load(Some(path))?;
            info(format!("Current configuration ({}):", path.display()));
            println!();
            print!("{}", serde_yaml::to_string(&cfg)?);
        }

        if !*init_config && !*print_config {
            println!("{}", path.display());
        }
    }
    Ok(())
}
