use anyhow::Context;
use clap::Parser;
use omnitrix::config::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "omnitrix", version, about = "The Omnitrix, in your terminal")]
struct Cli {
    /// Path to the config file (defaults to ~/.config/omnitrix/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the alien catalog as JSON and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    omnitrix::logging::init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if cli.list {
        let catalog = config.catalog()?;
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    omnitrix::ui::runtime::run(&config)
}
