use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use taskmaster::config::{Config, TimingConfig};
use taskmaster::logger::Logger;
use taskmaster::ui::core::AppContext;

/// Terminal task manager with due dates, priorities and categories.
#[derive(Parser, Debug)]
#[command(name = "taskmaster", version, about = "A terminal task manager")]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file (to the given path or the XDG location) and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Skip the artificial submit and save delays
    #[arg(long)]
    instant: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.instant {
        config.timing = TimingConfig::instant();
    }

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;

    taskmaster::ui::run_app(AppContext::with_system_clock(config)).await
}
