// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::ui::session::Session;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let config = self.build_config(&args)?;

        self.setup_logging(&config);
        if !config.color {
            colored::control::set_override(false);
        }

        let input: Box<dyn BufRead> = match &args.script {
            Some(path) => {
                log::info!("Reading commands from {}", path.display());
                let file = File::open(path)
                    .with_context(|| format!("failed to open script {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        };

        let mut session = Session::new(&config);
        let stats = session
            .run(input, io::stdout().lock())
            .context("interpreter I/O failed")?;

        log::info!(
            "Session finished: {} commands, {} errors, {} types defined",
            stats.commands,
            stats.errors,
            session.registry().len()
        );
        Ok(())
    }

    /// File values first, then command-line flags on top.
    pub fn build_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::new(),
        };

        if let Some(level) = &args.log_level {
            config = config.with_log_level(level.clone());
        }
        if args.json {
            config = config.with_json_output(true);
        }
        if args.detailed {
            config = config.with_detailed(true);
        }
        if args.no_color {
            config = config.with_color(false);
        }
        if args.quiet || args.script.is_some() {
            config = config.with_show_prompt(false);
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    fn setup_logging(&self, config: &Config) {
        env_logger::Builder::new()
            .filter_level(config.level_filter())
            .format_timestamp(None)
            .init();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
