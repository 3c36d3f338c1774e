//! Article conversion command.

use std::path::PathBuf;

use clap::Args;
use minihtml_config::{CliSettings, Config};
use minihtml_site::{BuildConfig, FileSource, PageSettings, StaticPageBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for converting an article.
#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Article to convert (overrides config).
    #[arg(short, long, visible_alias = "api-file", value_name = "PATH")]
    pub(crate) input: Option<PathBuf>,

    /// Output HTML file (overrides config).
    #[arg(short, long, visible_alias = "html-file", value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Page title (overrides config).
    #[arg(long)]
    pub(crate) title: Option<String>,

    /// Path to configuration file (default: auto-discover minihtml.toml).
    #[arg(short, long, env = "MINIHTML_CONFIG")]
    pub(crate) config: Option<PathBuf>,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_path: self.input,
            output_path: self.output,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(config = %path.display(), "Loaded configuration");
        }

        let builder = StaticPageBuilder::new(BuildConfig {
            output: config.paths.output.clone(),
            page: PageSettings::from(&config.page),
        })?;

        output.info(&format!(
            "Converting article ({}) to template",
            config.paths.source.display()
        ));
        output.info(&format!("Writing html: {}", config.paths.output.display()));

        let report = builder.build(&FileSource::new(&config.paths.source))?;

        output.success(&format!(
            "Wrote {} ({} headings, {} bytes)",
            report.output.display(),
            report.headings,
            report.bytes
        ));
        Ok(())
    }
}

