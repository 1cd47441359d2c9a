//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_settings, PageConfig, PaginationSettings};
use crate::error::{Error, Result};
use crate::pagination::{Page, PageInfo, PageRequest};
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result
    pub fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::Plan { .. } => self.render(&self.plan()?)?,
            Commands::Limits => self.render(&self.limits()?)?,
        };
        println!("{output}");
        Ok(())
    }

    /// Build the page described by the `plan` arguments
    pub fn plan(&self) -> Result<PageInfo> {
        let Commands::Plan {
            token,
            size,
            rows,
            total,
        } = &self.cli.command
        else {
            return Err(Error::config("plan requires the plan subcommand"));
        };

        let config = self.limits()?;
        let request = PageRequest {
            page_token: token.clone(),
            page_size: *size,
        };

        let mut page = Page::from_request(&request, &config)?;
        if let Some(total) = total {
            page.set_total_count(*total);
        }

        tracing::info!(
            "Planned page {} ({})",
            page.token(),
            page.limit_offset_clause()
        );

        Ok(PageInfo::from_page(&page, *rows))
    }

    /// Resolve the page size limits from the config file, endpoint and flags
    pub fn limits(&self) -> Result<PageConfig> {
        let settings = match &self.cli.config {
            Some(path) => load_settings(path)?,
            None => PaginationSettings::default(),
        };

        let base = match &self.cli.endpoint {
            Some(endpoint) => settings.for_endpoint(endpoint)?,
            None => settings.defaults,
        };

        if self.cli.default_size.is_none() && self.cli.max_size.is_none() {
            return Ok(base);
        }

        let max_size = self.cli.max_size.unwrap_or(base.max_size());
        let default_size = self
            .cli
            .default_size
            .unwrap_or_else(|| base.default_size().min(max_size));
        PageConfig::new(default_size, max_size)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(output)
    }
}
