//! `dw serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use dw_config::Config;
use dw_server::run_server;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to the documentation folder containing markdown files and
    /// module_tree.json.
    #[arg(short, long, env = "DOCS_FOLDER")]
    docs_folder: PathBuf,

    /// Host to bind the server to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on.
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the documentation folder is invalid or the
    /// server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Validation is fatal; a missing overview.md is only a warning.
        let config = Config::new(&self.docs_folder, self.host, self.port)?;
        if !config.has_overview() {
            output.warning(&format!(
                "Warning: overview.md not found in '{}'",
                config.docs_root.display()
            ));
        }

        output.highlight("Starting documentation server...");
        output.info(&format!(
            "Documentation folder: {}",
            config.docs_root.display()
        ));
        output.info(&format!(
            "Server running at: http://{}:{}",
            config.host, config.port
        ));
        output.info("Press Ctrl+C to stop the server");

        run_server(config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
