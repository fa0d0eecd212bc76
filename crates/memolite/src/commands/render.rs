//! `memolite render` command implementation.

use std::path::PathBuf;

use clap::Args;
use memolite_config::{CliSettings, Config, InputEncoding};
use memolite_renderer::{DisplayMode, decode_raw, escape_html, render_memo};

use super::{read_source, write_target};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Memo file to render (default: read stdin).
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover memolite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render as markdown (overrides config).
    #[arg(long)]
    markdown: bool,

    /// Render as plain text with line breaks (overrides config).
    #[arg(long, conflicts_with = "markdown")]
    plain: bool,

    /// Input is URI-component encoded, as in a `data-raw` attribute (overrides config).
    #[arg(long)]
    encoded: bool,

    /// Wrap the rendered memo in a `<div>` with this class (overrides config).
    #[arg(long)]
    container_class: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read or
    /// decoded, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            mode: self.resolve_mode(),
            encoding: self.encoded.then_some(InputEncoding::Uri),
            container_class: self.container_class.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = read_source(self.input.as_deref())?;
        let text = match config.input.encoding {
            InputEncoding::Text => source,
            InputEncoding::Uri => decode_raw(source.trim())?,
        };
        if text.is_empty() {
            output.warning("Input is empty, nothing to render");
            return Ok(());
        }

        let mode = config.display_mode();
        tracing::debug!(
            ?mode,
            encoding = ?config.input.encoding,
            config = ?config.config_path,
            "Rendering memo"
        );
        let html = render_memo(text.as_str(), mode);
        let html = wrap_container(html, config.output.container_class.as_deref());

        write_target(self.output.as_deref(), &html)?;
        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }

        Ok(())
    }

    /// Resolve display mode from --markdown/--plain flags.
    fn resolve_mode(&self) -> Option<DisplayMode> {
        if self.markdown {
            Some(DisplayMode::Markdown)
        } else {
            self.plain.then_some(DisplayMode::PlainText)
        }
    }
}

/// Wrap rendered HTML in a classed `<div>` when a class is configured.
fn wrap_container(html: String, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<div class="{}">{html}</div>"#, escape_html(class)),
        None => html,
    }
}
