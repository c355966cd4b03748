//! Output mode routing logic.

use crate::errors::CliError;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and formatting (TTY only)
    Pretty,
}

/// Explicit `--format` choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFlag {
    Table,
    Plain,
}

impl FormatFlag {
    /// Parse a `--format` value.
    pub fn parse(value: Option<&str>) -> Result<Option<Self>, CliError> {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None => Ok(None),
            Some("table") => Ok(Some(Self::Table)),
            Some("plain") => Ok(Some(Self::Plain)),
            Some(other) => Err(CliError::invalid_input(format!(
                "Unsupported format: {} (use table or plain)",
                other
            ))),
        }
    }
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything and cannot be combined with `--format`
    /// 2. `--format plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<FormatFlag>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Result<Self, CliError> {
        if json_flag {
            if format_flag.is_some() {
                return Err(CliError::invalid_input(
                    "--format cannot be used with --json",
                ));
            }
            return Ok(Self::Json);
        }

        if format_flag == Some(FormatFlag::Plain) || term_is_dumb {
            return Ok(Self::Plain);
        }

        Ok(if is_tty { Self::Pretty } else { Self::Plain })
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
