//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::{FormatFlag, OutputMode};
use crate::errors::CliError;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// Color is disabled by `--no-color`, `NO_COLOR`, `TERM=dumb`, or a
    /// non-TTY stdout. Unicode is disabled by `--ascii`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidInput` for an unknown `--format` value or
    /// when `--format` is combined with `--json`.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Result<Self, CliError> {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let format = FormatFlag::parse(format_flag)?;
        let mode = OutputMode::resolve(json_flag, format, is_tty, term_is_dumb)?;

        Ok(Self {
            is_tty,
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode,
        })
    }

    /// Context used for error reporting, where flags may be invalid.
    pub fn fallback(no_color_flag: bool, ascii_flag: bool) -> Self {
        Self::from_env(false, None, no_color_flag, ascii_flag).unwrap_or(Self {
            is_tty: false,
            color: false,
            unicode: !ascii_flag,
            width: 80,
            mode: OutputMode::Plain,
        })
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Get terminal width, falling back to 80.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize buffer
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl succeeded, so the buffer is initialized
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, false, false).unwrap();
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_invalid_format_is_error() {
        assert!(UiContext::from_env(false, Some("yaml"), false, false).is_err());
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true).unwrap();
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, None, true, false).unwrap();
        assert!(!ctx.color);
    }

    #[test]
    fn test_fallback_has_width() {
        let ctx = UiContext::fallback(true, false);
        assert!(ctx.width > 0);
        assert!(!ctx.color);
    }
}
