//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, BULLET, DOT, RULE};

/// Render a header line for a command.
///
/// Pretty mode: "Wardrobe · command (context)" with the snapshot path below
/// Plain mode: "wardrobe command"
pub fn header_with_context(
    ctx: &UiContext,
    command: &str,
    context: Option<&str>,
    path: Option<&str>,
) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Wardrobe", styles::bold(), ctx.color);
            let dot = DOT.get(ctx.unicode);
            let mut out = match context {
                Some(c) => format!("{} {} {} ({})", title, dot, command, c),
                None => format!("{} {} {}", title, dot, command),
            };
            if let Some(p) = path {
                let chars: Vec<char> = p.chars().collect();
                let display_path = if chars.len() > 50 {
                    let tail: String = chars[chars.len() - 47..].iter().collect();
                    format!("...{}", tail)
                } else {
                    p.to_string()
                };
                out.push_str(&format!("\n{}", kv(ctx, "Snapshot", &display_path)));
            }
            out
        }
        OutputMode::Plain => format!("wardrobe {}", command),
        OutputMode::Json => String::new(),
    }
}

pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    header_with_context(ctx, command, context, None)
}

/// Render a section title inside a report.
///
/// Pretty mode: bold title over a rule
/// Plain mode: "[title]"
pub fn section(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        let rule = RULE.get(ctx.unicode).repeat(title.chars().count());
        format!("{}\n{}", styled(title, styles::bold(), ctx.color), rule)
    } else {
        format!("[{}]", title.to_lowercase().replace(' ', "_"))
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a bulleted line.
pub fn bullet(ctx: &UiContext, text: &str) -> String {
    format!("  {} {}", BULLET.get(ctx.unicode), text)
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    /// Right-align (numbers, money)
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

fn align_numeric(table: &mut ComfyTable, columns: &[Column]) {
    for (i, col) in columns.iter().enumerate() {
        if col.numeric {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bordered table.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Tab-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    align_numeric(&mut table, columns);
    table.to_string()
}

/// Render a simple table without borders (for lists of garments or outfits).
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = ComfyTable::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    align_numeric(&mut table, columns);
    table.to_string()
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "stats", None);
        assert!(h.contains("Wardrobe"));
        assert!(h.contains("stats"));
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "garments list", None), "wardrobe garments list");
    }

    #[test]
    fn test_header_truncates_long_path() {
        let long_path = "/a/very/long/path/that/exceeds/fifty/characters/for/sure/wardrobe.json";
        let h = header_with_context(&pretty_ctx(), "stats", None, Some(long_path));
        assert!(h.contains("Snapshot:"));
        assert!(h.contains("..."));
        assert!(h.contains("wardrobe.json"));
    }

    #[test]
    fn test_section_modes() {
        assert_eq!(section(&plain_ctx(), "Most Worn"), "[most_worn]");
        let pretty = section(&pretty_ctx(), "Value");
        assert!(pretty.starts_with("Value\n"));
        assert!(pretty.contains("\u{2500}"));
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&plain_ctx(), "Cost Per Wear", "1.50"), "cost_per_wear=1.50");
        let line = kv(&pretty_ctx(), "Name", "Parka");
        assert!(line.contains("Name:"));
        assert!(line.contains("Parka"));
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_badge_ascii() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert_eq!(b, "[OK] Done");
    }

    #[test]
    fn test_bullet_ascii_and_unicode() {
        assert_eq!(bullet(&plain_ctx(), "x"), "  - x");
        assert!(bullet(&pretty_ctx(), "x").contains('\u{2022}'));
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let columns = [Column::new("ID"), Column::numeric("Wears")];
        let rows = vec![vec!["abc".to_string(), "3".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "abc\t3");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let columns = [Column::new("Name"), Column::numeric("Wears")];
        let rows = vec![vec!["Parka".to_string(), "12".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Name"));
        assert!(t.contains("Wears"));
        assert!(t.contains("Parka"));
    }

    #[test]
    fn test_simple_table_pretty_and_plain() {
        let columns = [Column::new("ID"), Column::new("Name")];
        let rows = vec![
            vec!["7a2e3c0b".to_string(), "Parka".to_string()],
            vec!["9b3f4d1c".to_string(), "Jeans".to_string()],
        ];
        let pretty = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(pretty.contains("ID"));
        assert!(pretty.contains("Jeans"));

        let plain = simple_table(&plain_ctx(), &columns, &rows);
        assert_eq!(plain.lines().count(), 2);
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Logged wear", &[("Wears", "4")]);
        assert!(r.contains("status=ok"));
        assert!(r.contains("wears=4"));
    }

    #[test]
    fn test_error_message_modes() {
        let e = error_message(&pretty_ctx(), "Garment not found", Some("Try again"));
        assert!(e.contains("[\u{2717}]"));
        assert!(e.contains("Hint:"));

        let plain = error_message(&plain_ctx(), "Garment not found", Some("Try again"));
        assert_eq!(plain, "error=Garment not found\nhint=Try again");
    }
}
