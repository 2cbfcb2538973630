//! Output rendering for a computed layout.
//!
//! Two formats:
//! - `json`: machine-readable column assignment for a rendering layer
//! - `text`: columns side by side for eyeballing balance in a terminal

use crate::layout::{Column, Distribution};
use crate::model::ContentItem;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";
const ELLIPSIS: char = '…';

/// Output format for the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Column assignment as JSON.
    #[default]
    Json,
    /// Side-by-side text preview.
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown format {other:?}, expected \"json\" or \"text\"")),
        }
    }
}

#[derive(Serialize)]
struct LayoutJson<'a> {
    columns: Vec<ColumnJson<'a>>,
    imbalance: u64,
}

#[derive(Serialize)]
struct ColumnJson<'a> {
    index: usize,
    height: u64,
    items: Vec<PlacementJson<'a>>,
}

#[derive(Serialize)]
struct PlacementJson<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
    height: u32,
}

impl<'a> From<&Column<'a, ContentItem>> for ColumnJson<'a> {
    fn from(column: &Column<'a, ContentItem>) -> Self {
        Self {
            index: column.index(),
            height: column.height(),
            items: column
                .placements()
                .iter()
                .map(|p| PlacementJson {
                    index: p.index,
                    key: p.item.key.as_deref(),
                    height: p.height,
                })
                .collect(),
        }
    }
}

/// Render a layout in the requested format.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<W: Write>(
    distribution: &Distribution<'_, ContentItem>,
    format: OutputFormat,
    column_width: usize,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(distribution, out),
        OutputFormat::Text => render_text(distribution, column_width, out),
    }
}

/// Write the layout as pretty-printed JSON followed by a newline.
pub fn render_json<W: Write>(
    distribution: &Distribution<'_, ContentItem>,
    out: &mut W,
) -> io::Result<()> {
    let json = LayoutJson {
        columns: distribution.columns().iter().map(ColumnJson::from).collect(),
        imbalance: distribution.imbalance(),
    };
    serde_json::to_writer_pretty(&mut *out, &json).map_err(io::Error::from)?;
    writeln!(out)
}

/// Write the columns side by side, one placement per row.
///
/// The first row holds `[index] heightpx` per column, followed by a rule.
/// Cells are `#index label (height)`, cut to `column_width` cells.
pub fn render_text<W: Write>(
    distribution: &Distribution<'_, ContentItem>,
    column_width: usize,
    out: &mut W,
) -> io::Result<()> {
    let columns = distribution.columns();

    let header: Vec<String> = columns
        .iter()
        .map(|column| format!("[{}] {}px", column.index(), column.height()))
        .collect();
    write_row(out, &header, column_width)?;

    let rule = vec!["-".repeat(column_width); columns.len()].join(RULE_SEPARATOR);
    writeln!(out, "{rule}")?;

    let rows = columns.iter().map(Column::len).max().unwrap_or(0);
    for row in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                column
                    .placements()
                    .get(row)
                    .map(|p| format!("#{} {} ({})", p.index, label(p.item), p.height))
                    .unwrap_or_default()
            })
            .collect();
        write_row(out, &cells, column_width)?;
    }

    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String], width: usize) -> io::Result<()> {
    let line = cells
        .iter()
        .map(|cell| fit(cell, width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    writeln!(out, "{}", line.trim_end())
}

fn label(item: &ContentItem) -> &str {
    item.key
        .as_deref()
        .or(item.title.as_deref())
        .unwrap_or("-")
}

/// Pad or cut `text` to exactly `width` terminal cells.
fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    if width > 0 {
        cut.push(ELLIPSIS);
        used += 1;
    }
    cut.push_str(&" ".repeat(width.saturating_sub(used)));
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColumnDistributor;

    fn render_to_string(
        items: &[ContentItem],
        columns: usize,
        format: OutputFormat,
        width: usize,
    ) -> String {
        let dist = ColumnDistributor::default()
            .distribute(items, columns)
            .unwrap();
        let mut buf = Vec::new();
        render(&dist, format, width, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_output_lists_columns_and_imbalance() {
        let items = vec![
            ContentItem::new().with_key("a").with_class("featured"),
            ContentItem::new().with_class("text-only"),
        ];
        let out = render_to_string(&items, 2, OutputFormat::Json, 20);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["imbalance"], 170);
        assert_eq!(value["columns"][0]["height"], 350);
        assert_eq!(value["columns"][0]["items"][0]["key"], "a");
        assert_eq!(value["columns"][1]["items"][0]["index"], 1);
        assert!(
            value["columns"][1]["items"][0].get("key").is_none(),
            "Missing keys should be omitted"
        );
    }

    #[test]
    fn text_output_places_columns_side_by_side() {
        let items = vec![
            ContentItem::new().with_key("a").with_class("featured"),
            ContentItem::new().with_key("b"),
        ];
        let out = render_to_string(&items, 2, OutputFormat::Text, 12);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec![
                "[0] 350px    | [1] 180px",
                "-------------+-------------",
                "#0 a (350)   | #1 b (180)",
            ]
        );
    }

    #[test]
    fn text_output_leaves_short_columns_blank() {
        let items = vec![
            ContentItem::new().with_key("a").with_height(500),
            ContentItem::new().with_key("b"),
            ContentItem::new().with_key("c"),
        ];
        let out = render_to_string(&items, 2, OutputFormat::Text, 10);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with(&" ".repeat(10)));
        assert!(lines[3].ends_with("#2 c (180)"));
    }

    #[test]
    fn text_output_falls_back_to_title_then_dash() {
        let items = vec![
            ContentItem::new().with_title("Headline"),
            ContentItem::new(),
        ];
        let out = render_to_string(&items, 1, OutputFormat::Text, 30);

        assert!(out.contains("#0 Headline (180)"));
        assert!(out.contains("#1 - (180)"));
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit("ab", 4), "ab  ");
    }

    #[test]
    fn fit_cuts_long_text_with_ellipsis() {
        assert_eq!(fit("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn fit_respects_wide_characters() {
        assert_eq!(fit("日本語テキスト", 5), "日本…");
        assert_eq!(fit("日本", 3), "日…");
    }

    #[test]
    fn fit_zero_width_is_empty() {
        assert_eq!(fit("abc", 0), "");
    }
}
