// src/reporting/format.rs
//! Plain renderings of a ranking for files and pipes.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::rank::RankedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `(position) PageRank: score  Link: identifier`
    #[default]
    Text,
    /// `position,identifier,score` with a header row.
    Csv,
    /// Pretty-printed array of entries.
    Json,
}

/// Renders entries without color.
///
/// # Errors
/// Returns error if CSV or JSON serialization fails.
pub fn render(entries: &[RankedEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries)),
        OutputFormat::Csv => render_csv(entries),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)? + "\n"),
    }
}

fn render_text(entries: &[RankedEntry]) -> String {
    let width = entries.len().to_string().len();
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "({:>width$}) PageRank: {:.10}  Link: {}",
            e.position, e.score, e.identifier
        );
    }
    out
}

fn render_csv(entries: &[RankedEntry]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["position", "identifier", "score"])?;
    for e in entries {
        wtr.write_record([
            e.position.to_string().as_str(),
            e.identifier.as_str(),
            e.score.to_string().as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<RankedEntry> {
        vec![
            RankedEntry {
                position: 1,
                identifier: "https://tasty.co/recipe/a".into(),
                score: 0.5,
            },
            RankedEntry {
                position: 2,
                identifier: "odd,\"name\"".into(),
                score: 0.25,
            },
        ]
    }

    #[test]
    fn test_csv_quotes_when_needed() {
        let csv = render(&entries(), OutputFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "position,identifier,score");
        assert_eq!(lines[1], "1,https://tasty.co/recipe/a,0.5");
        assert_eq!(lines[2], "2,\"odd,\"\"name\"\"\",0.25");
    }

    #[test]
    fn test_csv_reads_back_multiline_identifier() {
        let entries = vec![RankedEntry {
            position: 1,
            identifier: "https://x.io/a\nb".into(),
            score: 1.0,
        }];
        let out = render(&entries, OutputFormat::Csv).unwrap();
        let mut rdr = csv::Reader::from_reader(out.as_bytes());
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "https://x.io/a\nb");
    }

    #[test]
    fn test_text_lists_positions() {
        let text = render(&entries(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("(1) PageRank: 0.5000000000  Link: https://tasty.co/recipe/a"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_json_array() {
        let json = render(&entries(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1]["position"], 2);
        assert_eq!(parsed[0]["identifier"], "https://tasty.co/recipe/a");
    }
}
