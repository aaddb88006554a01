// src/ingest/reader.rs
//! Record reader for two-column edge tables.

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, Trim};

use super::EdgeRecord;
use crate::config::{InputConfig, SourceColumn};
use crate::error::{RankError, Result};

/// Streams `EdgeRecord`s out of a delimited table.
///
/// Blank rows are ignored. When `has_header` is set, the first row is
/// skipped. Quoted fields may contain the delimiter or line breaks. Rows that
/// do not have exactly two columns, or that are not valid UTF-8, come back as
/// `MalformedRecord` errors; what to do with them is up to the graph builder.
pub struct EdgeReader<R> {
    inner: csv::Reader<R>,
    origin: PathBuf,
    source_column: SourceColumn,
    record: ByteRecord,
    done: bool,
}

impl<R: Read> EdgeReader<R> {
    /// `config.delimiter` must be ASCII; `Config::validate` enforces it.
    pub fn new(inner: R, origin: impl Into<PathBuf>, config: &InputConfig) -> Self {
        let delimiter = u8::try_from(config.delimiter).unwrap_or(b',');
        let inner = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(config.has_header)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(inner);
        Self {
            inner,
            origin: origin.into(),
            source_column: config.source_column,
            record: ByteRecord::new(),
            done: false,
        }
    }

    #[must_use]
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    fn current_line(&self) -> usize {
        self.record
            .position()
            .map_or(0, |p| usize::try_from(p.line()).unwrap_or(usize::MAX))
    }

    fn parse_record(&self) -> Result<EdgeRecord> {
        let line = self.current_line();
        if self.record.len() != 2 {
            return Err(RankError::MalformedRecord {
                line,
                reason: format!("expected 2 columns, found {}", self.record.len()),
            });
        }
        let field = |i: usize| {
            std::str::from_utf8(&self.record[i])
                .map(str::to_owned)
                .map_err(|_| RankError::MalformedRecord {
                    line,
                    reason: "invalid UTF-8".into(),
                })
        };
        let (first, second) = (field(0)?, field(1)?);
        let (source, target) = match self.source_column {
            SourceColumn::First => (first, second),
            SourceColumn::Second => (second, first),
        };
        Ok(EdgeRecord::new(line, source, target))
    }

    fn csv_error(&self, err: csv::Error) -> RankError {
        let line = err
            .position()
            .map_or(0, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => RankError::io(source, &self.origin),
            _ => RankError::MalformedRecord { line, reason },
        }
    }
}

impl<R: Read> Iterator for EdgeReader<R> {
    type Item = Result<EdgeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.inner.read_byte_record(&mut self.record) {
                Ok(false) => self.done = true,
                Ok(true) if self.record.iter().all(<[u8]>::is_empty) => {}
                Ok(true) => return Some(self.parse_record()),
                Err(e) => {
                    let err = self.csv_error(e);
                    self.done = matches!(err, RankError::Io { .. });
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, config: &InputConfig) -> Vec<Result<EdgeRecord>> {
        EdgeReader::new(text.as_bytes(), "mem.csv", config).collect()
    }

    #[test]
    fn test_skips_header_and_blank_lines() {
        let rows = read("from,to\n\na,b\n  \nb,c\n", &InputConfig::default());
        let rows: Vec<_> = rows.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 3);
        assert_eq!((rows[0].source.as_str(), rows[0].target.as_str()), ("a", "b"));
        assert_eq!(rows[1].line, 5);
    }

    #[test]
    fn test_no_header() {
        let config = InputConfig {
            has_header: false,
            ..InputConfig::default()
        };
        assert_eq!(read("a,b\n", &config).len(), 1);
    }

    #[test]
    fn test_second_column_is_source() {
        let config = InputConfig {
            source_column: SourceColumn::Second,
            ..InputConfig::default()
        };
        let rec = read("page,inlink\nrecipe,home\n", &config)
            .remove(0)
            .unwrap();
        assert_eq!(rec.source, "home");
        assert_eq!(rec.target, "recipe");
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let mut rows = read("h1,h2\nonly-one\n", &InputConfig::default());
        match rows.remove(0) {
            Err(RankError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        let rec = read("h1,h2\n\"https://x.io/a,b\",\"say \"\"hi\"\"\"\n", &InputConfig::default())
            .remove(0)
            .unwrap();
        assert_eq!(rec.source, "https://x.io/a,b");
        assert_eq!(rec.target, "say \"hi\"");
    }

    #[test]
    fn test_quoted_field_spans_lines() {
        let rows = read("from,to\n\"https://x.io/a\nb\",c\nc,d\n", &InputConfig::default());
        let rows: Vec<_> = rows.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].source, "https://x.io/a\nb");
        assert_eq!(rows[0].target, "c");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_invalid_utf8_row_is_malformed() {
        let config = InputConfig {
            has_header: false,
            ..InputConfig::default()
        };
        let bytes: &[u8] = b"a,b\ncaf\xe9,b\nb,a\n";
        let rows: Vec<_> = EdgeReader::new(bytes, "mem.csv", &config).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        match &rows[1] {
            Err(RankError::MalformedRecord { line, reason }) => {
                assert_eq!(*line, 2);
                assert_eq!(reason, "invalid UTF-8");
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
        assert!(rows[2].is_ok());
    }

    #[test]
    fn test_crlf_and_tab_delimiter() {
        let config = InputConfig {
            delimiter: '\t',
            ..InputConfig::default()
        };
        let rec = read("a\tb\r\nx\ty\r\n", &config).remove(0).unwrap();
        assert_eq!((rec.source.as_str(), rec.target.as_str()), ("x", "y"));
    }
}
