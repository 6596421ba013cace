//! Tab-separated IDS tables.
//!
//! One record per line: `<HEX>\t<char>\t<ids>`. Lines with any other number
//! of fields are not records and are ignored. The hex field is never trusted
//! on read and always recomputed on write.


use std::collections::HashMap;
use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::error::{ParseError, TableError};
use crate::ids::{parse, Ids};
use crate::span::Span;
use crate::trace::debug;

const BOM: char = '\u{FEFF}';

/// An insertion-ordered map from character to value.
///
/// Inserting an existing key replaces its value in place.
#[derive(Clone, Debug)]
pub struct Table<V> {
    entries: Vec<(char, V)>,
    index: HashMap<char, usize>,
}

/// Parsed decompositions.
pub type IdsTable = Table<Ids>;

/// Unparsed IDS strings, as stored on disk.
pub type RawTable = Table<String>;

impl<V> Table<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace; returns the previous value for `key`.
    pub fn insert(&mut self, key: char, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: char) -> Option<&V> {
        self.index.get(&key).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: char) -> Option<&mut V> {
        let i = *self.index.get(&key)?;
        Some(&mut self.entries[i].1)
    }

    pub fn contains_key(&self, key: char) -> bool {
        self.index.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&char, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Mutable access to values; keys and order stay fixed.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&char, &mut V)> {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Reorder entries by ascending code point.
    pub fn sort_by_code_point(&mut self) {
        self.entries.sort_by_key(|(k, _)| *k);
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (*k, i))
            .collect();
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(char, V)> for Table<V> {
    fn from_iter<I: IntoIterator<Item = (char, V)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// `U+` notation used in messages, unpadded.
pub fn format_code_point(ch: char) -> String {
    format!("U+{:X}", ch as u32)
}

/// One three-field line of a table file, borrowed from the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<'src> {
    /// 1-based line number.
    pub line: usize,
    pub key_field: &'src str,
    pub ids_field: &'src str,
    pub key_span: Span,
    pub ids_span: Span,
}

/// Split `source` into records, skipping lines that are not three fields.
pub fn records(source: &str) -> Vec<Record<'_>> {
    let mut out = Vec::new();
    let mut offset = 0;
    let body = match source.strip_prefix(BOM) {
        Some(rest) => {
            offset = BOM.len_utf8();
            rest
        }
        None => source,
    };

    for (i, raw_line) in body.split('\n').enumerate() {
        let line_start = offset;
        offset += raw_line.len() + 1;

        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            continue;
        }
        let key_start = line_start + fields[0].len() + 1;
        let ids_start = key_start + fields[1].len() + 1;
        out.push(Record {
            line: i + 1,
            key_field: fields[1],
            ids_field: fields[2],
            key_span: Span::from_range(key_start..key_start + fields[1].len()),
            ids_span: Span::from_range(ids_start..ids_start + fields[2].len()),
        });
    }
    out
}

/// A line that looked like a record but could not be used.
#[derive(Clone, Debug)]
pub struct SkippedRecord {
    pub line: usize,
    pub error: TableError,
    pub diagnostic: Diagnostic,
}

/// A table plus the records that were left out of it.
#[derive(Clone, Debug)]
pub struct ParsedTable<V> {
    pub table: Table<V>,
    pub skipped: Vec<SkippedRecord>,
}

impl<V> ParsedTable<V> {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn record_key(record: &Record<'_>) -> Result<char, SkippedRecord> {
    let mut chars = record.key_field.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => {
            let error = TableError::BadKey(record.key_field.to_string());
            let diagnostic = Diagnostic::error(error.to_string(), record.key_span)
                .with_note(format!("line {}", record.line));
            debug!(line = record.line, field = record.key_field, "skipping record with bad key");
            Err(SkippedRecord {
                line: record.line,
                error,
                diagnostic,
            })
        }
    }
}

/// Read a table keeping IDS fields as text.
pub fn parse_raw_table(source: &str) -> ParsedTable<String> {
    let mut table = RawTable::new();
    let mut skipped = Vec::new();
    for record in records(source) {
        match record_key(&record) {
            Ok(key) => {
                table.insert(key, record.ids_field.to_string());
            }
            Err(skip) => skipped.push(skip),
        }
    }
    ParsedTable { table, skipped }
}

/// Read a table, parsing every IDS field.
///
/// A record whose IDS does not parse is left out and reported; the rest of
/// the file is still read.
pub fn parse_ids_table(source: &str) -> ParsedTable<Ids> {
    let mut table = IdsTable::new();
    let mut skipped = Vec::new();
    for record in records(source) {
        let key = match record_key(&record) {
            Ok(key) => key,
            Err(skip) => {
                skipped.push(skip);
                continue;
            }
        };
        match parse(record.ids_field) {
            Ok(ids) => {
                table.insert(key, ids);
            }
            Err(error) => skipped.push(
                bad_ids(&record, key, error).with_help("the record is left out of the output"),
            ),
        }
    }
    ParsedTable { table, skipped }
}

/// Read a table keeping IDS fields as text, and report the values that do
/// not parse without leaving them out.
///
/// Returns the table (with records that have a bad key skipped) and the
/// kept-but-invalid records.
pub fn parse_raw_table_checked(source: &str) -> (ParsedTable<String>, Vec<SkippedRecord>) {
    let mut table = RawTable::new();
    let mut skipped = Vec::new();
    let mut invalid = Vec::new();
    for record in records(source) {
        let key = match record_key(&record) {
            Ok(key) => key,
            Err(skip) => {
                skipped.push(skip);
                continue;
            }
        };
        if let Err(error) = parse(record.ids_field) {
            invalid.push(bad_ids(&record, key, error).with_help("the value is written back unchanged"));
        }
        table.insert(key, record.ids_field.to_string());
    }
    (ParsedTable { table, skipped }, invalid)
}

fn bad_ids(record: &Record<'_>, key: char, source: ParseError) -> SkippedRecord {
    let range = source.byte_range(record.ids_field);
    let span = if range.is_empty() {
        record.ids_span
    } else {
        Span::from_range(range).offset(record.ids_span.start as usize)
    };
    let error = TableError::BadIds {
        character: key,
        code_point: format_code_point(key),
        ids: record.ids_field.to_string(),
        source,
    };
    debug!(line = record.line, "{}", error);
    let diagnostic =
        Diagnostic::error(error.to_string(), span).with_note(format!("line {}", record.line));
    SkippedRecord {
        line: record.line,
        error,
        diagnostic,
    }
}

impl SkippedRecord {
    fn with_help(mut self, help: &str) -> Self {
        self.diagnostic = self.diagnostic.with_help(help.to_string());
        self
    }
}

/// Output framing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Prefix the file with U+FEFF.
    pub bom: bool,
}

/// Serialize a table, one `<HEX>\t<char>\t<value>\n` line per entry.
pub fn format_table<V: fmt::Display>(table: &Table<V>, options: WriteOptions) -> String {
    let mut out = String::new();
    if options.bom {
        out.push(BOM);
    }
    for (key, value) in table.iter() {
        out.push_str(&format!("{:X}\t{}\t{}\n", *key as u32, key, value));
    }
    out
}
