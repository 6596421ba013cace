use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

/// An inclusive range of code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
}

impl CodePointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }

    pub fn overlaps(&self, other: &CodePointRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Every valid `char` in the range, ascending. Surrogates are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        (self.start..=self.end).filter_map(char::from_u32)
    }

    /// Parse `HEX-HEX` or a single `HEX`.
    fn parse(text: &str, line: usize) -> std::result::Result<Self, ConfigError> {
        let bad = || ConfigError::BadRange {
            line,
            text: text.to_string(),
        };
        let hex = |s: &str| u32::from_str_radix(s.trim().trim_start_matches("U+"), 16).map_err(|_| bad());
        let (start, end) = match text.split_once('-') {
            Some((start, end)) => (hex(start)?, hex(end)?),
            None => {
                let single = hex(text)?;
                (single, single)
            }
        };
        if start > end {
            return Err(ConfigError::InvertedRange {
                line,
                text: text.to_string(),
            });
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}-{:X}", self.start, self.end)
    }
}

/// Which code points count as characters (table keys) and which as
/// components (allowed decomposition leaves).
///
/// Update the built-in table when Unicode adds new Tangut characters or
/// components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeConfig {
    /// Short identifier (e.g. "tangut").
    pub name: String,
    /// Human-readable script name used in messages (e.g. "Tangut").
    pub display_name: String,
    pub character_ranges: Vec<CodePointRange>,
    pub component_ranges: Vec<CodePointRange>,
}

impl RangeConfig {
    /// Built-in Tangut ranges.
    pub fn tangut() -> Self {
        Self {
            name: "tangut".to_string(),
            display_name: "Tangut".to_string(),
            character_ranges: vec![
                CodePointRange::new(0x17000, 0x187FF), // Tangut
                CodePointRange::new(0x18D00, 0x18D1E), // Tangut Supplement
            ],
            component_ranges: vec![
                CodePointRange::new(0x18800, 0x18AFF), // Tangut Components
                CodePointRange::new(0x18D80, 0x18DFF), // Tangut Components Supplement
            ],
        }
    }

    /// Load from a file, or fall back to the built-in Tangut ranges.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::tangut()),
        }
    }

    /// Load a range configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Ok(Self::parse_toml(&content)?)
    }

    pub fn is_character(&self, ch: char) -> bool {
        self.character_ranges.iter().any(|r| r.contains(ch as u32))
    }

    pub fn is_component(&self, ch: char) -> bool {
        self.component_ranges.iter().any(|r| r.contains(ch as u32))
    }

    pub(crate) fn parse_toml(content: &str) -> std::result::Result<Self, ConfigError> {
        let mut name = String::new();
        let mut display_name = String::new();
        let mut characters: Option<Vec<CodePointRange>> = None;
        let mut components: Option<Vec<CodePointRange>> = None;

        let mut section = String::new();

        for (i, line) in content.lines().enumerate() {
            let line_no = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            if let Some((key, value)) = trimmed.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                let unquoted = value.trim_matches('"');

                match (section.as_str(), key) {
                    ("ranges", "name") => name = unquoted.to_string(),
                    ("ranges", "display_name") => display_name = unquoted.to_string(),
                    ("ranges", "characters") => {
                        characters = Some(parse_range_array(value, line_no)?);
                    }
                    ("ranges", "components") => {
                        components = Some(parse_range_array(value, line_no)?);
                    }
                    _ => {}
                }
            }
        }

        let character_ranges = characters.ok_or(ConfigError::MissingKey("characters"))?;
        let component_ranges = components.ok_or(ConfigError::MissingKey("components"))?;
        if name.is_empty() {
            name = "custom".to_string();
        }
        if display_name.is_empty() {
            display_name = name.clone();
        }

        let config = Self {
            name,
            display_name,
            character_ranges,
            component_ranges,
        };
        config.check_disjoint()?;
        Ok(config)
    }

    fn check_disjoint(&self) -> std::result::Result<(), ConfigError> {
        for character in &self.character_ranges {
            for component in &self.component_ranges {
                if character.overlaps(component) {
                    return Err(ConfigError::Overlap {
                        character: character.to_string(),
                        component: component.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::tangut()
    }
}

/// Parse a one-line TOML string array of ranges: `["17000-187FF", "18D00"]`.
fn parse_range_array(value: &str, line: usize) -> std::result::Result<Vec<CodePointRange>, ConfigError> {
    let value = value.trim();
    if !value.starts_with('[') || !value.ends_with(']') {
        return Err(ConfigError::BadRange {
            line,
            text: value.to_string(),
        });
    }
    value[1..value.len() - 1]
        .split(',')
        .map(|part| part.trim().trim_matches('"'))
        .filter(|part| !part.is_empty())
        .map(|part| CodePointRange::parse(part, line))
        .collect()
}

#[cfg(test)]
mod tests;
