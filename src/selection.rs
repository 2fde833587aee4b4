//! Editor selections and their line anchors

use std::fmt;
use std::str::FromStr;

use crate::error::GhopenError;

/// Selected line range, 1-based. Either end may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorSelection {
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
}

impl EditorSelection {
    pub fn new(start_line: Option<u32>, end_line: Option<u32>) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    pub fn line(line: u32) -> Self {
        Self::new(Some(line), None)
    }

    pub fn range(start_line: u32, end_line: u32) -> Self {
        Self::new(Some(start_line), Some(end_line))
    }

    /// Whether neither end is set
    pub fn is_empty(&self) -> bool {
        self.start_line.is_none() && self.end_line.is_none()
    }

    /// URL fragment for this selection, `""` when no anchor applies
    pub fn anchor(&self) -> String {
        match (self.start_line, self.end_line) {
            (None, None) => String::new(),
            (Some(start), None) => format!("#L{start}"),
            (None, Some(end)) => format!("#L{end}"),
            (Some(start), Some(end)) if start == end => format!("#L{start}"),
            (Some(start), Some(end)) if start < end => format!("#L{start}-L{end}"),
            // Inverted ranges get no anchor
            (Some(_), Some(_)) => String::new(),
        }
    }
}

/// Format the line anchor for an optional selection.
///
/// ```
/// use ghopen::selection::{format_anchor, EditorSelection};
///
/// assert_eq!(format_anchor(None), "");
/// assert_eq!(format_anchor(Some(&EditorSelection::range(5, 9))), "#L5-L9");
/// ```
pub fn format_anchor(selection: Option<&EditorSelection>) -> String {
    selection.map(EditorSelection::anchor).unwrap_or_default()
}

impl fmt::Display for EditorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_line, self.end_line) {
            (Some(start), Some(end)) => write!(f, "{start}-{end}"),
            (Some(line), None) | (None, Some(line)) => write!(f, "{line}"),
            (None, None) => Ok(()),
        }
    }
}

/// Parses `N` or `N-M`, as accepted by `--lines`
impl FromStr for EditorSelection {
    type Err = GhopenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_line = |value: &str| -> Result<u32, GhopenError> {
            match value.trim().parse::<u32>() {
                Ok(line) if line > 0 => Ok(line),
                _ => Err(GhopenError::InvalidSelection {
                    message: format!("'{s}' is not a positive line number or range"),
                }),
            }
        };

        match s.split_once('-') {
            Some((start, end)) => Ok(Self::range(parse_line(start)?, parse_line(end)?)),
            None => Ok(Self::line(parse_line(s)?)),
        }
    }
}
