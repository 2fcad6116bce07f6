//! # Structure Scanner
//!
//! Extracts resource-path and verb declarations from the route section of
//! an OpenAPI-style YAML document without a YAML parser.
//!
//! ## Recognized Shape
//!
//! ```yaml
//! paths:              # section marker, any indentation
//!   /_api/healthz:    # path key: 2+ spaces, starts with '/'
//!     get:            # verb key: 4+ spaces, recognized verb
//!       summary: ...  # anything else is ignored
//! components:         # column-0 key ends the section
//! ```
//!
//! The scanner is a three-state machine (`SeekingSection`, `InSection`,
//! `Done`) fed one line at a time. It is sensitive to indentation: path
//! keys need at least two leading spaces, verb keys at least four. Full
//! YAML (flow mappings, anchors, quoted keys, multiple documents) is not
//! understood and those constructs are silently skipped.
//!
//! ## Guarantees
//!
//! - Never fails. Malformed input yields a partial or empty mapping.
//! - Pure: the same text always yields an equal [`DeclaredMapping`].
//! - A path key that appears twice merges its verbs into one set.

use apiguard_core::{DeclaredMapping, ResourcePath, Verb};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// `  /some/path:` with at least two leading spaces and no inner colon.
    static ref PATH_LINE: Regex =
        Regex::new(r"^\s{2,}(\S[^:]*):\s*$").expect("path line pattern is valid");

    /// `    get:` with at least four leading spaces.
    static ref VERB_LINE: Regex =
        Regex::new(r"(?i)^\s{4,}(get|post|put|patch|delete|options|head):\s*$")
            .expect("verb line pattern is valid");

    /// Any column-0 line starting with an ASCII word character.
    static ref SIBLING_KEY: Regex =
        Regex::new(r"^[A-Za-z0-9_]").expect("sibling key pattern is valid");
}

const BOM: char = '\u{feff}';

/// Where the section marker was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionMarker {
    /// 1-based line number of the marker.
    pub line: usize,
    /// Count of leading whitespace characters before the marker key.
    pub indent: usize,
}

/// Why scanning stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// Input exhausted.
    EndOfInput,
    /// A column-0 key following the section.
    SiblingKey {
        /// 1-based line number of the sibling key.
        line: usize,
        /// The sibling line with trailing whitespace removed.
        key: String,
    },
}

/// Mapping plus diagnostics from one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Declared paths and their verbs.
    pub mapping: DeclaredMapping,
    /// `None` when the section marker never appeared.
    pub section: Option<SectionMarker>,
    /// How scanning ended.
    pub termination: Termination,
    /// Lines consumed, including the terminating sibling line.
    pub lines_scanned: usize,
}

impl ScanReport {
    pub fn section_found(&self) -> bool {
        self.section.is_some()
    }
}

enum ScanState {
    SeekingSection,
    InSection { current_path: Option<ResourcePath> },
    Done,
}

/// Line-oriented extractor for one named top-level section.
#[derive(Debug, Clone)]
pub struct StructureScanner {
    section: String,
    marker: String,
}

impl StructureScanner {
    /// Section key used by OpenAPI documents for route declarations.
    pub const DEFAULT_SECTION: &'static str = "paths";

    /// Create a scanner for the section keyed `section`.
    pub fn new(section: impl Into<String>) -> Self {
        let section = section.into();
        let marker = format!("{section}:");
        Self { section, marker }
    }

    /// The section key this scanner looks for.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Extract the declared mapping from `text`.
    pub fn scan(&self, text: &str) -> DeclaredMapping {
        self.scan_report(text).mapping
    }

    /// Extract the declared mapping together with scan diagnostics.
    pub fn scan_report(&self, text: &str) -> ScanReport {
        let mut report = ScanReport {
            mapping: DeclaredMapping::new(),
            section: None,
            termination: Termination::EndOfInput,
            lines_scanned: 0,
        };
        let mut state = ScanState::SeekingSection;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            report.lines_scanned = line_no;

            state = match state {
                ScanState::SeekingSection => self.seek_marker(line, line_no, &mut report),
                ScanState::InSection { current_path } => {
                    scan_section_line(line, line_no, current_path, &mut report)
                }
                ScanState::Done => ScanState::Done,
            };

            if matches!(state, ScanState::Done) {
                break;
            }
        }

        match &report.section {
            Some(marker) => tracing::debug!(
                section = %self.section,
                marker_line = marker.line,
                paths = report.mapping.len(),
                operations = report.mapping.operation_count(),
                "scanned route section"
            ),
            None => tracing::debug!(
                section = %self.section,
                lines = report.lines_scanned,
                "section marker not found"
            ),
        }

        report
    }

    fn seek_marker(&self, line: &str, line_no: usize, report: &mut ScanReport) -> ScanState {
        // A byte-order mark counts as leading whitespace.
        let padding = |c: char| c.is_whitespace() || c == BOM;
        if line.trim_matches(padding) != self.marker {
            return ScanState::SeekingSection;
        }
        let indent = line.chars().take_while(|&c| padding(c)).count();
        tracing::trace!(line = line_no, indent, "entered section");
        report.section = Some(SectionMarker { line: line_no, indent });
        ScanState::InSection { current_path: None }
    }
}

impl Default for StructureScanner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SECTION)
    }
}

/// Advance the machine by one line inside the section.
fn scan_section_line(
    line: &str,
    line_no: usize,
    current_path: Option<ResourcePath>,
    report: &mut ScanReport,
) -> ScanState {
    if line.trim().is_empty() {
        return ScanState::InSection { current_path };
    }

    if SIBLING_KEY.is_match(line) {
        tracing::trace!(line = line_no, "section closed by sibling key");
        report.termination = Termination::SiblingKey {
            line: line_no,
            key: line.trim_end().to_string(),
        };
        return ScanState::Done;
    }

    if let Some(caps) = PATH_LINE.captures(line) {
        let token = caps[1].trim();
        if token.starts_with('/') {
            return match ResourcePath::new(token) {
                Ok(path) => {
                    tracing::trace!(line = line_no, path = %path, "path declared");
                    report.mapping.declare_path(path.clone());
                    ScanState::InSection {
                        current_path: Some(path),
                    }
                }
                Err(_) => ScanState::InSection { current_path },
            };
        }
    }

    if let Some(path) = &current_path {
        if let Some(caps) = VERB_LINE.captures(line) {
            if let Ok(verb) = caps[1].parse::<Verb>() {
                tracing::trace!(line = line_no, path = %path, verb = %verb, "verb declared");
                report.mapping.declare_verb(path, verb);
            }
        }
    }

    ScanState::InSection { current_path }
}

/// Scan `text` for the default `paths` section.
pub fn scan(text: &str) -> DeclaredMapping {
    StructureScanner::default().scan(text)
}
