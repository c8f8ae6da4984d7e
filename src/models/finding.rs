//! Problems reported by the route checker.

use serde::Serialize;

/// Kind of a [`Finding`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Subnet literal is not a valid IPv4 CIDR network.
    Invalid,
    /// Two declared subnets share addresses.
    Overlap,
    /// Line is not a route, a comment or blank.
    Format,
}

/// One problem found in a route file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Invalid {
        /// The subnet literal as written in the file.
        literal: String,
        line_nr: usize,
        reason: String,
    },
    Overlap {
        /// The earlier subnet in sort order.
        a: String,
        a_line_nr: usize,
        b: String,
        b_line_nr: usize,
    },
    Format {
        /// The raw line text.
        line: String,
        line_nr: usize,
    },
}

impl Finding {
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::Invalid { .. } => FindingKind::Invalid,
            Finding::Overlap { .. } => FindingKind::Overlap,
            Finding::Format { .. } => FindingKind::Format,
        }
    }

    /// Subnet strings implicated by this finding (0, 1 or 2 entries).
    pub fn subnets(&self) -> Vec<String> {
        match self {
            Finding::Invalid { literal, .. } => vec![literal.clone()],
            Finding::Overlap { a, b, .. } => vec![a.clone(), b.clone()],
            Finding::Format { .. } => vec![],
        }
    }

    /// Line the finding points at. For an overlap this is the later subnet's line.
    pub fn line_nr(&self) -> usize {
        match self {
            Finding::Invalid { line_nr, .. } | Finding::Format { line_nr, .. } => *line_nr,
            Finding::Overlap { b_line_nr, .. } => *b_line_nr,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Finding::Invalid {
                literal,
                line_nr,
                reason,
            } => write!(
                f,
                "Invalid subnet {literal} on line number {line_nr}: {reason}"
            ),
            Finding::Overlap {
                a,
                a_line_nr,
                b,
                b_line_nr,
            } => write!(
                f,
                "Network {a} (line {a_line_nr}) overlaps {b} (line {b_line_nr})"
            ),
            Finding::Format { line, line_nr } => {
                write!(f, "Invalid line '{line}' on line number {line_nr}")
            }
        }
    }
}
