use crate::error::Result;
use log::info;
use std::fmt;
use std::path::Path;

pub(crate) const EDGE_WEIGHT_SECTION: &str = "EDGE_WEIGHT_SECTION";
pub(crate) const EOF_MARKER: &str = "EOF";

/// A rendered TSPLIB full-matrix problem.
///
/// Holds the lines of the file in order. The text form joins them with `\n`
/// and leaves the final `EOF` line unterminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsplibDocument {
    lines: Vec<String>,
    dimension: usize,
    section_start: usize,
}

impl TsplibDocument {
    pub(crate) fn new(header: Vec<String>, rows: Vec<String>, dimension: usize) -> Self {
        let section_start = header.len() + 1;
        let mut lines = header;
        lines.reserve(rows.len() + 2);
        lines.push(EDGE_WEIGHT_SECTION.to_string());
        lines.extend(rows);
        lines.push(EOF_MARKER.to_string());

        Self {
            lines,
            dimension,
            section_start,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of nodes declared in the `DIMENSION` header
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The data lines between `EDGE_WEIGHT_SECTION` and `EOF`
    pub fn edge_weight_rows(&self) -> &[String] {
        &self.lines[self.section_start..self.section_start + self.dimension]
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_string())?;
        info!(
            "TSPLIB problem saved: {} ({} nodes, {} lines)",
            path.display(),
            self.dimension,
            self.lines.len()
        );
        Ok(())
    }
}

impl fmt::Display for TsplibDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
