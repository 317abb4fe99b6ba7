use std::fmt;

/// One row of a failed comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowReport {
    pub result: String,
    pub expected: String,
    /// First column where the two rows disagree.
    pub first_diff: Option<usize>,
}

/// A fixture whose result differs from its expected rows.
///
/// Displays as the side-by-side table:
///
/// ```text
/// Failed test case #1:
///
///   RESULT | EXPECTED | STATUS
///   ...    | ...      | OK.
///   ..#    | ...      | Column 2 differs.
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureMismatch {
    pub index: usize,
    pub name: String,
    pub width: usize,
    pub rows: Vec<RowReport>,
}

impl FixtureMismatch {
    pub fn new(index: usize, name: &str, result: &[String], expected: &[String]) -> Self {
        let rows = result
            .iter()
            .zip(expected)
            .map(|(r, e)| RowReport {
                result: r.clone(),
                expected: e.clone(),
                first_diff: r.chars().zip(e.chars()).position(|(a, b)| a != b),
            })
            .collect();
        let width = result.first().map(|r| r.chars().count()).unwrap_or(0);
        Self {
            index,
            name: name.to_string(),
            width,
            rows,
        }
    }

    /// (row, column) of the first differing cell.
    pub fn first_difference(&self) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(i, r)| r.first_diff.map(|c| (i, c)))
    }
}

fn header(label: &str, width: usize) -> String {
    format!("{:<width$}", label, width = width)
        .chars()
        .take(width)
        .collect()
}

impl fmt::Display for FixtureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Failed test case #{}:", self.index)?;
        writeln!(f)?;
        writeln!(
            f,
            "  {} | {} | STATUS",
            header("RESULT", self.width),
            header("EXPECTED", self.width)
        )?;
        for row in &self.rows {
            match row.first_diff {
                Some(col) => writeln!(
                    f,
                    "  {} | {} | Column {} differs.",
                    row.result, row.expected, col
                )?,
                None => writeln!(f, "  {} | {} | OK.", row.result, row.expected)?,
            }
        }
        Ok(())
    }
}
