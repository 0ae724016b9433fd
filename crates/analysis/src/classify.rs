//! Topology calls for tree blocks.
//!
//! In matrix representation each internal node of a tree becomes a binary
//! column over the taxa. With taxa ordered A, B, C, outgroup, the node
//! grouping two of A, B, C reads:
//!
//! | pattern | clade    | call   |
//! |---------|----------|--------|
//! | `0011`  | `(A,B)`  | True   |
//! | `0110`  | `(B,C)`  | Hybrid |
//! | `0101`  | `(A,C)`  | Wrong  |
//!
//! A block with no resolved node is a Star tree.

use crate::aggregate::Summary;
use crate::blocks::TreeBlockReader;
use crate::errors::ClassifyError;
use crate::records::{ClassificationRecord, CsvWriter, SummaryRecord};
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tripsim_sim::simulation::TreeKey;

// Lines arrive without their newline, so `node` at the end of a line counts.
static NODE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"node(?:[^a-zA-Z]|$)").unwrap());

/// Topology recovered for one tree block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeType {
    True,
    Hybrid,
    Wrong,
    Star,
}

impl TreeType {
    /// All calls in indicator column order.
    pub const ALL: [TreeType; 4] = [Self::True, Self::Hybrid, Self::Wrong, Self::Star];

    /// One-letter code used in the `tree_type` column.
    pub const fn code(self) -> char {
        match self {
            Self::True => 'T',
            Self::Hybrid => 'H',
            Self::Wrong => 'W',
            Self::Star => 'S',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(Self::True),
            "H" => Some(Self::Hybrid),
            "W" => Some(Self::Wrong),
            "S" => Some(Self::Star),
            _ => None,
        }
    }

    /// Position in `ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `(True, Hybrid, Wrong, Star)` with a single 1.
    pub fn indicators(self) -> [u8; 4] {
        let mut out = [0; 4];
        out[self.index()] = 1;
        out
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::Hybrid => "Hybrid",
            Self::Wrong => "Wrong",
            Self::Star => "Star",
        }
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Call the topology of one block.
///
/// Only the first line that looks like a node line is inspected; if it holds
/// none of the known patterns the tree is a Star even when later lines do.
pub fn classify_block<S: AsRef<str>>(lines: &[S]) -> TreeType {
    let Some(line) = lines.iter().map(AsRef::as_ref).find(|l| NODE_LINE.is_match(l)) else {
        return TreeType::Star;
    };
    if line.contains("0011") {
        TreeType::True
    } else if line.contains("0110") {
        TreeType::Hybrid
    } else if line.contains("0101") {
        TreeType::Wrong
    } else {
        TreeType::Star
    }
}

/// Result of classifying a whole dump.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOutcome {
    /// Blocks paired with a key and written out
    pub classified: usize,
    /// Blocks left over after the last key
    pub extra_blocks: usize,
    /// Calls per type, in `TreeType::ALL` order
    pub counts: [u64; 4],
    pub summary: Vec<SummaryRecord>,
}

/// Classify blocks from `input`, pairing them with `keys` in order.
///
/// One CSV row per key is written to `out`. `on_tree` is called after each
/// row. If the input has fewer blocks than keys the rows written so far are
/// flushed and [`ClassifyError::Truncated`] is returned.
pub fn classify_trees<R, W, F>(
    input: R,
    keys: &[TreeKey],
    out: W,
    mut on_tree: F,
) -> Result<ClassifyOutcome, ClassifyError>
where
    R: BufRead,
    W: Write,
    F: FnMut(usize),
{
    let mut blocks = TreeBlockReader::new(input);
    let mut writer = CsvWriter::<_, ClassificationRecord>::new(out)?;
    let mut summary = Summary::default();
    let mut outcome = ClassifyOutcome::default();

    for (i, key) in keys.iter().enumerate() {
        let block = match blocks.next() {
            Some(block) => block?,
            None => {
                writer.flush()?;
                return Err(ClassifyError::Truncated {
                    expected: keys.len(),
                    found: i,
                });
            }
        };
        let record = ClassificationRecord {
            key: key.clone(),
            tree_type: classify_block(&block),
        };
        writer.write(&record)?;
        summary.add(&record);
        outcome.counts[record.tree_type.index()] += 1;
        outcome.classified += 1;
        on_tree(i);
    }
    writer.flush()?;

    for block in blocks {
        block?;
        outcome.extra_blocks += 1;
    }
    if outcome.extra_blocks > 0 {
        log::warn!(
            "{} tree blocks beyond the {} expected were ignored",
            outcome.extra_blocks,
            keys.len()
        );
    }

    outcome.summary = summary.into_records();
    Ok(outcome)
}

/// Output path for a dump: the input with its extension replaced by `.out`.
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension("out")
}

/// Summary path for a classification file: `{stem}_summary.csv` beside it.
pub fn summary_path(output: impl AsRef<Path>) -> PathBuf {
    let output = output.as_ref();
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{stem}_summary.csv"))
}

/// Classify the dump at `input` into [`output_path`]`(input)`.
pub fn classify_file<F: FnMut(usize)>(
    input: impl AsRef<Path>,
    keys: &[TreeKey],
    on_tree: F,
) -> Result<(PathBuf, ClassifyOutcome), ClassifyError> {
    let input = input.as_ref();
    let output = output_path(input);
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(&output)?);
    log::info!("classifying {} -> {}", input.display(), output.display());
    let outcome = classify_trees(reader, keys, writer, on_tree)?;
    Ok((output, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(partition: &str, og_time: u32) -> TreeKey {
        TreeKey {
            mu: 0.001,
            mya: 2.5,
            depth: 0.5,
            introgression_proportion: 0.0,
            partition: partition.to_string(),
            og_time,
        }
    }

    #[test]
    fn test_hybrid_node() {
        let t = classify_block(&["node:0110"]);
        assert_eq!(t, TreeType::Hybrid);
        assert_eq!(t.indicators(), [0, 1, 0, 0]);
    }

    #[test]
    fn test_no_node_line_is_star() {
        let t = classify_block(&["Begin trees;", "tree 1 = [&U] (1,2,3,4);"]);
        assert_eq!(t, TreeType::Star);
        assert_eq!(t.indicators(), [0, 0, 0, 1]);
        assert_eq!(classify_block::<&str>(&[]), TreeType::Star);
    }

    #[test]
    fn test_pattern_priority() {
        assert_eq!(classify_block(&["node 1 0110 0011"]), TreeType::True);
        assert_eq!(classify_block(&["node 1 0101 0110"]), TreeType::Hybrid);
        assert_eq!(classify_block(&["node 1 0101"]), TreeType::Wrong);
    }

    #[test]
    fn test_first_node_line_decides() {
        let lines = ["node 1 1111", "node 2 0011"];
        assert_eq!(classify_block(&lines), TreeType::Star);
    }

    #[test]
    fn test_node_must_not_be_followed_by_letter() {
        assert_eq!(classify_block(&["nodes 0011", "x"]), TreeType::Star);
        assert_eq!(classify_block(&["nodes 0011", "node_2 0101"]), TreeType::Wrong);
    }

    #[test]
    fn test_node_at_end_of_line_is_a_node_line() {
        assert_eq!(classify_block(&["0011 node", "node 2 0101"]), TreeType::True);
        // the bare line decides, so the later pattern is never reached
        assert_eq!(classify_block(&["node", "node 2 0011"]), TreeType::Star);
    }

    #[test]
    fn test_codes() {
        for t in TreeType::ALL {
            assert_eq!(TreeType::from_code(&t.code().to_string()), Some(t));
        }
        assert_eq!(TreeType::from_code("X"), None);
        assert_eq!(TreeType::Wrong.to_string(), "W");
    }

    #[test]
    fn test_classify_trees_writes_rows() {
        let input = "node 1 0011\nEnd;\nnode 1 0101\nEnd;\n";
        let keys = [key("0", 2), key("1", 2)];
        let mut out = Vec::new();
        let mut seen = Vec::new();
        let outcome = classify_trees(input.as_bytes(), &keys, &mut out, |i| seen.push(i)).unwrap();

        assert_eq!(seen, vec![0, 1]);
        assert_eq!(outcome.classified, 2);
        assert_eq!(outcome.extra_blocks, 0);
        assert_eq!(outcome.counts, [1, 0, 1, 0]);
        assert_eq!(outcome.summary.len(), 1);
        assert_eq!(outcome.summary[0].counts(), [1, 0, 1, 0]);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "mu,mya,depth,introgression_proportion,partition,og_time,tree_type,True,Hybrid,Wrong,Star",
                "0.001,2.5,0.5,0.0,0,2,T,1,0,0,0",
                "0.001,2.5,0.5,0.0,1,2,W,0,0,1,0",
            ]
        );
    }

    #[test]
    fn test_truncated_input_keeps_written_rows() {
        let input = "node 1 0011\nEnd;\n";
        let keys = [key("0", 2), key("0", 5), key("0", 10)];
        let mut out = Vec::new();
        let err = classify_trees(input.as_bytes(), &keys, &mut out, |_| {}).unwrap_err();
        assert!(matches!(err, ClassifyError::Truncated { expected: 3, found: 1 }));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_extra_blocks_are_counted() {
        let input = "End;\nEnd;\nnode 0110\n";
        let keys = [key("0", 2)];
        let outcome = classify_trees(input.as_bytes(), &keys, Vec::new(), |_| {}).unwrap();
        assert_eq!(outcome.classified, 1);
        assert_eq!(outcome.extra_blocks, 2);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("runs/simdump_3.mrp"), PathBuf::from("runs/simdump_3.out"));
        assert_eq!(
            summary_path("runs/simdump_3.out"),
            PathBuf::from("runs/simdump_3_summary.csv")
        );
    }
}
