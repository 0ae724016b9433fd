//! Run manifests.
//!
//! The tree dump written by PAUP* carries no parameter values, so trees can
//! only be matched to grid points by position. A manifest records, next to
//! each batch file, the key of every tree the batch will produce in the order
//! it will be appended. The classifier reads it back instead of rebuilding the
//! grid, so both sides always agree on the order.

use crate::errors::ManifestError;
use crate::io::FloatText;
use crate::simulation::TreeKey;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub const MANIFEST_HEADER: &str =
    "tree_index,mu,mya,depth,introgression_proportion,partition,og_time";

/// Streaming manifest writer.
pub struct ManifestWriter<W: Write> {
    out: W,
    next_index: usize,
}

impl<W: Write> ManifestWriter<W> {
    /// Create a writer and emit the header line.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{MANIFEST_HEADER}")?;
        Ok(Self { out, next_index: 0 })
    }

    pub fn write_key(&mut self, key: &TreeKey) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{},{},{}",
            self.next_index,
            FloatText(key.mu),
            FloatText(key.mya),
            FloatText(key.depth),
            FloatText(key.introgression_proportion),
            key.partition,
            key.og_time
        )?;
        self.next_index += 1;
        Ok(())
    }

    /// Number of keys written so far.
    pub fn written(&self) -> usize {
        self.next_index
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Read every key of a manifest file, in order.
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Vec<TreeKey>, ManifestError> {
    parse_manifest(BufReader::new(File::open(path)?))
}

/// Parse manifest text from any reader.
pub fn parse_manifest<R: BufRead>(reader: R) -> Result<Vec<TreeKey>, ManifestError> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.unwrap_or_default();
    if header.trim() != MANIFEST_HEADER {
        return Err(ManifestError::Header(header));
    }

    let mut keys = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = i + 2;
        let key = parse_row(&line).map_err(|reason| ManifestError::Malformed {
            line: line_no,
            reason,
        })?;
        keys.push(key);
    }
    Ok(keys)
}

fn parse_row(line: &str) -> Result<TreeKey, String> {
    let fields: Vec<&str> = line.trim_end().split(',').collect();
    if fields.len() != 7 {
        return Err(format!("expected 7 fields, found {}", fields.len()));
    }
    let float = |i: usize, name: &str| -> Result<f64, String> {
        fields[i]
            .parse::<f64>()
            .map_err(|e| format!("invalid {name} '{}': {e}", fields[i]))
    };
    Ok(TreeKey {
        mu: float(1, "mu")?,
        mya: float(2, "mya")?,
        depth: float(3, "depth")?,
        introgression_proportion: float(4, "introgression_proportion")?,
        partition: fields[5].to_string(),
        og_time: fields[6]
            .parse()
            .map_err(|e| format!("invalid og_time '{}': {e}", fields[6]))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ParameterGrid;

    fn grid() -> ParameterGrid {
        ParameterGrid {
            mu_values: vec![0.00025],
            mya_values: vec![2.5, 5.0],
            depth_values: vec![0.75],
            introgression_proportions: vec![0.0, 0.031],
            og_times: vec![2, 200],
        }
    }

    #[test]
    fn test_written_manifest_reads_back_in_order() {
        let grid = grid();
        let partitions = vec!["0".to_string(), "1".to_string()];

        let mut writer = ManifestWriter::new(Vec::new()).unwrap();
        for key in grid.tree_keys(&partitions) {
            writer.write_key(&key).unwrap();
        }
        assert_eq!(writer.written(), grid.tree_count(2));

        let bytes = writer.out;
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with(MANIFEST_HEADER));
        assert_eq!(text.lines().nth(9), Some("8,0.00025,5.0,0.75,0.0,0,2"));
        assert_eq!(text.lines().nth(1), Some("0,0.00025,2.5,0.75,0.0,0,2"));

        let keys = parse_manifest(bytes.as_slice()).unwrap();
        let expected: Vec<_> = grid.tree_keys(&partitions).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_bad_header() {
        let err = parse_manifest("mu,mya\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ManifestError::Header(_)));
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let text = format!("{MANIFEST_HEADER}\n0,0.1,2.5,0.5,0,p,2\n1,abc,2.5,0.5,0,p,2\n");
        match parse_manifest(text.as_bytes()) {
            Err(ManifestError::Malformed { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("mu"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count() {
        let text = format!("{MANIFEST_HEADER}\n0,0.1,2.5\n");
        assert!(matches!(
            parse_manifest(text.as_bytes()),
            Err(ManifestError::Malformed { line: 2, .. })
        ));
    }
}
