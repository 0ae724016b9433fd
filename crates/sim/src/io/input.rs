//! Readers for the reference genome and the partition list.

use crate::base::Sequence;
use crate::errors::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Marker starting a partition definition in a PAUP* partition file.
pub const CHARSET_MARKER: &str = "charset";

fn open(path: &Path) -> Result<BufReader<File>, InputError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| InputError::Io(path.to_path_buf(), e))
}

/// Read the reference sequence from the first line of `path`.
///
/// Surrounding whitespace is stripped and the line is cut to at most
/// `max_length` columns before it is parsed, so symbols past the cut are
/// never inspected.
pub fn read_reference(path: impl AsRef<Path>, max_length: usize) -> Result<Sequence, InputError> {
    let path = path.as_ref();
    let mut line = String::new();
    open(path)?
        .read_line(&mut line)
        .map_err(|e| InputError::Io(path.to_path_buf(), e))?;
    parse_reference(&line, max_length, path)
}

fn parse_reference(line: &str, max_length: usize, path: &Path) -> Result<Sequence, InputError> {
    let line = line.trim();
    let cut = match line.char_indices().nth(max_length) {
        Some((byte, _)) => &line[..byte],
        None => line,
    };
    if cut.is_empty() {
        return Err(InputError::EmptyReference(path.to_path_buf()));
    }
    Sequence::from_str(cut).map_err(|e| InputError::Sequence(path.to_path_buf(), e))
}

/// Read partition names from `charset` lines of `path`.
///
/// The name is the second whitespace-separated field; all other lines are
/// ignored.
pub fn read_partitions(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    parse_partitions(open(path)?, path)
}

fn parse_partitions<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>, InputError> {
    let mut partitions = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::Io(path.to_path_buf(), e))?;
        if !line.starts_with(CHARSET_MARKER) {
            continue;
        }
        match line.split_whitespace().nth(1) {
            Some(name) => partitions.push(name.to_string()),
            None => {
                return Err(InputError::MalformedPartition {
                    path: path.to_path_buf(),
                    line: i + 1,
                })
            }
        }
    }
    log::debug!("read {} partitions from {}", partitions.len(), path.display());
    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_reference_first_line_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.txt");
        fs::write(&path, "MKV-LA\nWWWW\n").unwrap();
        let seq = read_reference(&path, 100).unwrap();
        assert_eq!(seq.to_string(), "MKV-LA");
    }

    #[test]
    fn test_read_reference_truncates_before_parsing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.txt");
        // the non-ASCII symbol after the cut is never parsed
        fs::write(&path, "  ARNDC\u{00e9}\n").unwrap();
        let seq = read_reference(&path, 5).unwrap();
        assert_eq!(seq.to_string(), "ARNDC");
    }

    #[test]
    fn test_read_reference_keeps_symbols_as_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.txt");
        fs::write(&path, "mkvXla\n").unwrap();
        let seq = read_reference(&path, 100).unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.to_string(), "mkvXla");
    }

    #[test]
    fn test_read_reference_invalid_symbol() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.txt");
        fs::write(&path, "ARN DC\n").unwrap();
        assert!(matches!(
            read_reference(&path, 100),
            Err(InputError::Sequence(_, _))
        ));
    }

    #[test]
    fn test_read_reference_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.txt");
        fs::write(&path, "\nARND\n").unwrap();
        assert!(matches!(
            read_reference(&path, 100),
            Err(InputError::EmptyReference(_))
        ));
    }

    #[test]
    fn test_read_reference_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_reference(dir.path().join("nope.txt"), 100),
            Err(InputError::Io(_, _))
        ));
    }

    #[test]
    fn test_read_partitions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partitions.txt");
        fs::write(
            &path,
            "#nexus\nbegin sets;\ncharset gene_1 = 1-300;\n  charset indented = 5;\ncharset gene_2 = 301-900;\nend;\n",
        )
        .unwrap();
        let parts = read_partitions(&path).unwrap();
        assert_eq!(parts, vec!["gene_1", "gene_2"]);
    }

    #[test]
    fn test_read_partitions_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partitions.txt");
        fs::write(&path, "charset a = 1-2;\ncharset\n").unwrap();
        assert!(matches!(
            read_partitions(&path),
            Err(InputError::MalformedPartition { line: 2, .. })
        ));
    }
}
