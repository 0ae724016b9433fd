//! CSV records for classifications and summaries.
//!
//! Floats are written through [`FloatText`]: whole values keep one decimal
//! (`25.0`), others use the shortest round-trip text. A file read back yields
//! the exact values that were written.

use crate::classify::TreeType;
use crate::errors::RecordError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;
use tripsim_sim::io::FloatText;
use tripsim_sim::simulation::TreeKey;

/// A row type with a fixed CSV header.
pub trait CsvRecord: Sized {
    const HEADER: &'static str;

    fn write_row<W: Write>(&self, out: &mut W) -> io::Result<()>;

    fn parse_row(fields: &[&str]) -> Result<Self, String>;
}

/// One classified tree block.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRecord {
    pub key: TreeKey,
    pub tree_type: TreeType,
}

impl ClassificationRecord {
    pub fn indicators(&self) -> [u8; 4] {
        self.tree_type.indicators()
    }
}

impl CsvRecord for ClassificationRecord {
    const HEADER: &'static str =
        "mu,mya,depth,introgression_proportion,partition,og_time,tree_type,True,Hybrid,Wrong,Star";

    fn write_row<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let k = &self.key;
        let [t, h, w, s] = self.indicators();
        writeln!(
            out,
            "{},{},{},{},{},{},{},{t},{h},{w},{s}",
            FloatText(k.mu),
            FloatText(k.mya),
            FloatText(k.depth),
            FloatText(k.introgression_proportion),
            k.partition,
            k.og_time,
            self.tree_type
        )
    }

    fn parse_row(fields: &[&str]) -> Result<Self, String> {
        expect_fields(fields, 11)?;
        let tree_type = TreeType::from_code(fields[6])
            .ok_or_else(|| format!("invalid tree_type '{}'", fields[6]))?;
        let mut indicators = [0u8; 4];
        for (slot, (i, name)) in indicators
            .iter_mut()
            .zip((7..11).zip(["True", "Hybrid", "Wrong", "Star"]))
        {
            *slot = parse(fields, i, name)?;
        }
        if indicators != tree_type.indicators() {
            return Err(format!(
                "indicator columns {indicators:?} disagree with tree_type '{tree_type}'"
            ));
        }
        Ok(Self {
            key: TreeKey {
                mu: parse(fields, 0, "mu")?,
                mya: parse(fields, 1, "mya")?,
                depth: parse(fields, 2, "depth")?,
                introgression_proportion: parse(fields, 3, "introgression_proportion")?,
                partition: fields[4].to_string(),
                og_time: parse(fields, 5, "og_time")?,
            },
            tree_type,
        })
    }
}

/// Per-parameter counts summed over partitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub mu: f64,
    pub mya: f64,
    pub depth: f64,
    pub introgression_proportion: f64,
    pub og_time: u32,
    pub true_count: u64,
    pub hybrid_count: u64,
    pub wrong_count: u64,
    pub star_count: u64,
}

impl SummaryRecord {
    /// Counts in `(True, Hybrid, Wrong, Star)` order.
    pub fn counts(&self) -> [u64; 4] {
        [self.true_count, self.hybrid_count, self.wrong_count, self.star_count]
    }

    pub fn total(&self) -> u64 {
        self.counts().iter().sum()
    }
}

impl CsvRecord for SummaryRecord {
    const HEADER: &'static str =
        "mu,mya,depth,introgression_proportion,og_time,True_count,Hybrid_count,Wrong_count,Star_count";

    fn write_row<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            FloatText(self.mu),
            FloatText(self.mya),
            FloatText(self.depth),
            FloatText(self.introgression_proportion),
            self.og_time,
            self.true_count,
            self.hybrid_count,
            self.wrong_count,
            self.star_count
        )
    }

    fn parse_row(fields: &[&str]) -> Result<Self, String> {
        expect_fields(fields, 9)?;
        Ok(Self {
            mu: parse(fields, 0, "mu")?,
            mya: parse(fields, 1, "mya")?,
            depth: parse(fields, 2, "depth")?,
            introgression_proportion: parse(fields, 3, "introgression_proportion")?,
            og_time: parse(fields, 4, "og_time")?,
            true_count: parse(fields, 5, "True_count")?,
            hybrid_count: parse(fields, 6, "Hybrid_count")?,
            wrong_count: parse(fields, 7, "Wrong_count")?,
            star_count: parse(fields, 8, "Star_count")?,
        })
    }
}

fn expect_fields(fields: &[&str], n: usize) -> Result<(), String> {
    if fields.len() == n {
        Ok(())
    } else {
        Err(format!("expected {n} fields, found {}", fields.len()))
    }
}

fn parse<T>(fields: &[&str], i: usize, name: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fields[i]
        .parse()
        .map_err(|e| format!("invalid {name} '{}': {e}", fields[i]))
}

/// Streaming CSV writer; the header is written on creation.
pub struct CsvWriter<W: Write, T> {
    out: W,
    rows: usize,
    _record: PhantomData<T>,
}

impl<W: Write, T: CsvRecord> CsvWriter<W, T> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", T::HEADER)?;
        Ok(Self {
            out,
            rows: 0,
            _record: PhantomData,
        })
    }

    pub fn write(&mut self, record: &T) -> io::Result<()> {
        record.write_row(&mut self.out)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Parse records from any reader, checking the header.
pub fn read_records<T: CsvRecord, R: BufRead>(reader: R) -> Result<Vec<T>, RecordError> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.unwrap_or_default();
    if header.trim_end() != T::HEADER {
        return Err(RecordError::Header(header));
    }

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let record = T::parse_row(&fields).map_err(|reason| RecordError::Malformed {
            line: i + 2,
            reason,
        })?;
        records.push(record);
    }
    Ok(records)
}

pub fn read_records_file<T: CsvRecord>(path: impl AsRef<Path>) -> Result<Vec<T>, RecordError> {
    read_records(BufReader::new(File::open(path)?))
}

/// Write `records` to `path`, replacing any existing file.
pub fn write_records_file<'a, T: CsvRecord + 'a>(
    path: impl AsRef<Path>,
    records: impl IntoIterator<Item = &'a T>,
) -> Result<usize, RecordError> {
    let mut writer = CsvWriter::<_, T>::new(BufWriter::new(File::create(path)?))?;
    for record in records {
        writer.write(record)?;
    }
    writer.flush()?;
    Ok(writer.rows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(partition: &str, tree_type: TreeType) -> ClassificationRecord {
        ClassificationRecord {
            key: TreeKey {
                mu: 0.0001,
                mya: 22.5,
                depth: 0.75,
                introgression_proportion: 0.031,
                partition: partition.to_string(),
                og_time: 125,
            },
            tree_type,
        }
    }

    #[test]
    fn test_classification_row() {
        let mut out = Vec::new();
        record("17", TreeType::Hybrid).write_row(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.0001,22.5,0.75,0.031,17,125,H,0,1,0,0\n"
        );
    }

    #[test]
    fn test_classification_file_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dump.out");
        let records = vec![record("0", TreeType::True), record("1", TreeType::Star)];
        assert_eq!(write_records_file(&path, &records).unwrap(), 2);

        let read: Vec<ClassificationRecord> = read_records_file(&path).unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn test_indicators_must_match_tree_type() {
        let text = format!(
            "{}\n0.001,2.5,0.5,0,0,2,T,0,1,0,0\n",
            ClassificationRecord::HEADER
        );
        let err = read_records::<ClassificationRecord, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_wrong_header() {
        let err = read_records::<SummaryRecord, _>(ClassificationRecord::HEADER.as_bytes())
            .unwrap_err();
        assert!(matches!(err, RecordError::Header(_)));
    }

    #[test]
    fn test_summary_row() {
        let summary = SummaryRecord {
            mu: 0.002,
            mya: 25.0,
            depth: 0.25,
            introgression_proportion: 0.25,
            og_time: 200,
            true_count: 40,
            hybrid_count: 30,
            wrong_count: 20,
            star_count: 10,
        };
        let mut out = Vec::new();
        summary.write_row(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.002,25.0,0.25,0.25,200,40,30,20,10\n");
        assert_eq!(summary.total(), 100);
    }
}
