//! NEXUS batch files for PAUP*.
//!
//! A batch file starts with a short `paup` preamble and then holds one block
//! per grid point: a protein data matrix with A, B, C and the outgroups,
//! followed by a `paup` block per partition that builds one tree per outgroup
//! and appends it to the tree dump in matrix-representation form.

use crate::base::Sequence;
use crate::io::FloatText;
use crate::simulation::{Outgroup, ParameterPoint, Triplet, FIRST_OUTGROUP_TAXON};
use std::io::{self, Write};
use std::ops::Range;

/// Commands shared by every block of a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLayout {
    /// Partition names, in the order blocks run them
    pub partitions: Vec<String>,
    /// Partition file executed before each `include`
    pub partition_file: String,
    /// Tree dump that `matrixrep` appends to
    pub tree_file: String,
}

/// Streaming writer for a batch file.
pub struct NexusWriter<W: Write> {
    out: W,
    layout: BatchLayout,
}

impl<W: Write> NexusWriter<W> {
    pub fn new(out: W, layout: BatchLayout) -> Self {
        Self { out, layout }
    }

    pub fn layout(&self) -> &BatchLayout {
        &self.layout
    }

    /// Write the file header; call once before any block.
    pub fn write_preamble(&mut self) -> io::Result<()> {
        writeln!(self.out, "#NEXUS")?;
        writeln!(self.out, "begin paup;")?;
        writeln!(self.out, "set monitor = no;")?;
        writeln!(self.out, "set warnReset = no;")?;
        writeln!(self.out, "set warnTree  = no;")?;
        writeln!(self.out, "end;")
    }

    /// Write the data matrix and analysis commands for one grid point.
    pub fn write_block(
        &mut self,
        point: &ParameterPoint,
        triplet: &Triplet,
        outgroups: &[Outgroup],
    ) -> io::Result<()> {
        let nchar = triplet.a.len();
        writeln!(
            self.out,
            "[Simulation {}: mu= {}, mya= {}, depth= {}, introgression_proportion= {}]",
            point.index + 1,
            FloatText(point.mu),
            FloatText(point.mya),
            FloatText(point.depth),
            FloatText(point.introgression_proportion)
        )?;
        writeln!(self.out, "Begin data;")?;
        writeln!(
            self.out,
            "Dimensions ntax={} nchar= {nchar} ;",
            3 + outgroups.len()
        )?;
        writeln!(self.out, "Format datatype=protein gap=-;")?;
        writeln!(self.out, "Matrix")?;
        for (label, seq) in triplet.taxa() {
            self.write_row(label, seq)?;
        }
        for og in outgroups {
            self.write_row(&og.label(), &og.sequence)?;
        }
        writeln!(self.out, "; end;")?;

        let Self { out, layout } = self;
        let taxa = FIRST_OUTGROUP_TAXON..FIRST_OUTGROUP_TAXON + outgroups.len();
        for partition in &layout.partitions {
            Self::write_partition_commands(out, layout, partition, taxa.clone())?;
        }
        Ok(())
    }

    fn write_row(&mut self, label: &str, seq: &Sequence) -> io::Result<()> {
        writeln!(self.out, "{label} {seq}")
    }

    fn write_partition_commands(
        out: &mut W,
        layout: &BatchLayout,
        partition: &str,
        taxa: Range<usize>,
    ) -> io::Result<()> {
        writeln!(out, "Begin paup;")?;
        writeln!(out, "execute {};", layout.partition_file)?;
        writeln!(out, "exclude all; include {partition} ;")?;
        for og in taxa {
            writeln!(out, "delete all /cleartrees=yes; restore 1-3;  restore {og} ;")?;
            writeln!(out, "alltrees; matrixrep file= {} append=yes;", layout.tree_file)?;
        }
        writeln!(out, "end;")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
