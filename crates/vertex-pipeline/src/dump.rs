//! Space-delimited text dump of accepted pairs.
//!
//! The line layout is a compatibility contract with downstream tooling and
//! is reproduced byte for byte: event number, then for the electron its
//! momentum and reference-plane impact point (three components each), the
//! same six fields for the positron, then the line-to-line separation and
//! the vertex position. Every float is printed with five decimal places
//! and every field, including the last, is followed by a single space.

use std::io::{self, Write};

use crate::vertexing::PairVertexReport;

/// Render one accepted pair as a dump line (without the trailing newline).
pub fn format_pair_line(report: &PairVertexReport) -> String {
    let mut line = format!("{} ", report.event);
    let e = &report.electron;
    let p = &report.positron;
    let fields = [
        e.momentum.x,
        e.momentum.y,
        e.momentum.z,
        e.impact_at_reference.x,
        e.impact_at_reference.y,
        e.impact_at_reference.z,
        p.momentum.x,
        p.momentum.y,
        p.momentum.z,
        p.impact_at_reference.x,
        p.impact_at_reference.y,
        p.impact_at_reference.z,
        report.separation,
        report.vertex.x,
        report.vertex.y,
        report.vertex.z,
    ];
    for value in fields {
        line.push_str(&format!("{value:.5} "));
    }
    // Trailing space retained deliberately.
    line
}

/// Writer emitting one dump line per accepted pair.
pub struct DumpWriter<W: Write> {
    inner: W,
}

impl<W: Write> DumpWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_pair(&mut self, report: &PairVertexReport) -> io::Result<()> {
        writeln!(self.inner, "{}", format_pair_line(report))
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertexing::ParticleSummary;
    use vertex_core::{Pt3, Vec3};

    fn report() -> PairVertexReport {
        PairVertexReport {
            event: 42,
            electron: ParticleSummary {
                reco_charge: -1,
                momentum: Vec3::new(0.1, -0.2, 0.9),
                impact_at_reference: Pt3::new(15.0, 1.25, -674.0),
            },
            positron: ParticleSummary {
                reco_charge: 1,
                momentum: Vec3::new(-0.1, 0.2, 1.1),
                impact_at_reference: Pt3::new(14.0, -1.25, -674.0),
            },
            vertex: Pt3::new(10.0, -5.0, -620.0),
            separation: 0.015,
            separation_at_reference: 2.7,
            invariant_mass: 0.035,
            combined_momentum: Vec3::new(0.0, 0.0, 2.0),
            parity: 4,
        }
    }

    #[test]
    fn line_layout_is_bit_exact() {
        let line = format_pair_line(&report());
        assert_eq!(
            line,
            "42 0.10000 -0.20000 0.90000 15.00000 1.25000 -674.00000 \
             -0.10000 0.20000 1.10000 14.00000 -1.25000 -674.00000 \
             0.01500 10.00000 -5.00000 -620.00000 "
        );
    }

    #[test]
    fn writer_emits_one_line_per_pair() {
        let mut writer = DumpWriter::new(Vec::new());
        writer.write_pair(&report()).unwrap();
        writer.write_pair(&report()).unwrap();
        let buf = writer.into_inner().unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("-620.00000 \n"));
    }
}
