use std::io::{self, Write};
use wavecore::math::SeriesSummary;
use wavecore::{Figure, PlotBackend};

/// Text stand-in for a plot window: one CSV row per domain sample.
pub struct TableBackend<W: Write> {
    out: W,
    max_rows: Option<usize>,
}

impl<W: Write> TableBackend<W> {
    pub fn new(out: W, max_rows: Option<usize>) -> Self {
        Self { out, max_rows }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlotBackend for TableBackend<W> {
    type Error = io::Error;

    fn display(&mut self, figure: Figure) -> io::Result<()> {
        let Some(first) = figure.series.first() else {
            return Ok(());
        };

        let header = std::iter::once("x")
            .chain(figure.series.iter().map(|s| s.label.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.out, "{}", header)?;

        let rows = self.max_rows.unwrap_or(first.x.len()).min(first.x.len());
        for i in 0..rows {
            write!(self.out, "{:.6}", first.x[i])?;
            for series in &figure.series {
                write!(self.out, ",{:.6}", series.y[i])?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

pub fn write_summaries<W: Write>(out: &mut W, summaries: &[SeriesSummary]) -> io::Result<()> {
    for summary in summaries {
        let bin = summary
            .dominant_bin
            .map(|bin| bin.to_string())
            .unwrap_or_else(|| "-".into());
        writeln!(
            out,
            "{}: len {} | min {:.4} | max {:.4} | rms {:.4} | zero crossings {} | dominant bin {}",
            summary.label,
            summary.len,
            summary.min,
            summary.max,
            summary.rms,
            summary.zero_crossings,
            bin
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::{compose, generate_domain, render};

    fn rendered(max_rows: Option<usize>) -> String {
        let domain = generate_domain(0.0, 0.3, 0.1).unwrap();
        let waves = compose(&domain);
        let mut backend = TableBackend::new(Vec::new(), max_rows);
        render(&mut backend, &domain, &waves).unwrap();
        String::from_utf8(backend.into_inner()).unwrap()
    }

    #[test]
    fn table_has_header_and_row_per_sample() {
        let output = rendered(None);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "x,y1,y2,y3,y4");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0.000000,0.000000,0.000000,"));
    }

    #[test]
    fn table_respects_row_limit() {
        let output = rendered(Some(1));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn empty_figure_writes_nothing() {
        let mut backend = TableBackend::new(Vec::new(), None);
        backend
            .display(Figure {
                title: "empty".into(),
                series: Vec::new(),
            })
            .unwrap();
        assert!(backend.into_inner().is_empty());
    }

    #[test]
    fn summaries_print_one_line_each() {
        let domain = generate_domain(0.0, 6.0, 0.5).unwrap();
        let summaries = SeriesSummary::for_waves(&compose(&domain));
        let mut out = Vec::new();
        write_summaries(&mut out, &summaries).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("y1: len 12"));
    }
}
