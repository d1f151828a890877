use crate::plot::figure::Figure;
use crate::telemetry::log::LogManager;
use crate::waveform::{Domain, WaveSet};

/// External plotting facility: draws every series of a figure on one plane,
/// shows it, and returns once the viewer is dismissed.
pub trait PlotBackend {
    type Error;

    fn display(&mut self, figure: Figure) -> Result<(), Self::Error>;
}

/// Hands the composed series to `backend`.
pub fn render<B: PlotBackend>(
    backend: &mut B,
    domain: &Domain,
    waves: &WaveSet,
) -> Result<(), B::Error> {
    let figure = Figure::from_waves(domain, waves);
    let logger = LogManager::new();
    logger.record(&format!(
        "rendering {} series over {} samples",
        figure.series.len(),
        domain.len()
    ));
    for series in &figure.series {
        logger.detail(&format!(
            "{}: {:?} in {:?}",
            series.label, series.style, series.color
        ));
    }
    backend.display(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::figure::DrawStyle;
    use crate::prelude::DomainSpec;
    use crate::waveform::{compose, generate_from_spec};

    #[derive(Default)]
    struct RecordingBackend {
        shown: Vec<Figure>,
    }

    impl PlotBackend for RecordingBackend {
        type Error = String;

        fn display(&mut self, figure: Figure) -> Result<(), Self::Error> {
            self.shown.push(figure);
            Ok(())
        }
    }

    struct FailingBackend;

    impl PlotBackend for FailingBackend {
        type Error = String;

        fn display(&mut self, _figure: Figure) -> Result<(), Self::Error> {
            Err("no display".into())
        }
    }

    #[test]
    fn render_displays_one_figure_with_four_series() {
        let domain = generate_from_spec(&DomainSpec::default()).unwrap();
        let waves = compose(&domain);
        let mut backend = RecordingBackend::default();
        render(&mut backend, &domain, &waves).unwrap();

        assert_eq!(backend.shown.len(), 1);
        let figure = &backend.shown[0];
        assert_eq!(figure.series.len(), 4);
        assert_eq!(
            figure
                .series
                .iter()
                .filter(|s| s.style == DrawStyle::Line)
                .count(),
            1
        );
        assert_eq!(figure.series[3].y, waves.y4.to_vec());
    }

    #[test]
    fn render_propagates_backend_errors() {
        let domain = generate_from_spec(&DomainSpec::default()).unwrap();
        let waves = compose(&domain);
        assert_eq!(
            render(&mut FailingBackend, &domain, &waves),
            Err("no display".to_string())
        );
    }
}
