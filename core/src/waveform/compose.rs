use crate::telemetry::log::LogManager;
use crate::waveform::domain::Domain;
use ndarray::Array1;

/// One transformed sine, `sin(frequency * x + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineTerm {
    pub frequency: f64,
    pub phase: f64,
}

impl SineTerm {
    pub const fn new(frequency: f64, phase: f64) -> Self {
        Self { frequency, phase }
    }

    pub fn evaluate(&self, domain: &Domain) -> Array1<f64> {
        let SineTerm { frequency, phase } = *self;
        domain.values().mapv(|x| (frequency * x + phase).sin())
    }
}

/// The three component waves: the base sine, its frequency-doubled copy, and
/// a copy phase-shifted by 4.
pub const COMPONENT_TERMS: [SineTerm; 3] = [
    SineTerm::new(1.0, 0.0),
    SineTerm::new(2.0, 0.0),
    SineTerm::new(1.0, 4.0),
];

/// Four series aligned index-for-index with the domain they were computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSet {
    pub y1: Array1<f64>,
    pub y2: Array1<f64>,
    pub y3: Array1<f64>,
    /// Elementwise `y1 + y2 + y3`.
    pub y4: Array1<f64>,
}

impl WaveSet {
    pub fn len(&self) -> usize {
        self.y1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y1.is_empty()
    }

    /// Series in plotting order, labelled.
    pub fn labelled(&self) -> [(&'static str, &Array1<f64>); 4] {
        [
            ("y1", &self.y1),
            ("y2", &self.y2),
            ("y3", &self.y3),
            ("y4", &self.y4),
        ]
    }
}

/// Evaluates the component terms over `domain` and sums them.
pub fn compose(domain: &Domain) -> WaveSet {
    let [base, doubled, shifted] = COMPONENT_TERMS;
    let y1 = base.evaluate(domain);
    let y2 = doubled.evaluate(domain);
    let y3 = shifted.evaluate(domain);
    let y4 = &y1 + &y2 + &y3;

    LogManager::new().record(&format!("composed {} samples per series", y4.len()));

    WaveSet { y1, y2, y3, y4 }
}
