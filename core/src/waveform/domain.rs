use crate::prelude::{DomainSpec, WaveError, WaveResult};
use ndarray::Array1;

/// Upper bound on the number of samples a single domain may hold.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Ordered, strictly increasing sample points over which waves are evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    values: Array1<f64>,
}

impl Domain {
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

/// Generates `start, start + step, ...` stopping strictly before `stop`.
///
/// Each sample is computed as `start + i * step` rather than by repeated
/// addition, so the last sample carries no accumulated drift.
pub fn generate_domain(start: f64, stop: f64, step: f64) -> WaveResult<Domain> {
    let valid = start.is_finite() && stop.is_finite() && step.is_finite();
    if !valid || step <= 0.0 || start >= stop {
        return Err(WaveError::InvalidRange { start, stop, step });
    }

    let requested = ((stop - start) / step).ceil();
    if !requested.is_finite() || requested > MAX_SAMPLES as f64 {
        return Err(WaveError::TooManySamples {
            requested,
            limit: MAX_SAMPLES,
        });
    }

    // A subnormal span over a huge step rounds the quotient down to zero.
    let mut count = (requested as usize).max(1);
    while count > 1 && start + (count - 1) as f64 * step >= stop {
        count -= 1;
    }

    let values = Array1::from_shape_fn(count, |i| start + i as f64 * step);
    Ok(Domain { values })
}

pub fn generate_from_spec(spec: &DomainSpec) -> WaveResult<Domain> {
    generate_domain(spec.start, spec.stop, spec.step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn standard_domain_matches_arange_length() {
        let domain = generate_from_spec(&DomainSpec::default()).unwrap();
        let expected = ((8.0 * PI) / 0.1).ceil() as usize;
        assert_eq!(domain.len(), expected);
        assert_eq!(domain.values()[0], -4.0 * PI);
    }

    #[test]
    fn standard_domain_steps_evenly_and_stays_below_stop() {
        let domain = generate_from_spec(&DomainSpec::default()).unwrap();
        let values = domain.to_vec();
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-9);
        }
        assert!(values.iter().all(|&x| x < 4.0 * PI));
    }

    #[test]
    fn exact_multiple_excludes_stop() {
        let domain = generate_domain(0.0, 1.0, 0.25).unwrap();
        assert_eq!(domain.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn step_wider_than_range_yields_single_sample() {
        let domain = generate_domain(2.0, 3.0, 5.0).unwrap();
        assert_eq!(domain.to_vec(), vec![2.0]);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(matches!(
            generate_domain(0.0, 1.0, 0.0),
            Err(WaveError::InvalidRange { .. })
        ));
        assert!(generate_domain(0.0, 1.0, -0.1).is_err());
    }

    #[test]
    fn rejects_empty_or_reversed_range() {
        assert!(generate_domain(1.0, 1.0, 0.1).is_err());
        assert!(generate_domain(2.0, 1.0, 0.1).is_err());
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(generate_domain(f64::NAN, 1.0, 0.1).is_err());
        assert!(generate_domain(0.0, f64::INFINITY, 0.1).is_err());
        assert!(generate_domain(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_sample_count_beyond_limit() {
        assert!(matches!(
            generate_domain(0.0, 1.0, 1e-300),
            Err(WaveError::TooManySamples { limit: MAX_SAMPLES, .. })
        ));
        assert!(generate_domain(0.0, MAX_SAMPLES as f64 + 1.0, 1.0).is_err());
    }

    #[test]
    fn rejects_span_that_overflows() {
        assert!(matches!(
            generate_domain(-1e308, 1e308, 1.0),
            Err(WaveError::TooManySamples { .. })
        ));
    }

    #[test]
    fn subnormal_span_still_starts_at_start() {
        let domain = generate_domain(0.0, 1e-320, 1e308).unwrap();
        assert_eq!(domain.to_vec(), vec![0.0]);
    }

    #[test]
    fn count_at_limit_is_accepted() {
        let domain = generate_domain(0.0, 1000.0, 1.0).unwrap();
        assert_eq!(domain.len(), 1000);
        assert_eq!(domain.values()[999], 999.0);
    }
}
