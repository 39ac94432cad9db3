//! Monte Carlo sampler.
//!
//! A 1-D proxy for the detection process: each trial places the target
//! at a random integer distance (feet) along the worst-case flight and
//! converts it to a search time. It does not use the path or target
//! models and draws from its own RNG.

use rand::Rng;

use sweepsearch_core::constants::TRIAL_TIME_DECIMALS;
use sweepsearch_core::error::{ensure_positive, Result, SearchError};
use sweepsearch_core::state::{HistogramBin, TrialSummary};
use sweepsearch_core::units::{Feet, MilesPerHour};

/// Trial times (hours) in generation order, with summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSet {
    samples: Vec<f64>,
    mean: f64,
    median: f64,
    std_dev: f64,
}

/// Draw `n` independent trial times.
///
/// Each trial picks an integer distance uniformly in
/// `[0, ceil(worst_case_distance)]` and converts it to hours at
/// `ground_speed`, rounded to two decimals.
pub fn run_trials<R: Rng + ?Sized>(
    n: usize,
    worst_case_distance: Feet,
    ground_speed: MilesPerHour,
    rng: &mut R,
) -> Result<TrialSet> {
    if n == 0 {
        return Err(SearchError::invalid("trial_count", 0.0, "must be at least 1"));
    }
    let worst = worst_case_distance.0;
    if !(worst.is_finite() && worst >= 0.0 && worst < u64::MAX as f64) {
        return Err(SearchError::invalid(
            "worst_case_distance",
            worst,
            "must be finite and non-negative",
        ));
    }
    ensure_positive("ground_speed", ground_speed.0)?;

    let upper = worst.ceil() as u64;
    let samples = (0..n)
        .map(|_| {
            let distance = rng.gen_range(0..=upper);
            round_hours(ground_speed.hours_to_cover_feet(Feet(distance as f64)))
        })
        .collect();

    Ok(TrialSet::from_samples(samples))
}

/// Round to `TRIAL_TIME_DECIMALS` places with `f64::round`, which sends
/// exact halves of the scaled value away from zero.
fn round_hours(hours: f64) -> f64 {
    let scale = 10f64.powi(TRIAL_TIME_DECIMALS);
    (hours * scale).round() / scale
}

impl TrialSet {
    /// Compute statistics over existing samples.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let (mean, median, std_dev) = if samples.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let n = samples.len() as f64;
            let mean = samples.iter().sum::<f64>() / n;
            let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
            (mean, median_of(&samples), variance.sqrt())
        };
        Self {
            samples,
            mean,
            median,
            std_dev,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Equal-width bins spanning the sample range; the last bin is closed.
    /// An empty or constant set yields a single bin.
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        let (min, max) = self
            .samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });

        if bins == 0 {
            return Vec::new();
        }
        if self.samples.is_empty() || max <= min {
            let value = if self.samples.is_empty() { 0.0 } else { min };
            return vec![HistogramBin {
                lower: value,
                upper: value,
                count: self.samples.len(),
            }];
        }

        let width = (max - min) / bins as f64;
        let mut histogram: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: min + i as f64 * width,
                upper: if i + 1 == bins {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for &sample in &self.samples {
            let index = (((sample - min) / width).floor() as usize).min(bins - 1);
            histogram[index].count += 1;
        }
        histogram
    }

    /// Package samples, statistics, and histogram for a report.
    pub fn summary(&self, bins: usize) -> TrialSummary {
        TrialSummary {
            samples: self.samples.clone(),
            mean_hours: self.mean,
            median_hours: self.median,
            std_dev_hours: self.std_dev,
            histogram: self.histogram(bins),
        }
    }
}

fn median_of(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
