//! Sample moments and pass/fail checks for verification.

use std::fmt;

/// Moments of a sample, accumulated in `f64`.
///
/// SD is the population standard deviation; kurtosis is excess kurtosis
/// (the normal distribution scores 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub sd: f64,
    /// Smallest sample.
    pub minimum: f64,
    /// Largest sample.
    pub maximum: f64,
    /// Third standardised moment.
    pub skewness: f64,
    /// Fourth standardised moment minus 3.
    pub kurtosis: f64,
}

impl Moments {
    /// Computes the moments of `data`, or `None` when it is empty.
    pub fn compute(data: &[f32]) -> Option<Self> {
        let first = f64::from(*data.first()?);
        let n = data.len() as f64;

        let (mut sum, mut minimum, mut maximum) = (0.0, first, first);
        for &x in data {
            let x = f64::from(x);
            sum += x;
            minimum = minimum.min(x);
            maximum = maximum.max(x);
        }
        let mean = sum / n;

        let sq_delta_sum: f64 = data
            .iter()
            .map(|&x| {
                let delta = f64::from(x) - mean;
                delta * delta
            })
            .sum();
        let sd = (sq_delta_sum / n).sqrt();

        let skewness_sum: f64 = data
            .iter()
            .map(|&x| {
                let term = (f64::from(x) - mean) / sd;
                term * term * term
            })
            .sum();

        let kurtosis_sum: f64 = data
            .iter()
            .map(|&x| {
                let delta = f64::from(x) - mean;
                (delta * delta) * (delta * delta)
            })
            .sum();

        Some(Self {
            mean,
            sd,
            minimum,
            maximum,
            skewness: skewness_sum / n,
            kurtosis: (kurtosis_sum / n) / ((sd * sd) * (sd * sd)) - 3.0,
        })
    }

    /// Compares each checked moment with its standard normal value.
    pub fn check(&self, tolerance: f64) -> MomentChecks {
        MomentChecks {
            mean_ok: self.mean.abs() < tolerance,
            sd_ok: (self.sd - 1.0).abs() < tolerance,
            skewness_ok: self.skewness.abs() < tolerance,
            kurtosis_ok: self.kurtosis.abs() < tolerance,
        }
    }
}

/// Per-moment outcome of [`Moments::check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MomentChecks {
    /// |mean| within tolerance.
    pub mean_ok: bool,
    /// |SD - 1| within tolerance.
    pub sd_ok: bool,
    /// |skewness| within tolerance.
    pub skewness_ok: bool,
    /// |excess kurtosis| within tolerance.
    pub kurtosis_ok: bool,
}

impl MomentChecks {
    /// Whether every moment passed.
    pub fn all_ok(&self) -> bool {
        self.mean_ok && self.sd_ok && self.skewness_ok && self.kurtosis_ok
    }
}

/// Verification report for one generator.
#[derive(Clone, Copy, Debug)]
pub struct MomentReport {
    /// Computed moments.
    pub moments: Moments,
    /// Checks against the configured tolerance.
    pub checks: MomentChecks,
}

impl MomentReport {
    /// Computes and checks the moments of `data`.
    pub fn new(data: &[f32], tolerance: f64) -> Option<Self> {
        let moments = Moments::compute(data)?;
        Some(Self {
            moments,
            checks: moments.check(tolerance),
        })
    }

    /// Whether every moment passed.
    pub fn passed(&self) -> bool {
        self.checks.all_ok()
    }
}

/// Six decimals with a leading space in place of a plus sign.
fn signed(value: f64) -> String {
    if value.is_sign_negative() {
        format!("{:.6}", value)
    } else {
        format!(" {:.6}", value)
    }
}

fn marker(ok: bool) -> &'static str {
    if ok {
        ""
    } else {
        " fail"
    }
}

impl fmt::Display for MomentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, c) = (&self.moments, &self.checks);
        writeln!(f, "mean     = {}{}", signed(m.mean), marker(c.mean_ok))?;
        writeln!(f, "SD       = {}{}", signed(m.sd), marker(c.sd_ok))?;
        writeln!(f, "minimum  = {}", signed(m.minimum))?;
        writeln!(f, "maximum  = {}", signed(m.maximum))?;
        writeln!(f, "skewness = {}{}", signed(m.skewness), marker(c.skewness_ok))?;
        write!(f, "kurtosis = {}{}", signed(m.kurtosis), marker(c.kurtosis_ok))
    }
}
