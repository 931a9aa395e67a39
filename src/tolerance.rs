//! Tolerance configuration for visibility computations.
//!
//! All epsilon thresholds used by the containment test, the ray caster, and
//! the visibility assembler live in one place so they can be tuned
//! independently of the algorithm code.

use num_traits::Float;

/// The epsilon thresholds used across the visibility pipeline.
///
/// The exact values are tunable, but their relative scales matter: `dedup`
/// must stay much larger than `ray_forward` and `angle_jitter`, or the
/// jittered rays produce spurious near-duplicate boundary points instead of
/// merging into one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<F> {
    /// Denominator threshold below which two segments are treated as parallel
    /// (no intersection). Also guards near-zero y-deltas in the containment
    /// test.
    pub parallel: F,
    /// Minimum forward ray parameter for a hit to count, excluding
    /// self-intersection at the ray origin.
    pub ray_forward: F,
    /// Slack on the edge parameter: a hit is on the edge when `u` lies in
    /// `[-edge_slack, 1 + edge_slack]`, so endpoint grazes still register.
    pub edge_slack: F,
    /// Distance below which two boundary hit points are merged into one.
    pub dedup: F,
    /// Angular offset (radians) applied on each side of a vertex direction
    /// when generating candidate rays.
    pub angle_jitter: F,
}

impl<F: Float> Tolerances<F> {
    /// Creates the default tolerance set.
    ///
    /// Values assume scene coordinates of roughly unit-to-hundreds scale:
    /// parallel 1e-9, ray-forward 1e-8, edge slack 1e-8, dedup 1e-5,
    /// angle jitter 1e-7 radians.
    pub fn new() -> Self {
        Self {
            parallel: F::from(1e-9).unwrap(),
            ray_forward: F::from(1e-8).unwrap(),
            edge_slack: F::from(1e-8).unwrap(),
            dedup: F::from(1e-5).unwrap(),
            angle_jitter: F::from(1e-7).unwrap(),
        }
    }

    /// Returns a copy with a different dedup distance.
    ///
    /// Useful when the scene's coordinate scale makes the default merge
    /// distance too coarse or too fine.
    pub fn with_dedup(mut self, dedup: F) -> Self {
        self.dedup = dedup;
        self
    }
}

impl<F: Float> Default for Tolerances<F> {
    fn default() -> Self {
        Self::new()
    }
}
