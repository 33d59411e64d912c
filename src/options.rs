//! Analysis configuration options.

use crate::recommend::DEFAULT_TOLERANCE;

/// Configuration for analysing a hand.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::AnalysisOptions;
///
/// let options = AnalysisOptions::default()
///     .with_owns_crib(false)
///     .with_tolerance(0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Whether the player owns the crib (is the dealer).
    pub owns_crib: bool,
    /// Combined values within this distance of the best count as optimal.
    pub tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            owns_crib: true,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AnalysisOptions {
    /// Sets whether the player owns the crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::AnalysisOptions;
    ///
    /// let options = AnalysisOptions::default().with_owns_crib(false);
    /// assert_eq!(options.owns_crib, false);
    /// ```
    #[must_use]
    pub const fn with_owns_crib(mut self, owns_crib: bool) -> Self {
        self.owns_crib = owns_crib;
        self
    }

    /// Sets the tie tolerance.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::AnalysisOptions;
    ///
    /// let options = AnalysisOptions::default().with_tolerance(0.1);
    /// assert_eq!(options.tolerance, 0.1);
    /// ```
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
