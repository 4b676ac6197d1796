// Draw configurations and unique random sampling.
//
// A `DrawConfiguration` can only be obtained through `DrawConfiguration::new`,
// which validates it. `Drawer` collects distinct values by rejection sampling
// over the inclusive range, using a generator created fresh for every call.

use std::collections::BTreeSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Attempts allowed per requested number before a draw gives up.
pub const DEFAULT_ATTEMPTS_PER_NUMBER: u32 = 100;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("{reason}")]
    InvalidConfiguration { reason: String },

    #[error("failed to generate {count} unique numbers after {attempts} attempts")]
    GenerationFailed { count: i64, attempts: u64 },

    #[error("failed to seed random number generator: {message}")]
    Entropy { message: String },
}

impl DrawError {
    fn invalid(reason: impl Into<String>) -> Self {
        DrawError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// DrawConfiguration
// ---------------------------------------------------------------------------

/// An immutable, validated description of one game: how many distinct
/// numbers to draw and the inclusive range they come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawConfiguration {
    label: String,
    count: i64,
    minimum: i64,
    maximum: i64,
}

impl DrawConfiguration {
    /// Build a configuration, rejecting it unless every invariant holds.
    pub fn new(
        label: impl Into<String>,
        count: i64,
        minimum: i64,
        maximum: i64,
    ) -> Result<Self, DrawError> {
        let label = label.into();
        check(&label, count, minimum, maximum)?;
        Ok(DrawConfiguration {
            label,
            count,
            minimum,
            maximum,
        })
    }

    /// Construct a configuration from parts known to be valid at compile time.
    pub(crate) fn trusted(label: &str, count: i64, minimum: i64, maximum: i64) -> Self {
        debug_assert!(check(label, count, minimum, maximum).is_ok());
        DrawConfiguration {
            label: label.to_string(),
            count,
            minimum,
            maximum,
        }
    }

    /// Re-check the invariants. Always succeeds for values built through
    /// [`DrawConfiguration::new`].
    pub fn validate(&self) -> Result<(), DrawError> {
        check(&self.label, self.count, self.minimum, self.maximum)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// Number of distinct values in `[minimum, maximum]`.
    ///
    /// Computed in `i128` so the full `i64` span does not overflow.
    pub fn range_size(&self) -> i128 {
        range_size(self.minimum, self.maximum)
    }
}

impl fmt::Display for DrawConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} numbers from {} to {})",
            self.label, self.count, self.minimum, self.maximum
        )
    }
}

fn range_size(minimum: i64, maximum: i64) -> i128 {
    i128::from(maximum) - i128::from(minimum) + 1
}

fn check(label: &str, count: i64, minimum: i64, maximum: i64) -> Result<(), DrawError> {
    if label.trim().is_empty() {
        return Err(DrawError::invalid("Game name cannot be empty."));
    }

    if count <= 0 {
        return Err(DrawError::invalid(format!(
            "Number count must be greater than 0. Provided: {count}"
        )));
    }

    if minimum >= maximum {
        return Err(DrawError::invalid(format!(
            "Minimum range ({minimum}) must be less than maximum range ({maximum})."
        )));
    }

    let available = range_size(minimum, maximum);
    if i128::from(count) > available {
        return Err(DrawError::invalid(format!(
            "Cannot generate {count} unique numbers from range {minimum}-{maximum} \
             (only {available} numbers available)."
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// DrawResult
// ---------------------------------------------------------------------------

/// The numbers produced by one draw: strictly ascending and pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    values: Vec<i64>,
}

impl DrawResult {
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Numbers joined by two spaces, e.g. `3  11  22  29  38  44`.
impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Drawer
// ---------------------------------------------------------------------------

/// Produces [`DrawResult`]s by rejection sampling.
///
/// The drawer holds no generator of its own. [`Drawer::draw`] seeds a new
/// `StdRng` from the operating system on every call, so concurrent or rapid
/// successive draws never share random state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawer {
    attempts_per_number: u32,
}

impl Default for Drawer {
    fn default() -> Self {
        Drawer {
            attempts_per_number: DEFAULT_ATTEMPTS_PER_NUMBER,
        }
    }
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A drawer with a custom attempt multiplier. Zero is treated as one.
    pub fn with_attempts_per_number(attempts_per_number: u32) -> Self {
        Drawer {
            attempts_per_number: attempts_per_number.max(1),
        }
    }

    pub fn attempts_per_number(&self) -> u32 {
        self.attempts_per_number
    }

    /// Upper bound on samples taken while drawing for `config`.
    pub fn max_attempts(&self, config: &DrawConfiguration) -> u64 {
        (config.count.max(0) as u64).saturating_mul(u64::from(self.attempts_per_number))
    }

    /// Draw `config.count()` distinct numbers using a freshly seeded generator.
    pub fn draw(&self, config: &DrawConfiguration) -> Result<DrawResult, DrawError> {
        let mut rng = StdRng::try_from_os_rng().map_err(|e| DrawError::Entropy {
            message: e.to_string(),
        })?;
        self.draw_with(config, &mut rng)
    }

    /// Draw using the caller's generator.
    ///
    /// Samples uniformly from `[minimum, maximum]`, discarding repeats, until
    /// `count` distinct values are held or the attempt cap is reached.
    pub fn draw_with<R: Rng + ?Sized>(
        &self,
        config: &DrawConfiguration,
        rng: &mut R,
    ) -> Result<DrawResult, DrawError> {
        config.validate()?;

        let target = usize::try_from(config.count).map_err(|_| {
            DrawError::invalid(format!(
                "Number count {} is too large for this platform.",
                config.count
            ))
        })?;
        let max_attempts = self.max_attempts(config);

        let mut drawn = BTreeSet::new();
        let mut attempts: u64 = 0;
        while drawn.len() < target && attempts < max_attempts {
            drawn.insert(rng.random_range(config.minimum..=config.maximum));
            attempts += 1;
        }

        if drawn.len() < target {
            return Err(DrawError::GenerationFailed {
                count: config.count,
                attempts: max_attempts,
            });
        }

        Ok(DrawResult {
            values: drawn.into_iter().collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// A generator that always yields zero, so every sample is the range minimum.
    struct StuckRng;

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn assert_invalid(result: Result<DrawConfiguration, DrawError>, needle: &str) {
        match result {
            Err(DrawError::InvalidConfiguration { reason }) => {
                assert!(
                    reason.contains(needle),
                    "reason {reason:?} should mention {needle:?}"
                );
            }
            other => panic!("expected InvalidConfiguration, got: {other:?}"),
        }
    }

    fn assert_well_formed(config: &DrawConfiguration, result: &DrawResult) {
        let values = result.values();
        assert_eq!(values.len() as i64, config.count());
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "values should be strictly ascending: {values:?}"
        );
        assert!(values
            .iter()
            .all(|v| (config.minimum()..=config.maximum()).contains(v)));
    }

    // -- validation ---------------------------------------------------------

    #[test]
    fn rejects_empty_label() {
        assert_invalid(DrawConfiguration::new("", 6, 1, 49), "name");
    }

    #[test]
    fn rejects_whitespace_label() {
        assert_invalid(DrawConfiguration::new(" \t ", 6, 1, 49), "name");
    }

    #[test]
    fn rejects_zero_count() {
        assert_invalid(DrawConfiguration::new("Zero", 0, 1, 49), "Provided: 0");
    }

    #[test]
    fn rejects_negative_count() {
        assert_invalid(DrawConfiguration::new("Negative", -3, 1, 49), "Provided: -3");
    }

    #[test]
    fn rejects_degenerate_range() {
        assert_invalid(DrawConfiguration::new("Flat", 1, 7, 7), "must be less than");
    }

    #[test]
    fn rejects_inverted_range() {
        assert_invalid(DrawConfiguration::new("Inverted", 1, 49, 1), "must be less than");
    }

    #[test]
    fn rejects_count_one_past_range_size() {
        assert_invalid(
            DrawConfiguration::new("Tight", 6, 1, 5),
            "only 5 numbers available",
        );
    }

    #[test]
    fn rejects_count_exceeding_range() {
        assert_invalid(DrawConfiguration::new("Bad", 10, 1, 5), "Cannot generate 10");
    }

    #[test]
    fn accepts_count_equal_to_range_size() {
        let config = DrawConfiguration::new("Full", 5, 1, 5).unwrap();
        assert_eq!(config.range_size(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn range_size_handles_full_i64_span() {
        let config = DrawConfiguration::new("Wide", 3, i64::MIN, i64::MAX).unwrap();
        assert_eq!(config.range_size(), 1i128 << 64);
    }

    #[test]
    fn display_describes_configuration() {
        let config = DrawConfiguration::new("Lotto", 6, 1, 49).unwrap();
        assert_eq!(config.to_string(), "Lotto (6 numbers from 1 to 49)");
    }

    // -- drawing ------------------------------------------------------------

    #[test]
    fn full_range_draw_returns_every_value() {
        let config = DrawConfiguration::new("Full", 5, 1, 5).unwrap();
        let result = Drawer::new().draw(&config).unwrap();
        assert_eq!(result.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn seeded_draws_are_well_formed() {
        let config = DrawConfiguration::new("Lotto", 6, 1, 49).unwrap();
        let drawer = Drawer::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let result = drawer.draw_with(&config, &mut rng).unwrap();
            assert_well_formed(&config, &result);
        }
    }

    #[test]
    fn same_seed_gives_same_draw() {
        let config = DrawConfiguration::new("MultiMulti", 10, 1, 80).unwrap();
        let drawer = Drawer::new();
        let a = drawer
            .draw_with(&config, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = drawer
            .draw_with(&config, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_ranges_are_supported() {
        let config = DrawConfiguration::new("Signed", 4, -10, -1).unwrap();
        let result = Drawer::new()
            .draw_with(&config, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_well_formed(&config, &result);
    }

    #[test]
    fn exhausted_attempts_fail_instead_of_looping() {
        let config = DrawConfiguration::new("Lotto", 6, 1, 49).unwrap();
        let err = Drawer::new().draw_with(&config, &mut StuckRng).unwrap_err();
        match err {
            DrawError::GenerationFailed { count, attempts } => {
                assert_eq!(count, 6);
                assert_eq!(attempts, 600);
            }
            other => panic!("expected GenerationFailed, got: {other}"),
        }
    }

    #[test]
    fn attempt_cap_follows_multiplier() {
        let config = DrawConfiguration::new("Lotto", 6, 1, 49).unwrap();
        assert_eq!(Drawer::new().max_attempts(&config), 600);
        assert_eq!(Drawer::with_attempts_per_number(3).max_attempts(&config), 18);
        assert_eq!(Drawer::with_attempts_per_number(0).attempts_per_number(), 1);
    }

    #[test]
    fn count_of_one_succeeds_on_first_sample() {
        let config = DrawConfiguration::new("One", 1, 1, 2).unwrap();
        let result = Drawer::with_attempts_per_number(1)
            .draw_with(&config, &mut StuckRng)
            .unwrap();
        assert_eq!(result.values(), &[1]);
    }

    #[test]
    fn result_display_joins_with_two_spaces() {
        let config = DrawConfiguration::new("Full", 3, 7, 9).unwrap();
        let result = Drawer::new().draw(&config).unwrap();
        assert_eq!(result.to_string(), "7  8  9");
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
    }

    #[test]
    fn results_do_not_alias_between_draws() {
        let config = DrawConfiguration::new("Full", 4, 1, 4).unwrap();
        let drawer = Drawer::new();
        let first = drawer.draw(&config).unwrap();
        let mut second = drawer.draw(&config).unwrap().into_values();
        second.clear();
        assert_eq!(first.values(), &[1, 2, 3, 4]);
    }
}
