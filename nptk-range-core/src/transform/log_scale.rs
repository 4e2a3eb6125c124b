use crate::config::RangeConfig;

/// Natural-log bounds of a logarithmic track.
///
/// Works in 0-1 fractions in both directions. A minimum below 1 is replaced
/// by 1 inside the logarithm, so the effective floor of such a track is 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LogScale {
    min_ln: f64,
    max_ln: f64,
}

impl LogScale {
    pub(crate) fn new(config: &RangeConfig) -> Self {
        Self {
            min_ln: config.min_value.max(1.0).ln(),
            max_ln: config.max_value.ln(),
        }
    }

    fn span(&self) -> f64 {
        self.max_ln - self.min_ln
    }

    /// The value at `fraction` of the track.
    pub(crate) fn value_at(&self, fraction: f64) -> f64 {
        (self.min_ln + self.span() * fraction).exp()
    }

    /// The fraction of the track at which `value` sits.
    pub(crate) fn fraction_of(&self, value: f64) -> f64 {
        (value.ln() - self.min_ln) / self.span()
    }
}
