use crate::error::{VisualError, VisualResult};

/// Affine mapping from a numeric domain interval to a pixel range interval.
///
/// Both endpoints of both intervals must be finite. The range may be
/// inverted (start above end), which is how the value axis maps larger
/// values to smaller y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> VisualResult<Self> {
        for (name, value) in [
            ("domain start", domain.0),
            ("domain end", domain.1),
            ("range start", range.0),
            ("range end", range.1),
        ] {
            if !value.is_finite() {
                return Err(VisualError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the range.
    ///
    /// A zero-span domain maps everything to the range start, so degenerate
    /// view models (all-zero measures) lay out as zero-height bars instead of
    /// producing non-finite geometry.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 || !value.is_finite() {
            return self.range_start;
        }

        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

/// Mapping from discrete category indices to equal-width pixel bands.
///
/// Bands carry an inner padding ratio between neighbours and the same ratio
/// as outer padding on both edges:
/// `step = span / (count + padding)`, `band_width = step * (1 - padding)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    end: f64,
    count: usize,
    padding_ratio: f64,
}

impl BandScale {
    pub fn new(count: usize, start: f64, end: f64, padding_ratio: f64) -> VisualResult<Self> {
        if count == 0 {
            return Err(VisualError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(VisualError::InvalidData(
                "band range must be finite and non-empty".to_owned(),
            ));
        }
        if !padding_ratio.is_finite() || !(0.0..1.0).contains(&padding_ratio) {
            return Err(VisualError::InvalidData(
                "band padding ratio must be in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            start,
            end,
            count,
            padding_ratio,
        })
    }

    /// Distance between the starts of two neighbouring bands.
    #[must_use]
    pub fn step(self) -> f64 {
        (self.end - self.start) / (self.count as f64 + self.padding_ratio)
    }

    #[must_use]
    pub fn band_width(self) -> f64 {
        self.step() * (1.0 - self.padding_ratio)
    }

    /// Left edge of band `index`. Indices past `count` extrapolate.
    #[must_use]
    pub fn band_start(self, index: usize) -> f64 {
        self.start + self.step() * (self.padding_ratio + index as f64)
    }

    #[must_use]
    pub fn band_center(self, index: usize) -> f64 {
        self.band_start(index) + self.band_width() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::{BandScale, LinearScale};

    #[test]
    fn linear_scale_maps_inverted_range() {
        let scale = LinearScale::new((0.0, 20.0), (550.0, 20.0)).expect("valid scale");
        assert_eq!(scale.map(0.0), 550.0);
        assert_eq!(scale.map(20.0), 20.0);
        assert_eq!(scale.map(10.0), 285.0);
    }

    #[test]
    fn linear_scale_zero_span_domain_maps_to_range_start() {
        let scale = LinearScale::new((0.0, 0.0), (550.0, 20.0)).expect("valid scale");
        assert_eq!(scale.map(7.0), 550.0);
    }

    #[test]
    fn linear_scale_rejects_non_finite_endpoints() {
        assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 1.0), (f64::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn band_scale_partitions_range_with_padding() {
        let scale = BandScale::new(3, 50.0, 1000.0, 0.1).expect("valid scale");
        let step = 950.0 / 3.1;

        assert!((scale.step() - step).abs() <= 1e-9);
        assert!((scale.band_width() - step * 0.9).abs() <= 1e-9);
        assert!((scale.band_start(0) - (50.0 + step * 0.1)).abs() <= 1e-9);
        assert!((scale.band_start(2) - (50.0 + step * 2.1)).abs() <= 1e-9);

        // Last band plus trailing outer padding lands on the range end.
        let tail = scale.band_start(2) + scale.band_width() + step * 0.1;
        assert!((tail - 1000.0).abs() <= 1e-9);
    }

    #[test]
    fn band_scale_rejects_empty_domain_and_range() {
        assert!(BandScale::new(0, 0.0, 100.0, 0.1).is_err());
        assert!(BandScale::new(3, 100.0, 100.0, 0.1).is_err());
        assert!(BandScale::new(3, 0.0, 100.0, 1.0).is_err());
    }
}
