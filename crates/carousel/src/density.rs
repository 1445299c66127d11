//! Card density: how many product cards fit in the viewport.
//!
//! Densities are fractional so a partial card peeks in at the trailing edge.

use serde::Serialize;

/// Fractional number of cards visible at once.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ProductsPerView(f64);

impl ProductsPerView {
    /// Wider than 1200px.
    pub const DESKTOP: Self = Self(6.5);
    /// 769px to 1200px.
    pub const LAPTOP: Self = Self(4.5);
    /// 481px to 768px.
    pub const TABLET: Self = Self(2.5);
    /// 480px and below.
    pub const MOBILE: Self = Self(1.5);

    /// A custom density; `None` unless `value` is finite and positive.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Density for a viewport `width` in CSS pixels.
    #[must_use]
    pub const fn for_viewport_width(width: u32) -> Self {
        match width {
            0..=480 => Self::MOBILE,
            481..=768 => Self::TABLET,
            769..=1200 => Self::LAPTOP,
            _ => Self::DESKTOP,
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Width of one card as a percentage of the track.
    #[must_use]
    pub fn item_width_percent(self) -> f64 {
        100.0 / self.0
    }
}

impl Default for ProductsPerView {
    fn default() -> Self {
        Self::DESKTOP
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(ProductsPerView::for_viewport_width(320), ProductsPerView::MOBILE);
        assert_eq!(ProductsPerView::for_viewport_width(480), ProductsPerView::MOBILE);
        assert_eq!(ProductsPerView::for_viewport_width(481), ProductsPerView::TABLET);
        assert_eq!(ProductsPerView::for_viewport_width(768), ProductsPerView::TABLET);
        assert_eq!(ProductsPerView::for_viewport_width(1024), ProductsPerView::LAPTOP);
        assert_eq!(ProductsPerView::for_viewport_width(1200), ProductsPerView::LAPTOP);
        assert_eq!(ProductsPerView::for_viewport_width(1201), ProductsPerView::DESKTOP);
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(ProductsPerView::new(0.0).is_none());
        assert!(ProductsPerView::new(-1.5).is_none());
        assert!(ProductsPerView::new(f64::NAN).is_none());
        assert!(ProductsPerView::new(f64::INFINITY).is_none());
        assert!((ProductsPerView::new(3.25).unwrap().get() - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_item_width_percent() {
        assert!((ProductsPerView::new(4.0).unwrap().item_width_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_desktop() {
        assert_eq!(ProductsPerView::default(), ProductsPerView::DESKTOP);
    }
}
