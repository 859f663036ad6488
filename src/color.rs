use rand::Rng;
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("expected finite components, got: ({r}, {g}, {b})")]
    InvalidComponent { r: f64, g: f64, b: f64 },
}

/// Three dimensional vector with some color related methods.
///
/// Components are unbounded during computation; [`Color::trim`] snaps a
/// vector back into the displayable [0, 255] range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, ColorError> {
        if !(r.is_finite() && g.is_finite() && b.is_finite()) {
            return Err(ColorError::InvalidComponent { r, g, b });
        }

        Ok(Self { r, g, b })
    }

    /// Returns a color with each component drawn uniformly from [0, 255].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0.0..=255.0),
            g: rng.gen_range(0.0..=255.0),
            b: rng.gen_range(0.0..=255.0),
        }
    }

    /// Returns a vector with each component drawn uniformly between `min`
    /// and `max`. An inverted range (`min > max`) flips the distribution
    /// rather than failing.
    pub fn random_components_between<R: Rng>(rng: &mut R, min: f64, max: f64) -> Self {
        let scale = max - min;

        Self {
            r: scale * rng.gen_range(0.0..1.0) + min,
            g: scale * rng.gen_range(0.0..1.0) + min,
            b: scale * rng.gen_range(0.0..1.0) + min,
        }
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            r: self.g * other.b - self.b * other.g,
            g: self.b * other.r - self.r * other.b,
            b: self.r * other.g - self.g * other.r,
        }
    }

    pub fn scale(self, scalar: f64) -> Self {
        Self {
            r: self.r * scalar,
            g: self.g * scalar,
            b: self.b * scalar,
        }
    }

    /// Rounds each component to the nearest integer and clamps it to
    /// [0, 255]. Idempotent on values that are already valid colors.
    pub fn trim(self) -> Self {
        Self {
            r: self.r.round().clamp(0.0, 255.0),
            g: self.g.round().clamp(0.0, 255.0),
            b: self.b.round().clamp(0.0, 255.0),
        }
    }

    /// The trimmed color as opaque RGBA bytes, ready for a framebuffer.
    pub fn to_rgba(self) -> [u8; 4] {
        let trimmed = self.trim();

        [trimmed.r as u8, trimmed.g as u8, trimmed.b as u8, 0xff]
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trimmed = self.trim();

        write!(
            f,
            "rgb({}, {}, {})",
            trimmed.r as u8, trimmed.g as u8, trimmed.b as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn color(r: f64, g: f64, b: f64) -> Color {
        Color::new(r, g, b).unwrap()
    }

    #[test]
    fn construction_rejects_non_finite_components() {
        assert!(matches!(
            Color::new(f64::NAN, 0.0, 0.0),
            Err(ColorError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Color::new(0.0, f64::INFINITY, 0.0),
            Err(ColorError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Color::new(0.0, 0.0, f64::NEG_INFINITY),
            Err(ColorError::InvalidComponent { .. })
        ));
        assert!(Color::new(10.0, 20.0, 30.0).is_ok());
    }

    #[test]
    fn addition_is_componentwise() {
        assert_eq!(
            color(10.0, 20.0, 30.0) + color(1.0, 1.0, 1.0),
            color(11.0, 21.0, 31.0)
        );
    }

    #[test]
    fn subtraction_is_componentwise() {
        assert_eq!(
            color(10.0, 20.0, 30.0) - color(1.0, 2.0, 3.0),
            color(9.0, 18.0, 27.0)
        );
    }

    #[test]
    fn cross_product_matches_hand_computation() {
        let a = color(1.0, 2.0, 3.0);
        let b = color(4.0, 5.0, 6.0);

        // (2*6 - 3*5, 3*4 - 1*6, 1*5 - 2*4)
        assert_eq!(a.cross(b), color(-3.0, 6.0, -3.0));
    }

    #[test]
    fn cross_with_self_is_zero() {
        let a = color(12.0, 34.0, 56.0);

        assert_eq!(a.cross(a), color(0.0, 0.0, 0.0));
    }

    #[test]
    fn scale_multiplies_each_component() {
        assert_eq!(color(1.0, -2.0, 3.0).scale(2.5), color(2.5, -5.0, 7.5));
    }

    #[test]
    fn trim_rounds_and_clamps() {
        assert_eq!(color(-40.2, 103.7, 300.0).trim(), color(0.0, 104.0, 255.0));
    }

    #[test]
    fn trim_is_idempotent_on_valid_colors() {
        let valid = color(0.0, 128.0, 255.0);

        assert_eq!(valid.trim(), valid);
        assert_eq!(valid.trim().trim(), valid);
    }

    #[test]
    fn display_encodes_the_trimmed_color() {
        assert_eq!(color(12.0, 34.0, 56.0).to_string(), "rgb(12, 34, 56)");
        assert_eq!(color(-5.0, 99.6, 800.0).to_string(), "rgb(0, 100, 255)");
    }

    #[test]
    fn to_rgba_is_opaque() {
        assert_eq!(color(1.0, 2.0, 3.0).to_rgba(), [1, 2, 3, 0xff]);
        assert_eq!(color(-1.0, 256.0, 127.5).to_rgba(), [0, 255, 128, 0xff]);
    }

    #[test]
    fn random_components_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..100 {
            let c = Color::random(&mut rng);
            assert!((0.0..=255.0).contains(&c.r));
            assert!((0.0..=255.0).contains(&c.g));
            assert!((0.0..=255.0).contains(&c.b));

            let kick = Color::random_components_between(&mut rng, 0.0, 2.0);
            assert!((0.0..2.0).contains(&kick.r));
            assert!((0.0..2.0).contains(&kick.g));
            assert!((0.0..2.0).contains(&kick.b));
        }
    }

    #[test]
    fn random_components_between_handles_degenerate_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let c = Color::random_components_between(&mut rng, 1.5, 1.5);

        assert_eq!(c, color(1.5, 1.5, 1.5));
    }
}
