use super::point::PointId;

/// A segment between two points; directed from `a` to `b` when used as an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start point.
    pub a: PointId,
    /// End point.
    pub b: PointId,
}

/// Auto-rotation requested by the script.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rotation {
    /// The view does not rotate.
    #[default]
    Off,
    /// The view rotates at the given positive speed.
    Speed(f64),
}

impl Rotation {
    /// Interprets a raw rotation value: only a finite positive speed rotates.
    #[must_use]
    pub fn from_raw(value: Option<f64>) -> Self {
        match value {
            Some(speed) if speed.is_finite() && speed > 0.0 => Self::Speed(speed),
            _ => Self::Off,
        }
    }

    /// Returns `true` if the view rotates.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Speed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_from_raw() {
        assert_eq!(Rotation::from_raw(None), Rotation::Off);
        assert_eq!(Rotation::from_raw(Some(0.0)), Rotation::Off);
        assert_eq!(Rotation::from_raw(Some(-1.0)), Rotation::Off);
        assert_eq!(Rotation::from_raw(Some(f64::NAN)), Rotation::Off);
        assert_eq!(Rotation::from_raw(Some(2.0)), Rotation::Speed(2.0));
        assert!(Rotation::from_raw(Some(0.5)).is_enabled());
    }
}
