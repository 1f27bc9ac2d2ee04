//! Discrete low-pass filter used for every animated attribute.
//!
//! Each frame an attribute moves a fixed fraction `k` of the way toward its
//! target: `a <- a + (t - a) * k`. There is no velocity state, so values never
//! overshoot and converge geometrically for any bounded target.

use serde::Deserialize;

use crate::rig::error::RigError;

/// Attribute classes, each with its own smoothing constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rate {
    /// Root position and body yaw.
    Body,
    /// Arm rotation, head, part positions and glow.
    Limb,
    /// Leg rotation while walking.
    Gait,
    /// Eye blink scale.
    Blink,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothingRates {
    pub body: f32,
    pub limb: f32,
    pub gait: f32,
    pub blink: f32,
}

impl Default for SmoothingRates {
    fn default() -> Self {
        Self {
            body: 0.08,
            limb: 0.1,
            gait: 0.15,
            blink: 0.3,
        }
    }
}

impl SmoothingRates {
    pub fn k(&self, rate: Rate) -> f32 {
        match rate {
            Rate::Body => self.body,
            Rate::Limb => self.limb,
            Rate::Gait => self.gait,
            Rate::Blink => self.blink,
        }
    }

    /// Every constant has to lie strictly inside (0, 1).
    pub fn validate(&self) -> Result<(), RigError> {
        for (name, k) in [
            ("body", self.body),
            ("limb", self.limb),
            ("gait", self.gait),
            ("blink", self.blink),
        ] {
            if !(k > 0.0 && k < 1.0) {
                return Err(RigError::InvalidConfig(format!(
                    "smoothing.{} must be in (0, 1), got {}",
                    name, k
                )));
            }
        }
        Ok(())
    }
}

#[inline]
pub fn approach(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_geometric_sequence() {
        let mut a = 0.0;
        a = approach(a, 10.0, 0.1);
        assert!((a - 1.0).abs() < 1e-6);
        a = approach(a, 10.0, 0.1);
        assert!((a - 1.9).abs() < 1e-6);
        for _ in 0..200 {
            a = approach(a, 10.0, 0.1);
        }
        assert!(a < 10.0);
        assert!((10.0 - a).abs() < 1e-3);
    }

    #[test]
    fn distance_shrinks_without_overshoot() {
        let rates = SmoothingRates::default();
        let targets = [3.0_f32, -2.5, 0.0, 7.25, 7.25, -1.0];
        for rate in [Rate::Body, Rate::Limb, Rate::Gait, Rate::Blink] {
            let k = rates.k(rate);
            let mut a = 0.5_f32;
            for &t in &targets {
                for _ in 0..5 {
                    let before = (t - a).abs();
                    let next = approach(a, t, k);
                    let after = (t - next).abs();
                    if before > 0.0 {
                        assert!(after < before, "{:?}: {} -> {} toward {}", rate, a, next, t);
                        // same side of the target as before
                        assert!((t - a).signum() == (t - next).signum() || after == 0.0);
                    }
                    a = next;
                }
            }
        }
    }

    #[test]
    fn equal_value_stays_put() {
        assert_eq!(approach(4.0, 4.0, 0.3), 4.0);
    }

    #[test]
    fn defaults_are_ordered_and_valid() {
        let r = SmoothingRates::default();
        assert!(r.validate().is_ok());
        assert!(r.body < r.limb);
        assert!(r.limb < r.gait);
        assert!(r.gait < r.blink);
    }

    #[test]
    fn rejects_out_of_range_constants() {
        let r = SmoothingRates {
            blink: 1.0,
            ..SmoothingRates::default()
        };
        assert!(r.validate().is_err());
        let r = SmoothingRates {
            body: 0.0,
            ..SmoothingRates::default()
        };
        assert!(r.validate().is_err());
        let r = SmoothingRates {
            limb: f32::NAN,
            ..SmoothingRates::default()
        };
        assert!(r.validate().is_err());
    }
}
