use std::ops::{Range, RangeInclusive};

use rand::Rng;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::health::{DashboardSnapshot, LimbAngles, RiskLevel};

/// Largest joint angle the score is normalized against, in degrees.
pub const MAX_JOINT_ANGLE: f64 = 160.0;

/// Scores above this are low risk.
pub const LOW_RISK_THRESHOLD: f64 = 75.0;

/// Scores above this (and not above `LOW_RISK_THRESHOLD`) are moderate risk.
pub const MODERATE_RISK_THRESHOLD: f64 = 50.0;

/// Turns raw sensor readings into the numbers the dashboard charts show.
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Mobility score on a 0–100 scale: mean joint angle relative to
    /// `MAX_JOINT_ANGLE`, weighted by brain activity, rounded to 2 decimals.
    pub fn mobility_score(&self, angles: &LimbAngles, brain_activity: f64) -> f64 {
        let score = (angles.mean() / MAX_JOINT_ANGLE) * brain_activity * 100.0;
        round_to_hundredths(score)
    }

    /// Map a mobility score to a fall-risk band. Higher mobility, lower risk.
    pub fn fall_risk(&self, score: f64) -> RiskLevel {
        if score > LOW_RISK_THRESHOLD {
            RiskLevel::Low
        } else if score > MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Score one reading and classify it.
    pub fn snapshot(
        &self,
        angles: LimbAngles,
        brain_activity: f64,
    ) -> Result<DashboardSnapshot, CoreError> {
        if !brain_activity.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "brain activity must be finite, got {brain_activity}"
            )));
        }
        if angles.values().iter().any(|a| !a.is_finite()) {
            return Err(CoreError::ValidationError(
                "limb angles must be finite".into(),
            ));
        }

        let score = self.mobility_score(&angles, brain_activity);
        let risk = self.fall_risk(score);
        debug!(score, %risk, "scored dashboard reading");

        Ok(DashboardSnapshot {
            angles,
            brain_activity,
            score,
            risk,
        })
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces plausible sensor readings for demos.
pub struct SensorSimulator;

impl SensorSimulator {
    pub const ARM_RANGE: RangeInclusive<u32> = 20..=160;
    pub const LEG_RANGE: RangeInclusive<u32> = 10..=140;
    pub const BRAIN_RANGE: Range<f64> = 0.6..1.0;

    pub fn new() -> Self {
        Self
    }

    /// Random limb angles: arms in 20..=160, legs in 10..=140 degrees.
    pub fn limb_angles(&self) -> LimbAngles {
        self.limb_angles_from(&mut rand::thread_rng())
    }

    /// Like `limb_angles`, drawing from the given generator.
    pub fn limb_angles_from<R: Rng + ?Sized>(&self, rng: &mut R) -> LimbAngles {
        LimbAngles::new(
            f64::from(rng.gen_range(Self::ARM_RANGE)),
            f64::from(rng.gen_range(Self::ARM_RANGE)),
            f64::from(rng.gen_range(Self::LEG_RANGE)),
            f64::from(rng.gen_range(Self::LEG_RANGE)),
        )
    }

    /// Random brain activity factor in [0.6, 1.0).
    pub fn brain_activity(&self) -> f64 {
        self.brain_activity_from(&mut rand::thread_rng())
    }

    pub fn brain_activity_from<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(Self::BRAIN_RANGE)
    }

    /// A full simulated reading, scored.
    pub fn reading(&self, health: &HealthService) -> Result<DashboardSnapshot, CoreError> {
        let mut rng = rand::thread_rng();
        let angles = self.limb_angles_from(&mut rng);
        let brain = self.brain_activity_from(&mut rng);
        health.snapshot(angles, brain)
    }
}

impl Default for SensorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to two decimals, ties to even (52.125 → 52.12, 52.375 → 52.38).
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
