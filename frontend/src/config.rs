use log::{warn, Level};
use serde::Deserialize;

use crate::rig::error::RigError;
use crate::rig::smoothing::SmoothingRates;

pub const BRAND: &str = "NetDevTech";
pub const DOMAIN: &str = "netdevtech.io";
pub const CONTACT_EMAIL: &str = "contact@netdevtech.io";
pub const INFO_EMAIL: &str = "info@netdevtech.io";

/// Id of the inline JSON element that may override rig defaults.
pub const RIG_CONFIG_ELEMENT: &str = "rig-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables of the robot rig and the background decoration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Elapsed time added per rendered frame.
    pub time_step: f32,
    /// Root x at progress 0 and 1.
    pub start_x: f32,
    pub end_x: f32,
    /// Root y at progress 0 and 1.
    pub top_y: f32,
    pub bottom_y: f32,
    /// Where the figure sits before the first frame.
    pub mount_position: [f32; 3],
    /// Peak body yaw over a full scroll.
    pub sway: f32,
    /// Progress delta per frame above which the figure walks.
    pub moving_threshold: f32,
    pub smoothing: SmoothingRates,
    pub ambient: AmbientConfig,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            start_x: -15.0,
            end_x: 10.0,
            top_y: 15.0,
            bottom_y: -15.0,
            mount_position: [-12.0, 0.0, 0.0],
            sway: 0.1,
            moving_threshold: 0.0005,
            smoothing: SmoothingRates::default(),
            ambient: AmbientConfig::default(),
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<(), RigError> {
        self.smoothing.validate()?;
        if !(self.time_step > 0.0) {
            return Err(RigError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if !(self.moving_threshold >= 0.0) {
            return Err(RigError::InvalidConfig(format!(
                "moving_threshold must not be negative, got {}",
                self.moving_threshold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub seed: u64,
    pub particles: usize,
    pub shapes: usize,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe,
            particles: 1000,
            shapes: 20,
        }
    }
}

pub fn parse_rig_config(json: &str) -> Result<RigConfig, RigError> {
    if json.trim().is_empty() {
        return Ok(RigConfig::default());
    }
    let config: RigConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Reads overrides from the page, falling back to defaults.
pub fn load_rig_config() -> RigConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RIG_CONFIG_ELEMENT))
        .and_then(|el| el.text_content());

    match inline {
        Some(json) => parse_rig_config(&json).unwrap_or_else(|e| {
            warn!("{}, using default rig config", e);
            RigConfig::default()
        }),
        None => RigConfig::default(),
    }
}
