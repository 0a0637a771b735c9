use serde::Deserialize;

use crate::{ConfigError, Params, SparkColor};

/// Dial drawing scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    #[serde(alias = "sm")]
    Small,
    #[default]
    #[serde(alias = "md")]
    Medium,
    #[serde(alias = "lg")]
    Large,
}

impl SizeVariant {
    /// Canvas side length in pixels
    pub fn side(self) -> f64 {
        match self {
            SizeVariant::Small => 200.0,
            SizeVariant::Medium => 300.0,
            SizeVariant::Large => 400.0,
        }
    }
}

/// Which hover emitters a spark button runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectVariant {
    Glow,
    Sparks,
    #[default]
    Both,
    F1,
}

impl EffectVariant {
    pub fn emits_trails(self) -> bool {
        matches!(self, EffectVariant::Glow | EffectVariant::Both)
    }

    pub fn emits_sparks(self) -> bool {
        matches!(self, EffectVariant::Sparks | EffectVariant::Both)
    }
}

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub max_value: f64,
    #[serde(alias = "sparkCapacity")]
    pub particle_capacity: usize,
    pub trail_capacity: usize,
    pub size_variant: SizeVariant,
    pub effect_variant: EffectVariant,
    pub race_mode: bool,
    pub seed: Option<u64>,
    /// CSS colour of the glow trails
    pub glow_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_value: Params::MAX_RPM,
            particle_capacity: Params::SPARK_CAPACITY,
            trail_capacity: Params::TRAIL_CAPACITY,
            size_variant: SizeVariant::default(),
            effect_variant: EffectVariant::default(),
            race_mode: false,
            seed: None,
            glow_color: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a host-supplied JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce NaN or unbounded buffers at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            log::warn!("rejecting config: max value {}", self.max_value);
            return Err(ConfigError::InvalidMaxValue(self.max_value));
        }
        check_capacity("particle capacity", self.particle_capacity)?;
        check_capacity("trail capacity", self.trail_capacity)?;
        Ok(())
    }

    /// Burn marks share the spark buffer with a doubled bound
    pub fn burn_capacity(&self) -> usize {
        self.particle_capacity.saturating_mul(2)
    }

    /// Trail colour, violet unless the host picked one
    pub fn glow_color(&self) -> &str {
        self.glow_color
            .as_deref()
            .filter(|color| !color.trim().is_empty())
            .unwrap_or(SparkColor::Violet.css())
    }

    pub fn emits_burns(&self) -> bool {
        self.race_mode || self.effect_variant == EffectVariant::F1
    }
}

fn check_capacity(what: &'static str, capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity(what));
    }
    if capacity > Params::MAX_CAPACITY {
        log::warn!("rejecting config: {what} {capacity}");
        return Err(ConfigError::CapacityTooLarge {
            what,
            got: capacity,
            max: Params::MAX_CAPACITY,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_value, 18000.0);
        assert_eq!(config.particle_capacity, 15);
        assert_eq!(config.trail_capacity, 8);
    }

    #[test]
    fn test_rejects_non_positive_max() {
        for max in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                max_value: max,
                ..Config::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidMaxValue(_))),
                "max {max} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = Config {
            trail_capacity: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCapacity("trail capacity"))
        ));
    }

    #[test]
    fn test_rejects_oversized_capacity() {
        let config = Config {
            particle_capacity: Params::MAX_CAPACITY + 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CapacityTooLarge {
                what: "particle capacity",
                ..
            })
        ));
        assert!(matches!(
            Config::from_json(r#"{"trailCapacity": 100000}"#),
            Err(ConfigError::CapacityTooLarge { .. })
        ));
        assert!(Config::from_json(r#"{"particleCapacity": 9223372036854775808}"#).is_err());

        let largest = Config {
            particle_capacity: Params::MAX_CAPACITY,
            trail_capacity: Params::MAX_CAPACITY,
            ..Config::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_burn_capacity_saturates() {
        let config = Config {
            particle_capacity: usize::MAX,
            ..Config::default()
        };
        assert_eq!(config.burn_capacity(), usize::MAX);
    }

    #[test]
    fn test_glow_color_from_json() {
        assert_eq!(Config::new().glow_color(), "#6C00FF");
        let config = Config::from_json(r##"{"glowColor": "#00E5FF"}"##).unwrap();
        assert_eq!(config.glow_color(), "#00E5FF");
        let blank = Config::from_json(r#"{"glowColor": "  "}"#).unwrap();
        assert_eq!(blank.glow_color(), "#6C00FF");
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"maxValue": 12000, "sizeVariant": "lg"}"#).unwrap();
        assert_eq!(config.max_value, 12000.0);
        assert_eq!(config.size_variant, SizeVariant::Large);
        assert_eq!(config.particle_capacity, Params::SPARK_CAPACITY);
        assert_eq!(config.effect_variant, EffectVariant::Both);
    }

    #[test]
    fn test_from_json_rejects_bad_max() {
        assert!(Config::from_json(r#"{"maxValue": 0}"#).is_err());
        assert!(matches!(
            Config::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_burns_enabled_by_race_mode_or_f1() {
        let mut config = Config::new();
        assert!(!config.emits_burns());
        config.race_mode = true;
        assert!(config.emits_burns());
        config.race_mode = false;
        config.effect_variant = EffectVariant::F1;
        assert!(config.emits_burns());
        assert!(!config.effect_variant.emits_sparks());
    }
}
