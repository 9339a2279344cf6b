//! Game tuning
//!
//! Every value here is fixed for the lifetime of a session. Tuning can be
//! loaded from partial JSON; missing keys fall back to the defaults in
//! [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick while a direction is held
    pub paddle_speed: f32,
    /// Gap below the paddle
    pub paddle_bottom_margin: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Center height above the bottom edge at serve
    pub ball_start_height: f32,
    /// Velocity given to the ball on launch
    pub ball_velocity: Vec2,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Deflection ===
    pub deflect_near_zone: f32,
    pub deflect_far_zone: f32,
    pub deflect_coefficient: f32,

    /// Balls per session, counting the one in play: `1` ends the session on
    /// the first lost ball. Lives-based classics often count spare balls
    /// instead, so their "3 lives" is `4` here.
    pub lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,

            ball_radius: BALL_RADIUS,
            ball_start_height: BALL_START_HEIGHT,
            ball_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            deflect_near_zone: DEFLECT_NEAR_ZONE,
            deflect_far_zone: DEFLECT_FAR_ZONE,
            deflect_coefficient: DEFLECT_COEFFICIENT,

            lives: LIVES,
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

impl Tuning {
    /// Parse tuning overrides from JSON and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Total bricks in the grid (the winning score)
    pub fn brick_count(&self) -> u32 {
        self.brick_rows.saturating_mul(self.brick_columns)
    }

    /// Paddle top-left at serve (horizontally centered)
    pub fn paddle_origin(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.paddle_width) / 2.0,
            self.field_height - self.paddle_height - self.paddle_bottom_margin,
        )
    }

    /// Ball center at serve (above the paddle center)
    pub fn ball_origin(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0,
            self.field_height - self.ball_start_height,
        )
    }

    /// Reject tuning that cannot produce a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(ConfigError::InvalidField(format!(
                "{}x{} must be positive",
                self.field_width, self.field_height
            )));
        }

        if !positive(self.paddle_width) || !positive(self.paddle_height) {
            return Err(ConfigError::InvalidPaddle(format!(
                "size {}x{} must be positive",
                self.paddle_width, self.paddle_height
            )));
        }
        if self.paddle_width > self.field_width {
            return Err(ConfigError::InvalidPaddle(format!(
                "width {} exceeds field width {}",
                self.paddle_width, self.field_width
            )));
        }
        if !non_negative(self.paddle_speed) || !non_negative(self.paddle_bottom_margin) {
            return Err(ConfigError::InvalidPaddle(
                "speed and bottom margin must be non-negative".to_string(),
            ));
        }
        if self.paddle_height + self.paddle_bottom_margin > self.field_height {
            return Err(ConfigError::InvalidPaddle(
                "paddle does not fit inside the field".to_string(),
            ));
        }

        if !positive(self.ball_radius) {
            return Err(ConfigError::InvalidBall(format!(
                "radius {} must be positive",
                self.ball_radius
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(ConfigError::InvalidBall("velocity must be finite".to_string()));
        }
        if !non_negative(self.ball_start_height) || self.ball_start_height > self.field_height {
            return Err(ConfigError::InvalidBall(format!(
                "start height {} must lie inside the field",
                self.ball_start_height
            )));
        }

        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::InvalidBricks(format!(
                "grid {}x{} must have at least one brick",
                self.brick_rows, self.brick_columns
            )));
        }
        match self.brick_rows.checked_mul(self.brick_columns) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::InvalidBricks(format!(
                    "grid {}x{} exceeds {} bricks",
                    self.brick_rows, self.brick_columns, MAX_BRICKS
                )));
            }
        }
        if !positive(self.brick_width) || !positive(self.brick_height) {
            return Err(ConfigError::InvalidBricks(format!(
                "size {}x{} must be positive",
                self.brick_width, self.brick_height
            )));
        }
        if !non_negative(self.brick_padding)
            || !self.brick_offset_top.is_finite()
            || !self.brick_offset_left.is_finite()
        {
            return Err(ConfigError::InvalidBricks(
                "padding must be non-negative and offsets finite".to_string(),
            ));
        }

        let zones_ok = (0.0..=1.0).contains(&self.deflect_near_zone)
            && (0.0..=1.0).contains(&self.deflect_far_zone)
            && self.deflect_near_zone + self.deflect_far_zone <= 1.0;
        if !zones_ok {
            return Err(ConfigError::InvalidDeflection(format!(
                "zones {}/{} must be fractions that do not overlap",
                self.deflect_near_zone, self.deflect_far_zone
            )));
        }
        if !non_negative(self.deflect_coefficient) {
            return Err(ConfigError::InvalidDeflection(format!(
                "coefficient {} must be non-negative",
                self.deflect_coefficient
            )));
        }

        if self.lives == 0 {
            return Err(ConfigError::InvalidLives(self.lives));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.brick_count(), 15);
        assert_eq!(tuning.paddle_origin(), Vec2::new(202.5, 300.0));
        assert_eq!(tuning.ball_origin(), Vec2::new(240.0, 270.0));
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = Tuning::from_json(r#"{ "brick_rows": 4, "lives": 3 }"#).unwrap();
        assert_eq!(tuning.brick_rows, 4);
        assert_eq!(tuning.lives, 3);
        assert_eq!(tuning.brick_columns, BRICK_COLUMNS);
        assert_eq!(tuning.ball_velocity, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ brick_rows: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_field() {
        let tuning = Tuning {
            field_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidField(_))));

        let tuning = Tuning {
            field_height: -10.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidField(_))));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let tuning = Tuning {
            brick_columns: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidBricks(_))));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = Tuning::from_json(r#"{ "brick_rows": 70000, "brick_columns": 70000 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBricks(_)));

        let tuning = Tuning {
            brick_rows: 101,
            brick_columns: 100,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidBricks(_))));

        let tuning = Tuning {
            brick_rows: 100,
            brick_columns: 100,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.brick_count(), MAX_BRICKS);
    }

    #[test]
    fn test_rejects_bad_entities() {
        let tuning = Tuning {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidBall(_))));

        let tuning = Tuning {
            paddle_width: 600.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidPaddle(_))));

        let tuning = Tuning {
            paddle_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidPaddle(_))));
    }

    #[test]
    fn test_rejects_overlapping_zones() {
        let tuning = Tuning {
            deflect_near_zone: 0.6,
            deflect_far_zone: 0.6,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidDeflection(_))
        ));
    }

    #[test]
    fn test_rejects_zero_lives() {
        let tuning = Tuning {
            lives: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::InvalidLives(0))));
    }
}
