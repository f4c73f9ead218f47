use glam::Vec3;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::ConfigError;

const DEFAULT_CELL_SPACING: f32 = 3.0;
const DEFAULT_COLLIDER_HALF_EXTENTS: Vec3 = Vec3::new(1.4, 1.4, 0.5);

/// Window and scene settings.
///
/// ```
/// use tictactoe3d::AppConfig;
///
/// let config = AppConfig::new().size(1024, 768).cell_spacing(3.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Distance between neighbouring cell centers.
    pub cell_spacing: f32,
    /// Distance from the camera to the board along +Z.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Longest ray accepted when picking a cell.
    pub pick_distance: f32,
    /// Half extents of each cell's picking box.
    pub collider_half_extents: Vec3,
    pub clear_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe".to_string(),
            width: 800,
            height: 600,
            cell_spacing: DEFAULT_CELL_SPACING,
            camera_distance: 12.0,
            fov_degrees: 60.0,
            pick_distance: 50.0,
            collider_half_extents: DEFAULT_COLLIDER_HALF_EXTENTS,
            clear_color: Color::rgb(0.45, 0.55, 0.60),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the cell spacing. Collider half extents follow in X and Y,
    /// proportional to the default spacing.
    pub fn cell_spacing(mut self, spacing: f32) -> Self {
        let ratio = spacing / DEFAULT_CELL_SPACING;
        self.cell_spacing = spacing;
        self.collider_half_extents = DEFAULT_COLLIDER_HALF_EXTENTS * Vec3::new(ratio, ratio, 1.0);
        self
    }

    pub fn camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }

    pub fn fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    pub fn pick_distance(mut self, distance: f32) -> Self {
        self.pick_distance = distance;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Rejects values the game cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::new("size", "must be non-zero"));
        }
        let positive = [
            ("cell_spacing", self.cell_spacing),
            ("camera_distance", self.camera_distance),
            ("pick_distance", self.pick_distance),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::new(field, format!("must be positive, got {value}")));
            }
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::new(
                "fov_degrees",
                format!("must be between 0 and 180, got {}", self.fov_degrees),
            ));
        }
        if !(self.collider_half_extents.cmpgt(Vec3::ZERO).all()) {
            return Err(ConfigError::new("collider_half_extents", "must be positive"));
        }
        Ok(())
    }

    /// Camera placed on the +Z axis looking at the board center.
    pub fn camera(&self) -> Camera {
        Camera::new()
            .at(Vec3::new(0.0, 0.0, self.camera_distance))
            .looking_at(Vec3::ZERO)
            .with_fov(self.fov_degrees)
    }
}
