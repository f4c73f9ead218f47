//! Error types.

use derive_more::{Display, Error, From};

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game already has a result; reset to play again.
    #[display("game is over")]
    GameOver,
    #[display("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },
    #[display("cell ({row}, {column}) is already taken")]
    Occupied { row: usize, column: usize },
}

/// An invalid [`AppConfig`](crate::AppConfig) value.
#[derive(Clone, Debug, PartialEq, Display, Error)]
#[display("invalid config: {field} {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: String,
}

impl ConfigError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Fatal errors raised while starting or running the game window.
#[derive(Debug, Display, Error, From)]
pub enum AppError {
    #[display("event loop error: {_0}")]
    EventLoop(winit::error::EventLoopError),
    #[display("failed to create window: {_0}")]
    Window(winit::error::OsError),
    #[display("failed to create surface: {_0}")]
    Surface(wgpu::CreateSurfaceError),
    #[display("no suitable GPU adapter: {_0}")]
    Adapter(wgpu::RequestAdapterError),
    #[display("failed to create device: {_0}")]
    Device(wgpu::RequestDeviceError),
    #[display("{_0}")]
    Config(ConfigError),
    /// The surface reports no usable texture format.
    #[display("surface has no supported formats")]
    #[from(ignore)]
    NoSurfaceFormat,
    #[display("out of GPU memory")]
    #[from(ignore)]
    OutOfMemory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
        assert_eq!(
            MoveError::Occupied { row: 1, column: 2 }.to_string(),
            "cell (1, 2) is already taken"
        );
    }

    #[test]
    fn config_error_converts_into_app_error() {
        let err: AppError = ConfigError::new("width", "must be positive").into();
        assert_eq!(err.to_string(), "invalid config: width must be positive");
    }
}
