//! # tictactoe3d
//!
//! **Tic-tac-toe on a 3D board, played with the mouse.**
//!
//! The board is a 3×3 grid of cells standing in front of a perspective
//! camera. Clicking casts a ray from the cursor into the scene; the cell
//! collider it hits receives the current player's mark. X always opens, a
//! completed row, column or diagonal wins, and Space starts over.
//!
//! ## Layout
//!
//! - [`Grid`], [`Board`], [`Game`]: pure game state, no GPU required
//! - [`picking`]: rays, colliders, and cell picking over a `hecs` world
//! - [`board_view`]: the draw list for a game state
//! - [`MeshPass`], [`GpuContext`], [`Mesh`]: wgpu rendering
//! - [`run`]: the winit event loop tying it together
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> Result<(), tictactoe3d::AppError> {
//!     tictactoe3d::run(tictactoe3d::AppConfig::new().size(1024, 768))
//! }
//! ```

mod app;
mod board;
pub mod board_view;
mod camera;
mod color;
mod config;
mod error;
mod game;
mod gpu;
mod grid;
mod input;
mod mesh;
mod mesh_pass;
pub mod picking;
pub mod shapes;

pub use app::{FrameAction, FrameInput, pick_and_place, run, status_line, step};
pub use board::{BOARD_SIZE, Board, Cell, Line, Mark};
pub use camera::Camera;
pub use color::Color;
pub use config::AppConfig;
pub use error::{AppError, ConfigError, MoveError};
pub use game::{Game, GameStatus, MoveOutcome};
pub use gpu::GpuContext;
pub use grid::Grid;
pub use input::Input;
pub use mesh::{Mesh, Transform, Vertex3d};
pub use mesh_pass::{DrawCall, Light, MeshPass};
pub use picking::{CellIndex, Collider, Ray, RayHit};

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
