//! What to draw for a given game state.
//!
//! [`draw_items`] turns a [`Game`] into a flat list of [`DrawItem`]s naming a
//! [`MeshKind`] rather than a GPU mesh, so the scene can be built and checked
//! without a device. [`MeshSet`] resolves the kinds when the frame is recorded.

use glam::Vec3;

use crate::board::Mark;
use crate::color::Color;
use crate::game::{Game, GameStatus};
use crate::gpu::GpuContext;
use crate::mesh::{Mesh, Transform};
use crate::mesh_pass::DrawCall;
use crate::shapes::{self, RawGeometry};

/// Scale applied to every piece when drawn.
pub const MODEL_SCALE: f32 = 0.5;

/// The four meshes the board is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Backing tile behind each cell.
    Cover,
    /// Bars between the cells.
    Frame,
    X,
    O,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [MeshKind::Cover, MeshKind::Frame, MeshKind::X, MeshKind::O];

    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => MeshKind::X,
            Mark::O => MeshKind::O,
        }
    }
}

/// Colors of the board pieces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub frame: Color,
    pub cover: Color,
    pub x: Color,
    pub o: Color,
    /// Marks on the winning line are blended towards this.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            frame: Color::BLUE,
            cover: Color::BLUE,
            x: Color::YELLOW,
            o: Color::CYAN,
            highlight: Color::WHITE,
        }
    }
}

impl Palette {
    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// One mesh instance to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub transform: Transform,
    pub color: Color,
}

/// Builds the draw list for `game`: a cover per cell, the marks, then the frame.
pub fn draw_items(game: &Game, palette: &Palette) -> Vec<DrawItem> {
    let winning = match game.status() {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };

    let mut items = Vec::with_capacity(2 * game.board().grid().len() + 1);
    for (row, column, cell) in game.board().grid().iter() {
        let transform = Transform::from_position(cell.position).uniform_scale(MODEL_SCALE);

        items.push(DrawItem {
            mesh: MeshKind::Cover,
            transform,
            color: palette.cover,
        });

        if let Some(mark) = cell.mark {
            let on_line = winning.is_some_and(|line| line.contains(&(row, column)));
            let base = palette.mark(mark);
            items.push(DrawItem {
                mesh: MeshKind::for_mark(mark),
                transform,
                color: if on_line {
                    base.lerp(palette.highlight, 0.6)
                } else {
                    base
                },
            });
        }
    }

    items.push(DrawItem {
        mesh: MeshKind::Frame,
        transform: Transform::new().uniform_scale(MODEL_SCALE),
        color: palette.frame,
    });

    items
}

/// CPU geometry for `kind`, sized for cells `spacing` world units apart.
///
/// Geometry is in model space; it reaches world size through [`MODEL_SCALE`].
pub fn geometry(kind: MeshKind, spacing: f32) -> RawGeometry {
    let cell = spacing / MODEL_SCALE;
    match kind {
        MeshKind::Cover => shapes::cover_tile(cell * 0.93, cell * 0.07),
        MeshKind::Frame => shapes::board_frame(cell, cell * 3.0, cell * 0.05, cell * 0.1),
        MeshKind::X => shapes::cross_mark(cell * 0.8, cell * 0.14, cell * 0.12),
        MeshKind::O => shapes::ring_mark(cell * 0.3, cell * 0.07, 48, 16),
    }
}

/// GPU meshes for every [`MeshKind`].
pub struct MeshSet {
    cover: Mesh,
    frame: Mesh,
    x: Mesh,
    o: Mesh,
}

impl MeshSet {
    pub fn new(gpu: &GpuContext, spacing: f32) -> Self {
        let upload = |kind: MeshKind| {
            Mesh::from_geometry(gpu, &format!("{kind:?}"), &geometry(kind, spacing))
        };
        Self {
            cover: upload(MeshKind::Cover),
            frame: upload(MeshKind::Frame),
            x: upload(MeshKind::X),
            o: upload(MeshKind::O),
        }
    }

    pub fn get(&self, kind: MeshKind) -> &Mesh {
        match kind {
            MeshKind::Cover => &self.cover,
            MeshKind::Frame => &self.frame,
            MeshKind::X => &self.x,
            MeshKind::O => &self.o,
        }
    }

    /// Resolves draw items into draw calls for the mesh pass.
    pub fn draw_calls(&self, items: &[DrawItem]) -> Vec<DrawCall<'_>> {
        items
            .iter()
            .map(|item| DrawCall {
                mesh: self.get(item.mesh),
                transform: item.transform,
                color: item.color,
            })
            .collect()
    }
}

/// World-space bounding box of `kind` as drawn at the origin.
pub fn world_size(kind: MeshKind, spacing: f32) -> Vec3 {
    geometry(kind, spacing).size() * MODEL_SCALE
}
