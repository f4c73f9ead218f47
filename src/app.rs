use std::sync::Arc;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::board_view::{self, MeshSet, Palette};
use crate::camera::Camera;
use crate::config::AppConfig;
use crate::error::{AppError, MoveError};
use crate::game::{Game, GameStatus, MoveOutcome};
use crate::gpu::GpuContext;
use crate::input::Input;
use crate::mesh_pass::{Light, MeshPass};
use crate::picking;

/// Run the game until the window is closed.
///
/// # Example
/// ```no_run
/// tictactoe3d::run(tictactoe3d::AppConfig::new().title("Tic-Tac-Toe"))
///     .expect("game crashed");
/// ```
pub fn run(config: AppConfig) -> Result<(), AppError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        state: State::Pending(config),
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Casts a ray through `cursor` and places the current mark on the cell it hits.
///
/// Returns `None` when the ray misses every cell, otherwise the result of the
/// move. `viewport` is the window size in the same pixels as `cursor`.
pub fn pick_and_place(
    game: &mut Game,
    world: &hecs::World,
    camera: &Camera,
    cursor: Vec2,
    viewport: Vec2,
    max_distance: f32,
) -> Option<Result<MoveOutcome, MoveError>> {
    let ray = camera.ray_from_screen(cursor.x, cursor.y, viewport.x, viewport.y);
    let index = picking::pick_cell(world, &ray, max_distance)?;
    Some(game.place_index(index))
}

/// What the player asked for during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Cursor position of a left-button press this frame.
    pub click: Option<Vec2>,
    /// Space was pressed.
    pub reset: bool,
    /// Escape was pressed.
    pub exit: bool,
}

impl FrameInput {
    pub fn from_input(input: &Input) -> Self {
        let click = if input.mouse_pressed(MouseButton::Left) {
            input.cursor_position()
        } else {
            None
        };
        Self {
            click,
            reset: input.key_pressed(KeyCode::Space),
            exit: input.key_pressed(KeyCode::Escape),
        }
    }
}

/// Whether the event loop should keep going after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    Continue,
    Exit,
}

/// Applies one frame of input to the game.
///
/// Exit wins over everything else. A click is only considered while the game
/// is in progress, and a reset is applied after the click, so both in the
/// same frame leave a fresh board.
pub fn step(
    game: &mut Game,
    world: &hecs::World,
    camera: &Camera,
    viewport: Vec2,
    pick_distance: f32,
    frame: FrameInput,
) -> FrameAction {
    if frame.exit {
        log::info!("Escape pressed, exiting");
        return FrameAction::Exit;
    }

    if let Some(cursor) = frame.click.filter(|_| !game.is_over()) {
        match pick_and_place(game, world, camera, cursor, viewport, pick_distance) {
            Some(Ok(outcome)) => {
                log::info!(
                    "{} took cell ({}, {})",
                    outcome.mark,
                    outcome.row,
                    outcome.column
                );
                match outcome.status {
                    GameStatus::Won { mark, line } => log::info!("{mark} wins with {line:?}"),
                    GameStatus::Draw => log::info!("Board full, draw"),
                    GameStatus::InProgress => {}
                }
            }
            Some(Err(err)) => log::debug!("Click ignored: {err}"),
            None => log::debug!("Click at {cursor} missed the board"),
        }
    }

    if frame.reset {
        game.reset();
        log::info!("Board reset, X to move");
    }

    FrameAction::Continue
}

/// Short human-readable game status, shown in the window title.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => format!("{} to move", game.turn()),
        GameStatus::Won { mark, .. } => format!("{mark} wins! Press Space to play again"),
        GameStatus::Draw => "Draw! Press Space to play again".to_string(),
    }
}

struct App {
    state: State,
    error: Option<AppError>,
}

enum State {
    Pending(AppConfig),
    Running(Box<Running>),
}

struct Running {
    config: AppConfig,
    window: Arc<Window>,
    gpu: GpuContext,
    mesh_pass: MeshPass,
    meshes: MeshSet,
    camera: Camera,
    light: Light,
    palette: Palette,
    game: Game,
    world: hecs::World,
    input: Input,
    title: String,
}

impl Running {
    fn new(event_loop: &ActiveEventLoop, config: AppConfig) -> Result<Self, AppError> {
        let window_attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let gpu = GpuContext::new(window.clone())?;
        let mesh_pass = MeshPass::new(&gpu);
        let meshes = MeshSet::new(&gpu, config.cell_spacing);

        let game = Game::new(config.cell_spacing);
        let mut world = hecs::World::new();
        picking::spawn_cell_colliders(&mut world, game.board(), config.collider_half_extents);

        log::info!(
            "Board ready: {}x{} cells, {} apart",
            game.board().rows(),
            game.board().columns(),
            config.cell_spacing
        );

        Ok(Self {
            camera: config.camera(),
            light: Light::default(),
            palette: Palette::default(),
            title: String::new(),
            config,
            window,
            gpu,
            mesh_pass,
            meshes,
            game,
            world,
            input: Input::new(),
        })
    }

    fn update(&mut self, event_loop: &ActiveEventLoop) {
        let viewport = Vec2::new(self.gpu.width() as f32, self.gpu.height() as f32);
        let action = step(
            &mut self.game,
            &self.world,
            &self.camera,
            viewport,
            self.config.pick_distance,
            FrameInput::from_input(&self.input),
        );
        if action == FrameAction::Exit {
            event_loop.exit();
            return;
        }

        let title = format!("{} | {}", self.config.title, status_line(&self.game));
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }

    fn render(&mut self) -> Result<(), AppError> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(AppError::OutOfMemory),
            Err(err) => {
                log::warn!("Surface error: {err}");
                return Ok(());
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let items = board_view::draw_items(&self.game, &self.palette);
        let calls = self.meshes.draw_calls(&items);
        self.mesh_pass
            .prepare(&self.gpu, &self.camera, &self.light, &calls);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Board Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Board Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.config.clear_color.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(self.mesh_pass.depth_attachment()),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.mesh_pass.render(&mut render_pass, &calls);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        output.present();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let State::Pending(config) = &self.state else {
            return;
        };

        match Running::new(event_loop, config.clone()) {
            Ok(running) => self.state = State::Running(Box::new(running)),
            Err(err) => {
                log::error!("Failed to start: {err}");
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let State::Running(running) = &mut self.state else {
            return;
        };

        running.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                running.gpu.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                running.update(event_loop);

                if let Err(err) = running.render() {
                    log::error!("Render failed: {err}");
                    self.error = Some(err);
                    event_loop.exit();
                    return;
                }

                running.input.begin_frame();
                running.window.request_redraw();
            }
            _ => {}
        }
    }
}
