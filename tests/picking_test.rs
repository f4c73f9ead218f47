//! Screen-space clicks resolved to board cells.

use tictactoe3d::{
    AppConfig, Board, Camera, Game, GameStatus, Mark, MoveError, Vec2, Vec3, pick_and_place,
    picking,
};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Window pixel where `point` appears, y counting down from the top.
fn project(camera: &Camera, point: Vec3) -> Vec2 {
    let view_proj = camera.projection_matrix(VIEWPORT.x / VIEWPORT.y) * camera.view_matrix();
    let ndc = view_proj.project_point3(point);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * VIEWPORT.x,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.y,
    )
}

fn setup(config: &AppConfig) -> (Game, hecs::World, Camera) {
    let game = Game::new(config.cell_spacing);
    let mut world = hecs::World::new();
    picking::spawn_cell_colliders(&mut world, game.board(), config.collider_half_extents);
    (game, world, config.camera())
}

#[test]
fn clicking_each_cell_marks_that_cell() {
    let config = AppConfig::default();

    for index in 0..9 {
        let (mut game, world, camera) = setup(&config);
        let (row, column) = (index / 3, index % 3);
        let target = game.board().cell(row, column).unwrap().position;

        let outcome = pick_and_place(
            &mut game,
            &world,
            &camera,
            project(&camera, target),
            VIEWPORT,
            config.pick_distance,
        )
        .expect("click should hit a cell")
        .expect("cell should be free");

        assert_eq!((outcome.row, outcome.column), (row, column));
        assert_eq!(game.board().mark_at(row, column), Some(Mark::X));
    }
}

#[test]
fn clicking_outside_the_board_does_nothing() {
    let config = AppConfig::default();
    let (mut game, world, camera) = setup(&config);

    let corner = Vec2::new(5.0, 5.0);
    let result = pick_and_place(&mut game, &world, &camera, corner, VIEWPORT, 50.0);

    assert!(result.is_none());
    assert_eq!(game.moves(), 0);
    assert_eq!(game.turn(), Mark::X);
}

#[test]
fn short_pick_distance_misses() {
    let config = AppConfig::default();
    let (mut game, world, camera) = setup(&config);
    let center = project(&camera, Vec3::ZERO);

    assert!(pick_and_place(&mut game, &world, &camera, center, VIEWPORT, 5.0).is_none());
}

#[test]
fn clicking_a_taken_cell_is_rejected() {
    let config = AppConfig::default();
    let (mut game, world, camera) = setup(&config);
    let center = project(&camera, Vec3::ZERO);

    pick_and_place(&mut game, &world, &camera, center, VIEWPORT, 50.0)
        .unwrap()
        .unwrap();
    let second = pick_and_place(&mut game, &world, &camera, center, VIEWPORT, 50.0).unwrap();

    assert_eq!(second, Err(MoveError::Occupied { row: 1, column: 1 }));
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn clicks_play_out_a_full_game() {
    let config = AppConfig::default();
    let (mut game, world, camera) = setup(&config);

    // X takes the anti-diagonal while O plays the left column's lower cells.
    for (row, column) in [(0, 2), (1, 0), (1, 1), (2, 1), (2, 0)] {
        let target = game.board().cell(row, column).unwrap().position;
        pick_and_place(
            &mut game,
            &world,
            &camera,
            project(&camera, target),
            VIEWPORT,
            50.0,
        )
        .unwrap()
        .unwrap();
    }

    assert!(matches!(
        game.status(),
        GameStatus::Won {
            mark: Mark::X,
            line: [(0, 2), (1, 1), (2, 0)],
        }
    ));

    let center = project(&camera, Vec3::ZERO);
    let after = pick_and_place(&mut game, &world, &camera, center, VIEWPORT, 50.0).unwrap();
    assert_eq!(after, Err(MoveError::GameOver));
}

#[test]
fn wider_spacing_still_maps_cells() {
    let config = AppConfig::new().cell_spacing(5.0).camera_distance(20.0);
    let (mut game, world, camera) = setup(&config);
    let board = Board::new(config.cell_spacing);
    let top_right = board.cell(0, 2).unwrap().position;

    let outcome = pick_and_place(
        &mut game,
        &world,
        &camera,
        project(&camera, top_right),
        VIEWPORT,
        config.pick_distance,
    )
    .unwrap()
    .unwrap();

    assert_eq!((outcome.row, outcome.column), (0, 2));
}
