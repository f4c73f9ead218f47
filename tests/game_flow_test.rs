//! Turn order, results, and reset across whole games.

use tictactoe3d::{
    AppConfig, Camera, FrameAction, FrameInput, Game, GameStatus, Mark, MoveError, Vec2,
    picking, status_line, step,
};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// The board center is straight ahead of the default camera.
const CENTER_CLICK: Vec2 = Vec2::new(400.0, 300.0);

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, column) in moves {
        game.place(row, column).expect("legal move");
    }
}

#[test]
fn marks_alternate_starting_with_x() {
    let mut game = Game::default();
    let marks: Vec<_> = [(0, 0), (0, 1), (0, 2), (1, 0)]
        .into_iter()
        .map(|(r, c)| game.place(r, c).unwrap().mark)
        .collect();
    assert_eq!(marks, vec![Mark::X, Mark::O, Mark::X, Mark::O]);
}

#[test]
fn o_can_win() {
    let mut game = Game::default();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(
        game.status(),
        GameStatus::Won {
            mark: Mark::O,
            line: [(1, 0), (1, 1), (1, 2)],
        }
    );
    assert_eq!(status_line(&game), "O wins! Press Space to play again");
}

#[test]
fn status_line_follows_the_game() {
    let mut game = Game::default();
    assert_eq!(status_line(&game), "X to move");
    game.place(1, 1).unwrap();
    assert_eq!(status_line(&game), "O to move");

    play(
        &mut game,
        &[(0, 0), (0, 1), (2, 1), (1, 0), (1, 2), (2, 2), (0, 2), (2, 0)],
    );
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(status_line(&game), "Draw! Press Space to play again");
}

#[test]
fn moves_after_the_end_are_refused_until_reset() {
    let mut game = Game::default();
    play(&mut game, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
    assert!(game.is_over());
    assert_eq!(game.place(0, 1), Err(MoveError::GameOver));

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.place(0, 1).unwrap().mark, Mark::X);
}

#[test]
fn reset_mid_game_gives_the_turn_back_to_x() {
    let mut game = Game::default();
    play(&mut game, &[(0, 0)]);
    assert_eq!(game.turn(), Mark::O);

    game.reset();
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.board().mark_at(0, 0), None);
}

#[test]
fn positions_survive_many_resets() {
    let mut game = Game::new(4.0);
    let before = game.board().clone();
    for _ in 0..3 {
        play(&mut game, &[(0, 0), (1, 1)]);
        game.reset();
    }
    assert_eq!(game.board(), &before);
}

struct Table {
    game: Game,
    world: hecs::World,
    camera: Camera,
    pick_distance: f32,
}

impl Table {
    fn new() -> Self {
        let config = AppConfig::default();
        let game = Game::new(config.cell_spacing);
        let mut world = hecs::World::new();
        picking::spawn_cell_colliders(&mut world, game.board(), config.collider_half_extents);
        Self {
            game,
            world,
            camera: config.camera(),
            pick_distance: config.pick_distance,
        }
    }

    fn frame(&mut self, frame: FrameInput) -> FrameAction {
        step(
            &mut self.game,
            &self.world,
            &self.camera,
            VIEWPORT,
            self.pick_distance,
            frame,
        )
    }
}

fn click(at: Vec2) -> FrameInput {
    FrameInput {
        click: Some(at),
        ..FrameInput::default()
    }
}

#[test]
fn frame_click_places_the_current_mark() {
    let mut table = Table::new();
    assert_eq!(table.frame(click(CENTER_CLICK)), FrameAction::Continue);
    assert_eq!(table.game.board().mark_at(1, 1), Some(Mark::X));
    assert_eq!(table.game.turn(), Mark::O);
}

#[test]
fn click_after_a_win_is_ignored() {
    let mut table = Table::new();
    play(&mut table.game, &[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)]);
    assert!(table.game.is_over());

    assert_eq!(table.frame(click(CENTER_CLICK)), FrameAction::Continue);
    assert_eq!(table.game.board().mark_at(1, 1), None);
    assert_eq!(table.game.moves(), 5);
}

#[test]
fn click_and_reset_in_one_frame_leave_a_fresh_board() {
    let mut table = Table::new();
    table.frame(FrameInput {
        click: Some(CENTER_CLICK),
        reset: true,
        exit: false,
    });

    assert_eq!(table.game.moves(), 0);
    assert_eq!(table.game.board().mark_at(1, 1), None);
    assert_eq!(table.game.turn(), Mark::X);
    assert_eq!(table.game.status(), GameStatus::InProgress);
}

#[test]
fn reset_mid_game_frame_gives_the_turn_back_to_x() {
    let mut table = Table::new();
    table.frame(click(CENTER_CLICK));
    assert_eq!(table.game.turn(), Mark::O);

    table.frame(FrameInput {
        reset: true,
        ..FrameInput::default()
    });
    assert_eq!(table.game.turn(), Mark::X);
    assert_eq!(table.game.moves(), 0);
}

#[test]
fn exit_stops_before_the_click() {
    let mut table = Table::new();
    let action = table.frame(FrameInput {
        click: Some(CENTER_CLICK),
        reset: false,
        exit: true,
    });
    assert_eq!(action, FrameAction::Exit);
    assert_eq!(table.game.moves(), 0);
}

#[test]
fn empty_frame_changes_nothing() {
    let mut table = Table::new();
    table.frame(click(CENTER_CLICK));
    let before = table.game.clone();

    assert_eq!(table.frame(FrameInput::default()), FrameAction::Continue);
    assert_eq!(table.game.board(), before.board());
    assert_eq!(table.game.turn(), before.turn());
}
