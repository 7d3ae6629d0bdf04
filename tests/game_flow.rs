use multiplication_four::ai::{Agent, HeuristicAgent, LineHeuristic, MoveEvaluator, RandomAgent};
use multiplication_four::error::{MoveError, SaveError};
use multiplication_four::game::{
    find_winner, Board, Game, GameState, GameStatus, Owner, Player, TurnStart,
};
use multiplication_four::persistence::{SaveStore, SaveStoreConfig, SavedGame};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game_with(active_factor: u8, turn: Player, human: &[u32], computer: &[u32]) -> Game {
    let mut board = Board::new();
    for &p in human {
        board.claim(p, Player::Human).unwrap();
    }
    for &p in computer {
        board.claim(p, Player::Computer).unwrap();
    }
    Game::from_saved(SavedGame {
        state: GameState::new(active_factor, turn).unwrap(),
        board,
    })
}

fn play_out(game: &mut Game, computer: &mut dyn Agent, human: &mut RandomAgent) {
    for _ in 0..100 {
        match game.begin_turn() {
            Ok(TurnStart::Ready(Player::Human)) => {
                let factor = human.pick(&game.legal_factors()).unwrap();
                game.submit_human_factor(factor).unwrap();
            }
            Ok(TurnStart::Ready(Player::Computer)) => {
                game.play_computer_turn(computer).unwrap();
            }
            Ok(TurnStart::Passed { .. }) => {}
            Ok(TurnStart::Draw) | Err(MoveError::GameOver) => return,
            Err(e) => panic!("unexpected error: {e}"),
        }
        if game.is_over() {
            return;
        }
    }
    panic!("game did not finish");
}

#[test]
fn full_games_always_terminate() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(&mut rng);
        let mut computer = HeuristicAgent::with_seed(seed);
        let mut human = RandomAgent::with_seed(seed + 1000);
        play_out(&mut game, &mut computer, &mut human);

        match game.status() {
            GameStatus::Won(p) => assert_eq!(find_winner(game.board()), Some(p)),
            GameStatus::Draw => assert!(game.legal_factors().is_empty()),
            other => panic!("seed {seed}: unexpected status {other:?}"),
        }
    }
}

#[test]
fn legal_factors_follow_active_factor() {
    let game = game_with(5, Player::Human, &[], &[]);
    // every multiple of 5 up to 45 is on the board
    assert_eq!(game.legal_factors(), (1..=9).collect::<Vec<u8>>());

    let game = game_with(5, Player::Human, &[10, 20], &[40]);
    assert_eq!(game.legal_factors(), vec![1, 3, 5, 6, 7, 9]);
}

#[test]
fn computer_completes_row_for_the_win() {
    let mut game = game_with(3, Player::Computer, &[], &[3, 4, 5]);
    let mut agent = HeuristicAgent::with_seed(1);
    assert_eq!(game.begin_turn(), Ok(TurnStart::Ready(Player::Computer)));
    game.play_computer_turn(&mut agent).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::Computer));
    assert_eq!(game.active_factor(), 2);
    assert_eq!(game.board().get(0, 5).owner, Owner::Computer);
}

#[test]
fn human_illegal_move_keeps_turn() {
    let mut game = game_with(4, Player::Human, &[], &[12]);
    let err = game.submit_human_factor(3).unwrap_err();
    assert_eq!(
        err,
        MoveError::IllegalMove {
            factor: 3,
            active_factor: 4,
            product: 12
        }
    );
    assert_eq!(game.status(), GameStatus::AwaitingMove(Player::Human));
    assert_eq!(game.active_factor(), 4);
}

#[test]
fn stuck_position_is_a_draw() {
    let mut game = game_with(7, Player::Human, &[7, 14, 21, 28, 35, 49, 56, 63], &[42]);
    assert_eq!(game.begin_turn(), Ok(TurnStart::Draw));
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn save_and_resume_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(SaveStoreConfig {
        path: dir.path().join("slot.txt"),
    });
    assert!(!store.exists());

    let game = game_with(6, Player::Computer, &[1, 2, 36], &[81, 8]);
    store.save(&game.save_text()).unwrap();
    assert!(store.exists());

    let resumed = Game::from_saved(store.load().unwrap());
    assert_eq!(resumed.board(), game.board());
    assert_eq!(resumed.state(), game.state());
    assert_eq!(resumed.status(), GameStatus::AwaitingMove(Player::Computer));
}

#[test]
fn missing_save_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing.txt");
    let store = SaveStore::new(SaveStoreConfig { path: path.clone() });
    match store.load() {
        Err(SaveError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn malformed_save_leaves_game_untouched() {
    let mut game = game_with(2, Player::Human, &[4], &[]);
    let before = game.snapshot();
    let text = "3\n1\n0 0 0 0 0 0\n0 0 9 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n";
    assert!(matches!(
        game.load_text(text),
        Err(SaveError::Malformed { .. })
    ));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn evaluation_leaves_board_as_found() {
    let mut board = Board::new();
    board.claim(8, Player::Computer).unwrap();
    board.claim(9, Player::Human).unwrap();
    let before = board.clone();
    for product in [1, 10, 16, 81] {
        LineHeuristic.evaluate(&mut board, product, Player::Computer);
        LineHeuristic.evaluate(&mut board, product, Player::Human);
    }
    assert_eq!(board, before);

    let mut agent = HeuristicAgent::with_seed(3);
    let state = GameState::new(2, Player::Computer).unwrap();
    agent.choose_factor(&mut board, &state);
    assert_eq!(board, before);
}
