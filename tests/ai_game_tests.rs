use broadside::{
    play_game, AiPlayer, Board, BoardError, Coord, GameConfig, GameEngine, GameError,
    GameStatus, GuessOutcome, InvalidGuess, OpponentView, Player, Seat, ShipType, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn run_ai_game(config: GameConfig, seed: u64) -> (GameEngine, broadside::GameReport) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = AiPlayer::new(config.board_size());
    let mut p2 = AiPlayer::new(config.board_size());
    let mut engine = GameEngine::new(config).unwrap();
    engine.setup(&mut rng, &mut p1, &mut p2).unwrap();
    let report = play_game(&mut engine, &mut p1, &mut p2, &mut rng).unwrap();
    (engine, report)
}

#[test]
fn test_ai_vs_ai_game() {
    let fleet_cells: usize = FLEET.iter().map(|s| s.length()).sum();
    for seed in [1, 123, 9_999] {
        let (engine, report) = run_ai_game(GameConfig::default(), seed);
        assert_eq!(engine.status(), GameStatus::Won(report.winner));

        let (winner, loser) = match report.winner {
            Seat::First => (report.first, report.second),
            Seat::Second => (report.second, report.first),
        };
        assert_eq!(winner.hits, fleet_cells);
        assert_eq!(loser.ships_remaining, 0);
        assert!(winner.ships_remaining > 0);
        assert_eq!(report.turns, report.first.guesses + report.second.guesses);
        assert!(engine.board(report.winner.other()).all_ships_sunk());
    }
}

#[test]
fn test_small_board_game_finishes() {
    let config = GameConfig::from_lengths(5, &[3, 2]).unwrap();
    let (_, report) = run_ai_game(config, 77);
    assert!(report.turns <= 2 * 25);
}

#[test]
fn test_fire_after_game_over_is_refused() {
    let (mut engine, _) = run_ai_game(GameConfig::from_lengths(4, &[2]).unwrap(), 5);
    assert_eq!(engine.fire(Coord::new(0, 0)), Err(GameError::GameOver));
}

#[test]
fn test_rejected_guess_keeps_the_turn() {
    let mut engine = GameEngine::new(GameConfig::from_lengths(4, &[2]).unwrap()).unwrap();
    for seat in [Seat::First, Seat::Second] {
        engine
            .board_mut(seat)
            .place_ship(
                broadside::Ship::new(ShipType::new("Destroyer", 2)),
                Coord::new(3, 0),
                broadside::Orientation::Horizontal,
                false,
            )
            .unwrap();
    }

    assert!(engine.fire(Coord::new(0, 0)).unwrap().is_valid());
    assert_eq!(engine.turn(), Seat::Second);
    assert_eq!(
        engine.fire(Coord::new(9, 9)).unwrap(),
        GuessOutcome::Invalid(InvalidGuess::OutOfBounds)
    );
    assert_eq!(engine.turn(), Seat::Second);
    assert_eq!(engine.turns(), 1);
}

#[test]
fn test_empty_fleet_is_already_sunk() {
    let mut rng = SmallRng::seed_from_u64(3);
    let config = GameConfig::from_lengths(4, &[2]).unwrap();
    let mut p1 = AiPlayer::new(4);
    let mut p2 = AiPlayer::new(4);
    let mut engine = GameEngine::new(config).unwrap();

    // no setup: neither board holds a ship, so the seat to move has won
    assert_eq!(engine.status(), GameStatus::Won(Seat::First));
    let report = play_game(&mut engine, &mut p1, &mut p2, &mut rng).unwrap();
    assert_eq!(report.winner, Seat::First);
    assert_eq!(report.turns, 0);
    assert_eq!(engine.fire(Coord::new(0, 0)), Err(GameError::GameOver));
}

#[test]
fn test_unplaced_defender_loses_before_any_shot() {
    let mut rng = SmallRng::seed_from_u64(4);
    let config = GameConfig::from_lengths(4, &[2]).unwrap();
    let mut p1 = AiPlayer::new(4);
    let mut engine = GameEngine::new(config.clone()).unwrap();
    p1.place_fleet(&mut rng, engine.board_mut(Seat::First), config.fleet())
        .unwrap();

    assert_eq!(engine.status(), GameStatus::Won(Seat::First));
    let mut p2 = AiPlayer::new(4);
    let report = play_game(&mut engine, &mut p1, &mut p2, &mut rng).unwrap();
    assert_eq!(report.winner, Seat::First);
    assert_eq!(report.turns, 0);
    assert_eq!(report.first.ships_remaining, 1);
}

/// Fires at the same cell every turn.
struct Stubborn;

impl Player for Stubborn {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        board.place_fleet_randomly(rng, fleet, false)
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _own: &Board,
        _opponent: OpponentView<'_>,
    ) -> Result<Coord, GameError> {
        Ok(Coord::new(0, 0))
    }
}

#[test]
fn test_repeated_computer_guess_aborts_game() {
    let mut rng = SmallRng::seed_from_u64(21);
    let config = GameConfig::default();
    let mut stubborn = Stubborn;
    let mut ai = AiPlayer::new(config.board_size());
    let mut engine = GameEngine::new(config).unwrap();
    engine.setup(&mut rng, &mut stubborn, &mut ai).unwrap();

    let err = play_game(&mut engine, &mut stubborn, &mut ai, &mut rng).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            coord: Coord::new(0, 0),
            reason: InvalidGuess::AlreadyGuessed,
        }
    );
}

#[test]
fn test_config_validation() {
    use broadside::ConfigError;
    assert_eq!(
        GameConfig::from_lengths(0, &[2]),
        Err(ConfigError::BoardSize { size: 0, max: 26 })
    );
    assert_eq!(GameConfig::from_lengths(5, &[]), Err(ConfigError::EmptyFleet));
    assert_eq!(GameConfig::from_lengths(5, &[0]), Err(ConfigError::ZeroLengthShip));
    assert_eq!(
        GameConfig::from_lengths(3, &[4]),
        Err(ConfigError::ShipTooLong { length: 4, size: 3 })
    );
    let config = GameConfig::from_lengths(6, &[5, 2]).unwrap();
    assert_eq!(config.fleet()[0].name(), "Carrier");
    assert_eq!(config.fleet()[1].name(), "Destroyer");
    assert_eq!(GameConfig::default().fleet(), &FLEET);
}
