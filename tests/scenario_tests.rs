//! End-to-end turn scenarios on a fixed 4x4 layout.
//!
//! `Unshuffled` deals the board in assembly order:
//!
//! ```text
//! A A B B
//! C C D D
//! E E F F
//! G G H H
//! ```

use memory_match::{
    BoardError, GameConfig, GameEngine, Position, TurnError, TurnOutcome, TurnPhase, Unshuffled,
    HIDDEN_GLYPH,
};

fn fixed_game() -> GameEngine {
    GameEngine::with_config(&GameConfig::new(4, 4), &mut Unshuffled).expect("4x4 is valid")
}

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

// =============================================================================
// Single Turns
// =============================================================================

/// First selection reveals the card and nothing else.
#[test]
fn test_first_selection_reveals() {
    let mut game = fixed_game();

    game.select_first(pos(0, 0)).unwrap();

    let card = game.board().at(pos(0, 0)).unwrap();
    assert_eq!(card.symbol(), 'A');
    assert!(card.is_revealed());
    assert!(!card.is_matched());
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.snapshot().cell(pos(0, 0)).unwrap().glyph, 'A');
    assert_eq!(game.snapshot().cell(pos(0, 1)).unwrap().glyph, HIDDEN_GLYPH);
}

/// Matching pair stays up and counts one move.
#[test]
fn test_matching_pair() {
    let mut game = fixed_game();

    game.select_first(pos(0, 0)).unwrap();
    let outcome = game.select_second(pos(0, 1)).unwrap();

    assert_eq!(outcome, TurnOutcome::Match('A'));
    assert!(game.board().at(pos(0, 0)).unwrap().is_matched());
    assert!(game.board().at(pos(0, 1)).unwrap().is_matched());
    assert_eq!(game.move_count(), 1);
}

/// Mismatch stays up until acknowledged, then both cards go back down.
#[test]
fn test_mismatch_then_acknowledge() {
    let mut game = fixed_game();
    game.select_first(pos(0, 0)).unwrap();
    game.select_second(pos(0, 1)).unwrap();

    game.select_first(pos(0, 2)).unwrap();
    let outcome = game.select_second(pos(1, 2)).unwrap();

    assert_eq!(outcome, TurnOutcome::Mismatch);
    assert_eq!(game.move_count(), 2);
    assert!(game.board().at(pos(0, 2)).unwrap().is_revealed());
    assert!(game.board().at(pos(1, 2)).unwrap().is_revealed());

    game.acknowledge_mismatch().unwrap();

    assert!(!game.board().at(pos(0, 2)).unwrap().is_revealed());
    assert!(!game.board().at(pos(1, 2)).unwrap().is_revealed());
    assert_eq!(game.move_count(), 2);
}

/// Selecting an already matched card first is rejected without a move.
#[test]
fn test_select_matched_card_first() {
    let mut game = fixed_game();
    game.select_first(pos(0, 0)).unwrap();
    game.select_second(pos(0, 1)).unwrap();

    assert_eq!(
        game.select_first(pos(0, 0)),
        Err(TurnError::CardAlreadyMatched(pos(0, 0)))
    );
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.phase(), TurnPhase::AwaitingFirstSelection);
}

// =============================================================================
// Whole Game
// =============================================================================

/// Matching all eight pairs completes the game in exactly eight moves.
#[test]
fn test_all_pairs_complete_game() {
    let mut game = fixed_game();

    for pair in 0..8 {
        let row = pair / 2;
        let col = (pair % 2) * 2;
        assert!(!game.is_complete(), "completed early after {pair} pairs");

        game.select_first(pos(row, col)).unwrap();
        let outcome = game.select_second(pos(row, col + 1)).unwrap();
        assert!(outcome.is_match());
    }

    assert!(game.is_complete());
    assert_eq!(game.move_count(), 8);
    assert_eq!(game.phase(), TurnPhase::GameComplete);
    assert!(game.board().all_matched());
    assert_eq!(game.history().len(), 8);
}

/// After completion every turn call fails and nothing changes.
#[test]
fn test_no_turns_after_completion() {
    let mut game = GameEngine::with_config(&GameConfig::new(1, 2), &mut Unshuffled).unwrap();
    game.select_first(pos(0, 0)).unwrap();
    game.select_second(pos(0, 1)).unwrap();
    assert!(game.is_complete());

    let before = game.snapshot();
    assert_eq!(game.select_first(pos(0, 0)), Err(TurnError::GameAlreadyComplete));
    assert_eq!(game.select_second(pos(0, 1)), Err(TurnError::GameAlreadyComplete));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.move_count(), 1);
}

/// Mixed game with mistakes: rejected turns never count.
#[test]
fn test_mistakes_do_not_count() {
    let mut game = fixed_game();

    // Same card twice
    game.select_first(pos(2, 0)).unwrap();
    assert!(matches!(
        game.select_second(pos(2, 0)),
        Err(TurnError::DuplicateSelection(_))
    ));

    // Off the board
    game.select_first(pos(2, 0)).unwrap();
    assert!(matches!(
        game.select_second(pos(4, 0)),
        Err(TurnError::OutOfBounds(_))
    ));

    // Recovers with a real second card
    assert_eq!(game.select_second(pos(2, 1)), Ok(TurnOutcome::Match('E')));

    // Matched card as second selection
    game.select_first(pos(3, 0)).unwrap();
    assert!(matches!(
        game.select_second(pos(2, 1)),
        Err(TurnError::CardAlreadyMatched(_))
    ));
    assert!(!game.board().at(pos(3, 0)).unwrap().is_revealed());

    assert_eq!(game.move_count(), 1);
    assert_eq!(game.history().len(), 1);
}

// =============================================================================
// Construction
// =============================================================================

/// Odd cell count is rejected.
#[test]
fn test_three_by_three_is_invalid() {
    assert_eq!(
        GameEngine::new(3, 3).unwrap_err(),
        BoardError::InvalidDimensions { rows: 3, cols: 3 }
    );
}

/// Human-facing coordinates translate to the same cards.
#[test]
fn test_one_based_coordinates() {
    let mut game = fixed_game();
    let first = Position::from_one_based(1, 1).unwrap();
    let second = Position::from_one_based(1, 2).unwrap();

    game.select_first(first).unwrap();
    assert_eq!(game.select_second(second), Ok(TurnOutcome::Match('A')));
}
