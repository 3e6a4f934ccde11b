use broadside::prelude::*;
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const SIZE: usize = 6;

fn started_match(seed: u64) -> Match {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new(
        MatchConfig::new(SIZE, vec![3, 2]),
        PlayerInfo::human("left"),
        PlayerInfo::human("right"),
    )
    .unwrap();
    game.place_fleet_with(Side::One, &mut RandomPlayer, &mut rng)
        .unwrap();
    game.place_fleet_with(Side::Two, &mut RandomPlayer, &mut rng)
        .unwrap();
    game
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::One), Just(Side::Two)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Drive a match with arbitrary (often illegal) attacks and check the turn
    /// rules after every call.
    #[test]
    fn arbitrary_attacks_follow_turn_rules(
        seed in any::<u64>(),
        moves in prop::collection::vec((side(), 0..SIZE + 1, 0..SIZE + 1), 1..150),
    ) {
        let mut game = started_match(seed);
        for (attacker, x, y) in moves {
            let before_active = game.active();
            let before_phase = game.phase();
            let before_boards = (
                BoardState::from(game.board(Side::One)),
                BoardState::from(game.board(Side::Two)),
            );

            match game.attack(attacker, Coordinate::new(x, y)) {
                Err(err) => {
                    if attacker != before_active || before_phase != Phase::InProgress {
                        prop_assert_eq!(err, AttackError::NotYourTurn);
                    }
                    prop_assert_eq!(game.active(), before_active);
                    prop_assert_eq!(game.phase(), before_phase);
                    prop_assert_eq!(BoardState::from(game.board(Side::One)), before_boards.0);
                    prop_assert_eq!(BoardState::from(game.board(Side::Two)), before_boards.1);
                }
                Ok(report) => {
                    prop_assert_eq!(attacker, before_active);
                    match report.turn {
                        TurnEffect::Won { winner } => {
                            prop_assert_eq!(winner, attacker);
                            prop_assert!(game.board(attacker.opponent()).all_ships_sunk());
                            prop_assert_eq!(game.phase(), Phase::GameOver);
                            prop_assert_eq!(game.active(), attacker);
                        }
                        TurnEffect::AttackAgain => {
                            prop_assert!(report.outcome.is_hit());
                            prop_assert_eq!(game.active(), attacker);
                        }
                        TurnEffect::Switched { active } => {
                            prop_assert!(!report.outcome.is_hit());
                            prop_assert_eq!(active, attacker.opponent());
                            prop_assert_eq!(game.active(), active);
                        }
                    }
                }
            }
        }
    }
}
