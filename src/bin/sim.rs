use anyhow::{bail, Context};
use broadside::{
    init_logging, BoardState, Match, MatchConfig, PlayerInfo, RandomPlayer, Side, DEFAULT_BOARD_SIZE,
    DEFAULT_FLEET,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play an automated match between two random players and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RNG seed for player one.
    seed1: u64,
    /// RNG seed for player two.
    seed2: u64,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Ship lengths for each fleet, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FLEET.to_vec())]
    fleet: Vec<usize>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rngs = [
        SmallRng::seed_from_u64(cli.seed1),
        SmallRng::seed_from_u64(cli.seed2),
    ];
    let mut players = [RandomPlayer::new(), RandomPlayer::new()];

    let config = MatchConfig::new(cli.size, cli.fleet);
    let mut game = Match::new(
        config,
        PlayerInfo::automated("player1"),
        PlayerInfo::automated("player2"),
    )
    .context("invalid match configuration")?;

    for side in [Side::One, Side::Two] {
        let i = side.index();
        game.place_fleet_with(side, &mut players[i], &mut rngs[i])
            .with_context(|| format!("placing fleet for {}", game.player(side).name()))?;
    }

    let mut attacks = [0usize; 2];
    let mut turns = 0usize;
    while !game.is_over() {
        let i = game.active().index();
        let turn = game.play_automated_turn(&mut players[i], &mut rngs[i])?;
        attacks[i] += turn.reports.len();
        if let Some(err) = turn.rejected {
            bail!("{} picked a refused target: {}", game.active_player().name(), err);
        }
        if turn.reports.is_empty() {
            bail!("{} declined to move mid-game", game.active_player().name());
        }
        turns += 1;
    }

    let winner = game.winner().map(|side| game.player(side).name().to_string());
    let result = json!({
        "player1": {
            "attacks": attacks[0],
            "ships_remaining": game.board(Side::One).ships_remaining(),
            "board": BoardState::from(game.board(Side::One)),
        },
        "player2": {
            "attacks": attacks[1],
            "ships_remaining": game.board(Side::Two).ships_remaining(),
            "board": BoardState::from(game.board(Side::Two)),
        },
        "turns": turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
