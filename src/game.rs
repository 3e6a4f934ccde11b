//! Turn coordination between two boards.
//!
//! A [`Match`] starts in [`Phase::Setup`] while both fleets are being placed,
//! moves to [`Phase::InProgress`] once every configured ship is on both
//! boards, and ends in [`Phase::GameOver`] when an attack leaves the defending
//! fleet fully sunk.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackError, AttackOutcome, ConfigError, Coordinate, PlacementError},
    config::MatchConfig,
    player::Player,
    ship::{Orientation, ShipId},
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Position of this side in per-side arrays: 0 for [`Side::One`], 1 for [`Side::Two`].
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Whether a side is driven by a person or by an automated strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PlayerKind {
    Human,
    Automated,
}

/// Identity of the player sitting at one side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerInfo {
    name: String,
    kind: PlayerKind,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn automated(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Automated)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_automated(&self) -> bool {
        self.kind == PlayerKind::Automated
    }
}

/// Current stage of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    Setup,
    InProgress,
    GameOver,
}

/// What an accepted attack did to the turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TurnEffect {
    /// The attacker hit and keeps the turn.
    AttackAgain,
    /// The attacker missed; `active` now holds the turn.
    Switched { active: Side },
    /// The defending fleet is sunk and the match is over.
    Won { winner: Side },
}

/// Result of [`Match::attack`]: the board outcome plus its turn side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttackReport {
    pub attacker: Side,
    pub outcome: AttackOutcome,
    pub turn: TurnEffect,
}

/// Attacks made during one [`Match::play_automated_turn`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AutomatedTurn {
    /// Accepted attacks, in order. Each one has already been applied.
    pub reports: Vec<AttackReport>,
    /// Why the turn stopped early, if the strategy picked a target the board
    /// refused. The match is unchanged by the refused attack.
    pub rejected: Option<AttackError>,
}

#[derive(Debug)]
struct Seat {
    info: PlayerInfo,
    board: Board,
    /// Fleet lengths not yet placed.
    pending: Vec<usize>,
}

/// Core match logic holding both boards and the turn state.
#[derive(Debug)]
pub struct Match {
    seats: [Seat; 2],
    fleet: Vec<usize>,
    active: Side,
    phase: Phase,
    winner: Option<Side>,
}

impl Match {
    /// Create a match in [`Phase::Setup`] with two empty boards.
    pub fn new(config: MatchConfig, one: PlayerInfo, two: PlayerInfo) -> Result<Self, ConfigError> {
        config.validate()?;
        let seat = |info: PlayerInfo| -> Result<Seat, ConfigError> {
            Ok(Seat {
                info,
                board: Board::new(config.board_size)?,
                pending: config.fleet.clone(),
            })
        };
        Ok(Self {
            seats: [seat(one)?, seat(two)?],
            fleet: config.fleet.clone(),
            active: config.first,
            phase: Phase::Setup,
            winner: None,
        })
    }

    fn seat(&self, side: Side) -> &Seat {
        &self.seats[side.index()]
    }

    fn seat_mut(&mut self, side: Side) -> &mut Seat {
        &mut self.seats[side.index()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Side holding the turn. Once the match is over this is the winner.
    pub fn active(&self) -> Side {
        self.active
    }

    pub fn active_player(&self) -> &PlayerInfo {
        &self.seat(self.active).info
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn player(&self, side: Side) -> &PlayerInfo {
        &self.seat(side).info
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.seat(side).board
    }

    /// Configured fleet, identical for both sides.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Lengths `side` still has to place.
    pub fn pending_ships(&self, side: Side) -> &[usize] {
        &self.seat(side).pending
    }

    /// Place one of `side`'s pending ships. Only accepted during setup.
    pub fn place_ship(
        &mut self,
        side: Side,
        length: usize,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, PlacementError> {
        if self.phase != Phase::Setup {
            return Err(PlacementError::WrongPhase);
        }
        let seat = self.seat_mut(side);
        let slot = seat
            .pending
            .iter()
            .position(|&l| l == length)
            .ok_or(PlacementError::NotInFleet(length))?;
        let id = seat.board.try_place_ship(length, start, orientation)?;
        seat.pending.remove(slot);
        self.maybe_start();
        Ok(id)
    }

    /// Let `player` place every ship `side` still has pending, longest first.
    pub fn place_fleet_with(
        &mut self,
        side: Side,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<(), PlacementError> {
        if self.phase != Phase::Setup {
            return Err(PlacementError::WrongPhase);
        }
        let mut lengths = self.seat(side).pending.clone();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        for length in lengths {
            let (start, orientation) = player
                .choose_placement(rng, self.board(side), length)
                .ok_or(PlacementError::NoRoom(length))?;
            self.place_ship(side, length, start, orientation)?;
        }
        Ok(())
    }

    fn maybe_start(&mut self) {
        if self.seats.iter().all(|s| s.pending.is_empty()) {
            self.phase = Phase::InProgress;
            info!(
                "fleets placed, {} attacks first",
                self.seat(self.active).info.name
            );
        }
    }

    /// Resolve an attack by `attacker` at `coord` on the opponent's board.
    ///
    /// Rejected attacks leave the match untouched. A hit keeps the turn, a miss
    /// passes it, and sinking the last defending ship ends the match.
    pub fn attack(&mut self, attacker: Side, coord: Coordinate) -> Result<AttackReport, AttackError> {
        if self.phase != Phase::InProgress || attacker != self.active {
            return Err(AttackError::NotYourTurn);
        }
        let defender = attacker.opponent();
        let outcome = self.seat_mut(defender).board.receive_attack(coord)?;

        let turn = if self.seat(defender).board.all_ships_sunk() {
            self.phase = Phase::GameOver;
            self.winner = Some(attacker);
            info!("{} wins", self.seat(attacker).info.name);
            TurnEffect::Won { winner: attacker }
        } else if outcome.is_hit() {
            TurnEffect::AttackAgain
        } else {
            self.switch_turn();
            TurnEffect::Switched {
                active: self.active,
            }
        };
        Ok(AttackReport {
            attacker,
            outcome,
            turn,
        })
    }

    fn switch_turn(&mut self) {
        self.active = self.active.opponent();
        debug!("turn passes to {}", self.seat(self.active).info.name);
    }

    /// Play the active automated side's turn using `player` to pick targets.
    ///
    /// Keeps attacking while hits keep the turn. Stops when the turn passes,
    /// the match ends, or `player` finds no target; declining is not an error.
    /// A refused target also stops the turn and is reported in
    /// [`AutomatedTurn::rejected`] next to the attacks already applied.
    /// `Err` is only returned when no automated turn can be played right now.
    pub fn play_automated_turn(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<AutomatedTurn, AttackError> {
        let side = self.active;
        if self.phase != Phase::InProgress || !self.seat(side).info.is_automated() {
            return Err(AttackError::NotYourTurn);
        }
        let mut turn = AutomatedTurn::default();
        loop {
            let Some(target) = player.select_target(rng, self.board(side.opponent())) else {
                info!("{} has no target left", self.seat(side).info.name);
                break;
            };
            let report = match self.attack(side, target) {
                Ok(report) => report,
                Err(err) => {
                    debug!("{} picked a refused target: {}", self.seat(side).info.name, err);
                    turn.rejected = Some(err);
                    break;
                }
            };
            player.handle_attack_result(target, &report.outcome);
            turn.reports.push(report);
            if report.turn != TurnEffect::AttackAgain {
                break;
            }
        }
        Ok(turn)
    }
}
