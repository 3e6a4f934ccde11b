//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackError, AttackMark, AttackOutcome, AttackReport, AutomatedTurn, Board, BoardState,
    ConfigError, Coordinate, Match, MatchConfig, Orientation, Phase, PlacementError, Player,
    PlayerInfo, PlayerKind, RandomPlayer, Ship, ShipError, ShipId, Side, TurnEffect,
};
