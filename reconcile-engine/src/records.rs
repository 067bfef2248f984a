//! FILENAME: reconcile-engine/src/records.rs
//! PURPOSE: Typed domain records built from anchor lookups.
//! CONTEXT: The rest of the system does not want tag/cell maps; it wants
//! "the lobby named L3" with its schedule and participants. These wrappers
//! pull the relevant tags out of an AnchorRecord. Unresolved single fields
//! stay None and unresolved multi fields stay empty - partial records are
//! only produced from successful lookups, never from swallowed errors.

use crate::definition::{FieldTag, SheetSource};
use crate::error::ReconcileError;
use crate::lookup::{from_id, AnchorRecord};
use engine::{Cell, Spreadsheet};

/// One qualifier lobby row: the lobby id anchor plus its schedule and
/// participant list.
#[derive(Debug, Clone)]
pub struct QualifierLobby {
    pub lobby_id: Cell,
    pub date: Option<Cell>,
    pub time: Option<Cell>,
    pub referee: Option<Cell>,
    pub participants: Vec<Cell>,
}

impl QualifierLobby {
    pub fn from_record(record: AnchorRecord) -> Self {
        QualifierLobby {
            date: record.single(FieldTag::Date).cloned(),
            time: record.single(FieldTag::Time).cloned(),
            referee: record.single(FieldTag::Referee).cloned(),
            participants: record.many(FieldTag::Participant).to_vec(),
            lobby_id: record.anchor,
        }
    }

    /// Looks up `lobby_id` against the configured qualifier source.
    pub fn from_id(
        spreadsheet: &mut Spreadsheet,
        source: &SheetSource,
        lobby_id: &str,
        filled_only: bool,
    ) -> Result<Self, ReconcileError> {
        Ok(Self::from_record(from_id(
            spreadsheet,
            source,
            lobby_id,
            filled_only,
        )?))
    }
}

/// One bracket-stage match row: the match id anchor plus opponents, crew
/// and schedule.
#[derive(Debug, Clone)]
pub struct ScheduledMatch {
    pub match_id: Cell,
    pub team_one: Option<Cell>,
    pub team_two: Option<Cell>,
    pub date: Option<Cell>,
    pub time: Option<Cell>,
    pub referee: Option<Cell>,
    pub streamer: Option<Cell>,
    pub commentators: Vec<Cell>,
}

impl ScheduledMatch {
    pub fn from_record(record: AnchorRecord) -> Self {
        ScheduledMatch {
            team_one: record.single(FieldTag::TeamOne).cloned(),
            team_two: record.single(FieldTag::TeamTwo).cloned(),
            date: record.single(FieldTag::Date).cloned(),
            time: record.single(FieldTag::Time).cloned(),
            referee: record.single(FieldTag::Referee).cloned(),
            streamer: record.single(FieldTag::Streamer).cloned(),
            commentators: record.many(FieldTag::Commentator).to_vec(),
            match_id: record.anchor,
        }
    }

    pub fn from_id(
        spreadsheet: &mut Spreadsheet,
        source: &SheetSource,
        match_id: &str,
        filled_only: bool,
    ) -> Result<Self, ReconcileError> {
        Ok(Self::from_record(from_id(
            spreadsheet,
            source,
            match_id,
            filled_only,
        )?))
    }
}

/// One roster row: a team anchor plus its seed and player list.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub team: Cell,
    pub seed: Option<Cell>,
    pub players: Vec<Cell>,
}

impl RosterEntry {
    pub fn from_record(record: AnchorRecord) -> Self {
        RosterEntry {
            seed: record.single(FieldTag::Seed).cloned(),
            players: record.many(FieldTag::Player).to_vec(),
            team: record.anchor,
        }
    }

    pub fn from_id(
        spreadsheet: &mut Spreadsheet,
        source: &SheetSource,
        team: &str,
        filled_only: bool,
    ) -> Result<Self, ReconcileError> {
        Ok(Self::from_record(from_id(
            spreadsheet,
            source,
            team,
            filled_only,
        )?))
    }
}
