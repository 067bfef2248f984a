//! FILENAME: reconcile-engine/src/definition.rs
//! PURPOSE: Serializable configuration describing a reconciliation source.
//! CONTEXT: Column layouts vary per tournament, so the out-of-scope
//! configuration layer supplies these structures: the anchor-id range, and
//! an explicit enumerated mapping (capability table) from field tag to
//! range text plus a row window. There is no reflection over attribute
//! names; a field exists for a source exactly when its tag is in the table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The fields a reconciliation source can bind. Tags are a closed set:
/// adding a field means adding a variant, not naming a new attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldTag {
    Date,
    Time,
    Referee,
    Participant,
    TeamOne,
    TeamTwo,
    Player,
    Streamer,
    Commentator,
    Score,
    Seed,
}

impl FieldTag {
    /// Date and time fields carry stricter typing rules: the source service
    /// auto-converts dates into serial numbers, and a numeric value here
    /// means the sheet cell lost its text formatting.
    pub fn is_date_time(&self) -> bool {
        matches!(self, FieldTag::Date | FieldTag::Time)
    }
}

impl std::fmt::Display for FieldTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldTag::Date => "date",
            FieldTag::Time => "time",
            FieldTag::Referee => "referee",
            FieldTag::Participant => "participant",
            FieldTag::TeamOne => "team one",
            FieldTag::TeamTwo => "team two",
            FieldTag::Player => "player",
            FieldTag::Streamer => "streamer",
            FieldTag::Commentator => "commentator",
            FieldTag::Score => "score",
            FieldTag::Seed => "seed",
        };
        f.write_str(name)
    }
}

/// One entry of the capability table: where a field's cells live and how
/// far from the anchor row a match may stray.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Range text in the grammar of the address parser ("Lobbies!D2:D").
    pub range: String,

    /// Per-field row window override; falls back to the source default.
    #[serde(default)]
    pub max_row_window: Option<u32>,

    /// Collect every qualifying candidate instead of the single best one
    /// (participant lists, commentator pairs).
    #[serde(default)]
    pub multi: bool,

    /// Coerce the matched value to its string form.
    #[serde(default)]
    pub to_string: bool,
}

impl FieldBinding {
    pub fn new(range: impl Into<String>) -> Self {
        FieldBinding {
            range: range.into(),
            max_row_window: None,
            multi: false,
            to_string: false,
        }
    }

    pub fn with_window(mut self, window: u32) -> Self {
        self.max_row_window = Some(window);
        self
    }

    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn coerced(mut self) -> Self {
        self.to_string = true;
        self
    }
}

/// A configured reconciliation source: one logical region of one
/// spreadsheet (the qualifier lobby block, the match schedule block, a
/// team roster block).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSource {
    /// Range holding the anchor identifiers (lobby ids, match ids, teams).
    pub anchor_range: String,

    /// Row window applied to fields without their own override.
    #[serde(default = "default_row_window")]
    pub default_row_window: u32,

    /// The capability table: field tag -> binding.
    #[serde(default)]
    pub fields: FxHashMap<FieldTag, FieldBinding>,
}

fn default_row_window() -> u32 {
    2
}

impl SheetSource {
    pub fn new(anchor_range: impl Into<String>) -> Self {
        SheetSource {
            anchor_range: anchor_range.into(),
            default_row_window: default_row_window(),
            fields: FxHashMap::default(),
        }
    }

    pub fn with_default_window(mut self, window: u32) -> Self {
        self.default_row_window = window;
        self
    }

    pub fn bind(mut self, tag: FieldTag, binding: FieldBinding) -> Self {
        self.fields.insert(tag, binding);
        self
    }

    /// The effective row window for one binding.
    pub fn window_for(&self, binding: &FieldBinding) -> u32 {
        binding.max_row_window.unwrap_or(self.default_row_window)
    }
}
