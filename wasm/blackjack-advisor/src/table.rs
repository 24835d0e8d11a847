use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::{CardKey, HandKey};

pub const PLAYER_HAND_COLUMN: &str = "Player Hand";
pub const DEALER_UP_CARD_COLUMN: &str = "Dealer Up Card";
pub const ACTION_COLUMN: &str = "Action";

/// Dealer up-card value that matches every dealer card.
pub const WILDCARD: &str = "Any";

const REQUIRED_COLUMNS: [&str; 3] = [PLAYER_HAND_COLUMN, DEALER_UP_CARD_COLUMN, ACTION_COLUMN];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRow {
    #[serde(rename = "Player Hand", default)]
    pub player_hand: String,
    #[serde(rename = "Dealer Up Card", default)]
    pub dealer_up_card: String,
    #[serde(rename = "Action", default)]
    pub action: String,
}

impl StrategyRow {
    pub fn new(player_hand: &str, dealer_up_card: &str, action: &str) -> Self {
        StrategyRow {
            player_hand: player_hand.to_string(),
            dealer_up_card: dealer_up_card.to_string(),
            action: action.to_string(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.dealer_up_card == WILDCARD
    }

    /// Rows without an action never match.
    fn matches(&self, hand: &str, card: &str) -> bool {
        !self.action.is_empty()
            && self.player_hand == hand
            && (self.dealer_up_card == card || self.is_wildcard())
    }

    fn trimmed(self) -> Self {
        StrategyRow::new(
            self.player_hand.trim(),
            self.dealer_up_card.trim(),
            self.action.trim(),
        )
    }
}

/// Errors surfaced when loading a strategy table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read strategy table {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse strategy table: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse strategy table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("strategy table is missing required column {column:?}")]
    MissingColumn { column: &'static str },
}

/// Ordered, read-only list of strategy rows. Row order breaks ties on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyTable {
    rows: Vec<StrategyRow>,
}

impl StrategyTable {
    pub fn new(rows: Vec<StrategyRow>) -> Self {
        StrategyTable { rows }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        log::info!("loaded {} strategy rows from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn from_csv_str(text: &str) -> Result<Self, LoadError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(LoadError::MissingColumn { column });
            }
        }

        let rows = csv_reader
            .deserialize::<StrategyRow>()
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("parsed {} strategy rows", rows.len());
        Ok(StrategyTable { rows })
    }

    /// Rows as a JSON array of objects keyed by the CSV column names.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let rows: Vec<StrategyRow> = serde_json::from_str(text)?;
        Ok(StrategyTable {
            rows: rows.into_iter().map(StrategyRow::trimmed).collect(),
        })
    }

    /// First row for `hand` whose dealer card is `card` or the wildcard.
    pub fn lookup(&self, hand: &HandKey, card: &CardKey) -> Option<&StrategyRow> {
        self.rows
            .iter()
            .find(|row| row.matches(hand.as_str(), card.as_str()))
    }

    pub fn rows(&self) -> &[StrategyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct player hands in first-seen order.
    pub fn hands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|row| row.player_hand.as_str())
            .filter(|hand| seen.insert(*hand))
            .collect()
    }
}
