use std::fmt;

use serde::Serialize;

pub const HAND_SEPARATOR: char = ',';
pub const ACE: &str = "A";

const MIN_CARD: u8 = 2;
const MAX_CARD: u8 = 10;

/// Canonical player hand: a bare total ("10") or comma-joined ranks ("A,8").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HandKey(String);

impl HandKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for pair/soft hands written as ranks rather than a total.
    pub fn is_multi_rank(&self) -> bool {
        self.0.contains(HAND_SEPARATOR)
    }
}

impl fmt::Display for HandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical dealer up-card: "A" or a decimal value in 2..=10.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CardKey(String);

impl CardKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_hand(raw: &str) -> HandKey {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    HandKey(cleaned)
}

pub fn normalize_card(raw: &str) -> Option<CardKey> {
    let card = raw.trim().to_uppercase();
    if card == ACE {
        return Some(CardKey(card));
    }
    if card.is_empty() || !card.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digits-only input too long for u8 is out of range anyway.
    let value = card.parse::<u8>().ok()?;
    (MIN_CARD..=MAX_CARD)
        .contains(&value)
        .then(|| CardKey(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(raw: &str) -> Option<String> {
        normalize_card(raw).map(|key| key.as_str().to_string())
    }

    #[test]
    fn cards_two_through_ten_are_kept() {
        for value in 2..=10 {
            let raw = value.to_string();
            assert_eq!(card(&raw), Some(raw.clone()));
        }
    }

    #[test]
    fn ace_is_accepted_in_either_case() {
        assert_eq!(card("A"), Some("A".to_string()));
        assert_eq!(card(" a "), Some("A".to_string()));
    }

    #[test]
    fn out_of_range_and_garbage_cards_are_rejected() {
        for raw in ["11", "1", "0", "K", "", "   ", "+5", "-2", "9.0", "300"] {
            assert_eq!(card(raw), None, "{raw:?} should be invalid");
        }
    }

    #[test]
    fn leading_zeros_collapse_to_the_decimal_value() {
        assert_eq!(card("09"), Some("9".to_string()));
        assert_eq!(card(" 10\t"), Some("10".to_string()));
    }

    #[test]
    fn hand_whitespace_is_removed_and_ranks_uppercased() {
        assert_eq!(normalize_hand(" a , 8 ").as_str(), "A,8");
        assert_eq!(normalize_hand(" 10 ").as_str(), "10");
        assert_eq!(normalize_hand("8,\t8").as_str(), "8,8");
        assert!(normalize_hand("a,8").is_multi_rank());
        assert!(!normalize_hand("17").is_multi_rank());
    }

    #[test]
    fn hand_normalization_is_idempotent() {
        for raw in [" a , 8 ", "10", "k,q", "", "x y z", "A,A"] {
            let once = normalize_hand(raw);
            let twice = normalize_hand(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn hand_normalization_never_rejects() {
        assert!(normalize_hand("   ").is_empty());
        assert_eq!(normalize_hand("banana").as_str(), "BANANA");
    }
}
