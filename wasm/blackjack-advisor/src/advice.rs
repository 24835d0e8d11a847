use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_card, normalize_hand, CardKey, HandKey};
use crate::table::StrategyTable;

pub const INVALID_INPUT: &str = "Invalid input format.";
pub const NO_RECOMMENDATION: &str = "No recommendation found for this hand.";
const RECOMMENDATION_PREFIX: &str = "Recommended action: ";

const HIT: &str = "Hit";
const STAND: &str = "Stand";

/// House rules toggled per query. Everything is disallowed unless enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRules {
    #[serde(default, alias = "allowSplit")]
    pub split_allowed: bool,
    #[serde(default, alias = "allowDouble")]
    pub double_allowed: bool,
    #[serde(default, alias = "allowSurrender")]
    pub surrender_allowed: bool,
}

impl HouseRules {
    pub fn all_allowed() -> Self {
        HouseRules {
            split_allowed: true,
            double_allowed: true,
            surrender_allowed: true,
        }
    }

    pub fn allows(&self, family: ActionFamily) -> bool {
        match family {
            ActionFamily::Split => self.split_allowed,
            ActionFamily::Double => self.double_allowed,
            ActionFamily::Surrender => self.surrender_allowed,
        }
    }
}

/// Actions that depend on a house rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionFamily {
    Split,
    Double,
    Surrender,
}

impl ActionFamily {
    /// Downgrade checks run in this order.
    pub const ALL: [ActionFamily; 3] = [
        ActionFamily::Split,
        ActionFamily::Double,
        ActionFamily::Surrender,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            ActionFamily::Split => "Split",
            ActionFamily::Double => "Double",
            ActionFamily::Surrender => "Surrender",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum ColorTag {
    Positive,
    Negative,
}

impl ColorTag {
    pub fn css_color(&self) -> &'static str {
        match self {
            ColorTag::Positive => "green",
            ColorTag::Negative => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub text: String,
    pub color: ColorTag,
}

impl Advice {
    pub fn invalid_input() -> Self {
        Advice {
            text: INVALID_INPUT.to_string(),
            color: ColorTag::Negative,
        }
    }

    pub fn no_recommendation() -> Self {
        Advice {
            text: NO_RECOMMENDATION.to_string(),
            color: ColorTag::Negative,
        }
    }

    pub fn recommend(action: &str) -> Self {
        let color = if action == STAND {
            ColorTag::Positive
        } else {
            ColorTag::Negative
        };
        Advice {
            text: format!("{RECOMMENDATION_PREFIX}{action}"),
            color,
        }
    }

    /// The recommended action, if this advice carries one.
    pub fn action(&self) -> Option<&str> {
        self.text.strip_prefix(RECOMMENDATION_PREFIX)
    }
}

/// Replaces the action with "Hit" for each disallowed family it names.
///
/// Every check overwrites the whole action, so a value naming several
/// families ends up decided by the last disallowed one.
pub fn apply_house_rules(action: &str, rules: &HouseRules) -> String {
    let mut action = action.to_string();
    for family in ActionFamily::ALL {
        if !rules.allows(family) && action.contains(family.keyword()) {
            action = HIT.to_string();
        }
    }
    action
}

/// Resolves advice against a loaded strategy table.
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'t> {
    table: &'t StrategyTable,
}

impl<'t> Advisor<'t> {
    pub fn new(table: &'t StrategyTable) -> Self {
        Advisor { table }
    }

    pub fn table(&self) -> &'t StrategyTable {
        self.table
    }

    /// Normalizes raw form input, then resolves it.
    pub fn advise(&self, raw_hand: &str, raw_card: &str, rules: &HouseRules) -> Advice {
        let hand = normalize_hand(raw_hand);
        let card = normalize_card(raw_card);
        log::debug!(
            "normalized player hand: {hand}, dealer up card: {}",
            card.as_ref().map_or("<invalid>", CardKey::as_str)
        );
        self.resolve(&hand, card.as_ref(), rules)
    }

    pub fn resolve(&self, hand: &HandKey, card: Option<&CardKey>, rules: &HouseRules) -> Advice {
        let card = match card {
            Some(card) if !hand.is_empty() => card,
            _ => return Advice::invalid_input(),
        };

        let Some(row) = self.table.lookup(hand, card) else {
            log::debug!("no strategy row for {hand} vs {card}");
            return Advice::no_recommendation();
        };

        let action = apply_house_rules(&row.action, rules);
        if action != row.action {
            log::debug!("{} downgraded to {action} by house rules", row.action);
        }
        Advice::recommend(&action)
    }
}
