//! Play log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AtBatResult, Base, PlayerId};

/// Where a steal attempt started and which base it was going for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStealDetails {
    pub from: Base,
    pub to: Base,
}

/// One resolved at-bat or steal attempt in the play log
///
/// For steal-derived entries the batter fields name the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtBatEntry {
    pub id: String,

    pub batter_id: PlayerId,
    pub batter_name: String,

    pub pitcher_id: Option<PlayerId>,
    pub pitcher_name: Option<String>,

    pub inning: u32,
    pub is_top_inning: bool,

    // === Count at resolution ===
    pub balls: u8,
    pub strikes: u8,
    pub fouls: u32,

    pub result: AtBatResult,

    /// Runs batted in (always 0 for steals)
    pub rbi: u32,

    pub errors: u32,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_steal_details: Option<BaseStealDetails>,
}

impl AtBatEntry {
    /// Whether this entry came from a steal attempt
    pub fn is_steal(&self) -> bool {
        self.result.is_steal()
    }

    /// Check if the entry scored a runner from third on a steal of home
    pub fn stole_home(&self) -> bool {
        self.result == AtBatResult::StolenBase
            && self
                .base_steal_details
                .is_some_and(|details| details.to == Base::Home)
    }

    /// One-line description for the play log
    pub fn summary(&self) -> String {
        let mut line = format!("{}: {}", self.batter_name, self.result);
        if let Some(details) = self.base_steal_details {
            line.push_str(&format!(" ({} -> {})", details.from, details.to));
        }
        if self.rbi > 0 {
            line.push_str(&format!(", {} RBI", self.rbi));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steal_entry(to: Base) -> AtBatEntry {
        AtBatEntry {
            id: "ab-1".to_string(),
            batter_id: "r3".to_string(),
            batter_name: "Runner".to_string(),
            pitcher_id: None,
            pitcher_name: None,
            inning: 2,
            is_top_inning: true,
            balls: 1,
            strikes: 0,
            fouls: 0,
            result: AtBatResult::StolenBase,
            rbi: 0,
            errors: 0,
            timestamp: Utc::now(),
            base_steal_details: Some(BaseStealDetails {
                from: Base::Third,
                to,
            }),
        }
    }

    #[test]
    fn test_stole_home() {
        assert!(steal_entry(Base::Home).stole_home());
        assert!(!steal_entry(Base::Third).stole_home());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            steal_entry(Base::Home).summary(),
            "Runner: Stolen Base (3B -> Home)"
        );
    }

    #[test]
    fn test_steal_details_omitted_when_absent() {
        let mut entry = steal_entry(Base::Home);
        entry.result = AtBatResult::Single;
        entry.base_steal_details = None;

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("baseStealDetails").is_none());
        assert_eq!(json["result"], "single");
        assert_eq!(json["isTopInning"], true);
    }
}
