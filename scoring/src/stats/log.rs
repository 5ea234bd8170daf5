//! Read-only views of the play log

use std::cmp::Reverse;
use std::collections::BTreeMap;

use dugout_protocol::{half_label, AtBatEntry};

/// Log entries for one half-inning
#[derive(Debug, Clone, PartialEq)]
pub struct LogGroup<'a> {
    pub inning: u32,
    pub is_top_inning: bool,

    /// Most recent first
    pub entries: Vec<&'a AtBatEntry>,
}

impl LogGroup<'_> {
    /// "Top 3", "Bot 7"
    pub fn label(&self) -> String {
        half_label(self.inning, self.is_top_inning)
    }
}

/// Group the log by half-inning for display
///
/// Latest inning first, the bottom half ahead of the top half of the same
/// inning, entries newest first within each group.
pub fn project_log(entries: &[AtBatEntry]) -> Vec<LogGroup<'_>> {
    // false < true, so bottom halves sort ahead of top halves
    let mut groups: BTreeMap<(Reverse<u32>, bool), Vec<&AtBatEntry>> = BTreeMap::new();

    for entry in entries.iter().rev() {
        groups
            .entry((Reverse(entry.inning), entry.is_top_inning))
            .or_default()
            .push(entry);
    }

    groups
        .into_iter()
        .map(|((Reverse(inning), is_top_inning), entries)| LogGroup {
            inning,
            is_top_inning,
            entries,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use dugout_protocol::AtBatResult;

    use super::*;

    fn entry(id: &str, inning: u32, top: bool) -> AtBatEntry {
        AtBatEntry {
            id: id.to_string(),
            batter_id: "p1".to_string(),
            batter_name: "P1".to_string(),
            pitcher_id: None,
            pitcher_name: None,
            inning,
            is_top_inning: top,
            balls: 0,
            strikes: 0,
            fouls: 0,
            result: AtBatResult::GroundOut,
            rbi: 0,
            errors: 0,
            timestamp: Utc::now(),
            base_steal_details: None,
        }
    }

    #[test]
    fn test_project_log_ordering() {
        let log = vec![
            entry("a", 1, true),
            entry("b", 1, true),
            entry("c", 1, false),
            entry("d", 2, true),
            entry("e", 2, true),
        ];

        let groups = project_log(&log);
        let labels: Vec<String> = groups.iter().map(LogGroup::label).collect();
        assert_eq!(labels, vec!["Top 2", "Bot 1", "Top 1"]);

        let ids: Vec<&str> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e", "d"]);

        let ids: Vec<&str> = groups[2].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_bottom_before_top_in_same_inning() {
        let log = vec![entry("a", 3, true), entry("b", 3, false)];
        let groups = project_log(&log);
        assert!(!groups[0].is_top_inning);
        assert!(groups[1].is_top_inning);
    }

    #[test]
    fn test_project_empty_log() {
        assert!(project_log(&[]).is_empty());
    }

    #[test]
    fn test_projection_does_not_mutate() {
        let log = vec![entry("a", 1, true), entry("b", 1, false)];
        let copy = log.clone();
        let _ = project_log(&log);
        assert_eq!(log, copy);
    }
}
