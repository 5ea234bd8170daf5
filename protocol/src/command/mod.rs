
use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::model::{AtBatResult, Base, PlayerId};

/// What happened to one runner during a steal attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StealOutcome {
    Safe,
    Out,
    /// Runner held; only valid for runners other than the one who started the attempt
    Stays,
}

impl StealOutcome {
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "safe" => Some(StealOutcome::Safe),
            "out" => Some(StealOutcome::Out),
            "stays" => Some(StealOutcome::Stays),
            _ => None,
        }
    }

    pub fn to_protocol(self) -> &'static str {
        match self {
            StealOutcome::Safe => "safe",
            StealOutcome::Out => "out",
            StealOutcome::Stays => "stays",
        }
    }
}

/// Actions the scoring UI can dispatch to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScoringCommand {
    /// |ball
    Ball,

    /// |strike
    Strike,

    /// |foul
    Foul,

    /// |out
    Out,

    /// |atbat|RESULT
    AtBat { result: AtBatResult },

    /// |steal|FROM|BASE=OUTCOME,BASE=OUTCOME
    #[serde(rename_all = "camelCase")]
    StealAttempt {
        from: Base,
        outcomes: BTreeMap<Base, StealOutcome>,
    },

    /// |batter|PLAYERID
    #[serde(rename_all = "camelCase")]
    SelectBatter { player_id: PlayerId },

    /// |pitcher|PLAYERID
    #[serde(rename_all = "camelCase")]
    SelectPitcher { player_id: PlayerId },
}

impl ScoringCommand {
    /// Serialize to wire format: |VERB|ARGS
    pub fn to_wire_format(&self) -> String {
        match self {
            Self::Ball => "|ball".to_string(),
            Self::Strike => "|strike".to_string(),
            Self::Foul => "|foul".to_string(),
            Self::Out => "|out".to_string(),
            Self::AtBat { result } => format!("|atbat|{}", result.to_protocol()),
            Self::StealAttempt { from, outcomes } => {
                let outcomes = outcomes
                    .iter()
                    .map(|(base, outcome)| {
                        format!("{}={}", base.to_protocol(), outcome.to_protocol())
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                format!("|steal|{}|{}", from.to_protocol(), outcomes)
            }
            Self::SelectBatter { player_id } => format!("|batter|{}", player_id),
            Self::SelectPitcher { player_id } => format!("|pitcher|{}", player_id),
        }
    }
}

/// Parse one command, either a JSON object or a |VERB|ARGS line
pub fn parse_command(line: &str) -> Result<ScoringCommand> {
    let line = line.trim();

    if line.is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }

    if line.starts_with('{') {
        return Ok(serde_json::from_str(line)?);
    }

    let Some(body) = line.strip_prefix('|') else {
        return Err(ParseError::InvalidFormat(format!("expected |VERB, got {}", line)).into());
    };

    let parts: Vec<&str> = body.split('|').collect();

    match parts[0] {
        "ball" => Ok(ScoringCommand::Ball),
        "strike" => Ok(ScoringCommand::Strike),
        "foul" => Ok(ScoringCommand::Foul),
        "out" => Ok(ScoringCommand::Out),
        "atbat" => parse_at_bat(&parts),
        "steal" => parse_steal(&parts),
        "batter" => {
            let player_id = parse_player_id(&parts)?;
            Ok(ScoringCommand::SelectBatter { player_id })
        }
        "pitcher" => {
            let player_id = parse_player_id(&parts)?;
            Ok(ScoringCommand::SelectPitcher { player_id })
        }
        "" => Err(ParseError::EmptyMessage.into()),
        other => Err(ParseError::InvalidFormat(format!("unknown command: {}", other)).into()),
    }
}

/// Parse a batch of commands, one per line, skipping blanks and # comments
pub fn parse_commands(input: &str) -> Result<Vec<ScoringCommand>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_command)
        .collect()
}

fn parse_at_bat(parts: &[&str]) -> Result<ScoringCommand> {
    // |atbat|RESULT
    let raw = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("at-bat result".to_string()))?;

    let result = AtBatResult::from_protocol(raw)
        .ok_or_else(|| ParseError::InvalidFormat(format!("unknown at-bat result: {}", raw)))?;

    Ok(ScoringCommand::AtBat { result })
}

fn parse_steal(parts: &[&str]) -> Result<ScoringCommand> {
    // |steal|FROM|BASE=OUTCOME,BASE=OUTCOME
    let raw_from = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("steal origin".to_string()))?;
    let from = parse_base(raw_from)?;

    let mut outcomes = BTreeMap::new();
    let pairs = parts.get(2).copied().unwrap_or("");

    for pair in pairs.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (base, outcome) = pair.split_once('=').ok_or_else(|| {
            ParseError::InvalidFormat(format!("expected BASE=OUTCOME, got {}", pair))
        })?;

        let base = parse_base(base)?;
        let outcome = StealOutcome::from_protocol(outcome).ok_or_else(|| {
            ParseError::InvalidFormat(format!("unknown steal outcome: {}", outcome))
        })?;

        outcomes.insert(base, outcome);
    }

    Ok(ScoringCommand::StealAttempt { from, outcomes })
}

fn parse_base(raw: &str) -> Result<Base> {
    Base::from_protocol(raw)
        .ok_or_else(|| ParseError::InvalidFormat(format!("unknown base: {}", raw)).into())
}

fn parse_player_id(parts: &[&str]) -> Result<PlayerId> {
    // Player ids may themselves contain | characters, so join everything after the verb
    if parts.len() < 2 {
        return Err(ParseError::MissingField("player id".to_string()).into());
    }

    let player_id = parts[1..].join("|");
    if player_id.is_empty() {
        return Err(ParseError::InvalidFormat("player id cannot be empty".to_string()).into());
    }

    Ok(player_id)
}
