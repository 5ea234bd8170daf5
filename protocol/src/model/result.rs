//! Plate-appearance and base-running results

use serde::{Deserialize, Serialize};

/// The recorded outcome of an at-bat or steal attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtBatResult {
    Single,
    Double,
    Triple,
    Homerun,
    Walk,
    HitByPitch,
    Sacrifice,
    Strikeout,
    GroundOut,
    FlyOut,
    OutAtFirst,
    OutAtSecond,
    OutAtThird,
    OutAtHome,
    FieldersChoice,
    Error,
    Foul,
    StolenBase,
    CaughtStealing,
}

impl AtBatResult {
    /// Every result, in display order
    pub const ALL: [AtBatResult; 19] = [
        AtBatResult::Single,
        AtBatResult::Double,
        AtBatResult::Triple,
        AtBatResult::Homerun,
        AtBatResult::Walk,
        AtBatResult::HitByPitch,
        AtBatResult::Sacrifice,
        AtBatResult::Strikeout,
        AtBatResult::GroundOut,
        AtBatResult::FlyOut,
        AtBatResult::OutAtFirst,
        AtBatResult::OutAtSecond,
        AtBatResult::OutAtThird,
        AtBatResult::OutAtHome,
        AtBatResult::FieldersChoice,
        AtBatResult::Error,
        AtBatResult::Foul,
        AtBatResult::StolenBase,
        AtBatResult::CaughtStealing,
    ];

    /// Parse from protocol string ("single", "hitByPitch", "outAtFirst", ...)
    pub fn from_protocol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.to_protocol() == s)
    }

    /// Convert to protocol format (matches the serialized form)
    pub fn to_protocol(self) -> &'static str {
        match self {
            AtBatResult::Single => "single",
            AtBatResult::Double => "double",
            AtBatResult::Triple => "triple",
            AtBatResult::Homerun => "homerun",
            AtBatResult::Walk => "walk",
            AtBatResult::HitByPitch => "hitByPitch",
            AtBatResult::Sacrifice => "sacrifice",
            AtBatResult::Strikeout => "strikeout",
            AtBatResult::GroundOut => "groundOut",
            AtBatResult::FlyOut => "flyOut",
            AtBatResult::OutAtFirst => "outAtFirst",
            AtBatResult::OutAtSecond => "outAtSecond",
            AtBatResult::OutAtThird => "outAtThird",
            AtBatResult::OutAtHome => "outAtHome",
            AtBatResult::FieldersChoice => "fieldersChoice",
            AtBatResult::Error => "error",
            AtBatResult::Foul => "foul",
            AtBatResult::StolenBase => "stolenBase",
            AtBatResult::CaughtStealing => "caughtStealing",
        }
    }

    /// Get display name
    pub fn as_str(self) -> &'static str {
        match self {
            AtBatResult::Single => "Single",
            AtBatResult::Double => "Double",
            AtBatResult::Triple => "Triple",
            AtBatResult::Homerun => "Home Run",
            AtBatResult::Walk => "Walk",
            AtBatResult::HitByPitch => "Hit by Pitch",
            AtBatResult::Sacrifice => "Sacrifice",
            AtBatResult::Strikeout => "Strikeout",
            AtBatResult::GroundOut => "Ground Out",
            AtBatResult::FlyOut => "Fly Out",
            AtBatResult::OutAtFirst => "Out at First",
            AtBatResult::OutAtSecond => "Out at Second",
            AtBatResult::OutAtThird => "Out at Third",
            AtBatResult::OutAtHome => "Out at Home",
            AtBatResult::FieldersChoice => "Fielder's Choice",
            AtBatResult::Error => "Error",
            AtBatResult::Foul => "Foul",
            AtBatResult::StolenBase => "Stolen Base",
            AtBatResult::CaughtStealing => "Caught Stealing",
        }
    }

    /// Single, double, triple or home run
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            AtBatResult::Single | AtBatResult::Double | AtBatResult::Triple | AtBatResult::Homerun
        )
    }

    /// Results that retire the batter or a runner on the play
    pub fn is_out(self) -> bool {
        matches!(
            self,
            AtBatResult::Sacrifice
                | AtBatResult::Strikeout
                | AtBatResult::GroundOut
                | AtBatResult::FlyOut
                | AtBatResult::OutAtFirst
                | AtBatResult::OutAtSecond
                | AtBatResult::OutAtThird
                | AtBatResult::OutAtHome
                | AtBatResult::FieldersChoice
        )
    }

    /// Base-running results logged outside a plate appearance
    pub fn is_steal(self) -> bool {
        matches!(self, AtBatResult::StolenBase | AtBatResult::CaughtStealing)
    }

    /// Whether the result is charged as an official at-bat
    pub fn counts_as_at_bat(self) -> bool {
        !matches!(
            self,
            AtBatResult::Walk | AtBatResult::HitByPitch | AtBatResult::Error
        ) && !self.is_steal()
    }
}

impl std::fmt::Display for AtBatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
