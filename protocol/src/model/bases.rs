//! Bases and base occupancy

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A base on the diamond, in running order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Base {
    First,
    Second,
    Third,
    Home,
}

impl Base {
    /// The three bases a runner can stand on
    pub const OCCUPIABLE: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// The base a runner advances to from here (`None` from home)
    pub fn next(self) -> Option<Base> {
        match self {
            Base::First => Some(Base::Second),
            Base::Second => Some(Base::Third),
            Base::Third => Some(Base::Home),
            Base::Home => None,
        }
    }

    /// Parse from protocol string ("first", "second", "third", "home")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "first" => Some(Base::First),
            "second" => Some(Base::Second),
            "third" => Some(Base::Third),
            "home" => Some(Base::Home),
            _ => None,
        }
    }

    /// Convert to protocol format
    pub fn to_protocol(self) -> &'static str {
        match self {
            Base::First => "first",
            Base::Second => "second",
            Base::Third => "third",
            Base::Home => "home",
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Base::First => "1B",
            Base::Second => "2B",
            Base::Third => "3B",
            Base::Home => "Home",
        };
        write!(f, "{}", name)
    }
}

/// Runner occupancy of first, second and third
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bases {
    pub first: Option<PlayerId>,
    pub second: Option<PlayerId>,
    pub third: Option<PlayerId>,
}

impl Bases {
    /// Empty bases
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the runner on a base (home is never occupied)
    pub fn get(&self, base: Base) -> Option<&PlayerId> {
        match base {
            Base::First => self.first.as_ref(),
            Base::Second => self.second.as_ref(),
            Base::Third => self.third.as_ref(),
            Base::Home => None,
        }
    }

    /// Put a runner on a base, returning whoever was there
    ///
    /// Placing a runner on home is ignored and returns `None`.
    pub fn set(&mut self, base: Base, runner: Option<PlayerId>) -> Option<PlayerId> {
        match base {
            Base::First => std::mem::replace(&mut self.first, runner),
            Base::Second => std::mem::replace(&mut self.second, runner),
            Base::Third => std::mem::replace(&mut self.third, runner),
            Base::Home => None,
        }
    }

    /// Remove and return the runner on a base
    pub fn take(&mut self, base: Base) -> Option<PlayerId> {
        self.set(base, None)
    }

    /// Check if a base is occupied
    pub fn is_occupied(&self, base: Base) -> bool {
        self.get(base).is_some()
    }

    /// Iterate over occupied bases and their runners, first to third
    pub fn occupied(&self) -> impl Iterator<Item = (Base, &PlayerId)> {
        Base::OCCUPIABLE
            .into_iter()
            .filter_map(|base| self.get(base).map(|runner| (base, runner)))
    }

    /// Number of runners on base
    pub fn runner_count(&self) -> usize {
        self.occupied().count()
    }

    /// Check if no runner is on base
    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    /// Find the base a runner is standing on
    pub fn find_runner(&self, runner: &str) -> Option<Base> {
        self.occupied()
            .find(|(_, id)| id.as_str() == runner)
            .map(|(base, _)| base)
    }

    /// Clear all three bases
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> Bases {
        Bases {
            first: Some("r1".to_string()),
            second: Some("r2".to_string()),
            third: Some("r3".to_string()),
        }
    }

    #[test]
    fn test_next_base() {
        assert_eq!(Base::First.next(), Some(Base::Second));
        assert_eq!(Base::Second.next(), Some(Base::Third));
        assert_eq!(Base::Third.next(), Some(Base::Home));
        assert_eq!(Base::Home.next(), None);
    }

    #[test]
    fn test_base_protocol_strings() {
        for base in [Base::First, Base::Second, Base::Third, Base::Home] {
            assert_eq!(Base::from_protocol(base.to_protocol()), Some(base));
        }
        assert_eq!(Base::from_protocol("shortstop"), None);
    }

    #[test]
    fn test_set_and_take() {
        let mut bases = Bases::new();
        assert!(bases.is_empty());

        assert_eq!(bases.set(Base::Second, Some("r2".to_string())), None);
        assert!(bases.is_occupied(Base::Second));
        assert_eq!(bases.take(Base::Second), Some("r2".to_string()));
        assert!(bases.is_empty());

        // Home never holds a runner
        assert_eq!(bases.set(Base::Home, Some("r4".to_string())), None);
        assert!(bases.get(Base::Home).is_none());
    }

    #[test]
    fn test_occupied_order() {
        let bases = loaded();
        let order: Vec<Base> = bases.occupied().map(|(base, _)| base).collect();
        assert_eq!(order, vec![Base::First, Base::Second, Base::Third]);
        assert_eq!(bases.runner_count(), 3);
        assert_eq!(bases.find_runner("r2"), Some(Base::Second));
        assert_eq!(bases.find_runner("nobody"), None);
    }

    #[test]
    fn test_clear() {
        let mut bases = loaded();
        bases.clear();
        assert!(bases.is_empty());
    }
}
