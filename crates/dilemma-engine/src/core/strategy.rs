use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The strategy an agent plays against every neighbor.
///
/// A cell holds exactly one strategy for a whole round; it may only switch
/// at a generation boundary, when the strategy update commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Cooperate,
    Defect,
}

impl Strategy {
    /// Returns the single-character field-file symbol for this strategy.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Strategy::Cooperate => 'C',
            Strategy::Defect => 'D',
        }
    }

    /// Parses a field-file symbol. Returns `None` for anything but `'C'`
    /// or `'D'`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Strategy::Cooperate),
            'D' => Some(Strategy::Defect),
            _ => None,
        }
    }

    /// Reward this strategy earns from a single game against `opponent`.
    ///
    /// `defection_bonus` is the payoff for defecting against a cooperator,
    /// the one tunable parameter of the game:
    ///
    /// | self \ opponent | Cooperate         | Defect |
    /// |-----------------|-------------------|--------|
    /// | Cooperate       | 1.0               | 0.0    |
    /// | Defect          | `defection_bonus` | 0.0    |
    ///
    /// The table itself does not constrain the bonus; callers are
    /// responsible for keeping it positive.
    #[must_use]
    pub fn payoff_against(self, opponent: Self, defection_bonus: f64) -> f64 {
        match (self, opponent) {
            (Strategy::Cooperate, Strategy::Cooperate) => 1.0,
            (Strategy::Defect, Strategy::Cooperate) => defection_bonus,
            (_, Strategy::Defect) => 0.0,
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        Strategy::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid strategy symbol: {c:?}")))
    }
}
