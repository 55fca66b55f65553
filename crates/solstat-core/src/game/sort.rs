use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};
use crate::game::{GameId, GameRegistry};

/// Ordering of the statistics table
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(try_from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Played,
    Won,
    Lost,
    Time,
    Moves,
    Percent,
}

impl SortKey {
    /// Parse a sort key name, failing on anything outside the known set
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| Error::UnknownSortKey(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Game ids known for `player`, in the order selected by this key
    pub fn sorted_game_ids(self, registry: &dyn GameRegistry, player: &str) -> Vec<GameId> {
        match self {
            Self::Name => registry.game_ids_by_name(player),
            Self::Played => registry.game_ids_by_played(player),
            Self::Won => registry.game_ids_by_won(player),
            Self::Lost => registry.game_ids_by_lost(player),
            Self::Time => registry.game_ids_by_time(player),
            Self::Moves => registry.game_ids_by_moves(player),
            Self::Percent => registry.game_ids_by_percent(player),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}
