use crate::consts;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How hard the duel is.  Difficulty only affects the number of obstacles
/// placed on the board.
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub(crate) const DISPLAY_WIDTH: u16 = 6;

    /// Number of obstacles to place on the board at this difficulty
    pub(crate) fn obstacle_qty(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium | Difficulty::Hard => consts::OBSTACLE_QTY,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("invalid difficulty; expected \"easy\", \"medium\", or \"hard\"")]
pub(crate) struct ParseDifficultyError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::EnumExt;
    use rstest::rstest;

    #[test]
    fn display_width() {
        let actual_width = Difficulty::iter()
            .map(|d| d.as_str().chars().count())
            .max()
            .unwrap();
        assert_eq!(actual_width, usize::from(Difficulty::DISPLAY_WIDTH));
    }

    #[test]
    fn fmt_width() {
        assert_eq!(
            format!(
                "{:width$}",
                Difficulty::Easy,
                width = usize::from(Difficulty::DISPLAY_WIDTH)
            ),
            "Easy  "
        );
    }

    #[rstest]
    #[case("easy", Difficulty::Easy)]
    #[case("Easy", Difficulty::Easy)]
    #[case("MEDIUM", Difficulty::Medium)]
    #[case("hard", Difficulty::Hard)]
    fn parse(#[case] s: &str, #[case] difficulty: Difficulty) {
        assert_eq!(s.parse::<Difficulty>().unwrap(), difficulty);
    }

    #[rstest]
    #[case("")]
    #[case("harsh")]
    #[case("medium ")]
    fn parse_err(#[case] s: &str) {
        assert_eq!(
            s.parse::<Difficulty>().unwrap_err(),
            ParseDifficultyError
        );
    }

    #[rstest]
    #[case(Difficulty::Easy, 0)]
    #[case(Difficulty::Medium, 3)]
    #[case(Difficulty::Hard, 3)]
    fn obstacle_qty(#[case] difficulty: Difficulty, #[case] qty: usize) {
        assert_eq!(difficulty.obstacle_qty(), qty);
    }
}
