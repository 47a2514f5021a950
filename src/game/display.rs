//! Human-readable views of players, states and rounds.

use std::collections::HashMap;
use std::fmt;

use super::{Player, Round, RoundState};

const EMPTY_SLOT: &str = "\u{26ab}\u{fe0f}";

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.checker_color.emoji())
    }
}

impl Player {
    /// Single-line label including the id, for logs and debugging.
    pub fn debug_label(&self) -> String {
        format!(
            "Player(id:{}, {} {})",
            self.id,
            self.name,
            self.checker_color.emoji()
        )
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::WaitingForPlayer { id } => write!(f, "Waiting for player id={id}"),
            RoundState::Complete { winner_id, .. } => {
                write!(f, "Complete - winner id={winner_id}")
            }
            RoundState::Tie => write!(f, "Tie"),
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FourStraight {}x{}, winLength={}, state={}",
            self.rows(),
            self.columns(),
            self.win_length(),
            self.state()
        )
    }
}

impl Round {
    /// Board drawn with one emoji per cell between two horizontal rules.
    pub fn board_string(&self) -> String {
        let emoji_by_id: HashMap<&str, &str> = self
            .players()
            .iter()
            .map(|p| (p.id.as_str(), p.checker_color.emoji()))
            .collect();

        let border = "\u{2501}".repeat(self.columns() * 3);
        let mut lines = vec![border.clone()];
        for row in self.board().iter_rows() {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(id) => emoji_by_id.get(id.as_str()).copied().unwrap_or("?"),
                    None => EMPTY_SLOT,
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.push(border);
        lines.join("\n")
    }

    /// Summary line, board and player list.
    pub fn debug_summary(&self) -> String {
        let players: Vec<String> = self
            .players()
            .iter()
            .map(|p| format!(" \u{2022} {}", p.debug_label()))
            .collect();

        [
            self.to_string(),
            self.board_string(),
            "Players:".to_string(),
            players.join("\n"),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CheckerColor;

    fn make_round() -> Round {
        Round::new(
            2,
            3,
            3,
            [
                Player::new("alice", "Alice", CheckerColor::Red),
                Player::new("bob", "Bob", CheckerColor::Red),
            ],
        )
    }

    #[test]
    fn test_player_display() {
        let alice = Player::new("alice", "Alice", CheckerColor::Red);
        assert_eq!(alice.to_string(), "Alice (\u{1f534})");
        assert_eq!(alice.debug_label(), "Player(id:alice, Alice \u{1f534})");
    }

    #[test]
    fn test_state_display() {
        let waiting = RoundState::WaitingForPlayer {
            id: "bob".to_string(),
        };
        assert_eq!(waiting.to_string(), "Waiting for player id=bob");
        assert_eq!(RoundState::Tie.to_string(), "Tie");

        let complete = RoundState::Complete {
            winner_id: "alice".to_string(),
            positions: Vec::new(),
        };
        assert_eq!(complete.to_string(), "Complete - winner id=alice");
    }

    #[test]
    fn test_round_display() {
        let round = make_round();
        assert_eq!(
            round.to_string(),
            "FourStraight 2x3, winLength=3, state=Waiting for player id=alice"
        );
    }

    #[test]
    fn test_board_string() {
        let mut round = make_round();
        round.drop(0).unwrap();
        round.drop(2).unwrap();

        let board = round.board_string();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "\u{2501}".repeat(9));
        assert_eq!(lines[1], [EMPTY_SLOT; 3].join(" "));
        // bob was recolored yellow by the round
        assert_eq!(
            lines[2],
            format!("\u{1f534} {EMPTY_SLOT} \u{1f7e1}")
        );
        assert_eq!(lines[3], lines[0]);
    }

    #[test]
    fn test_debug_summary_lists_players() {
        let summary = make_round().debug_summary();
        assert!(summary.starts_with("FourStraight 2x3"));
        assert!(summary.contains("Players:\n \u{2022} Player(id:alice, Alice \u{1f534})"));
        assert!(summary.ends_with(" \u{2022} Player(id:bob, Bob \u{1f7e1})"));
    }
}
