use serde::{Deserialize, Serialize};

/// Stable, unique identifier of a player.
pub type PlayerId = String;

/// Token color. A round always holds one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckerColor {
    #[serde(rename = "r")]
    Red,
    #[serde(rename = "y")]
    Yellow,
}

impl CheckerColor {
    /// Get the other color
    pub fn opposite(self) -> CheckerColor {
        match self {
            CheckerColor::Red => CheckerColor::Yellow,
            CheckerColor::Yellow => CheckerColor::Red,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            CheckerColor::Red => "Red",
            CheckerColor::Yellow => "Yellow",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            CheckerColor::Red => "\u{1f534}",
            CheckerColor::Yellow => "\u{1f7e1}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "checkerColor")]
    pub checker_color: CheckerColor,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        checker_color: CheckerColor,
    ) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            image_url: None,
            checker_color,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Copy of this player holding a different token color.
    pub fn with_checker_color(&self, color: CheckerColor) -> Player {
        Player {
            checker_color: color,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_color() {
        assert_eq!(CheckerColor::Red.opposite(), CheckerColor::Yellow);
        assert_eq!(CheckerColor::Yellow.opposite(), CheckerColor::Red);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(CheckerColor::Red.name(), "Red");
        assert_eq!(CheckerColor::Yellow.name(), "Yellow");
    }

    #[test]
    fn test_with_checker_color_keeps_identity() {
        let alice =
            Player::new("alice", "Alice", CheckerColor::Red).with_image_url("https://a/b.png");
        let recolored = alice.with_checker_color(CheckerColor::Yellow);
        assert_eq!(recolored.id, "alice");
        assert_eq!(recolored.name, "Alice");
        assert_eq!(recolored.image_url.as_deref(), Some("https://a/b.png"));
        assert_eq!(recolored.checker_color, CheckerColor::Yellow);
    }

    #[test]
    fn test_player_json_field_names() {
        let alice =
            Player::new("alice", "Alice", CheckerColor::Red).with_image_url("https://a/b.png");
        let json = serde_json::to_value(&alice).unwrap();
        assert_eq!(json["checkerColor"], "r");
        assert_eq!(json["imageUrl"], "https://a/b.png");

        let bob: Player =
            serde_json::from_str(r#"{"id":"bob","name":"Bob","checkerColor":"y"}"#).unwrap();
        assert_eq!(bob.image_url, None);
        assert_eq!(bob.checker_color, CheckerColor::Yellow);
    }
}
