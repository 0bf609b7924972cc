use serde::{Deserialize, Serialize};

/// Table options chosen when a game is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Each hand starts with every player passing one card to their partner.
    #[serde(default)]
    pub pass_card: bool,
}

impl Rules {
    pub const fn with_pass_card(pass_card: bool) -> Self {
        Self { pass_card }
    }
}

#[cfg(test)]
mod tests {
    use super::Rules;

    #[test]
    fn passing_is_off_by_default() {
        assert!(!Rules::default().pass_card);
        let rules: Rules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, Rules::default());
    }

    #[test]
    fn serializes_pass_card_flag() {
        let json = serde_json::to_string(&Rules::with_pass_card(true)).unwrap();
        assert_eq!(json, r#"{"pass_card":true}"#);
        let rules: Rules = serde_json::from_str(&json).unwrap();
        assert!(rules.pass_card);
    }
}
