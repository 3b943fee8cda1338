//! Replies to a "Konfirmasi catat?" prompt.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Yes,
    No,
}

const YES_WORDS: &[&str] = &["y", "ya", "yes", "ok", "oke", "iya", "yoi", "yup", "sip"];
const NO_WORDS: &[&str] = &[
    "n", "g", "no", "tidak", "nggak", "gak", "cancel", "batal", "ga", "enggak",
];

impl Confirmation {
    /// Exact (trimmed, case-insensitive) match only; "ya dong" is not a reply.
    pub fn parse(text: &str) -> Option<Self> {
        let t = text.trim().to_lowercase();
        if YES_WORDS.contains(&t.as_str()) {
            Some(Confirmation::Yes)
        } else if NO_WORDS.contains(&t.as_str()) {
            Some(Confirmation::No)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_and_no() {
        assert_eq!(Confirmation::parse("Y"), Some(Confirmation::Yes));
        assert_eq!(Confirmation::parse(" sip "), Some(Confirmation::Yes));
        assert_eq!(Confirmation::parse("g"), Some(Confirmation::No));
        assert_eq!(Confirmation::parse("Batal"), Some(Confirmation::No));
    }

    #[test]
    fn test_other_text_is_not_a_reply() {
        assert_eq!(Confirmation::parse("ya dong"), None);
        assert_eq!(Confirmation::parse("makan 50rb"), None);
        assert_eq!(Confirmation::parse(""), None);
    }
}
