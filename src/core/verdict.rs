//! Verdicts and rejection reasons
//!
//! Every submission ends in exactly one `Verdict`. Rejections are a closed set
//! and each one is recoverable: the round goes on, only the submission is refused.

use std::fmt;

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Rejection {
    /// Nothing left after normalization; never shown to the player
    #[error("empty input")]
    EmptyInput,
    #[error("submission is the root word")]
    SameAsRoot,
    #[error("submission is too short")]
    TooShort,
    #[error("submission was already used this round")]
    AlreadyUsed,
    #[error("submission cannot be spelled from the root word")]
    NotPossible,
    #[error("submission is not a recognized word")]
    NotAWord,
}

impl Rejection {
    /// All rejection reasons, in the order the checks run
    pub const ALL: [Self; 6] = [
        Self::EmptyInput,
        Self::SameAsRoot,
        Self::TooShort,
        Self::AlreadyUsed,
        Self::NotPossible,
        Self::NotAWord,
    ];

    /// Silent rejections are ignored by front-ends instead of reported
    #[inline]
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Short headline for an error alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EmptyInput => "",
            Self::SameAsRoot => "Be more original",
            Self::TooShort => "Word too short",
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotAWord => "Word not recognized",
        }
    }

    /// Player-facing explanation, mentioning the root where it helps
    #[must_use]
    pub fn message(self, root: &str, min_length: usize) -> String {
        match self {
            Self::EmptyInput => String::new(),
            Self::SameAsRoot => "That's the root word itself!".to_string(),
            Self::TooShort => format!("Words must be longer than {min_length} letters."),
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotAWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

/// Outcome of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The normalized word passed every check
    Accepted(String),
    Rejected(Rejection),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }

    /// Convert into a `Result`, accepted words on the `Ok` side
    ///
    /// # Errors
    /// Returns the rejection reason for a rejected verdict.
    pub fn into_result(self) -> Result<String, Rejection> {
        match self {
            Self::Accepted(word) => Ok(word),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted(word) => write!(f, "accepted '{word}'"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_input_is_silent() {
        for reason in Rejection::ALL {
            assert_eq!(reason.is_silent(), reason == Rejection::EmptyInput);
        }
    }

    #[test]
    fn visible_rejections_have_text() {
        for reason in Rejection::ALL.into_iter().filter(|r| !r.is_silent()) {
            assert!(!reason.title().is_empty(), "{reason:?} has no title");
            assert!(!reason.message("silkworm", 3).is_empty());
        }
    }

    #[test]
    fn not_possible_message_mentions_root() {
        let message = Rejection::NotPossible.message("silkworm", 3);
        assert!(message.contains("silkworm"));
    }

    #[test]
    fn too_short_message_mentions_threshold() {
        let message = Rejection::TooShort.message("silkworm", 3);
        assert!(message.contains('3'));
    }

    #[test]
    fn verdict_accessors() {
        let accepted = Verdict::Accepted("silk".to_string());
        assert!(accepted.is_accepted());
        assert_eq!(accepted.rejection(), None);
        assert_eq!(accepted.into_result(), Ok("silk".to_string()));

        let rejected = Verdict::Rejected(Rejection::TooShort);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection(), Some(Rejection::TooShort));
        assert_eq!(rejected.into_result(), Err(Rejection::TooShort));
    }

    #[test]
    fn verdict_display() {
        assert_eq!(
            Verdict::Accepted("silk".to_string()).to_string(),
            "accepted 'silk'"
        );
        assert_eq!(
            Verdict::Rejected(Rejection::NotAWord).to_string(),
            "rejected: submission is not a recognized word"
        );
    }
}
