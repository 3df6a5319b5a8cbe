//! Stage, status, role, and tone enums for SlushPilot.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Enums with state machines provide `allowed_next_states()` to enforce valid
//! transitions at the application layer. Stage and letter status only ever move
//! forward; there are no reverse transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProjectStage
// ---------------------------------------------------------------------------

/// Lifecycle stage of a submission project. Derived from related data, never
/// set directly by the user.
///
/// ```text
/// new → publisher_search → drafting → sent → respond
/// ```
///
/// The first three stages come from the resolver (message/letter counts);
/// `sent` and `respond` are advanced by letter send/respond operations.
/// Skipping forward is allowed (a first letter moves `new` straight to
/// `drafting`); moving backward never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStage {
    New,
    PublisherSearch,
    Drafting,
    Sent,
    Respond,
}

impl ProjectStage {
    /// Valid next states from the current state: every later stage in order.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::New => &[
                Self::PublisherSearch,
                Self::Drafting,
                Self::Sent,
                Self::Respond,
            ],
            Self::PublisherSearch => &[Self::Drafting, Self::Sent, Self::Respond],
            Self::Drafting => &[Self::Sent, Self::Respond],
            Self::Sent => &[Self::Respond],
            Self::Respond => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::PublisherSearch => "publisher_search",
            Self::Drafting => "drafting",
            Self::Sent => "sent",
            Self::Respond => "respond",
        }
    }
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LetterStatus
// ---------------------------------------------------------------------------

/// Status of a query letter through its submission lifecycle.
///
/// ```text
/// drafting → sent → responded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    Drafting,
    Sent,
    Responded,
}

impl LetterStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Drafting => &[Self::Sent],
            Self::Sent => &[Self::Responded],
            Self::Responded => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drafting => "drafting",
            Self::Sent => "sent",
            Self::Responded => "responded",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LetterEventKind
// ---------------------------------------------------------------------------

/// Kind of an append-only letter history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LetterEventKind {
    /// A draft revision written by the author.
    Draft,
    /// A response received from the publisher.
    Response,
}

impl LetterEventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for LetterEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MessageRole
// ---------------------------------------------------------------------------

/// Author of a guidance transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LetterTone
// ---------------------------------------------------------------------------

/// Tone requested for a composed query letter. Determines the signoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum LetterTone {
    #[default]
    Professional,
    WarmProfessional,
    LiteraryProfessional,
    TenseProfessional,
}

impl LetterTone {
    /// The signoff line preceding the author name in a composed letter.
    #[must_use]
    pub const fn signoff(self) -> &'static str {
        match self {
            Self::WarmProfessional => "Warmly",
            Self::Professional | Self::LiteraryProfessional | Self::TenseProfessional => {
                "Sincerely"
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::WarmProfessional => "warm_professional",
            Self::LiteraryProfessional => "literary_professional",
            Self::TenseProfessional => "tense_professional",
        }
    }
}

impl fmt::Display for LetterTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
