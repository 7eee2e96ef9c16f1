//! One-shot user-facing notices carried across a redirect.
//!
//! Each notice has a stable kebab-case key. The key is what travels in the
//! flash cookie; the message text is looked up again on the next page view.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    UserNotFound,
    ApplicationSubmitted,
    DuplicateApplication,
    SummarySubmitted,
    PositionPosted,
    OfferRecorded,
    GradeRecorded,
}

/// Serializable form of a [`Notice`] as it appears in a page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNotice {
    pub key: &'static str,
    pub level: NoticeLevel,
    pub message: &'static str,
}

/// Every notice, in declaration order.
pub const ALL: &[Notice] = &[
    Notice::UserNotFound,
    Notice::ApplicationSubmitted,
    Notice::DuplicateApplication,
    Notice::SummarySubmitted,
    Notice::PositionPosted,
    Notice::OfferRecorded,
    Notice::GradeRecorded,
];

impl Notice {
    pub fn key(self) -> &'static str {
        match self {
            Notice::UserNotFound => "user-not-found",
            Notice::ApplicationSubmitted => "application-submitted",
            Notice::DuplicateApplication => "duplicate-application",
            Notice::SummarySubmitted => "summary-submitted",
            Notice::PositionPosted => "position-posted",
            Notice::OfferRecorded => "offer-recorded",
            Notice::GradeRecorded => "grade-recorded",
        }
    }

    pub fn level(self) -> NoticeLevel {
        match self {
            Notice::UserNotFound | Notice::DuplicateApplication => NoticeLevel::Error,
            _ => NoticeLevel::Success,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::UserNotFound => "User not found for that role.",
            Notice::ApplicationSubmitted => "Application Submitted Successfully!",
            Notice::DuplicateApplication => "You already applied to this position.",
            Notice::SummarySubmitted => "Co-Op Summary Submitted!",
            Notice::PositionPosted => "Position posted!",
            Notice::OfferRecorded => "Offer recorded.",
            Notice::GradeRecorded => "Grade recorded.",
        }
    }

    /// Resolve a key read back from the flash cookie. Unknown keys are dropped.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL.iter().copied().find(|n| n.key() == key)
    }

    pub fn render(self) -> RenderedNotice {
        RenderedNotice {
            key: self.key(),
            level: self.level(),
            message: self.message(),
        }
    }
}
