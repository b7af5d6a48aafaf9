use reqwest::Url;

use crate::modules::content::application::domain::{
    entities::Review, flags::SessionFlags, ids::IdGenerator,
};

pub const MIN_ACCEPTED_RATING: u8 = 3;
pub const MAX_RATING: u8 = 5;
pub const REJECTION_MESSAGE: &str = "Bad reviews not accepted";

const DEFAULT_NAME: &str = "Anonymous User";
const DEFAULT_ROLE: &str = "Client";
const DEFAULT_COMMENT: &str = "Excellent experience!";
const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    Open,
    Closed,
}

/// Immediate reaction to a star click. Rejection is cosmetic; the form stays
/// open so the visitor can pick again. An out-of-range pick leaves the
/// current rating untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFeedback {
    Accepted,
    Rejected,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Review),
    Rejected { message: String },
    NotOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    ReopenPrompt,
    Proceed,
}

/// Text inputs of the review form. Blank values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub name: String,
    pub role: String,
    pub comment: String,
}

/// The public feedback form: open/closed, a 0-5 star rating (0 = unset) and
/// the text inputs.
#[derive(Debug, Clone)]
pub struct ReviewIntake {
    state: IntakeState,
    rating: u8,
    form: ReviewForm,
}

impl Default for ReviewIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewIntake {
    pub fn new() -> Self {
        Self {
            state: IntakeState::Closed,
            rating: 0,
            form: ReviewForm::default(),
        }
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == IntakeState::Open
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    pub fn open(&mut self) {
        self.state = IntakeState::Open;
    }

    /// Closing keeps the inputs; only acceptance clears them.
    pub fn close(&mut self) {
        self.state = IntakeState::Closed;
    }

    pub fn select_rating(&mut self, rating: u8) -> RatingFeedback {
        if rating > MAX_RATING {
            return RatingFeedback::OutOfRange;
        }
        self.rating = rating;
        if self.rating >= MIN_ACCEPTED_RATING {
            RatingFeedback::Accepted
        } else {
            RatingFeedback::Rejected
        }
    }

    /// Build the review on acceptance, then close and reset the form.
    pub fn submit(&mut self, ids: &IdGenerator, now_millis: i64) -> SubmitOutcome {
        if !self.is_open() {
            return SubmitOutcome::NotOpen;
        }
        if self.rating < MIN_ACCEPTED_RATING {
            return SubmitOutcome::Rejected {
                message: REJECTION_MESSAGE.to_string(),
            };
        }

        let name = self.form.name.trim();
        let seed = if name.is_empty() {
            now_millis.to_string()
        } else {
            name.to_string()
        };

        let review = Review {
            id: ids.next_at(now_millis),
            name: non_blank_or(&self.form.name, DEFAULT_NAME),
            role: non_blank_or(&self.form.role, DEFAULT_ROLE),
            comment: non_blank_or(&self.form.comment, DEFAULT_COMMENT),
            rating: self.rating,
            avatar: avatar_url(&seed),
        };

        self.state = IntakeState::Closed;
        self.rating = 0;
        self.form = ReviewForm::default();

        SubmitOutcome::Accepted(review)
    }

    /// Leaving the page prompts for a review once per session, and only
    /// when the visitor has not left one yet.
    pub fn on_back_navigation(
        &mut self,
        flags: SessionFlags,
        already_prompted: bool,
    ) -> NavigationDecision {
        if flags.has_submitted_review || already_prompted {
            return NavigationDecision::Proceed;
        }
        self.open();
        NavigationDecision::ReopenPrompt
    }
}

fn non_blank_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Generated avatar for a reviewer, seeded by name (or timestamp).
pub fn avatar_url(seed: &str) -> String {
    match Url::parse_with_params(AVATAR_BASE, &[("seed", seed)]) {
        Ok(url) => url.into(),
        Err(_) => AVATAR_BASE.to_string(),
    }
}
