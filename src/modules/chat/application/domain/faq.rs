/// Opening line shown before any question is picked.
pub const GREETING: &str =
    "Hi there! I'm Towsif's AI assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[CannedAnswer] = &[
    CannedAnswer {
        question: "What services do you offer?",
        answer: "I offer Web Development, UI/UX Design, Graphic Design, and Video Editing services.",
    },
    CannedAnswer {
        question: "How can I contact you?",
        answer: "You can reach me via the contact form below or directly on WhatsApp at +8801XXXXXXXXX.",
    },
    CannedAnswer {
        question: "Do you take custom projects?",
        answer: "Yes! I love working on unique and challenging custom projects.",
    },
    CannedAnswer {
        question: "Where are you based?",
        answer: "I am based in Bangladesh, working with clients globally.",
    },
];

pub fn questions() -> impl Iterator<Item = &'static str> {
    FAQ.iter().map(|qa| qa.question)
}

/// Matches ignoring case and surrounding whitespace.
pub fn answer_for(question: &str) -> Option<&'static str> {
    let question = question.trim();
    FAQ.iter()
        .find(|qa| qa.question.eq_ignore_ascii_case(question))
        .map(|qa| qa.answer)
}
