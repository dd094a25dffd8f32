//! The five-question provider quiz: question table and wizard progress.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::{QuestionId, QuizAnswers, StateAnswer};

/// Errors from driving the quiz wizard
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Quiz is already complete")]
    AlreadyComplete,

    #[error("Invalid step: {0}")]
    InvalidStep(usize),

    #[error("Option {value:?} is not offered for question {question:?}")]
    UnknownOption { question: QuestionId, value: String },

    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    pub fn offers(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

const fn opt(value: &'static str, label: &'static str, description: &'static str) -> QuizOption {
    QuizOption { value, label, description }
}

/// Quiz questions in wizard order
pub static QUESTIONS: [Question; 5] = [
    Question {
        id: QuestionId::Budget,
        question: "What's your budget for the FNS50322 course?",
        options: &[
            opt("under-4000", "Under $4,000", "Budget-friendly options"),
            opt("4000-5000", "$4,000 - $5,000", "Mid-range with good support"),
            opt("over-5000", "Over $5,000", "Premium with mentorship"),
            opt("vet-loan", "VET Student Loan", "Defer payment until earning"),
        ],
    },
    Question {
        id: QuestionId::Timeline,
        question: "How quickly do you want to complete the course?",
        options: &[
            opt("fast", "3-4 months", "Fast-track intensive study"),
            opt("standard", "6-9 months", "Balanced pace while working"),
            opt("flexible", "9-12 months", "Relaxed self-paced learning"),
        ],
    },
    Question {
        id: QuestionId::StudyMode,
        question: "How do you prefer to study?",
        options: &[
            opt("online", "100% Online", "Study anywhere, anytime"),
            opt("blended", "Blended", "Online + face-to-face workshops"),
            opt("face-to-face", "Classroom", "Traditional campus learning"),
        ],
    },
    Question {
        id: QuestionId::State,
        question: "Which state are you located in?",
        options: &[
            opt("NSW", "New South Wales", ""),
            opt("VIC", "Victoria", ""),
            opt("QLD", "Queensland", ""),
            opt("WA", "Western Australia", ""),
            opt("SA", "South Australia", ""),
            opt("other", "Other (TAS/NT/ACT)", ""),
        ],
    },
    Question {
        id: QuestionId::Experience,
        question: "Do you have prior finance industry experience?",
        options: &[
            opt("none", "No experience", "Starting fresh in finance"),
            opt("some", "Some experience", "Banking, lending, or real estate"),
            opt("significant", "Significant experience", "May qualify for RPL"),
        ],
    },
];

/// Client-held wizard state.
///
/// Answers accumulate as steps advance; going back keeps them, and answering
/// a question again replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizProgress {
    #[serde(default)]
    pub step: usize,
    #[serde(default)]
    pub answers: QuizAnswers,
    #[serde(default)]
    pub complete: bool,
}

impl QuizProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question awaiting an answer, `None` once complete
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.complete {
            None
        } else {
            QUESTIONS.get(self.step)
        }
    }

    /// Percentage shown on the progress bar, never above 100
    pub fn percent(&self) -> f64 {
        let shown = self.step.saturating_add(1).min(QUESTIONS.len());
        (shown as f64 / QUESTIONS.len() as f64) * 100.0
    }

    /// Check a client-supplied record before acting on it. The step must
    /// name a question, and a completed quiz sits on the last one.
    pub fn validate(&self) -> Result<(), QuizError> {
        let last = QUESTIONS.len() - 1;
        if self.step > last || (self.complete && self.step != last) {
            return Err(QuizError::InvalidStep(self.step));
        }
        Ok(())
    }

    /// Record an answer for the current question and advance
    pub fn answer(&mut self, value: &str) -> Result<(), QuizError> {
        self.validate()?;
        if self.complete {
            return Err(QuizError::AlreadyComplete);
        }

        let question = &QUESTIONS[self.step];

        if !question.offers(value) {
            return Err(QuizError::UnknownOption {
                question: question.id,
                value: value.to_string(),
            });
        }

        match question.id {
            QuestionId::Budget => self.answers.budget = Some(parse_option(value)?),
            QuestionId::Timeline => self.answers.timeline = Some(parse_option(value)?),
            QuestionId::StudyMode => self.answers.study_mode = Some(parse_option(value)?),
            QuestionId::State => self.answers.state = Some(StateAnswer::from(value)),
            QuestionId::Experience => self.answers.experience = Some(parse_option(value)?),
        }

        if self.step + 1 < QUESTIONS.len() {
            self.step += 1;
        } else {
            self.complete = true;
        }

        Ok(())
    }

    /// Go back one question. From the results screen this returns to the
    /// last question.
    pub fn back(&mut self) -> Result<(), QuizError> {
        self.validate()?;
        if self.complete {
            self.complete = false;
        } else {
            self.step = self.step.saturating_sub(1);
        }
        Ok(())
    }
}

fn parse_option<T: DeserializeOwned>(value: &str) -> Result<T, QuizError> {
    Ok(serde_json::from_value(serde_json::Value::String(value.to_string()))?)
}
