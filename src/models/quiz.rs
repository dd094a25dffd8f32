use serde::{Deserialize, Serialize};

/// Identifiers of the five quiz questions, in wizard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionId {
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "timeline")]
    Timeline,
    #[serde(rename = "studyMode")]
    StudyMode,
    #[serde(rename = "state")]
    State,
    #[serde(rename = "experience")]
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetAnswer {
    #[serde(rename = "under-4000")]
    Under4000,
    #[serde(rename = "4000-5000")]
    From4000To5000,
    #[serde(rename = "over-5000")]
    Over5000,
    #[serde(rename = "vet-loan")]
    VetLoan,
    #[serde(rename = "unrecognized", other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineAnswer {
    #[serde(rename = "fast")]
    Fast,
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "unrecognized", other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyModeAnswer {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "blended")]
    Blended,
    #[serde(rename = "face-to-face")]
    FaceToFace,
    #[serde(rename = "unrecognized", other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceAnswer {
    #[serde(rename = "none")]
    NoExperience,
    #[serde(rename = "some")]
    SomeExperience,
    #[serde(rename = "significant")]
    Significant,
    #[serde(rename = "unrecognized", other)]
    Unrecognized,
}

/// State answer: either the "other" sentinel or a state code compared
/// verbatim against provider state lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateAnswer {
    Other,
    Code(String),
}

pub const OTHER_STATE: &str = "other";

impl From<String> for StateAnswer {
    fn from(value: String) -> Self {
        if value == OTHER_STATE {
            StateAnswer::Other
        } else {
            StateAnswer::Code(value)
        }
    }
}

impl From<StateAnswer> for String {
    fn from(value: StateAnswer) -> Self {
        match value {
            StateAnswer::Other => OTHER_STATE.to_string(),
            StateAnswer::Code(code) => code,
        }
    }
}

impl From<&str> for StateAnswer {
    fn from(value: &str) -> Self {
        StateAnswer::from(value.to_string())
    }
}

/// Accumulated quiz selections; every field is optional until answered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineAnswer>,
    #[serde(rename = "studyMode", default, skip_serializing_if = "Option::is_none")]
    pub study_mode: Option<StudyModeAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceAnswer>,
}

impl QuizAnswers {
    pub fn is_answered(&self, question: QuestionId) -> bool {
        match question {
            QuestionId::Budget => self.budget.is_some(),
            QuestionId::Timeline => self.timeline.is_some(),
            QuestionId::StudyMode => self.study_mode.is_some(),
            QuestionId::State => self.state.is_some(),
            QuestionId::Experience => self.experience.is_some(),
        }
    }
}
