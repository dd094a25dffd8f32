use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const VET_STUDENT_LOAN: &str = "VET Student Loan";

/// How a provider delivers the course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    Online,
    #[serde(rename = "Face-to-face")]
    FaceToFace,
    Blended,
    Intensive,
}

/// Industry association a provider's graduates can join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipPathway {
    #[serde(rename = "MFAA")]
    Mfaa,
    #[serde(rename = "FBAA")]
    Fbaa,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Upfront,
    Total,
    Monthly,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Limited,
    Waitlist,
    Soldout,
}

/// Course pricing offered by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingOption {
    pub price: f64,
    #[serde(rename = "priceType")]
    pub price_type: PriceType,
    pub duration: String,
    #[serde(rename = "fundingEligible", default)]
    pub funding_eligible: bool,
    #[serde(rename = "fundingType", default)]
    pub funding_type: Option<String>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(rename = "discountPercentage", default)]
    pub discount_percentage: Option<f64>,
    pub availability: Availability,
    #[serde(rename = "spotsRemaining", default)]
    pub spots_remaining: Option<u32>,
    #[serde(rename = "nextStartDate", default)]
    pub next_start_date: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A registered training organisation offering the diploma
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub location: String,
    pub states: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    #[serde(rename = "completionRate")]
    pub completion_rate: f64,
    #[serde(rename = "employmentRate")]
    pub employment_rate: f64,
    pub pricing: PricingOption,
    #[serde(rename = "fundingOptions", default)]
    pub funding_options: Vec<String>,
    #[serde(rename = "deliveryModes")]
    pub delivery_modes: Vec<DeliveryMode>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub accreditations: Vec<String>,
    #[serde(rename = "membershipPathways", default)]
    pub membership_pathways: Vec<MembershipPathway>,
    #[serde(default)]
    pub founded: Option<String>,
    #[serde(rename = "studentsGraduated", default)]
    pub students_graduated: u32,
    /// Conditions currently imposed on the provider's registration
    #[serde(rename = "registrationConditions", default)]
    pub registration_conditions: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub verified: bool,
}

impl Provider {
    pub fn serves_state(&self, code: &str) -> bool {
        self.states.iter().any(|s| s == code)
    }

    pub fn offers(&self, mode: DeliveryMode) -> bool {
        self.delivery_modes.contains(&mode)
    }

    pub fn offers_vet_student_loan(&self) -> bool {
        self.funding_options.iter().any(|f| f == VET_STUDENT_LOAN)
    }

    /// Year the provider was founded, when `founded` starts with one
    pub fn founded_year(&self) -> Option<i32> {
        self.founded.as_deref()?.get(..4)?.parse().ok()
    }
}

/// Blog article; `content` is the raw line-oriented markup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "publishedAt")]
    pub published_at: NaiveDate,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "readTime")]
    pub read_time: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "seoTitle")]
    pub seo_title: String,
    #[serde(rename = "seoDescription")]
    pub seo_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub helpful: u32,
    #[serde(default)]
    pub views: u32,
    #[serde(rename = "lastUpdated")]
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "relatedQuestions", default)]
    pub related_questions: Vec<String>,
}

impl FaqItem {
    /// Case-insensitive match against question, answer and tags.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
            || self.answer.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Core,
    Elective,
}

/// A unit of competency within the diploma
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub code: String,
    pub name: String,
    pub description: String,
    pub hours: u32,
    pub category: ModuleCategory,
    #[serde(default)]
    pub aka: Option<String>,
}
