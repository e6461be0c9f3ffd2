//! Core shared types for title generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest number of titles a single request may ask for
pub const MIN_TITLE_COUNT: u8 = 1;

/// Largest number of titles a single request may ask for
pub const MAX_TITLE_COUNT: u8 = 10;

/// Default number of titles when the caller does not choose
pub const DEFAULT_TITLE_COUNT: u8 = 5;

/// Default output language for generated titles
pub const DEFAULT_LANGUAGE: &str = "English";

/// Kind of blog post the titles are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TitleType {
    #[default]
    #[serde(rename = "General")]
    General,
    #[serde(rename = "How-to Guides")]
    HowToGuides,
    #[serde(rename = "Tutorials")]
    Tutorials,
    #[serde(rename = "Listicles")]
    Listicles,
    #[serde(rename = "Newsworthy Posts")]
    NewsworthyPosts,
    #[serde(rename = "FAQs")]
    Faqs,
    #[serde(rename = "Checklists/Cheat Sheets")]
    Checklists,
}

impl TitleType {
    pub const ALL: [TitleType; 7] = [
        TitleType::General,
        TitleType::HowToGuides,
        TitleType::Tutorials,
        TitleType::Listicles,
        TitleType::NewsworthyPosts,
        TitleType::Faqs,
        TitleType::Checklists,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TitleType::General => "General",
            TitleType::HowToGuides => "How-to Guides",
            TitleType::Tutorials => "Tutorials",
            TitleType::Listicles => "Listicles",
            TitleType::NewsworthyPosts => "Newsworthy Posts",
            TitleType::Faqs => "FAQs",
            TitleType::Checklists => "Checklists/Cheat Sheets",
        }
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TitleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        if wanted == "checklists" || wanted == "cheatsheets" {
            return Ok(TitleType::Checklists);
        }
        TitleType::ALL
            .into_iter()
            .find(|t| normalize_label(t.label()) == wanted)
            .ok_or_else(|| format!("Unknown blog type: {s}"))
    }
}

/// Search intent the titles should target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchIntent {
    #[default]
    #[serde(rename = "Informational Intent")]
    Informational,
    #[serde(rename = "Commercial Intent")]
    Commercial,
    #[serde(rename = "Transactional Intent")]
    Transactional,
    #[serde(rename = "Navigational Intent")]
    Navigational,
}

impl SearchIntent {
    pub const ALL: [SearchIntent; 4] = [
        SearchIntent::Informational,
        SearchIntent::Commercial,
        SearchIntent::Transactional,
        SearchIntent::Navigational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SearchIntent::Informational => "Informational Intent",
            SearchIntent::Commercial => "Commercial Intent",
            SearchIntent::Transactional => "Transactional Intent",
            SearchIntent::Navigational => "Navigational Intent",
        }
    }
}

impl fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        SearchIntent::ALL
            .into_iter()
            .find(|intent| {
                let label = normalize_label(intent.label());
                label == wanted || label.trim_end_matches("intent") == wanted
            })
            .ok_or_else(|| format!("Unknown search intent: {s}"))
    }
}

/// Lowercase and drop everything but letters and digits
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// User input for one title generation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title_type: TitleType,
    #[serde(default)]
    pub search_intent: SearchIntent,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default = "default_count")]
    pub count: u8,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_count() -> u8 {
    DEFAULT_TITLE_COUNT
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            content: None,
            title_type: TitleType::default(),
            search_intent: SearchIntent::default(),
            language: default_language(),
            audience: None,
            count: DEFAULT_TITLE_COUNT,
        }
    }
}

impl GenerationRequest {
    /// Create a request for the given keywords with default options
    pub fn with_keywords(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            ..Self::default()
        }
    }

    /// True when keywords or content were supplied
    pub fn has_subject(&self) -> bool {
        !self.keywords.is_empty() || self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// True when the requested count is within the supported range
    pub fn has_valid_count(&self) -> bool {
        (MIN_TITLE_COUNT..=MAX_TITLE_COUNT).contains(&self.count)
    }
}

/// API failure reasons for text generation requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    /// Authentication failed (invalid API key)
    AuthenticationFailed,
    /// Rate limit exceeded
    RateLimitExceeded,
    /// Request quota exceeded
    QuotaExceeded,
    /// Invalid request format or malformed response
    InvalidRequest(String),
    /// Model not found or unavailable
    ModelUnavailable(String),
    /// Network/connection error
    NetworkError(String),
    /// Server error from provider
    ServerError(String),
    /// Request timeout
    Timeout,
    /// Service temporarily unavailable
    ServiceUnavailable,
    /// Unknown or unhandled error
    Unknown(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::AuthenticationFailed => write!(f, "authentication failed"),
            ApiFailure::RateLimitExceeded => write!(f, "rate limit exceeded"),
            ApiFailure::QuotaExceeded => write!(f, "quota exceeded"),
            ApiFailure::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            ApiFailure::ModelUnavailable(model) => write!(f, "model unavailable: {model}"),
            ApiFailure::NetworkError(msg) => write!(f, "network error: {msg}"),
            ApiFailure::ServerError(msg) => write!(f, "server error: {msg}"),
            ApiFailure::Timeout => write!(f, "request timed out"),
            ApiFailure::ServiceUnavailable => write!(f, "service unavailable"),
            ApiFailure::Unknown(msg) => write!(f, "unknown error: {msg}"),
        }
    }
}
