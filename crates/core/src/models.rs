use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    PriceInquiry,
    Recommendation,
    Comparison,
    Warranty,
    Logistics,
    Contact,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFamily {
    S24,
    S25,
    ZFold,
    ZFlip,
}

impl ProductFamily {
    /// Keyword match over already-normalized text, not a parser of product names.
    pub fn from_keywords(text: &str) -> Option<Self> {
        if text.contains("s24") || text.contains("galaxy s24") {
            Some(Self::S24)
        } else if text.contains("s25") || text.contains("galaxy s25") {
            Some(Self::S25)
        } else if text.contains("fold") || text.contains("gập") {
            Some(Self::ZFold)
        } else if text.contains("flip") {
            Some(Self::ZFlip)
        } else {
            None
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::S24 => "Samsung Galaxy S24",
            Self::S25 => "Samsung Galaxy S25",
            Self::ZFold => "Samsung Galaxy Z Fold",
            Self::ZFlip => "Samsung Galaxy Z Flip",
        }
    }
}

/// One classified response: the text shown in the transcript (may contain
/// embedded line breaks) plus the ordered quick-reply labels, when any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub suggestions: Vec<String>,
    pub intent: Intent,
}

impl Reply {
    pub fn plain(intent: Intent, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
            intent,
        }
    }

    pub fn with_suggestions(
        intent: Intent,
        text: impl Into<String>,
        suggestions: &[&str],
    ) -> Self {
        Self {
            text: text.into(),
            suggestions: suggestions.iter().map(ToString::to_string).collect(),
            intent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Bot,
}

/// One line of the append-only session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub seq: u64,
    pub at: DateTime<Utc>,
    pub author: Author,
    pub text: String,
    pub suggestions: Vec<String>,
}

/// A product harvested from the server-rendered listing fragment.
/// Collected for parity with the storefront page; the classifier does not
/// read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedProduct {
    pub id: String,
    pub name: String,
    pub price: String,
}
