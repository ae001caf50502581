use serde::{self, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generated content as a provider hands it back: either one string or a
/// list of segments of mixed shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ModelContent {
    Text(String),
    Segments(Vec<ContentSegment>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ContentSegment {
    Text(String),
    Block(Map<String, Value>),
    Other(Value),
}

impl ContentSegment {
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentSegment::Text(text) => Some(text),
            ContentSegment::Block(fields) => fields.get("text").and_then(Value::as_str),
            ContentSegment::Other(_) => None,
        }
    }
}

impl ModelContent {
    /// Joins the text of every segment in order. When no segment carries
    /// text, the raw content is rendered as JSON instead.
    pub fn to_text(&self) -> String {
        match self {
            ModelContent::Text(text) => text.clone(),
            ModelContent::Segments(segments) => {
                let parts: Vec<&str> = segments.iter().filter_map(ContentSegment::text).collect();
                if parts.is_empty() {
                    serde_json::to_string(segments).unwrap_or_default()
                } else {
                    parts.concat()
                }
            }
        }
    }
}

impl From<String> for ModelContent {
    fn from(text: String) -> Self {
        ModelContent::Text(text)
    }
}

impl From<&str> for ModelContent {
    fn from(text: &str) -> Self {
        ModelContent::Text(text.to_string())
    }
}
