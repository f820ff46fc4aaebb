use serde::{Deserialize, Serialize};

/// Structured error payload returned by the backend on 4xx responses.
///
/// The backend sends either `{"detail": "message"}` for errors it raises
/// itself, or `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`
/// when request validation fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorItem>),
}

/// One entry of a validation error list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorItem {
    /// Dotted location path, skipping the leading `body`/`query`/`path` segment.
    fn location(&self) -> String {
        self.loc
            .iter()
            .skip_while(|seg| matches!(seg.as_str(), Some("body" | "query" | "path")))
            .map(|seg| match seg {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(message.into()),
        }
    }

    /// Flatten the detail into one human-readable line.
    pub fn detail_text(&self) -> String {
        match &self.detail {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Items(items) => items
                .iter()
                .map(|item| {
                    let location = item.location();
                    if location.is_empty() {
                        item.msg.clone()
                    } else {
                        format!("{}: {}", location, item.msg)
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
