use serde::{Deserialize, Serialize};

/// Where captured photos get pushed. Stored as-is, key included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoExportSettings {
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub auto_sync: bool,
}

impl PhotoExportSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_endpoint.trim().is_empty()
    }

    /// The API key with all but its last four characters hidden
    pub fn masked_api_key(&self) -> Option<String> {
        let key = self.api_key.as_deref().filter(|k| !k.is_empty())?;
        let chars: Vec<char> = key.chars().collect();
        let visible = if chars.len() > 8 { 4 } else { 0 };
        let hidden = chars.len() - visible;

        Some(
            std::iter::repeat('*')
                .take(hidden)
                .chain(chars[hidden..].iter().copied())
                .collect(),
        )
    }
}
