use std::collections::HashMap;

const NEPALI_LABELS: [(&str, &str); 4] = [
    ("Dhanyabaad", "धन्यवाद"),
    ("Ghar", "घर"),
    ("Ma", "म"),
    ("Namaskaar", "नमस्कार"),
];

/// Read-only mapping from sign codes to the label shown to the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelMap {
    labels: HashMap<String, String>,
}

impl LabelMap {
    pub fn nepali() -> Self {
        Self::from_pairs(&NEPALI_LABELS)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            labels: pairs
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Mapped label for a known code, the code itself otherwise.
    pub fn translate(&self, sign: &str) -> String {
        self.labels
            .get(sign)
            .cloned()
            .unwrap_or_else(|| sign.to_string())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}
