use tracing::debug;

/// Reply used when no known phrase appears in the query.
pub const FALLBACK_RESPONSE: &str = "Please ask a medical question, e.g., 'What is Mounjaro?'";

const MEDICAL_KNOWLEDGE_BASE: &[(&str, &str)] = &[
    (
        "what is mounjaro",
        "Mounjaro is a GIP/GLP-1 receptor agonist for Type 2 Diabetes. Dosage: 2.5-15 mg weekly.",
    ),
    (
        "patient education on diabetes",
        "Manage diabetes with Mounjaro, monitor glucose, and follow a low-GI diet.",
    ),
];

/// Canned medical answers keyed by lowercase phrase.
///
/// Lookup is a case-insensitive substring match over the keys in table order;
/// the first key contained in the query wins.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<(String, String)>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new(MEDICAL_KNOWLEDGE_BASE.iter().copied())
    }
}

impl KnowledgeBase {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(phrase, answer)| (phrase.into().to_lowercase(), answer.into()))
            .collect();
        Self { entries }
    }

    pub fn respond(&self, query: &str) -> String {
        let query = query.to_lowercase();
        match self.entries.iter().find(|(phrase, _)| query.contains(phrase.as_str())) {
            Some((phrase, answer)) => {
                debug!(%phrase, "Knowledge base hit");
                answer.clone()
            }
            None => {
                debug!("Knowledge base miss");
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}
