//! LLM prompt construction for metadata extraction

/// Builds the metadata-extraction prompt around a slice of body text
///
/// Pure string building, no side effects. At most the first
/// `max_content_chars` characters of the body are embedded; the cut is a
/// hard boundary, not word-aware.
pub struct PromptBuilder<'a> {
    body: &'a str,
    max_content_chars: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder over a note body
    pub fn new(body: &'a str) -> Self {
        Self {
            body,
            max_content_chars: 1500,
        }
    }

    /// Override how many body characters are embedded
    pub fn with_content_limit(mut self, max_content_chars: usize) -> Self {
        self.max_content_chars = max_content_chars;
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let content: String = self.body.chars().take(self.max_content_chars).collect();

        let mut prompt = String::new();
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");
        prompt.push_str("Content to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(&content);
        prompt.push_str("\n---\n\n");
        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Analyze this markdown content and extract metadata in JSON format with these fields:
- "summary": a brief 2-3 sentence summary
- "context": the primary context (personal/work/research)
- "next_actions": list of action items or todos
- "key_concepts": list of key concepts mentioned"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{
  "summary": "...",
  "context": "...",
  "next_actions": ["..."],
  "key_concepts": ["..."]
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;
