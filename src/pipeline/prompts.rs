//! Prompt templates and response parsing
//!
//! One fixed instruction template per step, each embedding the raw input
//! text, plus the parsers that turn the model's free-text answers into
//! typed values.
//!
//! Parsing is deliberately tolerant: the classification answer is matched
//! case-insensitively against the closed label set and falls back to
//! "Other" on any mismatch, and the entity list accepts any amount of
//! whitespace around the commas.

/// The closed set of classification labels
pub const CLASSIFICATION_LABELS: [&str; 4] = ["News", "Blog", "Research", "Other"];

/// Label stored when the model's answer matches none of the known labels
pub const FALLBACK_LABEL: &str = "Other";

/// Build the classification prompt for the given input text
pub fn classification_prompt(text: &str) -> String {
    format!(
        "Classify the following text into one of the following categories: \
         News, Blog, Research or Other. DO NOT PROVIDE REASON.\n\nText:{text}\n\nCategory:"
    )
}

/// Build the entity-extraction prompt for the given input text
pub fn entity_extraction_prompt(text: &str) -> String {
    format!(
        "Extract all entities (Person, Organisation, Location, etc.) from the \
         following text. Provide the result as a comma separated list. \
         JUST RETURN THE LIST AND NOTHING ELSE.\n\n{text}\n\nEntities:"
    )
}

/// Build the summarization prompt for the given input text
pub fn summarization_prompt(text: &str) -> String {
    format!(
        "Summarize the following text into a small text. \
         JUST RETURN THE SUMMARY AND NOTHING ELSE.\n\nText:{text}\n\nSummary:"
    )
}

/// Parse the classification answer into a canonical label
///
/// Trims whitespace and a trailing period, then matches the answer
/// case-insensitively against [`CLASSIFICATION_LABELS`]. Anything else
/// becomes [`FALLBACK_LABEL`].
pub fn parse_classification(raw: &str) -> String {
    let answer = raw.trim().trim_end_matches('.').trim();
    CLASSIFICATION_LABELS
        .iter()
        .find(|label| label.eq_ignore_ascii_case(answer))
        .copied()
        .unwrap_or(FALLBACK_LABEL)
        .to_string()
}

/// Parse the entity answer into an ordered list
///
/// Splits on commas with any surrounding whitespace, trims each element,
/// and drops empty elements. An answer with no entities yields an explicit
/// empty list.
pub fn parse_entities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entity| !entity.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_input_text() {
        let text = "The city council approved a new budget on Tuesday.";
        assert!(classification_prompt(text).contains(text));
        assert!(entity_extraction_prompt(text).contains(text));
        assert!(summarization_prompt(text).contains(text));
    }

    #[test]
    fn test_prompts_accept_empty_text() {
        // Empty input is the model's problem, not ours; the template still renders.
        assert!(classification_prompt("").contains("Category:"));
        assert!(entity_extraction_prompt("").contains("Entities:"));
        assert!(summarization_prompt("").contains("Summary:"));
    }

    #[test]
    fn test_parse_classification_exact_labels() {
        for label in CLASSIFICATION_LABELS {
            assert_eq!(parse_classification(label), label);
        }
    }

    #[test]
    fn test_parse_classification_normalizes_answer() {
        assert_eq!(parse_classification("  News \n"), "News");
        assert_eq!(parse_classification("news"), "News");
        assert_eq!(parse_classification("RESEARCH"), "Research");
        assert_eq!(parse_classification("Blog."), "Blog");
    }

    #[test]
    fn test_parse_classification_falls_back_on_mismatch() {
        assert_eq!(parse_classification("Opinion piece"), "Other");
        assert_eq!(parse_classification("This text is News."), "Other");
        assert_eq!(parse_classification(""), "Other");
    }

    #[test]
    fn test_parse_entities_tolerates_spacing() {
        let expected = vec!["a".to_string(), "b".to_string()];
        assert_eq!(parse_entities("a,b"), expected);
        assert_eq!(parse_entities("a, b"), expected);
        assert_eq!(parse_entities("a,  b"), expected);
        assert_eq!(parse_entities(" a , b "), expected);
    }

    #[test]
    fn test_parse_entities_preserves_order() {
        assert_eq!(
            parse_entities("city council, Tuesday"),
            vec!["city council".to_string(), "Tuesday".to_string()]
        );
    }

    #[test]
    fn test_parse_entities_drops_empty_elements() {
        assert_eq!(parse_entities("a,,b,"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parse_entities(""), Vec::<String>::new());
        assert_eq!(parse_entities("  ,  "), Vec::<String>::new());
    }

    #[test]
    fn test_parse_entities_single_entity() {
        assert_eq!(parse_entities("city council"), vec!["city council".to_string()]);
    }
}
