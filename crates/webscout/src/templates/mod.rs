//! Prompt Templates
//!
//! Instructional templates for the two model calls each action makes:
//! parameter extraction from free text, and response formatting. Slots use
//! `{{name}}` and are filled by [`render`].

use serde_json::Value;

use crate::domain::errors::ScoutError;

/// Extract search query and options from a user message.
pub const SEARCH_PARAMS_TEMPLATE: &str = r#"
Analyze the following message and extract:
1. The search query (convert it to a simple search query suitable for a search engine)
2. Optional parameters if specified:
   - searchDepth: "basic" or "advanced"
   - topic: "general" or "news"
   - maxResults: number between 1 and 20

CRITICAL JSON FORMATTING RULES:
1. Use ONLY ASCII characters
2. Use ONLY double quotes (") for strings
3. Numbers must be actual numbers (not strings)
4. All fields must be at the root level (no nesting)

QUERY FORMATTING RULES:
1. Remove any personal pronouns or pleasantries
2. Make it concise and search-engine friendly
3. Remove any special characters or formatting
4. Keep important keywords and context

Examples of query transformation:
- "Can you search for information about the iPhone please?" -> "iPhone latest information"
- "Find me news about SpaceX" -> "SpaceX latest news"

Example of VALID JSON structure:
{
    "query": "SpaceX latest news",
    "maxResults": 4,
    "topic": "news"
}

Default values (do not include if using these):
* searchDepth: "basic"
* topic: "general"
* maxResults: 1

Message to analyze: {{message}}

Extract the search parameters from the message above. Respond ONLY with a valid JSON object, nothing else."#;

/// Format a search response into user-facing prose.
pub const SEARCH_RESPONSE_TEMPLATE: &str = r#"
You will receive a JSON string containing a search response with:
- query: the search query used
- answer: main search result summary
- results: array of relevant sources with titles, URLs, and content

TASK:
1. Parse and analyze the content:
   - Use the query to understand the search context
   - Extract key information from the answer
   - Review content from each result

2. Create a comprehensive response:
   - Focus on answering the original query
   - Start with the most relevant information
   - Add important details from source content
   - Remove any redundancy

3. Format requirements:
   - Write in the language of the user's message
   - Keep technical terms unchanged (code, URLs, version numbers)
   - Use clear, professional language
   - No introductory phrases or meta-commentary

User message: {{message}}
Search response: {{search_response}}

CRITICAL: Start directly with the content in the user's message language, NO introductions or meta-commentary allowed."#;

/// Extract URLs and extraction options from a user message.
pub const EXTRACT_PARAMS_TEMPLATE: &str = r#"
Analyze the following message and extract these parameters:
1. The URLs to extract content from (up to 20 URLs)
2. Whether to include images (default: false)
3. The extraction depth (basic or advanced, default: basic)

Return a JSON object with these parameters. The JSON MUST be valid and properly formatted.

Example response:
{
    "urls": [
        "https://en.wikipedia.org/wiki/Artificial_intelligence"
    ],
    "includeImages": false,
    "extractDepth": "basic"
}

IMPORTANT FORMATTING RULES:
- "includeImages" MUST be a boolean value (true or false without quotes), NOT a string
- "extractDepth" MUST be a string ("basic" or "advanced" with quotes)
- "urls" MUST be an array of strings, even if empty

IMPORTANT CONTENT RULES:
- Extract ALL URLs mentioned in the message
- URLs must be valid and complete (starting with http:// or https://)
- Maximum 20 URLs can be processed at once
- Do not add URLs that weren't mentioned
- If a URL is incomplete (e.g., "wikipedia.org/wiki/Python"), add the appropriate prefix

Message to analyze: {{message}}

Extract the URLs and options from the message above. Respond ONLY with a valid JSON object, nothing else."#;

/// Format extraction results into user-facing prose.
pub const EXTRACT_RESPONSE_TEMPLATE: &str = r#"
Format web content extraction results in a clear and readable way.

Here are the extraction results to format:
{{extraction_results}}

Response time: {{response_time}} seconds

Formatting rules:
1. Present a concise summary of the content of each URL
2. Organize information in a structured and easy-to-read way
3. Highlight key points of the content
4. If images were found, mention it
5. If some URLs could not be extracted, explain why
6. Use a professional and informative tone

Respond with the formatted content, without adding an introduction or conclusion."#;

/// Fill `{{name}}` slots in a template.
pub fn render(template: &str, slots: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in slots {
        rendered = rendered.replace(&format!("{{{{{}}}}}", name), value);
    }
    rendered
}

/// Decode a model reply that should be JSON.
///
/// We ask for bare JSON, but models sometimes wrap it in a markdown fence
/// anyway, so the fence is stripped before parsing.
pub fn parse_json_reply(raw: &str) -> Result<Value, ScoutError> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    serde_json::from_str(body)
        .map_err(|e| ScoutError::InvalidParams(format!("model reply is not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_fills_all_slots() {
        let out = render("q: {{message}} / again: {{message}} / {{other}}", &[
            ("message", "hello"),
            ("other", "world"),
        ]);
        assert_eq!(out, "q: hello / again: hello / world");
    }

    #[test]
    fn parse_accepts_bare_json() {
        let value = parse_json_reply(r#"{"query": "rust"}"#).unwrap();
        assert_eq!(value, json!({"query": "rust"}));
    }

    #[test]
    fn parse_strips_markdown_fences() {
        let fenced = "```json\n{\"query\": \"rust\", \"limit\": 2}\n```";
        let value = parse_json_reply(fenced).unwrap();
        assert_eq!(value, json!({"query": "rust", "limit": 2}));

        let plain_fence = "```\n{\"a\": 1}\n```";
        assert_eq!(parse_json_reply(plain_fence).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(parse_json_reply("I could not find anything").is_err());
    }
}
