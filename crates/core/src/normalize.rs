use unicode_segmentation::UnicodeSegmentation;

/// Inputs longer than this are truncated before matching. The storefront
/// input box has no limit of its own, so the cap lives here.
pub const MAX_INPUT_GRAPHEMES: usize = 500;

/// Lowercase and trim one line of user input. Total for any input,
/// including the empty string; no stemming or tokenization happens here,
/// matching stays substring/regex based downstream.
pub fn normalize_text(input: &str) -> String {
    let trimmed = input.trim();
    let capped: String = trimmed.graphemes(true).take(MAX_INPUT_GRAPHEMES).collect();
    capped.to_lowercase()
}
