/// Maps raw text to its canonical indexed form: lowercase, ASCII
/// alphanumerics and spaces only, single spaces between words, no
/// leading or trailing whitespace.
///
/// Total and deterministic; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
