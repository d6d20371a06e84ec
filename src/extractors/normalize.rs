// src/extractors/normalize.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// Hyphen at a line end, plus any whitespace up to the next line's text.
static HYPHEN_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-[^\S\n]*\n\s*").expect("Failed to compile HYPHEN_BREAK_RE")
});

// Any run of whitespace that is not a newline (spaces, tabs, \r, nbsp, form feeds).
static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\S\n]+").expect("Failed to compile HORIZONTAL_WS_RE")
});

// Runs after whitespace collapsing, so at most one space can precede the mark.
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" ([,;:.!?])").expect("Failed to compile SPACE_BEFORE_PUNCT_RE")
});

/// Normalizes raw document text into one semantic line per `\n`.
///
/// Steps, in order:
/// 1. Re-join words hyphenated across a line break (`engi-\n neering` -> `engineering`).
/// 2. Per line: collapse horizontal whitespace to one space and drop spaces before `,;:.!?`.
/// 3. Trim every line and drop blank ones, which also collapses consecutive newlines.
///
/// A punctuation mark directly followed by a non-space character stays attached, so email
/// addresses, decimals and abbreviations like `b.s.` survive. The function is total and
/// idempotent.
pub fn normalize(raw: &str) -> String {
    let repaired = repair_hyphenation(raw);

    repaired
        .split('\n')
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> String {
    let collapsed = HORIZONTAL_WS_RE.replace_all(line, " ");
    let tightened = SPACE_BEFORE_PUNCT_RE.replace_all(&collapsed, "$1");
    tightened.trim().to_string()
}

/// Drops `-<newline>` between two word characters. Candidates that are not flanked by word
/// characters (list dashes, ` - ` separators) are kept verbatim.
fn repair_hyphenation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for mat in HYPHEN_BREAK_RE.find_iter(text) {
        let before = text[..mat.start()].chars().next_back();
        let after = text[mat.end()..].chars().next();
        if before.is_some_and(is_word_char) && after.is_some_and(is_word_char) {
            out.push_str(&text[last..mat.start()]);
            last = mat.end();
        }
    }

    out.push_str(&text[last..]);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
