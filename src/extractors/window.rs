// src/extractors/window.rs
//! Line-window helpers shared by the section-based field extractors.

/// How many lines after an anchor line a scan inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    /// Whether the anchor line itself is part of the window.
    pub include_anchor: bool,
    /// Number of lines in the window, counted from its first line.
    pub size: usize,
}

/// Result of a windowed scan: the anchor line plus the surviving candidate lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionWindow<'a> {
    pub anchor_index: usize,
    pub anchor: &'a str,
    pub lines: Vec<&'a str>,
}

/// Finds the first line matching `is_anchor` and returns the window that follows it.
///
/// Window lines are trimmed; blank lines and lines matching `is_excluded` are dropped but do
/// not shorten the window. Returns `None` when no line is an anchor.
pub fn scan_window<'a, A, X>(
    lines: &[&'a str],
    is_anchor: A,
    window: ScanWindow,
    is_excluded: X,
) -> Option<SectionWindow<'a>>
where
    A: Fn(&str) -> bool,
    X: Fn(&str) -> bool,
{
    let anchor_index = lines.iter().position(|line| is_anchor(line))?;
    let start = if window.include_anchor { anchor_index } else { anchor_index + 1 };
    let end = start.saturating_add(window.size).min(lines.len());

    let candidates = lines
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .copied()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_excluded(line))
        .collect();

    Some(SectionWindow {
        anchor_index,
        anchor: lines[anchor_index].trim(),
        lines: candidates,
    })
}

/// True when `line` contains any of `terms` as a plain substring.
pub fn contains_any(line: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| line.contains(term.as_str()))
}

/// Splits `heading: rest` when the heading is short and names one of `keywords`.
/// Returns the trimmed remainder, or `None` if the line has no such heading or nothing follows it.
pub fn split_heading<'a>(line: &'a str, keywords: &[String]) -> Option<&'a str> {
    let (head, rest) = line.split_once(':')?;
    let rest = rest.trim();
    if rest.is_empty() || head.split_whitespace().count() > 3 || !contains_any(head, keywords) {
        return None;
    }
    Some(rest)
}

/// Title-cases text: a letter is uppercased when it follows a non-letter, lowercased otherwise.
///
/// `"bachelor of science"` -> `"Bachelor Of Science"`, `"b.s."` -> `"B.S."`,
/// `"node.js"` -> `"Node.Js"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn window_includes_anchor_when_asked() {
        let lines = ["intro", "education", "b.s. physics", "", "m.s. physics", "tail"];
        let window = ScanWindow { include_anchor: true, size: 4 };
        let section = scan_window(&lines, |l| l.contains("education"), window, |_| false).unwrap();
        assert_eq!(section.anchor_index, 1);
        assert_eq!(section.lines, vec!["education", "b.s. physics", "m.s. physics"]);
    }

    #[test]
    fn window_starts_after_anchor_and_is_clamped() {
        let lines = ["skills", "rust", "go"];
        let window = ScanWindow { include_anchor: false, size: 10 };
        let section = scan_window(&lines, |l| l == "skills", window, |_| false).unwrap();
        assert_eq!(section.anchor, "skills");
        assert_eq!(section.lines, vec!["rust", "go"]);
    }

    #[test]
    fn excluded_lines_do_not_shorten_the_window() {
        let lines = ["skills", "python", "work experience", "java", "sql"];
        let window = ScanWindow { include_anchor: false, size: 3 };
        let section =
            scan_window(&lines, |l| l == "skills", window, |l| l.contains("work")).unwrap();
        assert_eq!(section.lines, vec!["python", "java"]);
    }

    #[test]
    fn anchor_on_last_line_yields_empty_window() {
        let lines = ["a", "skills"];
        let window = ScanWindow { include_anchor: false, size: 4 };
        let section = scan_window(&lines, |l| l == "skills", window, |_| false).unwrap();
        assert!(section.lines.is_empty());
    }

    #[test]
    fn missing_anchor_yields_none() {
        let lines = ["a", "b"];
        let window = ScanWindow { include_anchor: true, size: 4 };
        assert!(scan_window(&lines, |l| l == "skills", window, |_| false).is_none());
    }

    #[test]
    fn headings_are_split_only_for_known_keywords() {
        let keywords = terms(&["education", "skills"]);
        assert_eq!(split_heading("education: b.s. math", &keywords), Some("b.s. math"));
        assert_eq!(split_heading("technical skills: rust, go", &keywords), Some("rust, go"));
        assert_eq!(split_heading("contact: me@x.io", &keywords), None);
        assert_eq!(split_heading("skills:", &keywords), None);
        assert_eq!(
            split_heading("my many varied skills and hobbies: chess", &keywords),
            None
        );
    }

    #[test]
    fn title_case_capitalizes_after_non_letters() {
        assert_eq!(
            title_case("bachelor of science in computer science"),
            "Bachelor Of Science In Computer Science"
        );
        assert_eq!(title_case("b.s. in CS"), "B.S. In Cs");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("SQL"), "Sql");
        assert_eq!(title_case(""), "");
    }
}
