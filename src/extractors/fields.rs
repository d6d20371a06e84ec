// src/extractors/fields.rs

// --- Imports ---
use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::record::{ExtractionOutcome, ExtractionRecord};
use crate::extractors::vocabulary::{Vocabulary, DEFAULT_VOCABULARY};
use crate::extractors::window::{contains_any, scan_window, split_heading, title_case, ScanWindow};

// --- Regex Patterns (Lazy Static) ---
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Failed to compile EMAIL_RE")
});

// Optional +1 country code, optional parentheses around the area code,
// space / dot / hyphen between the groups.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-. ]?)?\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})")
        .expect("Failed to compile PHONE_RE")
});

// Separators inside a skills line: comma, semicolon, pipe, bullet.
const SKILL_DELIMITERS: &[char] = &[',', ';', '|', '\u{2022}'];

/// Returns the first email address in the text, verbatim.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Returns the first North-American phone number in the text as `(AAA) NNN-NNNN`.
pub fn extract_phone(text: &str) -> Option<String> {
    let caps = PHONE_RE.captures(text)?;
    Some(format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]))
}

// --- Main Extractor Structure ---
/// Runs the field heuristics over normalized text.
///
/// Holds only an immutable [`Vocabulary`]; every method is a pure function of its input, so a
/// single extractor can be shared across threads.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    vocabulary: Vocabulary,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::with_vocabulary(DEFAULT_VOCABULARY.clone())
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Extracts every field from normalized text.
    ///
    /// Text that is empty after trimming yields the error outcome instead of a record.
    pub fn extract(&self, file_name: &str, text: &str) -> ExtractionOutcome {
        if text.trim().is_empty() {
            tracing::warn!("No text available for {}", file_name);
            return ExtractionOutcome::text_unavailable();
        }
        ExtractionOutcome::Extracted(self.extract_record(file_name, text))
    }

    /// Builds the record without the empty-text check.
    pub fn extract_record(&self, file_name: &str, text: &str) -> ExtractionRecord {
        let record = ExtractionRecord {
            file_name: file_name.to_string(),
            name: self.extract_name(text),
            email: extract_email(text),
            phone: extract_phone(text),
            education: self.extract_education(text),
            skills: self.extract_skills(text),
        };
        tracing::debug!(
            "Extracted {}: name={:?} email={:?} phone={:?} education={} skills={}",
            file_name,
            record.name,
            record.email,
            record.phone,
            record.education.len(),
            record.skills.len()
        );
        record
    }

    /// Picks the candidate's name from the header lines.
    ///
    /// The first line (after generic headers such as "Resume") with 2-4 alphabetic words, one of
    /// them capitalized, is returned verbatim. Words may end in a period to allow initials.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        let vocab = &self.vocabulary;
        text.lines()
            .take(vocab.name_scan_lines)
            .map(str::trim)
            .filter(|line| !line.is_empty() && !vocab.is_name_header(line))
            .find(|line| self.looks_like_name(line))
            .map(str::to_string)
    }

    fn looks_like_name(&self, line: &str) -> bool {
        let words: Vec<&str> = line.split_whitespace().collect();
        let word_range = self.vocabulary.name_min_words..=self.vocabulary.name_max_words;

        word_range.contains(&words.len())
            && words.iter().all(|word| is_name_word(word))
            && words.iter().any(|word| word.chars().next().is_some_and(char::is_uppercase))
    }

    /// Collects degree lines from the window that opens at the first education keyword.
    ///
    /// Lines mentioning another section (experience, work, skills) are skipped. A leading
    /// `Education:` label is dropped, but a degree named before a colon ("B.S.: Physics") is
    /// kept whole. Duplicate degrees are reported twice.
    pub fn extract_education(&self, text: &str) -> Vec<String> {
        let vocab = &self.vocabulary;
        let lowered = text.to_lowercase();
        let lines: Vec<&str> = lowered.lines().collect();

        let window = ScanWindow { include_anchor: true, size: vocab.education_window };
        let Some(section) = scan_window(
            &lines,
            |line| contains_any(line, &vocab.education_keywords),
            window,
            |line| contains_any(line, &vocab.education_boundaries),
        ) else {
            tracing::debug!("No education section found");
            return Vec::new();
        };
        tracing::debug!("Education section anchored at line {}", section.anchor_index);

        section
            .lines
            .iter()
            .filter(|line| contains_any(line, &vocab.degree_indicators))
            .map(|line| title_case(self.strip_education_label(line)))
            .collect()
    }

    /// Drops an `Education:` or `Academic Background:` prefix when the rest names the degree.
    fn strip_education_label<'a>(&self, line: &'a str) -> &'a str {
        let vocab = &self.vocabulary;
        match line.split_once(':') {
            Some((head, _)) if contains_any(head, &vocab.degree_indicators) => line,
            _ => split_heading(line, &vocab.education_headings)
                .filter(|rest| contains_any(rest, &vocab.degree_indicators))
                .unwrap_or(line),
        }
    }

    /// Union of vocabulary hits anywhere in the text and tokens listed under the skills heading.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let vocab = &self.vocabulary;
        let lowered = text.to_lowercase();

        let mut skills: BTreeSet<String> = vocab
            .technical_skills
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .map(|term| title_case(term))
            .collect();

        let lines: Vec<&str> = lowered.lines().collect();
        let window = ScanWindow { include_anchor: false, size: vocab.skills_window };
        let is_boundary = |line: &str| contains_any(line, &vocab.skill_boundaries);

        if let Some(section) = scan_window(
            &lines,
            |line| contains_any(line, &vocab.skill_section_keywords),
            window,
            is_boundary,
        ) {
            // "Skills: python, java" lists its entries on the heading line itself.
            let inline = split_heading(section.anchor, &vocab.skill_section_keywords)
                .filter(|_| !is_boundary(section.anchor));

            for line in inline.into_iter().chain(section.lines.iter().copied()) {
                for token in line.split(SKILL_DELIMITERS).map(str::trim) {
                    if token.chars().count() >= vocab.skill_token_min_chars {
                        skills.insert(title_case(token));
                    }
                }
            }
        }

        skills
    }
}

/// Alphabetic characters with an optional trailing period ("J.").
fn is_name_word(word: &str) -> bool {
    let core = word.strip_suffix('.').unwrap_or(word);
    !core.is_empty() && core.chars().all(char::is_alphabetic)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::normalize::normalize;

    const SCENARIO: &str = "John Smith\n\
        Software Engineer\n\
        Contact: john.smith@example.com, (555) 123-4567\n\
        Education: Bachelor of Science in Computer Science\n\
        Skills: Python, Java, SQL";

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extract_email_returns_first_match_verbatim() {
        let text = "Contact me at John.Doe@Email.com or backup@example.org for more information.";
        assert_eq!(extract_email(text).as_deref(), Some("John.Doe@Email.com"));
        assert_eq!(extract_email("no address here"), None);
        assert_eq!(
            extract_email("Write to me at x_y+tag@sub.domain.io."),
            Some("x_y+tag@sub.domain.io".to_string())
        );
    }

    #[test]
    fn extract_phone_canonicalizes_every_supported_format() {
        for input in [
            "(555) 123-4567",
            "555.123.4567",
            "555-123-4567",
            "555 123 4567",
            "5551234567",
            "+1 555-123-4567",
            "+1 (555) 123-4567",
            "1-555-123-4567",
            "+1.555.123.4567",
        ] {
            let text = format!("Phone: {}", input);
            assert_eq!(
                extract_phone(&text).as_deref(),
                Some("(555) 123-4567"),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn extract_phone_uses_first_number_only() {
        let text = "Call me at (555) 123-4567 or 555.987.6543";
        assert_eq!(extract_phone(text).as_deref(), Some("(555) 123-4567"));
        assert_eq!(extract_phone("Call 555-12-34"), None);
    }

    #[test]
    fn extract_name_skips_headers_and_accepts_initials() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract_name("RESUME\nJ. Smith\nEngineer").as_deref(),
            Some("J. Smith")
        );
        assert_eq!(
            extractor.extract_name("Curriculum Vitae\nmaria de la Cruz").as_deref(),
            Some("maria de la Cruz")
        );
    }

    #[test]
    fn extract_name_is_absent_when_no_header_line_qualifies() {
        let extractor = FieldExtractor::new();
        let text =
            "Resume\nEngineer\nApt 4B Main Street\njohn smith\nOne Two Three Four Five\nJane Doe";
        // "Jane Doe" is on line 6, outside the header window; "john smith" has no capital.
        assert_eq!(extractor.extract_name(text), None);
        assert_eq!(extractor.extract_name(""), None);
        assert_eq!(extractor.extract_name("R2 D2\n. Smith"), None);
    }

    #[test]
    fn extract_education_collects_degree_lines_in_window() {
        let extractor = FieldExtractor::new();
        let text = "Jane Doe\nEDUCATION\nState University\nB.S. in Physics, 2015\n\
            Work Experience: master plumber\nM.S. in Physics\nRelevant coursework";
        assert_eq!(
            extractor.extract_education(text),
            vec!["B.S. In Physics, 2015".to_string(), "M.S. In Physics".to_string()]
        );
    }

    #[test]
    fn extract_education_keeps_degree_named_before_colon() {
        let extractor = FieldExtractor::new();
        let text = "Jane Doe\nEducation\nMaster of Science: Data Science\nPhD in Physics: 2019\n\
            B.S.: Computer Science, 2015\nAcademic: Bachelor of Arts";
        assert_eq!(
            extractor.extract_education(text),
            vec![
                "Master Of Science: Data Science",
                "Phd In Physics: 2019",
                "B.S.: Computer Science, 2015",
                "Bachelor Of Arts",
            ]
        );
    }

    #[test]
    fn extract_education_keeps_duplicates() {
        let extractor = FieldExtractor::new();
        let text = "Education\nBachelor of Arts\nBachelor of Arts";
        assert_eq!(extractor.extract_education(text), vec!["Bachelor Of Arts", "Bachelor Of Arts"]);
    }

    #[test]
    fn extract_education_stops_at_window_edge() {
        let extractor = FieldExtractor::new();
        let mut text = String::from("Education\n");
        for i in 0..9 {
            text.push_str(&format!("filler line {}\n", i));
        }
        text.push_str("Master of Science");
        assert!(extractor.extract_education(&text).is_empty());
    }

    #[test]
    fn extract_education_without_keywords_is_empty() {
        let extractor = FieldExtractor::new();
        assert!(extractor.extract_education("Jane Doe\nSenior Engineer\nSkills: Rust").is_empty());
        assert!(extractor.extract_education("").is_empty());
    }

    #[test]
    fn extract_skills_deduplicates_across_case_and_repetition() {
        let extractor = FieldExtractor::new();
        let text = "PYTHON python Python\nSkills\npYtHoN, Kubernetes | Python";
        let skills = extractor.extract_skills(text);
        assert_eq!(skills.iter().filter(|s| s.eq_ignore_ascii_case("python")).count(), 1);
        assert!(skills.contains("Python"));
        assert!(skills.contains("Kubernetes"));
    }

    #[test]
    fn extract_skills_reads_window_after_heading() {
        let extractor = FieldExtractor::new();
        let text = "Technical Skills\nHaskell; Erlang \u{2022} Elixir\nAb, Coq\n\
            Work Experience, Acme\nProlog\nOCaml";
        let skills = extractor.extract_skills(text);
        for expected in ["Haskell", "Erlang", "Elixir", "Coq", "Prolog"] {
            assert!(skills.contains(expected), "missing {} in {:?}", expected, skills);
        }
        // Too short, boundary line, and outside the 4-line window.
        assert!(!skills.contains("Ab"));
        assert!(!skills.contains("Acme"));
        assert!(!skills.contains("Ocaml"));
    }

    #[test]
    fn extract_skills_vocabulary_scan_ignores_position() {
        let extractor = FieldExtractor::new();
        let text = "Built pipelines with Docker and Terraform at the very end.";
        assert_eq!(extractor.extract_skills(text), set(&["Docker", "Terraform"]));
    }

    #[test]
    fn extract_skills_is_order_independent() {
        let extractor = FieldExtractor::new();
        let original = "Used Docker and Git daily\nSkills\nHaskell, Elixir\nErlang | Prolog";
        let permuted = "Used Git and Docker daily\nSkills\nProlog | Erlang\nElixir, Haskell";
        let expected = extractor.extract_skills(original);
        assert_eq!(extractor.extract_skills(permuted), expected);
        for skill in ["Haskell", "Elixir", "Erlang", "Prolog", "Docker", "Git"] {
            assert!(expected.contains(skill), "missing {} in {:?}", skill, expected);
        }
    }

    #[test]
    fn custom_vocabulary_changes_results() {
        let vocabulary = Vocabulary::from_json_str(r#"{"technical_skills": ["zig"]}"#).unwrap();
        let extractor = FieldExtractor::with_vocabulary(vocabulary);
        assert_eq!(extractor.extract_skills("Wrote Zig and Python"), set(&["Zig"]));
    }

    #[test]
    fn scenario_full_record() {
        let extractor = FieldExtractor::new();
        let outcome = extractor.extract("john.pdf", &normalize(SCENARIO));
        let record = outcome.record().expect("record expected");

        assert_eq!(record.file_name, "john.pdf");
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert_eq!(record.email.as_deref(), Some("john.smith@example.com"));
        assert_eq!(record.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(record.education, vec!["Bachelor Of Science In Computer Science"]);
        for skill in ["Python", "Java", "Sql"] {
            assert!(record.skills.contains(skill), "missing {}", skill);
        }
    }

    #[test]
    fn scenario_empty_text_yields_error_record() {
        let extractor = FieldExtractor::new();
        assert_eq!(extractor.extract("empty.pdf", ""), ExtractionOutcome::text_unavailable());
        assert_eq!(extractor.extract("blank.pdf", " \n "), ExtractionOutcome::text_unavailable());
    }

    #[test]
    fn scenario_no_education_keyword() {
        let extractor = FieldExtractor::new();
        let outcome = extractor.extract("x.pdf", "Jane Doe\njane@doe.dev\nSkills: Rust, Go");
        assert!(outcome.record().unwrap().education.is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let extractor = FieldExtractor::new();
        let text = normalize(SCENARIO);
        assert_eq!(extractor.extract("a.pdf", &text), extractor.extract("a.pdf", &text));
    }
}
