// src/extractors/vocabulary.rs

// --- Imports ---
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::utils::error::ConfigError;

/// Built-in vocabulary, shared by every extractor that does not load its own.
pub static DEFAULT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::default);

/// Keyword lists and window sizes driving the field heuristics.
///
/// All terms are matched as plain substrings against lowercased text, so they are stored
/// lowercase. A JSON file may override any subset of fields; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Header lines that are never a candidate's name.
    pub name_headers: Vec<String>,
    /// How many leading lines may hold the name.
    pub name_scan_lines: usize,
    pub name_min_words: usize,
    pub name_max_words: usize,

    /// Any of these marks the start of the education section.
    pub education_keywords: Vec<String>,
    /// Section titles that may prefix an education line as `title: content`.
    pub education_headings: Vec<String>,
    /// A line inside the education window must contain one of these to be reported.
    pub degree_indicators: Vec<String>,
    /// Lines containing these belong to another section.
    pub education_boundaries: Vec<String>,
    /// Window length, anchor line included.
    pub education_window: usize,

    pub skill_section_keywords: Vec<String>,
    pub skill_boundaries: Vec<String>,
    /// Lines inspected after the skills anchor.
    pub skills_window: usize,
    /// Shortest token (in characters) kept from the skills section.
    pub skill_token_min_chars: usize,
    pub technical_skills: Vec<String>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            name_headers: owned(&["resume", "curriculum vitae", "cv"]),
            name_scan_lines: 5,
            name_min_words: 2,
            name_max_words: 4,

            education_keywords: owned(&[
                "education", "academic", "university", "college", "school", "institute",
                "bachelor", "master", "phd", "doctorate", "degree", "diploma",
                "b.s.", "b.a.", "m.s.", "m.a.", "b.tech", "m.tech", "mba",
            ]),
            education_headings: owned(&["education", "academic"]),
            degree_indicators: owned(&[
                "bachelor", "master", "phd", "degree", "b.s.", "b.a.", "m.s.", "m.a.",
            ]),
            education_boundaries: owned(&["experience", "work", "skills"]),
            education_window: 10,

            // "software" is left out on purpose: it shows up in job titles near the top.
            skill_section_keywords: owned(&[
                "skills", "technical skills", "programming", "languages", "technologies",
                "tools", "frameworks", "databases", "certifications", "competencies",
                "expertise", "proficient",
            ]),
            skill_boundaries: owned(&["experience", "education", "work"]),
            skills_window: 4,
            skill_token_min_chars: 3,
            technical_skills: owned(&[
                // Programming languages
                "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby",
                "swift", "kotlin", "scala", "rust", "matlab", "sql",
                // Web
                "html", "css", "react", "angular", "vue", "node.js", "express", "jquery",
                "bootstrap", "sass", "webpack", "babel",
                // Frameworks and libraries
                "django", "flask", "spring", "laravel", "rails", "asp.net", "pandas",
                "numpy", "scikit-learn", "tensorflow", "pytorch", "keras",
                // Databases
                "mysql", "postgresql", "mongodb", "sqlite", "redis", "elasticsearch",
                "oracle", "sql server", "cassandra",
                // Cloud and DevOps
                "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github",
                "gitlab", "ci/cd", "terraform", "ansible",
                // Operating systems
                "linux", "unix", "windows", "macos", "ubuntu", "centos",
                // Other tools
                "jira", "confluence", "slack", "trello", "postman", "swagger",
                // Fields
                "machine learning", "deep learning", "generative ai",
            ]),
        }
    }
}

impl Vocabulary {
    /// Parses a JSON override. Terms are lowercased so hand-written files can use any case.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let vocabulary: Vocabulary = serde_json::from_str(json)?;
        Ok(vocabulary.lowercased())
    }

    /// Loads a JSON override from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(display.clone(), e))?;
        let vocabulary = Self::from_json_str(&json).map_err(|e| ConfigError::Parse(display, e))?;
        tracing::info!(
            "Loaded vocabulary from {} ({} technical skills)",
            path.display(),
            vocabulary.technical_skills.len()
        );
        Ok(vocabulary)
    }

    /// True when `line` (already trimmed) is a generic document header such as "Resume".
    pub fn is_name_header(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        self.name_headers.iter().any(|header| *header == lowered)
    }

    fn lowercased(mut self) -> Self {
        for list in [
            &mut self.name_headers,
            &mut self.education_keywords,
            &mut self.education_headings,
            &mut self.degree_indicators,
            &mut self.education_boundaries,
            &mut self.skill_section_keywords,
            &mut self.skill_boundaries,
            &mut self.technical_skills,
        ] {
            for term in list.iter_mut() {
                *term = term.trim().to_lowercase();
            }
            list.retain(|term| !term.is_empty());
        }
        self
    }
}
