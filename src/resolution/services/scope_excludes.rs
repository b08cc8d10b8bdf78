use crate::shared::Result;
use std::cell::RefCell;

/// Maximum number of exclusion patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclusion pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// ScopeExcludes - Excludes scopes from resolution by name
///
/// Supports wildcard patterns using '*' to match zero or more characters
/// (e.g. "test*" drops every test configuration). Matching is case-sensitive
/// and applied before any tree traversal: an excluded scope's subtree is
/// never visited. Listing the same scope twice is equivalent to listing it
/// once.
#[derive(Debug, Default)]
pub struct ScopeExcludes {
    patterns: Vec<ExcludePattern>,
}

impl ScopeExcludes {
    /// Creates a ScopeExcludes from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many scope exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let mut compiled = Vec::new();
        for pattern in patterns {
            // Duplicate patterns are harmless but pointless; keep one
            if compiled
                .iter()
                .any(|existing: &ExcludePattern| existing.original == pattern)
            {
                continue;
            }
            compiled.push(ExcludePattern::new(pattern)?);
        }

        Ok(Self { patterns: compiled })
    }

    /// True when the scope name matches any exclusion pattern.
    pub fn is_excluded(&self, scope_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(scope_name))
    }

    /// Patterns that matched no scope so far.
    ///
    /// Call after graph building to warn about patterns with no effect.
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !*p.matched.borrow())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// One exclusion pattern with its compiled matcher
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: RefCell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: RefCell::new(false),
        })
    }

    fn matches(&self, scope_name: &str) -> bool {
        let is_match = self.matcher.matches(scope_name);
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "testRuntimeClasspath"
    Exact(String),
    /// Prefix wildcard: "*Classpath"
    Prefix(String),
    /// Suffix wildcard: "test*"
    Suffix(String),
    /// Contains wildcard: "*test*"
    Contains(String),
    /// Multiple wildcards: "test*Runtime*"
    Multiple(Vec<String>),
}

impl PatternMatcher {
    fn matches(&self, scope_name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => scope_name == s,
            PatternMatcher::Prefix(suffix) => scope_name.ends_with(suffix),
            PatternMatcher::Suffix(prefix) => scope_name.starts_with(prefix),
            PatternMatcher::Contains(middle) => scope_name.contains(middle),
            PatternMatcher::Multiple(parts) => {
                // All parts must appear in order
                let mut current_pos = 0;
                for part in parts {
                    if let Some(pos) = scope_name[current_pos..].find(part) {
                        current_pos += pos + part.len();
                    } else {
                        return false;
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Scope exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Scope exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Scope exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Scope exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '*'
}

/// Compiles a pattern string into an optimized matcher
fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 => {
            if let Some(stripped) = pattern.strip_prefix('*') {
                PatternMatcher::Prefix(stripped.to_string())
            } else if let Some(stripped) = pattern.strip_suffix('*') {
                PatternMatcher::Suffix(stripped.to_string())
            } else {
                // Wildcard in the middle: fall back to ordered-parts matching
                PatternMatcher::Multiple(
                    pattern
                        .split('*')
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect(),
                )
            }
        }
        2 if pattern.starts_with('*') && pattern.ends_with('*') => {
            PatternMatcher::Contains(pattern.trim_matches('*').to_string())
        }
        _ => PatternMatcher::Multiple(
            pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        ),
    }
}
