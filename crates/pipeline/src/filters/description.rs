//! Filter on the free-text description using a regular expression.

use crate::error::Result;
use records::Property;
use regex::Regex;

/// Keeps listings whose description matches `pattern` anywhere.
///
/// The empty pattern matches every description.
#[derive(Debug, Clone)]
pub struct DescriptionFilter {
    pattern: Regex,
}

impl DescriptionFilter {
    /// Compile `pattern`; an invalid expression is `InvalidPattern`
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Parse `[pattern]`. A missing pattern is the empty pattern.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        Self::new(args.first().map(|s| s.as_ref()).unwrap_or(""))
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.pattern.is_match(&property.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredicateError;
    use crate::filters::test_property;

    #[test]
    fn test_pattern_matches_anywhere() {
        let filter = DescriptionFilter::parse(&["desi.n"]).unwrap();

        let mut property = test_property();
        property.description = "Contemporary design in a growing community.".to_string();
        assert!(filter.matches(&property));

        property.description = "Charming starter home.".to_string();
        assert!(!filter.matches(&property));
    }

    #[test]
    fn test_empty_pattern_matches_all() {
        let empty: [&str; 0] = [];
        let filter = DescriptionFilter::parse(&empty).unwrap();
        assert_eq!(filter.pattern(), "");

        let mut property = test_property();
        property.description = String::new();
        assert!(filter.matches(&property));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = DescriptionFilter::parse(&["(unclosed"]).unwrap_err();
        assert!(matches!(err, PredicateError::InvalidPattern(_)));

        // The regex message lives in the source, not in the top-level text
        assert_eq!(err.to_string(), "invalid pattern");
        assert!(std::error::Error::source(&err).is_some());
    }
}
