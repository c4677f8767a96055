//! Tag query grammar and parser
//!
//! The textual protocol is deliberately small: a query is either a
//! single `Name=Value` term, or exactly two terms joined by one of the
//! case-sensitive keywords ` AND ` / ` OR `. No parentheses, no
//! precedence.
//!
//! Queries parse into a small expression tree that is evaluated
//! recursively, so deeper combinations are representable; the parser
//! itself accepts only the documented two-term grammar. Input with
//! more than two terms is rejected outright rather than partially
//! evaluated.

use crate::model::Tag;

use super::error::QueryError;

/// A parsed tag query, evaluated against a picture's tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagQuery {
    /// One `Name=Value` term in canonical form
    Term(String),
    /// Both sub-queries must match
    And(Box<TagQuery>, Box<TagQuery>),
    /// At least one sub-query must match
    Or(Box<TagQuery>, Box<TagQuery>),
}

impl TagQuery {
    /// Parse a raw query string
    ///
    /// # Examples
    /// ```
    /// use shoebox::query::TagQuery;
    ///
    /// let q = TagQuery::parse("Color=Red").unwrap();
    /// let q = TagQuery::parse("Color=Red AND Size=Large").unwrap();
    /// assert!(TagQuery::parse("").is_err());
    /// assert!(TagQuery::parse("a=b AND c=d AND e=f").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `QueryError::EmptyQuery` for blank input and
    /// `QueryError::MalformedQuery` for anything outside the grammar.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let ands = input.matches(" AND ").count();
        let ors = input.matches(" OR ").count();

        match (ands, ors) {
            (0, 0) => Ok(Self::Term(parse_term(input, raw)?)),
            (1, 0) => {
                let (left, right) = split_operator(input, " AND ", raw)?;
                Ok(Self::And(
                    Box::new(Self::Term(left)),
                    Box::new(Self::Term(right)),
                ))
            }
            (0, 1) => {
                let (left, right) = split_operator(input, " OR ", raw)?;
                Ok(Self::Or(
                    Box::new(Self::Term(left)),
                    Box::new(Self::Term(right)),
                ))
            }
            // Three or more terms, or mixed operators
            _ => Err(QueryError::MalformedQuery(raw.to_string())),
        }
    }

    /// Whether a picture with these tags satisfies the query
    ///
    /// A term matches when its canonical string equals any tag's
    /// canonical string.
    #[must_use]
    pub fn matches(&self, tags: &[Tag]) -> bool {
        match self {
            Self::Term(canonical) => tags.iter().any(|t| t.to_string() == *canonical),
            Self::And(left, right) => left.matches(tags) && right.matches(tags),
            Self::Or(left, right) => left.matches(tags) || right.matches(tags),
        }
    }
}

fn split_operator(
    input: &str,
    operator: &str,
    raw: &str,
) -> Result<(String, String), QueryError> {
    let (left, right) = input
        .split_once(operator)
        .ok_or_else(|| QueryError::MalformedQuery(raw.to_string()))?;
    Ok((parse_term(left, raw)?, parse_term(right, raw)?))
}

fn parse_term(term: &str, raw: &str) -> Result<String, QueryError> {
    let term = term.trim();
    match term.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => {
            Ok(term.to_string())
        }
        _ => Err(QueryError::MalformedQuery(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_term() {
        let query = TagQuery::parse("Color=Red").unwrap();
        assert_eq!(query, TagQuery::Term("Color=Red".into()));
    }

    #[test]
    fn test_parse_and() {
        let query = TagQuery::parse("Color=Red AND Size=Large").unwrap();
        assert_eq!(
            query,
            TagQuery::And(
                Box::new(TagQuery::Term("Color=Red".into())),
                Box::new(TagQuery::Term("Size=Large".into())),
            )
        );
    }

    #[test]
    fn test_parse_or() {
        let query = TagQuery::parse("Color=Red OR Size=Large").unwrap();
        assert_eq!(
            query,
            TagQuery::Or(
                Box::new(TagQuery::Term("Color=Red".into())),
                Box::new(TagQuery::Term("Size=Large".into())),
            )
        );
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(matches!(TagQuery::parse(""), Err(QueryError::EmptyQuery)));
        assert!(matches!(
            TagQuery::parse("   "),
            Err(QueryError::EmptyQuery)
        ));
    }

    #[test]
    fn test_parse_rejects_three_terms() {
        let result = TagQuery::parse("a=b AND c=d AND e=f");
        assert!(matches!(result, Err(QueryError::MalformedQuery(_))));

        let result = TagQuery::parse("a=b AND c=d OR e=f");
        assert!(matches!(result, Err(QueryError::MalformedQuery(_))));
    }

    #[test]
    fn test_parse_rejects_bad_terms() {
        assert!(TagQuery::parse("ColorRed").is_err());
        assert!(TagQuery::parse("=Red").is_err());
        assert!(TagQuery::parse("Color=").is_err());
        assert!(TagQuery::parse("Color=Red AND Size").is_err());
    }

    #[test]
    fn test_operator_keyword_is_case_sensitive() {
        // Lowercase "and" is not an operator, so this is one term
        // containing whitespace and fails term parsing on the left side
        assert!(TagQuery::parse("Color=Red and Size=Large").is_ok());
    }

    #[test]
    fn test_matches_single_term() {
        let tags = vec![Tag::new("Color", "Red").unwrap()];
        assert!(TagQuery::parse("Color=Red").unwrap().matches(&tags));
        assert!(!TagQuery::parse("Color=Blue").unwrap().matches(&tags));
    }

    #[test]
    fn test_matches_and_or() {
        let tags = vec![
            Tag::new("Color", "Red").unwrap(),
            Tag::new("Size", "Large").unwrap(),
        ];
        let red_only = vec![Tag::new("Color", "Red").unwrap()];

        let and = TagQuery::parse("Color=Red AND Size=Large").unwrap();
        assert!(and.matches(&tags));
        assert!(!and.matches(&red_only));

        let or = TagQuery::parse("Color=Red OR Size=Large").unwrap();
        assert!(or.matches(&tags));
        assert!(or.matches(&red_only));
        assert!(!or.matches(&[]));
    }
}
