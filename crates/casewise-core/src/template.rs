#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Positional format templates for case labels.
//!
//! A template is a string with `{}` placeholders consumed in the case's
//! value order, with `{{` and `}}` escaping literal braces. Parsing
//! happens once at finalization, before any case executes, so a template
//! that disagrees with the case arity fails fast.

use crate::{Error, Result};

/// One parsed chunk of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder,
}

/// A parsed format template with a fixed placeholder count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<Segment>,
    placeholder_count: usize,
}

impl FormatTemplate {
    /// Parses `raw`, requiring exactly `expected_arity` placeholders.
    ///
    /// # Errors
    ///
    /// Returns `TemplateParse` for an unmatched brace and `ArityMismatch`
    /// when the placeholder count differs from `expected_arity`.
    pub fn parse(raw: &str, expected_arity: usize) -> Result<Self> {
        let template = Self::parse_unchecked(raw)?;
        if template.placeholder_count == expected_arity {
            Ok(template)
        } else {
            Err(Error::arity_mismatch(
                expected_arity,
                template.placeholder_count,
            ))
        }
    }

    /// Parses `raw` without constraining the placeholder count.
    fn parse_unchecked(raw: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut placeholder_count = 0;
        let mut chars = raw.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '{' => match chars.peek() {
                    Some('{') => {
                        chars.next();
                        literal.push('{');
                    }
                    Some('}') => {
                        chars.next();
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Placeholder);
                        placeholder_count += 1;
                    }
                    _ => {
                        return Err(Error::template_parse(format!(
                            "unmatched '{{' in template '{raw}'"
                        )))
                    }
                },
                '}' => match chars.peek() {
                    Some('}') => {
                        chars.next();
                        literal.push('}');
                    }
                    _ => {
                        return Err(Error::template_parse(format!(
                            "unmatched '}}' in template '{raw}'"
                        )))
                    }
                },
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            segments,
            placeholder_count,
        })
    }

    /// Number of `{}` placeholders in the template.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Renders a label, substituting `values` in positional order.
    ///
    /// Callers hold the invariant `values.len() == placeholder_count`;
    /// surplus placeholders render as empty if it is ever broken.
    #[must_use]
    pub fn render(&self, values: &[String]) -> String {
        let mut positional = values.iter();
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Placeholder => positional.next().map_or("", String::as_str),
            })
            .collect()
    }
}
