//! CSS selector matching for the virtual document.
//!
//! Covers what the page queries: type, `#id`, `.class`, `[attr]` and
//! `[attr=value]` compounds joined by the descendant combinator, and
//! comma-separated groups. Anything else is rejected as invalid.

use crate::document::VirtualElement;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector {0:?}")]
pub struct SelectorError(pub String);

/// A parsed selector group (`a, b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<Complex>);

/// Compounds from outermost ancestor to subject.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex(Vec<Compound>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl SelectorList {
    /// # Errors
    ///
    /// Returns [`SelectorError`] if `raw` uses syntax outside the supported
    /// subset.
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        let invalid = || SelectorError(raw.to_string());
        let complexes = raw
            .split(',')
            .map(|group| {
                let compounds = group
                    .split_whitespace()
                    .map(parse_compound)
                    .collect::<Option<Vec<_>>>()?;
                (!compounds.is_empty()).then_some(Complex(compounds))
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        Ok(Self(complexes))
    }

    #[must_use]
    pub fn matches(&self, element: &VirtualElement) -> bool {
        self.0.iter().any(|complex| complex.matches(element))
    }
}

impl Complex {
    fn matches(&self, element: &VirtualElement) -> bool {
        let Some((subject, mut ancestors)) = self.0.split_last() else {
            return false;
        };
        if !subject.matches(element) {
            return false;
        }
        // Descendant-only chains can be matched greedily, nearest ancestor first.
        let mut current = element.parent();
        while let Some((wanted, rest)) = ancestors.split_last() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = candidate.parent();
                if wanted.matches(&candidate) {
                    break;
                }
            }
            ancestors = rest;
        }
        true
    }
}

impl Compound {
    fn matches(&self, element: &VirtualElement) -> bool {
        self.tag.as_deref().is_none_or(|tag| element.tag() == tag)
            && self
                .id
                .as_deref()
                .is_none_or(|id| element.attribute_value("id").as_deref() == Some(id))
            && self.classes.iter().all(|class| element.has_class_name(class))
            && self.attributes.iter().all(|(name, expected)| {
                let actual = element.attribute_value(name);
                match expected {
                    Some(value) => actual.as_deref() == Some(value.as_str()),
                    None => actual.is_some(),
                }
            })
    }
}

fn parse_compound(raw: &str) -> Option<Compound> {
    let mut compound = Compound::default();

    let tag_end = raw.find(['#', '.', '[']).unwrap_or(raw.len());
    let tag = &raw[..tag_end];
    if !tag.is_empty() && tag != "*" {
        if !is_ident(tag) {
            return None;
        }
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    let mut rest = &raw[tag_end..];
    while let Some(marker) = rest.chars().next() {
        match marker {
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                let name = &body[..end];
                if !is_ident(name) {
                    return None;
                }
                if marker == '#' {
                    compound.id = Some(name.to_string());
                } else {
                    compound.classes.push(name.to_string());
                }
                rest = &body[end..];
            }
            '[' => {
                let close = rest.find(']')?;
                let inner = &rest[1..close];
                let (name, value) = match inner.split_once('=') {
                    Some((name, value)) => (
                        name.trim(),
                        Some(value.trim().trim_matches(['"', '\'']).to_string()),
                    ),
                    None => (inner.trim(), None),
                };
                if !is_ident(name) {
                    return None;
                }
                compound.attributes.push((name.to_string(), value));
                rest = &rest[close + 1..];
            }
            _ => return None,
        }
    }
    Some(compound)
}

fn is_ident(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
