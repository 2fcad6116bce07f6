//! # HTTP Verbs
//!
//! The closed set of HTTP verbs a contract document may declare beneath a
//! resource path, and the unordered [`VerbSet`] collected per path.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuardError;

/// A recognized HTTP verb token.
///
/// Parsing is case-insensitive; the canonical rendering is lowercase,
/// matching how verbs are keyed in OpenAPI documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl Verb {
    /// All recognized verbs in canonical order.
    pub fn all() -> &'static [Verb] {
        &[
            Self::Get,
            Self::Post,
            Self::Put,
            Self::Patch,
            Self::Delete,
            Self::Options,
            Self::Head,
        ]
    }

    /// Lowercase token as it appears in a contract document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
        }
    }

    /// Uppercase method name used in diagnostics (`POST`).
    pub fn as_upper(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GuardError::UnknownVerb(s.to_string()))
    }
}

impl TryFrom<String> for Verb {
    type Error = GuardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Verb> for String {
    fn from(verb: Verb) -> Self {
        verb.as_str().to_string()
    }
}

/// Unordered set of verbs declared under one resource path.
///
/// Backed by a `BTreeSet` so iteration and serialized output are stable;
/// equality is plain set equality regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerbSet(BTreeSet<Verb>);

impl VerbSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a verb. Returns `false` if it was already present.
    pub fn insert(&mut self, verb: Verb) -> bool {
        self.0.insert(verb)
    }

    pub fn contains(&self, verb: Verb) -> bool {
        self.0.contains(&verb)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Verb> + '_ {
        self.0.iter().copied()
    }

    /// Merge every verb of `other` into this set.
    pub fn extend_from(&mut self, other: &VerbSet) {
        self.0.extend(other.iter());
    }
}

impl FromIterator<Verb> for VerbSet {
    fn from_iter<I: IntoIterator<Item = Verb>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for VerbSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().map(|v| v.as_str()).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Patch".parse::<Verb>().unwrap(), Verb::Patch);
        assert_eq!("options".parse::<Verb>().unwrap(), Verb::Options);
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for token in ["trace", "connect", "", "gett", " get"] {
            assert!(
                matches!(token.parse::<Verb>(), Err(GuardError::UnknownVerb(_))),
                "expected {token:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_all_verbs_round_trip_through_token() {
        assert_eq!(Verb::all().len(), 7);
        for verb in Verb::all() {
            assert_eq!(verb.as_str().parse::<Verb>().unwrap(), *verb);
            assert_eq!(verb.as_upper().to_lowercase(), verb.as_str());
        }
    }

    #[test]
    fn test_deserialize_accepts_any_case() {
        let verbs: Vec<Verb> = serde_json::from_str(r#"["GET","Post","delete"]"#).unwrap();
        assert_eq!(verbs, vec![Verb::Get, Verb::Post, Verb::Delete]);
        assert_eq!(serde_json::to_string(&Verb::Head).unwrap(), r#""head""#);
    }

    #[test]
    fn test_verb_set_ignores_insertion_order() {
        let a: VerbSet = [Verb::Get, Verb::Post].into_iter().collect();
        let b: VerbSet = [Verb::Post, Verb::Get].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_verb_set_dedups() {
        let mut set = VerbSet::new();
        assert!(set.insert(Verb::Get));
        assert!(!set.insert(Verb::Get));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_verb_set_serializes_as_lowercase_list() {
        let set: VerbSet = [Verb::Post, Verb::Get].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["get","post"]"#);
        assert_eq!(set.to_string(), "[get, post]");
    }
}
