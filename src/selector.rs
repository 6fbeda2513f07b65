// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label selector parsing and validation.
//!
//! kube-rs forwards `labelSelector` verbatim, so selectors are checked here
//! before any request leaves the process. The parsed form renders back to a
//! canonical string which is what gets sent to the API server.

use crate::constants::selector::{MAX_NAME_LEN, MAX_PREFIX_LEN};
use crate::error::{ListerError, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const RESERVED_WORDS: [&str; 2] = ["in", "notin"];

/// A single label requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Equals { key: String, value: String },
    NotEquals { key: String, value: String },
    In { key: String, values: BTreeSet<String> },
    NotIn { key: String, values: BTreeSet<String> },
    Exists { key: String },
    DoesNotExist { key: String },
    GreaterThan { key: String, value: i64 },
    LessThan { key: String, value: i64 },
}

impl Requirement {
    pub fn key(&self) -> &str {
        match self {
            Requirement::Equals { key, .. }
            | Requirement::NotEquals { key, .. }
            | Requirement::In { key, .. }
            | Requirement::NotIn { key, .. }
            | Requirement::Exists { key }
            | Requirement::DoesNotExist { key }
            | Requirement::GreaterThan { key, .. }
            | Requirement::LessThan { key, .. } => key,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Equals { key, value } => write!(f, "{}={}", key, value),
            Requirement::NotEquals { key, value } => write!(f, "{}!={}", key, value),
            Requirement::In { key, values } => write!(f, "{} in ({})", key, join(values)),
            Requirement::NotIn { key, values } => write!(f, "{} notin ({})", key, join(values)),
            Requirement::Exists { key } => write!(f, "{}", key),
            Requirement::DoesNotExist { key } => write!(f, "!{}", key),
            Requirement::GreaterThan { key, value } => write!(f, "{}>{}", key, value),
            Requirement::LessThan { key, value } => write!(f, "{}<{}", key, value),
        }
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// A parsed label selector. The empty selector matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    requirements: Vec<Requirement>,
}

impl LabelSelector {
    /// Parse and validate a selector string such as `app=web,tier in (db,cache),!canary`
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let requirements = split_requirements(input)?
            .into_iter()
            .map(|part| parse_requirement(input, part.trim()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { requirements })
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}

impl FromStr for LabelSelector {
    type Err = ListerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, requirement) in self.requirements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", requirement)?;
        }
        Ok(())
    }
}

fn invalid(input: &str, reason: impl fmt::Display) -> ListerError {
    ListerError::InvalidSelector(format!("{:?}: {}", input, reason))
}

/// Split on commas that are not inside a value set
fn split_requirements(input: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| invalid(input, "unbalanced ')'"))?;
            }
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(invalid(input, "unbalanced '('"));
    }
    parts.push(&input[start..]);
    Ok(parts)
}

fn parse_requirement(input: &str, part: &str) -> Result<Requirement> {
    if part.is_empty() {
        return Err(invalid(input, "empty requirement"));
    }

    if let Some(key) = part.strip_prefix('!') {
        let key = checked_key(input, key.trim())?;
        return Ok(Requirement::DoesNotExist { key });
    }

    if let Some((key, value)) = part.split_once("!=") {
        return Ok(Requirement::NotEquals {
            key: checked_key(input, key.trim())?,
            value: checked_value(input, value.trim())?,
        });
    }

    if let Some((key, value)) = part.split_once("==").or_else(|| part.split_once('=')) {
        return Ok(Requirement::Equals {
            key: checked_key(input, key.trim())?,
            value: checked_value(input, value.trim())?,
        });
    }

    if let Some(open) = part.find('(') {
        return parse_set_requirement(input, &part[..open], &part[open..]);
    }

    if let Some((key, value)) = part.split_once('>') {
        return Ok(Requirement::GreaterThan {
            key: checked_key(input, key.trim())?,
            value: checked_integer(input, value.trim())?,
        });
    }

    if let Some((key, value)) = part.split_once('<') {
        return Ok(Requirement::LessThan {
            key: checked_key(input, key.trim())?,
            value: checked_integer(input, value.trim())?,
        });
    }

    Ok(Requirement::Exists {
        key: checked_key(input, part)?,
    })
}

fn parse_set_requirement(input: &str, head: &str, set: &str) -> Result<Requirement> {
    let mut tokens = head.split_whitespace();
    let (Some(key), Some(operator), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid(
            input,
            format!("expected '<key> in|notin (...)', got {:?}", head.trim()),
        ));
    };
    let key = checked_key(input, key)?;

    let Some(inner) = set.trim_end().strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return Err(invalid(input, format!("malformed value set {:?}", set)));
    };
    if inner.contains(['(', ')']) {
        return Err(invalid(input, "nested parentheses"));
    }

    // Empty slots, including `()`, stand for the empty value
    let values = inner
        .split(',')
        .map(|v| checked_value(input, v.trim()))
        .collect::<Result<BTreeSet<_>>>()?;

    match operator {
        "in" => Ok(Requirement::In { key, values }),
        "notin" => Ok(Requirement::NotIn { key, values }),
        other => Err(invalid(input, format!("unknown operator {:?}", other))),
    }
}

fn checked_key(input: &str, key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(invalid(input, "missing key"));
    }
    if RESERVED_WORDS.contains(&key) {
        return Err(invalid(input, format!("{:?} is a reserved word", key)));
    }

    let name = match key.split_once('/') {
        Some((prefix, name)) => {
            if !is_dns_subdomain(prefix) {
                return Err(invalid(input, format!("invalid key prefix {:?}", prefix)));
            }
            name
        }
        None => key,
    };

    if !is_label_name(name) {
        return Err(invalid(input, format!("invalid key {:?}", key)));
    }
    Ok(key.to_string())
}

fn checked_integer(input: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| invalid(input, format!("expected an integer, got {:?}", value)))
}

fn checked_value(input: &str, value: &str) -> Result<String> {
    if !value.is_empty() && !is_label_name(value) {
        return Err(invalid(input, format!("invalid value {:?}", value)));
    }
    Ok(value.to_string())
}

/// 1-63 chars of `[A-Za-z0-9_.-]`, alphanumeric at both ends
fn is_label_name(s: &str) -> bool {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_NAME_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        }
        _ => false,
    }
}

fn is_dns_subdomain(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_PREFIX_LEN
        && s.split('.').all(|label| {
            let bytes = label.as_bytes();
            match (bytes.first(), bytes.last()) {
                (Some(first), Some(last)) => {
                    bytes.len() <= MAX_NAME_LEN
                        && is_lower_alnum(*first)
                        && is_lower_alnum(*last)
                        && bytes.iter().all(|b| is_lower_alnum(*b) || *b == b'-')
                }
                _ => false,
            }
        })
}

fn is_lower_alnum(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}
