//! Text and size checks
//!
//! Lengths count characters for strings, items for arrays and keys for
//! objects.

use crate::foundation::{render_value, value_length};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

/// Most compiled patterns kept by [`Matches`].
const MAX_CACHED_PATTERNS: usize = 100;

static PATTERNS: LazyLock<Mutex<HashMap<String, Regex>>> = LazyLock::new(Default::default);

crate::check! {
    /// Passes when the length is at least the first argument.
    pub MinLength;
    evaluate(value, args) {
        match (value_length(value), limit(args)) {
            (Some(len), Some(min)) => len >= min,
            _ => false,
        }
    }
    describe(args) { format!("a value of length at least {}", render_limit(args)) }
}

crate::check! {
    /// Passes when the length is at most the first argument.
    pub MaxLength;
    evaluate(value, args) {
        match (value_length(value), limit(args)) {
            (Some(len), Some(max)) => len <= max,
            _ => false,
        }
    }
    describe(args) { format!("a value of length at most {}", render_limit(args)) }
}

crate::check! {
    /// Passes for strings matching the regular expression in the first argument.
    ///
    /// An invalid pattern never matches. Compiled patterns are shared
    /// process-wide, up to a hundred of them.
    pub Matches;
    evaluate(value, args) {
        let (Some(text), Some(pattern)) = (value.as_str(), args.first().and_then(Value::as_str)) else {
            return false;
        };
        match compiled(pattern) {
            Ok(regex) => regex.is_match(text),
            Err(error) => {
                tracing::warn!(pattern, %error, "invalid pattern in `matches` check");
                false
            }
        }
    }
    describe(args) {
        match args.first() {
            Some(Value::String(pattern)) => format!("a string matching /{pattern}/"),
            Some(other) => format!("a string matching {}", render_value(other)),
            None => "a string matching nothing".to_owned(),
        }
    }
}

/// Compiles `pattern`, reusing an earlier compilation when cached.
fn compiled(pattern: &str) -> Result<Regex, regex::Error> {
    let mut cache = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern)?;
    if cache.len() >= MAX_CACHED_PATTERNS
        && let Some(evicted) = cache.keys().next().cloned()
    {
        cache.remove(&evicted);
    }
    cache.insert(pattern.to_owned(), regex.clone());
    Ok(regex)
}

fn limit(args: &[Value]) -> Option<usize> {
    args.first()
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

fn render_limit(args: &[Value]) -> String {
    args.first().map_or_else(|| "null".to_owned(), render_value)
}
