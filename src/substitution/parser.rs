//! Substitution parser

use crate::{
    error::{LaunchError, Result},
    substitution::types::Substitution,
};
use lru::LruCache;
use std::{cell::RefCell, num::NonZeroUsize};

// Thread-local LRU cache for substitution parsing.
//
// Caches parsed AST structures, NOT resolved values. Parsing is context
// independent, so the same input always produces the same AST; resolution
// happens separately with the current context.
const SUBSTITUTION_CACHE_SIZE: usize = 256;

thread_local! {
    static PARSE_CACHE: RefCell<LruCache<String, Vec<Substitution>>> =
        RefCell::new(LruCache::new(NonZeroUsize::new(SUBSTITUTION_CACHE_SIZE).unwrap()));
}

/// Parse a substitution string like "$(var x)" or "text $(env Y) more".
///
/// Uses a thread-local LRU cache to avoid re-parsing identical strings.
pub fn parse_substitutions(input: &str) -> Result<Vec<Substitution>> {
    let cached = PARSE_CACHE.with(|cache| cache.borrow_mut().get(input).cloned());
    if let Some(cached) = cached {
        log::trace!("Substitution parse cache hit: {}", input);
        return Ok(cached);
    }

    log::trace!("Substitution parse cache miss: {}", input);
    let result = parse_substitutions_uncached(input)?;

    PARSE_CACHE.with(|cache| {
        cache.borrow_mut().put(input.to_string(), result.clone());
    });

    Ok(result)
}

fn parse_substitutions_uncached(input: &str) -> Result<Vec<Substitution>> {
    let mut result = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut last_pos = 0;

    while let Some((i, ch)) = chars.next() {
        if ch == '$' {
            if let Some((_, '(')) = chars.peek() {
                // Add any text before this substitution
                if i > last_pos {
                    result.push(Substitution::Text(input[last_pos..i].to_string()));
                }

                // Skip the '('
                chars.next();

                // Find matching ')' by counting parentheses
                let sub_start = i + 2;
                let mut depth = 1;
                let mut sub_end = sub_start;

                for (pos, c) in chars.by_ref() {
                    if c == '(' {
                        depth += 1;
                    } else if c == ')' {
                        depth -= 1;
                        if depth == 0 {
                            sub_end = pos;
                            break;
                        }
                    }
                }

                if depth != 0 {
                    return Err(LaunchError::InvalidSubstitution(
                        "Unmatched parentheses in substitution".to_string(),
                    ));
                }

                let content = &input[sub_start..sub_end];
                result.push(parse_substitution_content(content)?);

                last_pos = sub_end + 1;
            }
        }
    }

    // Add any remaining text
    if last_pos < input.len() {
        result.push(Substitution::Text(input[last_pos..].to_string()));
    }

    // If no substitutions found, treat entire input as text.
    // An empty input stays a single empty Text so resolution yields "".
    if result.is_empty() {
        result.push(Substitution::Text(input.to_string()));
    }

    Ok(result)
}

/// Parse the content inside a substitution $(...). Arguments are parsed
/// recursively, so lookup names may themselves contain substitutions.
fn parse_substitution_content(content: &str) -> Result<Substitution> {
    let trimmed = content.trim();
    let (sub_type, args) = match trimmed.split_once(' ') {
        Some((t, a)) => (t, Some(a.trim())),
        None => (trimmed, None),
    };
    let args = args.filter(|a| !a.is_empty());

    match sub_type {
        "var" => {
            let name = args.ok_or_else(|| {
                LaunchError::InvalidSubstitution("$(var) requires a name".to_string())
            })?;
            Ok(Substitution::LaunchConfiguration(
                parse_substitutions_uncached(name)?,
            ))
        }
        "env" => {
            let args = args.ok_or_else(|| {
                LaunchError::InvalidSubstitution("$(env) requires a variable name".to_string())
            })?;
            let (name, default) = split_env_args(args);
            Ok(Substitution::EnvironmentVariable {
                name: parse_substitutions_uncached(name)?,
                default: default.map(parse_substitutions_uncached).transpose()?,
            })
        }
        "" => Err(LaunchError::InvalidSubstitution(
            "Empty substitution".to_string(),
        )),
        other => Err(LaunchError::InvalidSubstitution(format!(
            "Unknown substitution type: {}",
            other
        ))),
    }
}

/// Split "$(env NAME default)" arguments at the first space outside any
/// nested substitution, so a nested lookup in the name is not cut in half
fn split_env_args(args: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (i, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 => {
                return (&args[..i], Some(args[i..].trim_start()));
            }
            _ => {}
        }
    }
    (args, None)
}
