//! Positional `{0}`-style placeholder substitution.
//!
//! `{{` and `}}` escape literal braces. Every placeholder index must have an
//! argument and every argument must be referenced; anything else is a
//! [`FormatError`].

use std::collections::BTreeSet;
use std::fmt::Display;

use thiserror::Error;

/// Failure to apply arguments to a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A placeholder refers past the end of the argument list.
    #[error("placeholder {{{index}}} has no argument ({given} given)")]
    MissingArgument {
        /// Placeholder index.
        index: usize,
        /// Number of arguments supplied.
        given: usize,
    },

    /// More arguments were supplied than the template uses.
    #[error("{given} arguments given but the template only uses {used}")]
    UnusedArguments {
        /// Number of arguments supplied.
        given: usize,
        /// Number of distinct placeholders in the template.
        used: usize,
    },

    /// A `{` or `}` without its partner.
    #[error("unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),

    /// Placeholder content that is not a plain index.
    #[error("invalid placeholder '{{{0}}}'")]
    InvalidPlaceholder(String),
}

/// Substitute `args` into `template`.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut used = BTreeSet::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, c)| c == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut token = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    token.push(c);
                }
                if !closed {
                    return Err(FormatError::UnbalancedBrace(pos));
                }

                let index: usize = token
                    .trim()
                    .parse()
                    .map_err(|_| FormatError::InvalidPlaceholder(token.clone()))?;
                let arg = args
                    .get(index)
                    .ok_or(FormatError::MissingArgument { index, given: args.len() })?;
                used.insert(index);
                out.push_str(&arg.to_string());
            },
            '}' => {
                if chars.next_if(|&(_, c)| c == '}').is_some() {
                    out.push('}');
                } else {
                    return Err(FormatError::UnbalancedBrace(pos));
                }
            },
            _ => out.push(ch),
        }
    }

    if used.len() != args.len() {
        return Err(FormatError::UnusedArguments { given: args.len(), used: used.len() });
    }

    Ok(out)
}
