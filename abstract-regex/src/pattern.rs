//! Best-effort rendering as conventional regular-expression text.

use thiserror::Error;

use crate::regex::Regex;

/// Failure to render an expression as conventional pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A literal's text is empty. Conventional syntax has no way to write
    /// a single symbol carrying no text: `()` would match the empty
    /// string, which means something else entirely.
    #[error("literal symbols must have non-empty text")]
    EmptySymbol,
}

impl<L: AsRef<str>> Regex<L> {
    /// Render as a conventional, fully parenthesized pattern string.
    ///
    /// Symbol text is escaped, so symbols like `"a.b"` survive the trip.
    /// The result is best-effort: a symbol is written as one parenthesized
    /// group, which is only faithful when every symbol's text is a single
    /// character of the strings the pattern will be applied to.
    /// [`Regex::EmptySet`] is written as the character class `[^\w\W]`,
    /// which matches nothing.
    ///
    /// ```rust
    /// use abstract_regex::Regex;
    ///
    /// let regex = Regex::repeat(Regex::or(
    ///     Regex::concat(Regex::symbol("a"), Regex::symbol("b")),
    ///     Regex::empty_string(),
    /// ));
    /// assert_eq!(regex.to_pattern().unwrap(), "((((a)(b))|)*)");
    /// ```
    pub fn to_pattern(&self) -> Result<String, PatternError> {
        Ok(match self {
            Regex::EmptySet => r"[^\w\W]".to_string(),
            Regex::EmptyString => String::new(),
            Regex::Symbol(symbol) => {
                let text: &str = (**symbol).as_ref();
                if text.is_empty() {
                    return Err(PatternError::EmptySymbol);
                }
                format!("({})", escape(text))
            }
            Regex::Concat(left, right) => {
                format!("({}{})", left.to_pattern()?, right.to_pattern()?)
            }
            Regex::Or(left, right) => {
                format!("({}|{})", left.to_pattern()?, right.to_pattern()?)
            }
            Regex::Repeat(inner) => format!("({}*)", inner.to_pattern()?),
        })
    }
}

/// Backslash-escape everything that could read as pattern syntax.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() && !c.is_ascii_alphanumeric() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn sym(text: &str) -> Rc<Regex<&str>> {
        Regex::symbol(text)
    }

    #[test]
    fn renders_the_fully_parenthesized_shape() {
        let regex = Regex::repeat(Regex::or(
            Regex::concat(sym("a"), sym("b")),
            Regex::empty_string(),
        ));
        assert_eq!(regex.to_pattern().unwrap(), "((((a)(b))|)*)");
    }

    #[test]
    fn empty_set_renders_as_a_contradiction_class() {
        let regex = Regex::repeat(Regex::or(
            Regex::concat(sym("a"), Regex::concat(sym("b"), Regex::empty_set())),
            Regex::empty_string(),
        ));
        assert_eq!(regex.to_pattern().unwrap(), r"((((a)((b)[^\w\W]))|)*)");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(sym("a.b").to_pattern().unwrap(), r"(a\.b)");
        assert_eq!(sym("(").to_pattern().unwrap(), r"(\()");
        assert_eq!(sym("xyz").to_pattern().unwrap(), "(xyz)");
    }

    #[test]
    fn empty_symbol_text_is_refused() {
        assert_eq!(sym("").to_pattern(), Err(PatternError::EmptySymbol));
        let buried = Regex::concat(sym("a"), Regex::repeat(sym("")));
        assert_eq!(buried.to_pattern(), Err(PatternError::EmptySymbol));
    }

    #[test]
    fn owned_string_symbols_work_too() {
        let regex = Regex::or(Regex::symbol(String::from("a")), Regex::empty_string());
        assert_eq!(regex.to_pattern().unwrap(), "((a)|)");
    }
}
