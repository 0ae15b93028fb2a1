//! Regular expressions over arbitrary symbol alphabets.
//!
//! An abstract regular expression is a [`Regex`] tree whose literals carry
//! values of any equality-comparable type, such as characters or the edge
//! labels of a graph the application walks. Matching either
//! walks the tree directly ([`Regex::matches`],
//! [`Regex::matches_prefix`]), or goes through an automaton:
//! [`Regex::to_nfa`] translates the tree into an ε-NFA and
//! [`CompiledRegex`] caches the subset-constructed transition table for
//! repeated matching. Both routes produce identical results on every
//! input, in both matching modes.
//!
//! ```rust
//! use abstract_regex::Regex;
//!
//! let ab = Regex::repeat(Regex::concat(Regex::symbol('a'), Regex::symbol('b')));
//! assert_eq!(ab.matches("abab"), Some(4));
//! assert_eq!(ab.matches("aba"), None);
//! assert_eq!(ab.matches_prefix("aba"), Some(2));
//!
//! // Symbols need not be characters.
//! let counted = Regex::concat(Regex::symbol(1), Regex::repeat(Regex::symbol(2)));
//! assert_eq!(counted.matches(&[1, 2, 2][..]), Some(3));
//! assert_eq!(counted.matches(&[2][..]), None);
//! ```

mod compile;
mod input;
mod nfa;
mod pattern;
mod regex;

pub use abstract_regex_automata::{CompiledNfa, Matcher, Mode, Nfa};
pub use compile::CompiledRegex;
pub use input::Symbols;
pub use pattern::PatternError;
pub use regex::Regex;
