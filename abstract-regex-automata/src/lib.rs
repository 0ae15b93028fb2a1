//! Automaton runtime for abstract regular expressions.
//!
//! This crate knows nothing about expression trees. It provides the
//! [`Nfa`] graph a tree is translated into, a set-simulation walker over
//! that graph, and a subset-construction compiler ([`Nfa::compile`]) that
//! turns the graph into a [`CompiledNfa`] transition table for repeated
//! matching. Both machine forms expose the same [`Matcher`] interface and
//! accept exactly the same inputs.

mod compile;
mod nfa;

#[cfg(feature = "dot")]
mod dot;

pub use compile::{CompiledMatcher, CompiledNfa, MatchState};
pub use nfa::{Nfa, NfaMatcher, StateId};

/// Whether a match must consume the entire input or only a prefix of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The whole input must satisfy the expression; nothing may remain.
    Full,
    /// Any leading portion of the input may satisfy the expression; the
    /// longest such portion is reported.
    Prefix,
}

/// An incremental matcher over some machine form.
///
/// A matcher starts at the machine's initial state and is fed one symbol
/// at a time. Once dead it stays dead; accepting further symbols is
/// harmless and changes nothing.
///
/// The provided methods turn the incremental interface into the
/// three-valued length contract used throughout: `Some(n)` for a match of
/// `n` symbols, `None` for no match at all. A zero-width match is
/// `Some(0)`, never `None`.
pub trait Matcher {
    /// The symbol type this matcher consumes.
    type Symbol;

    /// Advance by one symbol.
    fn accept(&mut self, symbol: &Self::Symbol);

    /// Whether the input consumed so far is in the machine's language.
    fn is_accepting(&self) -> bool;

    /// Whether no extension of the consumed input can ever be accepted.
    fn is_dead(&self) -> bool;

    /// The length of the match consuming all of `input`, if `input` is in
    /// the machine's language.
    fn matches<I>(mut self, input: I) -> Option<usize>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Symbol>,
    {
        let mut len = 0;
        for symbol in input {
            if self.is_dead() {
                return None;
            }
            self.accept(&symbol);
            len += 1;
        }
        if self.is_accepting() {
            Some(len)
        } else {
            None
        }
    }

    /// The length of the longest prefix of `input` in the machine's
    /// language. `Some(0)` if only the empty prefix is accepted, `None`
    /// if not even that.
    fn matches_prefix<I>(mut self, input: I) -> Option<usize>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Symbol>,
    {
        let mut longest = self.is_accepting().then_some(0);
        let mut len = 0;
        for symbol in input {
            if self.is_dead() {
                break;
            }
            self.accept(&symbol);
            len += 1;
            if self.is_accepting() {
                longest = Some(len);
            }
        }
        longest
    }

    /// Match `input` in the given [`Mode`].
    fn find<I>(self, input: I, mode: Mode) -> Option<usize>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Symbol>,
    {
        match mode {
            Mode::Full => self.matches(input),
            Mode::Prefix => self.matches_prefix(input),
        }
    }
}
