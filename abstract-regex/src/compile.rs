use std::cell::OnceCell;
use std::hash::Hash;
use std::rc::Rc;

use abstract_regex_automata::{CompiledNfa, Matcher, Mode};

use crate::input::Symbols;
use crate::regex::Regex;

/// An expression root together with an optional compiled automaton.
///
/// The automaton cache is attached at most once:
/// [`compile`](CompiledRegex::compile) is idempotent and may be called
/// from anywhere that holds the wrapper. The cache is purely an
/// acceleration. The match entry points consult it when present and fall
/// back to the recursive tree walk otherwise, with identical results
/// either way.
///
/// ```rust
/// use abstract_regex::{CompiledRegex, Regex};
///
/// let regex = Regex::or(
///     Regex::symbol('x'),
///     Regex::repeat(Regex::concat(Regex::symbol('y'), Regex::symbol('z'))),
/// );
/// let regex = CompiledRegex::new(regex);
/// assert_eq!(regex.matches("x"), Some(1));
///
/// regex.compile();
/// assert_eq!(regex.matches("x"), Some(1));
/// assert_eq!(regex.matches("yzyz"), Some(4));
/// ```
pub struct CompiledRegex<L> {
    regex: Rc<Regex<L>>,
    compiled: OnceCell<CompiledNfa<L>>,
}

impl<L: Eq + Hash> CompiledRegex<L> {
    /// Wrap an expression root. No automaton is built yet.
    pub fn new(regex: Rc<Regex<L>>) -> Self {
        Self {
            regex,
            compiled: OnceCell::new(),
        }
    }

    /// The wrapped expression.
    pub fn regex(&self) -> &Rc<Regex<L>> {
        &self.regex
    }

    /// Whether the automaton cache has been attached.
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Attach the compiled automaton, building it on the first call and
    /// returning the cached one on every later call.
    pub fn compile(&self) -> &CompiledNfa<L> {
        self.compiled
            .get_or_init(|| self.regex.to_nfa().compile())
    }

    /// Full-mode match; see [`Regex::matches`].
    pub fn matches<S>(&self, input: &S) -> Option<usize>
    where
        S: Symbols<Symbol = L> + ?Sized,
    {
        self.find(input, Mode::Full)
    }

    /// Longest-prefix match; see [`Regex::matches_prefix`].
    pub fn matches_prefix<S>(&self, input: &S) -> Option<usize>
    where
        S: Symbols<Symbol = L> + ?Sized,
    {
        self.find(input, Mode::Prefix)
    }

    /// Match in the given [`Mode`], through the cache when it is present.
    pub fn find<S>(&self, input: &S, mode: Mode) -> Option<usize>
    where
        S: Symbols<Symbol = L> + ?Sized,
    {
        match self.compiled.get() {
            Some(compiled) => compiled.matcher().find(symbol_iter(input), mode),
            None => self.regex.find(input, mode),
        }
    }
}

impl<L: Eq + Hash> From<Rc<Regex<L>>> for CompiledRegex<L> {
    fn from(regex: Rc<Regex<L>>) -> Self {
        Self::new(regex)
    }
}

fn symbol_iter<S: Symbols + ?Sized>(input: &S) -> impl Iterator<Item = S::Symbol> + '_ {
    (0..).map_while(|index| input.get(index))
}
