//! Translation of expression trees into ε-NFAs.
//!
//! The translation threads a continuation through the tree: building a
//! node answers "what state do I enter to match this node and then
//! everything after it", where "everything after it" is the continuation
//! state handed in. The root's continuation is a single fresh accepting
//! state.

use abstract_regex_automata::{Nfa, StateId};

use crate::regex::Regex;

impl<L> Regex<L> {
    /// Translate into a nondeterministic finite automaton accepting
    /// exactly this expression's language.
    ///
    /// An expression through which no path avoids [`Regex::EmptySet`] has
    /// the empty language; the result is then [`Nfa::reject`] rather than
    /// a degenerate graph, so callers always receive a well-formed
    /// automaton.
    pub fn to_nfa(&self) -> Nfa<L> {
        let mut nfa = Nfa::new();
        let accept = nfa.add_state(true);
        match self.build(&mut nfa, accept) {
            Some(initial) => {
                nfa.set_initial(initial);
                nfa
            }
            None => {
                log::debug!("expression is unsatisfiable, emitting the rejecting automaton");
                Nfa::reject()
            }
        }
    }

    /// Build the fragment for "this node, then `next`". `None` marks a
    /// construction with no satisfiable continuation.
    fn build(&self, nfa: &mut Nfa<L>, next: StateId) -> Option<StateId> {
        match self {
            Regex::EmptySet => None,
            Regex::EmptyString => Some(next),
            Regex::Symbol(symbol) => {
                let entry = nfa.add_state(false);
                nfa.add_edge(entry, symbol.clone(), next);
                Some(entry)
            }
            Regex::Concat(left, right) => {
                // Built right-to-left so the right fragment becomes the
                // left fragment's continuation.
                let right = right.build(nfa, next)?;
                left.build(nfa, right)
            }
            Regex::Or(left, right) => {
                let left = left.build(nfa, next);
                let right = right.build(nfa, next);
                match (left, right) {
                    (Some(left), Some(right)) => {
                        let entry = nfa.add_state(false);
                        nfa.add_epsilon(entry, left);
                        nfa.add_epsilon(entry, right);
                        Some(entry)
                    }
                    // An unsatisfiable side contributes nothing, not even
                    // an ε-edge.
                    (Some(one), None) | (None, Some(one)) => Some(one),
                    (None, None) => None,
                }
            }
            Regex::Repeat(inner) => {
                // The fresh state is both the zero-repetition exit and
                // the loop header the body returns to. It stands even
                // when the body is unsatisfiable: zero repetitions are
                // always available.
                let entry = nfa.add_state(false);
                nfa.add_epsilon(entry, next);
                if let Some(body) = inner.build(nfa, entry) {
                    nfa.add_epsilon(entry, body);
                }
                Some(entry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abstract_regex_automata::{Matcher, Mode};

    fn sym(c: char) -> std::rc::Rc<Regex<char>> {
        Regex::symbol(c)
    }

    #[test]
    fn symbol_builds_a_two_state_chain() {
        let nfa = sym('a').to_nfa();
        assert_eq!(nfa.len(), 2);
        assert!(!nfa.is_accepting(nfa.initial()));
        assert_eq!(nfa.matcher().matches("a".chars()), Some(1));
        assert_eq!(nfa.matcher().matches("b".chars()), None);
    }

    #[test]
    fn empty_string_passes_the_continuation_through() {
        let nfa = Regex::<char>::empty_string().to_nfa();
        assert_eq!(nfa.len(), 1);
        assert!(nfa.is_accepting(nfa.initial()));
        assert_eq!(nfa.matcher().matches("".chars()), Some(0));
        assert_eq!(nfa.matcher().matches("a".chars()), None);
        assert_eq!(nfa.matcher().matches_prefix("a".chars()), Some(0));
    }

    #[test]
    fn empty_set_becomes_the_rejecting_automaton() {
        let nfa = Regex::<char>::empty_set().to_nfa();
        assert_eq!(nfa.len(), 1);
        assert!(!nfa.is_accepting(nfa.initial()));
        assert_eq!(nfa.matcher().matches("".chars()), None);
        assert_eq!(nfa.matcher().matches_prefix("abc".chars()), None);
    }

    #[test]
    fn empty_set_absorbs_concatenation() {
        for regex in [
            Regex::concat(sym('a'), Regex::empty_set()),
            Regex::concat(Regex::empty_set(), sym('a')),
        ] {
            let nfa = regex.to_nfa();
            assert_eq!(nfa.matcher().matches("a".chars()), None);
            assert_eq!(nfa.matcher().matches_prefix("a".chars()), None);
            assert_eq!(nfa.matcher().matches("".chars()), None);
        }
    }

    #[test]
    fn unsatisfiable_alternative_contributes_no_branch() {
        let regex = Regex::or(Regex::empty_set(), sym('a'));
        let nfa = regex.to_nfa();
        // accept + the symbol entry; no ε-branch state for the dead side
        assert_eq!(nfa.len(), 2);
        assert_eq!(nfa.matcher().matches("a".chars()), Some(1));

        let both_dead = Regex::<char>::or(Regex::empty_set(), Regex::empty_set());
        assert_eq!(both_dead.to_nfa().matcher().matches("".chars()), None);
    }

    #[test]
    fn repetition_of_an_unsatisfiable_body_still_matches_nothing_once() {
        let regex = Regex::concat(Regex::repeat(Regex::empty_set()), sym('a'));
        let nfa = regex.to_nfa();
        assert_eq!(nfa.matcher().matches("a".chars()), Some(1));
        assert_eq!(nfa.matcher().matches("".chars()), None);
    }

    #[test]
    fn repetition_loops_through_its_header() {
        let nfa = Regex::repeat(Regex::concat(sym('a'), sym('b'))).to_nfa();
        assert_eq!(nfa.matcher().matches("abab".chars()), Some(4));
        assert_eq!(nfa.matcher().matches("aba".chars()), None);
        assert_eq!(nfa.matcher().find("aba".chars(), Mode::Prefix), Some(2));
        assert_eq!(nfa.matcher().matches("".chars()), Some(0));
    }

    #[test]
    fn repetition_of_a_nullable_body_terminates() {
        let nfa = Regex::repeat(Regex::optional(sym('a'))).to_nfa();
        assert_eq!(nfa.matcher().matches("aa".chars()), Some(2));
        assert_eq!(nfa.matcher().matches("".chars()), Some(0));
        assert_eq!(nfa.matcher().matches_prefix("b".chars()), Some(0));
    }
}
