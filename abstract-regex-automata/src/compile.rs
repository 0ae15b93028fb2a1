use std::collections::{BTreeSet, HashMap, VecDeque};
use std::hash::Hash;
use std::rc::Rc;

use crate::nfa::{Nfa, StateId};
use crate::Matcher;

/// One state of a [`CompiledNfa`]: an accepting flag plus a transition
/// table keyed by symbol. A symbol with no table entry leads to the dead
/// state.
#[derive(Debug, Clone)]
pub struct MatchState<L> {
    accepting: bool,
    transition_table: HashMap<Rc<L>, StateId>,
}

impl<L> MatchState<L> {
    /// Whether the input consumed on the way here is accepted.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// The outgoing transitions of this state.
    pub fn transitions(&self) -> impl Iterator<Item = (&L, StateId)> {
        self.transition_table
            .iter()
            .map(|(symbol, &to)| (symbol.as_ref(), to))
    }
}

/// Deterministic transition-table form of an [`Nfa`], produced by subset
/// construction. Walking the table visits one state per input symbol, so
/// repeated matching no longer pays for ε-closures.
pub struct CompiledNfa<L> {
    states: Vec<MatchState<L>>,
    initial: StateId,
}

impl<L> CompiledNfa<L> {
    /// The entry state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// The match states, densely numbered from zero.
    pub fn states(&self) -> &[MatchState<L>] {
        &self.states
    }

    /// A fresh [`Matcher`] positioned at the entry state.
    pub fn matcher(&self) -> CompiledMatcher<'_, L> {
        CompiledMatcher {
            compiled: self,
            current: Some(self.initial),
        }
    }
}

struct NfaCompiler<'a, L> {
    nfa: &'a Nfa<L>,
    state_ids: HashMap<BTreeSet<StateId>, StateId>,
    work_list: VecDeque<BTreeSet<StateId>>,
    states: Vec<MatchState<L>>,
}

impl<'a, L: Eq + Hash> NfaCompiler<'a, L> {
    fn new(nfa: &'a Nfa<L>) -> Self {
        Self {
            nfa,
            state_ids: HashMap::new(),
            work_list: VecDeque::new(),
            states: Vec::new(),
        }
    }

    /// Id of the match state for a closed subset, scheduling it for
    /// construction on first sight.
    fn state_id(&mut self, subset: BTreeSet<StateId>) -> StateId {
        if let Some(&id) = self.state_ids.get(&subset) {
            return id;
        }
        let id = self.state_ids.len();
        self.state_ids.insert(subset.clone(), id);
        self.work_list.push_back(subset);
        id
    }

    fn compile_step(&mut self, subset: BTreeSet<StateId>) {
        let mut targets: HashMap<Rc<L>, BTreeSet<StateId>> = HashMap::new();
        for &state in &subset {
            for (symbol, to) in self.nfa.symbol_edges(state) {
                targets.entry(symbol.clone()).or_default().insert(*to);
            }
        }

        let accepting = subset.iter().any(|&state| self.nfa.is_accepting(state));
        let mut transition_table = HashMap::with_capacity(targets.len());
        for (symbol, to) in targets {
            let closure = self.nfa.closure(to);
            transition_table.insert(symbol, self.state_id(closure));
        }

        self.states.push(MatchState {
            accepting,
            transition_table,
        });
    }

    fn compile(mut self) -> CompiledNfa<L> {
        let start = if self.nfa.is_empty() {
            BTreeSet::new()
        } else {
            self.nfa.closure(BTreeSet::from([self.nfa.initial()]))
        };
        let initial = self.state_id(start);

        while let Some(subset) = self.work_list.pop_front() {
            // Subsets are discovered in id order, so the vector fills densely.
            debug_assert_eq!(self.states.len(), self.state_ids[&subset]);
            self.compile_step(subset);
        }

        log::debug!(
            "compiled {}-state nfa into {} match states",
            self.nfa.len(),
            self.states.len()
        );

        CompiledNfa {
            states: self.states,
            initial,
        }
    }
}

impl<L: Eq + Hash> Nfa<L> {
    /// Compile into a deterministic transition table.
    pub fn compile(&self) -> CompiledNfa<L> {
        NfaCompiler::new(self).compile()
    }
}

/// Table walker over a [`CompiledNfa`]. The dead state is represented by
/// walking off the table.
pub struct CompiledMatcher<'a, L> {
    compiled: &'a CompiledNfa<L>,
    current: Option<StateId>,
}

impl<L: Eq + Hash> Matcher for CompiledMatcher<'_, L> {
    type Symbol = L;

    fn accept(&mut self, symbol: &L) {
        self.current = self.current.and_then(|state| {
            self.compiled.states[state]
                .transition_table
                .get(symbol)
                .copied()
        });
    }

    fn is_accepting(&self) -> bool {
        self.current
            .is_some_and(|state| self.compiled.states[state].accepting)
    }

    fn is_dead(&self) -> bool {
        self.current.is_none()
    }
}
