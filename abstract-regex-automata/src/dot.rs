use std::fmt::Display;
use std::io::{self, Write};

use crate::{CompiledNfa, Nfa};

impl<L: Display> Nfa<L> {
    /// Render as a Graphviz digraph. Accepting states are double circles;
    /// ε-edges are labeled `ε`.
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "digraph {{")?;

        for state in 0..self.len() {
            let attrs = if self.is_accepting(state) {
                ", shape=doublecircle"
            } else {
                ""
            };
            writeln!(w, "node[label=\"{state}\"{attrs}] id{state}")?;

            for (symbol, to) in self.symbol_edges(state) {
                writeln!(w, "id{state} -> id{to} [label=\"{symbol}\"]")?;
            }
            for to in self.epsilon_edges(state) {
                writeln!(w, "id{state} -> id{to} [label=\"ε\"]")?;
            }
        }

        writeln!(w, "}}")?;

        Ok(())
    }
}

impl<L: Display> CompiledNfa<L> {
    /// Render the transition table as a Graphviz digraph.
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "digraph {{")?;

        for (id, state) in self.states().iter().enumerate() {
            let attrs = if state.is_accepting() {
                ", shape=doublecircle"
            } else {
                ""
            };
            writeln!(w, "node[label=\"{id}\"{attrs}] id{id}")?;

            for (symbol, to) in state.transitions() {
                writeln!(w, "id{id} -> id{to} [label=\"{symbol}\"]")?;
            }
        }

        writeln!(w, "}}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Nfa;
    use std::rc::Rc;

    #[test]
    fn renders_states_and_edges() {
        let mut nfa = Nfa::new();
        let accept = nfa.add_state(true);
        let entry = nfa.add_state(false);
        nfa.add_edge(entry, Rc::new('a'), accept);
        nfa.add_epsilon(entry, accept);
        nfa.set_initial(entry);

        let mut out = Vec::new();
        nfa.output_dot(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.starts_with("digraph {"));
        assert!(rendered.contains("shape=doublecircle"));
        assert!(rendered.contains("id1 -> id0 [label=\"a\"]"));
        assert!(rendered.contains("id1 -> id0 [label=\"ε\"]"));

        let mut out = Vec::new();
        nfa.compile().output_dot(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("label=\"a\""));
    }
}
