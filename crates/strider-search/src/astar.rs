use crate::engine::{Astar, NO_PARENT, NodeEntry, OpenRef, Step};
use crate::traits::SearchState;

impl<S: SearchState> Astar<S> {
    /// Compute a minimum-cost path from `initial` to `goal` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if the
    /// open heap empties without reaching the goal. "No path" is a normal
    /// outcome, not an error: it is what an exhaustive search of an
    /// unreachable goal reports.
    ///
    /// The engine performs no input validation. Callers are expected to run
    /// their domain's pre-checks first (for the sliding-tile domain,
    /// configuration validity and solvability); searching a provably
    /// unreachable goal simply exhausts the heap over the whole reachable
    /// component.
    pub fn solve(&mut self, initial: &S, goal: &S) -> Option<Vec<Step<S>>> {
        self.nodes.clear();
        self.open.clear();
        self.visited.clear();

        // Seed the closed set with the initial state so successor generation
        // never re-produces it, then open the root.
        self.visited.insert(initial.key());
        self.nodes.push(NodeEntry {
            state: initial.clone(),
            g: 0,
            f: initial.estimate(goal),
            action: None,
            parent: NO_PARENT,
        });
        self.open.push(OpenRef {
            id: 0,
            f: self.nodes[0].f,
        });

        let mut sbuf = std::mem::take(&mut self.sbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break None;
            };
            let ci = current.id;

            // The heap is not deduplicated on insert: a state reached by
            // several paths gets several entries. Whichever pops first wins;
            // later entries for an already-expanded state are stale.
            let key = self.nodes[ci].state.key();
            if self.nodes[ci].parent != NO_PARENT && self.visited.contains(&key) {
                continue;
            }
            self.visited.insert(key);

            if self.nodes[ci].state.matches(goal) {
                break Some(ci);
            }

            let current_g = self.nodes[ci].g;
            sbuf.clear();
            self.nodes[ci].state.successors(&self.visited, &mut sbuf);

            for (state, action) in sbuf.drain(..) {
                let g = current_g + 1;
                let f = g + state.estimate(goal);
                let id = self.nodes.len();
                self.nodes.push(NodeEntry {
                    state,
                    g,
                    f,
                    action: Some(action),
                    parent: ci,
                });
                self.open.push(OpenRef { id, f });
            }
        };

        self.sbuf = sbuf;

        let goal_id = found?;
        log::debug!(
            "a* reached goal at cost {} ({} states expanded, {} nodes allocated)",
            self.nodes[goal_id].g,
            self.visited.len(),
            self.nodes.len(),
        );

        // Reconstruct by walking parent ids back to the root, then reverse.
        let mut path = Vec::with_capacity(self.nodes[goal_id].g as usize + 1);
        let mut ci = goal_id;
        while ci != NO_PARENT {
            let n = &self.nodes[ci];
            path.push(Step {
                state: n.state.clone(),
                action: n.action,
                cost: n.g,
            });
            ci = n.parent;
        }
        path.reverse();
        Some(path)
    }
}

/// One-shot convenience wrapper around [`Astar::solve`].
pub fn solve<S: SearchState>(initial: &S, goal: &S) -> Option<Vec<Step<S>>> {
    Astar::new().solve(initial, goal)
}
