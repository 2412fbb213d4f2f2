//! Backtracking search over the domain table.
//!
//! Each level validates the committed prefix, stops if every pattern vertex
//! is committed, propagates, then tries the candidates of the next pattern
//! vertex in ascending host order. A commit appends to the assignment and
//! collapses the vertex's domain to the chosen host. When the branch below
//! fails, the domain table is restored to the checkpoint taken before the
//! commit, the candidate is removed for good at this level, and propagation
//! runs once more.
//!
//! The recursive and iterative drivers share every step, so they visit the
//! same states in the same order.

mod frame;

use subiso_common::{Graph, PropagationMode, SearchStrategy, VertexId};

use crate::assignment::Assignment;
use crate::domain::{Checkpoint, DomainTable};
use crate::observer::SearchObserver;
use crate::propagate::Propagator;
use crate::validate::EdgeValidator;

use frame::Frame;

/// Outcome of entering a search state.
enum Entered {
    /// The committed prefix breaks a pattern edge.
    DeadEnd,
    /// Every pattern vertex is committed.
    Complete,
    /// The state needs branching on the returned level.
    Branch(Frame),
}

/// The backtracking engine for one host/pattern pair.
pub(crate) struct SearchEngine<'g, 'o> {
    host: &'g Graph,
    pattern: &'g Graph,
    propagator: Propagator<'g>,
    validator: EdgeValidator,
    propagation: PropagationMode,
    observer: &'o mut dyn SearchObserver,
}

impl<'g, 'o> SearchEngine<'g, 'o> {
    pub(crate) fn new(
        host: &'g Graph,
        pattern: &'g Graph,
        propagation: PropagationMode,
        observer: &'o mut dyn SearchObserver,
    ) -> Self {
        Self {
            host,
            pattern,
            propagator: Propagator::new(host, pattern),
            validator: EdgeValidator::from_pattern(pattern),
            propagation,
            observer,
        }
    }

    /// Extends `assignment` to a full embedding, or returns false.
    ///
    /// On success the assignment holds the embedding. On failure the
    /// assignment is back to its initial contents.
    pub(crate) fn run(
        &mut self,
        strategy: SearchStrategy,
        assignment: &mut Assignment,
        domains: &mut DomainTable,
    ) -> bool {
        match strategy {
            SearchStrategy::Recursive => self.extend_recursive(assignment, domains),
            SearchStrategy::Iterative => self.extend_iterative(assignment, domains),
        }
    }

    fn extend_recursive(&mut self, assignment: &mut Assignment, domains: &mut DomainTable) -> bool {
        let mut frame = match self.enter(assignment, domains) {
            Entered::DeadEnd => return false,
            Entered::Complete => return true,
            Entered::Branch(frame) => frame,
        };

        while let Some(candidate) = frame.advance(assignment, domains) {
            let checkpoint = self.commit(assignment, domains, frame.next, candidate);
            if self.extend_recursive(assignment, domains) {
                return true;
            }
            self.undo(assignment, domains, frame.next, candidate, checkpoint);
        }
        false
    }

    fn extend_iterative(&mut self, assignment: &mut Assignment, domains: &mut DomainTable) -> bool {
        let mut stack = match self.enter(assignment, domains) {
            Entered::DeadEnd => return false,
            Entered::Complete => return true,
            Entered::Branch(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            // A pending commit on the top frame means its child level failed.
            if let Some((candidate, checkpoint)) = frame.pending.take() {
                self.undo(assignment, domains, frame.next, candidate, checkpoint);
            }

            let Some(candidate) = frame.advance(assignment, domains) else {
                stack.pop();
                continue;
            };

            let checkpoint = self.commit(assignment, domains, frame.next, candidate);
            frame.pending = Some((candidate, checkpoint));

            match self.enter(assignment, domains) {
                Entered::DeadEnd => {}
                Entered::Complete => return true,
                Entered::Branch(child) => stack.push(child),
            }
        }
        false
    }

    /// Validates, checks for completion, propagates and opens a branch level.
    fn enter(&mut self, assignment: &Assignment, domains: &mut DomainTable) -> Entered {
        if !self.validator.committed_edges_exist(self.host, assignment) {
            return Entered::DeadEnd;
        }
        let next = assignment.len();
        if next == self.pattern.vertex_count() {
            return Entered::Complete;
        }

        self.propagate(domains);

        let next = VertexId::from(next);
        self.observer.on_branch(next, domains);
        Entered::Branch(Frame::new(next, domains))
    }

    fn commit(
        &mut self,
        assignment: &mut Assignment,
        domains: &mut DomainTable,
        pattern: VertexId,
        host: VertexId,
    ) -> Checkpoint {
        assignment.push(host);
        let checkpoint = domains.checkpoint();
        domains.collapse(pattern, host);
        self.observer.on_commit(pattern, host, assignment.len());
        checkpoint
    }

    fn undo(
        &mut self,
        assignment: &mut Assignment,
        domains: &mut DomainTable,
        pattern: VertexId,
        host: VertexId,
        checkpoint: Checkpoint,
    ) {
        let depth = assignment.len();
        assignment.pop();
        domains.restore(checkpoint);
        domains.remove(pattern, host);
        self.observer.on_backtrack(pattern, host, depth);
        self.propagate(domains);
    }

    fn propagate(&mut self, domains: &mut DomainTable) {
        let removed_any = self.propagator.run(domains, self.propagation);
        self.observer.on_propagate(removed_any);
    }
}
