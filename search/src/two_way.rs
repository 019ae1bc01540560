//! Two-way A*: a forward and a reverse [`AStar`] that meet in the middle.
//!
//! Both halves advance in `f_value` order. When the side about to expand a
//! node finds that node already closed on the other side, it closes the node
//! without expanding it and registers a *connector*: a synthetic node whose
//! `f_value` is the true cost of the full path through the meeting point.
//! Because connectors compete in the same open list as ordinary nodes, the
//! first connector popped is the cheapest complete path.

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::plan::Plan;
use crate::policy::SearchPolicy;
use crate::search::{AStar, Direction, PlanOf, SearchState, StepOutcome};
use crate::stats::{RegisterOutcome, TwoWayStats};

/// Result of one [`TwoWayAStar::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwoWayStep<N, E, C> {
    Continue,
    /// A connector was popped; the plan runs from a source to a destination.
    Success(Plan<N, E, C>),
    /// Both open lists are empty.
    Exhausted,
}

/// Single-use bidirectional search.
///
/// Requires [`SearchProblem::expand_reverse`] and
/// [`SearchProblem::heuristic_reverse`] to describe the reversed graph (the
/// defaults fit undirected graphs). `is_target` is never consulted.
pub struct TwoWayAStar<'p, P: SearchProblem> {
    problem: &'p P,
    forward: AStar<'p, P>,
    reverse: AStar<'p, P>,
    state: SearchState,
    connectors: u64,
    best_connector_cost: Option<P::Cost>,
}

impl<'p, P: SearchProblem> TwoWayAStar<'p, P> {
    #[must_use]
    pub fn new(problem: &'p P) -> Self {
        Self::with_policy(problem, SearchPolicy::default())
    }

    /// Both halves run under `policy`; `max_expansions` caps each half.
    #[must_use]
    pub fn with_policy(problem: &'p P, policy: SearchPolicy) -> Self {
        Self {
            problem,
            forward: AStar::with_policy(problem, Direction::Forward, policy.clone()),
            reverse: AStar::with_policy(problem, Direction::Reverse, policy),
            state: SearchState::Idle,
            connectors: 0,
            best_connector_cost: None,
        }
    }

    /// # Panics
    ///
    /// Panics once either half has closed a node.
    pub fn add_source(&mut self, node: P::Node) {
        self.assert_idle();
        self.forward.add_source(node.clone());
        self.reverse.add_destination(node);
    }

    /// # Panics
    ///
    /// Panics once either half has closed a node.
    pub fn add_destination(&mut self, node: P::Node) {
        self.assert_idle();
        self.forward.add_destination(node.clone());
        self.reverse.add_source(node);
    }

    /// Run until the halves meet optimally or both are exhausted.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidPolicy`] if the policy fails validation;
    /// - [`SearchError::NotFound`] if both open lists empty out;
    /// - [`SearchError::BudgetExceeded`] once either half reaches
    ///   `max_expansions`; the reported count covers both halves.
    ///
    /// # Panics
    ///
    /// Panics if this instance already reached a terminal state.
    pub fn search(&mut self) -> Result<PlanOf<P>, SearchError> {
        self.forward.policy().validate()?;
        self.assert_reusable();

        loop {
            if let Some(max) = self.forward.policy().max_expansions {
                if self.forward.expansions() >= max || self.reverse.expansions() >= max {
                    let expansions = self.forward.expansions() + self.reverse.expansions();
                    self.state = SearchState::Halted;
                    tracing::debug!(
                        forward = self.forward.expansions(),
                        reverse = self.reverse.expansions(),
                        "expansion budget exceeded"
                    );
                    return Err(SearchError::BudgetExceeded { expansions });
                }
            }
            match self.step() {
                TwoWayStep::Continue => {}
                TwoWayStep::Success(plan) => return Ok(plan),
                TwoWayStep::Exhausted => return Err(SearchError::NotFound),
            }
        }
    }

    /// Advance the half with the cheaper open minimum by one iteration.
    ///
    /// # Panics
    ///
    /// Panics if the instance is already terminal.
    pub fn step(&mut self) -> TwoWayStep<P::Node, P::Edge, P::Cost> {
        self.assert_reusable();
        self.state = SearchState::Searching;

        let forward_top = self.forward.peek_open().map(|(id, n)| (id, n.f_value()));
        let reverse_top = self.reverse.peek_open().map(|(id, n)| (id, n.f_value()));
        let (direction, top) = match (forward_top, reverse_top) {
            (None, None) => {
                self.state = SearchState::Exhausted;
                tracing::debug!(
                    forward_closed = self.forward.num_closed(),
                    reverse_closed = self.reverse.num_closed(),
                    "both open lists exhausted"
                );
                return TwoWayStep::Exhausted;
            }
            (Some((id, _)), None) => (Direction::Forward, id),
            (None, Some((id, _))) => (Direction::Reverse, id),
            (Some((f_id, f)), Some((r_id, r))) => {
                if r < f {
                    (Direction::Reverse, r_id)
                } else {
                    (Direction::Forward, f_id)
                }
            }
        };

        let problem = self.problem;
        let (this, other) = match direction {
            Direction::Reverse => (&mut self.reverse, &self.forward),
            Direction::OneWay | Direction::Forward => (&mut self.forward, &self.reverse),
        };
        let node = this.node(top);

        if node.is_connector() {
            let Some(link) = node.primary() else {
                unreachable!("connectors always hang off a meeting node");
            };
            let meeting = link.parent;
            let signature = problem.signature(this.node(meeting).value());
            let Some(other_meeting) = other.find_closed(&signature) else {
                unreachable!("connector registered without a closed meeting node");
            };

            let mut plan = this.trace_plan(meeting);
            plan.splice_reversed(&other.trace_plan(other_meeting));
            if direction == Direction::Reverse {
                plan.reverse();
            }
            debug_assert_eq!(plan.cost, node.f_value());

            self.state = SearchState::Succeeded;
            tracing::debug!(
                side = direction.as_str(),
                cost = ?plan.cost,
                forward_closed = self.forward.num_closed(),
                reverse_closed = self.reverse.num_closed(),
                "two-way search succeeded"
            );
            return TwoWayStep::Success(plan);
        }

        let signature = problem.signature(node.value());
        if let Some(other_meeting) = other.find_closed(&signature) {
            let other_cost = other.node(other_meeting).cumulative_cost();
            let total = node.cumulative_cost() + other_cost;
            let root = other.node(other.root_of(other_meeting)).value().clone();

            let closed = this.close_top();
            debug_assert_eq!(closed, Some(top));
            let outcome = this.register_connector(top, root, other_cost);

            if matches!(
                outcome,
                RegisterOutcome::Inserted | RegisterOutcome::ReplacedPrimary
            ) {
                self.connectors += 1;
            }
            let improved = self.best_connector_cost.map_or(true, |best| total < best);
            if improved {
                tracing::debug!(
                    side = direction.as_str(),
                    cost = ?total,
                    first = self.best_connector_cost.is_none(),
                    "connector registered"
                );
                self.best_connector_cost = Some(total);
            }
            return TwoWayStep::Continue;
        }

        let outcome = this.step();
        debug_assert_eq!(
            outcome,
            StepOutcome::Continue,
            "a half was stepped with a non-empty open list"
        );
        TwoWayStep::Continue
    }

    fn assert_idle(&self) {
        assert!(
            self.state == SearchState::Idle
                && self.forward.num_closed() == 0
                && self.reverse.num_closed() == 0,
            "each search instance can only be used once: add endpoints before the first step"
        );
    }

    #[must_use]
    pub fn forward(&self) -> &AStar<'p, P> {
        &self.forward
    }

    #[must_use]
    pub fn reverse(&self) -> &AStar<'p, P> {
        &self.reverse
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub fn stats(&self) -> TwoWayStats<P::Cost> {
        TwoWayStats {
            forward: self.forward.stats(),
            reverse: self.reverse.stats(),
            connectors: self.connectors,
            best_connector_cost: self.best_connector_cost,
        }
    }

    fn assert_reusable(&self) {
        assert!(
            !self.state.is_terminal(),
            "two-way search already finished ({:?}); each search instance can only be used once",
            self.state
        );
    }
}
