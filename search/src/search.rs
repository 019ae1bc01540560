//! One-way A* with weak/strong duplicate resolution.
//!
//! [`AStar`] owns a [`NodeStore`], an [`OpenList`] and a closed list. Each
//! [`AStar::step`] pops the cheapest open node, closes it, and either reports
//! success (one-way mode) or expands it and pushes every successor through
//! [`AStar::register`].

use crate::contract::SearchProblem;
use crate::cost::Cost;
use crate::error::SearchError;
use crate::frontier::OpenList;
use crate::node::{NodeId, ParentLink, Provisional, SearchNode, StoreKey};
use crate::plan::{Plan, PlanStep};
use crate::policy::{InadmissiblePolicy, SearchPolicy};
use crate::stats::{RegisterOutcome, SearchStats};
use crate::store::NodeStore;

/// Search record type for problem `P`.
pub type NodeOf<P> = SearchNode<
    <P as SearchProblem>::Node,
    <P as SearchProblem>::Edge,
    <P as SearchProblem>::Cost,
>;

/// Unregistered candidate record for problem `P`.
pub type ProvisionalOf<P> = Provisional<
    <P as SearchProblem>::Node,
    <P as SearchProblem>::Edge,
    <P as SearchProblem>::Cost,
>;

/// Plan type for problem `P`.
pub type PlanOf<P> =
    Plan<<P as SearchProblem>::Node, <P as SearchProblem>::Edge, <P as SearchProblem>::Cost>;

/// Which role an [`AStar`] instance plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Stand-alone search; `is_target` ends it.
    OneWay,
    /// Forward half of a two-way search (`is_target` ignored).
    Forward,
    /// Reverse half of a two-way search; uses `expand_reverse` and
    /// `heuristic_reverse` (`is_target` ignored).
    Reverse,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneWay => "one_way",
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}

/// Lifecycle of a search instance: `Idle → Searching → terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    Succeeded,
    Exhausted,
    /// Stopped by the policy's expansion budget.
    Halted,
}

impl SearchState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted | Self::Halted)
    }
}

/// Result of one [`AStar::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// A target was popped (one-way mode only).
    Success(NodeId),
    /// The open list is empty.
    Exhausted,
}

/// How registration resolves a candidate against an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// Install the candidate's branch as primary; `demote` keeps the old
    /// primary as an alternate (node merging).
    ReplacePrimary { demote: bool },
    AppendAlternate,
    Discard,
    /// Cheaper branch for a node that is no longer open.
    Inadmissible { strong: bool },
}

/// Decide what registering `candidate` against `existing` should do.
///
/// Pure: reads both records and mutates nothing, so every early exit leaves
/// the store untouched.
fn resolve<N, E, C: Cost>(
    existing: &SearchNode<N, E, C>,
    candidate: &SearchNode<N, E, C>,
    strong: bool,
    existing_is_open: bool,
) -> Resolution {
    let cheaper = candidate.cumulative_cost() < existing.cumulative_cost();
    if strong {
        return match (cheaper, existing_is_open) {
            (false, _) => Resolution::Discard,
            (true, true) => Resolution::ReplacePrimary { demote: false },
            (true, false) => Resolution::Inadmissible { strong: true },
        };
    }
    assert!(
        !candidate.is_root() && !candidate.is_connector(),
        "source and connector nodes cannot be merged as weak duplicates"
    );
    match (cheaper, existing_is_open) {
        (false, _) => Resolution::AppendAlternate,
        (true, true) => Resolution::ReplacePrimary { demote: true },
        (true, false) => Resolution::Inadmissible { strong: false },
    }
}

/// Single-use A* search over a [`SearchProblem`].
///
/// Construct, add sources (and destinations), then call [`AStar::search`] or
/// drive [`AStar::step`] yourself. Once a terminal state is reached the
/// instance must be dropped; stepping it again panics.
pub struct AStar<'p, P: SearchProblem> {
    problem: &'p P,
    direction: Direction,
    policy: SearchPolicy,
    store: NodeStore<StoreKey<P::Signature>, P::Node, P::Edge, P::Cost>,
    open: OpenList,
    closed: Vec<NodeId>,
    sources: Vec<P::Node>,
    destinations: Vec<P::Node>,
    state: SearchState,
    success: Option<NodeId>,
    stats: SearchStats<P::Cost>,
}

impl<'p, P: SearchProblem> AStar<'p, P> {
    /// One-way search with the default policy.
    #[must_use]
    pub fn new(problem: &'p P) -> Self {
        Self::with_policy(problem, Direction::OneWay, SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(problem: &'p P, direction: Direction, policy: SearchPolicy) -> Self {
        let reserve = policy.reserve_nodes;
        Self {
            problem,
            direction,
            policy,
            store: NodeStore::with_capacity(reserve),
            open: OpenList::with_capacity(reserve),
            closed: Vec::with_capacity(reserve),
            sources: Vec::new(),
            destinations: Vec::new(),
            state: SearchState::Idle,
            success: None,
            stats: SearchStats::new(),
        }
    }

    /// Register `node` as a root (cost zero) and open it.
    ///
    /// A source whose signature is already registered is dropped.
    ///
    /// # Panics
    ///
    /// Panics if any node has already been closed: sources can only be added
    /// before the search starts.
    pub fn add_source(&mut self, node: P::Node) {
        assert!(
            self.closed.is_empty() && !self.state.is_terminal(),
            "each search instance can only be used once: add sources before the first step"
        );
        let h = self.estimate(&node);
        self.sources.push(node.clone());
        self.register(Provisional::root(node, h));
    }

    /// Record a destination for `heuristic` and `is_target`.
    ///
    /// # Panics
    ///
    /// Panics if any node has already been closed: open `f_value`s were
    /// computed against the current destination set.
    pub fn add_destination(&mut self, node: P::Node) {
        assert!(
            self.closed.is_empty() && !self.state.is_terminal(),
            "each search instance can only be used once: add destinations before the first step"
        );
        self.destinations.push(node);
    }

    /// Run until success, exhaustion, or the expansion budget.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidPolicy`] if the policy fails validation;
    /// - [`SearchError::NotFound`] if the open list empties without reaching a
    ///   target;
    /// - [`SearchError::BudgetExceeded`] if `max_expansions` is reached.
    ///
    /// # Panics
    ///
    /// Panics if this instance already reached a terminal state.
    pub fn search(&mut self) -> Result<PlanOf<P>, SearchError> {
        self.policy.validate()?;
        self.assert_reusable();

        loop {
            if let Some(max) = self.policy.max_expansions {
                if self.stats.expansions >= max {
                    self.state = SearchState::Halted;
                    tracing::debug!(
                        direction = self.direction.as_str(),
                        expansions = self.stats.expansions,
                        "expansion budget exceeded"
                    );
                    return Err(SearchError::BudgetExceeded {
                        expansions: self.stats.expansions,
                    });
                }
            }
            match self.step() {
                StepOutcome::Continue => {}
                StepOutcome::Success(id) => return Ok(self.trace_plan(id)),
                StepOutcome::Exhausted => return Err(SearchError::NotFound),
            }
        }
    }

    /// Perform one iteration: pop, close, test, expand, register.
    ///
    /// # Panics
    ///
    /// Panics if the instance is already terminal, if the popped node is a
    /// connector, or if an expansion returns a negative edge cost.
    pub fn step(&mut self) -> StepOutcome {
        self.assert_reusable();
        self.state = SearchState::Searching;

        let Some(current) = self.open.pop_min(&mut self.store) else {
            self.state = SearchState::Exhausted;
            tracing::debug!(
                direction = self.direction.as_str(),
                closed = self.closed.len(),
                "open list exhausted"
            );
            return StepOutcome::Exhausted;
        };
        self.closed.push(current);
        self.stats.expansions += 1;

        let problem = self.problem;
        let node = self.store.get(current);
        assert!(!node.is_connector(), "connector nodes are never expanded");
        let g = node.cumulative_cost();
        tracing::trace!(
            direction = self.direction.as_str(),
            expansion = self.stats.expansions,
            node = current.index(),
            g = ?g,
            f = ?node.f_value(),
            "expanding"
        );

        if self.direction == Direction::OneWay
            && problem.is_target(node.value(), g, &self.destinations)
        {
            self.state = SearchState::Succeeded;
            self.success = Some(current);
            tracing::debug!(cost = ?g, expansions = self.stats.expansions, "target reached");
            return StepOutcome::Success(current);
        }

        let candidates = {
            let (prev_node, prev_edge) = match node.primary() {
                Some(link) => (Some(self.store.get(link.parent).value()), link.edge.as_ref()),
                None => (None, None),
            };
            match self.direction {
                Direction::Reverse => problem.expand_reverse(node.value(), prev_node, prev_edge, g),
                Direction::OneWay | Direction::Forward => {
                    problem.expand(node.value(), prev_node, prev_edge, g)
                }
            }
        };

        for candidate in candidates {
            assert!(
                candidate.edge_cost.is_non_negative(),
                "edge cost must not be negative, got {:?}",
                candidate.edge_cost
            );
            let cumulative = g + candidate.edge_cost;
            let f_value = cumulative + self.estimate(&candidate.node);
            if self.direction == Direction::OneWay {
                self.note_target(&candidate.node, cumulative);
            }
            self.register(Provisional {
                value: candidate.node,
                link: Some(ParentLink {
                    parent: current,
                    edge: Some(candidate.edge),
                    edge_cost: candidate.edge_cost,
                    cumulative_cost: cumulative,
                }),
                f_value,
                is_connector: false,
            });
        }
        StepOutcome::Continue
    }

    /// Register a candidate, resolving weak and strong duplicates.
    ///
    /// - New key: stored and opened.
    /// - Strong duplicate: the cheaper branch wins; a cheaper branch replaces
    ///   the primary and re-keys the open entry.
    /// - Weak duplicate: the branch is merged; if cheaper it becomes the
    ///   primary and the old primary is kept as an alternate.
    ///
    /// Connectors are always treated as strong duplicates of each other.
    ///
    /// A cheaper strong duplicate also replaces the stored node value, so
    /// [`SearchNode::value`] reports the value that arrived on the primary
    /// branch. A weak merge keeps the first value.
    ///
    /// # Panics
    ///
    /// Panics when a root or connector would be merged as a weak duplicate,
    /// and when a cheaper branch is found for a closed node under
    /// [`InadmissiblePolicy::Panic`].
    pub fn register(&mut self, candidate: ProvisionalOf<P>) -> RegisterOutcome {
        let signature = self.problem.signature(&candidate.value);
        let key = if candidate.is_connector {
            StoreKey::Connector(signature)
        } else {
            StoreKey::Node(signature)
        };

        let (id, rejected) = self.store.get_or_insert(key, candidate.into_node());
        let Some(candidate) = rejected else {
            self.open.insert(id, &mut self.store);
            tracing::trace!(
                direction = self.direction.as_str(),
                node = id.index(),
                g = ?self.store.get(id).cumulative_cost(),
                f = ?self.store.get(id).f_value(),
                "registered new node"
            );
            return self.finish_register(RegisterOutcome::Inserted);
        };

        let existing = self.store.get(id);
        let strong = candidate.is_connector()
            || self
                .problem
                .is_strong_duplicate(candidate.value(), existing.value());
        let is_open = self.open.contains(id, &self.store);
        let resolution = resolve(existing, &candidate, strong, is_open);
        tracing::trace!(
            direction = self.direction.as_str(),
            node = id.index(),
            strong,
            existing_g = ?existing.cumulative_cost(),
            candidate_g = ?candidate.cumulative_cost(),
            resolution = ?resolution,
            "duplicate found"
        );

        let outcome = match resolution {
            Resolution::Discard => RegisterOutcome::Discarded,
            Resolution::AppendAlternate => {
                if let Some(link) = candidate.primary {
                    self.store.get_mut(id).alternates.push(link);
                }
                RegisterOutcome::AppendedAlternate
            }
            Resolution::ReplacePrimary { demote } => {
                let record = self.store.get_mut(id);
                let old = record.primary.take();
                if demote {
                    record.alternates.extend(old);
                } else {
                    record.value = candidate.value;
                }
                record.primary = candidate.primary;
                record.f_value = candidate.f_value;
                record.is_connector = candidate.is_connector;
                let reordered = self.open.reorder(id, &mut self.store);
                debug_assert!(reordered, "replaced node must still be open");
                RegisterOutcome::ReplacedPrimary
            }
            Resolution::Inadmissible { strong } => {
                match self.policy.on_inadmissible {
                    InadmissiblePolicy::Panic => panic!(
                        "cheaper path found for an already expanded node ({}); \
                         the heuristic is not admissible",
                        self.direction.as_str()
                    ),
                    InadmissiblePolicy::KeepClosedCost => {}
                }
                self.stats.inadmissible += 1;
                tracing::warn!(
                    direction = self.direction.as_str(),
                    node = id.index(),
                    candidate_g = ?candidate.cumulative_cost(),
                    "cheaper path to a closed node ignored; plan optimality is undefined"
                );
                if strong {
                    RegisterOutcome::Discarded
                } else {
                    if let Some(link) = candidate.primary {
                        self.store.get_mut(id).alternates.push(link);
                    }
                    RegisterOutcome::AppendedAlternate
                }
            }
        };
        self.finish_register(outcome)
    }

    /// Trace the primary-branch chain from `id` back to a root.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this instance.
    #[must_use]
    pub fn trace_plan(&self, id: NodeId) -> PlanOf<P> {
        let mut steps = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.store.get(current);
            match node.primary() {
                None => {
                    steps.push(PlanStep::start(node.value().clone()));
                    cursor = None;
                }
                Some(link) => {
                    steps.push(PlanStep {
                        edge: link.edge.clone(),
                        node: node.value().clone(),
                        earlier_cost: self.store.get(link.parent).cumulative_cost(),
                        edge_cost: link.edge_cost,
                    });
                    cursor = Some(link.parent);
                }
            }
        }
        steps.reverse();
        Plan::from_steps(steps)
    }

    /// Root reached by following primary branches back from `id`.
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut cursor = id;
        while let Some(link) = self.store.get(cursor).primary() {
            cursor = link.parent;
        }
        cursor
    }

    /// Lowest-`f_value` open node, if any.
    #[must_use]
    pub fn peek_open(&self) -> Option<(NodeId, &NodeOf<P>)> {
        self.open.peek_min().map(|id| (id, self.store.get(id)))
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this instance.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeOf<P> {
        self.store.get(id)
    }

    /// Handle of the ordinary (non-connector) node with `signature`.
    #[must_use]
    pub fn lookup(&self, signature: &P::Signature) -> Option<NodeId> {
        self.store.lookup(&StoreKey::Node(signature.clone()))
    }

    /// Handle of the node with `signature` if it has been closed.
    #[must_use]
    pub fn find_closed(&self, signature: &P::Signature) -> Option<NodeId> {
        self.lookup(signature)
            .filter(|&id| !self.open.contains(id, &self.store))
    }

    #[must_use]
    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.contains(id, &self.store)
    }

    #[must_use]
    pub fn num_open(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn num_closed(&self) -> usize {
        self.closed.len()
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    #[must_use]
    pub fn sources(&self) -> &[P::Node] {
        &self.sources
    }

    #[must_use]
    pub fn destinations(&self) -> &[P::Node] {
        &self.destinations
    }

    /// Node at which one-way search succeeded.
    #[must_use]
    pub fn success_node(&self) -> Option<NodeId> {
        self.success
    }

    /// Nodes expanded so far.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.stats.expansions
    }

    /// Counter snapshot.
    #[must_use]
    pub fn stats(&self) -> SearchStats<P::Cost> {
        let mut stats = self.stats.clone();
        stats.open = self.open.len() as u64;
        stats.closed = self.closed.len() as u64;
        stats.open_high_water = self.open.high_water() as u64;
        stats
    }

    /// Move the open minimum to the closed list without expanding it.
    pub(crate) fn close_top(&mut self) -> Option<NodeId> {
        let id = self.open.pop_min(&mut self.store)?;
        self.state = SearchState::Searching;
        self.closed.push(id);
        Some(id)
    }

    /// Register a connector hanging off `parent` whose `f_value` is the full
    /// path cost through the meeting point.
    pub(crate) fn register_connector(
        &mut self,
        parent: NodeId,
        value: P::Node,
        edge_cost: P::Cost,
    ) -> RegisterOutcome {
        let cumulative = self.store.get(parent).cumulative_cost() + edge_cost;
        self.register(Provisional {
            value,
            link: Some(ParentLink {
                parent,
                edge: None,
                edge_cost,
                cumulative_cost: cumulative,
            }),
            f_value: cumulative,
            is_connector: true,
        })
    }

    pub(crate) fn assert_reusable(&self) {
        assert!(
            !self.state.is_terminal(),
            "search already finished ({:?}); each search instance can only be used once",
            self.state
        );
    }

    fn estimate(&self, node: &P::Node) -> P::Cost {
        match self.direction {
            Direction::Reverse => self.problem.heuristic_reverse(node, &self.destinations),
            Direction::OneWay | Direction::Forward => {
                self.problem.heuristic(node, &self.destinations)
            }
        }
    }

    fn note_target(&mut self, node: &P::Node, cumulative: P::Cost) {
        if !self.problem.is_target(node, cumulative, &self.destinations) {
            return;
        }
        let improved = match self.stats.best_target_cost {
            None => true,
            Some(best) => cumulative < best,
        };
        if improved {
            tracing::debug!(
                cost = ?cumulative,
                first = self.stats.best_target_cost.is_none(),
                open = self.open.len(),
                closed = self.closed.len(),
                "target generated"
            );
            self.stats.best_target_cost = Some(cumulative);
        }
    }

    fn finish_register(&mut self, outcome: RegisterOutcome) -> RegisterOutcome {
        self.stats.record(outcome);
        outcome
    }
}
