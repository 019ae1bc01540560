//! Plans: the externally observed result of a search.

use crate::cost::Cost;

/// One step of a plan: the edge taken into `node` and the costs around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep<N, E, C> {
    /// Edge leading into `node`; `None` on the first step.
    pub edge: Option<E>,
    pub node: N,
    /// Cumulative cost just before this step.
    pub earlier_cost: C,
    /// Cost of this step alone.
    pub edge_cost: C,
}

impl<N, E, C: Cost> PlanStep<N, E, C> {
    /// A first step: no edge, zero cost.
    pub fn start(node: N) -> Self {
        Self {
            edge: None,
            node,
            earlier_cost: C::zero(),
            edge_cost: C::zero(),
        }
    }

    #[must_use]
    pub fn cumulative_cost(&self) -> C {
        self.earlier_cost + self.edge_cost
    }
}

/// A complete plan and its total cost.
///
/// Invariants for every plan returned by a search: `steps` is non-empty,
/// `steps[0].edge` is `None` with zero `earlier_cost`, each step's
/// `earlier_cost` is the previous step's cumulative cost, and `cost` is the
/// last step's cumulative cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<N, E, C> {
    pub steps: Vec<PlanStep<N, E, C>>,
    pub cost: C,
}

impl<N, E, C: Cost> Plan<N, E, C> {
    /// Build a plan from steps, taking the cost from the last step.
    pub fn from_steps(steps: Vec<PlanStep<N, E, C>>) -> Self {
        let cost = steps.last().map_or_else(C::zero, PlanStep::cumulative_cost);
        Self { steps, cost }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.steps.iter().map(|s| &s.node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.steps.iter().filter_map(|s| s.edge.as_ref())
    }

    /// Whether the step-cost bookkeeping is internally consistent.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let Some(first) = self.steps.first() else {
            return false;
        };
        if first.edge.is_some() || first.earlier_cost != C::zero() {
            return false;
        }
        let chained = self
            .steps
            .windows(2)
            .all(|w| w[1].earlier_cost == w[0].cumulative_cost());
        chained && self.steps.last().map(PlanStep::cumulative_cost) == Some(self.cost)
    }

    /// Reverse the plan in place.
    ///
    /// After reversing the vector the node order is right, but each edge and
    /// edge cost sits one step too early and every `earlier_cost` is stale;
    /// both are re-derived here.
    pub fn reverse(&mut self) {
        self.steps.reverse();
        for i in (1..self.steps.len()).rev() {
            let (before, after) = self.steps.split_at_mut(i);
            let prev = &mut before[i - 1];
            let cur = &mut after[0];
            cur.edge = prev.edge.take();
            cur.edge_cost = prev.edge_cost;
        }
        if let Some(first) = self.steps.first_mut() {
            first.edge = None;
            first.edge_cost = C::zero();
        }
        self.recompute_earlier_costs();
    }

    fn recompute_earlier_costs(&mut self) {
        let mut cumulative = C::zero();
        for step in &mut self.steps {
            step.earlier_cost = cumulative;
            cumulative = cumulative + step.edge_cost;
        }
        self.cost = cumulative;
    }
}

impl<N: Clone, E: Clone, C: Cost> Plan<N, E, C> {
    /// Append `tail`, a plan that *ends* where `self` ends, walked backwards.
    ///
    /// `tail` runs from its own root to the meeting node, so walking it
    /// backwards shifts every node by one step relative to its edge.
    pub fn splice_reversed(&mut self, tail: &Plan<N, E, C>) {
        let mut cumulative = self.cost;
        for i in (1..tail.steps.len()).rev() {
            let step = PlanStep {
                edge: tail.steps[i].edge.clone(),
                node: tail.steps[i - 1].node.clone(),
                earlier_cost: cumulative,
                edge_cost: tail.steps[i].edge_cost,
            };
            cumulative = step.cumulative_cost();
            self.steps.push(step);
        }
        self.cost = cumulative;
    }
}
