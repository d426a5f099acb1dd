//! The solve procedure: an iterative depth-first search over the dependency
//! graph with activation bookkeeping and conflict-driven backjumping.
//!
//! Exploration keeps a cursor (`current`, `parent`, child index, candidate
//! index) plus an explicit stack of frames mirroring it. Activating a
//! package snapshots the cursor and the whole stack, so a later conflict can
//! jump back to the exact state in which the package was first bound and
//! retry it at its next candidate version.

use std::collections::{BTreeMap, HashMap, VecDeque};

use pakt_core::dependency::Dependency;
use pakt_core::version::Version;

use crate::error::SolveError;
use crate::graph::{DepGraph, NodeId};
use crate::provider::VersionProvider;

/// Default bound on main-loop iterations.
pub const DEFAULT_ITERATION_CAP: usize = 100;

/// Caller-tunable solve behavior.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Hard bound on main-loop iterations, guarding against pathological
    /// inputs such as cyclic provider graphs.
    pub max_iterations: usize,
    /// Emit per-step `tracing` diagnostics.
    pub verbose: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_ITERATION_CAP,
            verbose: false,
        }
    }
}

/// Candidate filter for one package: one bit per index into the provider's
/// version list. A set bit marks a candidate known to fail at least one
/// constraint seen so far. Indices 64 and above saturate and are never
/// recorded; the filter is cumulative bookkeeping and never drives version
/// selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitFilter(u64);

impl BitFilter {
    pub fn set(self, index: usize) -> Self {
        if index < 64 {
            Self(self.0 | 1 << index)
        } else {
            self
        }
    }

    pub fn is_set(self, index: usize) -> bool {
        index < 64 && self.0 & (1 << index) != 0
    }

    pub fn clear(self, index: usize) -> Self {
        if index < 64 {
            Self(self.0 & !(1 << index))
        } else {
            self
        }
    }

    /// Union of two filters.
    pub fn add(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// One exploration-stack frame: the cursor of the node being left.
#[derive(Debug, Clone)]
struct StackNode {
    kid: usize,
    vi: usize,
    ai: usize,
    current: NodeId,
    parent: Option<NodeId>,
}

/// Frozen cursor taken at the moment a package was activated, sufficient to
/// re-run the search from that point. The stack copy is essential: the live
/// stack mutates as descent proceeds.
#[derive(Debug, Clone)]
struct SaveState {
    kid: usize,
    vi: usize,
    ai: usize,
    current: NodeId,
    parent: Option<NodeId>,
    stack: Vec<StackNode>,
}

/// The recorded binding of a concrete version to a package name. At most
/// one entry per name exists in the table at any time; when another node
/// reuses the binding, the encounter folds into this entry instead of
/// adding a row.
struct Activation {
    name: String,
    version: Version,
    filter: BitFilter,
    state: SaveState,
}

/// Outcome of the activation phase for the current node.
enum Activated {
    Ok,
    /// A conflict occurred and the cursor has been moved to a retry point.
    Conflict,
}

/// Resolve every transitively referenced package of `graph` to one concrete
/// version, or report that no assignment exists.
///
/// The graph is mutated in place: chosen versions are bound into its nodes
/// and children are populated from provider sub-graphs. On success the
/// returned map is the activation table keyed by package name.
pub fn solve<P: VersionProvider>(
    graph: &mut DepGraph,
    provider: &P,
    options: &SolveOptions,
) -> Result<BTreeMap<String, Version>, SolveError> {
    let head = graph.head();
    let solver = Solver {
        head,
        current: head,
        parent: None,
        kid: 0,
        vi: 0,
        ai: 0,
        stack: Vec::new(),
        activations: Vec::new(),
        versions: HashMap::new(),
        conflicts: VecDeque::new(),
        verbose: options.verbose,
        graph,
        provider,
    };
    solver.run(options.max_iterations)
}

struct Solver<'a, P> {
    graph: &'a mut DepGraph,
    provider: &'a P,
    head: NodeId,
    current: NodeId,
    parent: Option<NodeId>,
    /// Index of the next child of `current` to descend into.
    kid: usize,
    /// Next candidate-version index to try for `current`.
    vi: usize,
    /// Activation-table length when `current` became current; truncating to
    /// it discards `current`'s own activation and everything after it.
    ai: usize,
    stack: Vec<StackNode>,
    activations: Vec<Activation>,
    /// Memoised provider version lists.
    versions: HashMap<String, Vec<Version>>,
    /// Names that have participated in a conflict, oldest first; backjump
    /// targets when no local climb is possible.
    conflicts: VecDeque<String>,
    verbose: bool,
}

impl<P: VersionProvider> Solver<'_, P> {
    fn run(mut self, max_iterations: usize) -> Result<BTreeMap<String, Version>, SolveError> {
        for _ in 0..max_iterations {
            if self.current == self.head {
                if self.kid >= self.graph.child_count(self.current) {
                    if self.verbose {
                        tracing::debug!(activations = self.activations.len(), "solved");
                    }
                    return self.assignment();
                }
            } else if self.kid == 0 {
                // First arrival at this node on this branch.
                match self.activate()? {
                    Activated::Ok => {}
                    Activated::Conflict => continue,
                }
            }
            self.step();
        }
        Err(SolveError::IterationCap {
            limit: max_iterations,
        })
    }

    /// Bind a version to `current`, reusing an existing activation when one
    /// is compatible, or scanning the candidate list for a fresh one.
    fn activate(&mut self) -> Result<Activated, SolveError> {
        let dependency = self.graph.node(self.current).dependency.clone();
        let name = dependency.name.clone();

        if self.verbose {
            tracing::debug!(dependency = %dependency, "visiting");
        }

        if !self.versions.contains_key(&name) {
            let fetched = self.provider.versions(&name)?;
            if self.verbose {
                tracing::debug!(package = %name, count = fetched.len(), "fetched versions");
            }
            self.versions.insert(name.clone(), fetched);
        }
        let candidates = self.versions[&name].clone();

        // Weed out candidates failing a constraint, and note whether any
        // candidate at all is acceptable under the any-of rule.
        let mut filter = BitFilter::default();
        let mut any_acceptable = dependency.constraints.is_empty() && !candidates.is_empty();
        if !dependency.constraints.is_empty() {
            for (index, candidate) in candidates.iter().enumerate() {
                let mut satisfies_some = false;
                let mut fails_some = false;
                for constraint in &dependency.constraints {
                    if constraint.matches(candidate) {
                        satisfies_some = true;
                    } else {
                        fails_some = true;
                    }
                }
                if fails_some {
                    filter = filter.set(index);
                }
                if satisfies_some {
                    any_acceptable = true;
                }
            }
        }

        if !any_acceptable {
            // The constraint set is unsatisfiable against the full candidate
            // list. Directly under the head no retry can change either side.
            if self.parent == Some(self.head) {
                return Err(SolveError::NoVersionsForRoot {
                    dependency: dependency.to_string(),
                });
            }
            if self.verbose {
                tracing::debug!(dependency = %dependency, "no satisfiable candidates");
            }
            return self.conflict(&dependency);
        }

        if let Some(position) = self.activations.iter().position(|a| a.name == name) {
            let active_version = self.activations[position].version.clone();

            let mut violated = false;
            for constraint in &dependency.constraints {
                if !constraint.matches(&active_version) {
                    violated = true;
                    if self.verbose {
                        tracing::debug!(
                            package = %name,
                            version = %active_version,
                            constraint = %constraint,
                            "active version fails new constraint"
                        );
                    }
                }
            }
            if violated {
                return self.conflict(&dependency);
            }

            if self.verbose {
                tracing::debug!(package = %name, version = %active_version, "reusing activation");
            }
            // One table entry per name: fold this encounter into it by
            // unioning the filter and refreshing the save point.
            let state = self.snapshot();
            let entry = &mut self.activations[position];
            entry.filter = entry.filter.add(filter);
            entry.state = state;
            self.graph.node_mut(self.current).version = Some(active_version);
            // The sub-graph was expanded at the first activation; this
            // node's children are left as they are.
            return Ok(Activated::Ok);
        }

        // Fresh activation: take the first candidate from `vi` onward that
        // satisfies at least one constraint.
        let mut chosen = None;
        while self.vi < candidates.len() {
            let candidate = &candidates[self.vi];
            let acceptable = dependency.constraints.is_empty()
                || dependency.constraints.iter().any(|c| c.matches(candidate));
            if acceptable {
                chosen = Some(candidate.clone());
                break;
            }
            self.vi += 1;
        }

        let Some(version) = chosen else {
            if self.verbose {
                tracing::debug!(dependency = %dependency, from = self.vi, "candidate scan exhausted");
            }
            return self.conflict(&dependency);
        };

        if self.verbose {
            tracing::debug!(package = %name, version = %version, index = self.vi, "activating");
        }
        let state = self.snapshot();
        self.activations.push(Activation {
            name: name.clone(),
            version: version.clone(),
            filter,
            state,
        });
        self.graph.node_mut(self.current).version = Some(version.clone());

        let sub = self.provider.graph_of(&name, &version)?;
        self.graph.graft_children(self.current, &sub);
        Ok(Activated::Ok)
    }

    /// Record a conflict on `dependency` and move the cursor to a retry
    /// point: climb one frame when the parent is below the head, otherwise
    /// backjump to the save point of the oldest conflicting package that is
    /// still activated.
    fn conflict(&mut self, dependency: &Dependency) -> Result<Activated, SolveError> {
        self.conflicts.push_back(dependency.name.clone());

        if self.parent == Some(self.head) {
            loop {
                let Some(name) = self.conflicts.pop_front() else {
                    return Err(SolveError::Exhausted {
                        dependency: dependency.to_string(),
                    });
                };
                let Some(position) = self.activations.iter().position(|a| a.name == name) else {
                    continue;
                };
                let state = self.activations[position].state.clone();
                if self.verbose {
                    tracing::debug!(package = %name, "backjumping to activation save point");
                }
                // Activation always happens with kid == 0, so this re-runs
                // the activation phase at the next candidate version.
                self.kid = state.kid;
                self.vi = state.vi + 1;
                self.ai = state.ai;
                self.current = state.current;
                self.parent = state.parent;
                self.stack = state.stack;
                self.truncate_activations(self.ai);
                return Ok(Activated::Conflict);
            }
        }

        let Some(frame) = self.stack.pop() else {
            return Err(SolveError::Exhausted {
                dependency: dependency.to_string(),
            });
        };
        if self.verbose {
            let parent_name = &self.graph.node(frame.current).dependency.name;
            tracing::debug!(package = %parent_name, "climbing to retry parent");
        }
        self.restore(&frame);
        self.kid = 0;
        self.vi += 1;
        self.truncate_activations(self.ai);
        Ok(Activated::Conflict)
    }

    /// Descend into the next child of `current`, or ascend when its
    /// children are exhausted.
    fn step(&mut self) {
        if self.kid < self.graph.child_count(self.current) {
            self.stack.push(StackNode {
                kid: self.kid,
                vi: self.vi,
                ai: self.ai,
                current: self.current,
                parent: self.parent,
            });
            self.parent = Some(self.current);
            self.current = self.graph.child(self.current, self.kid);
            self.ai = self.activations.len();
            self.kid = 0;
            self.vi = 0;
        } else if let Some(frame) = self.stack.pop() {
            self.restore(&frame);
            self.kid += 1;
        }
    }

    fn restore(&mut self, frame: &StackNode) {
        self.kid = frame.kid;
        self.vi = frame.vi;
        self.ai = frame.ai;
        self.current = frame.current;
        self.parent = frame.parent;
    }

    fn snapshot(&self) -> SaveState {
        SaveState {
            kid: self.kid,
            vi: self.vi,
            ai: self.ai,
            current: self.current,
            parent: self.parent,
            stack: self.stack.clone(),
        }
    }

    /// Drop activations recorded from index `len` on, unbinding the nodes
    /// they had versioned.
    fn truncate_activations(&mut self, len: usize) {
        for abandoned in self.activations.drain(len..) {
            self.graph.node_mut(abandoned.state.current).version = None;
        }
    }

    /// The activation table as a name→version map. The table holds one
    /// entry per name during search, so the disagreement arm is a pure
    /// sanity guard for a resolver bug.
    fn assignment(&self) -> Result<BTreeMap<String, Version>, SolveError> {
        let mut resolved = BTreeMap::new();
        for activation in &self.activations {
            match resolved.get(&activation.name) {
                None => {
                    resolved.insert(activation.name.clone(), activation.version.clone());
                }
                Some(version) if *version == activation.version => {}
                Some(version) => {
                    return Err(SolveError::ConflictingActivations {
                        name: activation.name.clone(),
                        first: version.to_string(),
                        second: activation.version.to_string(),
                    });
                }
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitfilter_set_and_check() {
        let f = BitFilter::default().set(0).set(5);
        assert!(f.is_set(0));
        assert!(f.is_set(5));
        assert!(!f.is_set(1));
    }

    #[test]
    fn bitfilter_clear() {
        let f = BitFilter::default().set(3).clear(3);
        assert!(!f.is_set(3));
    }

    #[test]
    fn bitfilter_add_is_union() {
        let a = BitFilter::default().set(1);
        let b = BitFilter::default().set(2);
        let both = a.add(b);
        assert!(both.is_set(1));
        assert!(both.is_set(2));
    }

    #[test]
    fn bitfilter_saturates_past_sixty_four() {
        let f = BitFilter::default().set(64).set(200);
        assert_eq!(f, BitFilter::default());
        assert!(!f.is_set(64));
        assert!(!f.is_set(200));
    }

    #[test]
    fn default_options() {
        let options = SolveOptions::default();
        assert_eq!(options.max_iterations, DEFAULT_ITERATION_CAP);
        assert!(!options.verbose);
    }
}
