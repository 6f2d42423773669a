//! MatchTree — a sub-bracket layout as a petgraph DiGraph.
//!
//! Nodes are slots (a leaf entrant or the winner of a match); edges point
//! from a child slot to the slot it advances into.

use petgraph::Direction as EdgeDir;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use super::types::{Position, SubBracketLayout};

/// A slot in the bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    /// 0 for leaves, r + 1 for the winner of a round-r match.
    pub depth: usize,
    /// Index within its depth, top to bottom.
    pub index: usize,
    pub position: Position,
    /// Entrant label, leaves only.
    pub label: Option<String>,
}

/// Whether a child met an opponent or advanced on a bye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advance {
    Match,
    Bye,
}

/// A decided slot and the slots of the previous depth that feed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub depth: usize,
    pub index: usize,
    pub position: Position,
    /// Indices of the feeding slots at `depth - 1`, top first.
    pub feeders: Vec<usize>,
    pub advance: Advance,
}

pub struct MatchTree {
    pub digraph: DiGraph<Slot, Advance>,
    /// `levels[d][i]` is the node for slot `i` at depth `d`.
    levels: Vec<Vec<NodeIndex>>,
}

impl MatchTree {
    /// Build the tree from a computed layout.
    pub fn from_layout(layout: &SubBracketLayout) -> Self {
        let mut digraph: DiGraph<Slot, Advance> = DiGraph::new();
        let mut levels: Vec<Vec<NodeIndex>> = Vec::with_capacity(layout.num_rounds + 1);

        let leaves = layout
            .leaves
            .iter()
            .zip(&layout.labels)
            .enumerate()
            .map(|(i, (p, l))| {
                digraph.add_node(Slot {
                    depth: 0,
                    index: i,
                    position: *p,
                    label: Some(l.text.clone()),
                })
            })
            .collect();
        levels.push(leaves);

        for round in &layout.rounds {
            let depth = round.round + 1;
            let mut next = Vec::with_capacity(round.outputs.len());
            for (k, out) in round.outputs.iter().enumerate() {
                let parent = digraph.add_node(Slot {
                    depth,
                    index: k,
                    position: *out,
                    label: None,
                });
                let kind = if round.byes.contains(&(2 * k)) {
                    Advance::Bye
                } else {
                    Advance::Match
                };
                for child in [2 * k, 2 * k + 1] {
                    if let Some(&c) = levels[depth - 1].get(child) {
                        digraph.add_edge(c, parent, kind);
                    }
                }
                next.push(parent);
            }
            levels.push(next);
        }

        Self { digraph, levels }
    }

    /// Number of rounds (depth of the final slot).
    pub fn rounds(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn slot(&self, node: NodeIndex) -> &Slot {
        &self.digraph[node]
    }

    pub fn leaf(&self, index: usize) -> Option<NodeIndex> {
        self.levels.first().and_then(|l| l.get(index)).copied()
    }

    /// The championship slot of this side, if any entrant exists.
    pub fn final_slot(&self) -> Option<NodeIndex> {
        self.levels
            .last()
            .filter(|l| l.len() == 1)
            .map(|l| l[0])
    }

    /// Slots that feed into `node`, top first.
    pub fn feeders(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self
            .digraph
            .neighbors_directed(node, EdgeDir::Incoming)
            .collect();
        out.sort_by_key(|n| self.digraph[*n].index);
        out
    }

    /// Slots a leaf passes through on its way to the final, leaf included.
    pub fn path_to_final(&self, leaf_index: usize) -> Vec<NodeIndex> {
        let mut path = Vec::new();
        let mut cur = self.leaf(leaf_index);
        while let Some(n) = cur {
            path.push(n);
            cur = self
                .digraph
                .neighbors_directed(n, EdgeDir::Outgoing)
                .next();
        }
        path
    }

    /// Every non-leaf slot in play order: round by round, top to bottom.
    pub fn matches(&self) -> Vec<MatchRecord> {
        self.levels
            .iter()
            .skip(1)
            .flatten()
            .map(|&node| {
                let slot = &self.digraph[node];
                let feeders: Vec<usize> = self
                    .feeders(node)
                    .into_iter()
                    .map(|n| self.digraph[n].index)
                    .collect();
                let advance = if feeders.len() == 1 {
                    Advance::Bye
                } else {
                    Advance::Match
                };
                MatchRecord {
                    depth: slot.depth,
                    index: slot.index,
                    position: slot.position,
                    feeders,
                    advance,
                }
            })
            .collect()
    }

    /// Slots in leaf-to-final dependency order.
    pub fn topological_order(&self) -> Vec<NodeIndex> {
        // a bracket is a tree; a cycle would mean a construction bug
        toposort(&self.digraph, None).unwrap_or_default()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
