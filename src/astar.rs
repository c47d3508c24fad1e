//! Best-first search over insertion-ordered cost maps.
//!
//! Open and closed sets are kept as [IndexMap]s so that selection among
//! equal `f` scores follows insertion order. Replacing an open entry with a
//! cheaper one leaves it at its original position, and removing the selected
//! entry preserves the relative order of the rest, so the same input always
//! produces the same path regardless of hasher.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::hash::Hash;

/// One discovered cell: accumulated cost from the start, heuristic estimate
/// of the remaining cost, and the closed-map index of the node it was
/// reached from ([None] for the start node).
struct SearchNode<C> {
    g: C,
    h: C,
    parent: Option<usize>,
}

impl<C: Zero + Copy> SearchNode<C> {
    /// Selection priority, computed fresh from the current `g` and `h`.
    fn f(&self) -> C {
        self.g + self.h
    }
}

/// Walks parent indices from `goal_index` back to the start node and returns
/// the visited keys in start-to-goal order.
fn reverse_path<N, C>(closed: &FxIndexMap<N, SearchNode<C>>, goal_index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(Some(goal_index), |current| {
        current.take().map(|index| {
            let (node, record) = closed.get_index(index).unwrap();
            *current = record.parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Generic best-first search from `start` to any node satisfying `success`.
/// Returns the found path together with its accumulated cost, or [None] if
/// the open set is exhausted first.
///
/// The loop expands one node per iteration: the open entry with the
/// strictly smallest `f`, ties going to the earliest-inserted entry. A node
/// moves to the closed map on expansion and is never reconsidered; a cheaper
/// way to an open node replaces its entry wholesale. Once a goal node is
/// admitted, no further successors of the current node are generated, since
/// nothing can improve on expanding it.
pub(crate) fn search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut open: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    let mut closed: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    open.insert(
        start.clone(),
        SearchNode {
            g: Zero::zero(),
            h: heuristic(start),
            parent: None,
        },
    );
    loop {
        // First-encountered minimum: ties go to the earliest-inserted entry.
        let mut best: Option<(usize, C)> = None;
        for (index, node) in open.values().enumerate() {
            let f = node.f();
            if best.map_or(true, |(_, best_f)| f < best_f) {
                best = Some((index, f));
            }
        }
        let Some((best_index, _)) = best else {
            break;
        };
        let (position, node) = open.shift_remove_index(best_index).unwrap();
        let (current_index, _) = closed.insert_full(position, node);
        let (current, node) = closed.get_index(current_index).unwrap();
        if success(current) {
            return Some((reverse_path(&closed, current_index), node.g));
        }
        let current_g = node.g;
        for (candidate, step_cost) in successors(current) {
            if closed.contains_key(&candidate) {
                continue;
            }
            let g = current_g + step_cost;
            let h = heuristic(&candidate);
            let reaches_goal = success(&candidate);
            match open.entry(candidate) {
                Vacant(entry) => {
                    entry.insert(SearchNode {
                        g,
                        h,
                        parent: Some(current_index),
                    });
                }
                Occupied(mut entry) => {
                    if g + h < entry.get().f() {
                        entry.insert(SearchNode {
                            g,
                            h,
                            parent: Some(current_index),
                        });
                    } else {
                        continue;
                    }
                }
            }
            if reaches_goal {
                // The goal is on the frontier now; expanding it next cannot
                // be improved on by the remaining candidates.
                break;
            }
        }
    }
    warn!("open set exhausted without reaching a goal node");
    None
}
