//! Pathway graph between stars.
//!
//! `Adjacency` stores the symmetric star-to-star link matrix as a flat
//! upper triangle indexed by star ID. The diagonal is never stored, so a
//! star can't link to itself and symmetry holds by construction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    nodes: usize,
    links: Vec<bool>,
}

impl Adjacency {
    /// An edgeless graph over `nodes` stars.
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            links: vec![false; nodes * nodes.saturating_sub(1) / 2],
        }
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    fn slot(&self, a: usize, b: usize) -> Option<usize> {
        if a == b || a >= self.nodes || b >= self.nodes {
            return None;
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        Some(i * self.nodes - i * (i + 1) / 2 + (j - i - 1))
    }

    /// Add a pathway. Self-links and out-of-range IDs are ignored.
    pub fn link(&mut self, a: usize, b: usize) {
        if let Some(slot) = self.slot(a, b) {
            self.links[slot] = true;
        }
    }

    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.slot(a, b).is_some_and(|slot| self.links[slot])
    }

    pub fn neighbors(&self, a: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.nodes).filter(move |&b| self.is_linked(a, b))
    }

    pub fn degree(&self, a: usize) -> usize {
        self.neighbors(a).count()
    }

    pub fn edge_count(&self) -> usize {
        self.links.iter().filter(|&&l| l).count()
    }

    /// All pathways as `(low, high)` ID pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.nodes).flat_map(move |i| {
            ((i + 1)..self.nodes)
                .filter(move |&j| self.is_linked(i, j))
                .map(move |j| (i, j))
        })
    }

    /// BFS from `start`; entry `i` is true when star `i` is reachable.
    pub fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut visited = vec![false; self.nodes];
        if start >= self.nodes {
            return visited;
        }
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        visited
    }

    /// True when every star can be reached from star 0.
    pub fn is_connected(&self) -> bool {
        self.reachable_from(0).iter().all(|&r| r)
    }

    /// Fewest-jumps route from `from` to `to`, both ends included.
    ///
    /// Returns `None` if unreachable.
    pub fn shortest_path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from >= self.nodes || to >= self.nodes {
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }

        let mut previous: Vec<Option<usize>> = vec![None; self.nodes];
        let mut visited = vec![false; self.nodes];
        let mut queue = VecDeque::new();
        visited[from] = true;
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                previous[next] = Some(current);
                if next == to {
                    let mut path = vec![to];
                    let mut step = current;
                    path.push(step);
                    while let Some(p) = previous[step] {
                        path.push(p);
                        step = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }

        None
    }
}
