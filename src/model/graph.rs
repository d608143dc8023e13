//! Demo graph built from the dataset
//!
//! Nodes are the dataset values deduplicated in first-seen order. Edges are
//! deterministic so the picture stays stable while a traversal animates:
//! every node connects to its successor, and every even-indexed node gets a
//! chord to the node two places ahead.

/// Undirected demo graph with adjacency lists over node indices
#[derive(Debug, Clone, Default)]
pub struct DemoGraph {
    nodes: Vec<i64>,
    adjacency: Vec<Vec<usize>>,
}

impl DemoGraph {
    /// Build the demo graph from raw dataset values
    pub fn build(values: &[i64]) -> Self {
        let mut nodes: Vec<i64> = Vec::new();
        for &value in values {
            if !nodes.contains(&value) {
                nodes.push(value);
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let connect = |adjacency: &mut Vec<Vec<usize>>, a: usize, b: usize| {
            adjacency[a].push(b);
            adjacency[b].push(a);
        };

        for i in 0..nodes.len() {
            if i + 1 < nodes.len() {
                connect(&mut adjacency, i, i + 1);
            }
            if i + 2 < nodes.len() && i % 2 == 0 {
                connect(&mut adjacency, i, i + 2);
            }
        }

        DemoGraph { nodes, adjacency }
    }

    pub fn nodes(&self) -> &[i64] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges as index pairs (a < b), for the canvas legend
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (a, neighbors) in self.adjacency.iter().enumerate() {
            for &b in neighbors {
                if a < b {
                    edges.push((a, b));
                }
            }
        }
        edges
    }

    /// Depth-first visit order from the first node.
    ///
    /// Uses an explicit stack with neighbors pushed in reverse so they are
    /// visited left to right.
    pub fn dfs_order(&self) -> Vec<usize> {
        if self.nodes.is_empty() {
            return Vec::new();
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![0usize];
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(vertex) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            order.push(vertex);

            for &neighbor in self.adjacency[vertex].iter().rev() {
                if !visited[neighbor] {
                    stack.push(neighbor);
                }
            }
        }

        order
    }

    /// Breadth-first visit order from the first node
    pub fn bfs_order(&self) -> Vec<usize> {
        if self.nodes.is_empty() {
            return Vec::new();
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut queue = std::collections::VecDeque::from([0usize]);
        let mut order = Vec::with_capacity(self.nodes.len());
        visited[0] = true;

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &neighbor in &self.adjacency[vertex] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_dedups_in_first_seen_order() {
        let graph = DemoGraph::build(&[5, 3, 5, 8, 3]);
        assert_eq!(graph.nodes(), &[5, 3, 8]);
    }

    #[test]
    fn test_edges_are_deterministic() {
        let graph = DemoGraph::build(&[1, 2, 3, 4]);
        // Path 0-1-2-3 plus chords 0-2 and 2-... (2 is even, 2+2 == 4 out of range)
        assert_eq!(graph.edges(), vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_dfs_visits_every_node_once() {
        let graph = DemoGraph::build(&[10, 20, 30, 40, 50]);
        let order = graph.dfs_order();

        assert_eq!(order.len(), graph.len());
        assert_eq!(order[0], 0);
        let mut seen = order.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), graph.len());
    }

    #[test]
    fn test_bfs_visits_neighbors_before_descendants() {
        let graph = DemoGraph::build(&[1, 2, 3, 4]);
        // From node 0: neighbors 1 and 2, then 3
        assert_eq!(graph.bfs_order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DemoGraph::build(&[]);
        assert!(graph.is_empty());
        assert!(graph.dfs_order().is_empty());
        assert!(graph.bfs_order().is_empty());
    }
}
