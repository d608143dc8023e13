//! Data structure catalog
//!
//! Each variant carries its display metadata (name, explanation, code
//! snippet) and defines the order in which its visual elements are laid out
//! and visited by searches.

use crate::model::graph::DemoGraph;
use crate::model::tree::Bst;

/// The six structures the canvas can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Array,
    LinkedList,
    Stack,
    Queue,
    Tree,
    Graph,
}

impl Structure {
    pub fn all() -> [Structure; 6] {
        [
            Structure::Array,
            Structure::LinkedList,
            Structure::Stack,
            Structure::Queue,
            Structure::Tree,
            Structure::Graph,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Structure::Array => "Array",
            Structure::LinkedList => "Linked List",
            Structure::Stack => "Stack",
            Structure::Queue => "Queue",
            Structure::Tree => "Binary Tree",
            Structure::Graph => "Graph",
        }
    }

    pub fn empty_label(&self) -> String {
        format!("{} is empty", self.name())
    }

    /// Element order for rendering and searching.
    ///
    /// The stack lists its top first, the tree its BST pre-order, the graph
    /// its deduplicated node list. The rest follow dataset order.
    pub fn view_values(&self, data: &[i64]) -> Vec<i64> {
        match self {
            Structure::Array | Structure::LinkedList | Structure::Queue => data.to_vec(),
            Structure::Stack => data.iter().rev().copied().collect(),
            Structure::Tree => Bst::build(data).preorder(),
            Structure::Graph => DemoGraph::build(data).nodes().to_vec(),
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Structure::Array => {
                "An array stores items at contiguous positions and supports \
                 random access by index. Inserting appends at the end; \
                 deleting removes the first occurrence of a value."
            }
            Structure::LinkedList => {
                "A linked list chains nodes together with pointers. Reaching \
                 the nth element means walking the chain from the head, so \
                 access is sequential rather than random."
            }
            Structure::Stack => {
                "A stack is last-in-first-out: values are pushed onto and \
                 popped off the top. The delete key pops the top element \
                 directly."
            }
            Structure::Queue => {
                "A queue is first-in-first-out: values join at the rear and \
                 leave from the front. The delete key dequeues the front \
                 element directly."
            }
            Structure::Tree => {
                "A binary search tree keeps smaller values in the left \
                 subtree and greater-or-equal values in the right. The \
                 canvas places each node by its depth and in-order position."
            }
            Structure::Graph => {
                "A graph connects nodes with edges. The demo graph chains \
                 the distinct dataset values together and adds a chord from \
                 every second node, then lays them out on a circle."
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Structure::Array => ARRAY_CODE,
            Structure::LinkedList => LINKED_LIST_CODE,
            Structure::Stack => STACK_CODE,
            Structure::Queue => QUEUE_CODE,
            Structure::Tree => TREE_CODE,
            Structure::Graph => GRAPH_CODE,
        }
    }
}

const ARRAY_CODE: &str = r#"// Basic Vec operations
let mut arr = vec![1, 2, 3, 4, 5];

// Random access
let first = arr[0];

// Insert at the end
arr.push(6);

// Remove from the end
arr.pop();

// Insert at an index
arr.insert(2, 42);

// Remove at an index
arr.remove(2);
"#;

const LINKED_LIST_CODE: &str = r#"// Singly linked list with Box
struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

struct LinkedList {
    head: Option<Box<Node>>,
}

impl LinkedList {
    // Add to the front in O(1)
    fn push_front(&mut self, value: i64) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
    }

    // Walk the chain to find a value
    fn contains(&self, value: i64) -> bool {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.value == value {
                return true;
            }
            current = node.next.as_deref();
        }
        false
    }
}
"#;

const STACK_CODE: &str = r#"// Stack on top of Vec
struct Stack {
    items: Vec<i64>,
}

impl Stack {
    // Add to the top
    fn push(&mut self, value: i64) {
        self.items.push(value);
    }

    // Remove from the top
    fn pop(&mut self) -> Option<i64> {
        self.items.pop()
    }

    // View the top element
    fn peek(&self) -> Option<&i64> {
        self.items.last()
    }
}
"#;

const QUEUE_CODE: &str = r#"// Queue on top of VecDeque
use std::collections::VecDeque;

struct Queue {
    items: VecDeque<i64>,
}

impl Queue {
    // Add to the rear
    fn enqueue(&mut self, value: i64) {
        self.items.push_back(value);
    }

    // Remove from the front
    fn dequeue(&mut self) -> Option<i64> {
        self.items.pop_front()
    }

    // View the front element
    fn peek(&self) -> Option<&i64> {
        self.items.front()
    }
}
"#;

const TREE_CODE: &str = r#"// Binary search tree
struct TreeNode {
    value: i64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

fn insert(node: Option<Box<TreeNode>>, value: i64) -> Box<TreeNode> {
    match node {
        None => Box::new(TreeNode {
            value,
            left: None,
            right: None,
        }),
        Some(mut n) => {
            if value < n.value {
                n.left = Some(insert(n.left.take(), value));
            } else {
                n.right = Some(insert(n.right.take(), value));
            }
            n
        }
    }
}

fn search(node: Option<&TreeNode>, value: i64) -> bool {
    match node {
        None => false,
        Some(n) if value == n.value => true,
        Some(n) if value < n.value => search(n.left.as_deref(), value),
        Some(n) => search(n.right.as_deref(), value),
    }
}
"#;

const GRAPH_CODE: &str = r#"// Graph as an adjacency list
use std::collections::HashMap;

struct Graph {
    adjacency: HashMap<i64, Vec<i64>>,
}

impl Graph {
    fn add_vertex(&mut self, vertex: i64) {
        self.adjacency.entry(vertex).or_default();
    }

    // Undirected edge
    fn add_edge(&mut self, a: i64, b: i64) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    fn neighbors(&self, vertex: i64) -> &[i64] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_view_is_top_first() {
        let data = [1, 2, 3];
        assert_eq!(Structure::Stack.view_values(&data), vec![3, 2, 1]);
        assert_eq!(Structure::Array.view_values(&data), vec![1, 2, 3]);
        assert_eq!(Structure::Queue.view_values(&data), vec![1, 2, 3]);
    }

    #[test]
    fn test_tree_view_is_preorder() {
        assert_eq!(Structure::Tree.view_values(&[5, 3, 8, 1]), vec![5, 3, 1, 8]);
    }

    #[test]
    fn test_graph_view_dedups() {
        assert_eq!(Structure::Graph.view_values(&[5, 3, 5, 8]), vec![5, 3, 8]);
    }

    #[test]
    fn test_every_structure_has_metadata() {
        for structure in Structure::all() {
            assert!(!structure.name().is_empty());
            assert!(!structure.explanation().is_empty());
            assert!(!structure.code().is_empty());
        }
    }
}
