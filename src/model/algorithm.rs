//! Algorithm catalog
//!
//! Each variant carries its display metadata and knows which canvas layout
//! it animates on: sorts and searches run on the array layout, traversals on
//! the graph layout.

use crate::model::structure::Structure;

/// The seven algorithms the animator can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    Dfs,
    Bfs,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 7] {
        [
            Algorithm::LinearSearch,
            Algorithm::BinarySearch,
            Algorithm::BubbleSort,
            Algorithm::SelectionSort,
            Algorithm::InsertionSort,
            Algorithm::Dfs,
            Algorithm::Bfs,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Bfs => "Breadth-First Search",
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "O(n)",
            Algorithm::BinarySearch => "O(log n)",
            Algorithm::BubbleSort | Algorithm::SelectionSort | Algorithm::InsertionSort => "O(n²)",
            Algorithm::Dfs | Algorithm::Bfs => "O(V + E)",
        }
    }

    /// The structure layout this algorithm animates on
    pub fn canvas(&self) -> Structure {
        match self {
            Algorithm::Dfs | Algorithm::Bfs => Structure::Graph,
            _ => Structure::Array,
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => {
                "Linear search checks each element in turn until the target \
                 is found or the list ends. The demo searches for the \
                 largest value in the dataset."
            }
            Algorithm::BinarySearch => {
                "Binary search halves a sorted range on every probe. The \
                 demo animates a sorted copy of the dataset and probes for \
                 its middle element; the dataset itself is left unchanged."
            }
            Algorithm::BubbleSort => {
                "Bubble sort repeatedly compares adjacent elements and swaps \
                 them when out of order. Each pass floats the largest \
                 remaining value to the end."
            }
            Algorithm::SelectionSort => {
                "Selection sort grows a sorted prefix by scanning the \
                 unsorted remainder for its minimum and swapping it into \
                 place."
            }
            Algorithm::InsertionSort => {
                "Insertion sort takes each element and shifts greater \
                 elements right until the element drops into its sorted \
                 position."
            }
            Algorithm::Dfs => {
                "Depth-first search follows one branch as far as it goes \
                 before backtracking, using a stack. The demo traverses the \
                 graph built from the distinct dataset values."
            }
            Algorithm::Bfs => {
                "Breadth-first search visits all neighbors at the current \
                 depth before moving deeper, using a queue. The demo \
                 traverses the graph built from the distinct dataset values."
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => LINEAR_SEARCH_CODE,
            Algorithm::BinarySearch => BINARY_SEARCH_CODE,
            Algorithm::BubbleSort => BUBBLE_SORT_CODE,
            Algorithm::SelectionSort => SELECTION_SORT_CODE,
            Algorithm::InsertionSort => INSERTION_SORT_CODE,
            Algorithm::Dfs => DFS_CODE,
            Algorithm::Bfs => BFS_CODE,
        }
    }
}

const LINEAR_SEARCH_CODE: &str = r#"fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    for (i, &value) in arr.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}
"#;

const BINARY_SEARCH_CODE: &str = r#"fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let mut left = 0;
    let mut right = arr.len();

    while left < right {
        let mid = left + (right - left) / 2;
        if arr[mid] == target {
            return Some(mid);
        } else if arr[mid] < target {
            left = mid + 1; // search the right half
        } else {
            right = mid; // search the left half
        }
    }
    None
}
"#;

const BUBBLE_SORT_CODE: &str = r#"fn bubble_sort(arr: &mut [i64]) {
    let mut n = arr.len();
    loop {
        let mut swapped = false;
        for i in 0..n.saturating_sub(1) {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        // Largest element is now in place
        n -= 1;
        if !swapped || n == 0 {
            break;
        }
    }
}
"#;

const SELECTION_SORT_CODE: &str = r#"fn selection_sort(arr: &mut [i64]) {
    for i in 0..arr.len() {
        let mut min_index = i;
        for j in (i + 1)..arr.len() {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            arr.swap(i, min_index);
        }
    }
}
"#;

const INSERTION_SORT_CODE: &str = r#"fn insertion_sort(arr: &mut [i64]) {
    for i in 1..arr.len() {
        let current = arr[i];
        let mut j = i;
        // Shift greater elements one position right
        while j > 0 && arr[j - 1] > current {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = current;
    }
}
"#;

const DFS_CODE: &str = r#"fn dfs(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(vertex) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        order.push(vertex);

        // Reverse so neighbors are visited left to right
        for &neighbor in adjacency[vertex].iter().rev() {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }
    order
}
"#;

const BFS_CODE: &str = r#"use std::collections::VecDeque;

fn bfs(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    visited[start] = true;

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for &neighbor in &adjacency[vertex] {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }
    order
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversals_run_on_the_graph_canvas() {
        assert_eq!(Algorithm::Dfs.canvas(), Structure::Graph);
        assert_eq!(Algorithm::Bfs.canvas(), Structure::Graph);
        assert_eq!(Algorithm::BubbleSort.canvas(), Structure::Array);
        assert_eq!(Algorithm::LinearSearch.canvas(), Structure::Array);
    }

    #[test]
    fn test_every_algorithm_has_metadata() {
        for algorithm in Algorithm::all() {
            assert!(!algorithm.name().is_empty());
            assert!(!algorithm.explanation().is_empty());
            assert!(!algorithm.code().is_empty());
            assert!(!algorithm.complexity().is_empty());
        }
    }
}
