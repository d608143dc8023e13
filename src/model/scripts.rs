//! The Step Animator - script builders
//!
//! Pure functions that turn a dataset (or demo graph) into a `Script`. Each
//! builder keeps a working copy of the values and a highlight vector and
//! pushes a snapshot frame after every visible change, mirroring the way the
//! on-screen elements are retagged between pauses.
//!
//! Every builder returns `None` for empty input: starting an animation on an
//! empty dataset is a silent no-op.

use crate::model::animation::{Frame, Highlight, Outcome, Pause, Script};
use crate::model::graph::DemoGraph;

/// Linear search over elements in view order. Used by the search dialog for
/// every structure; the element order already encodes the structure (stack
/// is top-first, tree is pre-order, graph is deduplicated).
pub fn structure_search(values: &[i64], target: i64) -> Option<Script> {
    if values.is_empty() {
        return None;
    }

    let n = values.len();
    let mut frames = Vec::new();
    let mut marks = vec![Highlight::None; n];

    for i in 0..n {
        marks[i] = Highlight::Comparing;
        frames.push(
            Frame::new(values.to_vec(), marks.clone(), Pause::Full)
                .with_caption(format!("comparing index {}", i)),
        );

        if values[i] == target {
            marks[i] = Highlight::Match;
            frames.push(Frame::new(values.to_vec(), marks.clone(), Pause::Full));
            return Some(Script::new(
                frames,
                Outcome::FoundAt(i),
                format!("found {} at index {}", target, i),
            ));
        }

        marks[i] = Highlight::None;
        frames.push(Frame::new(values.to_vec(), marks.clone(), Pause::Half));
    }

    frames.push(Frame::idle(values.to_vec(), Pause::Full));
    Some(Script::new(
        frames,
        Outcome::NotFound,
        format!("{} not found", target),
    ))
}

/// Linear search demo: the target is the dataset maximum, so it always ends
/// on a match.
pub fn linear_search(values: &[i64]) -> Option<Script> {
    let target = values.iter().copied().max()?;
    structure_search(values, target)
}

/// Binary search demo over a sorted copy of the dataset. The dataset itself
/// is not reordered; only the animation shows sorted values. The target is
/// the middle element of the sorted copy.
pub fn binary_search(values: &[i64]) -> Option<Script> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let target = sorted[sorted.len() / 2];

    let n = sorted.len();
    let mut frames = vec![Frame::idle(sorted.clone(), Pause::Full)
        .with_caption("binary search needs sorted input".to_string())];
    let mut marks = vec![Highlight::None; n];

    let mut left = 0usize;
    let mut right = n - 1;

    loop {
        let mid = (left + right) / 2;

        marks[mid] = Highlight::Comparing;
        frames.push(
            Frame::new(sorted.clone(), marks.clone(), Pause::Full)
                .with_caption(format!("probing middle index {}", mid)),
        );

        if sorted[mid] == target {
            marks[mid] = Highlight::Match;
            frames.push(Frame::new(sorted.clone(), marks.clone(), Pause::Full));
            return Some(Script::new(
                frames,
                Outcome::FoundAt(mid),
                format!("found {} at index {}", target, mid),
            ));
        }

        // Flood the half being discarded, then clear everything
        if sorted[mid] < target {
            for mark in marks.iter_mut().take(mid + 1).skip(left) {
                *mark = Highlight::Comparing;
            }
            frames.push(
                Frame::new(sorted.clone(), marks.clone(), Pause::Full)
                    .with_caption("discarding left half".to_string()),
            );
            left = mid + 1;
        } else {
            for mark in marks.iter_mut().take(right + 1).skip(mid) {
                *mark = Highlight::Comparing;
            }
            frames.push(
                Frame::new(sorted.clone(), marks.clone(), Pause::Full)
                    .with_caption("discarding right half".to_string()),
            );
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }

        marks.fill(Highlight::None);
        frames.push(Frame::new(sorted.clone(), marks.clone(), Pause::Full));

        if left > right {
            break;
        }
    }

    frames.push(Frame::idle(sorted, Pause::Full));
    Some(Script::new(
        frames,
        Outcome::NotFound,
        format!("{} not found", target),
    ))
}

/// Bubble sort: adjacent pairs pulse, swaps get their own frame, the sorted
/// suffix grows from the right. Terminates early when a pass makes no swap.
pub fn bubble_sort(values: &[i64]) -> Option<Script> {
    if values.is_empty() {
        return None;
    }

    let mut arr = values.to_vec();
    let len = arr.len();
    let mut frames = vec![Frame::idle(arr.clone(), Pause::Full)];
    let mut marks = vec![Highlight::None; len];

    let mut n = len;
    loop {
        let mut swapped = false;
        for i in 0..n.saturating_sub(1) {
            marks[i] = Highlight::Comparing;
            marks[i + 1] = Highlight::Comparing;
            frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Half));

            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
                frames.push(
                    Frame::new(arr.clone(), marks.clone(), Pause::Full)
                        .with_caption(format!("swapped indices {} and {}", i, i + 1)),
                );
            }

            marks[i] = Highlight::None;
            marks[i + 1] = Highlight::None;
        }

        // Largest element of this pass is in place
        marks[n - 1] = Highlight::Sorted;
        frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Half));
        n -= 1;

        if !swapped || n == 0 {
            break;
        }
    }

    marks.fill(Highlight::Sorted);
    frames.push(Frame::new(arr, marks, Pause::Full));
    Some(Script::new(frames, Outcome::SortComplete, "sort complete"))
}

/// Selection sort: the outer position holds steady, candidates pulse, the
/// running minimum carries the pivot mark until it is swapped into place.
pub fn selection_sort(values: &[i64]) -> Option<Script> {
    if values.is_empty() {
        return None;
    }

    let mut arr = values.to_vec();
    let len = arr.len();
    let mut frames = vec![Frame::idle(arr.clone(), Pause::Full)];
    let mut marks = vec![Highlight::None; len];

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        marks[i] = Highlight::Current;
        frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Half));

        for j in (i + 1)..len {
            marks[j] = Highlight::Comparing;
            frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Half));

            if arr[j] < arr[min_index] {
                if min_index != i {
                    marks[min_index] = Highlight::None;
                }
                min_index = j;
                marks[min_index] = Highlight::Pivot;
            } else {
                marks[j] = Highlight::None;
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
            frames.push(
                Frame::new(arr.clone(), marks.clone(), Pause::Full)
                    .with_caption(format!("moved minimum into index {}", i)),
            );
            marks[min_index] = Highlight::None;
        }

        marks[i] = Highlight::Sorted;
        frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Half));
    }

    marks.fill(Highlight::Sorted);
    frames.push(Frame::new(arr, marks, Pause::Full));
    Some(Script::new(frames, Outcome::SortComplete, "sort complete"))
}

/// Insertion sort: each element is lifted, greater elements shift right one
/// at a time, then the element drops into its slot.
pub fn insertion_sort(values: &[i64]) -> Option<Script> {
    if values.is_empty() {
        return None;
    }

    let mut arr = values.to_vec();
    let len = arr.len();
    let mut frames = vec![Frame::idle(arr.clone(), Pause::Full)];
    let mut marks = vec![Highlight::None; len];

    for i in 1..len {
        let current = arr[i];
        marks[i] = Highlight::Current;
        frames.push(
            Frame::new(arr.clone(), marks.clone(), Pause::Full)
                .with_caption(format!("inserting value {}", current)),
        );

        let mut j = i;
        while j > 0 && arr[j - 1] > current {
            marks[j - 1] = Highlight::Comparing;
            frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Half));

            arr[j] = arr[j - 1];
            marks[j - 1] = Highlight::None;
            marks[j] = Highlight::Comparing;
            frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Full));
            marks[j] = Highlight::None;
            j -= 1;
        }

        arr[j] = current;
        marks[i] = Highlight::None;
        marks[j] = Highlight::Sorted;
        frames.push(Frame::new(arr.clone(), marks.clone(), Pause::Full));
        marks[j] = Highlight::None;
    }

    marks.fill(Highlight::Sorted);
    frames.push(Frame::new(arr, marks, Pause::Full));
    Some(Script::new(frames, Outcome::SortComplete, "sort complete"))
}

/// Shared traversal choreography: visit nodes in the given order, marking
/// each one permanently.
fn traversal(graph: &DemoGraph, order: Vec<usize>, label: &str) -> Option<Script> {
    if graph.is_empty() {
        return None;
    }

    let values: Vec<i64> = graph.nodes().to_vec();
    let mut frames = vec![Frame::idle(values.clone(), Pause::Full)];
    let mut marks = vec![Highlight::None; values.len()];

    for &index in &order {
        marks[index] = Highlight::Visited;
        frames.push(
            Frame::new(values.clone(), marks.clone(), Pause::Full)
                .with_caption(format!("visiting {}", values[index])),
        );
    }

    let summary = format!("{}: visited {} nodes", label, order.len());
    Some(Script::new(frames, Outcome::TraversalComplete(order), summary))
}

/// Depth-first traversal of the demo graph from its first node
pub fn dfs(graph: &DemoGraph) -> Option<Script> {
    traversal(graph, graph.dfs_order(), "dfs")
}

/// Breadth-first traversal of the demo graph from its first node
pub fn bfs(graph: &DemoGraph) -> Option<Script> {
    traversal(graph, graph.bfs_order(), "bfs")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparing_indices(script: &Script) -> Vec<usize> {
        // First index marked Comparing in each frame that introduces one
        let mut visited = Vec::new();
        for frame in &script.frames {
            for (i, mark) in frame.highlights.iter().enumerate() {
                if *mark == Highlight::Comparing && visited.last() != Some(&i) {
                    visited.push(i);
                }
            }
        }
        visited
    }

    fn match_indices(frame: &Frame) -> Vec<usize> {
        frame
            .highlights
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Highlight::Match)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_search_visits_left_to_right_and_marks_the_match() {
        // Dataset [5, 3, 8], target 8: visits indices 0, 1, 2 and marks
        // exactly index 2 as the match.
        let script = structure_search(&[5, 3, 8], 8).unwrap();

        assert_eq!(comparing_indices(&script), vec![0, 1, 2]);
        assert_eq!(script.outcome, Outcome::FoundAt(2));

        let last = script.frames.last().unwrap();
        assert_eq!(match_indices(last), vec![2]);
        assert_eq!(script.summary, "found 8 at index 2");
    }

    #[test]
    fn test_search_stops_at_first_match() {
        let script = structure_search(&[4, 7, 4, 9], 4).unwrap();
        assert_eq!(script.outcome, Outcome::FoundAt(0));
        assert_eq!(comparing_indices(&script), vec![0]);
    }

    #[test]
    fn test_search_not_found_visits_everything_once() {
        let values = [5, 3, 8, 1];
        let script = structure_search(&values, 42).unwrap();

        assert_eq!(script.outcome, Outcome::NotFound);
        assert_eq!(comparing_indices(&script), vec![0, 1, 2, 3]);
        // No frame ever carries a match mark
        assert!(script.frames.iter().all(|f| match_indices(f).is_empty()));
        assert_eq!(script.summary, "42 not found");
    }

    #[test]
    fn test_linear_search_targets_the_maximum() {
        let script = linear_search(&[2, 9, 5]).unwrap();
        assert_eq!(script.outcome, Outcome::FoundAt(1));
    }

    #[test]
    fn test_binary_search_finds_middle_of_sorted_copy() {
        let script = binary_search(&[9, 1, 5, 3, 7]).unwrap();
        // Sorted copy is [1, 3, 5, 7, 9], target 5 sits at index 2
        assert_eq!(script.outcome, Outcome::FoundAt(2));
        assert_eq!(script.frames[0].values, vec![1, 3, 5, 7, 9]);

        let last = script.frames.last().unwrap();
        assert_eq!(match_indices(last), vec![2]);
    }

    #[test]
    fn test_binary_search_single_element() {
        let script = binary_search(&[7]).unwrap();
        assert_eq!(script.outcome, Outcome::FoundAt(0));
    }

    #[test]
    fn test_sorts_end_non_decreasing() {
        let input = [5, 2, 9, 1, 5, 3];
        for script in [
            bubble_sort(&input).unwrap(),
            selection_sort(&input).unwrap(),
            insertion_sort(&input).unwrap(),
        ] {
            let last = script.frames.last().unwrap();
            assert!(last.values.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(script.outcome, Outcome::SortComplete);
            assert!(last.highlights.iter().all(|m| *m == Highlight::Sorted));

            // Sorting rearranges, never invents values
            let mut expected = input.to_vec();
            expected.sort_unstable();
            let mut got = last.values.clone();
            got.sort_unstable();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_bubble_sort_sorted_input_finishes_in_one_pass() {
        let script = bubble_sort(&[1, 2, 3]).unwrap();
        // No swap frames: every frame keeps the input order
        assert!(script.frames.iter().all(|f| f.values == vec![1, 2, 3]));
    }

    #[test]
    fn test_traversal_marks_accumulate() {
        let graph = DemoGraph::build(&[10, 20, 30, 40]);
        let script = bfs(&graph).unwrap();

        let last = script.frames.last().unwrap();
        assert!(last.highlights.iter().all(|m| *m == Highlight::Visited));
        assert_eq!(
            script.outcome,
            Outcome::TraversalComplete(graph.bfs_order())
        );

        // Visited marks only ever grow
        let mut prev = 0;
        for frame in &script.frames {
            let count = frame
                .highlights
                .iter()
                .filter(|m| **m == Highlight::Visited)
                .count();
            assert!(count >= prev);
            prev = count;
        }
    }

    #[test]
    fn test_dfs_and_bfs_cover_the_graph() {
        let graph = DemoGraph::build(&[1, 2, 3, 4, 5]);
        for script in [dfs(&graph).unwrap(), bfs(&graph).unwrap()] {
            match script.outcome {
                Outcome::TraversalComplete(order) => assert_eq!(order.len(), graph.len()),
                other => panic!("expected traversal outcome, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_dataset_produces_no_script() {
        assert!(structure_search(&[], 1).is_none());
        assert!(linear_search(&[]).is_none());
        assert!(binary_search(&[]).is_none());
        assert!(bubble_sort(&[]).is_none());
        assert!(selection_sort(&[]).is_none());
        assert!(insertion_sort(&[]).is_none());
        let empty = DemoGraph::build(&[]);
        assert!(dfs(&empty).is_none());
        assert!(bfs(&empty).is_none());
    }

    #[test]
    fn test_single_element_sort() {
        let script = bubble_sort(&[3]).unwrap();
        assert_eq!(script.outcome, Outcome::SortComplete);
        assert_eq!(script.frames.last().unwrap().values, vec![3]);
    }
}
