//! Demo binary search tree built from the dataset
//!
//! Values are inserted in dataset order: smaller values go left, equal or
//! greater go right. The canvas positions nodes by depth and in-order rank;
//! searches visit nodes in pre-order, matching the render order.

/// Node in the arena-backed BST
#[derive(Debug, Clone)]
struct BstNode {
    value: i64,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree over the dataset values
#[derive(Debug, Clone, Default)]
pub struct Bst {
    nodes: Vec<BstNode>,
}

/// A positioned tree node for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCell {
    pub value: i64,
    /// Distance from the root (root is 0)
    pub depth: usize,
    /// In-order rank, used as the horizontal slot on the canvas
    pub order: usize,
}

impl Bst {
    /// Build a BST by inserting values in order
    pub fn build(values: &[i64]) -> Self {
        let mut tree = Bst { nodes: Vec::new() };
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    fn insert(&mut self, value: i64) {
        let new_index = self.nodes.len();
        let node = BstNode {
            value,
            left: None,
            right: None,
        };

        if self.nodes.is_empty() {
            self.nodes.push(node);
            return;
        }

        let mut current = 0;
        loop {
            if value < self.nodes[current].value {
                match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        self.nodes[current].left = Some(new_index);
                        break;
                    }
                }
            } else {
                match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        self.nodes[current].right = Some(new_index);
                        break;
                    }
                }
            }
        }
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values in pre-order (the order the canvas and searches visit nodes)
    pub fn preorder(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if !self.nodes.is_empty() {
            self.preorder_visit(0, &mut out);
        }
        out
    }

    fn preorder_visit(&self, index: usize, out: &mut Vec<i64>) {
        out.push(self.nodes[index].value);
        if let Some(left) = self.nodes[index].left {
            self.preorder_visit(left, out);
        }
        if let Some(right) = self.nodes[index].right {
            self.preorder_visit(right, out);
        }
    }

    /// Positioned cells in pre-order, aligned with `preorder()` indices
    pub fn layout(&self) -> Vec<TreeCell> {
        let mut ranks = vec![0usize; self.nodes.len()];
        let mut next_rank = 0usize;
        if !self.nodes.is_empty() {
            self.inorder_rank(0, &mut ranks, &mut next_rank);
        }

        let mut cells = Vec::with_capacity(self.nodes.len());
        if !self.nodes.is_empty() {
            self.layout_visit(0, 0, &ranks, &mut cells);
        }
        cells
    }

    fn inorder_rank(&self, index: usize, ranks: &mut [usize], next_rank: &mut usize) {
        if let Some(left) = self.nodes[index].left {
            self.inorder_rank(left, ranks, next_rank);
        }
        ranks[index] = *next_rank;
        *next_rank += 1;
        if let Some(right) = self.nodes[index].right {
            self.inorder_rank(right, ranks, next_rank);
        }
    }

    fn layout_visit(&self, index: usize, depth: usize, ranks: &[usize], cells: &mut Vec<TreeCell>) {
        cells.push(TreeCell {
            value: self.nodes[index].value,
            depth,
            order: ranks[index],
        });
        if let Some(left) = self.nodes[index].left {
            self.layout_visit(left, depth + 1, ranks, cells);
        }
        if let Some(right) = self.nodes[index].right {
            self.layout_visit(right, depth + 1, ranks, cells);
        }
    }

    /// Number of levels in the tree
    pub fn height(&self) -> usize {
        self.layout()
            .iter()
            .map(|cell| cell.depth + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preorder_follows_insert_order() {
        // 5 at the root, 3 left, 8 right, 1 under 3, 9 under 8
        let tree = Bst::build(&[5, 3, 8, 1, 9]);
        assert_eq!(tree.preorder(), vec![5, 3, 1, 8, 9]);
    }

    #[test]
    fn test_duplicates_go_right() {
        let tree = Bst::build(&[5, 5, 5]);
        assert_eq!(tree.preorder(), vec![5, 5, 5]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_layout_ranks_are_inorder() {
        let tree = Bst::build(&[5, 3, 8]);
        let cells = tree.layout();

        // Pre-order cells: 5, 3, 8 with in-order ranks 1, 0, 2
        assert_eq!(cells[0], TreeCell { value: 5, depth: 0, order: 1 });
        assert_eq!(cells[1], TreeCell { value: 3, depth: 1, order: 0 });
        assert_eq!(cells[2], TreeCell { value: 8, depth: 1, order: 2 });
    }

    #[test]
    fn test_empty_tree() {
        let tree = Bst::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.preorder().is_empty());
        assert_eq!(tree.height(), 0);
    }
}
