//! BSP tree navigation utilities for interactive visualization.

use bsp_index::{BspNode, BspTree};
use macroquad::prelude::*;

use crate::draw_subtree;

/// Direction taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    First,
    Second,
}

/// Interactive BSP tree navigator for exploring tree structure.
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl Default for TreeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Returns the current depth in the tree.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Attempts to navigate to the first child. Returns true if successful.
    pub fn go_first(&mut self, tree: &BspTree) -> bool {
        if let Some(node) = self.current_node(tree) {
            if node.first().is_some() {
                self.path.push(Direction::First);
                return true;
            }
        }
        false
    }

    /// Attempts to navigate to the second child. Returns true if successful.
    pub fn go_second(&mut self, tree: &BspTree) -> bool {
        if let Some(node) = self.current_node(tree) {
            if node.second().is_some() {
                self.path.push(Direction::Second);
                return true;
            }
        }
        false
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root node.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update(&mut self, tree: &BspTree) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::F) {
            changed = self.go_first(tree);
        }
        if is_key_pressed(KeyCode::S) {
            changed = self.go_second(tree);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::R) {
            if !self.path.is_empty() {
                self.go_root();
                changed = true;
            }
        }

        changed
    }

    /// Returns a reference to the current node, if the path is valid.
    pub fn current_node<'a>(&self, tree: &'a BspTree) -> Option<&'a BspNode> {
        get_node_at_path(tree.root(), &self.path)
    }

    /// Highlights the points of the current subtree.
    pub fn render(&self, tree: &BspTree) {
        if let Some(node) = self.current_node(tree) {
            draw_subtree(node, crate::POINT_RADIUS + 2.0, ORANGE);
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui(&self, tree: &BspTree, y_offset: f32) {
        let (node_points, has_first, has_second, is_leaf) =
            if let Some(node) = self.current_node(tree) {
                (
                    node.point_count(),
                    node.first().is_some(),
                    node.second().is_some(),
                    node.is_leaf(),
                )
            } else {
                (0, false, false, true)
            };

        // Build path string
        let path_str = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|d| match d {
                    Direction::First => "F",
                    Direction::Second => "S",
                })
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        draw_text(
            &format!("Subtree: {} points", node_points),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_str, self.path.len()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "Children: {}{}{}",
                if has_first { "[F]irst " } else { "" },
                if has_second { "[S]econd " } else { "" },
                if is_leaf { "(leaf)" } else { "" }
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            if is_leaf { ORANGE } else { GREEN },
        );
        draw_text(
            "[P]arent | [R]oot",
            10.0,
            y_offset + 60.0,
            16.0,
            DARKGRAY,
        );
    }
}

/// Navigates to a node following the path, returns None if path is invalid.
fn get_node_at_path<'a>(root: &'a BspNode, path: &[Direction]) -> Option<&'a BspNode> {
    let mut current = root;
    for dir in path {
        current = match dir {
            Direction::First => current.first()?,
            Direction::Second => current.second()?,
        };
    }
    Some(current)
}
