//! Single-focus coordination.
//!
//! The tree lets any number of components hold focus at once. [`FocusRing`]
//! is the host-side collaborator that keeps exactly one target: it blurs the
//! previous component before focusing the next, cycles through focusable
//! components with Tab / `BackTab`, and routes keys to whoever holds focus.

use crate::key::{KeyCode, KeyEvent};
use crate::tree::{ComponentId, ComponentState, Tree};
use tracing::debug;

/// Tracks the focused component below a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    root: ComponentId,
    current: Option<ComponentId>,
}

impl FocusRing {
    /// A ring over the subtree under `root`, with nothing focused.
    pub const fn new(root: ComponentId) -> Self {
        Self { root, current: None }
    }

    /// Root of the cycled subtree.
    pub const fn root(&self) -> ComponentId {
        self.root
    }

    /// The focused component, if any.
    pub const fn current(&self) -> Option<ComponentId> {
        self.current
    }

    /// Forget a target that has been destroyed.
    fn prune(&mut self, tree: &Tree) {
        if self.current.is_some_and(|id| !tree.is_alive(id)) {
            debug!(component = ?self.current, "dropping stale focus target");
            self.current = None;
        }
    }

    /// Move focus to `id`, blurring the previous target first.
    ///
    /// Returns `false` and leaves focus unchanged when `id` is stale or not
    /// focusable.
    pub fn focus(&mut self, tree: &mut Tree, id: ComponentId) -> bool {
        self.prune(tree);
        if !tree.state(id).is_some_and(ComponentState::is_focusable) {
            return false;
        }
        if let Some(previous) = self.current.filter(|previous| *previous != id) {
            tree.blur(previous);
        }
        tree.focus(id);
        self.current = Some(id);
        debug!(component = %id, "focus moved");
        true
    }

    /// Blur the current target, leaving nothing focused.
    pub fn blur(&mut self, tree: &mut Tree) {
        if let Some(previous) = self.current.take() {
            tree.blur(previous);
        }
    }

    /// Visible focusable components under the root, in pre-order.
    pub fn candidates(&self, tree: &Tree) -> Vec<ComponentId> {
        tree.descendants(self.root)
            .into_iter()
            .filter(|id| tree.state(*id).is_some_and(ComponentState::is_focusable) && tree.is_shown(*id))
            .collect()
    }

    /// Focus the candidate after the current one, wrapping around.
    pub fn focus_next(&mut self, tree: &mut Tree) -> Option<ComponentId> {
        self.cycle(tree, |pos, len| pos.map_or(0, |p| (p + 1) % len))
    }

    /// Focus the candidate before the current one, wrapping around.
    pub fn focus_prev(&mut self, tree: &mut Tree) -> Option<ComponentId> {
        self.cycle(tree, |pos, len| pos.map_or(len - 1, |p| (p + len - 1) % len))
    }

    fn cycle(&mut self, tree: &mut Tree, step: impl FnOnce(Option<usize>, usize) -> usize) -> Option<ComponentId> {
        self.prune(tree);
        let candidates = self.candidates(tree);
        if candidates.is_empty() {
            return None;
        }
        let pos = self
            .current
            .and_then(|current| candidates.iter().position(|id| *id == current));
        let next = candidates[step(pos, candidates.len())];
        self.focus(tree, next);
        Some(next)
    }

    /// Deliver a key to the focused component.
    ///
    /// Tab and `BackTab` cycle focus when the target does not consume them.
    /// Returns whether the key was handled.
    pub fn route_key(&mut self, tree: &mut Tree, key: KeyEvent) -> bool {
        self.prune(tree);
        if let Some(current) = self.current {
            if tree.handle_key(current, key) {
                return true;
            }
        }
        match key.code {
            KeyCode::Tab => self.focus_next(tree).is_some(),
            KeyCode::BackTab => self.focus_prev(tree).is_some(),
            _ => false,
        }
    }
}
