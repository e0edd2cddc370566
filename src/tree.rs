//! Tree: arena of components with parent/child ownership.
//!
//! Every component lives in a slot of the [`Tree`] and is addressed by a
//! [`ComponentId`]. A node stores a non-owning parent handle and the ordered
//! handles of the children it owns. Destroying a node destroys its subtree
//! and recycles the slots; ids of destroyed nodes go stale and every
//! operation on a stale id is a silent no-op.
//!
//! Geometry is relative: [`Tree::set_bounds`] stores the local rectangle and
//! derives the absolute origin from the parent's absolute origin *at that
//! moment*. Moving an ancestor does not refresh descendants; run
//! [`Tree::layout`] again to restore absolute positions tree-wide.

use crate::event::{ComponentEvent, EventKind, Notification, Subscribers};
use crate::key::KeyEvent;
use crate::layout::Rect;
use crate::screen::Screen;
use crate::style::{Style, StylePatch};
use crate::widget::Widget;
use crossbeam_channel::Receiver;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Handle to a component in a [`Tree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    index: u32,
    generation: u32,
}

impl ComponentId {
    pub(crate) const fn from_raw_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    const fn slot(self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Structural errors from attaching components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle refers to a destroyed component.
    #[error("component {0} no longer exists")]
    Stale(ComponentId),
    /// A component cannot be its own child.
    #[error("component {0} cannot be attached to itself")]
    SelfAttach(ComponentId),
    /// Attaching would make a component its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle {
        /// The intended parent.
        parent: ComponentId,
        /// The intended child, an ancestor of `parent`.
        child: ComponentId,
    },
}

/// Construction options shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    /// Initial style.
    pub style: Style,
    /// Initial visibility.
    pub visible: bool,
    /// Whether the component can take focus. Some widgets force this on.
    pub focusable: bool,
    /// Requested height, honoured by stacking containers.
    pub height: Option<u16>,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            style: Style::default(),
            visible: true,
            focusable: false,
            height: None,
        }
    }
}

impl ComponentConfig {
    /// Default options with the given style.
    pub fn styled(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set the requested height (builder pattern).
    #[must_use]
    pub const fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }
}

/// Geometry, style and flags common to every component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentState {
    pub(crate) bounds: Rect,
    pub(crate) absolute_x: u16,
    pub(crate) absolute_y: u16,
    pub(crate) style: Style,
    pub(crate) visible: bool,
    pub(crate) focusable: bool,
    pub(crate) focused: bool,
    pub(crate) requested_height: Option<u16>,
}

impl ComponentState {
    fn from_config(config: ComponentConfig, focusable: bool) -> Self {
        Self {
            bounds: Rect::ZERO,
            absolute_x: 0,
            absolute_y: 0,
            style: config.style,
            visible: config.visible,
            focusable: config.focusable || focusable,
            focused: false,
            requested_height: config.height,
        }
    }

    /// Local bounds, relative to the parent.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Local x.
    pub const fn x(&self) -> u16 {
        self.bounds.x
    }

    /// Local y.
    pub const fn y(&self) -> u16 {
        self.bounds.y
    }

    /// Width in columns.
    pub const fn width(&self) -> u16 {
        self.bounds.width
    }

    /// Height in rows.
    pub const fn height(&self) -> u16 {
        self.bounds.height
    }

    /// Screen-space x of the top-left corner.
    pub const fn absolute_x(&self) -> u16 {
        self.absolute_x
    }

    /// Screen-space y of the top-left corner.
    pub const fn absolute_y(&self) -> u16 {
        self.absolute_y
    }

    /// Bounds in screen space.
    pub const fn absolute_rect(&self) -> Rect {
        Rect::new(self.absolute_x, self.absolute_y, self.bounds.width, self.bounds.height)
    }

    /// Current style.
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Whether the component is drawn.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the component can take focus.
    pub const fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Whether the component is focused.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Height requested at construction, if any.
    pub const fn requested_height(&self) -> Option<u16> {
        self.requested_height
    }
}

/// Height hints for the children of a component being arranged.
pub struct ChildMeasure<'a> {
    tree: &'a Tree,
    children: &'a [ComponentId],
}

impl ChildMeasure<'_> {
    /// Number of children.
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if there are no children.
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Preferred height of child `index` when given `width` columns.
    ///
    /// The requested height wins; otherwise the widget's own content
    /// height, if it has one.
    pub fn height_hint(&self, index: usize, width: u16) -> Option<u16> {
        let node = self.tree.node(*self.children.get(index)?)?;
        node.state
            .requested_height
            .or_else(|| node.widget.content_height(width))
    }
}

struct Node {
    state: ComponentState,
    widget: Box<dyn Widget>,
    parent: Option<ComponentId>,
    children: Vec<ComponentId>,
    subscribers: Subscribers,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena owning a forest of components.
#[derive(Default)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live components.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree holds no components.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a detached component with default options.
    pub fn insert<W: Widget>(&mut self, widget: W) -> ComponentId {
        self.insert_with(widget, ComponentConfig::default())
    }

    /// Insert a detached component with zero geometry.
    pub fn insert_with<W: Widget>(&mut self, widget: W, config: ComponentConfig) -> ComponentId {
        let state = ComponentState::from_config(config, widget.focusable());
        let node = Node {
            state,
            widget: Box::new(widget),
            parent: None,
            children: Vec::new(),
            subscribers: Subscribers::default(),
        };

        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            ComponentId::from_raw_parts(index, slot.generation)
        } else {
            let index = u32::try_from(self.slots.len()).expect("component arena exhausted");
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            ComponentId::from_raw_parts(index, 0)
        };
        self.len += 1;
        debug!(component = %id, widget = std::any::type_name::<W>(), "inserted component");
        id
    }

    fn node(&self, id: ComponentId) -> Option<&Node> {
        self.slots
            .get(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: ComponentId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Check if `id` still refers to a live component.
    pub fn is_alive(&self, id: ComponentId) -> bool {
        self.node(id).is_some()
    }

    /// Common state of a component.
    pub fn state(&self, id: ComponentId) -> Option<&ComponentState> {
        self.node(id).map(|node| &node.state)
    }

    /// Parent of a component.
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Children of a component in insertion order. Empty for stale ids.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Screen-space origin of a component.
    pub fn absolute_position(&self, id: ComponentId) -> Option<(u16, u16)> {
        self.state(id).map(|s| (s.absolute_x, s.absolute_y))
    }

    /// Typed access to a component's widget.
    pub fn widget<W: Widget>(&self, id: ComponentId) -> Option<&W> {
        self.node(id)
            .and_then(|node| (*node.widget).as_any().downcast_ref::<W>())
    }

    /// Mutate a component's widget.
    ///
    /// Notifications the widget raises inside `f` are delivered once `f`
    /// returns. Returns `None` if `id` is stale or not a `W`.
    pub fn update<W: Widget, R>(&mut self, id: ComponentId, f: impl FnOnce(&mut W) -> R) -> Option<R> {
        let node = self.node_mut(id)?;
        let widget = (*node.widget).as_any_mut().downcast_mut::<W>()?;
        let result = f(widget);
        self.flush_widget_events(id);
        Some(result)
    }

    /// Observe every notification raised on a component.
    pub fn subscribe(&mut self, id: ComponentId) -> Option<Receiver<Notification>> {
        self.node_mut(id).map(|node| node.subscribers.subscribe(None))
    }

    /// Observe only the listed kinds of notification.
    pub fn subscribe_filtered(
        &mut self,
        id: ComponentId,
        kinds: &[EventKind],
    ) -> Option<Receiver<Notification>> {
        self.node_mut(id).map(|node| node.subscribers.subscribe(Some(kinds)))
    }

    fn emit(&mut self, id: ComponentId, event: &ComponentEvent) {
        if let Some(node) = self.node_mut(id) {
            node.subscribers.emit(id, event);
        }
    }

    fn flush_widget_events(&mut self, id: ComponentId) {
        if let Some(node) = self.node_mut(id) {
            for event in node.widget.take_events() {
                node.subscribers.emit(id, &event);
            }
        }
    }

    /// Assign local bounds and derive the absolute origin from the parent.
    ///
    /// Children are not touched; call [`layout`](Self::layout) to propagate.
    pub fn set_bounds(&mut self, id: ComponentId, bounds: Rect) {
        let origin = self
            .parent(id)
            .and_then(|parent| self.absolute_position(parent))
            .unwrap_or((0, 0));
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.state.bounds = bounds;
        node.state.absolute_x = origin.0.saturating_add(bounds.x);
        node.state.absolute_y = origin.1.saturating_add(bounds.y);
        node.widget.resized(bounds.width, bounds.height);

        self.emit(
            id,
            &ComponentEvent::Resize {
                width: bounds.width,
                height: bounds.height,
            },
        );
        self.flush_widget_events(id);
    }

    /// Shallow-merge a style patch.
    pub fn set_style(&mut self, id: ComponentId, patch: &StylePatch) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.state.style.merge(patch);
        self.emit(id, &ComponentEvent::StyleChange);
    }

    /// Make a component visible.
    pub fn show(&mut self, id: ComponentId) {
        self.set_visible(id, true);
    }

    /// Hide a component. It keeps its layout slot.
    pub fn hide(&mut self, id: ComponentId) {
        self.set_visible(id, false);
    }

    fn set_visible(&mut self, id: ComponentId, visible: bool) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.state.visible = visible;
        let event = if visible { ComponentEvent::Show } else { ComponentEvent::Hide };
        self.emit(id, &event);
    }

    /// Focus a component. Non-focusable components ignore this.
    ///
    /// Other focused components are left alone; see
    /// [`FocusRing`](crate::focus::FocusRing) for single-focus routing.
    pub fn focus(&mut self, id: ComponentId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if !node.state.focusable {
            return;
        }
        node.state.focused = true;
        self.emit(id, &ComponentEvent::Focus);
    }

    /// Remove focus from a component.
    pub fn blur(&mut self, id: ComponentId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.state.focused = false;
        self.emit(id, &ComponentEvent::Blur);
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is detached from it first.
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), TreeError> {
        if !self.is_alive(parent) {
            return Err(TreeError::Stale(parent));
        }
        if !self.is_alive(child) {
            return Err(TreeError::Stale(child));
        }
        if parent == child {
            return Err(TreeError::SelfAttach(child));
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            warn!(%parent, %child, "rejected attachment that would create a cycle");
            return Err(TreeError::Cycle { parent, child });
        }

        if let Some(previous) = self.parent(child) {
            self.remove_child(previous, child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        debug!(%parent, %child, "attached child");
        self.emit(parent, &ComponentEvent::ChildAdded(child));
        Ok(())
    }

    /// Detach `child` from `parent`. Returns `false` if it was not a child.
    pub fn remove_child(&mut self, parent: ComponentId, child: ComponentId) -> bool {
        let Some(node) = self.node_mut(parent) else {
            return false;
        };
        let Some(pos) = node.children.iter().position(|c| *c == child) else {
            return false;
        };
        node.children.remove(pos);
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
        debug!(%parent, %child, "detached child");
        self.emit(parent, &ComponentEvent::ChildRemoved(child));
        true
    }

    /// Iterate from the parent of `id` up to the root.
    pub fn ancestors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        std::iter::successors(self.parent(id), |current| self.parent(*current))
    }

    /// `id` and all its descendants in pre-order.
    pub fn descendants(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !self.is_alive(current) {
                continue;
            }
            out.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        out
    }

    /// Whether a component and all its ancestors are visible.
    pub fn is_shown(&self, id: ComponentId) -> bool {
        self.state(id).is_some_and(ComponentState::is_visible)
            && self
                .ancestors(id)
                .all(|ancestor| self.state(ancestor).is_some_and(ComponentState::is_visible))
    }

    /// Recompute geometry of the subtree under `id`.
    ///
    /// The widget decides placement: a pass-through widget leaves child
    /// bounds alone and recurses into every child; an arranging widget
    /// assigns bounds to a prefix of its children and only those are laid
    /// out further.
    pub fn layout(&mut self, id: ComponentId) {
        let Some(node) = self.node(id) else {
            return;
        };
        let children = node.children.clone();
        let plan = node.widget.arrange(
            &node.state,
            &ChildMeasure {
                tree: self,
                children: &children,
            },
        );
        trace!(component = %id, children = children.len(), arranged = plan.is_some(), "layout");

        match plan {
            None => {
                for child in children {
                    self.layout(child);
                }
            }
            Some(rects) => {
                for (child, rect) in children.into_iter().zip(rects) {
                    self.set_bounds(child, rect);
                    self.layout(child);
                }
            }
        }
    }

    /// Draw a component and then its children, in insertion order.
    ///
    /// Hidden components skip themselves and their whole subtree.
    pub fn render(&self, id: ComponentId, screen: &mut dyn Screen) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !node.state.visible {
            return;
        }
        node.widget.render(&node.state, screen);
        for child in &node.children {
            self.render(*child, screen);
        }
    }

    /// Offer a key to a component. Returns whether it was consumed.
    pub fn handle_key(&mut self, id: ComponentId, key: KeyEvent) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let handled = node.widget.handle_key(&node.state, key);
        self.flush_widget_events(id);
        handled
    }

    /// Destroy a component and its subtree.
    ///
    /// Detaches from the parent, destroys children first, then delivers
    /// [`ComponentEvent::Destroy`] and drops every subscription. Destroying
    /// a stale id does nothing.
    pub fn destroy(&mut self, id: ComponentId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent(id) {
            self.remove_child(parent, id);
        }
        for child in self.children(id).to_vec() {
            self.destroy(child);
        }

        self.emit(id, &ComponentEvent::Destroy);
        let slot = &mut self.slots[id.slot()];
        slot.node = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        debug!(component = %id, "destroyed component");
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::key::KeyCode;
    use crate::screen::CellStyle;

    /// Draws its label at its origin; consumes `Enter`.
    #[derive(Default)]
    struct Probe {
        label: char,
        keys: usize,
    }

    impl Widget for Probe {
        fn render(&self, state: &ComponentState, screen: &mut dyn Screen) {
            screen.set_cell(state.absolute_x(), state.absolute_y(), self.label, &CellStyle::PLAIN);
        }

        fn handle_key(&mut self, _state: &ComponentState, key: KeyEvent) -> bool {
            self.keys += 1;
            key.code == KeyCode::Enter
        }
    }

    fn probe(label: char) -> Probe {
        Probe { label, keys: 0 }
    }

    fn events(rx: &Receiver<Notification>) -> Vec<ComponentEvent> {
        rx.try_iter().map(|n| n.event).collect()
    }

    #[test]
    fn test_absolute_position_follows_parent() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let child = tree.insert(probe('c'));
        tree.add_child(root, child).unwrap();

        tree.set_bounds(root, Rect::new(5, 3, 20, 10));
        tree.set_bounds(child, Rect::new(2, 1, 4, 1));

        assert_eq!(tree.absolute_position(root), Some((5, 3)));
        assert_eq!(tree.absolute_position(child), Some((7, 4)));
    }

    #[test]
    fn test_moving_parent_does_not_refresh_children() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let child = tree.insert(probe('c'));
        tree.add_child(root, child).unwrap();
        tree.set_bounds(child, Rect::new(1, 1, 1, 1));

        tree.set_bounds(root, Rect::new(10, 10, 5, 5));
        assert_eq!(tree.absolute_position(child), Some((1, 1)));
    }

    #[test]
    fn test_set_bounds_emits_resize() {
        let mut tree = Tree::new();
        let id = tree.insert(probe('a'));
        let rx = tree.subscribe(id).unwrap();

        tree.set_bounds(id, Rect::new(0, 0, 7, 2));
        assert_eq!(events(&rx), vec![ComponentEvent::Resize { width: 7, height: 2 }]);
    }

    #[test]
    fn test_focus_requires_focusable() {
        let mut tree = Tree::new();
        let plain = tree.insert(probe('a'));
        let focusable = tree.insert_with(
            probe('b'),
            ComponentConfig {
                focusable: true,
                ..ComponentConfig::default()
            },
        );
        let rx = tree.subscribe(plain).unwrap();

        tree.focus(plain);
        tree.focus(focusable);
        assert!(!tree.state(plain).unwrap().is_focused());
        assert!(tree.state(focusable).unwrap().is_focused());
        assert!(events(&rx).is_empty());

        tree.blur(plain);
        assert_eq!(events(&rx), vec![ComponentEvent::Blur]);
    }

    #[test]
    fn test_focus_does_not_blur_others() {
        let mut tree = Tree::new();
        let config = ComponentConfig {
            focusable: true,
            ..ComponentConfig::default()
        };
        let a = tree.insert_with(probe('a'), config.clone());
        let b = tree.insert_with(probe('b'), config);
        tree.focus(a);
        tree.focus(b);
        assert!(tree.state(a).unwrap().is_focused());
        assert!(tree.state(b).unwrap().is_focused());
    }

    #[test]
    fn test_add_and_remove_child() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let a = tree.insert(probe('a'));
        let b = tree.insert(probe('b'));
        let rx = tree.subscribe(root).unwrap();

        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.parent(a), Some(root));

        assert!(tree.remove_child(root, a));
        assert!(!tree.remove_child(root, a));
        assert_eq!(tree.parent(a), None);
        assert_eq!(
            events(&rx),
            vec![
                ComponentEvent::ChildAdded(a),
                ComponentEvent::ChildAdded(b),
                ComponentEvent::ChildRemoved(a),
            ]
        );
    }

    #[test]
    fn test_reparenting_detaches_from_old_parent() {
        let mut tree = Tree::new();
        let first = tree.insert(probe('1'));
        let second = tree.insert(probe('2'));
        let child = tree.insert(probe('c'));

        tree.add_child(first, child).unwrap();
        tree.add_child(second, child).unwrap();
        assert!(tree.children(first).is_empty());
        assert_eq!(tree.children(second), &[child]);
        assert_eq!(tree.parent(child), Some(second));
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let mid = tree.insert(probe('m'));
        let leaf = tree.insert(probe('l'));
        tree.add_child(root, mid).unwrap();
        tree.add_child(mid, leaf).unwrap();

        assert_eq!(
            tree.add_child(leaf, root),
            Err(TreeError::Cycle {
                parent: leaf,
                child: root
            })
        );
        assert_eq!(tree.add_child(mid, mid), Err(TreeError::SelfAttach(mid)));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn test_destroy_is_post_order_and_idempotent() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let parent = tree.insert(probe('p'));
        let child = tree.insert(probe('c'));
        tree.add_child(root, parent).unwrap();
        tree.add_child(parent, child).unwrap();

        let parent_rx = tree.subscribe(parent).unwrap();
        let child_rx = tree.subscribe(child).unwrap();

        tree.destroy(parent);
        assert_eq!(events(&child_rx), vec![ComponentEvent::Destroy]);
        assert_eq!(
            events(&parent_rx),
            vec![ComponentEvent::ChildRemoved(child), ComponentEvent::Destroy]
        );
        assert!(parent_rx.recv().is_err());

        assert!(!tree.is_alive(parent));
        assert!(!tree.is_alive(child));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.len(), 1);

        tree.destroy(parent);
        assert_eq!(tree.parent(parent), None);
        assert!(tree.children(parent).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_stale_ids_do_not_alias_recycled_slots() {
        let mut tree = Tree::new();
        let old = tree.insert(probe('o'));
        tree.destroy(old);
        let new = tree.insert(probe('n'));

        assert_ne!(old, new);
        assert!(!tree.is_alive(old));
        tree.hide(old);
        assert!(tree.state(new).unwrap().is_visible());
        assert_eq!(tree.add_child(new, old), Err(TreeError::Stale(old)));
    }

    #[test]
    fn test_render_order_and_hidden_subtrees() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let a = tree.insert(probe('a'));
        let b = tree.insert(probe('b'));
        let hidden = tree.insert(probe('h'));
        let under_hidden = tree.insert(probe('u'));
        for child in [a, b, hidden] {
            tree.add_child(root, child).unwrap();
        }
        tree.add_child(hidden, under_hidden).unwrap();

        tree.set_bounds(root, Rect::new(0, 0, 6, 1));
        tree.set_bounds(a, Rect::new(1, 0, 1, 1));
        // Overlaps `a`; drawn later so it wins.
        tree.set_bounds(b, Rect::new(1, 0, 1, 1));
        tree.set_bounds(hidden, Rect::new(3, 0, 1, 1));
        tree.set_bounds(under_hidden, Rect::new(1, 0, 1, 1));
        tree.hide(hidden);

        let mut buffer = Buffer::new(6, 1);
        tree.render(root, &mut buffer);
        assert_eq!(buffer.row_text(0), "rb    ");
        assert!(!tree.is_shown(under_hidden));
    }

    #[test]
    fn test_default_layout_recurses_without_moving() {
        let mut tree = Tree::new();
        let root = tree.insert(probe('r'));
        let child = tree.insert(probe('c'));
        tree.add_child(root, child).unwrap();
        tree.set_bounds(child, Rect::new(2, 2, 1, 1));

        tree.layout(root);
        assert_eq!(tree.state(child).unwrap().bounds(), Rect::new(2, 2, 1, 1));
    }

    #[test]
    fn test_handle_key_and_typed_access() {
        let mut tree = Tree::new();
        let id = tree.insert(probe('k'));

        assert!(tree.handle_key(id, KeyEvent::new(KeyCode::Enter)));
        assert!(!tree.handle_key(id, KeyEvent::new(KeyCode::Esc)));
        assert_eq!(tree.widget::<Probe>(id).unwrap().keys, 2);
        assert_eq!(tree.update(id, |p: &mut Probe| std::mem::take(&mut p.keys)), Some(2));
    }

    #[test]
    fn test_set_style_merges_and_notifies() {
        let mut tree = Tree::new();
        let id = tree.insert(probe('s'));
        let rx = tree.subscribe_filtered(id, &[EventKind::StyleChange]).unwrap();

        tree.set_style(
            id,
            &StylePatch {
                border: Some(true),
                ..StylePatch::default()
            },
        );
        tree.show(id);
        assert!(tree.state(id).unwrap().style().border);
        assert_eq!(events(&rx), vec![ComponentEvent::StyleChange]);
    }
}
