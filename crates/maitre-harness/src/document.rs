#![forbid(unsafe_code)]

//! In-memory document implementing every surface capability.
//!
//! The document keeps an element tree with explicit rectangles, a viewport,
//! a listener table, the mounted overlay panels, and a focus log. Tests drive
//! it directly (create elements, scroll, resize) and read back what the
//! overlay engine did to it.
//!
//! # Panel geometry
//!
//! A mounted panel sits at its frame's `top`/`left`. Its width is the larger
//! of the frame width and its content width; its height is its content
//! height, capped by the frame's `max_height`. Content defaults to one
//! [`ROW_HEIGHT`] row per entry for list panels and to
//! [`DEFAULT_DIALOG_SIZE`] for dialogs, and can be overridden per panel with
//! [`Document::set_content_size`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use maitre_core::element::{ElementId, InstanceId};
use maitre_core::event::{GlobalEvent, KeyCode, KeyEvent, ListenerKind, ListenerOptions, PointerEvent};
use maitre_core::focus::FocusControl;
use maitre_core::geometry::{Rect, Size};
use maitre_core::host::{OverlayHost, PanelDescriptor, PanelFrame, PanelRole};
use maitre_core::listener::{ListenerId, ListenerRegistry};
use maitre_core::measure::Geometry;
use maitre_core::surface::Surface;

/// Height of one entry row in a list panel.
pub const ROW_HEIGHT: f64 = 32.0;
/// Natural size of a dialog panel unless overridden.
pub const DEFAULT_DIALOG_SIZE: Size = Size {
    width: 320.0,
    height: 340.0,
};

/// One row of the listener table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub owner: InstanceId,
    pub kind: ListenerKind,
    pub options: ListenerOptions,
}

/// A panel currently mounted through [`OverlayHost::mount`].
#[derive(Debug, Clone, PartialEq)]
pub struct MountedPanel {
    pub owner: InstanceId,
    pub role: PanelRole,
    pub parent: ElementId,
    pub frame: PanelFrame,
    pub entries: Vec<ElementId>,
    pub content: Size,
    /// Frames applied after the initial mount.
    pub repositions: usize,
}

#[derive(Debug)]
struct Inner {
    next_element: u64,
    next_listener: u64,
    next_seq: u64,
    body: ElementId,
    overlay_root: Option<ElementId>,
    viewport: Size,
    parents: BTreeMap<ElementId, ElementId>,
    rects: BTreeMap<ElementId, Rect>,
    listeners: BTreeMap<ListenerId, Registration>,
    panels: BTreeMap<ElementId, MountedPanel>,
    entry_owner: BTreeMap<ElementId, (ElementId, usize)>,
    focused: Option<ElementId>,
    focus_log: Vec<ElementId>,
}

impl Inner {
    fn alloc(&mut self) -> ElementId {
        let id = ElementId::new(self.next_element);
        self.next_element += 1;
        id
    }

    fn is_attached(&self, element: ElementId) -> bool {
        element == self.body || self.parents.contains_key(&element)
    }

    fn is_descendant(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(el) = current {
            if el == ancestor {
                return true;
            }
            current = self.parents.get(&el).copied();
        }
        false
    }

    fn panel_rect(&self, panel: &MountedPanel) -> Rect {
        let width = panel.frame.width.max(panel.content.width);
        let height = match panel.frame.max_height {
            Some(cap) => panel.content.height.min(cap),
            None => panel.content.height,
        };
        Rect::new(panel.frame.left, panel.frame.top, width, height)
    }

    fn detach(&mut self, element: ElementId) {
        let doomed: Vec<ElementId> = self
            .parents
            .keys()
            .copied()
            .filter(|&el| self.is_descendant(element, el))
            .collect();
        for el in doomed {
            self.parents.remove(&el);
            self.rects.remove(&el);
            self.entry_owner.remove(&el);
            if self.focused == Some(el) {
                self.focused = None;
            }
        }
    }
}

/// An in-memory page.
#[derive(Debug)]
pub struct Document {
    inner: RefCell<Inner>,
}

impl Document {
    /// A page with a body and an overlay root, sized `viewport`.
    pub fn new(viewport: Size) -> Self {
        let doc = Self::without_overlay_root(viewport);
        {
            let mut inner = doc.inner.borrow_mut();
            let root = inner.alloc();
            let body = inner.body;
            inner.parents.insert(root, body);
            inner.overlay_root = Some(root);
        }
        doc
    }

    /// A page whose markup lacks the overlay root; panels mount under the
    /// body.
    pub fn without_overlay_root(viewport: Size) -> Self {
        let mut inner = Inner {
            next_element: 1,
            next_listener: 1,
            next_seq: 1,
            body: ElementId::new(0),
            overlay_root: None,
            viewport,
            parents: BTreeMap::new(),
            rects: BTreeMap::new(),
            listeners: BTreeMap::new(),
            panels: BTreeMap::new(),
            entry_owner: BTreeMap::new(),
            focused: None,
            focus_log: Vec::new(),
        };
        inner.body = inner.alloc();
        Self {
            inner: RefCell::new(inner),
        }
    }

    /// Capabilities of this document for an overlay instance.
    pub fn surface(self: &Rc<Self>) -> Surface {
        Surface::from_shared(self)
    }

    /// The overlay root, if the page has one.
    pub fn overlay_root(&self) -> Option<ElementId> {
        self.inner.borrow().overlay_root
    }

    // -- tree --------------------------------------------------------------

    /// Append a laid-out element under `parent`.
    pub fn append(&self, parent: ElementId, rect: Rect) -> ElementId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.alloc();
        inner.parents.insert(id, parent);
        inner.rects.insert(id, rect);
        id
    }

    /// Append a container without a rectangle of its own (a scroll region,
    /// a form section).
    pub fn append_container(&self, parent: ElementId) -> ElementId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.alloc();
        inner.parents.insert(id, parent);
        id
    }

    /// Remove `element` and its subtree from the page.
    pub fn remove(&self, element: ElementId) {
        self.inner.borrow_mut().detach(element);
    }

    /// Move an element to a new rectangle.
    pub fn set_rect(&self, element: ElementId, rect: Rect) {
        self.inner.borrow_mut().rects.insert(element, rect);
    }

    /// Parent of `element`.
    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.inner.borrow().parents.get(&element).copied()
    }

    // -- events ------------------------------------------------------------

    /// A pointer-down on `target` with the next sequence number.
    pub fn pointer(&self, target: ElementId) -> PointerEvent {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        PointerEvent::new(target, seq)
    }

    /// A document-level pointer-down on `target`.
    pub fn pointer_down(&self, target: ElementId) -> GlobalEvent {
        GlobalEvent::PointerDown(self.pointer(target))
    }

    /// A document-level key press.
    pub fn key_down(&self, code: KeyCode) -> GlobalEvent {
        GlobalEvent::KeyDown(KeyEvent::new(code))
    }

    /// Resize the viewport and return the matching event.
    pub fn resize(&self, viewport: Size) -> GlobalEvent {
        self.inner.borrow_mut().viewport = viewport;
        GlobalEvent::Resize(viewport)
    }

    /// Scroll `container` by `(dx, dy)`: every laid-out descendant moves by
    /// `(-dx, -dy)`. Returns the matching event.
    pub fn scroll_by(&self, container: ElementId, dx: f64, dy: f64) -> GlobalEvent {
        let mut inner = self.inner.borrow_mut();
        let moved: Vec<ElementId> = inner
            .rects
            .keys()
            .copied()
            .filter(|&el| el != container && inner.is_descendant(container, el))
            .collect();
        for el in moved {
            if let Some(rect) = inner.rects.get_mut(&el) {
                *rect = rect.translate(-dx, -dy);
            }
        }
        GlobalEvent::Scroll {
            source: Some(container),
        }
    }

    /// Instances subscribed to `event`, in registration order.
    ///
    /// The list is a snapshot: listeners added or removed while delivering
    /// the event do not change who receives it.
    pub fn route(&self, event: &GlobalEvent) -> Vec<InstanceId> {
        let kind = event.kind();
        let inner = self.inner.borrow();
        let mut owners: Vec<InstanceId> = Vec::new();
        for reg in inner.listeners.values().filter(|reg| reg.kind == kind) {
            if !owners.contains(&reg.owner) {
                owners.push(reg.owner);
            }
        }
        tracing::trace!(
            message = "document.route",
            kind = kind.as_str(),
            receivers = owners.len()
        );
        owners
    }

    // -- listener inspection -----------------------------------------------

    /// Number of live listener registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Live registrations held by `owner`.
    pub fn listeners_of(&self, owner: InstanceId) -> Vec<Registration> {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|reg| reg.owner == owner)
            .copied()
            .collect()
    }

    // -- panel inspection --------------------------------------------------

    /// Roots of all mounted panels.
    pub fn mounted_panels(&self) -> Vec<ElementId> {
        self.inner.borrow().panels.keys().copied().collect()
    }

    /// Snapshot of a mounted panel.
    pub fn panel(&self, panel: ElementId) -> Option<MountedPanel> {
        self.inner.borrow().panels.get(&panel).cloned()
    }

    /// Override a mounted panel's natural content size.
    pub fn set_content_size(&self, panel: ElementId, size: Size) {
        if let Some(mounted) = self.inner.borrow_mut().panels.get_mut(&panel) {
            mounted.content = size;
        }
    }

    // -- focus inspection --------------------------------------------------

    /// Every element focused so far, oldest first.
    pub fn focus_log(&self) -> Vec<ElementId> {
        self.inner.borrow().focus_log.clone()
    }
}

impl Geometry for Document {
    fn measure(&self, element: ElementId) -> Option<Rect> {
        let inner = self.inner.borrow();
        if let Some(panel) = inner.panels.get(&element) {
            return Some(inner.panel_rect(panel));
        }
        if let Some(&(panel, index)) = inner.entry_owner.get(&element) {
            let rect = inner.panel_rect(inner.panels.get(&panel)?);
            return Some(Rect::new(
                rect.x,
                rect.y + index as f64 * ROW_HEIGHT,
                rect.width,
                ROW_HEIGHT,
            ));
        }
        if !inner.is_attached(element) {
            return None;
        }
        inner.rects.get(&element).copied()
    }

    fn viewport_size(&self) -> Size {
        self.inner.borrow().viewport
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        self.inner.borrow().is_descendant(ancestor, node)
    }
}

impl ListenerRegistry for Document {
    fn add_listener(
        &self,
        owner: InstanceId,
        kind: ListenerKind,
        options: ListenerOptions,
    ) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId::new(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.insert(
            id,
            Registration {
                owner,
                kind,
                options,
            },
        );
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(&id).is_some()
    }
}

impl OverlayHost for Document {
    fn attachment_point(&self) -> Option<ElementId> {
        self.inner.borrow().overlay_root
    }

    fn body(&self) -> ElementId {
        self.inner.borrow().body
    }

    fn mount(&self, parent: ElementId, descriptor: PanelDescriptor) -> ElementId {
        let mut inner = self.inner.borrow_mut();
        let panel = inner.alloc();
        inner.parents.insert(panel, parent);
        let entries: Vec<ElementId> = (0..descriptor.entries)
            .map(|index| {
                let entry = inner.alloc();
                inner.parents.insert(entry, panel);
                inner.entry_owner.insert(entry, (panel, index));
                entry
            })
            .collect();
        let content = match descriptor.role {
            PanelRole::Dialog => DEFAULT_DIALOG_SIZE,
            PanelRole::Listbox => {
                Size::new(0.0, descriptor.entries as f64 * ROW_HEIGHT)
            }
        };
        inner.panels.insert(
            panel,
            MountedPanel {
                owner: descriptor.owner,
                role: descriptor.role,
                parent,
                frame: descriptor.frame,
                entries,
                content,
                repositions: 0,
            },
        );
        panel
    }

    fn reposition(&self, panel: ElementId, frame: PanelFrame) {
        if let Some(mounted) = self.inner.borrow_mut().panels.get_mut(&panel) {
            mounted.frame = frame;
            mounted.repositions += 1;
        }
    }

    fn entry(&self, panel: ElementId, index: usize) -> Option<ElementId> {
        let inner = self.inner.borrow();
        inner.panels.get(&panel)?.entries.get(index).copied()
    }

    fn unmount(&self, panel: ElementId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.panels.remove(&panel).is_none() {
            return false;
        }
        inner.detach(panel);
        true
    }
}

impl FocusControl for Document {
    fn focus(&self, element: ElementId) {
        let mut inner = self.inner.borrow_mut();
        inner.focused = Some(element);
        inner.focus_log.push(element);
    }

    fn focused(&self) -> Option<ElementId> {
        self.inner.borrow().focused
    }
}
