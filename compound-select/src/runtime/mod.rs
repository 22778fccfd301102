//! Runtime: render, lay out, and dispatch pointer input to a view tree.
//!
//! Every event is handled to completion before the call returns: document
//! listeners and activation handlers run, then the view is re-rendered, so
//! the next event always sees the state the previous one produced.

mod config;
mod mount;
mod render;

use std::sync::atomic::{AtomicU64, Ordering};

use selectdom::layout::layout;
use selectdom::render::render_to_lines;
use selectdom::{
    find_by_data, hit_path, hit_test, ClickEvent, Document, Element, Input, LayoutResult,
    MouseButton, PointerEvent, Rect,
};

pub use config::RuntimeConfig;
pub use mount::{boundary_id, MountTable};
pub use render::RenderCx;

use crate::error::SelectError;
use crate::handlers::HandlerRegistry;
use crate::scope::Scope;
use crate::state::SelectChannel;
use crate::view::View;

static NEXT_ROOT: AtomicU64 = AtomicU64::new(0);

/// Root element ids are unique per runtime so that runtimes sharing a
/// document can tell their trees apart.
fn next_root_id() -> String {
    let id = NEXT_ROOT.fetch_add(1, Ordering::Relaxed);
    format!("root-{id}")
}

pub struct Runtime {
    config: RuntimeConfig,
    view: Box<dyn Fn() -> View>,
    document: Document,
    mounts: MountTable,
    handlers: HandlerRegistry,
    root_id: String,
    root: Element,
    layout: LayoutResult,
    /// Clickable element and button of the last pointer-down, awaiting release.
    pressed: Option<(String, MouseButton)>,
}

impl Runtime {
    /// Create a runtime for `view`. Nothing is mounted until the first `render`.
    pub fn new<F>(config: RuntimeConfig, view: F) -> Self
    where
        F: Fn() -> View + 'static,
    {
        Self::with_document(config, Document::new(), view)
    }

    /// Create a runtime attached to an existing document.
    pub fn with_document<F>(config: RuntimeConfig, document: Document, view: F) -> Self
    where
        F: Fn() -> View + 'static,
    {
        let root_id = next_root_id();
        let root = Element::col().id(&root_id);
        let layout = layout(&root, Rect::from_size(config.width, config.height));
        Self {
            config,
            view: Box::new(view),
            document,
            mounts: MountTable::new(&root_id),
            handlers: HandlerRegistry::new(),
            root_id,
            root,
            layout,
            pressed: None,
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the view, mount and unmount selects, and lay out the result.
    ///
    /// On error nothing is committed: the previous tree, layout and handlers
    /// stay in place and selects first mounted by the failed pass are unmounted.
    pub fn render(&mut self) -> Result<(), SelectError> {
        let view = (self.view)();
        let mut cx = RenderCx::new(&self.document, &mut self.mounts);

        let rendered = match view.render(&mut cx, &Scope::root()) {
            Ok(rendered) => rendered,
            Err(err) => {
                log::debug!("Runtime::render name={} failed: {}", self.config.name, err);
                cx.abort();
                return Err(err);
            }
        };

        self.handlers = cx.commit();
        self.root = Element::col().id(&self.root_id).children(rendered);
        self.layout = layout(&self.root, self.viewport());

        log::trace!(
            "Runtime::render name={} mounted={} handlers={}",
            self.config.name,
            self.mounts.len(),
            self.handlers.len()
        );
        Ok(())
    }

    fn viewport(&self) -> Rect {
        Rect::from_size(self.config.width, self.config.height)
    }

    /// Resize the viewport and re-render.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), SelectError> {
        self.config.width = width;
        self.config.height = height;
        self.render()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Press a pointer button.
    ///
    /// Delivers a pointer-down to every document listener whatever the
    /// button, remembers the clickable element under the pointer, then
    /// re-renders. Returns whether any select state changed.
    pub fn pointer_down(&mut self, x: u16, y: u16, button: MouseButton) -> Result<bool, SelectError> {
        if !self.viewport().contains(x, y) {
            log::trace!("Runtime::pointer_down outside viewport x={} y={}", x, y);
            return Ok(false);
        }

        let event = PointerEvent::new(x, y, button, hit_path(&self.layout, &self.root, x, y));
        log::debug!(
            "Runtime::pointer_down x={} y={} target={:?}",
            x,
            y,
            event.target
        );
        self.document.dispatch_pointer_down(&event);
        self.pressed = hit_test(&self.layout, &self.root, x, y).map(|target| (target, button));

        self.settle()
    }

    /// Release a pointer button. Activates the clickable element under the
    /// pointer if it is the one a left press started on and the left button
    /// is the one released.
    pub fn pointer_up(&mut self, x: u16, y: u16, button: MouseButton) -> Result<bool, SelectError> {
        let pressed = self.pressed.take();
        if !self.viewport().contains(x, y) {
            return Ok(false);
        }

        let target = hit_test(&self.layout, &self.root, x, y);
        match (pressed, target) {
            (Some((pressed, MouseButton::Left)), Some(target))
                if pressed == target && button == MouseButton::Left =>
            {
                let event = ClickEvent {
                    target,
                    x,
                    y,
                    button,
                };
                self.dispatch_click(&event);
                self.settle()
            }
            _ => Ok(false),
        }
    }

    /// Press and release the left button at one point.
    pub fn click(&mut self, x: u16, y: u16) -> Result<bool, SelectError> {
        let down = self.pointer_down(x, y, MouseButton::Left)?;
        let up = self.pointer_up(x, y, MouseButton::Left)?;
        Ok(down || up)
    }

    /// Press and release the left button at the center of an element.
    /// Returns Ok(false) if the element is not laid out.
    pub fn click_element(&mut self, id: &str) -> Result<bool, SelectError> {
        let Some(rect) = self.layout.get(id).copied() else {
            log::debug!("Runtime::click_element no layout for {}", id);
            return Ok(false);
        };
        let (x, y) = rect.center();
        self.click(x, y)
    }

    /// Activate an element directly, bypassing hit testing.
    /// Returns Ok(false) if the element has no handler.
    pub fn activate(&mut self, id: &str) -> Result<bool, SelectError> {
        let (x, y) = self.layout.get(id).map(Rect::center).unwrap_or_default();
        let event = ClickEvent {
            target: id.to_string(),
            x,
            y,
            button: MouseButton::Left,
        };
        if !self.dispatch_click(&event) {
            return Ok(false);
        }
        self.settle()
    }

    /// Feed a crossterm event.
    pub fn handle_crossterm(&mut self, event: &crossterm::event::Event) -> Result<bool, SelectError> {
        match Input::from_crossterm(event) {
            Some(Input::PointerDown { x, y, button }) => self.pointer_down(x, y, button),
            Some(Input::PointerUp { x, y, button }) => self.pointer_up(x, y, button),
            Some(Input::Resize { width, height }) => {
                self.resize(width, height)?;
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn dispatch_click(&self, event: &ClickEvent) -> bool {
        let Some(handler) = self.handlers.get(&event.target) else {
            return false;
        };
        log::debug!("Runtime::activate target={}", event.target);
        handler(event);
        true
    }

    fn settle(&mut self) -> Result<bool, SelectError> {
        let changed = self.mounts.take_dirty();
        self.render()?;
        Ok(changed)
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The committed element tree.
    pub fn element(&self) -> &Element {
        &self.root
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Channel of the mounted select keyed `key`.
    pub fn channel(&self, key: &str) -> Option<SelectChannel> {
        self.mounts.get(key)
    }

    /// Keys of every mounted select.
    pub fn mounted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.mounts.keys().map(str::to_string).collect();
        keys.sort();
        keys
    }

    pub fn mounted_count(&self) -> usize {
        self.mounts.len()
    }

    /// Ids of rendered elements with the given role, in tree order.
    pub fn find_role(&self, role: &str) -> Vec<String> {
        find_by_data(&self.root, "role", role)
            .into_iter()
            .map(|element| element.id.clone())
            .collect()
    }

    /// The committed tree rendered as text, one string per viewport row.
    pub fn to_text(&self) -> Vec<String> {
        render_to_lines(&self.root, &self.layout, self.config.width, self.config.height)
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        log::debug!(
            "Runtime dropped name={} unmounting={}",
            self.config.name,
            self.mounts.len()
        );
        self.mounts.clear();
    }
}
