//! In-memory [`ComposeSurface`] for tests.
//!
//! Elements are registered against the literal selector string they should
//! match; writes, dispatched events, focus and toasts are recorded so tests
//! can spy on them.

use std::sync::Arc;

use async_trait::async_trait;
use mailsmith_protocols::Template;
use parking_lot::Mutex;

use crate::error::ComposeError;
use crate::surface::{ComposeSurface, DomEvent, ElementId, ElementMetrics, ReadyState};

#[derive(Debug)]
struct FakeElement {
    id: ElementId,
    selector: String,
    metrics: Option<ElementMetrics>,
    value: Option<String>,
    html: Option<String>,
    events: Vec<DomEvent>,
    focused: bool,
}

#[derive(Debug)]
struct Inner {
    url: String,
    ready: ReadyState,
    next_id: i64,
    elements: Vec<FakeElement>,
    overlay_mounted: bool,
    overlay_mounts: usize,
    toasts: Vec<String>,
    previews: Vec<Template>,
}

#[derive(Clone)]
pub(crate) struct FakeSurface {
    inner: Arc<Mutex<Inner>>,
}

impl FakeSurface {
    pub fn new(url: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                url: url.to_string(),
                ready: ReadyState::Complete,
                next_id: 0,
                elements: Vec::new(),
                overlay_mounted: false,
                overlay_mounts: 0,
                toasts: Vec::new(),
                previews: Vec::new(),
            })),
        }
    }

    /// Register an element matching exactly `selector`.
    pub fn add_element(&self, selector: &str, metrics: Option<ElementMetrics>) -> ElementId {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = ElementId(inner.next_id);
        inner.elements.push(FakeElement {
            id,
            selector: selector.to_string(),
            metrics,
            value: None,
            html: None,
            events: Vec::new(),
            focused: false,
        });
        id
    }

    pub fn set_url(&self, url: &str) {
        self.inner.lock().url = url.to_string();
    }

    pub fn set_ready(&self, ready: ReadyState) {
        self.inner.lock().ready = ready;
    }

    /// Simulate the SPA wiping the injected button during a re-render.
    pub fn clear_overlay(&self) {
        self.inner.lock().overlay_mounted = false;
    }

    pub fn value_of(&self, element: ElementId) -> Option<String> {
        self.with_element(element, |el| el.value.clone()).flatten()
    }

    pub fn html_of(&self, element: ElementId) -> Option<String> {
        self.with_element(element, |el| el.html.clone()).flatten()
    }

    pub fn dispatched(&self, element: ElementId, event: DomEvent) -> usize {
        self.with_element(element, |el| {
            el.events.iter().filter(|seen| **seen == event).count()
        })
        .unwrap_or(0)
    }

    pub fn focused(&self, element: ElementId) -> bool {
        self.with_element(element, |el| el.focused).unwrap_or(false)
    }

    pub fn overlay_mounts(&self) -> usize {
        self.inner.lock().overlay_mounts
    }

    pub fn toasts(&self) -> Vec<String> {
        self.inner.lock().toasts.clone()
    }

    pub fn previews(&self) -> Vec<Template> {
        self.inner.lock().previews.clone()
    }

    fn with_element<T>(&self, element: ElementId, f: impl FnOnce(&FakeElement) -> T) -> Option<T> {
        let inner = self.inner.lock();
        inner.elements.iter().find(|el| el.id == element).map(f)
    }

    fn with_element_mut<T>(
        &self,
        element: ElementId,
        f: impl FnOnce(&mut FakeElement) -> T,
    ) -> Result<T, ComposeError> {
        let mut inner = self.inner.lock();
        inner
            .elements
            .iter_mut()
            .find(|el| el.id == element)
            .map(f)
            .ok_or_else(|| ComposeError::Surface(format!("unknown element {element:?}")))
    }
}

#[async_trait]
impl ComposeSurface for FakeSurface {
    async fn ready_state(&self) -> Result<ReadyState, ComposeError> {
        Ok(self.inner.lock().ready)
    }

    async fn url(&self) -> Result<String, ComposeError> {
        Ok(self.inner.lock().url.clone())
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<ElementId>, ComposeError> {
        let inner = self.inner.lock();
        Ok(inner
            .elements
            .iter()
            .filter(|el| el.selector == selector)
            .map(|el| el.id)
            .collect())
    }

    async fn metrics(&self, element: ElementId) -> Result<Option<ElementMetrics>, ComposeError> {
        Ok(self.with_element(element, |el| el.metrics).flatten())
    }

    async fn write_value(&self, element: ElementId, value: &str) -> Result<(), ComposeError> {
        self.with_element_mut(element, |el| el.value = Some(value.to_string()))
    }

    async fn write_html(&self, element: ElementId, html: &str) -> Result<(), ComposeError> {
        self.with_element_mut(element, |el| el.html = Some(html.to_string()))
    }

    async fn dispatch(&self, element: ElementId, event: DomEvent) -> Result<(), ComposeError> {
        self.with_element_mut(element, |el| el.events.push(event))
    }

    async fn focus(&self, element: ElementId) -> Result<(), ComposeError> {
        self.with_element_mut(element, |el| el.focused = true)
    }

    async fn overlay_present(&self) -> Result<bool, ComposeError> {
        Ok(self.inner.lock().overlay_mounted)
    }

    async fn mount_overlay(&self) -> Result<(), ComposeError> {
        let mut inner = self.inner.lock();
        inner.overlay_mounted = true;
        inner.overlay_mounts += 1;
        Ok(())
    }

    async fn remove_overlay(&self) -> Result<(), ComposeError> {
        self.inner.lock().overlay_mounted = false;
        Ok(())
    }

    async fn show_toast(&self, message: &str) -> Result<(), ComposeError> {
        self.inner.lock().toasts.push(message.to_string());
        Ok(())
    }

    async fn render_preview(&self, template: &Template) -> Result<(), ComposeError> {
        self.inner.lock().previews.push(template.clone());
        Ok(())
    }
}
