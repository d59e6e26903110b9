//! [`ComposeSurface`] backed by a CDP page session.

use std::sync::Arc;

use async_trait::async_trait;
use mailsmith_protocols::Template;

use crate::error::ComposeError;
use crate::overlay;
use crate::surface::{
    ComposeSurface, DomEvent, ElementId, ElementMetrics, ReadyState,
};

use super::page::PageSession;

/// Live provider page driven over CDP.
pub struct CdpSurface {
    page: Arc<PageSession>,
}

impl CdpSurface {
    pub fn new(page: Arc<PageSession>) -> Self {
        Self { page }
    }

    async fn object_id(&self, element: ElementId) -> Result<String, ComposeError> {
        Ok(self.page.resolve_node(element.0).await?)
    }
}

#[async_trait]
impl ComposeSurface for CdpSurface {
    async fn ready_state(&self) -> Result<ReadyState, ComposeError> {
        let value = self.page.evaluate("document.readyState").await?;
        Ok(ReadyState::parse(value.as_str().unwrap_or("loading")))
    }

    async fn url(&self) -> Result<String, ComposeError> {
        let value = self.page.evaluate("window.location.href").await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<ElementId>, ComposeError> {
        let nodes = self.page.query_selector_all(selector).await?;
        Ok(nodes.into_iter().map(ElementId).collect())
    }

    async fn metrics(&self, element: ElementId) -> Result<Option<ElementMetrics>, ComposeError> {
        Ok(self
            .page
            .box_model(element.0)
            .await?
            .map(|(width, height)| ElementMetrics { width, height }))
    }

    async fn write_value(&self, element: ElementId, value: &str) -> Result<(), ComposeError> {
        let object_id = self.object_id(element).await?;
        self.page
            .call_function_on(
                &object_id,
                "function(value) { this.value = value; }",
                vec![value.into()],
            )
            .await?;
        Ok(())
    }

    async fn write_html(&self, element: ElementId, html: &str) -> Result<(), ComposeError> {
        let object_id = self.object_id(element).await?;
        self.page
            .call_function_on(
                &object_id,
                "function(html) { this.innerHTML = html; }",
                vec![html.into()],
            )
            .await?;
        Ok(())
    }

    async fn dispatch(&self, element: ElementId, event: DomEvent) -> Result<(), ComposeError> {
        let object_id = self.object_id(element).await?;
        self.page
            .call_function_on(
                &object_id,
                "function(type) { this.dispatchEvent(new Event(type, { bubbles: true })); }",
                vec![event.as_str().into()],
            )
            .await?;
        Ok(())
    }

    async fn focus(&self, element: ElementId) -> Result<(), ComposeError> {
        Ok(self.page.focus(element.0).await?)
    }

    async fn overlay_present(&self) -> Result<bool, ComposeError> {
        let value = self.page.evaluate(&overlay::presence_check()).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn mount_overlay(&self) -> Result<(), ComposeError> {
        self.page.evaluate(overlay::OVERLAY_SCRIPT).await?;
        Ok(())
    }

    async fn remove_overlay(&self) -> Result<(), ComposeError> {
        self.page
            .evaluate(
                "['mailsmith-fab', 'mailsmith-modal', 'mailsmith-ai-modal']\
                 .forEach(function(id) { \
                     var node = document.getElementById(id); \
                     if (node) node.remove(); \
                 });",
            )
            .await?;
        Ok(())
    }

    async fn show_toast(&self, message: &str) -> Result<(), ComposeError> {
        self.page.evaluate(&overlay::toast_call(message)).await?;
        Ok(())
    }

    async fn render_preview(&self, template: &Template) -> Result<(), ComposeError> {
        self.page.evaluate(&overlay::preview_call(template)).await?;
        Ok(())
    }
}
