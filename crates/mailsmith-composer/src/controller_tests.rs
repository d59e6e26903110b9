use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use mailsmith_protocols::GenerateResponse;

use crate::fake_surface::FakeSurface;
use crate::generate::GenerateError;
use crate::surface::ElementMetrics;

use super::*;

const GMAIL_URL: &str = "https://mail.google.com/mail/u/0/#inbox";

/// Scripted template source recording every call.
#[derive(Default)]
struct ScriptedSource {
    responses: Mutex<VecDeque<Result<GenerateResponse, GenerateError>>>,
    calls: Mutex<Vec<(String, Vec<usize>)>>,
}

impl ScriptedSource {
    fn push(&self, index: usize, has_more: bool) {
        self.responses.lock().push_back(Ok(GenerateResponse {
            subject: format!("subject {index}"),
            content: format!("content {index}"),
            template_index: index,
            has_more,
        }));
    }

    fn push_error(&self, status: u16) {
        self.responses.lock().push_back(Err(GenerateError::Endpoint {
            status,
            message: "scripted failure".into(),
        }));
    }
}

#[async_trait]
impl TemplateSource for &ScriptedSource {
    async fn generate(
        &self,
        prompt: &str,
        exclude: &[usize],
    ) -> Result<GenerateResponse, GenerateError> {
        self.calls.lock().push((prompt.to_string(), exclude.to_vec()));
        self.responses
            .lock()
            .pop_front()
            .expect("unscripted generate call")
    }
}

fn controller<'a>(
    surface: &FakeSurface,
    source: &'a ScriptedSource,
) -> (
    ComposerController<FakeSurface, &'a ScriptedSource>,
    mpsc::Receiver<BackgroundRequest>,
) {
    let (background_tx, background_rx) = mpsc::channel(8);
    let controller = ComposerController::new(
        surface.clone(),
        source,
        background_tx,
        ComposerConfig::default(),
    );
    (controller, background_rx)
}

fn add_compose_fields(surface: &FakeSurface) -> (crate::surface::ElementId, crate::surface::ElementId) {
    let subject = surface.add_element("input[name=\"subjectbox\"]", None);
    let body = surface.add_element(
        "[aria-label*=\"Message Body\"]",
        Some(ElementMetrics {
            width: 600.0,
            height: 300.0,
        }),
    );
    (subject, body)
}

#[test]
fn test_detect_provider() {
    assert_eq!(detect_provider(GMAIL_URL), Some(MailProvider::Gmail));
    assert_eq!(
        detect_provider("https://outlook.live.com/mail/0/"),
        Some(MailProvider::Outlook)
    );
    assert_eq!(detect_provider("https://news.example.com/"), None);
    assert_eq!(detect_provider("not a url"), None);
}

#[tokio::test]
async fn test_unsupported_host_stays_uninitialized() {
    let surface = FakeSurface::new("https://news.example.com/");
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);

    controller.attach().await.unwrap();

    assert_eq!(controller.state(), ControllerState::Uninitialized);
    assert!(!controller.is_active());
    assert_eq!(surface.overlay_mounts(), 0);
}

#[tokio::test]
async fn test_attach_mounts_overlay_on_gmail() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);

    controller.attach().await.unwrap();

    assert!(controller.is_active());
    assert_eq!(surface.overlay_mounts(), 1);
}

#[tokio::test]
async fn test_ensure_attached_is_idempotent() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller.ensure_attached().await.unwrap();
    controller.ensure_attached().await.unwrap();
    controller.tick().await.unwrap();

    assert_eq!(surface.overlay_mounts(), 1);
}

#[tokio::test]
async fn test_tick_restores_dropped_overlay() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    // Host SPA navigation wipes the injected button.
    surface.set_url("https://mail.google.com/mail/u/0/#sent");
    surface.clear_overlay();
    controller.tick().await.unwrap();

    assert_eq!(surface.overlay_mounts(), 2);
}

#[tokio::test]
async fn test_compose_detected_restores_overlay() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    surface.clear_overlay();
    controller
        .handle_event(OverlayEvent::ComposeDetected)
        .await
        .unwrap();

    assert_eq!(surface.overlay_mounts(), 2);
}

#[tokio::test]
async fn test_events_ignored_while_inactive() {
    let surface = FakeSurface::new("https://news.example.com/");
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::Generate {
            prompt: "sales".into(),
        })
        .await
        .unwrap();

    assert!(source.calls.lock().is_empty());
}

#[tokio::test]
async fn test_quick_pick_inserts_and_toasts() {
    let surface = FakeSurface::new(GMAIL_URL);
    let (subject, body) = add_compose_fields(&surface);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::TemplatePicked {
            id: "cold-outreach".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        surface.value_of(subject).as_deref(),
        Some("Quick question about {{company}}")
    );
    assert!(surface.html_of(body).unwrap().contains("making waves"));
    assert_eq!(surface.toasts(), ["Template inserted successfully!"]);
}

#[tokio::test]
async fn test_unknown_quick_pick_is_ignored() {
    let surface = FakeSurface::new(GMAIL_URL);
    add_compose_fields(&surface);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::TemplatePicked {
            id: "newsletter".into(),
        })
        .await
        .unwrap();

    assert!(surface.toasts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_no_success_toast_without_compose_fields() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::TemplatePicked {
            id: "follow-up".into(),
        })
        .await
        .unwrap();

    assert!(surface.toasts().is_empty());
}

#[tokio::test]
async fn test_open_dashboard_delegates_to_background() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, mut background_rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::OpenDashboard)
        .await
        .unwrap();

    assert!(matches!(
        background_rx.recv().await,
        Some(BackgroundRequest::OpenDashboard)
    ));
}

#[tokio::test]
async fn test_empty_prompt_never_reaches_source() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::Generate {
            prompt: "   ".into(),
        })
        .await
        .unwrap();

    assert!(source.calls.lock().is_empty());
    assert_eq!(surface.toasts(), ["Describe your email purpose first"]);
}

#[tokio::test]
async fn test_generate_previews_and_accumulates_exclusions() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    source.push(1, true);
    source.push(0, false);
    source.push(2, true);
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    for _ in 0..3 {
        controller
            .handle_event(OverlayEvent::Generate {
                prompt: "boost our revenue".into(),
            })
            .await
            .unwrap();
    }

    let calls = source.calls.lock();
    assert_eq!(calls[0].1, Vec::<usize>::new());
    assert_eq!(calls[1].1, vec![1]);
    // The second response closed the cycle, so the third request starts fresh.
    assert_eq!(calls[2].1, Vec::<usize>::new());

    let previews = surface.previews();
    assert_eq!(previews.len(), 3);
    assert_eq!(previews[0].subject, "subject 1");
    assert_eq!(previews[2].subject, "subject 2");
}

#[tokio::test]
async fn test_new_ai_modal_discards_previous_session() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    source.push(1, true);
    source.push(2, true);
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::Generate {
            prompt: "boost our revenue".into(),
        })
        .await
        .unwrap();
    controller
        .handle_event(OverlayEvent::AiModalOpened)
        .await
        .unwrap();
    controller
        .handle_event(OverlayEvent::Generate {
            prompt: "boost our revenue".into(),
        })
        .await
        .unwrap();

    let calls = source.calls.lock();
    // The re-opened modal starts from an empty exclusion set.
    assert_eq!(calls[1].1, Vec::<usize>::new());
}

#[tokio::test]
async fn test_generate_failure_toasts_and_keeps_session() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    source.push(1, true);
    source.push_error(502);
    source.push(2, true);
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    for _ in 0..3 {
        controller
            .handle_event(OverlayEvent::Generate {
                prompt: "boost our revenue".into(),
            })
            .await
            .unwrap();
    }

    assert_eq!(
        surface.toasts(),
        ["Failed to generate template. Please try again."]
    );
    // The failed attempt does not disturb the exclusion set.
    let calls = source.calls.lock();
    assert_eq!(calls[1].1, vec![1]);
    assert_eq!(calls[2].1, vec![1]);
}

#[tokio::test]
async fn test_use_template_inserts_last_preview() {
    let surface = FakeSurface::new(GMAIL_URL);
    let (subject, _body) = add_compose_fields(&surface);
    let source = ScriptedSource::default();
    source.push(0, true);
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::Generate {
            prompt: "partner with us".into(),
        })
        .await
        .unwrap();
    controller
        .handle_event(OverlayEvent::UseTemplate)
        .await
        .unwrap();

    assert_eq!(surface.value_of(subject).as_deref(), Some("subject 0"));
    assert_eq!(surface.toasts(), ["Template inserted successfully!"]);
}

#[tokio::test]
async fn test_use_template_without_preview_is_noop() {
    let surface = FakeSurface::new(GMAIL_URL);
    add_compose_fields(&surface);
    let source = ScriptedSource::default();
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::UseTemplate)
        .await
        .unwrap();

    assert!(surface.toasts().is_empty());
}

#[tokio::test]
async fn test_detach_removes_overlay_and_resets() {
    let surface = FakeSurface::new(GMAIL_URL);
    let source = ScriptedSource::default();
    source.push(0, true);
    let (mut controller, _rx) = controller(&surface, &source);
    controller.attach().await.unwrap();

    controller
        .handle_event(OverlayEvent::Generate {
            prompt: "boost our revenue".into(),
        })
        .await
        .unwrap();
    controller.detach().await.unwrap();

    assert_eq!(controller.state(), ControllerState::Uninitialized);
    assert!(!surface.overlay_present().await.unwrap());
}
