// Clip interactor - Orchestrates the clip lifecycle use case

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::app::clip_registry::ClipRegistry;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Delay before a created clip is reported ready
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Placeholder title given to every new clip
pub const DEFAULT_CLIP_TITLE: &str = "Video Clip";

/// Tunables for clip creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleSettings {
    pub processing_delay: Duration,
    pub clip_title: String,
}

impl Default for LifecycleSettings {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
            clip_title: DEFAULT_CLIP_TITLE.to_string(),
        }
    }
}

/// State reachable from deferred transition tasks
struct LifecycleState {
    registry: RwLock<ClipRegistry>,
    listeners: RwLock<Vec<Arc<dyn ClipEventListener>>>,
    log_port: Arc<dyn LogPort>,
}

impl LifecycleState {
    async fn notify(&self, event: ClipEvent) {
        let listeners = self.listeners.read().await;
        for listener in listeners.iter() {
            listener.on_event(&event);
        }
    }

    async fn advance_to_ready(&self, id: ClipId) -> Option<ClipRecord> {
        let outcome = {
            let mut registry = self.registry.write().await;
            registry
                .transition(id, ClipStatus::Ready)
                .map(|from| (from, registry.get(id).cloned()))
        };

        match outcome {
            Ok((from, record)) => {
                self.log_port
                    .info(&format!("Clip {} is ready", id))
                    .await;
                self.notify(ClipEvent::StatusChanged {
                    id,
                    from,
                    to: ClipStatus::Ready,
                })
                .await;
                record
            }
            Err(e) => {
                self.log_port
                    .warn(&format!("Ignoring ready transition: {}", e))
                    .await;
                None
            }
        }
    }
}

/// Interactor for the clip lifecycle use case
///
/// Owns the session's clip collection. Every mutation goes through
/// [`create`](Self::create) or [`advance_to_ready`](Self::advance_to_ready).
pub struct ClipInteractor {
    state: Arc<LifecycleState>,
    settings: LifecycleSettings,
    next_id: AtomicU64,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl ClipInteractor {
    /// Create new clip interactor with injected ports
    pub fn new(log_port: Arc<dyn LogPort>, settings: LifecycleSettings) -> Self {
        Self {
            state: Arc::new(LifecycleState {
                registry: RwLock::new(ClipRegistry::new()),
                listeners: RwLock::new(Vec::new()),
                log_port,
            }),
            settings,
            next_id: AtomicU64::new(1),
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn settings(&self) -> &LifecycleSettings {
        &self.settings
    }

    /// Register a listener for creation and status change events
    pub async fn add_listener(&self, listener: Arc<dyn ClipEventListener>) {
        self.state.listeners.write().await.push(listener);
    }

    /// Create a clip in the `Processing` state and schedule its completion
    ///
    /// The URL is trimmed before use. Nothing is stored when the URL is empty
    /// or either time marker is malformed.
    pub async fn create(
        &self,
        url: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<ClipRecord, DomainError> {
        let url = url.trim();
        if url.is_empty() {
            self.state
                .log_port
                .warn("Rejected clip request with empty URL")
                .await;
            return Err(DomainError::EmptyUrl);
        }

        let duration = TimeArithmetic::duration(start_time, end_time)?;
        let platform = PlatformDetector::detect(url);
        let id = ClipId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let record = ClipRecord::new(
            id,
            self.settings.clip_title.clone(),
            platform,
            url.to_string(),
            start_time.trim().to_string(),
            end_time.trim().to_string(),
            duration,
        );

        self.state
            .registry
            .write()
            .await
            .insert_front(record.clone());

        self.state
            .log_port
            .info(&format!(
                "Created clip {} from {} ({} -> {}, duration {})",
                id, platform, record.start_time, record.end_time, record.duration
            ))
            .await;
        self.state
            .notify(ClipEvent::Created {
                clip: record.clone(),
            })
            .await;

        self.schedule_ready(id).await;
        Ok(record)
    }

    /// Move a processing clip to `Ready`
    ///
    /// Missing or already finished clips are logged and left alone.
    pub async fn advance_to_ready(&self, id: ClipId) -> Option<ClipRecord> {
        self.state.advance_to_ready(id).await
    }

    /// Snapshot of all clips, most recent first
    pub async fn list_clips(&self) -> Vec<ClipRecord> {
        self.state.registry.read().await.snapshot()
    }

    pub async fn get(&self, id: ClipId) -> Option<ClipRecord> {
        self.state.registry.read().await.get(id).cloned()
    }

    /// Live preview of the span between two markers
    pub fn duration(&self, start: &str, end: &str) -> Result<String, DomainError> {
        TimeArithmetic::duration(start, end)
    }

    pub fn detect_platform(&self, url: &str) -> Platform {
        PlatformDetector::detect(url)
    }

    /// Number of scheduled transitions that have not fired yet
    pub async fn pending_transitions(&self) -> usize {
        self.pending
            .lock()
            .await
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Wait until every scheduled transition has fired
    pub async fn wait_for_pending(&self) {
        loop {
            let handles = std::mem::take(&mut *self.pending.lock().await);
            if handles.is_empty() {
                return;
            }
            for handle in handles {
                if let Err(e) = handle.await {
                    if !e.is_cancelled() {
                        self.state
                            .log_port
                            .error(&format!("Deferred transition task failed: {}", e))
                            .await;
                    }
                }
            }
        }
    }

    /// Abort scheduled transitions; affected clips stay in `Processing`
    pub async fn shutdown(&self) {
        let handles = std::mem::take(&mut *self.pending.lock().await);
        if !handles.is_empty() {
            self.state
                .log_port
                .debug(&format!("Aborting {} pending transitions", handles.len()))
                .await;
        }
        for handle in handles {
            handle.abort();
        }
    }

    async fn schedule_ready(&self, id: ClipId) {
        let state = Arc::clone(&self.state);
        let delay = self.settings.processing_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.advance_to_ready(id).await;
        });

        let mut pending = self.pending.lock().await;
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingLog {
        warnings: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl LogPort for RecordingLog {
        async fn info(&self, _message: &str) {}
        async fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
        async fn error(&self, _message: &str) {}
        async fn debug(&self, _message: &str) {}
    }

    #[derive(Default)]
    struct CollectingListener {
        events: StdMutex<Vec<ClipEvent>>,
    }

    impl ClipEventListener for CollectingListener {
        fn on_event(&self, event: &ClipEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn interactor() -> (ClipInteractor, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let interactor = ClipInteractor::new(
            Arc::clone(&log) as Arc<dyn LogPort>,
            LifecycleSettings::default(),
        );
        (interactor, log)
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_then_ready_after_delay() {
        let (interactor, _) = interactor();
        let clip = interactor
            .create("https://tiktok.com/@x/video/1", "00:05", "00:20")
            .await
            .unwrap();

        assert_eq!(clip.platform, Platform::TikTok);
        assert_eq!(clip.duration, "00:15");
        assert_eq!(clip.status, ClipStatus::Processing);
        assert_eq!(clip.title, DEFAULT_CLIP_TITLE);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(
            interactor.get(clip.id).await.unwrap().status,
            ClipStatus::Processing
        );

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            interactor.get(clip.id).await.unwrap().status,
            ClipStatus::Ready
        );
        assert_eq!(interactor.pending_transitions().await, 0);
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected() {
        let (interactor, log) = interactor();
        assert_eq!(
            interactor.create("   ", "00:00", "01:00").await,
            Err(DomainError::EmptyUrl)
        );
        assert!(interactor.list_clips().await.is_empty());
        assert_eq!(log.warnings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_time_stores_nothing() {
        let (interactor, _) = interactor();
        assert_eq!(
            interactor.create("https://youtu.be/a", "ab:cd", "01:00").await,
            Err(DomainError::MalformedTimeInput("ab:cd".to_string()))
        );
        assert!(interactor.list_clips().await.is_empty());
        assert_eq!(interactor.pending_transitions().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_url_is_trimmed() {
        let (interactor, _) = interactor();
        let clip = interactor
            .create("  https://youtu.be/abc  ", "00:00", "00:10")
            .await
            .unwrap();
        assert_eq!(clip.source_url, "https://youtu.be/abc");
        interactor.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_unique_and_newest_first() {
        let (interactor, _) = interactor();
        let mut ids = Vec::new();
        for n in 0..5 {
            let clip = interactor
                .create(&format!("https://example.com/{}", n), "00:00", "00:30")
                .await
                .unwrap();
            ids.push(clip.id);
        }

        let listed: Vec<ClipId> = interactor.list_clips().await.iter().map(|c| c.id).collect();
        ids.reverse();
        assert_eq!(listed, ids);

        let mut unique = listed.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
        interactor.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_pending_completes_all() {
        let (interactor, _) = interactor();
        for n in 0..3 {
            interactor
                .create(&format!("https://twitch.tv/{}", n), "00:00", "00:30")
                .await
                .unwrap();
        }
        interactor.wait_for_pending().await;

        let clips = interactor.list_clips().await;
        assert!(clips.iter().all(|c| c.status == ClipStatus::Ready));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transition_only_touches_own_clip() {
        let (interactor, _) = interactor();
        let first = interactor
            .create("https://youtu.be/1", "00:00", "00:10")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let second = interactor
            .create("https://youtu.be/2", "00:00", "00:10")
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(interactor.get(first.id).await.unwrap().status, ClipStatus::Ready);
        assert_eq!(
            interactor.get(second.id).await.unwrap().status,
            ClipStatus::Processing
        );

        interactor.wait_for_pending().await;
        assert_eq!(interactor.get(second.id).await.unwrap().status, ClipStatus::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_listener_sees_exactly_one_transition() {
        let (interactor, _) = interactor();
        let listener = Arc::new(CollectingListener::default());
        interactor
            .add_listener(Arc::clone(&listener) as Arc<dyn ClipEventListener>)
            .await;

        let clip = interactor
            .create("https://facebook.com/v/1", "00:00", "00:10")
            .await
            .unwrap();
        interactor.wait_for_pending().await;

        let events = listener.events.lock().unwrap().clone();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], ClipEvent::Created { clip: c } if c.id == clip.id));
        assert_eq!(
            events[1],
            ClipEvent::StatusChanged {
                id: clip.id,
                from: ClipStatus::Processing,
                to: ClipStatus::Ready,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_advance_then_deferred_is_swallowed() {
        let (interactor, log) = interactor();
        let clip = interactor
            .create("https://instagram.com/reel/1", "00:00", "00:10")
            .await
            .unwrap();

        let advanced = interactor.advance_to_ready(clip.id).await.unwrap();
        assert_eq!(advanced.status, ClipStatus::Ready);

        interactor.wait_for_pending().await;
        assert_eq!(interactor.get(clip.id).await.unwrap().status, ClipStatus::Ready);
        assert_eq!(log.warnings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_advance_missing_clip_is_noop() {
        let (interactor, log) = interactor();
        assert!(interactor.advance_to_ready(ClipId(42)).await.is_none());
        assert!(log.warnings.lock().unwrap()[0].contains("42"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_leaves_clip_processing() {
        let (interactor, _) = interactor();
        let clip = interactor
            .create("https://youtu.be/x", "00:00", "00:10")
            .await
            .unwrap();
        interactor.shutdown().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(
            interactor.get(clip.id).await.unwrap().status,
            ClipStatus::Processing
        );
    }

    #[test]
    fn test_duration_passthrough() {
        let (interactor, _) = interactor();
        assert_eq!(interactor.duration("00:00", "01:00").unwrap(), "01:00");
        assert_eq!(interactor.duration("01:00", "00:30").unwrap(), "00:00");
        assert_eq!(interactor.detect_platform("https://example.com"), Platform::Unknown);
    }
}
