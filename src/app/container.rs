use std::sync::Arc;

use crate::adapters::TracingLogAdapter;
use crate::app::clip_interactor::{ClipInteractor, LifecycleSettings};
use crate::config_initialization::AppConfig;
use crate::ports::LogPort;

pub trait AppContainer: Send + Sync {
    fn clip_interactor(&self) -> Arc<ClipInteractor>;
}

pub struct DefaultAppContainer {
    clip_interactor: Arc<ClipInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &AppConfig) -> Self {
        let log_port = Arc::new(TracingLogAdapter::default());

        let clip_interactor = Arc::new(ClipInteractor::new(
            log_port as Arc<dyn LogPort>,
            LifecycleSettings::from(config),
        ));

        Self { clip_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn clip_interactor(&self) -> Arc<ClipInteractor> {
        Arc::clone(&self.clip_interactor)
    }
}
