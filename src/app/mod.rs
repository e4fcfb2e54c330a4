// Application layer - Use case interactors

pub mod clip_interactor;
pub mod clip_registry;
pub mod container;

// Re-export interactors
pub use clip_interactor::{ClipInteractor, LifecycleSettings};
pub use clip_registry::ClipRegistry;
pub use container::{AppContainer, DefaultAppContainer};
