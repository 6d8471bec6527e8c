pub mod screens;
pub mod sync;

pub use screens::{Screen, ScreenSet, default_layout};
pub use sync::{SelectionEvent, SyncEngine};
