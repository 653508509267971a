// Infrastructure: external collaborators and in-process plumbing.
pub mod admin_gate;
pub mod image_library;
pub mod storage_client;
pub mod stream_hub;
pub mod test_dependencies;
pub mod traits;

pub use admin_gate::{AdminGate, UnlockOutcome};
pub use image_library::{ImageEntry, ImageLibrary, SyncReport};
pub use storage_client::HostedStorageClient;
pub use stream_hub::StreamHub;
pub use traits::BaseObjectStorage;
