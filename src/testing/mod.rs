pub mod fake_transport;
pub mod recording_mount;

pub use fake_transport::FakeTransport;
pub use recording_mount::{MountEvent, RecordingMount};
