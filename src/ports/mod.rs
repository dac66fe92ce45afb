mod job_transport;
mod mount_point;

pub use job_transport::JobTransport;
pub use mount_point::MountPoint;
