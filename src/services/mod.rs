mod console_mount;
mod http_transport;

pub use console_mount::ConsoleMount;
pub use http_transport::HttpJobTransport;
