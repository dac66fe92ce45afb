pub mod configuration;
pub mod error;
pub mod form;
pub mod job;
pub mod panes;
pub mod render;
pub mod tool;
pub mod validation;

pub use configuration::{PanelConfig, ServerConfig, ToolDefaults};
pub use error::{AppError, TransportError};
pub use form::{FieldValue, FormField, FormModel};
pub use job::{
    JobOutcome, JobRequest, JobResponse, NO_OUTPUT_PLACEHOLDER, OutcomeOrigin, Timeout,
    TransferJobConfig,
};
pub use panes::PaneSelector;
pub use render::{OutputView, Tone, TriggerView};
pub use tool::Tool;
pub use validation::{RequiredField, ValidationError, validate};
