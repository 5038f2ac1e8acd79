pub mod handles;
pub mod validate;

pub use handles::{AutoHandles, ControlLine, EndpointStrategy, HandleMode, HandleParams};
pub use validate::{expected_control_lines, ValidateControls};
