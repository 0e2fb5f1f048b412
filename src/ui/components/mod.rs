//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `InputField` - Single-line text input with focus, placeholder and error
//! - `StatusIndicator` - Spinner, success and error indicators

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
