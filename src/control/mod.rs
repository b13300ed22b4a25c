mod copy_control;
mod status;

pub use copy_control::{CopyControl, COPY_BUTTON_LABEL};
pub use status::{CopyStatus, COPY_FAILED_MESSAGE, COPY_SUCCESS_MESSAGE};
