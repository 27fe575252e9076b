//! Status and confirmation message types for command feedback.

use std::fmt;

/// A one-line success or failure message.
///
/// # Examples
///
/// ```rust
/// use elasticroute_core::display::OperationStatus;
///
/// let status = OperationStatus::success("Plan TestPlan_1 is valid".to_string());
/// assert_eq!(status.to_string(), "Success: Plan TestPlan_1 is valid\n");
/// ```
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
