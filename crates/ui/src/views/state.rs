/// Errors surfaced to the user from view-layer operations.
///
/// Submission failures deliberately collapse to one generic message no
/// matter the underlying cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => {
                "Unable to submit assessment. Please check your connection and try again."
            }
        }
    }
}
