/// Placeholder rows shown while loading, independent of the data length
pub const SKELETON_ROWS: usize = 5;

/// What the table body shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPlan {
    Error { message: String, can_retry: bool },
    Skeleton { rows: usize, columns: usize },
    Empty { message: String, colspan: usize },
    Rows,
}

impl BodyPlan {
    /// Error takes priority over loading, loading over empty
    pub fn plan(
        row_count: usize,
        column_count: usize,
        loading: bool,
        error: Option<&str>,
        empty_message: &str,
        can_retry: bool,
    ) -> Self {
        if let Some(message) = error {
            return BodyPlan::Error {
                message: message.to_string(),
                can_retry,
            };
        }
        if loading {
            return BodyPlan::Skeleton {
                rows: SKELETON_ROWS,
                columns: column_count,
            };
        }
        if row_count == 0 {
            return BodyPlan::Empty {
                message: empty_message.to_string(),
                colspan: column_count.max(1),
            };
        }
        BodyPlan::Rows
    }

    /// Pagination footer is only shown under real rows
    pub fn shows_pagination(&self) -> bool {
        matches!(self, BodyPlan::Rows)
    }
}
