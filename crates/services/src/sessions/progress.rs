/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: u32,
    pub is_complete: bool,
}
