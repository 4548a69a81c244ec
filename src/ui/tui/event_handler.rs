/// Events the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    Quit,
    /// Manual refresh, independent of the poll timer
    Refresh,
    ToggleAutoPoll,
    ToggleHelp,
    /// Character typed into the filter box
    FilterChar(char),
    FilterBackspace,
    None,
}
