#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box.
    QueryChanged(String),
    /// User asked for a specific page. Out-of-range values are clamped.
    PageRequested(i64),
    /// User clicked Next.
    NextPage,
    /// User clicked Previous.
    PreviousPage,
    /// Fallback for placeholder wiring.
    NoOp,
}
