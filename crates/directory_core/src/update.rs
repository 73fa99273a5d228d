use crate::{DirectoryState, Msg};

/// Pure update function: applies a message to state and returns the next state.
///
/// Every transition leaves the page cursor valid for the current query;
/// nothing here can fail.
pub fn update(mut state: DirectoryState, msg: Msg) -> DirectoryState {
    match msg {
        Msg::QueryChanged(query) => state.apply_query(query),
        Msg::PageRequested(page) => state.request_page(page),
        Msg::NextPage => state.step_page(1),
        Msg::PreviousPage => state.step_page(-1),
        Msg::NoOp => {}
    }
    state
}
