//! Directory core: record store, query engine and the pure state machine
//! that drives a searchable, paginated view over it.
mod msg;
mod query;
mod record;
mod state;
mod store;
mod update;
mod view_model;

pub use msg::Msg;
pub use query::{filter, paginate, total_pages, Page};
pub use record::{Record, RecordId, SocialChannel, SocialLinks, PLACEHOLDER_PHOTO};
pub use state::{DirectoryConfig, DirectoryState, QueryChangePolicy, QueryState, DEFAULT_PAGE_SIZE};
pub use store::{MalformedDataError, RecordStore};
pub use update::update;
pub use view_model::ViewResult;
