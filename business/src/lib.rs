mod columns;
mod config;
mod error;
pub mod fixture;
mod pagination;
pub mod query;
mod record;
mod selection;
mod table;
mod view;

pub use columns::{ColumnDescriptor, ColumnKey, ColumnRegistry, StickySide};
pub use config::{ENV_PREFIX, TableConfig};
pub use error::ParseError;
pub use pagination::{
    PageItem, PagePolicy, PageSize, PageSummary, PaginationController, parse_page_input,
    sanitize_page_input,
};
pub use query::Query;
pub use record::{User, UserField, UserStatus, format_usd};
pub use roster_states::TopologyError;
pub use selection::Selection;
pub use table::{TableSlot, TableState};
pub use view::{Density, Overlay, ViewState};
