// Domain types and value objects
mod fetch_status;
mod price_point;
mod selection;

// Re-export commonly used types to the world
pub use fetch_status::FetchStatus;
pub use price_point::{PricePoint, Series};
pub use selection::{Asset, ChartKind, ChartLocale, Currency, RefreshInterval, Selection, TimeRange};
