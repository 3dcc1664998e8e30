//! Presenters turning API payloads into render-ready data.
//! Nothing in here touches the DOM.

pub mod bill_table;
pub mod charts;
pub mod cost;
pub mod form;
pub mod format;
pub mod notice;
pub mod rich_text;
pub mod status;
pub mod weather;

pub use bill_table::{BillRow, BillTable};
pub use charts::{ChartSlot, PieChart, TrendChart};
pub use cost::CostView;
pub use form::{EntryForm, ValidationError};
pub use notice::{Notice, NoticeLevel};
pub use rich_text::RichText;
pub use status::{Severity, StatusView};
pub use weather::WeatherPanel;
