pub mod bills;
pub mod dashboard;
pub mod layout;
pub mod notice;
pub mod rich_text;

pub use bills::BillTools;
pub use dashboard::Dashboard;
