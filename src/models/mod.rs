pub mod activity;
pub mod bills;
pub mod records;
pub mod report;
pub mod status;
pub mod weather;

pub use activity::{AmountShape, Category, EfficiencyMode, ModeOption};
pub use bills::{BillBreakdown, CostRequest, CostResponse, EstimateRequest, ReverseEstimate, UserType};
pub use records::{AddPayload, MutationResponse, TargetPayload};
pub use report::{BillRecord, CategoryPie, DailyTrend, Period, ReportData};
pub use status::{Streak, Summary, TodayStatus};
pub use weather::WeatherAdvice;
