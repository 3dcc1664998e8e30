mod bill_tools;
mod cost_card;
mod estimate_card;
mod user_type_select;

pub use bill_tools::BillTools;
