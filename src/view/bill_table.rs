use crate::models::BillRecord;
use crate::view::format::{compact, grouped};

/// Date, volume, liters and the delete action
pub const BILL_COLUMNS: usize = 4;

pub const NO_BILLS_TEXT: &str = "No bill records yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: i64,
    pub date: String,
    pub volume: String,
    pub liters: String,
}

impl BillRow {
    fn from_record(record: &BillRecord) -> Self {
        Self {
            id: record.id,
            date: record.date.clone(),
            volume: format!("{} m³", compact(record.amount_m3)),
            liters: format!("{} L", grouped(record.liters)),
        }
    }
}

/// Body of the bill history table
#[derive(Debug, Clone, PartialEq)]
pub enum BillTable {
    /// Single placeholder row spanning `colspan` columns
    Placeholder { colspan: usize, text: &'static str },
    Rows(Vec<BillRow>),
}

impl Default for BillTable {
    fn default() -> Self {
        Self::from_records(&[])
    }
}

impl BillTable {
    /// Rows in the order the server sent them
    pub fn from_records(records: &[BillRecord]) -> Self {
        if records.is_empty() {
            Self::Placeholder {
                colspan: BILL_COLUMNS,
                text: NO_BILLS_TEXT,
            }
        } else {
            Self::Rows(records.iter().map(BillRow::from_record).collect())
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Placeholder { .. } => 1,
            Self::Rows(rows) => rows.len(),
        }
    }
}

/// Resolve the record id carried by a `data-record-id` attribute
pub fn parse_record_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> BillRecord {
        BillRecord {
            id,
            date: format!("2026-0{}-01", id),
            amount_m3: 12.5,
            liters: 12500.0,
        }
    }

    #[test]
    fn test_empty_history_has_one_spanning_row() {
        let table = BillTable::from_records(&[]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table,
            BillTable::Placeholder {
                colspan: BILL_COLUMNS,
                text: NO_BILLS_TEXT
            }
        );
    }

    #[test]
    fn test_one_row_per_record_keyed_by_id() {
        let records: Vec<BillRecord> = (1..=3).map(record).collect();
        let table = BillTable::from_records(&records);
        assert_eq!(table.row_count(), 3);

        let BillTable::Rows(rows) = table else {
            panic!("expected rows");
        };
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(rows[0].volume, "12.5 m³");
        assert_eq!(rows[0].liters, "12,500 L");
    }

    #[test]
    fn test_fractional_liters_are_not_rounded() {
        let mut bill = record(4);
        bill.liters = 12500.25;
        let BillTable::Rows(rows) = BillTable::from_records(&[bill]) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].liters, "12,500.25 L");
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("42"), Some(42));
        assert_eq!(parse_record_id(" 7 "), Some(7));
        assert_eq!(parse_record_id("abc"), None);
    }
}
