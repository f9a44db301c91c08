use crate::models::errors::MissingColumn;

pub const BOOKING_DATE: &str = "Buchungstag";
pub const VALUE_DATE: &str = "Valuta";
pub const AMOUNT: &str = "Umsatz";
pub const RUNNING_BALANCE: &str = "Saldo";
pub const DEBIT_CREDIT: &str = "Soll/Haben";

const STRUCTURAL_COLUMNS: [&str; 4] = [BOOKING_DATE, VALUE_DATE, AMOUNT, RUNNING_BALANCE];

/// One column of a [`Layout`], resolved to the transaction field it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column<'a> {
    BookingDate,
    ValueDate,
    Amount,
    RunningBalance,
    Detail(&'a str)
}

/// Ordered column names of ledger rows.
///
/// Every name that is not one of the four structural columns is a passthrough
/// detail column. A statement and the ledger it is merged into must share a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    columns: Vec<String>
}

impl Layout {
    pub fn new(columns: Vec<String>) -> Result<Self, MissingColumn> {
        for required in STRUCTURAL_COLUMNS {
            if !columns.iter().any(|column| column == required) {
                return Err(MissingColumn(required));
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn detail_count(&self) -> usize {
        self.iter().filter(|column| matches!(column, Column::Detail(_))).count()
    }

    /// Resolves every column in order. Only the first occurrence of a structural
    /// name is structural; repeated names are treated as details.
    pub fn iter(&self) -> impl Iterator<Item = Column<'_>> {
        let mut seen = [false; STRUCTURAL_COLUMNS.len()];

        self.columns.iter().map(move |name| {
            let position = STRUCTURAL_COLUMNS.iter().position(|structural| *structural == name.as_str());

            match position {
                Some(index) if !seen[index] => {
                    seen[index] = true;
                    match index {
                        0 => Column::BookingDate,
                        1 => Column::ValueDate,
                        2 => Column::Amount,
                        _ => Column::RunningBalance
                    }
                }
                _ => Column::Detail(name.as_str())
            }
        })
    }
}
