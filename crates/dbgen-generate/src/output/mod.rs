pub mod csv;
pub mod xlsx;

pub use self::csv::{write_clients_csv, write_purchases_csv};
pub use self::xlsx::{
    CURRENCY_FORMAT, MAX_SHEET_ROWS, check_sheet_capacity, write_clients_xlsx,
    write_purchases_xlsx,
};
