//! Column headers of the persisted datasets.

/// Header of the client identifier column, shared by both datasets.
pub const CLIENT_CODE: &str = "CódigoCliente";

/// Accepted spellings of the client identifier header, in lookup order.
pub const CLIENT_CODE_ALIASES: &[&str] = &["CódigoCliente", "CodigoCliente", "Codigo", "Código"];

pub const CLIENT_HEADER: [&str; 5] = [CLIENT_CODE, "NomeCompleto", "Celular", "CPF", "Email"];

pub const PURCHASE_HEADER: [&str; 4] = [CLIENT_CODE, "DataCompra", "Valor", "CódigoFilial"];

pub const CLIENT_SHEET: &str = "Clientes";

pub const PURCHASE_SHEET: &str = "Compras";
