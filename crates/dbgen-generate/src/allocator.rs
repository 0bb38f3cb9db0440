//! Purchase allocation: which client each purchase row belongs to.
//!
//! Every client receives exactly one baseline row, in input order, before any
//! randomness is consumed. Rows beyond the baseline are drawn uniformly with
//! replacement from the full client list.

use rand::Rng;

use dbgen_core::{ClientId, Error, Result};

/// Number of rows actually produced for `requested_rows` over `clients` clients.
///
/// Never less than the client count: a lower request is silently raised so
/// that every client can be covered.
pub fn effective_rows(requested_rows: i64, clients: usize) -> Result<usize> {
    if clients == 0 {
        return Err(Error::config("no clients to allocate purchases against"));
    }
    let requested = usize::try_from(requested_rows).map_err(|_| {
        Error::config(format!("row count must be >= 0, got {requested_rows}"))
    })?;
    Ok(requested.max(clients))
}

/// Assigns a client to every purchase row.
///
/// Returns the baseline block (one row per client, input order) followed by
/// the remainder block (uniform draws, draw order). Only the remainder block
/// consumes `rng`, one draw per row.
pub fn allocate<R: Rng + ?Sized>(
    client_ids: &[ClientId],
    requested_rows: i64,
    rng: &mut R,
) -> Result<Vec<ClientId>> {
    let total = effective_rows(requested_rows, client_ids.len())?;

    let mut rows = Vec::with_capacity(total);
    rows.extend(client_ids.iter().cloned());

    for _ in client_ids.len()..total {
        let idx = rng.random_range(0..client_ids.len());
        rows.push(client_ids[idx].clone());
    }

    Ok(rows)
}
