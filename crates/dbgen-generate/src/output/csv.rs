use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dbgen_core::columns::{CLIENT_HEADER, PURCHASE_HEADER};
use dbgen_core::{ClientRecord, PurchaseRecord};

/// Write the client dataset. Returns the number of bytes written.
pub fn write_clients_csv<W: Write>(
    writer: W,
    records: &[ClientRecord],
) -> Result<u64, csv::Error> {
    write_rows(
        writer,
        &CLIENT_HEADER,
        records.iter().map(|record| {
            [
                record.code.as_str().to_string(),
                record.full_name.clone(),
                record.mobile.clone(),
                record.cpf.clone(),
                record.email.clone(),
            ]
        }),
    )
}

/// Write the purchase dataset with ISO dates and two-decimal amounts.
pub fn write_purchases_csv<W: Write>(
    writer: W,
    records: &[PurchaseRecord],
) -> Result<u64, csv::Error> {
    write_rows(
        writer,
        &PURCHASE_HEADER,
        records.iter().map(|record| {
            [
                record.client_ref.as_str().to_string(),
                record.date.format("%Y-%m-%d").to_string(),
                record.amount.to_string(),
                record.branch_code.as_str().to_string(),
            ]
        }),
    )
}

pub fn write_csv_file<F>(path: &Path, write: F) -> Result<u64, csv::Error>
where
    F: FnOnce(BufWriter<File>) -> Result<u64, csv::Error>,
{
    let file = File::create(path).map_err(csv::Error::from)?;
    write(BufWriter::new(file))
}

fn write_rows<W, I, const N: usize>(
    writer: W,
    header: &[&str; N],
    rows: I,
) -> Result<u64, csv::Error>
where
    W: Write,
    I: Iterator<Item = [String; N]>,
{
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
