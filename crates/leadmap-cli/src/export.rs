//! CSV export of a finished search.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use leadmap_core::Lead;

/// Column header, written unquoted ahead of the quoted data rows.
pub(crate) const CSV_HEADER: &str = "Nome,Endereço,Telefone,Website,Avaliação,Cidade";

pub(crate) fn export_file_name(date: NaiveDate) -> String {
    format!("mapa_leads_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the header line and one fully quoted row per lead, in order.
pub(crate) fn write_leads_csv<W: Write>(mut out: W, leads: &[Lead]) -> anyhow::Result<()> {
    writeln!(out, "{CSV_HEADER}").context("failed to write CSV header")?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    for lead in leads {
        writer
            .write_record([
                lead.name.as_str(),
                lead.address.as_str(),
                lead.phone.as_str(),
                lead.website.as_str(),
                lead.rating.as_str(),
                lead.city.as_str(),
            ])
            .with_context(|| format!("failed to write CSV row for {}", lead.name))?;
    }

    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Exports `leads` to `dir/mapa_leads_export_<date>.csv`.
///
/// Returns `Ok(None)` without touching the filesystem when there are no leads.
pub(crate) fn export_csv(leads: &[Lead], dir: &Path, date: NaiveDate) -> anyhow::Result<Option<PathBuf>> {
    if leads.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(export_file_name(date));
    let file = File::create(&path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    write_leads_csv(file, leads)?;

    tracing::info!(path = %path.display(), count = leads.len(), "leads exported");
    Ok(Some(path))
}
