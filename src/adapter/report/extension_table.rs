//! Extension Match Output
//!
//! 拡張機能一覧の出力（CSV / 固定幅テーブル）

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

use crate::domain::entities::vm_extension::ExtensionMatch;

const COLUMN_GAP: &str = "  ";

/// Output format of the extension listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
}

/// Write the header and one line per match
pub fn write_extension_matches<W: Write>(
    writer: W,
    matches: &[ExtensionMatch],
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Csv => write_csv(writer, matches),
        ReportFormat::Table => write_table(writer, matches),
    }
}

fn write_csv<W: Write>(writer: W, matches: &[ExtensionMatch]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(ExtensionMatch::HEADER)?;
    for row in matches {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_table<W: Write>(mut writer: W, matches: &[ExtensionMatch]) -> Result<()> {
    let mut widths = ExtensionMatch::HEADER.map(|h| h.chars().count());
    for row in matches {
        for (width, field) in widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(field.chars().count());
        }
    }

    writeln!(writer, "{}", format_line(&ExtensionMatch::HEADER, &widths))?;
    let separator = widths.map(|w| "-".repeat(w));
    writeln!(writer, "{}", format_line(&separator, &widths))?;
    for row in matches {
        writeln!(writer, "{}", format_line(&row.fields(), &widths))?;
    }
    writer.flush()?;
    Ok(())
}

fn format_line<S: AsRef<str>>(fields: &[S], widths: &[usize]) -> String {
    let line = fields
        .iter()
        .zip(widths)
        .map(|(field, width)| format!("{:<width$}", field.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}
