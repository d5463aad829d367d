use crate::domain::report::Report;
use std::io::{self, Write};

/// Renders a sales report as plain text lines.
pub fn write_report<W: Write>(mut out: W, report: &Report) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Sales Report ===")?;
    writeln!(
        out,
        "Period: {} to {}",
        report.period_start.format("%Y-%m-%d %H:%M:%S"),
        report.period_end.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out, "Orders: {}", report.count)?;
    writeln!(out, "Total sales: ${}", report.total_sales)?;
    out.flush()
}
