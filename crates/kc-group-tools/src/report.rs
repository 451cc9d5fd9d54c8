//! CSV membership report.

use std::io::Write;
use std::path::Path;

use kc_admin_client::MemberRecord;

/// Header row of the membership report.
pub const REPORT_HEADER: [&str; 2] = ["username", "firstName"];

/// Writes the membership report and returns the number of member rows.
///
/// The header is always written, even for an empty group.
pub fn write_member_report<W: Write>(writer: W, members: &[MemberRecord]) -> crate::CliResult<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(REPORT_HEADER)?;
    for member in members {
        wtr.write_record([member.username.as_str(), member.first_name.as_str()])?;
    }
    wtr.flush()?;

    Ok(members.len())
}

/// Writes the membership report to a file, replacing any existing one.
pub fn write_member_report_file(path: &Path, members: &[MemberRecord]) -> crate::CliResult<usize> {
    let file = std::fs::File::create(path)?;
    write_member_report(file, members)
}
