//! Command resolution by literal prefix.
//!
//! The table is scanned top to bottom and the first prefix that matches
//! wins, so every specific prefix ("report mingguan", "total hari ini")
//! must sit above the catch-all that shares its root ("report", "total").

use catat_core::{Command, CommandKind};

/// Ordered (prefix, command) table. Order is significant.
pub const COMMANDS: &[(&str, CommandKind)] = &[
    ("tambah kategori", CommandKind::AddCategory),
    ("hapus terakhir", CommandKind::DeleteLast),
    ("report mingguan", CommandKind::ReportWeekly),
    ("report bulanan", CommandKind::ReportMonthly),
    ("report tahunan", CommandKind::ReportYearly),
    ("laporan mingguan", CommandKind::ReportWeekly),
    ("laporan bulanan", CommandKind::ReportMonthly),
    ("laporan tahunan", CommandKind::ReportYearly),
    // catch-all: report 2025, report januari 2025, ...
    ("report", CommandKind::ReportCustom),
    ("laporan", CommandKind::ReportCustom),
    ("total hari ini", CommandKind::TotalToday),
    ("total minggu ini", CommandKind::TotalWeek),
    ("total bulan ini", CommandKind::TotalMonth),
    ("total tahun ini", CommandKind::TotalYear),
    ("total", CommandKind::TotalCustom),
    ("kategori", CommandKind::ListCategories),
    ("bantuan", CommandKind::Help),
    ("help", CommandKind::Help),
    ("ringkasan hari ini", CommandKind::SummaryToday),
    ("ringkasan minggu ini", CommandKind::SummaryWeek),
    ("ringkasan bulan ini", CommandKind::SummaryMonth),
    ("ringkasan tahun ini", CommandKind::SummaryYear),
    ("ringkasan", CommandKind::SummaryCustom),
    ("riwayat", CommandKind::History),
    ("history", CommandKind::History),
    ("perbandingan minggu", CommandKind::CompareWeek),
    ("perbandingan bulan", CommandKind::CompareMonth),
    ("perbandingan", CommandKind::CompareCustom),
];

/// Resolve a message to a command. Arguments are the trimmed remainder
/// after the prefix, lowercased along with the rest of the message.
pub fn resolve(message: &str) -> Option<Command> {
    let message = message.trim().to_lowercase();

    COMMANDS.iter().find_map(|(prefix, kind)| {
        let rest = message.strip_prefix(*prefix)?;
        let args = rest.trim();
        Some(Command::new(
            *kind,
            (!args.is_empty()).then(|| args.to_string()),
        ))
    })
}
