//! Indonesian reply text.

use catat_core::period::DATE_LABEL_FORMAT;
use catat_core::{CommandKind, DatedExpenseBatch, ParsedExpense};

use crate::ledger::Record;

/// `1500000` -> `Rp1.500.000`
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Makan Rp50.000 (warteg)`
pub fn item_line(category: &str, amount: i64, description: Option<&str>) -> String {
    let desc = description.map(|d| format!(" ({d})")).unwrap_or_default();
    format!("{} {}{}", capitalize(category), format_rupiah(amount), desc)
}

pub fn expense_line(e: &ParsedExpense) -> String {
    item_line(&e.category, e.amount, e.description.as_deref())
}

pub fn record_line(r: &Record) -> String {
    item_line(&r.category, r.amount, r.description.as_deref())
}

pub fn confirmation_prompt(expenses: &[ParsedExpense]) -> String {
    if let [only] = expenses {
        return format!(
            "Konfirmasi catat?\n{}\n\nReply: y=ya, n/g=tidak",
            expense_line(only)
        );
    }

    let mut lines = vec![format!("Konfirmasi catat {} pengeluaran?", expenses.len())];
    for (i, e) in expenses.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, expense_line(e)));
    }
    lines.push(format!(
        "\nTotal: {}",
        format_rupiah(catat_core::total_amount(expenses))
    ));
    lines.push("\nReply: y=ya, n/g=tidak".to_string());
    lines.join("\n")
}

/// Confirmation for a multi-date batch, grouped by date.
pub fn batch_confirmation_prompt(batch: &DatedExpenseBatch) -> String {
    let mut lines = vec![format!(
        "Konfirmasi catat {} pengeluaran di {} tanggal?",
        batch.expense_count(),
        batch.len()
    )];
    for day in batch.iter() {
        lines.push(format!("\n{}:", day.date.format(DATE_LABEL_FORMAT)));
        for (i, e) in day.expenses.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, expense_line(e)));
        }
    }
    lines.push(format!("\nTotal: {}", format_rupiah(batch.total())));
    lines.push("\nReply: y=ya, n/g=tidak".to_string());
    lines.join("\n")
}

pub fn unknown_categories(names: &[String]) -> String {
    format!(
        "Kategori tidak ditemukan: {}\n\nKetik 'kategori' untuk lihat daftar, atau 'tambah kategori <nama>' untuk menambah.",
        names.join(", ")
    )
}

pub fn unrecognized() -> &'static str {
    "Maaf, pesan tidak dikenali.\n\n\
     Contoh catat pengeluaran:\n\
     makan 50000 warteg\n\n\
     Ketik 'bantuan' untuk melihat panduan lengkap."
}

/// Word users type for a period-taking command.
pub fn command_word(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::ReportCustom => "report",
        CommandKind::TotalCustom => "total",
        CommandKind::SummaryCustom => "ringkasan",
        CommandKind::CompareCustom => "perbandingan",
        _ => kind.as_str(),
    }
}

pub fn period_format_error(kind: CommandKind) -> String {
    let word = command_word(kind);
    let examples = [
        "2025",
        "januari 2025",
        "jan 2025",
        "2024-2025",
        "jan 2024 hingga jun 2025",
        "01/01/2024 hingga 31/12/2025",
    ];
    let mut out = format!("Format tidak dikenali.\n\nContoh {word}:");
    for ex in examples {
        out.push_str(&format!("\n- {word} {ex}"));
    }
    out
}

pub fn comparison_unsupported() -> &'static str {
    "Perbandingan hanya bisa untuk bulan atau tahun spesifik.\n\n\
     Contoh:\n- perbandingan januari 2025\n- perbandingan 2025"
}

pub fn add_category_usage() -> &'static str {
    "Format: tambah kategori <nama>\nContoh: tambah kategori kopi"
}

pub fn help() -> &'static str {
    "CATAT PENGELUARAN:
<kategori> <nominal> [keterangan]
Contoh:
  makan 50000 warteg
  transport 25rb gojek
  belanja 1.5jt alfamart

Banyak transaksi sekaligus:
  makan 50rb + transport 25rb gojek

Beberapa tanggal (ddmmyy):
  250226
  makan 7k nasduk
  260226
  makan 5k nasi

LIHAT TOTAL & RINGKASAN:
- total hari ini / minggu ini / bulan ini / tahun ini
- total 2025
- total jan 2025
- ringkasan hari ini / minggu ini / bulan ini / tahun ini
- ringkasan jan 2025

PERBANDINGAN (vs periode sebelumnya):
- perbandingan minggu
- perbandingan bulan
- perbandingan jan 2025
- perbandingan 2025

LAPORAN:
- report mingguan / report bulanan / report tahunan
- report 2024-2025
- report jan 2024 hingga jun 2025
- report 01/01/2024 hingga 31/12/2025

KATEGORI:
- kategori: lihat daftar kategori
- tambah kategori <nama>: tambah kategori baru

LAINNYA:
- hapus terakhir: hapus transaksi terakhir
- riwayat: lihat 5 transaksi terakhir
- bantuan: tampilkan pesan ini

Tanpa argumen, report/total/ringkasan/perbandingan memakai bulan ini."
}
