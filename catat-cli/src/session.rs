//! One sender's conversation: pending confirmation, known categories and
//! the records confirmed so far.

use catat_core::period::DATE_LABEL_FORMAT;
use catat_core::{
    Command, CommandKind, Confirmation, ParsedExpense, Period, RelativePeriod, check_categories,
};
use catat_parse::{PeriodArg, Routed, route};
use chrono::NaiveDate;

use crate::ledger::{Ledger, Record};
use crate::reply::{self, capitalize, format_rupiah, record_line};

const HISTORY_LIMIT: usize = 5;

/// What a period command shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Report,
    Total,
    Summary,
    Compare,
}

impl View {
    fn of(kind: CommandKind) -> Option<Self> {
        use CommandKind::*;
        match kind {
            ReportWeekly | ReportMonthly | ReportYearly | ReportCustom => Some(View::Report),
            TotalToday | TotalWeek | TotalMonth | TotalYear | TotalCustom => Some(View::Total),
            SummaryToday | SummaryWeek | SummaryMonth | SummaryYear | SummaryCustom => {
                Some(View::Summary)
            }
            CompareWeek | CompareMonth | CompareCustom => Some(View::Compare),
            _ => None,
        }
    }
}

/// A labelled inclusive date window.
#[derive(Debug, Clone)]
struct Window {
    label: String,
    bounds: (NaiveDate, NaiveDate),
}

pub struct Session {
    defaults: Vec<String>,
    custom: Vec<String>,
    ledger: Ledger,
    pending: Option<Vec<Record>>,
    today: NaiveDate,
}

impl Session {
    pub fn new(known: &[String], today: NaiveDate) -> Self {
        Self {
            defaults: known.iter().map(|k| k.trim().to_lowercase()).collect(),
            custom: Vec::new(),
            ledger: Ledger::new(),
            pending: None,
            today,
        }
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn known(&self) -> Vec<&str> {
        self.defaults
            .iter()
            .chain(&self.custom)
            .map(String::as_str)
            .collect()
    }

    /// Reply to one message. Blank messages get no reply.
    pub fn handle(&mut self, message: &str) -> Option<String> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        if self.pending.is_some() {
            if let Some(answer) = Confirmation::parse(message) {
                return Some(self.confirm(answer));
            }
            tracing::debug!("pending expenses dropped by a new message");
            self.pending = None;
        }

        let reply = match route(message) {
            Routed::Command { command, period } => self.command(command, period),
            Routed::DatedBatch { batch } => {
                let items: Vec<(NaiveDate, ParsedExpense)> = batch
                    .iter()
                    .flat_map(|day| day.expenses.iter().map(|e| (day.date, e.clone())))
                    .collect();
                self.propose(items, reply::batch_confirmation_prompt(&batch))
            }
            Routed::Expenses { expenses } => {
                let prompt = reply::confirmation_prompt(&expenses);
                let items = expenses.into_iter().map(|e| (self.today, e)).collect();
                self.propose(items, prompt)
            }
            Routed::Unrecognized => reply::unrecognized().to_string(),
        };
        Some(reply)
    }

    /// Hold expenses for confirmation unless a category is unknown.
    fn propose(&mut self, items: Vec<(NaiveDate, ParsedExpense)>, prompt: String) -> String {
        let expenses: Vec<ParsedExpense> = items.iter().map(|(_, e)| e.clone()).collect();
        let check = check_categories(&expenses, &self.known());
        if !check.all_known() {
            return reply::unknown_categories(&check.unknown);
        }

        self.pending = Some(
            items
                .into_iter()
                .map(|(date, e)| Record::new(date, e))
                .collect(),
        );
        prompt
    }

    fn confirm(&mut self, answer: Confirmation) -> String {
        let Some(records) = self.pending.take() else {
            return "Tidak ada transaksi yang menunggu konfirmasi.".to_string();
        };
        if answer == Confirmation::No {
            return "Dibatalkan.".to_string();
        }

        let lines: Vec<String> = records.iter().map(record_line).collect();
        let subtotal = records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.amount));
        let count = records.len();
        for record in records {
            self.ledger.add(record);
        }

        let mut out = match lines.as_slice() {
            [only] => format!("Tercatat: {only}"),
            _ => format!(
                "Tercatat {count} pengeluaran:\n- {}\nSubtotal: {}",
                lines.join("\n- "),
                format_rupiah(subtotal)
            ),
        };
        let today = self.ledger.total((self.today, self.today));
        out.push_str(&format!("\n\nTotal hari ini: {}", format_rupiah(today)));
        out
    }

    fn command(&mut self, command: Command, period: Option<PeriodArg>) -> String {
        let kind = command.name;
        match kind {
            CommandKind::AddCategory => self.add_category(command.args.as_deref()),
            CommandKind::DeleteLast => match self.ledger.delete_last() {
                Some(r) => format!("Dihapus: {}", record_line(&r)),
                None => "Tidak ada pengeluaran yang bisa dihapus.".to_string(),
            },
            CommandKind::ListCategories => self.list_categories(),
            CommandKind::Help => reply::help().to_string(),
            CommandKind::History => self.history(),
            _ => self.period_command(kind, period),
        }
    }

    fn add_category(&mut self, name: Option<&str>) -> String {
        let Some(name) = name.map(|n| n.trim().to_lowercase()).filter(|n| !n.is_empty()) else {
            return reply::add_category_usage().to_string();
        };
        if self.known().contains(&name.as_str()) {
            return format!("Kategori '{name}' sudah ada.");
        }
        let reply = format!("Kategori '{name}' berhasil ditambahkan.");
        self.custom.push(name);
        reply
    }

    fn list_categories(&self) -> String {
        let mut out = format!("Daftar Kategori:\n\nDefault: {}", self.defaults.join(", "));
        if !self.custom.is_empty() {
            out.push_str(&format!("\nCustom: {}", self.custom.join(", ")));
        }
        out.push_str("\n\nUntuk menambah kategori:\ntambah kategori <nama>");
        out
    }

    fn history(&self) -> String {
        if self.ledger.is_empty() {
            return "Belum ada transaksi.".to_string();
        }
        let mut lines = vec![format!("{HISTORY_LIMIT} TRANSAKSI TERAKHIR")];
        for (i, r) in self.ledger.history(HISTORY_LIMIT).enumerate() {
            lines.push(format!(
                "{}. {} - {}",
                i + 1,
                self.when(r.date),
                record_line(r)
            ));
        }
        lines.join("\n")
    }

    fn when(&self, date: NaiveDate) -> String {
        match (self.today - date).num_days() {
            0 => "Hari ini".to_string(),
            1 => "Kemarin".to_string(),
            n @ 2..=6 => format!("{n} hari lalu"),
            _ => date.format(DATE_LABEL_FORMAT).to_string(),
        }
    }

    fn relative(&self, window: RelativePeriod) -> (Window, Window) {
        (
            Window {
                label: window.label().to_string(),
                bounds: window.bounds(self.today),
            },
            Window {
                label: window.previous_label().to_string(),
                bounds: window.previous_bounds(self.today),
            },
        )
    }

    fn period_command(&self, kind: CommandKind, period: Option<PeriodArg>) -> String {
        let Some(view) = View::of(kind) else {
            return reply::unrecognized().to_string();
        };

        let (current, previous) = if let Some(window) = kind.relative_period() {
            let (current, previous) = self.relative(window);
            (current, Some(previous))
        } else {
            match period {
                None | Some(PeriodArg::Missing) => {
                    let (current, previous) = self.relative(RelativePeriod::Month);
                    (current, Some(previous))
                }
                Some(PeriodArg::Invalid(_)) => return reply::period_format_error(kind),
                Some(PeriodArg::Parsed(p)) => {
                    if view == View::Compare && !p.supports_comparison() {
                        return reply::comparison_unsupported().to_string();
                    }
                    (window_of(&p), p.previous().as_ref().map(window_of))
                }
            }
        };

        match (view, previous) {
            (View::Report, _) => self.report(&current),
            (View::Total, _) => self.total(&current),
            (View::Summary, _) => self.summary(&current),
            (View::Compare, Some(previous)) => self.compare(&current, &previous),
            (View::Compare, None) => reply::comparison_unsupported().to_string(),
        }
    }

    fn category_lines(&self, window: &Window) -> Vec<String> {
        self.ledger
            .by_category(window.bounds)
            .into_iter()
            .map(|(c, t)| format!("- {}: {}", capitalize(&c), format_rupiah(t)))
            .collect()
    }

    fn total(&self, window: &Window) -> String {
        let mut out = format!(
            "Total pengeluaran {}: {}",
            window.label,
            format_rupiah(self.ledger.total(window.bounds))
        );
        let details = self.category_lines(window);
        if !details.is_empty() {
            out.push_str("\n\nDetail per kategori:\n");
            out.push_str(&details.join("\n"));
        }
        out
    }

    fn summary(&self, window: &Window) -> String {
        let count = self.ledger.between(window.bounds).count();
        if count == 0 {
            return format!("Tidak ada pengeluaran untuk {}.", window.label);
        }
        let grand = self.ledger.total(window.bounds);

        let mut lines = vec![
            format!("RINGKASAN {}", window.label.to_uppercase()),
            format!("Total: {}", format_rupiah(grand)),
            String::new(),
            "Per kategori:".to_string(),
        ];
        for (category, total) in self.ledger.by_category(window.bounds) {
            lines.push(format!(
                "- {}: {} ({}%)",
                capitalize(&category),
                format_rupiah(total),
                percent_of(total, grand)
            ));
        }
        lines.push(String::new());
        lines.push(format!("Transaksi: {count} kali"));
        lines.join("\n")
    }

    fn compare(&self, current: &Window, previous: &Window) -> String {
        let now = self.ledger.total(current.bounds);
        let before = self.ledger.total(previous.bounds);

        let mut lines = vec![format!(
            "Total pengeluaran {}: {}",
            current.label,
            format_rupiah(now)
        )];
        if before > 0 {
            let change = (now - before) as f64 / before as f64 * 100.0;
            let sign = if change >= 0.0 { "+" } else { "" };
            lines.push(format!(
                "vs {}: {} ({sign}{change:.1}%)",
                previous.label,
                format_rupiah(before)
            ));
        } else {
            lines.push(format!("vs {}: Rp0 (tidak ada data)", previous.label));
        }

        let details = self.category_lines(current);
        if !details.is_empty() {
            lines.push(String::new());
            lines.push("Per kategori:".to_string());
            lines.extend(details);
        }
        lines.join("\n")
    }

    fn report(&self, window: &Window) -> String {
        let records: Vec<&Record> = self.ledger.between(window.bounds).collect();
        if records.is_empty() {
            return format!("Tidak ada pengeluaran untuk {}.", window.label);
        }
        let mut lines = vec![format!("LAPORAN {}", window.label.to_uppercase())];
        for r in &records {
            lines.push(format!(
                "{} {}",
                r.date.format(DATE_LABEL_FORMAT),
                record_line(r)
            ));
        }
        lines.push(format!(
            "\nTotal: {} ({} transaksi)",
            format_rupiah(self.ledger.total(window.bounds)),
            records.len()
        ));
        lines.join("\n")
    }
}

fn window_of(period: &Period) -> Window {
    Window {
        label: period.label(),
        bounds: period.bounds(),
    }
}

/// Whole-number share, rounded half up.
fn percent_of(part: i64, whole: i64) -> i64 {
    if whole <= 0 {
        return 0;
    }
    let (part, whole) = (i128::from(part), i128::from(whole));
    ((part * 200 + whole) / (whole * 2)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session() -> Session {
        let known: Vec<String> = ["makan", "transport", "belanja"]
            .map(String::from)
            .to_vec();
        Session::new(&known, date(2026, 2, 25))
    }

    fn say(s: &mut Session, msg: &str) -> String {
        s.handle(msg).unwrap()
    }

    #[test]
    fn test_confirm_single_expense() {
        let mut s = session();
        let prompt = say(&mut s, "makan 50rb warteg");
        assert!(prompt.starts_with("Konfirmasi catat?"));
        assert!(s.has_pending());

        let done = say(&mut s, "y");
        assert_eq!(
            done,
            "Tercatat: Makan Rp50.000 (warteg)\n\nTotal hari ini: Rp50.000"
        );
        assert_eq!(s.ledger().len(), 1);
        assert!(!s.has_pending());
    }

    #[test]
    fn test_cancel_and_stray_confirmation() {
        let mut s = session();
        say(&mut s, "makan 50rb + transport 20rb");
        assert_eq!(say(&mut s, "batal"), "Dibatalkan.");
        assert!(s.ledger().is_empty());
        assert_eq!(s.handle("ya").as_deref(), Some(reply::unrecognized()));
    }

    #[test]
    fn test_new_message_clears_pending() {
        let mut s = session();
        say(&mut s, "makan 50rb");
        let out = say(&mut s, "total hari ini");
        assert!(!s.has_pending());
        assert_eq!(out, "Total pengeluaran hari ini: Rp0");
    }

    #[test]
    fn test_unknown_category_refuses_whole_message() {
        let mut s = session();
        let out = say(&mut s, "makan 50rb + kopi 20rb + pulsa 10rb");
        assert!(out.starts_with("Kategori tidak ditemukan: kopi, pulsa"));
        assert!(!s.has_pending());

        assert_eq!(say(&mut s, "tambah kategori Kopi"), "Kategori 'kopi' berhasil ditambahkan.");
        assert_eq!(say(&mut s, "tambah kategori kopi"), "Kategori 'kopi' sudah ada.");
        assert!(say(&mut s, "kopi 20rb").starts_with("Konfirmasi catat?"));
        assert!(say(&mut s, "kategori").contains("Custom: kopi"));
    }

    #[test]
    fn test_dated_batch_recorded_on_marker_dates() {
        let mut s = session();
        let prompt = say(&mut s, "240226\nmakan 7k\n250226\nbelanja 100k alfa");
        assert!(prompt.starts_with("Konfirmasi catat 2 pengeluaran di 2 tanggal?"));
        let done = say(&mut s, "ok");
        assert!(done.starts_with("Tercatat 2 pengeluaran:"));
        assert!(done.ends_with("Total hari ini: Rp100.000"));
        assert_eq!(s.ledger().total((date(2026, 2, 24), date(2026, 2, 24))), 7_000);
    }

    #[test]
    fn test_summary_percentages() {
        let mut s = session();
        say(&mut s, "makan 30rb + transport 10rb");
        say(&mut s, "y");
        let out = say(&mut s, "ringkasan bulan ini");
        assert_eq!(
            out,
            "RINGKASAN BULAN INI\nTotal: Rp40.000\n\nPer kategori:\n- Makan: Rp30.000 (75%)\n- Transport: Rp10.000 (25%)\n\nTransaksi: 2 kali"
        );
        assert_eq!(say(&mut s, "ringkasan 2024"), "Tidak ada pengeluaran untuk Tahun 2024.");
    }

    #[test]
    fn test_custom_period_errors() {
        let mut s = session();
        assert!(say(&mut s, "total kemarin").starts_with("Format tidak dikenali.\n\nContoh total:"));
        assert_eq!(
            say(&mut s, "perbandingan 2024-2025"),
            reply::comparison_unsupported()
        );
    }

    #[test]
    fn test_compare_against_previous_month() {
        let mut s = session();
        say(&mut s, "250126\nmakan 40rb\n250226\nmakan 50rb");
        say(&mut s, "y");
        let out = say(&mut s, "perbandingan februari 2026");
        assert!(out.starts_with("Total pengeluaran Februari 2026: Rp50.000\nvs Januari 2026: Rp40.000 (+25.0%)"));

        let out = say(&mut s, "perbandingan bulan");
        assert!(out.contains("vs bulan lalu: Rp40.000 (+25.0%)"));
    }

    #[test]
    fn test_history_and_delete_last() {
        let mut s = session();
        assert_eq!(say(&mut s, "riwayat"), "Belum ada transaksi.");
        say(&mut s, "200226\nmakan 5k\n240226\ntransport 3k");
        say(&mut s, "y");
        assert_eq!(
            say(&mut s, "riwayat"),
            "5 TRANSAKSI TERAKHIR\n1. Kemarin - Transport Rp3.000\n2. 5 hari lalu - Makan Rp5.000"
        );
        assert_eq!(say(&mut s, "hapus terakhir"), "Dihapus: Transport Rp3.000");
        assert_eq!(s.ledger().len(), 1);
    }

    #[test]
    fn test_blank_message_has_no_reply() {
        let mut s = session();
        assert_eq!(s.handle("   "), None);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(5, 0), 0);
    }
}
