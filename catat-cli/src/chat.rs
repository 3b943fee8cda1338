//! Interactive chat: one message per blank-line-terminated block on stdin.

use anyhow::{Context, Result};
use catat_core::calendar::today_in;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::session::Session;

pub fn run_chat(cfg: &Config, sender: &str) -> Result<()> {
    if !cfg.access.allows(sender) {
        tracing::warn!(sender, "sender not allowed, ignoring messages");
        println!("Sender {sender} tidak diizinkan.");
        return Ok(());
    }

    let tz = cfg.locale.timezone.as_str();
    let mut session = Session::new(&cfg.categories.known, today_in(tz)?);

    println!("catat chat ({sender}). Akhiri pesan dengan baris kosong, Ctrl-D untuk keluar.");
    prompt()?;

    let stdin = io::stdin();
    let mut message = String::new();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        if !line.trim().is_empty() {
            message.push_str(&line);
            message.push('\n');
            continue;
        }
        respond(&mut session, &message, tz)?;
        message.clear();
        prompt()?;
    }
    respond(&mut session, &message, tz)?;

    let ledger = session.ledger();
    tracing::info!(records = ledger.len(), "chat session ended");
    println!(
        "\n{} pengeluaran tercatat di sesi ini (tidak disimpan).",
        ledger.len()
    );
    Ok(())
}

fn respond(session: &mut Session, message: &str, tz: &str) -> Result<()> {
    session.set_today(today_in(tz)?);
    if let Some(reply) = session.handle(message) {
        println!("\n{reply}\n");
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("flush stdout")
}
