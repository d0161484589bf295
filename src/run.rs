use anyhow::Result;

use crate::engine;
use crate::ledger::{schema, Ledger, LedgerStore};
use crate::models::{parse_amount, ExpenseBreakdown, ExpenseInput, LedgerRecord};

pub(crate) fn as_cli(args: &[String], store: &LedgerStore) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "split" => cli_split(&args[2..]),
        "register" => cli_register(&args[2..], store),
        "history" => cli_history(store),
        "undo" => cli_undo(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("flatsplit {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FlatSplit — shared household expense splitter");
    println!();
    println!("Usage: flatsplit <command> [amounts]");
    println!();
    println!("Commands:");
    println!("  split [amounts]               Compute this month's split without saving");
    println!("  register [amounts]            Compute the split and append it to the ledger");
    println!("  history                       Print the registered months");
    println!("  undo                          Remove the most recently registered month");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Amounts:");
    println!("  --water <n> --electricity <n> --rent <n> --connectivity <n> --gas <n>");
    println!("  --streaming <name>=<n>        Repeatable, one per subscription");
    println!();
    println!("Non-numeric or negative amounts count as zero.");
}

/// Collect a complete input value from `--flag value` pairs. Unknown flags
/// are ignored; missing categories stay at zero.
fn parse_input(args: &[String]) -> ExpenseInput {
    let mut input = ExpenseInput::default();
    for pair in args.windows(2) {
        let value = pair[1].as_str();
        match pair[0].as_str() {
            "--water" => input.water = parse_amount(value),
            "--electricity" => input.electricity = parse_amount(value),
            "--rent" => input.rent = parse_amount(value),
            "--connectivity" => input.connectivity = parse_amount(value),
            "--gas" => input.gas = parse_amount(value),
            "--streaming" => {
                let (name, amount) = value.split_once('=').unwrap_or((value, ""));
                input.streaming.push((name.to_string(), parse_amount(amount)));
            }
            _ => {}
        }
    }
    input
}

fn cli_split(args: &[String]) -> Result<()> {
    let input = parse_input(args);
    let breakdown = engine::compute(&input);
    print_breakdown(&input, &breakdown);
    Ok(())
}

fn cli_register(args: &[String], store: &LedgerStore) -> Result<()> {
    let input = parse_input(args);
    let breakdown = engine::compute(&input);
    print_breakdown(&input, &breakdown);

    let record = LedgerRecord::for_current_month(&input, &breakdown);
    let period = record.period.clone();
    let ledger = store.append(&record)?;
    println!();
    println!("Registered {period} ({} months on record)", ledger.len());
    Ok(())
}

fn cli_history(store: &LedgerStore) -> Result<()> {
    let ledger = store.load()?;
    if ledger.is_empty() {
        println!("No months registered yet");
        return Ok(());
    }
    print_history(&ledger);
    Ok(())
}

fn cli_undo(store: &LedgerStore) -> Result<()> {
    let (ledger, removed) = store.remove_last()?;
    match removed {
        Some(period) => println!("Removed {period} ({} months remain)", ledger.len()),
        None => println!("Ledger is already empty, nothing to remove"),
    }
    Ok(())
}

// ── Rendering ────────────────────────────────────────────────

fn print_breakdown(input: &ExpenseInput, breakdown: &ExpenseBreakdown) {
    println!("FlatSplit — monthly split");
    println!("{}", "─".repeat(40));
    println!("  Basic total:       {:>10.2}", breakdown.basic_total);
    println!("  With connectivity: {:>10.2}", breakdown.full_total);
    println!("  Majority (60%):    {:>10.2}", breakdown.share_majority);
    println!("  Minority (40%):    {:>10.2}", breakdown.share_minority);

    if !input.streaming.is_empty() {
        println!();
        println!("Streaming:");
        for (name, amount) in &input.streaming {
            println!("  {name:<18} {amount:>10.2}");
        }
        println!("  {:<18} {:>10.2}", "total", breakdown.streaming_total);
        println!("  {:<18} {:>10.2}", "half", breakdown.streaming_half);
    }

    println!();
    println!(
        "  Majority adjusted: {:>10.2}",
        breakdown.share_majority_adjusted
    );
}

fn print_history(ledger: &Ledger) {
    let widths: Vec<usize> = ledger
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            ledger
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(String::len)
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = ledger
        .columns
        .iter()
        .zip(&widths)
        .map(|(name, w)| {
            let w = *w;
            format!("{name:<w$}")
        })
        .collect();
    println!("{}", header.join("  "));
    println!("{}", "─".repeat(header.join("  ").len()));

    for row in &ledger.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&ledger.columns)
            .zip(&widths)
            .map(|((value, name), w)| {
                let w = *w;
                match schema::kind_of(name) {
                    schema::ColumnKind::Period => format!("{value:<w$}"),
                    schema::ColumnKind::Amount => format!("{value:>w$}"),
                }
            })
            .collect();
        println!("{}", line.join("  "));
    }
}
