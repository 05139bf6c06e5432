//! The four demos. Each builds its workers, runs them through
//! [`spawn_and_join`], then reads the shared state after the barrier.

use crate::account::{client_rng, BankAccount, BankClient, Transaction};
use crate::concurrent_list::{ConcurrentList, ListWorker};
use crate::config::DemoConfig;
use crate::counter::{Counter, CounterWorker};
use crate::error::Result;
use crate::printer::{Printer, Sequence};
use crate::task::spawn_and_join;
use std::sync::Arc;
use std::time::Duration;

/// Lines emitted by each printer, in the order the printers were spawned.
pub fn run_printers(len: u32, pause: Duration) -> Result<Vec<Vec<String>>> {
    let printers = vec![
        Printer::new(Sequence::Number, len, pause),
        Printer::new(Sequence::Square, len, pause),
    ];
    spawn_and_join(printers)
}

pub fn run_counter(workers: usize, increments: u64) -> Result<u64> {
    let counter = Arc::new(Counter::new());
    let tasks = (0..workers)
        .map(|id| CounterWorker::new(id, Arc::clone(&counter), increments))
        .collect();
    spawn_and_join(tasks)?;
    Ok(counter.get_count())
}

/// Final list contents once every worker has appended.
pub fn run_list(workers: usize) -> Result<Vec<String>> {
    let list = Arc::new(ConcurrentList::new());
    let tasks = (0..workers)
        .map(|id| ListWorker::new(id, Arc::clone(&list)))
        .collect();
    spawn_and_join(tasks)?;
    Ok(list.snapshot().to_vec())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankReport {
    pub balance: i64,
    /// One entry per client, in spawn order.
    pub history: Vec<Vec<Transaction>>,
}

impl BankReport {
    pub fn expected_balance(&self) -> i64 {
        self.history.iter().flatten().map(|t| t.delta()).sum()
    }
}

pub fn run_bank(
    clients: usize,
    iterations: usize,
    max_amount: u32,
    seed: Option<u64>,
) -> Result<BankReport> {
    let account = Arc::new(BankAccount::new());
    let tasks = (0..clients)
        .map(|id| {
            BankClient::new(
                id,
                Arc::clone(&account),
                iterations,
                max_amount,
                client_rng(seed, id),
            )
        })
        .collect();
    let history = spawn_and_join(tasks)?;
    Ok(BankReport {
        balance: account.balance(),
        history,
    })
}

pub fn final_counter_line(count: u64) -> String {
    format!("Final Counter Value: {}", count)
}

pub fn final_balance_line(balance: i64) -> String {
    format!("Final Account Balance: {}", balance)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub printed: Vec<Vec<String>>,
    pub final_count: u64,
    pub list: Vec<String>,
    pub bank: BankReport,
}

/// Runs the four demos one after another. `on_section` is called with each
/// demo's title before it starts.
pub fn run_all(config: &DemoConfig, mut on_section: impl FnMut(&str)) -> Result<Summary> {
    config.validate()?;

    on_section("Parallel Printers");
    let printed = run_printers(config.sequence_len()?, config.pause())?;

    on_section("Shared Counter");
    let final_count = run_counter(config.counter_workers, config.increments_per_worker)?;
    println!("{}", final_counter_line(final_count));

    on_section("Concurrent List");
    let list = run_list(config.list_workers)?;

    on_section("Bank Account");
    let bank = run_bank(
        config.bank_clients,
        config.transactions_per_client,
        config.max_amount,
        config.seed,
    )?;
    println!("{}", final_balance_line(bank.balance));

    Ok(Summary {
        printed,
        final_count,
        list,
        bank,
    })
}
