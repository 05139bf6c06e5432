use crate::task::Task;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;

// =============================================================================
// Account: lock-free balance
// =============================================================================

/// Balance updated only through atomic adds. No overdraft check: the balance
/// is allowed to go negative.
#[derive(Debug, Default)]
pub struct BankAccount {
    balance: AtomicI64,
}

impl BankAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&self, amount: u32) {
        self.balance.fetch_add(i64::from(amount), Ordering::Relaxed);
    }

    pub fn withdraw(&self, amount: u32) {
        self.balance.fetch_sub(i64::from(amount), Ordering::Relaxed);
    }

    /// Join the clients first; relaxed adds are only ordered by the join.
    pub fn balance(&self) -> i64 {
        self.balance.load(Ordering::Relaxed)
    }

    pub fn apply(&self, transaction: Transaction) {
        match transaction {
            Transaction::Deposit(amount) => self.deposit(amount),
            Transaction::Withdraw(amount) => self.withdraw(amount),
        }
    }
}

// =============================================================================
// Transactions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(u32),
    Withdraw(u32),
}

impl Transaction {
    /// Amount uniform in `0..max_amount`, deposit or withdraw with equal odds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_amount: u32) -> Self {
        let amount = rng.gen_range(0..max_amount);
        if rng.gen_bool(0.5) {
            Transaction::Deposit(amount)
        } else {
            Transaction::Withdraw(amount)
        }
    }

    /// `"<who> deposited: <amount>"` or `"<who> withdrew: <amount>"`.
    pub fn log_line(self, who: &str) -> String {
        match self {
            Transaction::Deposit(amount) => format!("{} deposited: {}", who, amount),
            Transaction::Withdraw(amount) => format!("{} withdrew: {}", who, amount),
        }
    }

    pub fn delta(self) -> i64 {
        match self {
            Transaction::Deposit(amount) => i64::from(amount),
            Transaction::Withdraw(amount) => -i64::from(amount),
        }
    }
}

/// Per-client generator: derived from `seed` when given, OS entropy otherwise.
pub fn client_rng(seed: Option<u64>, client: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(client as u64)),
        None => StdRng::from_entropy(),
    }
}

// =============================================================================
// Client worker
// =============================================================================

pub struct BankClient {
    id: usize,
    account: Arc<BankAccount>,
    iterations: usize,
    max_amount: u32,
    rng: StdRng,
}

impl BankClient {
    pub fn new(
        id: usize,
        account: Arc<BankAccount>,
        iterations: usize,
        max_amount: u32,
        rng: StdRng,
    ) -> Self {
        Self {
            id,
            account,
            iterations,
            max_amount,
            rng,
        }
    }
}

impl Task for BankClient {
    /// Every transaction this client applied, in order.
    type Output = Vec<Transaction>;

    fn name(&self) -> String {
        format!("client-{}", self.id)
    }

    fn run(mut self) -> Vec<Transaction> {
        let name = thread::current().name().unwrap_or("unnamed").to_string();
        let mut applied = Vec::new();

        for _ in 0..self.iterations {
            let transaction = Transaction::random(&mut self.rng, self.max_amount);
            self.account.apply(transaction);
            println!("{}", transaction.log_line(&name));
            applied.push(transaction);
        }
        applied
    }
}
