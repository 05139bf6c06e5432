// Thread Concurrency Demos
// Four small demos, each spawning workers and joining them before reading
// the shared result:
// - printer: two interleaved printing loops
// - counter: mutex-guarded shared integer
// - concurrent_list: copy-on-write snapshot list
// - account: atomic balance with random deposits and withdrawals

pub mod account;
pub mod concurrent_list;
pub mod config;
pub mod counter;
pub mod demos;
pub mod error;
pub mod pause;
pub mod printer;
pub mod task;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use task::{spawn_and_join, Task};
