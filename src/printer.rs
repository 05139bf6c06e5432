use crate::pause::Interrupt;
use crate::task::Task;
use colored::Colorize;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Number,
    Square,
}

impl Sequence {
    pub fn label(self) -> &'static str {
        match self {
            Sequence::Number => "Number",
            Sequence::Square => "Square",
        }
    }

    /// Widened before squaring, so no `u32` index can overflow.
    pub fn value(self, i: u32) -> u64 {
        let i = u64::from(i);
        match self {
            Sequence::Number => i,
            Sequence::Square => i * i,
        }
    }

    /// Lazily yields `"<label>: <value>"` for `i` in `1..=len`.
    pub fn lines(self, len: u32) -> impl Iterator<Item = String> {
        (1..=len).map(move |i| format!("{}: {}", self.label(), self.value(i)))
    }
}

/// Prints one sequence, pausing between lines.
pub struct Printer {
    sequence: Sequence,
    len: u32,
    pause: Duration,
    interrupt: Interrupt,
}

impl Printer {
    pub fn new(sequence: Sequence, len: u32, pause: Duration) -> Self {
        Self {
            sequence,
            len,
            pause,
            interrupt: Interrupt::never(),
        }
    }

    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }
}

impl Task for Printer {
    /// Lines in emission order.
    type Output = Vec<String>;

    fn name(&self) -> String {
        format!("printer-{}", self.sequence.label().to_lowercase())
    }

    fn run(self) -> Vec<String> {
        let mut emitted = Vec::new();
        for line in self.sequence.lines(self.len) {
            println!("{}", line);
            emitted.push(line);

            if let Err(err) = self.interrupt.pause(self.pause) {
                let name = thread::current().name().unwrap_or("unnamed").to_string();
                eprintln!("{} {}: {:?}", "[interrupted]".red(), name, err);
            }
        }
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pause::interrupt_pair;
    use crate::task::spawn_and_join;

    fn payload(line: &str) -> u64 {
        line.rsplit(": ").next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_sequences() {
        let numbers: Vec<_> = Sequence::Number.lines(3).collect();
        assert_eq!(numbers, vec!["Number: 1", "Number: 2", "Number: 3"]);

        let squares: Vec<_> = Sequence::Square.lines(4).collect();
        assert_eq!(squares, vec!["Square: 1", "Square: 4", "Square: 9", "Square: 16"]);

        assert_eq!(Sequence::Number.lines(0).count(), 0);
    }

    #[test]
    fn test_square_of_largest_index_does_not_overflow() {
        assert_eq!(Sequence::Square.value(u32::MAX), 18_446_744_065_119_617_025);
        assert!(Sequence::Square.value(u32::MAX - 1) < Sequence::Square.value(u32::MAX));
    }

    #[test]
    fn test_two_printers_each_emit_ten_increasing_lines() {
        let printers = vec![
            Printer::new(Sequence::Number, 10, Duration::from_millis(1)),
            Printer::new(Sequence::Square, 10, Duration::from_millis(1)),
        ];
        let streams = spawn_and_join(printers).unwrap();

        assert_eq!(streams.len(), 2);
        for (stream, sequence) in streams.iter().zip([Sequence::Number, Sequence::Square]) {
            assert_eq!(stream.len(), 10);
            assert!(stream.iter().all(|l| l.starts_with(sequence.label())));
            let values: Vec<u64> = stream.iter().map(|l| payload(l)).collect();
            let expected: Vec<u64> = (1..=10).map(|i| sequence.value(i)).collect();
            assert_eq!(values, expected);
            assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_interrupted_pause_continues_loop() {
        let (handle, interrupt) = interrupt_pair();
        handle.interrupt();
        handle.interrupt();

        let printer = Printer::new(Sequence::Number, 10, Duration::from_millis(1))
            .with_interrupt(interrupt);
        assert_eq!(printer.name(), "printer-number");

        let lines = printer.run();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.last().map(String::as_str), Some("Number: 10"));
    }
}
