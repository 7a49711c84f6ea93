use std::io::{BufRead, Write};
use std::str::FromStr;

use log::info;

pub mod engine;
pub mod error;
pub mod strategies;
pub mod tasks;
pub mod testing;

pub use crate::engine::{cross_check, Divergence, Strategy, SubarraySumEngine};
pub use crate::error::{Error, Result};
pub use crate::strategies::Span;

/// Line-oriented input reader for competitive programming
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn next_line(&mut self) -> Result<String> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(Error::UnexpectedEof);
        }
        Ok(input.trim().to_string())
    }

    /// Parse the whole next line as a single value.
    pub fn parse<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.next_line()?;
        match line.parse::<T>() {
            Ok(value) => Ok(value),
            Err(e) => Err(Error::Parse {
                message: e.to_string(),
                line,
            }),
        }
    }

    /// Parse the next line as whitespace separated values.
    pub fn parse_vec<T>(&mut self) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.next_line()?;
        line.split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|e| Error::Parse {
                    line: line.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

/// Fast output writer for competitive programming (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        // writing into a Vec<u8> cannot fail
        let _ = write!(self.0, "{}", value);
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        let _ = writeln!(self.0, "{}", value);
    }

    pub fn flush_to(&self, mut sink: impl Write) -> Result<()> {
        sink.write_all(&self.0)?;
        sink.flush()?;
        Ok(())
    }

    pub(crate) fn into_string(self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Options shared by every task in a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Solve cases on the rayon pool.
    pub parallel: bool,
}

pub type SolveFn = fn(&mut Scanner, &mut Writer, &RunOptions) -> Result<()>;

/// A runnable task and the directory under `data/<group>/` holding its
/// recorded cases.
#[derive(Clone, Copy)]
pub struct Task {
    pub name: &'static str,
    pub dataset: &'static str,
    pub solve: SolveFn,
}

/// A named set of tasks, runnable by name from the command line.
pub struct TaskGroup {
    name: &'static str,
    tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, name: &'static str, dataset: &'static str, solve: SolveFn) -> Self {
        self.tasks.push(Task {
            name,
            dataset,
            solve,
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|task| task.name).collect()
    }

    pub fn get(&self, name: &str) -> Result<Task> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .copied()
            .ok_or_else(|| Error::UnknownTask {
                group: self.name.to_string(),
                task: name.to_string(),
                available: self.names().iter().map(|s| s.to_string()).collect(),
            })
    }

    /// Run a task over stdin, writing its output to stdout.
    pub fn run(&self, name: &str, options: &RunOptions) -> Result<()> {
        let task = self.get(name)?;
        info!("running {}/{} (parallel: {})", self.name, name, options.parallel);

        let mut scanner = Scanner::new(std::io::stdin().lock());
        let mut writer = Writer::new();
        (task.solve)(&mut scanner, &mut writer, options)?;
        writer.flush_to(std::io::stdout().lock())
    }

    /// Run a task against its recorded cases, printing one line per case.
    pub fn verify(
        &self,
        name: &str,
        options: &testing::VerifyOptions,
    ) -> Result<testing::Summary> {
        let task = self.get(name)?;
        info!(
            "verifying {}/{} against {} under {}",
            self.name,
            name,
            task.dataset,
            options.data_root.display()
        );

        Ok(testing::run_all_tests(options, self.name, task.dataset, |input, out| {
            (task.solve)(input, out, &RunOptions::default())
        }))
    }
}
