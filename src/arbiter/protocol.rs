//! Newline-delimited text protocol.
//!
//! ## Input (arbiter → engine)
//!
//! ```text
//! N M K T             hand size, project count, offer count, turns
//! type work           × N   initial hand
//! h v                 × M   initial projects
//! ```
//!
//! Then per turn, after the engine's action line:
//!
//! ```text
//! h v                 × M   project snapshot
//! money
//! type work price     × K   offered cards
//! ```
//!
//! ## Output (engine → arbiter)
//!
//! `card target` per action, one offer index per selection, and optional
//! `# ` comment lines the arbiter ignores. Every write is flushed so the
//! arbiter never waits on a buffered line.

use std::io::{BufRead, Write};

use crate::core::{Card, CardType, Project};

use super::{Arbiter, ArbiterError, GameSetup, Offers};

#[derive(Clone, Copy, Debug)]
struct Dimensions {
    project_count: usize,
    offer_count: usize,
}

/// Arbiter speaking the text protocol over a reader and a writer.
pub struct LineArbiter<R, W> {
    reader: R,
    writer: W,
    line_number: usize,
    buffer: String,
    dims: Option<Dimensions>,
}

impl LineArbiter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Arbiter on this process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LineArbiter<R, W> {
    /// Create an arbiter over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line_number: 0,
            buffer: String::new(),
            dims: None,
        }
    }

    /// Recover the writer (to inspect what was sent).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line and parse exactly `N` integers from it.
    fn read_ints<const N: usize>(&mut self, expected: &'static str) -> Result<[i64; N], ArbiterError> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Err(ArbiterError::UnexpectedEof { expected });
        }
        self.line_number += 1;

        let line = self.buffer.trim();
        let malformed = || ArbiterError::Malformed {
            line: self.line_number,
            expected,
            found: line.to_string(),
        };

        let mut values = [0i64; N];
        let mut tokens = line.split_whitespace();
        for value in values.iter_mut() {
            let token = tokens.next().ok_or_else(malformed)?;
            *value = token.parse().map_err(|_| malformed())?;
        }
        if tokens.next().is_some() {
            return Err(malformed());
        }
        Ok(values)
    }

    fn read_count(&self, value: i64, expected: &'static str) -> Result<usize, ArbiterError> {
        usize::try_from(value).map_err(|_| ArbiterError::Malformed {
            line: self.line_number,
            expected,
            found: value.to_string(),
        })
    }

    fn read_project_lines(&mut self, count: usize) -> Result<Vec<Project>, ArbiterError> {
        (0..count)
            .map(|_| {
                let [h, v] = self.read_ints::<2>("project `h v`")?;
                Ok(Project::new(h, v))
            })
            .collect()
    }

    fn dims(&self, call: &'static str) -> Result<Dimensions, ArbiterError> {
        self.dims.ok_or(ArbiterError::OutOfSequence { call })
    }

    fn send(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), ArbiterError> {
        self.writer.write_fmt(line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Upper bound on capacity reserved from header counts before the lines arrive.
const PREALLOC_LIMIT: usize = 1024;

fn card_type(code: i64) -> Result<CardType, ArbiterError> {
    CardType::from_code(code).ok_or(ArbiterError::UnknownCardType { code })
}

impl<R: BufRead, W: Write> Arbiter for LineArbiter<R, W> {
    fn setup(&mut self) -> Result<GameSetup, ArbiterError> {
        let [n, m, k, t] = self.read_ints::<4>("header `N M K T`")?;
        let hand_size = self.read_count(n, "hand size")?;
        let project_count = self.read_count(m, "project count")?;
        let offer_count = self.read_count(k, "offer count")?;
        let total_turns = u32::try_from(t).map_err(|_| ArbiterError::Malformed {
            line: self.line_number,
            expected: "turn count",
            found: t.to_string(),
        })?;

        let mut cards = Vec::with_capacity(hand_size.min(PREALLOC_LIMIT));
        for _ in 0..hand_size {
            let [code, work] = self.read_ints::<2>("card `type work`")?;
            cards.push(Card::free(card_type(code)?, work));
        }

        let projects = self.read_project_lines(project_count)?;

        self.dims = Some(Dimensions {
            project_count,
            offer_count,
        });

        Ok(GameSetup {
            offer_count,
            total_turns,
            cards,
            projects,
        })
    }

    fn submit_action(&mut self, card_slot: usize, target: usize) -> Result<(), ArbiterError> {
        self.send(format_args!("{} {}", card_slot, target))
    }

    fn read_projects(&mut self) -> Result<Vec<Project>, ArbiterError> {
        let dims = self.dims("read_projects")?;
        self.read_project_lines(dims.project_count)
    }

    fn read_money(&mut self) -> Result<i64, ArbiterError> {
        let [money] = self.read_ints::<1>("money")?;
        Ok(money)
    }

    fn read_offers(&mut self) -> Result<Offers, ArbiterError> {
        let dims = self.dims("read_offers")?;
        let mut offers = Offers::new();
        for _ in 0..dims.offer_count {
            let [code, work, price] = self.read_ints::<3>("offer `type work price`")?;
            offers.push(Card::new(card_type(code)?, work, price));
        }
        Ok(offers)
    }

    fn submit_selection(&mut self, offer_index: usize) -> Result<(), ArbiterError> {
        self.send(format_args!("{}", offer_index))
    }

    fn comment(&mut self, message: &str) -> Result<(), ArbiterError> {
        for line in message.lines() {
            self.send(format_args!("# {}", line))?;
        }
        Ok(())
    }
}
