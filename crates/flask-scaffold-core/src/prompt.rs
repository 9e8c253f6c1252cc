//! Line-oriented interactive prompts
//!
//! Every question the engine asks goes through [`Prompter`], a blocking
//! request/response interface returning one line of text. The terminal front
//! end, plain stdio and scripted test answers all plug in here.

use crate::error::{Result, ScaffoldError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Stderr, StdinLock, Write};

/// Source of interactive answers
pub trait Prompter {
    /// Show `prompt` and block until one line of input is available
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        (**self).ask(prompt)
    }
}

/// Prompter over any reader/writer pair
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompter<StdinLock<'static>, Stderr> {
    /// Read answers from stdin, write prompts to stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{} ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prompter replaying canned answers, for tests and non-interactive drivers
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

/// Ask a free-text question; an empty answer selects `default`
pub fn prompt_with_default(
    prompter: &mut dyn Prompter,
    label: &str,
    default: &str,
) -> Result<String> {
    let answer = prompter
        .ask(&format!("{} [{}]:", label, default))
        .map_err(ScaffoldError::Prompt)?;
    let answer = answer.trim();

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// One entry of a single-choice menu
#[derive(Debug, Clone, Copy)]
pub struct Choice<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: T,
}

/// Ask until the answer matches one of the choice keys
///
/// After an unrecognized answer the question is repeated with a notice
/// naming the rejected input.
pub fn prompt_choice<T: Copy>(
    prompter: &mut dyn Prompter,
    title: &str,
    choices: &[Choice<T>],
) -> Result<T> {
    let mut prompt = String::from(title);
    for choice in choices {
        prompt.push_str(&format!("\n  {}) {}", choice.key, choice.label));
    }
    prompt.push_str("\nEnter choice:");

    let mut rejected: Option<String> = None;
    loop {
        let question = match &rejected {
            Some(answer) => {
                format!("Invalid choice {:?}, please try again.\n{}", answer, prompt)
            }
            None => prompt.clone(),
        };
        let answer = prompter.ask(&question).map_err(ScaffoldError::Prompt)?;
        let answer = answer.trim();

        if let Some(choice) = choices.iter().find(|c| c.key == answer) {
            return Ok(choice.value);
        }
        tracing::debug!(answer, "rejected menu answer");
        rejected = Some(answer.to_string());
    }
}
