use std::fmt::{self, Display};
use std::io::{self, Write};

use derive_more::derive::From;
use derive_new::new;
use log::trace;

use crate::handler::EntryPoint;

#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Line {
    Acknowledged(EntryPoint),
    Identified(&'static str),
    Text(String),
    #[from(skip)]
    Heading(String),
    Blank,
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Acknowledged(entry) => write!(f, "{entry}"),
            Line::Identified(label) => write!(f, "{label} myFunction called"),
            Line::Text(text) => write!(f, "{text}"),
            Line::Heading(title) => write!(f, "== {title} =="),
            Line::Blank => Ok(()),
        }
    }
}

/// One resolved dispatch: the entry point that ran and the label the subject
/// reported for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Event {
    pub entry: EntryPoint,
    pub label: &'static str,
}

/// Ordered record of everything the handlers and visitors reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<L: Into<Line>>(&mut self, line: L) {
        let line = line.into();
        trace!("{line:?}");
        self.lines.push(line);
    }

    pub fn acknowledge(&mut self, entry: EntryPoint) {
        self.push(entry);
    }

    pub fn identify(&mut self, label: &'static str) {
        self.push(label);
    }

    pub fn text<S: ToString>(&mut self, text: S) {
        self.push(text.to_string());
    }

    pub fn heading<S: ToString>(&mut self, title: S) {
        self.push(Line::Heading(title.to_string()));
    }

    pub fn blank(&mut self) {
        self.push(Line::Blank);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Pairs every acknowledgment with the identification recorded right
    /// after it. An acknowledgment without one is skipped.
    pub fn events(&self) -> Vec<Event> {
        self.lines
            .windows(2)
            .filter_map(|pair| match pair {
                [Line::Acknowledged(entry), Line::Identified(label)] => {
                    Some(Event::new(*entry, *label))
                }
                _ => None,
            })
            .collect()
    }

    pub fn render(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(w, "{line}")?;
        }
        w.flush()
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
