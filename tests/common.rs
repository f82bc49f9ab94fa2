#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use path_editor::dialogs::Dialogs;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Info,
    Warning,
    Error,
    Confirm,
}

/// Records every dialog and answers confirmations from a queue (default: yes).
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub shown: Vec<(Kind, String, String)>,
    answers: VecDeque<bool>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[bool]) -> Self {
        Self {
            shown: Vec::new(),
            answers: answers.iter().copied().collect(),
        }
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.shown.iter().filter(|(k, _, _)| *k == kind).count()
    }

    pub fn last(&self) -> Option<&(Kind, String, String)> {
        self.shown.last()
    }

    pub fn last_message(&self) -> &str {
        self.shown.last().map(|(_, _, m)| m.as_str()).unwrap_or("")
    }
}

impl Dialogs for ScriptedDialogs {
    fn info(&mut self, title: &str, message: &str) {
        self.shown.push((Kind::Info, title.into(), message.into()));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.shown.push((Kind::Warning, title.into(), message.into()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.shown.push((Kind::Error, title.into(), message.into()));
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.shown.push((Kind::Confirm, title.into(), message.into()));
        self.answers.pop_front().unwrap_or(true)
    }
}

pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}
