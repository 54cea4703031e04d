use crate::Chronometer;
use std::fmt::Display;

#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{}", self.line(value));
        }
    }

    fn line(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }
}
