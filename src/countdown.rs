/// What the countdown element should show after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Show(u32),
    Finished,
}

/// Once-per-second countdown from a start value down to zero, then a final
/// "finished" tick.
#[derive(Clone, Debug)]
pub struct Countdown {
    remaining: Option<u32>,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self {
            remaining: Some(start),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_none()
    }

    pub fn tick(&mut self) -> CountdownTick {
        match self.remaining {
            Some(n) if n > 0 => {
                self.remaining = Some(n - 1);
                CountdownTick::Show(n - 1)
            }
            _ => {
                self.remaining = None;
                CountdownTick::Finished
            }
        }
    }
}

impl CountdownTick {
    pub fn label(&self) -> String {
        match self {
            CountdownTick::Show(n) => n.to_string(),
            CountdownTick::Finished => "!".to_string(),
        }
    }
}
