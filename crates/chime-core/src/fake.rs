//! Recording stand-ins for the GPIO facility and the blocking wait.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::buzzer::{Delay, GpioFacility, NumberingMode};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetMode(NumberingMode),
    SetupOutput(u8),
    StartPwm {
        pin: u8,
        frequency_hz: f64,
        duty_cycle: f64,
    },
    Sleep(Duration),
    StopPwm(u8),
    Cleanup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    SetMode,
    SetupOutput,
    StartPwm,
    StopPwm,
    Cleanup,
}

#[derive(Debug, PartialEq)]
pub struct FakeError(pub Op);

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "injected failure in {:?}", self.0)
    }
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct FakeGpio {
    log: CallLog,
    /// Fail the nth (1-based) call of each listed kind.
    fail_at: Vec<(Op, usize)>,
    counts: Vec<(Op, usize)>,
    bcm_only: bool,
}

impl FakeGpio {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_at: Vec::new(),
            counts: Vec::new(),
            bcm_only: false,
        }
    }

    pub fn failing_at(mut self, op: Op, nth: usize) -> Self {
        self.fail_at.push((op, nth));
        self
    }

    pub fn bcm_only(mut self) -> Self {
        self.bcm_only = true;
        self
    }

    fn record(&mut self, op: Op, call: Call) -> Result<(), FakeError> {
        self.log.borrow_mut().push(call);

        let seen = match self.counts.iter_mut().find(|(o, _)| *o == op) {
            Some((_, n)) => {
                *n += 1;
                *n
            }
            None => {
                self.counts.push((op, 1));
                1
            }
        };

        if self.fail_at.contains(&(op, seen)) {
            Err(FakeError(op))
        } else {
            Ok(())
        }
    }
}

impl GpioFacility for FakeGpio {
    type Error = FakeError;

    fn supports(&self, mode: NumberingMode) -> bool {
        !self.bcm_only || mode == NumberingMode::Bcm
    }

    fn set_mode(&mut self, mode: NumberingMode) -> Result<(), FakeError> {
        self.record(Op::SetMode, Call::SetMode(mode))
    }

    fn setup_output(&mut self, pin: u8) -> Result<(), FakeError> {
        self.record(Op::SetupOutput, Call::SetupOutput(pin))
    }

    fn start_pwm(&mut self, pin: u8, frequency_hz: f64, duty_cycle: f64) -> Result<(), FakeError> {
        self.record(
            Op::StartPwm,
            Call::StartPwm {
                pin,
                frequency_hz,
                duty_cycle,
            },
        )
    }

    fn stop_pwm(&mut self, pin: u8) -> Result<(), FakeError> {
        self.record(Op::StopPwm, Call::StopPwm(pin))
    }

    fn cleanup(&mut self) -> Result<(), FakeError> {
        self.record(Op::Cleanup, Call::Cleanup)
    }
}

pub struct FakeDelay {
    log: CallLog,
    panic_at: Option<usize>,
    calls: usize,
}

impl FakeDelay {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            panic_at: None,
            calls: 0,
        }
    }

    pub fn panicking_at(mut self, nth: usize) -> Self {
        self.panic_at = Some(nth);
        self
    }
}

impl Delay for FakeDelay {
    fn delay(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Call::Sleep(duration));
        self.calls += 1;
        if self.panic_at == Some(self.calls) {
            panic!("sleep interrupted");
        }
    }
}

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn count(log: &CallLog, pred: impl Fn(&Call) -> bool) -> usize {
    log.borrow().iter().filter(|&c| pred(c)).count()
}
