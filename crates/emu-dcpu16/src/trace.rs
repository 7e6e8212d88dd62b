//! Optional cycle-by-cycle tracing.
//!
//! The original C source prints a line to stdout for every value evaluated
//! and every cycle boundary crossed (`eval_value`/`cycle_fetch`'s `printf`
//! calls). Textual register/memory dumping is a hosting CLI's job, not this
//! core's, but a structured, caller-formatted record of what each cycle did
//! is useful to embed. It is off by default and costs nothing when unused.

use crate::action::Action;

/// What happened during one call to [`Machine::step_one_cycle`].
///
/// [`Machine::step_one_cycle`]: crate::Machine::step_one_cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTrace {
    /// The cycle counter value *after* this cycle.
    pub cycle: u64,
    /// The action the engine was in when this cycle began.
    pub action: Action,
    /// The program counter at the start of this cycle.
    pub pc: u16,
}

/// Fixed-capacity ring buffer of the most recent cycle traces.
#[derive(Debug, Default)]
pub(crate) struct TraceBuffer {
    enabled: bool,
    entries: Vec<CycleTrace>,
}

/// How many trace entries are retained before the oldest is dropped.
const CAPACITY: usize = 256;

impl TraceBuffer {
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.entries.clear();
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn record(&mut self, entry: CycleTrace) {
        if !self.enabled {
            return;
        }
        if self.entries.len() == CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    pub(crate) fn entries(&self) -> &[CycleTrace] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
