//! The interpreter continuation: what the cycle engine does next.
//!
//! This is the tagged enum the Design Notes call for in place of the
//! original C source's function-pointer continuation (`Thunk`). Each
//! variant is a state in the fetch/resolve/execute state machine described
//! in the cycle engine; which variant is current, together with the
//! instruction word and the resolved operand locations on [`Machine`],
//! fully determines what the next cycle does.
//!
//! [`Machine`]: crate::Machine

/// What the cycle engine does on its next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch the next instruction word, or perform a pending skip.
    Fetch,
    /// Resolve the `a` operand (destination for basic ops, sole operand for
    /// extended ops).
    ResolveA,
    /// Resolve the `b` operand (source, basic ops only).
    ResolveB,
    /// Begin execution: completes 1-cycle ops, or starts the first phase of
    /// a multi-cycle op.
    Execute,
    /// Second execution cycle, for 2- and 3-cycle ops.
    ExecutePhase2,
    /// Third execution cycle, for DIV/MOD only.
    ExecutePhase3,
    /// Advance PC past one full instruction without executing it.
    Skip,
}

impl Default for Action {
    fn default() -> Self {
        Action::Fetch
    }
}
