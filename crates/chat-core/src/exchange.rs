//! Request/response lifecycle as an explicit transition table.
//!
//!   Idle ──Submit(g)──▶ Sending(g) ──Succeed(g) | Fail(g)──▶ Idle
//!
//! Every submission and every reset bumps the generation. Completions carry
//! the generation they were issued under; one that does not match the
//! in-flight generation belongs to a conversation that no longer exists
//! and is ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangePhase {
    Idle,
    Sending { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeInput {
    Submit { generation: u64 },
    Succeed { generation: u64 },
    Fail { generation: u64 },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move to the given phase and apply the input's effects
    Enter(ExchangePhase),
    /// Input not allowed in this phase (a second submit while sending)
    Reject,
    /// Stale completion; drop it without touching state
    Ignore,
}

pub fn transition(phase: ExchangePhase, input: ExchangeInput) -> Transition {
    use ExchangeInput::*;
    use ExchangePhase::*;

    match (phase, input) {
        (Idle, Submit { generation }) => Transition::Enter(Sending { generation }),
        (Sending { .. }, Submit { .. }) => Transition::Reject,

        (Sending { generation: current }, Succeed { generation })
        | (Sending { generation: current }, Fail { generation })
            if current == generation =>
        {
            Transition::Enter(Idle)
        }
        (_, Succeed { .. }) | (_, Fail { .. }) => Transition::Ignore,

        (_, Reset) => Transition::Enter(Idle),
    }
}
