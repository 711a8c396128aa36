//! Round tracing for comparing intermediate states against a simulator log.

use core::fmt;

use crate::block::Block;
use crate::state::State;

/// Pipeline step that just produced the observed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// The input block, before any transform.
    Input,
    /// AddRoundKey.
    AddRoundKey,
    /// SubBytes.
    SubBytes,
    /// ShiftRows.
    ShiftRows,
    /// MixColumns.
    MixColumns,
    /// InvSubBytes.
    InvSubBytes,
    /// InvShiftRows.
    InvShiftRows,
    /// InvMixColumns.
    InvMixColumns,
}

impl Step {
    /// Lower-case name used in trace output.
    pub const fn name(self) -> &'static str {
        match self {
            Step::Input => "input",
            Step::AddRoundKey => "add_round_key",
            Step::SubBytes => "sub_bytes",
            Step::ShiftRows => "shift_rows",
            Step::MixColumns => "mix_columns",
            Step::InvSubBytes => "inv_sub_bytes",
            Step::InvShiftRows => "inv_shift_rows",
            Step::InvMixColumns => "inv_mix_columns",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Receives the state after every pipeline step.
///
/// `round` is the index of the round key the current round consumes, so
/// decryption reports rounds in descending order.
pub trait RoundObserver {
    /// Called after `step` of `round` has been applied.
    fn observe(&mut self, round: usize, step: Step, state: &State);
}

/// Discards everything.
impl RoundObserver for () {
    #[inline(always)]
    fn observe(&mut self, _round: usize, _step: Step, _state: &State) {}
}

impl<F> RoundObserver for F
where
    F: FnMut(usize, Step, &State),
{
    #[inline]
    fn observe(&mut self, round: usize, step: Step, state: &State) {
        self(round, step, state)
    }
}

/// One recorded step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    /// Round-key index of the round.
    pub round: usize,
    /// Step that produced `state`.
    pub step: Step,
    /// State serialised as a block.
    pub state: Block,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {:02} {:<15} {}",
            self.round,
            self.step,
            hex::encode(self.state)
        )
    }
}

/// Records every step of a block operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they happened.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Events belonging to `round`.
    pub fn round(&self, round: usize) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter().filter(move |e| e.round == round)
    }

    /// State at the end of `round` (after its last step), if recorded.
    pub fn round_output(&self, round: usize) -> Option<Block> {
        self.round(round).last().map(|e| e.state)
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RoundObserver for Trace {
    fn observe(&mut self, round: usize, step: Step, state: &State) {
        self.events.push(TraceEvent {
            round,
            step,
            state: state.to_block(),
        });
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_filters_by_round() {
        let mut trace = Trace::new();
        let a = State::from([1u8; 16]);
        let b = State::from([2u8; 16]);
        trace.observe(0, Step::AddRoundKey, &a);
        trace.observe(1, Step::SubBytes, &b);
        trace.observe(1, Step::AddRoundKey, &a);

        assert_eq!(trace.events().len(), 3);
        assert_eq!(trace.round(1).count(), 2);
        assert_eq!(trace.round_output(1), Some([1u8; 16]));
        assert_eq!(trace.round_output(7), None);

        trace.clear();
        assert!(trace.events().is_empty());
    }

    #[test]
    fn closures_are_observers() {
        let mut steps = Vec::new();
        let mut observer = |round: usize, step: Step, _: &State| steps.push((round, step));
        observer.observe(3, Step::MixColumns, &State::default());
        assert_eq!(steps, [(3, Step::MixColumns)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_roundtrip() {
        let mut trace = Trace::new();
        trace.observe(4, Step::InvMixColumns, &State::from([0x3cu8; 16]));
        let bytes = bincode::serialize(&trace).expect("serialize");
        let decoded: Trace = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, trace);
    }

    #[test]
    fn display_format() {
        let event = TraceEvent {
            round: 1,
            step: Step::SubBytes,
            state: [0u8; 16],
        };
        assert_eq!(
            event.to_string(),
            "round 01 sub_bytes       00000000000000000000000000000000"
        );
    }
}
