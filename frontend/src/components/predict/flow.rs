//! Upload flow state machine.
//!
//! Pure phase tracking for the analysis view, kept free of DOM types so
//! the transition table is testable natively. The staged file itself and
//! its preview URL live in the view's local signals.

/// Phase of the analysis flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    /// Nothing staged; the drop zone is shown.
    #[default]
    Empty,
    /// A validated file is staged and previewable.
    Staged,
    /// The upload request is in flight; inputs are disabled.
    Analyzing,
    /// A result arrived and is on screen.
    Complete,
}

/// Events that move the flow between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// A valid file was selected or dropped.
    FileStaged,
    /// The analyze action was invoked.
    AnalysisStarted,
    AnalysisSucceeded,
    AnalysisFailed,
    /// The reset action; also taken when the staged file is replaced.
    Reset,
}

impl AnalysisPhase {
    /// Whether the analyze action is currently available.
    pub fn can_analyze(&self) -> bool {
        matches!(self, AnalysisPhase::Staged)
    }

    /// Whether a request is pending and inputs should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalysisPhase::Analyzing)
    }

    /// Apply an event. Invalid events leave the phase unchanged, so a
    /// stray click can never corrupt the flow.
    pub fn advance(self, event: FlowEvent) -> AnalysisPhase {
        use AnalysisPhase::*;
        use FlowEvent::*;

        match (self, event) {
            // Staging is refused while a request is in flight.
            (Analyzing, FileStaged) => Analyzing,
            (_, FileStaged) => Staged,

            (Staged, AnalysisStarted) => Analyzing,
            (Analyzing, AnalysisSucceeded) => Complete,
            // Failure returns to the staged file; the view keeps it.
            (Analyzing, AnalysisFailed) => Staged,

            (Analyzing, Reset) => Analyzing,
            (_, Reset) => Empty,

            (phase, _) => phase,
        }
    }
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::AnalysisPhase::*;
    use super::FlowEvent::*;

    #[test]
    fn test_happy_path() {
        let phase = Empty
            .advance(FileStaged)
            .advance(AnalysisStarted)
            .advance(AnalysisSucceeded);
        assert_eq!(phase, Complete);
    }

    #[test]
    fn test_failure_returns_to_staged() {
        let phase = Staged.advance(AnalysisStarted).advance(AnalysisFailed);
        assert_eq!(phase, Staged);
        assert!(phase.can_analyze());
    }

    #[test]
    fn test_reset_from_every_phase_returns_to_empty() {
        for phase in [Empty, Staged, Complete] {
            assert_eq!(phase.advance(Reset), Empty);
        }
    }

    #[test]
    fn test_analyzing_ignores_staging_and_reset() {
        assert_eq!(Analyzing.advance(FileStaged), Analyzing);
        assert_eq!(Analyzing.advance(Reset), Analyzing);
        assert!(Analyzing.is_busy());
    }

    #[test]
    fn test_analyze_only_available_when_staged() {
        assert!(Staged.can_analyze());
        assert!(!Empty.can_analyze());
        assert!(!Analyzing.can_analyze());
        assert!(!Complete.can_analyze());
    }

    #[test]
    fn test_restaging_from_complete_starts_a_new_flow() {
        assert_eq!(Complete.advance(FileStaged), Staged);
    }

    #[test]
    fn test_stray_events_leave_phase_unchanged() {
        assert_eq!(Empty.advance(AnalysisStarted), Empty);
        assert_eq!(Complete.advance(AnalysisFailed), Complete);
        assert_eq!(Staged.advance(AnalysisSucceeded), Staged);
    }
}
