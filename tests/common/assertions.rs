//! Custom test assertions

use syncdata_rs::KeyOutcome;

/// Assertions over a result vector
pub trait OutcomeAssertions {
    /// Assert every key succeeded
    fn assert_all_success(&self);

    /// Assert the key at `index` failed with `code`
    fn assert_failed_with(&self, index: usize, code: u16);
}

impl OutcomeAssertions for [KeyOutcome] {
    fn assert_all_success(&self) {
        let failures: Vec<String> = self
            .iter()
            .filter_map(KeyOutcome::error)
            .map(ToString::to_string)
            .collect();
        assert!(
            failures.is_empty(),
            "Expected every key to succeed, got failures: {:?}",
            failures
        );
    }

    fn assert_failed_with(&self, index: usize, code: u16) {
        match &self[index] {
            KeyOutcome::Failed(err) => assert_eq!(
                err.code, code,
                "Key {} failed with code {}, expected {}",
                err.key, err.code, code
            ),
            KeyOutcome::Success => panic!("Expected key at {} to fail with {}", index, code),
        }
    }
}
