//! Load-cycle state exposed to the presentation layer.

/// Aggregate state of one fetch-and-parse cycle.
///
/// Per-sheet failures live inside the committed value; `Failed` is only
/// used when the cycle itself could not run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    /// Commits the outcome of a cycle in one step.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert_eq!(state, LoadState::Loading);
    }

    #[test]
    fn commits_result() {
        let ok: LoadState<u8> = LoadState::from_result(Ok::<_, String>(3));
        assert_eq!(ok, LoadState::Ready(3));

        let failed: LoadState<u8> = LoadState::from_result(Err::<u8, _>("no sheets configured"));
        assert_eq!(failed, LoadState::Failed("no sheets configured".to_string()));
    }
}
