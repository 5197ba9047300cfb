//! Render boundary: contain a failure instead of tearing the UI down
//!
//! A [`RenderBoundary`] sits between fallible display work and the host
//! loop. While `Ok`, work runs normally; the first failure flips it to
//! `Failed` and the host shows a fallback view instead of the broken
//! content. The only way back is an explicit [`reset`] — the boundary never
//! quietly retries.
//!
//! [`reset`]: RenderBoundary::reset

/// State of a boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryState {
    /// Content renders normally
    Ok,
    /// A failure was caught; fallback content shows until reset
    Failed {
        /// Display text of the caught error
        error: String,
        /// Where it happened, for the fallback view and the log
        context: String,
    },
}

/// Catches failures from display work and remembers the first one
#[derive(Debug)]
pub struct RenderBoundary {
    state: BoundaryState,
}

impl Default for RenderBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBoundary {
    pub fn new() -> Self {
        Self {
            state: BoundaryState::Ok,
        }
    }

    /// Record a failure; later failures do not overwrite the first
    pub fn catch(&mut self, error: impl std::fmt::Display, context: impl Into<String>) {
        if self.is_failed() {
            return;
        }
        let context = context.into();
        let error = error.to_string();
        tracing::error!(%error, %context, "render boundary caught a failure");
        self.state = BoundaryState::Failed { error, context };
    }

    /// Clear the failure; the only transition out of `Failed`
    pub fn reset(&mut self) {
        if self.is_failed() {
            tracing::info!("render boundary reset");
        }
        self.state = BoundaryState::Ok;
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed { .. })
    }

    /// The caught (error, context) pair, if any
    pub fn failure(&self) -> Option<(&str, &str)> {
        match &self.state {
            BoundaryState::Ok => None,
            BoundaryState::Failed { error, context } => Some((error, context)),
        }
    }

    /// Run fallible display work under this boundary
    ///
    /// Skipped entirely while failed. An `Err` is caught into the boundary
    /// and surfaces as `None`.
    pub fn guard<T, E: std::fmt::Display>(
        &mut self,
        context: &str,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Option<T> {
        if self.is_failed() {
            return None;
        }
        match f() {
            Ok(value) => Some(value),
            Err(e) => {
                self.catch(e, context);
                None
            }
        }
    }
}
