//! Dismissable notice state
//!
//! A notice (release announcement, onboarding hint) shows until the person
//! dismisses it, and stays dismissed across runs. Dismissal is explicit
//! state persisted through a [`KvStore`]; nothing here touches globals, so
//! two notices with different ids never interfere.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::KvStore;

/// Content of a dismissable notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Stable identifier; dismissal is remembered per id
    pub id: String,
    /// Headline text
    pub title: String,
    /// Body text
    pub body: String,
}

impl Notice {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    fn dismissal_key(&self) -> String {
        format!("dismissed/{}", self.id)
    }
}

/// A notice plus its persisted dismissal flag
#[derive(Debug)]
pub struct NoticeState {
    notice: Notice,
    dismissed: bool,
}

impl NoticeState {
    /// Load dismissal state for a notice from the store
    pub fn load(notice: Notice, store: &dyn KvStore) -> Result<Self> {
        let dismissed = store
            .get(&notice.dismissal_key())?
            .map(|v| v == "true")
            .unwrap_or(false);
        Ok(Self { notice, dismissed })
    }

    /// Dismiss the notice and persist the flag
    pub fn dismiss(&mut self, store: &mut dyn KvStore) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        store.set(&self.notice.dismissal_key(), "true")?;
        self.dismissed = true;
        tracing::info!(notice = %self.notice.id, "notice dismissed");
        Ok(())
    }

    /// Whether the notice should currently be shown
    pub fn is_visible(&self) -> bool {
        !self.dismissed
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }
}
