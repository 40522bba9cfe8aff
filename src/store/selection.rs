//! Selection controller: which territory the detail panel shows

use crate::core::types::TerritoryId;

/// Who made the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Picked on the map or cycled with the keyboard
    User,
    /// Set by playback landing on a record year
    AutoPause,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected {
    pub id: TerritoryId,
    pub source: SelectionSource,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    current: Option<Selected>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// User pick. Replaces any existing selection.
    pub fn select(&mut self, id: TerritoryId) {
        tracing::info!(territory = %id, "selection.user");
        self.current = Some(Selected {
            id,
            source: SelectionSource::User,
        });
    }

    /// Pick made by auto-pause
    pub fn select_by_system(&mut self, id: TerritoryId) {
        tracing::debug!(territory = %id, "selection.auto_pause");
        self.current = Some(Selected {
            id,
            source: SelectionSource::AutoPause,
        });
    }

    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("selection.clear");
        }
    }

    pub fn current(&self) -> Option<&Selected> {
        self.current.as_ref()
    }

    pub fn id(&self) -> Option<&TerritoryId> {
        self.current.as_ref().map(|s| &s.id)
    }

    pub fn source(&self) -> Option<SelectionSource> {
        self.current.as_ref().map(|s| s.source)
    }

    pub fn is_selected(&self, id: &TerritoryId) -> bool {
        self.id() == Some(id)
    }
}
