use crate::document::{ASSISTANT_CLOSE_ID, ASSISTANT_MODAL_ID, ASSISTANT_OPEN_ID, Document};
use crate::error::PanelError;

/// Ids of the overlay and the two controls that toggle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalController {
    pub overlay_id: String,
    pub open_id: String,
    pub close_id: String,
}

impl Default for ModalController {
    fn default() -> Self {
        ModalController {
            overlay_id: ASSISTANT_MODAL_ID.to_string(),
            open_id: ASSISTANT_OPEN_ID.to_string(),
            close_id: ASSISTANT_CLOSE_ID.to_string(),
        }
    }
}

impl ModalController {
    /// Fails if any of the controller's elements is absent from `document`.
    pub fn check(&self, document: &Document) -> Result<(), PanelError> {
        document.get(&self.overlay_id)?;
        document.get(&self.open_id)?;
        document.get(&self.close_id)?;
        Ok(())
    }

    pub fn open(&self, document: &mut Document) -> Result<(), PanelError> {
        document.get_mut(&self.overlay_id)?.set_hidden(false);
        Ok(())
    }

    pub fn close(&self, document: &mut Document) -> Result<(), PanelError> {
        document.get_mut(&self.overlay_id)?.set_hidden(true);
        Ok(())
    }

    pub fn is_visible(&self, document: &Document) -> Result<bool, PanelError> {
        Ok(!document.get(&self.overlay_id)?.is_hidden())
    }

    /// Applies a click whose origin is the element `target`.
    ///
    /// Only a click originating on the overlay itself dismisses it; clicks on
    /// content inside the overlay leave it open.
    pub fn handle_click(&self, target: &str, document: &mut Document) -> Result<(), PanelError> {
        if target == self.open_id {
            log::debug!("Opening #{}", self.overlay_id);
            self.open(document)
        } else if target == self.close_id || target == self.overlay_id {
            log::debug!("Closing #{} (click on #{target})", self.overlay_id);
            self.close(document)
        } else {
            Ok(())
        }
    }
}
