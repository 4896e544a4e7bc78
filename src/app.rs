use crate::document::{Document, FILE_LIST_ID};
use crate::error::PanelError;
use crate::file_list;
use crate::modal::ModalController;
use crate::types::FileRecord;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A click whose origin is the element with this id.
    Click(String),
    /// Redraw the file list from the current records.
    Refresh,
}

/// The wired-up page: document, records and the pending event queue.
///
/// Events are handled one at a time in arrival order; each handler runs to
/// completion before the next is taken off the queue.
#[derive(Debug)]
pub struct App {
    document: Document,
    records: Vec<FileRecord>,
    modal: ModalController,
    queue: VecDeque<Event>,
}

impl App {
    /// One-time initialization. Every element the page needs must be present.
    pub fn bootstrap(
        document: Document,
        records: Vec<FileRecord>,
        modal: ModalController,
    ) -> Result<Self, PanelError> {
        document.get(FILE_LIST_ID)?;
        modal.check(&document)?;

        let mut app = App {
            document,
            records,
            modal,
            queue: VecDeque::new(),
        };
        app.dispatch(&Event::Refresh)?;

        log::info!("Bootstrapped file panel with {} records", app.records.len());
        Ok(app)
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Drains the queue. Returns the number of events handled.
    pub fn run(&mut self) -> Result<usize, PanelError> {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(&event)?;
            handled += 1;
        }
        Ok(handled)
    }

    fn dispatch(&mut self, event: &Event) -> Result<(), PanelError> {
        log::debug!("Dispatching {event:?}");
        match event {
            Event::Click(target) => self.modal.handle_click(target, &mut self.document),
            Event::Refresh => {
                file_list::render(&self.records, self.document.get_mut(FILE_LIST_ID)?);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn modal_visible(&self) -> Result<bool, PanelError> {
        self.modal.is_visible(&self.document)
    }
}
