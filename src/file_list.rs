use crate::document::Container;
use crate::html_renderer;
use crate::types::FileRecord;

/// Replaces everything in `target` with one row per record, in input order.
pub fn render<C: Container + ?Sized>(records: &[FileRecord], target: &mut C) {
    log::debug!("Rendering {} file rows", records.len());
    target.replace_content(html_renderer::render_rows(records));
}
