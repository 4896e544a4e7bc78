use crate::document::{
    ASSISTANT_CLOSE_ID, ASSISTANT_MODAL_ID, ASSISTANT_OPEN_ID, ASSISTANT_PANEL_ID, Document,
    FILE_LIST_ID,
};
use crate::error::PanelError;
use crate::theme::Theme;
use crate::types::FileRecord;

// (data-action, icon) pairs. These are decorative; nothing is bound to them.
const ROW_ACTIONS: [(&str, &str); 3] = [
    ("view", "fa-eye"),
    ("download", "fa-download"),
    ("delete", "fa-trash"),
];

/// Markup for the file list, one row per record in input order.
#[must_use]
pub fn render_rows(records: &[FileRecord]) -> String {
    records.iter().map(render_row).collect()
}

fn render_row(record: &FileRecord) -> String {
    let mut actions = String::new();
    for (action, icon) in ROW_ACTIONS {
        actions.push_str(&format!(
            r#"    <button type="button" class="p-2 text-muted-foreground hover:text-foreground" data-action="{action}"><i class="fas {icon}"></i></button>
"#
        ));
    }

    format!(
        r#"<div class="flex items-center justify-between p-4 hover:bg-muted/50">
  <div class="flex items-center space-x-4">
    <i class="fas fa-file-alt text-primary text-2xl"></i>
    <div>
      <p class="font-medium" data-role="file-name">{}</p>
      <p class="text-sm text-muted-foreground" data-role="file-caption">{}</p>
    </div>
  </div>
  <div class="flex space-x-2">
{}  </div>
</div>
"#,
        escape_html(&record.name),
        escape_html(&record.caption()),
        actions
    )
}

/// Full page built from the current state of `document`.
pub fn render_page(document: &Document, theme: &Theme) -> Result<String, PanelError> {
    let file_list = document.get(FILE_LIST_ID)?;
    let modal = document.get(ASSISTANT_MODAL_ID)?;
    let panel = document.get(ASSISTANT_PANEL_ID)?;
    // Both controls must exist even though they carry no content of their own
    document.get(ASSISTANT_OPEN_ID)?;
    document.get(ASSISTANT_CLOSE_ID)?;

    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("  <title>Files</title>\n");
    html.push_str(&render_styles(theme));
    html.push_str("</head>\n<body>\n");

    html.push_str("  <header class=\"flex items-center justify-between p-4\">\n");
    html.push_str("    <h1>My Files</h1>\n");
    html.push_str(&format!(
        "    <button id=\"{ASSISTANT_OPEN_ID}\" type=\"button\">AI Assistant</button>\n"
    ));
    html.push_str("  </header>\n");

    html.push_str(&format!(
        "  <div id=\"{FILE_LIST_ID}\" class=\"divide-y\">\n{}  </div>\n",
        file_list.content()
    ));

    let hidden = if modal.is_hidden() { " hidden" } else { "" };
    html.push_str(&format!(
        "  <div id=\"{ASSISTANT_MODAL_ID}\" class=\"modal fixed inset-0 flex items-center justify-center{hidden}\">\n"
    ));
    html.push_str(&format!(
        "    <div id=\"{ASSISTANT_PANEL_ID}\" class=\"modal-panel\">\n"
    ));
    html.push_str("      <div class=\"flex items-center justify-between\">\n");
    html.push_str("        <h2>AI Assistant</h2>\n");
    html.push_str(&format!(
        "        <button id=\"{ASSISTANT_CLOSE_ID}\" type=\"button\"><i class=\"fas fa-times\"></i></button>\n"
    ));
    html.push_str("      </div>\n");
    html.push_str(panel.content());
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");

    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn render_styles(theme: &Theme) -> String {
    let mut css = String::from("  <style>\n");
    css.push_str(&theme.css_variables());
    css.push_str(
        r"    body { background-color: var(--notion-50); color: var(--notion-900); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; margin: 0; }
    .hidden { display: none !important; }
    .text-muted-foreground { color: var(--notion-500); }
    .hover\:text-foreground:hover { color: var(--notion-900); }
    .hover\:bg-muted\/50:hover { background-color: var(--notion-100); }
    .divide-y > * + * { border-top: 1px solid var(--notion-200); }
    .modal { background-color: rgba(0, 0, 0, 0.5); }
    .modal-panel { background-color: #fff; border: 1px solid var(--notion-300); border-radius: 12px; padding: 20px; min-width: 320px; }
  </style>
",
    );
    css
}

#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
