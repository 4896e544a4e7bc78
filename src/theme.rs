use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const DEFAULT_PALETTE: [(u16, &str); 10] = [
    (50, "#fafafa"),
    (100, "#f0f0f0"),
    (200, "#e4e4e4"),
    (300, "#d1d1d1"),
    (400, "#b4b4b4"),
    (500, "#9a9a9a"),
    (600, "#818181"),
    (700, "#6a6a6a"),
    (800, "#555555"),
    (900, "#2f2f2f"),
];

/// Grey scale used by the page stylesheet, keyed by shade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: BTreeMap<u16, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            palette: DEFAULT_PALETTE
                .iter()
                .map(|(shade, colour)| (*shade, (*colour).to_string()))
                .collect(),
        }
    }
}

impl Theme {
    /// Reads `NOTION_<shade>=<colour>` overrides on top of the default palette.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        Some(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut theme = Theme::default();

        for line in content.lines() {
            let Some((k, v)) = line.split_once('=') else {
                continue;
            };
            let key = k.trim();
            let val = v.trim().trim_matches('"');

            let shade = key
                .strip_prefix("NOTION_")
                .and_then(|s| s.parse::<u16>().ok());
            match shade {
                Some(shade) if theme.palette.contains_key(&shade) && !val.is_empty() => {
                    theme.palette.insert(shade, val.to_string());
                }
                _ => log::debug!("Ignoring theme entry {key:?}"),
            }
        }

        theme
    }

    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from("    :root {");
        for (shade, colour) in &self.palette {
            css.push_str(&format!(" --notion-{shade}: {colour};"));
        }
        css.push_str(" }\n");
        css
    }
}
