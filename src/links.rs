use serde::{Deserialize, Serialize};

pub const LINKS_FILE: &str = "links.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

impl LinkEntry {
    /// Glyph shown in the grid cell: the stored icon truncated to two
    /// characters, then the first character of the title, then a dot.
    /// Truncation happens at display time; the stored value stays verbatim.
    pub fn display_icon(&self) -> String {
        let icon = self.icon.trim();
        if !icon.is_empty() {
            return icon.chars().take(2).collect();
        }
        match self.title.chars().next() {
            Some(c) => c.to_string(),
            None => "·".to_string(),
        }
    }
}

pub fn default_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry {
            title: "Mail".into(),
            url: "https://mail.google.com".into(),
            icon: "✉".into(),
        },
        LinkEntry {
            title: "Calendar".into(),
            url: "https://calendar.google.com".into(),
            icon: "📅".into(),
        },
        LinkEntry {
            title: "Drive".into(),
            url: "https://drive.google.com".into(),
            icon: "▶".into(),
        },
        LinkEntry {
            title: "Jira".into(),
            url: "https://jira.example.com".into(),
            icon: "J".into(),
        },
        LinkEntry {
            title: "Confluence".into(),
            url: "https://confluence.example.com".into(),
            icon: "C".into(),
        },
        LinkEntry {
            title: "Helpdesk".into(),
            url: "https://helpdesk.example.com".into(),
            icon: "H".into(),
        },
    ]
}

/// Read the persisted link list. A missing, empty or unparsable file is
/// treated the same way: the builtin defaults are substituted.
pub fn load_links(path: &str) -> Vec<LinkEntry> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return default_links();
    }
    match serde_json::from_str(&content) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("failed to parse {path}: {e}; using default links");
            default_links()
        }
    }
}

pub fn save_links(path: &str, links: &[LinkEntry]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(links)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn normalized(entry: LinkEntry) -> anyhow::Result<LinkEntry> {
    let title = entry.title.trim().to_string();
    let url = entry.url.trim().to_string();
    if title.is_empty() {
        anyhow::bail!("title required");
    }
    if url.is_empty() {
        anyhow::bail!("URL required");
    }
    Ok(LinkEntry {
        title,
        url,
        icon: entry.icon.trim().to_string(),
    })
}

/// Ordered shortcut list bound to its file. Every mutation validates first,
/// then persists the whole list before returning.
pub struct LinkStore {
    path: String,
    entries: Vec<LinkEntry>,
}

impl LinkStore {
    pub fn open(path: &str) -> Self {
        Self {
            path: path.to_string(),
            entries: load_links(path),
        }
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LinkEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: LinkEntry) -> anyhow::Result<()> {
        let entry = normalized(entry)?;
        self.entries.push(entry);
        self.persist()
    }

    pub fn edit_at(&mut self, index: usize, entry: LinkEntry) -> anyhow::Result<()> {
        let entry = normalized(entry)?;
        let slot = self
            .entries
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("no link at position {index}"))?;
        *slot = entry;
        self.persist()
    }

    pub fn reset_to_default(&mut self) -> anyhow::Result<()> {
        self.entries = default_links();
        self.persist()
    }

    fn persist(&self) -> anyhow::Result<()> {
        save_links(&self.path, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::LinkEntry;

    fn entry(title: &str, icon: &str) -> LinkEntry {
        LinkEntry {
            title: title.into(),
            url: "https://example.com".into(),
            icon: icon.into(),
        }
    }

    #[test]
    fn display_icon_truncates_to_two_chars() {
        assert_eq!(entry("Mail", "ABC").display_icon(), "AB");
        assert_eq!(entry("Mail", "✉").display_icon(), "✉");
    }

    #[test]
    fn display_icon_falls_back_to_title_then_placeholder() {
        assert_eq!(entry("Jira", "").display_icon(), "J");
        assert_eq!(entry("Jira", "  ").display_icon(), "J");
        assert_eq!(entry("", "").display_icon(), "·");
    }
}
