use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

pub const NEWS_FILE: &str = "news.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewsEntry {
    /// Creation time in milliseconds since the epoch.
    pub ts: i64,
    pub text: String,
}

pub fn default_news() -> Vec<NewsEntry> {
    let now = Local::now().timestamp_millis();
    vec![
        NewsEntry {
            ts: now - 2 * 60 * 60 * 1000,
            text: "Scheduled network maintenance on Friday 22:00-23:00.".into(),
        },
        NewsEntry {
            ts: now - 24 * 60 * 60 * 1000,
            text: "New security guideline available in the Documents section.".into(),
        },
    ]
}

/// Read the persisted announcement list with the same fallback semantics as
/// the link list: anything unreadable yields the builtin seed entries.
pub fn load_news(path: &str) -> Vec<NewsEntry> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return default_news();
    }
    match serde_json::from_str(&content) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("failed to parse {path}: {e}; using default news");
            default_news()
        }
    }
}

pub fn save_news(path: &str, news: &[NewsEntry]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(news)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn format_ts(ts: i64) -> String {
    Local
        .timestamp_millis_opt(ts)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Ordered announcement list bound to its file. Entries are stored in
/// insertion order; display order is a derived projection, never persisted.
pub struct NewsStore {
    path: String,
    entries: Vec<NewsEntry>,
}

impl NewsStore {
    pub fn open(path: &str) -> Self {
        Self {
            path: path.to_string(),
            entries: load_news(path),
        }
    }

    pub fn entries(&self) -> &[NewsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, text: &str) -> anyhow::Result<()> {
        let text = text.trim();
        if text.is_empty() {
            anyhow::bail!("text required");
        }
        self.entries.push(NewsEntry {
            ts: Local::now().timestamp_millis(),
            text: text.to_string(),
        });
        self.persist()
    }

    /// Remove by position in the stored sequence, not the displayed one.
    pub fn remove_at(&mut self, index: usize) -> anyhow::Result<()> {
        if index >= self.entries.len() {
            anyhow::bail!("no announcement at position {index}");
        }
        self.entries.remove(index);
        self.persist()
    }

    pub fn reset_to_default(&mut self) -> anyhow::Result<()> {
        self.entries = default_news();
        self.persist()
    }

    /// Display projection: newest first, equal timestamps keep insertion
    /// order. Each element carries its position in the stored sequence so a
    /// delete taken from the projection addresses the right entry.
    pub fn sorted(&self) -> Vec<(usize, &NewsEntry)> {
        let mut view: Vec<(usize, &NewsEntry)> = self.entries.iter().enumerate().collect();
        view.sort_by_key(|(_, e)| std::cmp::Reverse(e.ts));
        view
    }

    fn persist(&self) -> anyhow::Result<()> {
        save_news(&self.path, &self.entries)
    }
}
