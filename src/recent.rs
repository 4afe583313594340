use crate::error::Result;
use crate::global;
use crate::storage::StorageExt;

pub const RECENT_SEARCHES_KEY: &str = "voiceSearch_recentSearches";
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Most-recent-first list of search queries, kept as a JSON array in the
/// global storage.
///
/// Storage problems never reach the caller: an unbound slot or a corrupt
/// entry reads as an empty list, and failed writes are logged and dropped.
pub struct RecentSearches;

impl RecentSearches {
    pub fn get() -> Vec<String> {
        match Self::load() {
            Ok(searches) => searches,
            Err(e) => {
                log::warn!("Could not read recent searches: {}", e);
                Vec::new()
            }
        }
    }

    /// Moves `query` to the front of the list. Blank queries are ignored.
    pub fn add(query: &str) {
        if query.trim().is_empty() {
            return;
        }

        let updated: Vec<String> = std::iter::once(query.to_owned())
            .chain(Self::get().into_iter().filter(|q| q != query))
            .take(MAX_RECENT_SEARCHES)
            .collect();

        if let Err(e) = Self::store(&updated) {
            log::warn!("Could not save recent searches: {}", e);
        }
    }

    pub fn clear() {
        match global::storage() {
            Ok(storage) => storage.remove_item(RECENT_SEARCHES_KEY),
            Err(e) => log::warn!("Could not clear recent searches: {}", e),
        }
    }

    fn load() -> Result<Vec<String>> {
        let storage = global::storage()?;

        // An empty string counts as nothing stored
        match storage.get_item(RECENT_SEARCHES_KEY) {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    fn store(searches: &[String]) -> Result<()> {
        global::storage()?.write_json(RECENT_SEARCHES_KEY, searches)
    }
}
