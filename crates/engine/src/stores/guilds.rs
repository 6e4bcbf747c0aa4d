//! Founded guilds.

use dashmap::DashMap;
use guildhall_domain::{Guild, GuildId};

/// Concurrent map of guilds.
///
/// Guilds are not `Clone`; callers read or mutate them through closures that
/// run while the entry is locked.
pub struct GuildStore {
    inner: DashMap<GuildId, Guild>,
}

impl GuildStore {
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    pub fn insert(&self, guild: Guild) -> GuildId {
        let id = guild.id();
        self.inner.insert(id, guild);
        id
    }

    pub fn contains(&self, id: GuildId) -> bool {
        self.inner.contains_key(&id)
    }

    /// Run `f` against the guild, if it exists.
    pub fn read<R>(&self, id: GuildId, f: impl FnOnce(&Guild) -> R) -> Option<R> {
        self.inner.get(&id).map(|entry| f(entry.value()))
    }

    /// Run `f` against the guild under its entry lock, if it exists.
    pub fn update<R>(&self, id: GuildId, f: impl FnOnce(&mut Guild) -> R) -> Option<R> {
        self.inner.get_mut(&id).map(|mut entry| f(entry.value_mut()))
    }

    pub fn remove(&self, id: GuildId) -> Option<Guild> {
        self.inner.remove(&id).map(|(_, guild)| guild)
    }

    /// All guild ids, ascending.
    pub fn ids(&self) -> Vec<GuildId> {
        let mut ids: Vec<GuildId> = self.inner.iter().map(|entry| *entry.key()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for GuildStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use guildhall_domain::NewGuild;

    fn guild(name: &str) -> Guild {
        Guild::new(
            NewGuild {
                name: name.into(),
                level: 1,
                description: String::new(),
                creation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                recruiting: true,
                max_members: 4,
            },
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn insert_and_read() {
        let store = GuildStore::new();
        let id = store.insert(guild("Argent Dawn"));

        assert!(store.contains(id));
        assert_eq!(
            store.read(id, |g| g.name().as_str().to_string()).as_deref(),
            Some("Argent Dawn")
        );
    }

    #[test]
    fn missing_guild_yields_none() {
        let store = GuildStore::new();
        assert!(store.read(GuildId::from_raw(u32::MAX), |g| g.level()).is_none());
        assert!(store.update(GuildId::from_raw(u32::MAX), |g| g.level()).is_none());
    }

    #[test]
    fn ids_sorted_and_remove_works() {
        let store = GuildStore::new();
        let first = store.insert(guild("Argent Dawn"));
        let second = store.insert(guild("Cenarion Circle"));

        assert_eq!(store.ids(), vec![first, second]);
        assert!(store.remove(first).is_some());
        assert_eq!(store.ids(), vec![second]);
        assert_eq!(store.len(), 1);
    }
}
