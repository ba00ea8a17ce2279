//! Local player profile: favorite words and lifetime records.
//!
//! Persisted in a checksummed binary format so a truncated or hand-edited
//! file is detected at load time instead of surfacing as a corrupt profile.

use crate::constants::SAVE_VERSION_MAGIC;
use crate::words::WordId;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Everything remembered about the player between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub favorites: HashSet<WordId>,
    pub high_score: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl Profile {
    /// Toggle a favorite. Returns true when the word is now favorited.
    pub fn toggle_favorite(&mut self, id: WordId) -> bool {
        if self.favorites.insert(id) {
            true
        } else {
            self.favorites.remove(&id);
            false
        }
    }

    pub fn is_favorite(&self, id: WordId) -> bool {
        self.favorites.contains(&id)
    }

    /// Fold a finished playthrough into the lifetime records.
    pub fn record_game(&mut self, score: u32, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
        if score > self.high_score {
            self.high_score = score;
        }
    }
}

/// Loads and saves the profile at the platform config location.
pub struct ProfileStore {
    save_path: PathBuf,
}

impl ProfileStore {
    /// Sets up the save directory at the appropriate location for the
    /// platform using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "ecolexico").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("profile.dat"),
        })
    }

    /// Creates a ProfileStore for testing with a unique temporary directory.
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("ecolexico-test-{}", test_id));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            save_path: temp_dir.join("profile.dat"),
        })
    }

    /// Saves the profile to disk.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized profile (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, profile: &Profile) -> io::Result<()> {
        let data = bincode::serialize(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the profile from disk, verifying version magic and checksum.
    pub fn load(&self) -> io::Result<Profile> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        if u64::from_le_bytes(version_bytes) != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unrecognized profile version",
            ));
        }

        let mut len_bytes = [0u8; 4];
        file.read_exact(&mut len_bytes)?;
        let data_len = u32::from_le_bytes(len_bytes) as usize;

        let mut data = vec![0u8; data_len];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(len_bytes);
        hasher.update(&data);
        if hasher.finalize().as_slice() != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "profile checksum mismatch",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load the profile if a valid one exists, otherwise start fresh.
    pub fn load_or_default(&self) -> Profile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_favorite() {
        let mut profile = Profile::default();
        assert!(profile.toggle_favorite(3));
        assert!(profile.is_favorite(3));
        assert!(!profile.toggle_favorite(3));
        assert!(!profile.is_favorite(3));
    }

    #[test]
    fn test_record_game_tracks_high_score() {
        let mut profile = Profile::default();
        profile.record_game(30, false);
        profile.record_game(20, true);

        assert_eq!(profile.games_played, 2);
        assert_eq!(profile.games_won, 1);
        assert_eq!(profile.high_score, 30);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = ProfileStore::new_for_test().unwrap();

        let mut profile = Profile::default();
        profile.toggle_favorite(7);
        profile.toggle_favorite(11);
        profile.record_game(40, true);
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.is_favorite(7));
        assert!(loaded.is_favorite(11));
        assert_eq!(loaded.high_score, 40);
        assert_eq!(loaded.games_won, 1);
    }

    #[test]
    fn test_corrupted_file_is_rejected() {
        let store = ProfileStore::new_for_test().unwrap();
        store.save(&Profile::default()).unwrap();

        // Flip a payload byte; the checksum must catch it.
        let mut bytes = fs::read(&store.save_path).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        fs::write(&store.save_path, &bytes).unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let store = ProfileStore::new_for_test().unwrap();
        let profile = store.load_or_default();
        assert_eq!(profile.games_played, 0);
        assert!(profile.favorites.is_empty());
    }
}
