use gridiron_core::{LifetimeStats, StatsError, StatsStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const STATS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatsFile {
    version: u32,
    personal_best: i64,
    games_played: u64,
    average_score: i64,
}

/// Resolve the stats file path: `GRIDIRON_STATS` wins, then a dotfile
/// in the home directory.
pub fn default_stats_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("GRIDIRON_STATS") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".gridiron_stats.json"))
}

/// `StatsStore` backed by a small versioned JSON file. A missing file
/// reads as a fresh record; a version mismatch is an error rather than
/// a silent reinterpretation.
#[derive(Debug)]
pub struct JsonStatsFile {
    path: PathBuf,
}

impl JsonStatsFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StatsStore for JsonStatsFile {
    fn load(&mut self) -> Result<LifetimeStats, StatsError> {
        if !self.path.exists() {
            return Ok(LifetimeStats::default());
        }
        let body =
            fs::read_to_string(&self.path).map_err(|err| StatsError::Load(err.to_string()))?;
        let payload: StatsFile =
            serde_json::from_str(&body).map_err(|err| StatsError::Load(err.to_string()))?;
        if payload.version != STATS_SCHEMA_VERSION {
            return Err(StatsError::Load(format!(
                "unsupported stats version {} (expected {})",
                payload.version, STATS_SCHEMA_VERSION
            )));
        }
        Ok(LifetimeStats {
            personal_best: payload.personal_best,
            games_played: payload.games_played,
            average_score: payload.average_score,
        })
    }

    fn save(&mut self, stats: &LifetimeStats) -> Result<(), StatsError> {
        let payload = StatsFile {
            version: STATS_SCHEMA_VERSION,
            personal_best: stats.personal_best,
            games_played: stats.games_played,
            average_score: stats.average_score,
        };
        let body = serde_json::to_string_pretty(&payload)
            .map_err(|err| StatsError::Save(err.to_string()))?;
        fs::write(&self.path, body).map_err(|err| StatsError::Save(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "gridiron_stats_test_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn save_load_roundtrip() {
        let file = unique_temp_file();
        let mut store = JsonStatsFile::new(file.clone());
        let stats = LifetimeStats {
            personal_best: 42,
            games_played: 7,
            average_score: 18,
        };
        store.save(&stats).expect("save");
        let loaded = store.load().expect("load");
        assert_eq!(loaded, stats);
        let _ = std::fs::remove_file(file);
    }

    #[test]
    fn missing_file_reads_as_fresh_record() {
        let mut store = JsonStatsFile::new(unique_temp_file());
        let loaded = store.load().expect("load");
        assert_eq!(loaded, LifetimeStats::default());
    }

    #[test]
    fn version_mismatch_is_an_error() {
        let file = unique_temp_file();
        let body = r#"{"version":99,"personal_best":1,"games_played":1,"average_score":1}"#;
        std::fs::write(&file, body).expect("write");
        let mut store = JsonStatsFile::new(file.clone());
        assert!(store.load().is_err());
        let _ = std::fs::remove_file(file);
    }
}
