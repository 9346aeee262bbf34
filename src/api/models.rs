//! Catalog API response shapes.
//!
//! Deserialized leniently: unknown fields are ignored and most fields are
//! optional, since the upstream API omits them freely.

use serde::{Deserialize, Serialize};

/// One page of list results. A missing `results` field means an empty page.
#[derive(Debug, Clone, Deserialize)]
pub struct GameListResponse {
    #[serde(default)]
    pub results: Vec<GameSummary>,
}

/// Lightweight game record used in the grid view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: u64,
    pub name: String,
    pub background_image: Option<String>,
    pub clip: Option<Clip>,
    pub rating: Option<f64>,
    pub metacritic: Option<i32>,
    pub released: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

/// Full game record used in the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: u64,
    pub name: String,
    pub background_image: Option<String>,
    pub description_raw: Option<String>,
    pub rating: Option<f64>,
    pub metacritic: Option<i32>,
    pub released: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Developer {
    pub id: u64,
    pub name: String,
}

/// Short preview clip attached to some summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    pub clip: Option<String>,
}

/// Platform association. Requirement blocks only appear on detail payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEntry {
    pub platform: PlatformRef,
    pub requirements: Option<Requirements>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRef {
    pub id: Option<u64>,
    pub name: String,
}

/// Free-text system requirements, possibly containing embedded HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

impl GameDetail {
    /// PC requirement blocks, if the game lists a platform whose name
    /// contains "pc" (case-insensitive).
    pub fn pc_requirements(&self) -> Option<&Requirements> {
        self.platforms
            .iter()
            .find(|entry| entry.platform.name.to_lowercase().contains("pc"))
            .and_then(|entry| entry.requirements.as_ref())
    }
}

impl GameSummary {
    /// URL of the preview clip, when one is attached.
    pub fn clip_url(&self) -> Option<&str> {
        self.clip.as_ref().and_then(|c| c.clip.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_missing_results() {
        let page: GameListResponse = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_summary_tolerates_missing_optionals() {
        let json = r#"{"id": 3498, "name": "Grand Theft Auto V"}"#;
        let game: GameSummary = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 3498);
        assert!(game.rating.is_none());
        assert!(game.metacritic.is_none());
        assert!(game.genres.is_empty());
        assert!(game.platforms.is_empty());
        assert!(game.clip_url().is_none());
    }

    #[test]
    fn test_summary_parses_nested_fields() {
        let json = r#"{
            "id": 3328,
            "name": "The Witcher 3: Wild Hunt",
            "background_image": "https://example.com/witcher3.jpg",
            "clip": {"clip": "https://example.com/witcher3.mp4"},
            "rating": 4.66,
            "metacritic": 92,
            "released": "2015-05-18",
            "genres": [{"id": 4, "name": "Action"}, {"id": 5, "name": "RPG"}],
            "platforms": [{"platform": {"id": 4, "name": "PC"}, "requirements": null}],
            "unknown_field": true
        }"#;
        let game: GameSummary = serde_json::from_str(json).unwrap();
        assert_eq!(game.clip_url(), Some("https://example.com/witcher3.mp4"));
        assert_eq!(game.genres.len(), 2);
        assert_eq!(game.platforms[0].platform.name, "PC");
    }

    #[test]
    fn test_pc_requirements_case_insensitive() {
        let json = r#"{
            "id": 1,
            "name": "Some Game",
            "platforms": [
                {"platform": {"id": 18, "name": "PlayStation 4"}, "requirements": null},
                {"platform": {"id": 4, "name": "pc"},
                 "requirements": {"minimum": "Minimum: 8 GB RAM", "recommended": null}}
            ]
        }"#;
        let detail: GameDetail = serde_json::from_str(json).unwrap();
        let reqs = detail.pc_requirements().unwrap();
        assert_eq!(reqs.minimum.as_deref(), Some("Minimum: 8 GB RAM"));
        assert!(reqs.recommended.is_none());
    }

    #[test]
    fn test_pc_requirements_absent_platform() {
        let json = r#"{
            "id": 2,
            "name": "Console Exclusive",
            "platforms": [{"platform": {"id": 187, "name": "PlayStation 5"}, "requirements": null}]
        }"#;
        let detail: GameDetail = serde_json::from_str(json).unwrap();
        assert!(detail.pc_requirements().is_none());
    }
}
