//! Resource service implementation.
//!
//! The ResourceService answers resource listing and reading requests against
//! the shared Pokedex. Every entry becomes one addressable resource whose
//! URI is the fixed scheme prefix plus the lowercase identifier.

use std::sync::Arc;

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use crate::domains::pokedex::Pokedex;

/// URI scheme under which Pokedex entries are addressable.
pub const POKEMON_URI_SCHEME: &str = "pokemon://";

/// Build the resource URI for an identifier.
pub fn pokemon_uri(id: &str) -> String {
    format!("{POKEMON_URI_SCHEME}{id}")
}

/// Service for listing and reading Pokedex resources.
pub struct ResourceService {
    /// Shared read-only Pokedex.
    dex: Arc<Pokedex>,
}

impl ResourceService {
    /// Create a new ResourceService over the given Pokedex.
    pub fn new(dex: Arc<Pokedex>) -> Self {
        info!("Initializing ResourceService with {} entries", dex.len());
        Self { dex }
    }

    /// List all available resources, one per Pokedex entry, in key order.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.dex
            .iter()
            .map(|(id, record)| {
                let mut raw = RawResource::new(pokemon_uri(id), record.name.clone());
                raw.description = Some(format!("Information about {}", record.name));
                raw.mime_type = Some("application/json".to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// The identifier is parsed by stripping the scheme prefix; a URI
    /// without the prefix is looked up as given. An unknown identifier
    /// fails with [`ResourceError::NotFound`] carrying that identifier.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let id = uri.strip_prefix(POKEMON_URI_SCHEME).unwrap_or(uri);

        let record = self
            .dex
            .get(id)
            .ok_or_else(|| ResourceError::not_found(id))?;

        let body = serde_json::to_string_pretty(record)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(body, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::pokedex::{BaseStats, PokemonRecord};

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Pokedex::builtin()))
    }

    #[tokio::test]
    async fn test_list_one_resource_per_entry() {
        let service = service();

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);

        let resource = &resources[0];
        assert_eq!(resource.raw.uri, "pokemon://pikachu");
        assert_eq!(resource.raw.name, "Pikachu");
        assert_eq!(resource.raw.mime_type.as_deref(), Some("application/json"));
        assert_eq!(
            resource.raw.description.as_deref(),
            Some("Information about Pikachu")
        );
    }

    #[tokio::test]
    async fn test_list_is_stable_across_calls() {
        let service = service();

        let first: Vec<_> = service
            .list_resources()
            .await
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        let second: Vec<_> = service
            .list_resources()
            .await
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_read_returns_full_record() {
        let service = service();

        let result = service.read_resource("pokemon://pikachu").await.unwrap();
        assert_eq!(result.contents.len(), 1);

        let body = match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("Expected text contents, got {other:?}"),
        };

        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["name"], "Pikachu");
        assert_eq!(value["type"], "Electric");
        assert_eq!(value["stats"]["speed"], 90);
    }

    #[tokio::test]
    async fn test_read_unknown_identifier_fails() {
        let service = service();

        let err = service
            .read_resource("pokemon://missingno")
            .await
            .unwrap_err();
        match err {
            ResourceError::NotFound(id) => assert_eq!(id, "missingno"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_listed_uris_round_trips_names() {
        let mut dex = Pokedex::new();
        dex.insert(
            "bulbasaur",
            PokemonRecord::new(
                "Bulbasaur",
                "Grass",
                "A Seed Pokémon.",
                BaseStats {
                    hp: 45,
                    attack: 49,
                    defense: 49,
                    speed: 45,
                },
            ),
        );
        dex.insert(
            "charmander",
            PokemonRecord::new(
                "Charmander",
                "Fire",
                "A Lizard Pokémon.",
                BaseStats {
                    hp: 39,
                    attack: 52,
                    defense: 43,
                    speed: 65,
                },
            ),
        );
        let service = ResourceService::new(Arc::new(dex));

        for resource in service.list_resources().await {
            let result = service.read_resource(&resource.raw.uri).await.unwrap();
            let body = match &result.contents[0] {
                ResourceContents::TextResourceContents { text, .. } => text,
                other => panic!("Expected text contents, got {other:?}"),
            };
            let value: serde_json::Value = serde_json::from_str(body).unwrap();
            assert_eq!(value["name"], resource.raw.name.as_str());
        }
    }
}
