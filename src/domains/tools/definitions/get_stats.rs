//! Get stats tool definition.
//!
//! A tool that returns the display name and base stats of a Pokemon. An
//! unknown Pokemon does not fail the call: it produces a successful result
//! whose payload carries an error object. Only an unknown tool name or
//! malformed arguments propagate as protocol errors.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::pokedex::{BaseStats, Pokedex};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get stats tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetStatsParams {
    /// Name of the Pokemon (e.g., pikachu, charizard). Case-insensitive.
    pub pokemon: String,
}

// ============================================================================
// Tool Output
// ============================================================================

/// Outcome of a stats lookup.
///
/// Both variants serialize into the successful result payload. `Missing`
/// is the soft-failure path: the lookup misses, but the call itself
/// succeeds and the payload carries an `error` field instead.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatsOutcome {
    /// The Pokemon was found; payload is `{"name": ..., "stats": ...}`.
    Report(StatsReport),

    /// The Pokemon was not found; payload is `{"error": ...}`.
    Missing(StatsMissing),
}

/// Derived view of a record: display name plus base stats.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Display name of the Pokemon.
    pub name: String,

    /// Base stat block.
    pub stats: BaseStats,
}

/// Soft-failure payload for a lookup miss.
#[derive(Debug, Clone, Serialize)]
pub struct StatsMissing {
    /// Human-readable error message naming the missing Pokemon.
    pub error: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get stats tool - returns name and base stats for one Pokemon.
pub struct GetStatsTool;

impl GetStatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_stats";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed stats for a specific Pokemon";

    /// Look up the stats for the requested Pokemon.
    ///
    /// The argument is lowercased before lookup; the miss message carries
    /// the lowercased form.
    pub fn lookup(dex: &Pokedex, params: &GetStatsParams) -> StatsOutcome {
        let query = params.pokemon.to_lowercase();

        match dex.get(&query) {
            Some(record) => StatsOutcome::Report(StatsReport {
                name: record.name.clone(),
                stats: record.stats,
            }),
            None => StatsOutcome::Missing(StatsMissing {
                error: format!("Pokemon {query} not found"),
            }),
        }
    }

    /// Execute the tool logic.
    pub fn execute(dex: &Pokedex, params: &GetStatsParams) -> Result<CallToolResult, ToolError> {
        info!("Get stats tool called for: {}", params.pokemon);

        let outcome = Self::lookup(dex, params);
        let text = serde_json::to_string_pretty(&outcome)?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetStatsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
