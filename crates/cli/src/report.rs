//! Human-readable and JSON output.

use serde::Serialize;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use u_loading_core::{ItemKind, PackingResult, PackingSummary};
use u_loading_d3::{CapacityEstimate, Container};

/// JSON document written for an optimization run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeReport<'a> {
    pub summary: PackingSummary,
    pub weight_limit_exceeded: bool,
    pub result: &'a PackingResult,
}

impl<'a> OptimizeReport<'a> {
    /// Builds the report for `result` loaded into `container`.
    pub fn new(container: &Container, result: &'a PackingResult) -> Self {
        Self {
            summary: PackingSummary::from(result),
            weight_limit_exceeded: over_weight_limit(container, result),
            result,
        }
    }
}

fn over_weight_limit(container: &Container, result: &PackingResult) -> bool {
    container
        .max_weight()
        .is_some_and(|limit| result.exceeds_weight(limit))
}

/// Renders the summary printed after an optimization run.
pub fn render_summary(
    container: &Container,
    result: &PackingResult,
) -> Result<String, fmt::Error> {
    let stats = result.placement_stats();
    let mut out = String::new();

    writeln!(out, "Container {}", container.dimensions())?;
    writeln!(out, "{:-<40}", "")?;
    writeln!(out, "  Items placed:    {}", result.placed_count())?;
    writeln!(out, "  Pallets placed:  {}", result.pallets.len())?;
    writeln!(out, "  Boxes placed:    {}", result.boxes.len())?;
    writeln!(out, "  Used volume:     {:.3}", result.used_volume())?;
    writeln!(out, "  Utilization:     {}", result.utilization_percent())?;
    writeln!(out, "  Unused space:    {:.3}", result.unused_space)?;
    writeln!(out, "  Total weight:    {}", result.total_weight)?;

    if let Some(limit) = container.max_weight() {
        writeln!(out, "  Weight limit:    {}", limit)?;
        if result.exceeds_weight(limit) {
            writeln!(
                out,
                "  WARNING: total weight {} exceeds the limit by {}",
                result.total_weight,
                result.total_weight - limit
            )?;
        }
    }

    if !stats.orientation_distribution.is_empty() {
        writeln!(out, "  Orientations:")?;
        for ((kind, index), count) in &stats.orientation_distribution {
            let label = match kind {
                ItemKind::Pallet => "pallet",
                ItemKind::Box => "box",
            };
            writeln!(out, "    {:<6} #{}: {}", label, index, count)?;
        }
    }

    Ok(out)
}

/// Renders the summary printed after a quick estimate.
pub fn render_estimate(estimate: &CapacityEstimate) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Quick estimate")?;
    writeln!(out, "{:-<40}", "")?;
    writeln!(out, "  Requested boxes: {}", estimate.requested)?;
    writeln!(out, "  Boxes placed:    {}", estimate.boxes_placed())?;
    writeln!(out, "  Capacity:        {}", estimate.max_boxes)?;
    if let Some(per_pallet) = estimate.boxes_per_pallet {
        writeln!(out, "  Boxes/pallet:    {}", per_pallet)?;
        writeln!(out, "  Pallets needed:  {}", estimate.pallets_needed)?;
        writeln!(out, "  Pallets placed:  {}", estimate.pallets.len())?;
    }
    writeln!(out, "  Fill:            {:.1}%", estimate.fill_percentage)?;
    if !estimate.fits {
        writeln!(out, "  WARNING: {} boxes do not fit", estimate.unplaced())?;
    }

    Ok(out)
}

/// Serializes `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Writes `value` as pretty JSON to `path`.
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> anyhow::Result<()> {
    fs::write(path, to_json(value)?)?;
    Ok(())
}
