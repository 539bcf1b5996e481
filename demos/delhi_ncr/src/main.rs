//! delhi_ncr — end-to-end run of the aq_reroute engine over Delhi NCR.
//!
//! Maps severity onto the arterial catalog, ranks critical roads, diverts
//! traffic away from a road, and renders the regional heatmap.  Results are
//! written as CSV and the reallocation is printed as JSON.
//!
//! ```text
//! delhi_ncr [ROAD_ID] [ACTION] [OUTPUT_DIR]
//! ```
//!
//! `ROAD_ID` defaults to the worst critical road, `ACTION` to `block`, and
//! `OUTPUT_DIR` to `output/delhi_ncr`.  Set `RUST_LOG=debug` for per-road
//! detail.

mod network;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use log::{debug, info, warn};

use aq_core::RiskCategory;
use aq_output::{AssessmentRow, CsvWriter, DistributionRow, GridRow, OutputWriter};
use aq_reroute::{RerouteConfig, RerouteEngine, TrafficAction};
use aq_roads::{map_roads_with, select_critical, SharedRoadRegistry};
use aq_spatial::{generate_grid_with, Idw};

use network::{load_roads, load_stations, NCR_BOUNDS, NCR_STEPS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let road_arg   = args.next();
    let action     = TrafficAction::from(args.next().as_deref().unwrap_or("block"));
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "output/delhi_ncr".into()));

    // 1. Reference data.
    let stations = load_stations()?;
    let registry = SharedRoadRegistry::new(load_roads()?);
    let roads = registry.snapshot();
    info!("Loaded {} stations and {} roads", stations.len(), roads.len());
    for s in &stations {
        let value = s.value as u32;
        debug!("station {} → {} ({})", s.position, value, RiskCategory::from_severity(value));
    }

    let idw = Idw::default();
    let engine = RerouteEngine::new(RerouteConfig::default(), idw)?;
    let policy = engine.config();
    debug!(
        "reroute policy: alpha {}, lane factor {}, feedback max {}, listing top {}",
        policy.alpha, policy.lane_factor, policy.feedback_max, policy.max_listed
    );

    // 2. Road severity and critical ranking.
    let selection = select_critical(map_roads_with(&idw, roads.roads(), &stations)?);
    info!("{} of {} roads need action", selection.critical_count, roads.len());
    for a in &selection.ordered {
        debug!("{:<22} severity {:>3}  {}", a.road.name, a.severity, a.congestion);
    }

    // 3. Reallocation.
    let road_id = match road_arg {
        Some(id) => id,
        None => selection
            .critical()
            .next()
            .or_else(|| selection.ordered.first())
            .map(|a| a.road.id.clone())
            .unwrap_or_default(),
    };
    if !roads.contains(&road_id) {
        warn!("road {road_id:?} is not in the catalog; using a placeholder zone");
    }
    if let TrafficAction::Other(name) = &action {
        warn!("unknown action {name:?}; no severity reduction will be modelled");
    }

    let result = engine.reallocate(&road_id, &action, &roads, &stations)?;
    info!("{}", result.summary());
    info!(
        "{}: severity {} → {} ({}% improvement), load balance {}",
        result.blocked_road.segment().name,
        result.original_severity,
        result.projected_severity,
        result.improvement_pct,
        result.load_balance_score,
    );
    for (slot, alt) in [
        ("primary", &result.plan.primary),
        ("secondary", &result.plan.secondary),
        ("tertiary", &result.plan.tertiary),
    ] {
        if let Some(alt) = alt {
            info!(
                "  {slot:<9} {:<22} {:>5.1}%  severity {} → {}",
                alt.road.name, alt.traffic_share_pct, alt.severity, alt.projected_severity
            );
        }
    }

    // 4. Heatmap.
    let t0 = Instant::now();
    let grid = generate_grid_with(&idw, &stations, NCR_BOUNDS, NCR_STEPS)?;
    info!(
        "Heatmap: {} points from {} stations in {:.3} ms",
        grid.points.len(),
        grid.station_count,
        t0.elapsed().as_secs_f64() * 1e3
    );

    // 5. Output.
    std::fs::create_dir_all(&output_dir)?;
    let mut writer = CsvWriter::new(&output_dir)?;
    let assessment_rows: Vec<_> = selection.ordered.iter().map(AssessmentRow::from).collect();
    let grid_rows: Vec<_> = grid.points.iter().map(GridRow::from).collect();
    writer.write_assessments(&assessment_rows)?;
    writer.write_distribution(&DistributionRow::from_result(&result))?;
    writer.write_grid(&grid_rows)?;
    writer.finish()?;
    info!("Wrote CSV output to {}", output_dir.display());

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
