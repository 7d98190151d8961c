use std::fs;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use dmap_cli::inputs::{MapInputs, parse_target};
use dmap_map::{DetailPanel, ForecastLinks, MapSession, render_document};
use dmap_model::Party;

use crate::cli::{ClickArgs, InputArgs, PanelArgs, RenderArgs};
use crate::summary::print_regions;
use crate::types::{ClickReport, ClickStep, RenderResult};

fn inputs(args: &InputArgs) -> MapInputs {
    MapInputs::resolve(
        args.data_dir.clone(),
        args.topology.clone(),
        args.config.clone(),
        args.skip_unknown_regions,
    )
}

pub fn run_regions(args: &InputArgs) -> Result<()> {
    let span = info_span!("regions");
    let _guard = span.enter();
    let data = inputs(args).load_reference()?;
    print_regions(&data);
    Ok(())
}

/// Print a region's panel. Only the reference tables are needed, so the
/// region does not have to be on the map.
pub fn run_panel(inputs_args: &InputArgs, args: &PanelArgs) -> Result<()> {
    let span = info_span!("panel", region = %args.region);
    let _guard = span.enter();
    let inputs = inputs(inputs_args);
    let config = inputs.load_config()?;
    let data = inputs.load_reference()?;
    let region = data
        .find_region(&args.region)
        .ok_or_else(|| anyhow!("no region matches {:?}", args.region))?;
    let links = ForecastLinks::from_config(&config);
    let panel = DetailPanel::build(
        &region.name,
        data.primary(Party::Democratic, &region.name),
        data.primary(Party::Republican, &region.name),
        &links,
    );
    if args.html {
        println!("{}", panel.to_markup().context("render panel markup")?);
    } else {
        println!("{}", panel.to_text());
    }
    Ok(())
}

pub fn run_click(inputs_args: &InputArgs, args: &ClickArgs) -> Result<ClickReport> {
    let span = info_span!("click", clicks = args.targets.len());
    let _guard = span.enter();
    let mut session = inputs(inputs_args).load_session()?;
    let mut steps = Vec::with_capacity(args.targets.len());
    let mut at_ms = 0u64;
    for raw in &args.targets {
        let target = parse_target(&session, raw)?;
        let outcome = session
            .click(target, Duration::from_millis(at_ms))
            .with_context(|| format!("click {raw}"))?;
        steps.push(ClickStep {
            input: raw.clone(),
            at_ms,
            outcome,
        });
        at_ms = at_ms.saturating_add(args.interval_ms);
    }
    Ok(ClickReport {
        steps,
        panel: session.panel().cloned(),
    })
}

pub fn run_render(inputs_args: &InputArgs, args: &RenderArgs) -> Result<RenderResult> {
    let span = info_span!("render", output = %args.output.display());
    let _guard = span.enter();
    let mut session = inputs(inputs_args).load_session()?;
    let now = select_regions(&mut session, &args.select, args.at_ms)?;
    let html = render_document(&session, now, &args.title).context("render map document")?;
    if let Some(parent) = args.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&args.output, html)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(regions = session.index().regions().len(), "map written");
    Ok(RenderResult {
        output: args.output.clone(),
        regions: session.index().regions().len(),
        selection: session.selection().to_string(),
    })
}

/// Click each region once its predecessor has settled and return the render
/// time: `at_ms` after the last click, or when its transition ends.
fn select_regions(
    session: &mut MapSession,
    select: &[String],
    at_ms: Option<u64>,
) -> Result<Duration> {
    let mut clicked_at = Duration::ZERO;
    for raw in select {
        let target = parse_target(session, raw)?;
        clicked_at = session.animator().active().map_or(clicked_at, |transition| {
            transition.ends_at()
        });
        session
            .click(target, clicked_at)
            .with_context(|| format!("select {raw}"))?;
    }
    let now = match at_ms {
        Some(ms) => clicked_at + Duration::from_millis(ms),
        None => session
            .animator()
            .active()
            .map_or(clicked_at, |transition| transition.ends_at()),
    };
    debug!(now_ms = now.as_millis(), "render time");
    Ok(now)
}
