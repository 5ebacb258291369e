use anyhow::{bail, Context, Result};
use hullkit::api::minkowski_scene;
use hullkit::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Point sets and reference points for one run, as read from JSON.
#[derive(Debug, Deserialize)]
pub struct Scene {
    pub a: Vec<[f64; 2]>,
    #[serde(default)]
    pub b: Vec<[f64; 2]>,
    #[serde(default)]
    pub origin: Option<[f64; 2]>,
    #[serde(default)]
    pub query: Option<[f64; 2]>,
}

/// What a run produced; absent fields are omitted from the JSON.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Outcome {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hull_a: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hull_b: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inside: Option<bool>,
}

pub fn mode_name(mode: AlgoMode) -> &'static str {
    match mode {
        AlgoMode::QuickHull => "quick-hull",
        AlgoMode::PointInHull => "point-in-hull",
        AlgoMode::MinkowskiSum => "minkowski-sum",
        AlgoMode::MinkowskiDifference => "minkowski-difference",
        AlgoMode::Overlap => "overlap",
    }
}

pub fn load_scene(path: &Path) -> Result<Scene> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
}

fn to_vecs(pts: &[[f64; 2]]) -> Vec<Vec2<f64>> {
    pts.iter().map(|&[x, y]| Vec2::new(x, y)).collect()
}

fn to_pairs(hull: &Hull) -> Vec<[f64; 2]> {
    hull.vertices().iter().map(|v| [v.x, v.y]).collect()
}

/// Run one mode against a scene.
pub fn run_mode(mode: AlgoMode, scene: &Scene, cfg: &HullCfg) -> Result<Outcome> {
    let a = to_vecs(&scene.a);
    let b = to_vecs(&scene.b);
    if mode.point_sets() == 2 && b.is_empty() {
        bail!("mode {} needs a non-empty second point set `b`", mode_name(mode));
    }
    let origin = scene
        .origin
        .map(|[x, y]| Vec2::new(x, y))
        .unwrap_or_else(Vec2::zeros);
    let mut out = Outcome {
        mode: mode_name(mode).to_string(),
        ..Outcome::default()
    };
    match mode {
        AlgoMode::QuickHull => {
            let ha = compute_hull_with(&a, cfg).context("hull of `a`")?;
            out.hull_a = Some(to_pairs(&ha));
        }
        AlgoMode::PointInHull => {
            let hb = compute_hull_with(&b, cfg).context("hull of `b`")?;
            let query = match (scene.query, a.first()) {
                (Some([x, y]), _) => Vec2::new(x, y),
                (None, Some(first)) => *first,
                (None, None) => bail!("point-in-hull needs `query` or a point in `a`"),
            };
            out.inside = Some(point_in_hull_eps(query, &hb, cfg.eps));
            out.hull_b = Some(to_pairs(&hb));
        }
        AlgoMode::MinkowskiSum | AlgoMode::MinkowskiDifference => {
            let Some(op) = mode.minkowski_op() else {
                bail!("mode {} has no Minkowski combination", mode_name(mode));
            };
            let (ha, hb, combined) = minkowski_scene(&a, &b, origin, op, cfg)?;
            out.hull_a = Some(to_pairs(&ha));
            out.hull_b = Some(to_pairs(&hb));
            out.combined = Some(to_pairs(&combined));
        }
        AlgoMode::Overlap => {
            let ha = compute_hull_with(&a, cfg).context("hull of `a`")?;
            let hb = compute_hull_with(&b, cfg).context("hull of `b`")?;
            out.inside = Some(overlaps_with(&ha, &hb, origin, cfg)?);
            out.hull_a = Some(to_pairs(&ha));
            out.hull_b = Some(to_pairs(&hb));
        }
    }
    Ok(out)
}

/// Pretty JSON to `out`, or to stdout when no path is given.
pub fn write_outcome(outcome: &Outcome, out: Option<&Path>) -> Result<()> {
    let Some(path) = out else {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    };
    let doc = serde_json::to_vec_pretty(outcome)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
