// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration: environment defaults overridden by flags.

use anyhow::{anyhow, bail, Context, Result};
use layout_lens_geometry::PlacementConfig;
use std::path::PathBuf;

/// Document read when no path is given on the command line
pub const DEFAULT_PLAN_PATH: &str = "output/latest/room_plan.json";

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default room plan document
    pub plan_path: String,
    /// Base directory for relative document paths
    pub project_dir: PathBuf,
    /// Wall thickness in centimeters, when set and valid
    pub wall_thickness_cm: Option<f64>,
    /// Attach labels to floor boxes, when set
    pub labels: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            plan_path: lookup("LAYOUT_LENS_PLAN").unwrap_or_else(|| DEFAULT_PLAN_PATH.into()),
            project_dir: lookup("LAYOUT_LENS_PROJECT_DIR")
                .map(PathBuf::from)
                .or_else(|| std::env::current_dir().ok())
                .unwrap_or_else(|| PathBuf::from(".")),
            wall_thickness_cm: lookup("LAYOUT_LENS_WALL_THICKNESS_CM").and_then(|raw| {
                match parse_wall_thickness_cm(&raw) {
                    Ok(cm) => Some(cm),
                    Err(err) => {
                        tracing::warn!(
                            var = "LAYOUT_LENS_WALL_THICKNESS_CM",
                            value = %raw,
                            error = %err,
                            "Ignoring invalid wall thickness"
                        );
                        None
                    }
                }
            }),
            labels: lookup("LAYOUT_LENS_LABELS")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")),
        }
    }
}

/// Parse a wall thickness in centimeters; must be a positive number.
fn parse_wall_thickness_cm(raw: &str) -> Result<f64> {
    let cm: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid wall thickness '{}'", raw))?;
    if cm.is_nan() || cm <= 0.0 {
        bail!("wall thickness must be positive, got {}", cm);
    }
    Ok(cm)
}

/// What the binary should do for this invocation
#[derive(Debug, Clone)]
pub struct Options {
    pub inputs: Vec<String>,
    pub output: Option<PathBuf>,
    pub project_dir: PathBuf,
    pub placement: PlacementConfig,
    pub summary_only: bool,
    pub show_help: bool,
}

/// Apply command-line flags on top of `config`.
///
/// Placement settings are layered: defaults, then the `--config` file,
/// then the environment, then flags. Flag order does not matter.
/// `args` excludes the program name.
pub fn parse_args(args: &[String], config: &Config) -> Result<Options> {
    let mut inputs = Vec::new();
    let mut output = None;
    let mut project_dir = config.project_dir.clone();
    let mut config_path: Option<String> = None;
    let mut wall_thickness_cm = None;
    let mut no_walls = false;
    let mut no_outline = false;
    let mut no_openings = false;
    let mut no_labels = false;
    let mut summary_only = false;
    let mut show_help = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };

        match flag {
            "--help" | "-h" => show_help = true,
            "--output" | "-o" => output = Some(PathBuf::from(value()?)),
            "--project-dir" => project_dir = PathBuf::from(value()?),
            "--config" => config_path = Some(value()?),
            "--wall-thickness" => wall_thickness_cm = Some(parse_wall_thickness_cm(&value()?)?),
            "--no-walls" => no_walls = true,
            "--no-outline" => no_outline = true,
            "--no-openings" => no_openings = true,
            "--no-labels" => no_labels = true,
            "--summary" => summary_only = true,
            other if other.starts_with('-') => bail!("unknown option: {}", other),
            path => inputs.push(path.to_string()),
        }
    }

    let mut placement = match &config_path {
        Some(path) => load_placement_config(path)?,
        None => PlacementConfig::default(),
    };

    if let Some(cm) = config.wall_thickness_cm {
        placement.wall_thickness_m = cm / 100.0;
    }
    if let Some(labels) = config.labels {
        placement.labels_enabled = labels;
    }

    if let Some(cm) = wall_thickness_cm {
        placement.wall_thickness_m = cm / 100.0;
    }
    if no_walls {
        placement.spawn_walls = false;
    }
    if no_outline {
        placement.draw_outline = false;
    }
    if no_openings {
        placement.draw_openings = false;
    }
    if no_labels {
        placement.labels_enabled = false;
    }

    if inputs.is_empty() {
        inputs.push(config.plan_path.clone());
    }

    Ok(Options {
        inputs,
        output,
        project_dir,
        placement,
        summary_only,
        show_help,
    })
}

fn load_placement_config(path: &str) -> Result<PlacementConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read placement config '{}'", path))?;
    serde_json::from_str(&text).with_context(|| format!("invalid placement config '{}'", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_lookup(|key| match key {
            "LAYOUT_LENS_PROJECT_DIR" => Some("/project".into()),
            "LAYOUT_LENS_WALL_THICKNESS_CM" => Some("20".into()),
            "LAYOUT_LENS_LABELS" => Some("off".into()),
            _ => None,
        })
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_env_defaults() {
        let config = config();
        assert_eq!(config.plan_path, DEFAULT_PLAN_PATH);
        assert_eq!(config.project_dir, PathBuf::from("/project"));
        assert_eq!(config.wall_thickness_cm, Some(20.0));
        assert_eq!(config.labels, Some(false));
    }

    #[test]
    fn test_invalid_env_wall_thickness_is_ignored() {
        for raw in ["thick", "-5", "0", "NaN"] {
            let config = Config::from_lookup(|key| match key {
                "LAYOUT_LENS_WALL_THICKNESS_CM" => Some(raw.to_string()),
                _ => None,
            });
            assert_eq!(config.wall_thickness_cm, None, "accepted '{}'", raw);

            let options = parse_args(&[], &config).unwrap();
            let default = PlacementConfig::default().wall_thickness_m;
            assert!((options.placement.wall_thickness_m - default).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unset_env_keeps_placement_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.wall_thickness_cm, None);
        assert_eq!(config.labels, None);
        let options = parse_args(&[], &config).unwrap();
        assert!(options.placement.labels_enabled);
    }

    #[test]
    fn test_config_file_layers_under_env_and_flags() {
        let path = std::env::temp_dir().join(format!(
            "layout-lens-placement-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"wall_thickness_m": 0.3, "door_height": 200, "labels_enabled": true}"#,
        )
        .unwrap();
        let path_arg = path.to_string_lossy().to_string();

        // Flags before and after --config give the same result
        let before = parse_args(&args(&["--no-walls", "--config", &path_arg]), &config()).unwrap();
        let after = parse_args(&args(&["--config", &path_arg, "--no-walls"]), &config()).unwrap();
        for options in [&before, &after] {
            assert!(!options.placement.spawn_walls);
            assert!((options.placement.door_height - 200.0).abs() < 1e-12);
            // Environment wins over the file
            assert!((options.placement.wall_thickness_m - 0.2).abs() < 1e-12);
            assert!(!options.placement.labels_enabled);
        }

        let flagged = parse_args(
            &args(&["--wall-thickness", "15", "--config", &path_arg]),
            &config(),
        )
        .unwrap();
        assert!((flagged.placement.wall_thickness_m - 0.15).abs() < 1e-12);

        // Without env overrides the file values stand
        let bare = parse_args(&args(&["--config", &path_arg]), &Config::from_lookup(|_| None)).unwrap();
        assert!((bare.placement.wall_thickness_m - 0.3).abs() < 1e-12);
        assert!(bare.placement.labels_enabled);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_no_args_uses_env_plan() {
        let options = parse_args(&[], &config()).unwrap();
        assert_eq!(options.inputs, vec![DEFAULT_PLAN_PATH.to_string()]);
        assert!((options.placement.wall_thickness_m - 0.2).abs() < 1e-12);
        assert!(!options.placement.labels_enabled);
    }

    #[test]
    fn test_flags() {
        let options = parse_args(
            &args(&["a.json", "b.json", "--no-walls", "--wall-thickness", "15", "-o", "out.json", "--summary"]),
            &config(),
        )
        .unwrap();
        assert_eq!(options.inputs, vec!["a.json", "b.json"]);
        assert!(!options.placement.spawn_walls);
        assert!(options.placement.draw_openings);
        assert!((options.placement.wall_thickness_m - 0.15).abs() < 1e-12);
        assert_eq!(options.output, Some(PathBuf::from("out.json")));
        assert!(options.summary_only);
    }

    #[test]
    fn test_bad_flags() {
        assert!(parse_args(&args(&["--wall-thickness", "thick"]), &config()).is_err());
        assert!(parse_args(&args(&["--wall-thickness", "-3"]), &config()).is_err());
        assert!(parse_args(&args(&["--output"]), &config()).is_err());
        assert!(parse_args(&args(&["--frobnicate"]), &config()).is_err());
    }
}
