use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use pplane_core::errors::{ErrorInfo, PlaneError};
use pplane_dot::{render_dot, DotConfig};
use pplane_geom::{plane_to_json, IncidencePlane};

/// Output syntax for the rendered plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// DOT-style graph description (vertices plus hyphen-chained paths).
    Dot,
    /// JSON serialization of the incidence structure.
    Json,
}

/// Renders the plane in the requested format.
pub fn render(
    plane: &IncidencePlane,
    format: OutputFormat,
    dot_config: &DotConfig,
) -> Result<String, PlaneError> {
    match format {
        OutputFormat::Dot => Ok(render_dot(plane, dot_config)),
        OutputFormat::Json => plane_to_json(plane),
    }
}

/// Writes the artifact to the given path, or to stdout when no path is set.
pub fn write_artifact(path: Option<&Path>, content: &str) -> Result<(), PlaneError> {
    match path {
        Some(path) => fs::write(path, content).map_err(|err| {
            PlaneError::Render(
                ErrorInfo::new("write-failed", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        }),
        None => std::io::stdout()
            .write_all(content.as_bytes())
            .map_err(|err| PlaneError::Render(ErrorInfo::new("write-failed", err.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_format_renders_a_graph() {
        let plane = IncidencePlane::build(2).unwrap();
        let rendered = render(&plane, OutputFormat::Dot, &DotConfig::default()).unwrap();
        assert!(rendered.starts_with("Graph K {"));
    }

    #[test]
    fn json_format_round_trips() {
        let plane = IncidencePlane::build(3).unwrap();
        let rendered = render(&plane, OutputFormat::Json, &DotConfig::default()).unwrap();
        let restored = pplane_geom::plane_from_json(&rendered).unwrap();
        assert_eq!(plane, restored);
    }

    #[test]
    fn artifact_lands_in_the_requested_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fano.dot");
        write_artifact(Some(&path), "Graph K {\n}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Graph K {\n}\n");
    }

    #[test]
    fn unwritable_path_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fano.dot");
        let err = write_artifact(Some(&path), "x").unwrap_err();
        assert_eq!(err.info().code, "write-failed");
    }
}
