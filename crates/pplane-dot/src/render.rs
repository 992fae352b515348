use serde::{Deserialize, Serialize};

use pplane_geom::IncidencePlane;

use crate::palette::color_for;

/// Options controlling the DOT rendering of a plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotConfig {
    /// Name of the emitted graph.
    pub graph_name: String,
    /// Whether line statements carry a color annotation.
    pub colored: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: "K".into(),
            colored: true,
        }
    }
}

/// Renders the plane as an undirected DOT-style graph description.
///
/// One vertex statement per point id in canonical order, then one path
/// statement per line chaining its incident point ids with ` -- `, in line
/// emission order. With `colored` set, each path is annotated with the
/// palette color for its emission index.
pub fn render_dot(plane: &IncidencePlane, config: &DotConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Graph {} {{\n", config.graph_name));

    for point in plane.point_ids() {
        out.push_str(&format!("\t{}\n", point.as_raw()));
    }
    out.push('\n');

    for (index, line) in plane.lines().iter().enumerate() {
        let path = line
            .iter()
            .map(|point| point.as_raw().to_string())
            .collect::<Vec<_>>()
            .join(" -- ");
        if config.colored {
            out.push_str(&format!("\t{} [color = {}]\n", path, color_for(index)));
        } else {
            out.push_str(&format!("\t{path}\n"));
        }
    }

    out.push_str("}\n");
    out
}
