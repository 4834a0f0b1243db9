//! Scene output formatting

use crate::api::scene::{Primitive, SceneSnapshot};
use crate::api::types::{OutputFormat, OverlayResult};
use std::fmt::Write as _;

/// Renders a scene snapshot as text
pub trait SceneFormatter {
    fn format(&self, scene: &SceneSnapshot) -> OverlayResult<String>;
}

/// One line per primitive, for terminals and logs
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Also print the mapped sections before the primitives
    pub include_mapped_points: bool,
}

impl SceneFormatter for TextFormatter {
    fn format(&self, scene: &SceneSnapshot) -> OverlayResult<String> {
        let mut out = String::new();

        if scene.is_empty() {
            out.push_str("no route to draw\n");
            return Ok(out);
        }

        if self.include_mapped_points {
            for (idx, section) in scene.mapped_sections.iter().enumerate() {
                let points: Vec<String> = section.iter().map(ToString::to_string).collect();
                let _ = writeln!(out, "section {}: {}", idx, points.join(" "));
            }
        }

        for primitive in &scene.primitives {
            let _ = match primitive {
                Primitive::Arrow { from, to, direction, sequence_index } => {
                    writeln!(out, "#{:<4} arrow  {} -> {} {}", sequence_index, from, to, direction)
                }
                Primitive::Path { from, to, sequence_index } => {
                    writeln!(out, "#{:<4} path   {} -> {}", sequence_index, from, to)
                }
                Primitive::DestinationMarker { position, width, height } => {
                    writeln!(out, "destination {} ({}x{})", position, width, height)
                }
            };
        }

        let _ = writeln!(
            out,
            "{} segments, route length {:.1}",
            scene.segments.len(),
            scene.route_length()
        );
        Ok(out)
    }
}

/// Serializes the full snapshot with serde_json
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl SceneFormatter for JsonFormatter {
    fn format(&self, scene: &SceneSnapshot) -> OverlayResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(scene)?
        } else {
            serde_json::to_string(scene)?
        };
        Ok(json)
    }
}

/// Formatter for an output format choice
pub fn formatter_for(format: OutputFormat) -> Box<dyn SceneFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::default()),
        OutputFormat::Json => Box::new(JsonFormatter { pretty: true }),
    }
}
