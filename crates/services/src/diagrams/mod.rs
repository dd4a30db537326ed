//! Figures shown next to a problem or lecture conversation.

mod lookup;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};
use tutor_core::model::{LectureTopic, Problem};

pub use lookup::resolve_image_path;

/// An encoded image ready to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    mime: &'static str,
    bytes: Vec<u8>,
}

impl Diagram {
    #[must_use]
    pub fn svg(markup: String) -> Self {
        Self {
            mime: "image/svg+xml",
            bytes: markup.into_bytes(),
        }
    }

    #[must_use]
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            mime: "image/png",
            bytes,
        }
    }

    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Inline `data:` URI for an `<img src>`.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Produces the figure for a problem or lecture. Never fails; missing art
/// becomes a placeholder.
pub trait DiagramProvider: Send + Sync {
    fn render(&self, problem: &Problem) -> Diagram;
    fn render_lecture(&self, topic: LectureTopic) -> Diagram;
}

/// Draws known problems procedurally and reads the rest from an image tree.
#[derive(Debug, Clone)]
pub struct FileDiagramProvider {
    images_root: PathBuf,
}

impl FileDiagramProvider {
    #[must_use]
    pub fn new(images_root: impl Into<PathBuf>) -> Self {
        Self {
            images_root: images_root.into(),
        }
    }

    #[must_use]
    pub fn images_root(&self) -> &Path {
        &self.images_root
    }
}

impl DiagramProvider for FileDiagramProvider {
    fn render(&self, problem: &Problem) -> Diagram {
        let pid = problem.id().as_str();
        if let Some(markup) = svg::procedural(pid) {
            return Diagram::svg(markup);
        }

        if let Some(path) = resolve_image_path(&self.images_root, problem) {
            if path.is_file() {
                match fs::read(&path) {
                    Ok(bytes) => return Diagram::png(bytes),
                    Err(err) => warn!(path = %path.display(), error = %err, "diagram unreadable"),
                }
            } else {
                debug!(path = %path.display(), "no diagram file");
            }
        }

        Diagram::svg(svg::not_found(pid))
    }

    fn render_lecture(&self, topic: LectureTopic) -> Diagram {
        Diagram::svg(svg::lecture_axes(topic.title()))
    }
}
