//! Load/save boundary for the image list.
//!
//! The wire format is `{selected?, images: [...]}` with each image carrying
//! `{id, url, name, bounds: {x, y, width, height}, locked, visible}`.
//! Interaction state (selection flags, dragging) never serializes; the
//! selected image travels as a top-level id instead.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LayerResult;
use crate::image::SupportImage;
use crate::layer::SupportImageLayer;

/// Serializable snapshot of a layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<Uuid>,
    #[serde(default)]
    pub images: Vec<SupportImage>,
}

impl SupportImageLayer {
    pub fn to_state(&self) -> LayerState {
        LayerState {
            selected: self.selected_image().map(|image| image.id),
            images: self.images().to_vec(),
        }
    }

    /// Replaces the layer contents. A `selected` id that names no image in
    /// the list is reported and ignored.
    pub fn load_state(&mut self, state: LayerState) {
        self.replace_images(state.images);
        if let Some(id) = state.selected {
            if self.image(id).is_some() {
                self.select_image(id);
            } else {
                tracing::warn!(%id, "loaded state selects an unknown image");
            }
        }
    }

    pub fn to_json(&self) -> LayerResult<String> {
        Ok(serde_json::to_string(&self.to_state())?)
    }

    pub fn load_json(&mut self, json: &str) -> LayerResult<()> {
        let state: LayerState = serde_json::from_str(json)?;
        self.load_state(state);
        Ok(())
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.to_state())
            .context("serializing layer state")?;
        fs::write(path, json)
            .with_context(|| format!("writing layer state to {}", path.display()))?;
        Ok(())
    }

    pub fn load_from_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading layer state from {}", path.display()))?;
        let state: LayerState =
            serde_json::from_str(&json).context("parsing layer state")?;
        self.load_state(state);
        Ok(())
    }
}
