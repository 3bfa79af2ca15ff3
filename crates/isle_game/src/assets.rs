//! Spritesheet manifest and sprite handles.
//!
//! The manifest is the JSON a texture packer writes next to its atlas image:
//!
//! ```json
//! {
//!   "ImageName": "packed.png",
//!   "Frames": {
//!     "grass.png": { "Frame": { "X": 0, "Y": 0, "W": 16, "H": 16 } }
//!   }
//! }
//! ```
//!
//! Image decoding happens outside the simulation. The core only needs a
//! stable handle per sprite name, resolved once at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Opaque handle to one frame of the spritesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Pixel rectangle of a frame within the atlas image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ManifestFrame {
    frame: FrameRect,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Manifest {
    image_name: String,
    frames: BTreeMap<String, ManifestFrame>,
}

/// Sprite names resolved against the spritesheet at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteNames {
    pub first_player: String,
    pub second_player: String,
    pub grass: String,
    pub sand: String,
    pub water: String,
}

impl Default for SpriteNames {
    fn default() -> Self {
        Self {
            first_player: "purple.png".to_string(),
            second_player: "red.png".to_string(),
            grass: "grass.png".to_string(),
            sand: "sand.png".to_string(),
            water: "water.png".to_string(),
        }
    }
}

/// Name -> handle lookup for one atlas.
///
/// Handles are assigned in name order, so the same manifest always yields
/// the same handles.
#[derive(Debug, Clone)]
pub struct Spritesheet {
    image_name: String,
    names: Vec<String>,
    rects: Vec<FrameRect>,
}

impl Spritesheet {
    /// Parse a packer manifest.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Manifest`] if the JSON is malformed and
    /// [`AssetError::InvalidFrame`] if a frame has a negative or non-finite
    /// size.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Manifest = serde_json::from_str(json)?;

        let mut names = Vec::with_capacity(manifest.frames.len());
        let mut rects = Vec::with_capacity(manifest.frames.len());
        for (name, ManifestFrame { frame }) in manifest.frames {
            let valid = |v: f64| v.is_finite() && v >= 0.0;
            if !valid(frame.w) || !valid(frame.h) {
                return Err(AssetError::InvalidFrame {
                    name,
                    w: frame.w,
                    h: frame.h,
                });
            }
            names.push(name);
            rects.push(frame);
        }

        Ok(Self {
            image_name: manifest.image_name,
            names,
            rects,
        })
    }

    /// Name of the atlas image the frames refer to.
    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Resolve a sprite name to its handle.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::UnknownSprite`] if the name is not in the sheet.
    pub fn get(&self, name: &str) -> Result<SpriteHandle, AssetError> {
        self.names
            .binary_search_by(|entry| entry.as_str().cmp(name))
            .map(|index| SpriteHandle(index as u32))
            .map_err(|_| AssetError::UnknownSprite(name.to_string()))
    }

    /// The atlas rectangle behind a handle.
    #[must_use]
    pub fn rect(&self, handle: SpriteHandle) -> Option<FrameRect> {
        self.rects.get(handle.0 as usize).copied()
    }

    /// Number of frames in the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the manifest listed no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
