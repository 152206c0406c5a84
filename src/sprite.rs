// Lazily built glow sprites keyed by shape, color, and rounded size.

use crate::constants::*;
use crate::field::Shape;
use fnv::FnvHashMap;
use glam::Vec2;
use std::collections::hash_map::Entry;

/// Composite cache key. Size is bucketed to whole CSS pixels so the key space
/// stays bounded by palette × shapes × size range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub shape: Shape,
    pub color: &'static str,
    pub size: u32,
}

impl SpriteKey {
    pub fn new(shape: Shape, color: &'static str, size: f32) -> Self {
        Self {
            shape,
            color,
            size: size.round().max(1.0) as u32,
        }
    }

    pub fn geometry(&self) -> SpriteGeometry {
        SpriteGeometry::for_size(self.size as f32)
    }
}

/// Layout of the two-pass glow sprite, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteGeometry {
    /// Side of the square surface: the shape plus glow padding on each side.
    pub extent: f32,
    pub halo_radius: f32,
    pub halo_blur: f32,
    pub core_radius: f32,
    pub core_blur: f32,
}

impl SpriteGeometry {
    pub fn for_size(size: f32) -> Self {
        let pad = size * SPRITE_PAD_SIZES;
        Self {
            extent: size + pad * 2.0,
            halo_radius: size * HALO_RADIUS_SIZES,
            halo_blur: size * HALO_BLUR_SIZES,
            core_radius: size * CORE_RADIUS_SIZES,
            core_blur: size * CORE_BLUR_SIZES,
        }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.extent * 0.5
    }
}

/// Destination rect `(x, y, w, h)` for drawing `key`'s sprite centered on
/// `pos`. The drawn size is the sprite's own extent, never the bare particle
/// size, so the glow padding is not squeezed.
pub fn sprite_rect(pos: Vec2, key: &SpriteKey) -> (f32, f32, f32, f32) {
    let geom = key.geometry();
    let half = geom.center();
    (pos.x - half, pos.y - half, geom.extent, geom.extent)
}

/// Never-evicting cache from `SpriteKey` to a rendered image `S`.
pub struct SpriteCache<S> {
    entries: FnvHashMap<SpriteKey, S>,
}

impl<S> Default for SpriteCache<S> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<S> SpriteCache<S> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, key: &SpriteKey) -> Option<&S> {
        self.entries.get(key)
    }

    /// Return the cached sprite for `key`, running `build` only on a miss.
    /// A failed build leaves the cache unchanged so the next frame retries.
    pub fn get_or_try_build<E>(
        &mut self,
        key: SpriteKey,
        build: impl FnOnce(&SpriteKey) -> Result<S, E>,
    ) -> Result<&S, E> {
        match self.entries.entry(key) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let sprite = build(e.key())?;
                Ok(e.insert(sprite))
            }
        }
    }
}
