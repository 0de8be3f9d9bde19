//! Test fixtures for traxel development.
//!
//! Builders for traxels with well-formed feature maps, and a deterministic
//! scatter generator used by integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use traxel_core::{FeatureMap, Locator, Traxel};

/// Label value stored in offset 0 of `"int-max-position"` fixtures.
pub const FIXTURE_LABEL: f32 = -1.0;

/// Feature map with a `"center-of-mass"` vector at `p`.
pub fn com_features(p: [f32; 3]) -> FeatureMap {
    FeatureMap::new().with("center-of-mass", p.to_vec())
}

/// Feature map with an `"int-max-position"` vector `[label, x, y, z]`.
pub fn intmax_features(p: [f32; 3]) -> FeatureMap {
    FeatureMap::new().with("int-max-position", vec![FIXTURE_LABEL, p[0], p[1], p[2]])
}

/// Traxel located by center of mass at `p`.
pub fn com_traxel(id: u32, timestep: i32, p: [f32; 3]) -> Traxel {
    Traxel::new(id, timestep, com_features(p))
}

/// Traxel located by intensity maximum at `p`.
pub fn intmax_traxel(id: u32, timestep: i32, p: [f32; 3]) -> Traxel {
    Traxel::with_locator(id, timestep, intmax_features(p), Locator::int_max_position())
}

/// Add an unrelated feature vector so fixtures resemble real segmentations.
pub fn with_extras(mut t: Traxel) -> Traxel {
    t.features.insert("count", vec![42.0]);
    t.features
        .insert("coord-bounding-box", vec![0.0, 0.0, 0.0, 8.0, 8.0, 4.0]);
    t
}

/// Deterministic pseudo-random scatter of `per_timestep` traxels over
/// `timesteps` frames.
///
/// Uses a SplitMix64 sequence seeded by `seed`, so the same arguments
/// always produce the same traxels. Ids within a timestep are `0..per_timestep`.
pub fn scatter(seed: u64, timesteps: i32, per_timestep: u32) -> Vec<Traxel> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    };
    let mut coord = move || (next() % 10_000) as f32 / 10.0;

    let mut out = Vec::with_capacity((timesteps.max(0) as usize) * per_timestep as usize);
    for t in 0..timesteps {
        for id in 0..per_timestep {
            let p = [coord(), coord(), coord()];
            out.push(with_extras(com_traxel(id, t, p)));
        }
    }
    out
}
