use bevy::prelude::Vec3;

/// Default search radius, in world units, for proximity queries.
pub const DEFAULT_SEARCH_DISTANCE: f32 = 50.0;

/// Euclidean distance between two positions, computed in double precision.
/// A missing position counts as coincident, so the result is zero.
pub fn distance_from(a: Option<Vec3>, b: Option<Vec3>) -> f32 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    (a.as_dvec3() - b.as_dvec3()).length() as f32
}

/// Ranks `candidates` by ascending distance from `origin` and keeps the
/// prefix that lies within `max_distance`.
///
/// The sort is stable and ranks on the same value the cutoff tests, so the
/// scan can stop at the first candidate past the bound. A NaN distance or a
/// NaN bound never counts as within.
pub fn nearest_within<T>(
    candidates: impl IntoIterator<Item = (T, Option<Vec3>)>,
    origin: Option<Vec3>,
    max_distance: f32,
) -> Vec<(T, f32)> {
    let mut ranked: Vec<(T, f32)> = candidates
        .into_iter()
        .map(|(item, position)| (item, distance_from(position, origin)))
        .filter(|(_, distance)| !distance.is_nan())
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let cutoff = ranked
        .iter()
        .position(|(_, distance)| !(*distance <= max_distance))
        .unwrap_or(ranked.len());
    ranked.truncate(cutoff);
    ranked
}
