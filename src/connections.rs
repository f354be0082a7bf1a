//! Lines between nearby particles.
//!
//! Every unordered pair closer than the connection radius is joined by a
//! white line whose opacity falls off linearly with distance. The pass is a
//! plain O(n²) scan; particle counts stay in the hundreds, so no spatial
//! index is kept.

use crate::color::Rgb;
use crate::draw::DrawList;
use crate::particle::Particle;

/// Opacity of a line spanning `distance`, or `None` when the pair is too far
/// apart. The comparison is strict: a pair exactly `radius` apart is not
/// connected.
pub fn line_alpha(distance: f32, radius: f32) -> Option<u8> {
    if distance < radius {
        Some((255.0 * (1.0 - distance / radius)) as u8)
    } else {
        None
    }
}

/// Record a line for every pair `(i, j)`, `i < j`, closer than `radius`.
///
/// Returns the number of lines recorded.
pub fn connect(particles: &[Particle], radius: f32, list: &mut DrawList) -> usize {
    let mut count = 0;

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.position.distance(b.position);
            if let Some(alpha) = line_alpha(distance, radius) {
                list.line(
                    a.position.round(),
                    b.position.round(),
                    Rgb::WHITE.with_alpha(alpha),
                );
                count += 1;
            }
        }
    }

    count
}
