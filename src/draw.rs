//! Frame draw list.
//!
//! The simulation never talks to the GPU directly. Each tick it records
//! primitives into a [`DrawList`], which the renderer uploads as vertex and
//! instance buffers. Coordinates are canvas pixels with the origin at the
//! top-left corner and Y pointing down.
//!
//! Discs and glows share one stream and are drawn in the order they were
//! recorded, so a particle's glow only covers the particles drawn before it.
//! Consecutive entries of the same [`DiscKind`] form a [`DiscRun`], and the
//! renderer switches pipeline once per run. Lines follow in a single batch.
//!
//! | Kind | Blending |
//! |------|----------|
//! | [`DiscKind::Solid`] | alpha |
//! | [`DiscKind::Glow`] | additive |
//! | lines | alpha |

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::ops::Range;

/// A filled circle, laid out as one GPU instance.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Disc {
    /// Centre in canvas pixels.
    pub center: [f32; 2],
    /// Radius in pixels.
    pub radius: f32,
    _pad: f32,
    /// Normalised RGBA.
    pub color: [f32; 4],
}

impl Disc {
    pub fn new(center: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color,
        }
    }
}

/// One end of a line segment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// How a disc is composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscKind {
    /// Filled circle.
    Solid,
    /// Additively blended halo.
    Glow,
}

/// A stretch of consecutive discs of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscRun {
    pub kind: DiscKind,
    /// Indices into [`DrawList::discs`].
    pub range: Range<u32>,
}

/// Everything drawn in one frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    discs: Vec<Disc>,
    runs: Vec<DiscRun>,
    lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded primitives, keeping the allocations.
    pub fn clear(&mut self) {
        self.discs.clear();
        self.runs.clear();
        self.lines.clear();
    }

    fn push_disc(&mut self, kind: DiscKind, disc: Disc) {
        let index = self.discs.len() as u32;
        self.discs.push(disc);
        match self.runs.last_mut() {
            Some(run) if run.kind == kind => run.range.end = index + 1,
            _ => self.runs.push(DiscRun {
                kind,
                range: index..index + 1,
            }),
        }
    }

    /// Record a filled circle.
    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.push_disc(DiscKind::Solid, Disc::new(center, radius, color));
    }

    /// Record an additively blended circle.
    pub fn glow(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.push_disc(DiscKind::Glow, Disc::new(center, radius, color));
    }

    /// Record a one-pixel line segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]) {
        self.lines.push(LineVertex {
            position: from.to_array(),
            color,
        });
        self.lines.push(LineVertex {
            position: to.to_array(),
            color,
        });
    }

    /// Every disc and glow in draw order.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn runs(&self) -> &[DiscRun] {
        &self.runs
    }

    /// Kind of each entry of [`discs`](Self::discs).
    pub fn kinds(&self) -> impl Iterator<Item = DiscKind> + '_ {
        self.runs
            .iter()
            .flat_map(|run| run.range.clone().map(move |_| run.kind))
    }

    fn of_kind(&self, kind: DiscKind) -> impl Iterator<Item = &Disc> + '_ {
        self.runs
            .iter()
            .filter(move |run| run.kind == kind)
            .flat_map(move |run| &self.discs[run.range.start as usize..run.range.end as usize])
    }

    /// Filled circles in draw order.
    pub fn circles(&self) -> impl Iterator<Item = &Disc> + '_ {
        self.of_kind(DiscKind::Solid)
    }

    /// Glows in draw order.
    pub fn glows(&self) -> impl Iterator<Item = &Disc> + '_ {
        self.of_kind(DiscKind::Glow)
    }

    /// Line endpoints, two per segment.
    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.lines
    }

    /// Number of line segments.
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty() && self.lines.is_empty()
    }
}
