//! Render-side view of the simulation
//!
//! Physics bodies carry no drawing state. A host that draws them takes a
//! [`snapshot`] after a tick has fully completed and hands it to a
//! [`Renderer`]. Two renderers ship with the crate:
//! - [`TrailRecorder`] keeps the path each body has traced, the data a
//!   canvas would paint as tails
//! - [`CsvRenderer`] writes one row per body per frame, for headless runs

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, System};
use crate::simulation::vector::NVec2;

/// Pixel size of the body sprites
pub const SPRITE_SIZE: f64 = 300.0;
/// Fraction of the sprite width covered by the planet disc
pub const SPRITE_FILL: f64 = 0.62;

/// What a renderer needs to know about one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub name: Option<String>,
    pub position: NVec2,
    pub velocity: NVec2,
    pub mass: f64,
    pub radius: f64,
    pub sprite_scale: f64, // sprite scale so the disc spans size_scale * radius
}

impl BodyView {
    pub fn from_body(body: &Body, size_scale: f64) -> Self {
        Self {
            id: body.id,
            name: body.name.clone(),
            position: body.x,
            velocity: body.v,
            mass: body.m,
            radius: body.radius,
            sprite_scale: size_scale * body.radius / (SPRITE_SIZE * SPRITE_FILL / 2.0),
        }
    }

    /// Whether the body lies inside the `[0, world_size]` square
    pub fn in_world(&self, world_size: f64) -> bool {
        (0.0..=world_size).contains(&self.position.x) && (0.0..=world_size).contains(&self.position.y)
    }
}

/// Views of every body in registry order
pub fn snapshot(sys: &System, params: &Parameters) -> Vec<BodyView> {
    sys.bodies()
        .iter()
        .map(|b| BodyView::from_body(b, params.size_scale))
        .collect()
}

pub trait Renderer {
    fn render(&mut self, tick: u64, frame: &[BodyView]) -> io::Result<()>;
}

/// Records every position each body has occupied, frame by frame
#[derive(Debug, Default)]
pub struct TrailRecorder {
    trails: BTreeMap<BodyId, Vec<NVec2>>,
    limit: Option<usize>, // oldest points are dropped past this length
}

impl TrailRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            trails: BTreeMap::new(),
            limit: Some(limit),
        }
    }

    pub fn trail(&self, id: BodyId) -> Option<&[NVec2]> {
        self.trails.get(&id).map(Vec::as_slice)
    }
}

impl Renderer for TrailRecorder {
    fn render(&mut self, _tick: u64, frame: &[BodyView]) -> io::Result<()> {
        for view in frame {
            let trail = self.trails.entry(view.id).or_default();
            trail.push(view.position);
            if let Some(limit) = self.limit {
                if trail.len() > limit {
                    let excess = trail.len() - limit;
                    trail.drain(..excess);
                }
            }
        }
        Ok(())
    }
}

/// Writes `tick,id,name,x,y,vx,vy` rows
pub struct CsvRenderer<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for CsvRenderer<W> {
    fn render(&mut self, tick: u64, frame: &[BodyView]) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "tick,id,name,x,y,vx,vy")?;
            self.header_written = true;
        }
        for view in frame {
            writeln!(
                self.out,
                "{},{},{},{},{},{},{}",
                tick,
                view.id,
                view.name.as_deref().unwrap_or(""),
                view.position.x,
                view.position.y,
                view.velocity.x,
                view.velocity.y
            )?;
        }
        self.out.flush()
    }
}
