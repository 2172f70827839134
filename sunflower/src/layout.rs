//! The end-to-end layout pipeline.

use config::{Config, RingConfig, ViaConfig};
use easyeda::{CopperArea, Host};
use geometry::prelude::*;
use phyllotaxis::{BoundaryContour, SeedField, StripOrder};
use tracing::{span, Level};

use crate::devices::{discover, Device};
use crate::error::{Error, Result};
use crate::nets::NetScheme;
use crate::plan::Placement;

/// A validated layout: the seed field, the strip through it, and everything
/// needed to place devices and draw the ring.
#[derive(Debug, Clone)]
pub struct Layout {
    field: SeedField,
    seeds: SeedField,
    strip: StripOrder,
    nets: NetScheme,
    ring: RingConfig,
    via: ViaConfig,
    package: String,
}

impl Layout {
    /// Grows the field and walks the strip described by `config`.
    ///
    /// Fails if more seeds are walked than grown, or if the ring passes
    /// through more seeds than are walked.
    pub fn new(config: &Config) -> Result<Self> {
        let field_config = &config.field;
        let field = SeedField::generate(field_config.field_size, field_config.scale);
        let seeds = field
            .truncated(field_config.seed_count)
            .ok_or(Error::SeedCountExceedsField {
                seed_count: field_config.seed_count,
                field_size: field_config.field_size,
            })?;
        if config.ring.points > seeds.len() {
            return Err(Error::RingExceedsSeeds {
                points: config.ring.points,
                seed_count: seeds.len(),
            });
        }

        let strip = {
            let _guard = span!(Level::INFO, "building strip", seeds = seeds.len()).entered();
            StripOrder::build(seeds.as_slice())
        };

        Ok(Self {
            field,
            seeds,
            strip,
            nets: NetScheme {
                supply: config.chain.supply.as_str().into(),
                ground: config.chain.ground.as_str().into(),
                prefix: config.chain.prefix.as_str().into(),
            },
            ring: config.ring.clone(),
            via: config.via.clone(),
            package: config.chain.package.clone(),
        })
    }

    /// Every grown seed, including the unused headroom.
    #[inline]
    pub fn field(&self) -> &SeedField {
        &self.field
    }

    /// The seeds walked by the strip.
    #[inline]
    pub fn seeds(&self) -> &SeedField {
        &self.seeds
    }

    /// The placement order.
    #[inline]
    pub fn strip(&self) -> &StripOrder {
        &self.strip
    }

    /// The net naming scheme.
    #[inline]
    pub fn nets(&self) -> &NetScheme {
        &self.nets
    }

    /// The outline through the outermost walked seeds.
    pub fn contour(&self) -> BoundaryContour {
        BoundaryContour::build(&self.seeds, self.ring.points, self.ring.radius)
    }

    /// The copper area filling the ring outline.
    pub fn ring(&self) -> CopperArea {
        let ring = &self.ring;
        CopperArea {
            layer: ring.layer.clone(),
            clearance_width: to_device_units(ring.clearance_mm),
            to_board_outline: to_device_units(ring.to_board_outline_mm),
            fill_style: ring.fill_style.clone(),
            thermal: ring.thermal.clone(),
            spoke_width: ring.spoke_width,
            keep_island: ring.keep_island.clone(),
            path: self.contour().path(),
            locked: u8::from(ring.locked),
        }
    }

    /// Assigns `devices`, in order, to consecutive strip steps.
    pub fn plan(&self, devices: Vec<Device>) -> Result<Vec<Placement>> {
        if devices.len() > self.strip.len() {
            return Err(Error::TooManyDevices {
                devices: devices.len(),
                seed_count: self.strip.len(),
            });
        }
        Ok(self
            .strip
            .steps()
            .zip(devices)
            .map(|((step, seed), device)| {
                Placement::new(step, device, &self.seeds[seed], self.via.offset, &self.nets)
            })
            .collect())
    }

    /// Places every chained device of the host document along the strip,
    /// with a via at each of its pads.
    ///
    /// The document origin is reset first so that coordinates are absolute.
    pub fn place_devices(&self, host: &mut impl Host) -> Result<Vec<Placement>> {
        let _guard = span!(Level::INFO, "placing devices", package = %self.package).entered();

        host.set_origin(Point::zero())?;
        let document = host.read_document()?;
        let devices = discover(&document, &self.package)?;
        if devices.is_empty() {
            tracing::warn!(package = %self.package, "no footprints to place");
        }
        let placements = self.plan(devices)?;

        for placement in &placements {
            let device = &placement.device;
            host.move_object(&device.id, placement.position)?;
            host.rotate_object(&device.id, placement.rotation)?;
            tracing::info!(
                step = placement.step,
                id = %device.id,
                designator = %device.designator,
                seed = placement.seed,
                x = placement.position.x,
                y = placement.position.y,
                rotation = placement.rotation,
                "placed device"
            );
            for via in placement.vias(&self.via) {
                host.create_shape(&via.into())?;
            }
        }
        Ok(placements)
    }

    /// Creates the copper ring in the host document.
    pub fn draw_ring(&self, host: &mut impl Host) -> Result<CopperArea> {
        let _guard = span!(Level::INFO, "drawing ring", points = self.ring.points).entered();
        let ring = self.ring();
        host.create_shape(&ring.clone().into())?;
        Ok(ring)
    }
}
