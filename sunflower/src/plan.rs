//! Per-device placement: position, rotation and pad sites.

use arcstr::ArcStr;
use config::ViaConfig;
use easyeda::Via;
use geometry::prelude::*;
use phyllotaxis::Seed;
use serde::{Deserialize, Serialize};

use crate::devices::Device;
use crate::nets::{NetScheme, PadRole};

/// Where one pad of a placed device lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadSite {
    /// The pad's role in the chain.
    pub role: PadRole,
    /// Via position, canvas axes.
    pub position: Point,
    /// The net the via joins.
    pub net: ArcStr,
}

/// Where and how one device is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Position of the device along the strip.
    pub step: usize,
    /// The placed device.
    pub device: Device,
    /// Index of the seed the device sits on.
    pub seed: usize,
    /// Device origin, canvas axes.
    pub position: Point,
    /// Absolute rotation in degrees, in `[0, 360)`.
    pub rotation: f64,
    /// Pad sites, in [`PadRole::ALL`] order.
    pub pads: Vec<PadSite>,
}

/// The rotation, in radians, that turns a device on a seed at angle `theta`
/// so that its pads face along the spiral.
///
/// # Example
///
/// ```
/// # use sunflower::plan::rotation;
/// # use geometry::TAU;
/// # use approx::assert_abs_diff_eq;
/// assert_abs_diff_eq!(rotation(0.), 3. * TAU / 4., epsilon = 1e-12);
/// assert_abs_diff_eq!(rotation(TAU / 2.), TAU / 4., epsilon = 1e-12);
/// ```
pub fn rotation(theta: f64) -> f64 {
    normalize_angle(7. * TAU / 4. - theta)
}

/// The direction, model axes, from a device origin to the pad of `role`,
/// given the device rotation in radians.
pub fn pad_angle(role: PadRole, rotation: f64) -> f64 {
    TAU / 4. - rotation + TAU * role.spec().eighths as f64 / 8.
}

impl Placement {
    /// Places `device` on `seed` as step `step` of the chain.
    ///
    /// Pads sit `offset` device units from the device origin.
    pub fn new(step: usize, device: Device, seed: &Seed, offset: f64, nets: &NetScheme) -> Self {
        let origin = seed.polar();
        let rotate = rotation(origin.angle);
        let pads = PadRole::ALL
            .iter()
            .map(|&role| {
                let pad = origin + Polar::new(offset, pad_angle(role, rotate));
                PadSite {
                    role,
                    position: pad.to_cartesian().to_canvas_axes(),
                    net: nets.net_name(role, step),
                }
            })
            .collect();
        Self {
            step,
            device,
            seed: seed.index,
            position: seed.position().to_canvas_axes(),
            rotation: to_degrees(rotate),
            pads,
        }
    }

    /// The vias to create at this device's pad sites.
    pub fn vias(&self, config: &ViaConfig) -> Vec<Via> {
        self.pads
            .iter()
            .map(|pad| Via {
                id: format!("_{}_{}", self.device.designator, pad.role.key()),
                diameter: to_device_units(config.diameter_mm),
                hole_radius: to_device_units(config.hole_mm / 2.),
                layer: config.layer,
                x: pad.position.x,
                y: pad.position.y,
                net: pad.net.to_string(),
            })
            .collect()
    }

    /// The pad site of `role`.
    pub fn pad(&self, role: PadRole) -> &PadSite {
        &self.pads[role as usize]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use phyllotaxis::SeedField;
    use test_log::test;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn device(designator: &str) -> Device {
        Device::new(format!("gge{designator}"), designator).unwrap()
    }

    fn assert_point(p: Point, x: f64, y: f64) {
        assert_abs_diff_eq!(p, Point::new(x, y), epsilon = EPSILON);
    }

    #[test]
    fn rotation_is_normalized() {
        for i in 0..64 {
            let r = rotation(i as f64 * TAU / 37.);
            assert!((0. ..TAU).contains(&r));
        }
    }

    #[test]
    fn places_first_step() {
        let field = SeedField::generate(12, 18.);
        let placement = Placement::new(0, device("D1"), &field[6], 10., &NetScheme::default());

        assert_eq!(placement.seed, 6);
        assert_point(placement.position, -12.36327174092045, 45.99075463460192);
        assert_abs_diff_eq!(placement.rotation, 15.046584300227222, epsilon = EPSILON);

        let expected = [
            (-17.356228874561626, 37.326438212539436),
            (-22.0204224846782, 43.394711585587004),
            (-21.027588162982923, 50.9837117682431),
            (-7.370314607279289, 54.65507105666441),
            (-2.7061209971626985, 48.586797683616844),
            (-3.698955318857962, 40.99779750096074),
        ];
        for (pad, (x, y)) in placement.pads.iter().zip(expected) {
            assert_point(pad.position, x, y);
        }
        let nets: Vec<_> = placement.pads.iter().map(|p| p.net.as_str()).collect();
        assert_eq!(nets, vec!["+5V", "D1_5", "D1_6", "D1_1", "D1_2", "GND"]);
    }

    #[test]
    fn places_second_step() {
        let field = SeedField::generate(12, 18.);
        let placement = Placement::new(1, device("D2"), &field[1], 10., &NetScheme::default());

        assert_point(placement.position, -18.77034722130349, 17.195175637128706);
        assert_abs_diff_eq!(placement.rotation, 47.50776405003787, epsilon = EPSILON);
        assert_point(
            placement.pad(PadRole::Power).position,
            -18.332799559032715,
            7.204752620897543,
        );
        assert_point(
            placement.pad(PadRole::DataIn).position,
            -19.207894883574262,
            27.185598653359875,
        );
        assert_point(
            placement.pad(PadRole::Ground).position,
            -8.779924205072323,
            17.632723299399476,
        );
        assert_eq!(placement.pad(PadRole::ClockOut).net, "D2_5");
        assert_eq!(placement.pad(PadRole::ClockIn).net, "D1_5");
    }

    #[test]
    fn pads_sit_at_offset() {
        let field = SeedField::generate(100, 18.);
        for seed in field.iter() {
            let placement = Placement::new(3, device("D4"), seed, 10., &NetScheme::default());
            for pad in &placement.pads {
                assert_abs_diff_eq!(pad.position.distance(placement.position), 10., epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn vias_follow_pads() {
        let field = SeedField::generate(12, 18.);
        let placement = Placement::new(0, device("D1"), &field[6], 10., &NetScheme::default());
        let vias = placement.vias(&ViaConfig::default());

        assert_eq!(vias.len(), 6);
        let ids: Vec<_> = vias.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["_D1_vcc", "_D1_cko", "_D1_sdo", "_D1_sdi", "_D1_cki", "_D1_gnd"]
        );
        for (via, pad) in vias.iter().zip(&placement.pads) {
            assert_abs_diff_eq!(via.diameter, 0.9 / 0.254, epsilon = EPSILON);
            assert_abs_diff_eq!(via.hole_radius, 0.3 / 0.254, epsilon = EPSILON);
            assert_eq!(via.layer, 11);
            assert_eq!((via.x, via.y), (pad.position.x, pad.position.y));
            assert_eq!(via.net, pad.net.as_str());
        }
    }
}
