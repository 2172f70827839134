//! Pads around each device and the nets they join.
//!
//! Devices form a daisy chain: the clock and data outputs of step `s` share
//! nets with the clock and data inputs of step `s + 1`. The inputs of the
//! first device get dedicated chain-head nets.

use std::fmt::Display;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// The role of a pad in the chain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PadRole {
    /// Supply.
    Power,
    /// Clock output to the next device.
    ClockOut,
    /// Data output to the next device.
    DataOut,
    /// Data input from the previous device.
    DataIn,
    /// Clock input from the previous device.
    ClockIn,
    /// Ground.
    Ground,
}

/// How a pad's net is named.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NetLink {
    /// The supply rail.
    Supply,
    /// The ground rail.
    Ground,
    /// Pin `pin` of the next device.
    Next {
        /// Pin number on the next device.
        pin: u8,
    },
    /// Pin `pin` of this device, as seen from the previous one; the first
    /// device uses pin `head_pin` of device 1 instead.
    Previous {
        /// Pin number on this device.
        pin: u8,
        /// Pin number of the chain-head net.
        head_pin: u8,
    },
}

/// A row of the pad table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PadSpec {
    /// The pad role.
    pub role: PadRole,
    /// Angular position of the pad around the device, in eighths of a turn.
    pub eighths: u8,
    /// How the pad's net is named.
    pub link: NetLink,
}

/// The pads placed around every device, in placement order.
///
/// The six pads fan out in two half-arcs of three, leaving gaps at 0 and 4
/// eighths.
pub const PAD_TABLE: [PadSpec; 6] = [
    PadSpec {
        role: PadRole::Power,
        eighths: 1,
        link: NetLink::Supply,
    },
    PadSpec {
        role: PadRole::ClockOut,
        eighths: 2,
        link: NetLink::Next { pin: 5 },
    },
    PadSpec {
        role: PadRole::DataOut,
        eighths: 3,
        link: NetLink::Next { pin: 6 },
    },
    PadSpec {
        role: PadRole::DataIn,
        eighths: 5,
        link: NetLink::Previous { pin: 6, head_pin: 1 },
    },
    PadSpec {
        role: PadRole::ClockIn,
        eighths: 6,
        link: NetLink::Previous { pin: 5, head_pin: 2 },
    },
    PadSpec {
        role: PadRole::Ground,
        eighths: 7,
        link: NetLink::Ground,
    },
];

impl PadRole {
    /// All roles, in placement order.
    pub const ALL: [PadRole; 6] = [
        PadRole::Power,
        PadRole::ClockOut,
        PadRole::DataOut,
        PadRole::DataIn,
        PadRole::ClockIn,
        PadRole::Ground,
    ];

    /// The short key used in via ids.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Power => "vcc",
            Self::ClockOut => "cko",
            Self::DataOut => "sdo",
            Self::DataIn => "sdi",
            Self::ClockIn => "cki",
            Self::Ground => "gnd",
        }
    }

    /// This role's row of [`PAD_TABLE`].
    pub fn spec(&self) -> &'static PadSpec {
        // Every role has exactly one row.
        &PAD_TABLE[*self as usize]
    }
}

impl Display for PadRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Net names for the chain.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetScheme {
    /// Name of the supply net.
    pub supply: ArcStr,
    /// Name of the ground net.
    pub ground: ArcStr,
    /// Designator prefix of chained devices.
    pub prefix: ArcStr,
}

impl Default for NetScheme {
    fn default() -> Self {
        Self {
            supply: arcstr::literal!("+5V"),
            ground: arcstr::literal!("GND"),
            prefix: arcstr::literal!("D"),
        }
    }
}

impl NetScheme {
    /// The net joined by the `role` pad of the device at `step`.
    ///
    /// # Example
    ///
    /// ```
    /// # use sunflower::nets::{NetScheme, PadRole};
    /// let nets = NetScheme::default();
    /// assert_eq!(nets.net_name(PadRole::DataOut, 4), "D5_6");
    /// assert_eq!(nets.net_name(PadRole::DataIn, 5), "D5_6");
    /// assert_eq!(nets.net_name(PadRole::DataIn, 0), "D1_1");
    /// assert_eq!(nets.net_name(PadRole::Ground, 9), "GND");
    /// ```
    pub fn net_name(&self, role: PadRole, step: usize) -> ArcStr {
        let prefix = &self.prefix;
        match role.spec().link {
            NetLink::Supply => self.supply.clone(),
            NetLink::Ground => self.ground.clone(),
            NetLink::Next { pin } => arcstr::format!("{prefix}{}_{pin}", step + 1),
            NetLink::Previous { pin, head_pin } => {
                if step == 0 {
                    arcstr::format!("{prefix}1_{head_pin}")
                } else {
                    arcstr::format!("{prefix}{step}_{pin}")
                }
            }
        }
    }
}
