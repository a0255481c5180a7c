//! Component item registry.
//!
//! The tracked item set is fixed at compile time. Each variant maps to the
//! host's subtype id and a human-readable display name.

use serde::{Deserialize, Serialize};

/// Object-builder prefix the host puts in front of every item type id.
pub const LEGACY_TYPE_PREFIX: &str = "MyObjectBuilder_";

/// Type id of the component category (`MyObjectBuilder_Component`).
pub const COMPONENT_TYPE_ID: &str = "MyObjectBuilder_Component";

macro_rules! components {
    ($( $variant:ident => ($subtype:literal, $display:literal) ),+ $(,)?) => {
        /// A tracked component item.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Component {
            $( $variant, )+
        }

        impl Component {
            /// Every tracked component, in registry order.
            pub const ALL: &'static [Component] = &[ $( Component::$variant, )+ ];

            pub const COUNT: usize = Self::ALL.len();

            /// Subtype id as reported by the host (e.g. `LargeTube`).
            pub const fn subtype_id(self) -> &'static str {
                match self {
                    $( Component::$variant => $subtype, )+
                }
            }

            pub const fn display_name(self) -> &'static str {
                match self {
                    $( Component::$variant => $display, )+
                }
            }

            /// Registry lookup by subtype id. Case-sensitive.
            pub fn from_subtype_id(subtype_id: &str) -> Option<Self> {
                match subtype_id {
                    $( $subtype => Some(Component::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

components! {
    BulletproofGlass => ("BulletproofGlass", "Bulletproof Glass"),
    Computer => ("Computer", "Computer"),
    Construction => ("Construction", "Construction"),
    Detector => ("Detector", "Detector"),
    Display => ("Display", "Display"),
    Explosives => ("Explosives", "Explosives"),
    Girder => ("Girder", "Girder"),
    Gravity => ("Gravity", "Gravity"),
    InteriorPlate => ("InteriorPlate", "Interior Plate"),
    Medical => ("Medical", "Medical"),
    MetalGrid => ("MetalGrid", "Metal Grid"),
    Motor => ("Motor", "Motor"),
    PowerCell => ("PowerCell", "Power Cell"),
    RadioCommunication => ("RadioCommunication", "Radio Communication"),
    Reactor => ("Reactor", "Reactor"),
    SolarCell => ("SolarCell", "Solar Cell"),
    SteelPlate => ("SteelPlate", "Steel Plate"),
    SteelTubeLarge => ("LargeTube", "Large Tube"),
    SteelTubeSmall => ("SmallTube", "Small Tube"),
    Thruster => ("Thrust", "Thruster"),
    Superconductor => ("Superconductor", "Super Conductor"),
}

impl Component {
    /// Position in [`Component::ALL`]; doubles as the quantity table slot.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.subtype_id())
    }
}
