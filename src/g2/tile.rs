//! G2 tile catalog: a closed set of opcodes in `0x00..=0x6F`. Unlike G1,
//! direction is still baked into the opcode for monster/player/ice-corner/
//! force-floor families (no modifier byte needed for those), while the
//! families listed in spec.md §4.H (wires, letters, clone machines,
//! custom colors, logic gates, tracks, thin walls) carry their attributes
//! in modifier bytes decoded by [`super::element`].

use num::FromPrimitive;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::g1::Dir;

pub const MAX_CODE: u8 = 0x6F;

/// Which of the five fixed cell layers (spec.md §3 G2 Cell) this tile
/// occupies. Decode/encode order is `Terrain < Pickup < NotAllowed < Mob
/// < Panel`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    Terrain,
    Pickup,
    NotAllowed,
    Mob,
    Panel,
}

/// Which modifier bytes (if any) follow this tile's opcode in the packed
/// stream. See spec.md §4.H for each family's byte layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierFamily {
    None,
    WireNibble,
    Letter,
    CloneDirections,
    Color,
    Gate,
    Track,
    ThinWall,
}

macro_rules! tile2_table {
    ($( $variant:ident = $code:literal, $mnemonic:literal, layer = $layer:expr $(, dir = $dir:expr)? $(, modifiers = $modifiers:expr)? ;)*) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Tile2 {
            $( $variant = $code, )*
        }

        impl Tile2 {
            pub fn code(&self) -> u8 {
                *self as u8
            }

            pub fn from_code(code: u8) -> Option<Tile2> {
                Tile2::from_u8(code)
            }

            pub fn mnemonic(&self) -> &'static str {
                match self {
                    $( Tile2::$variant => $mnemonic, )*
                }
            }

            pub fn layer(&self) -> Layer {
                match self {
                    $( Tile2::$variant => $layer, )*
                }
            }

            pub fn dir(&self) -> Option<Dir> {
                match self {
                    $( Tile2::$variant => tile2_table!(@dir $($dir)?), )*
                }
            }

            pub fn modifiers(&self) -> ModifierFamily {
                match self {
                    $( Tile2::$variant => tile2_table!(@modifiers $($modifiers)?), )*
                }
            }
        }
    };
    (@dir) => { None };
    (@dir $dir:expr) => { Some($dir) };
    (@modifiers) => { ModifierFamily::None };
    (@modifiers $modifiers:expr) => { $modifiers };
}

tile2_table! {
    Floor = 0x00, "FLOOR", layer = Layer::Terrain;
    Wall = 0x01, "WALL", layer = Layer::Terrain;
    Chip = 0x02, "CHIP", layer = Layer::Pickup;
    Water = 0x03, "WATER", layer = Layer::Terrain;
    Fire = 0x04, "FIRE", layer = Layer::Terrain;
    Dirt = 0x05, "DIRT", layer = Layer::Terrain;
    Gravel = 0x06, "GRAVEL", layer = Layer::Terrain;
    Exit = 0x07, "EXIT", layer = Layer::Terrain;
    Hint = 0x08, "HINT", layer = Layer::Terrain;
    Socket = 0x09, "SOCKET", layer = Layer::Terrain;
    InvisibleWall = 0x0A, "INVISIBLE_WALL", layer = Layer::Terrain;
    BlueWallFake = 0x0B, "BLUE_WALL_FAKE", layer = Layer::Terrain;
    BlueWallReal = 0x0C, "BLUE_WALL_REAL", layer = Layer::Terrain;
    PopupWall = 0x0D, "POPUP_WALL", layer = Layer::Terrain;
    ToggleWallClosed = 0x0E, "TOGGLE_WALL_CLOSED", layer = Layer::Terrain;
    ToggleWallOpen = 0x0F, "TOGGLE_WALL_OPEN", layer = Layer::Terrain;
    ToggleButton = 0x10, "TOGGLE_BUTTON", layer = Layer::Terrain;
    TankButton = 0x11, "TANK_BUTTON", layer = Layer::Terrain;
    TrapButton = 0x12, "TRAP_BUTTON", layer = Layer::Terrain;
    CloneButton = 0x13, "CLONE_BUTTON", layer = Layer::Terrain;
    Trap = 0x14, "TRAP", layer = Layer::Terrain;
    Cloner = 0x15, "CLONER", layer = Layer::Terrain;
    Teleport = 0x16, "TELEPORT", layer = Layer::Terrain;
    DoorBlue = 0x17, "DOOR_BLUE", layer = Layer::Terrain;
    DoorRed = 0x18, "DOOR_RED", layer = Layer::Terrain;
    DoorGreen = 0x19, "DOOR_GREEN", layer = Layer::Terrain;
    DoorYellow = 0x1A, "DOOR_YELLOW", layer = Layer::Terrain;
    KeyBlue = 0x1B, "KEY_BLUE", layer = Layer::Pickup;
    KeyRed = 0x1C, "KEY_RED", layer = Layer::Pickup;
    KeyGreen = 0x1D, "KEY_GREEN", layer = Layer::Pickup;
    KeyYellow = 0x1E, "KEY_YELLOW", layer = Layer::Pickup;
    BootsWater = 0x1F, "BOOTS_WATER", layer = Layer::Pickup;
    BootsFire = 0x20, "BOOTS_FIRE", layer = Layer::Pickup;
    BootsIce = 0x21, "BOOTS_ICE", layer = Layer::Pickup;
    BootsForce = 0x22, "BOOTS_FORCE", layer = Layer::Pickup;
    Ice = 0x23, "ICE", layer = Layer::Terrain;
    IceNe = 0x24, "ICE_NE", layer = Layer::Terrain, dir = Dir::Ne;
    IceSe = 0x25, "ICE_SE", layer = Layer::Terrain, dir = Dir::Se;
    IceSw = 0x26, "ICE_SW", layer = Layer::Terrain, dir = Dir::Sw;
    IceNw = 0x27, "ICE_NW", layer = Layer::Terrain, dir = Dir::Nw;
    ForceFloorN = 0x28, "FORCE_FLOOR_N", layer = Layer::Terrain, dir = Dir::N;
    ForceFloorE = 0x29, "FORCE_FLOOR_E", layer = Layer::Terrain, dir = Dir::E;
    ForceFloorS = 0x2A, "FORCE_FLOOR_S", layer = Layer::Terrain, dir = Dir::S;
    ForceFloorW = 0x2B, "FORCE_FLOOR_W", layer = Layer::Terrain, dir = Dir::W;
    ForceFloorRandom = 0x2C, "FORCE_FLOOR_RANDOM", layer = Layer::Terrain;
    Thief = 0x2D, "THIEF", layer = Layer::Terrain;
    Bomb = 0x2E, "BOMB", layer = Layer::Terrain;
    Block = 0x2F, "BLOCK", layer = Layer::Mob;
    WireFloor = 0x30, "WIRE_FLOOR", layer = Layer::Terrain, modifiers = ModifierFamily::WireNibble;
    SwitchOn = 0x31, "SWITCH_ON", layer = Layer::Terrain, modifiers = ModifierFamily::WireNibble;
    SwitchOff = 0x32, "SWITCH_OFF", layer = Layer::Terrain, modifiers = ModifierFamily::WireNibble;
    SteelWall = 0x33, "STEEL_WALL", layer = Layer::Terrain, modifiers = ModifierFamily::WireNibble;
    LogicGate = 0x34, "LOGIC_GATE", layer = Layer::Terrain, modifiers = ModifierFamily::Gate;
    RailroadTrack = 0x35, "RAILROAD_TRACK", layer = Layer::Terrain, modifiers = ModifierFamily::Track;
    ThinWall = 0x36, "THIN_WALL", layer = Layer::Panel, modifiers = ModifierFamily::ThinWall;
    CloneMachine = 0x37, "CLONE_MACHINE", layer = Layer::Terrain, modifiers = ModifierFamily::CloneDirections;
    CustomWall = 0x38, "CUSTOM_WALL", layer = Layer::Terrain, modifiers = ModifierFamily::Color;
    CustomFloor = 0x39, "CUSTOM_FLOOR", layer = Layer::Terrain, modifiers = ModifierFamily::Color;
    LetterTile = 0x3A, "LETTER_TILE", layer = Layer::Terrain, modifiers = ModifierFamily::Letter;
    NotAllowedMarker = 0x3B, "NOT_ALLOWED_MARKER", layer = Layer::NotAllowed;
    BugN = 0x3C, "BUG_N", layer = Layer::Mob, dir = Dir::N;
    BugE = 0x3D, "BUG_E", layer = Layer::Mob, dir = Dir::E;
    BugS = 0x3E, "BUG_S", layer = Layer::Mob, dir = Dir::S;
    BugW = 0x3F, "BUG_W", layer = Layer::Mob, dir = Dir::W;
    FireballN = 0x40, "FIREBALL_N", layer = Layer::Mob, dir = Dir::N;
    FireballE = 0x41, "FIREBALL_E", layer = Layer::Mob, dir = Dir::E;
    FireballS = 0x42, "FIREBALL_S", layer = Layer::Mob, dir = Dir::S;
    FireballW = 0x43, "FIREBALL_W", layer = Layer::Mob, dir = Dir::W;
    BallN = 0x44, "BALL_N", layer = Layer::Mob, dir = Dir::N;
    BallE = 0x45, "BALL_E", layer = Layer::Mob, dir = Dir::E;
    BallS = 0x46, "BALL_S", layer = Layer::Mob, dir = Dir::S;
    BallW = 0x47, "BALL_W", layer = Layer::Mob, dir = Dir::W;
    TankN = 0x48, "TANK_N", layer = Layer::Mob, dir = Dir::N;
    TankE = 0x49, "TANK_E", layer = Layer::Mob, dir = Dir::E;
    TankS = 0x4A, "TANK_S", layer = Layer::Mob, dir = Dir::S;
    TankW = 0x4B, "TANK_W", layer = Layer::Mob, dir = Dir::W;
    GliderN = 0x4C, "GLIDER_N", layer = Layer::Mob, dir = Dir::N;
    GliderE = 0x4D, "GLIDER_E", layer = Layer::Mob, dir = Dir::E;
    GliderS = 0x4E, "GLIDER_S", layer = Layer::Mob, dir = Dir::S;
    GliderW = 0x4F, "GLIDER_W", layer = Layer::Mob, dir = Dir::W;
    TeethN = 0x50, "TEETH_N", layer = Layer::Mob, dir = Dir::N;
    TeethE = 0x51, "TEETH_E", layer = Layer::Mob, dir = Dir::E;
    TeethS = 0x52, "TEETH_S", layer = Layer::Mob, dir = Dir::S;
    TeethW = 0x53, "TEETH_W", layer = Layer::Mob, dir = Dir::W;
    WalkerN = 0x54, "WALKER_N", layer = Layer::Mob, dir = Dir::N;
    WalkerE = 0x55, "WALKER_E", layer = Layer::Mob, dir = Dir::E;
    WalkerS = 0x56, "WALKER_S", layer = Layer::Mob, dir = Dir::S;
    WalkerW = 0x57, "WALKER_W", layer = Layer::Mob, dir = Dir::W;
    BlobN = 0x58, "BLOB_N", layer = Layer::Mob, dir = Dir::N;
    BlobE = 0x59, "BLOB_E", layer = Layer::Mob, dir = Dir::E;
    BlobS = 0x5A, "BLOB_S", layer = Layer::Mob, dir = Dir::S;
    BlobW = 0x5B, "BLOB_W", layer = Layer::Mob, dir = Dir::W;
    ParameciumN = 0x5C, "PARAMECIUM_N", layer = Layer::Mob, dir = Dir::N;
    ParameciumE = 0x5D, "PARAMECIUM_E", layer = Layer::Mob, dir = Dir::E;
    ParameciumS = 0x5E, "PARAMECIUM_S", layer = Layer::Mob, dir = Dir::S;
    ParameciumW = 0x5F, "PARAMECIUM_W", layer = Layer::Mob, dir = Dir::W;
    CloneBlockN = 0x60, "CLONE_BLOCK_N", layer = Layer::Mob, dir = Dir::N;
    CloneBlockE = 0x61, "CLONE_BLOCK_E", layer = Layer::Mob, dir = Dir::E;
    CloneBlockS = 0x62, "CLONE_BLOCK_S", layer = Layer::Mob, dir = Dir::S;
    CloneBlockW = 0x63, "CLONE_BLOCK_W", layer = Layer::Mob, dir = Dir::W;
    PlayerN = 0x64, "PLAYER_N", layer = Layer::Mob, dir = Dir::N;
    PlayerE = 0x65, "PLAYER_E", layer = Layer::Mob, dir = Dir::E;
    PlayerS = 0x66, "PLAYER_S", layer = Layer::Mob, dir = Dir::S;
    PlayerW = 0x67, "PLAYER_W", layer = Layer::Mob, dir = Dir::W;
    PlayerSwimmingN = 0x68, "PLAYER_SWIMMING_N", layer = Layer::Mob, dir = Dir::N;
    PlayerSwimmingE = 0x69, "PLAYER_SWIMMING_E", layer = Layer::Mob, dir = Dir::E;
    PlayerSwimmingS = 0x6A, "PLAYER_SWIMMING_S", layer = Layer::Mob, dir = Dir::S;
    PlayerSwimmingW = 0x6B, "PLAYER_SWIMMING_W", layer = Layer::Mob, dir = Dir::W;
    PlayerDrowned = 0x6C, "PLAYER_DROWNED", layer = Layer::Mob;
    PlayerBurned = 0x6D, "PLAYER_BURNED", layer = Layer::Mob;
    PlayerDead = 0x6E, "PLAYER_DEAD", layer = Layer::Mob;
    WonOverlay = 0x6F, "WON_OVERLAY", layer = Layer::Mob;
}

impl Tile2 {
    pub fn is_monster(&self) -> bool {
        self.layer() == Layer::Mob && self.dir().is_some() && !self.is_player_family()
    }

    fn is_player_family(&self) -> bool {
        matches!(
            self,
            Tile2::PlayerN
                | Tile2::PlayerE
                | Tile2::PlayerS
                | Tile2::PlayerW
                | Tile2::PlayerSwimmingN
                | Tile2::PlayerSwimmingE
                | Tile2::PlayerSwimmingS
                | Tile2::PlayerSwimmingW
                | Tile2::CloneBlockN
                | Tile2::CloneBlockE
                | Tile2::CloneBlockS
                | Tile2::CloneBlockW
        )
    }

    /// The other half of this tile's toggle pair (toggle walls, the
    /// logic-gate wired switch), or `self` if it isn't one half of a pair.
    pub fn toggled(&self) -> Tile2 {
        match self {
            Tile2::ToggleWallClosed => Tile2::ToggleWallOpen,
            Tile2::ToggleWallOpen => Tile2::ToggleWallClosed,
            Tile2::SwitchOn => Tile2::SwitchOff,
            Tile2::SwitchOff => Tile2::SwitchOn,
            other => *other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_code() {
        for code in 0..=MAX_CODE {
            let t = Tile2::from_code(code).unwrap();
            assert_eq!(t.code(), code);
        }
    }

    #[test]
    fn layer_classification() {
        assert_eq!(Tile2::Floor.layer(), Layer::Terrain);
        assert_eq!(Tile2::Chip.layer(), Layer::Pickup);
        assert_eq!(Tile2::ThinWall.layer(), Layer::Panel);
        assert_eq!(Tile2::BugN.layer(), Layer::Mob);
        assert_eq!(Tile2::NotAllowedMarker.layer(), Layer::NotAllowed);
    }

    #[test]
    fn modifier_family_assignment() {
        assert_eq!(Tile2::SwitchOn.modifiers(), ModifierFamily::WireNibble);
        assert_eq!(Tile2::LetterTile.modifiers(), ModifierFamily::Letter);
        assert_eq!(Tile2::Floor.modifiers(), ModifierFamily::None);
    }

    #[test]
    fn toggle_pairs_swap() {
        assert_eq!(Tile2::ToggleWallClosed.toggled(), Tile2::ToggleWallOpen);
        assert_eq!(Tile2::ToggleWallOpen.toggled(), Tile2::ToggleWallClosed);
        assert_eq!(Tile2::SwitchOn.toggled(), Tile2::SwitchOff);
        assert_eq!(Tile2::Floor.toggled(), Tile2::Floor);
    }
}
