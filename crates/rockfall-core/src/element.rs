//! The element catalog.
//!
//! Every cell of the board holds exactly one [`HiddenCell`] code. The
//! hidden code carries full simulation state (falling variants,
//! creature headings, explosion flavours), while the [`VisibleCell`]
//! code is the coarser view exposed through observations. The static
//! [`CATALOG`] maps each hidden code to its visible code, behavioural
//! [`Properties`] and a render glyph, and the conversion methods on
//! [`HiddenCell`] encode the element-to-element relations the update
//! rules depend on (falling variants, explosion flavours, magic-wall
//! transmutation, key/gate pairing).

use crate::direction::Direction;
use crate::reward::RewardSignal;

/// Number of hidden cell codes.
pub const NUM_HIDDEN: usize = 50;

/// Number of visible cell codes.
pub const NUM_VISIBLE: usize = 34;

/// Full-fidelity cell content as the simulation tracks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum HiddenCell {
    /// The agent.
    Agent = 0,
    /// Empty space.
    Empty = 1,
    /// Dirt the agent can dig through.
    Dirt = 2,
    /// A stationary stone.
    Stone = 3,
    /// A stone in mid-fall.
    StoneFalling = 4,
    /// A stationary diamond.
    Diamond = 5,
    /// A diamond in mid-fall.
    DiamondFalling = 6,
    /// The exit before enough diamonds are collected.
    ExitClosed = 7,
    /// The exit once it accepts the agent.
    ExitOpen = 8,
    /// The agent standing in the exit (terminal).
    AgentInExit = 9,
    /// A firefly heading up.
    FireflyUp = 10,
    /// A firefly heading left.
    FireflyLeft = 11,
    /// A firefly heading down.
    FireflyDown = 12,
    /// A firefly heading right.
    FireflyRight = 13,
    /// A butterfly heading up.
    ButterflyUp = 14,
    /// A butterfly heading left.
    ButterflyLeft = 15,
    /// A butterfly heading down.
    ButterflyDown = 16,
    /// A butterfly heading right.
    ButterflyRight = 17,
    /// A brick wall (destructible).
    WallBrick = 18,
    /// A steel wall (indestructible).
    WallSteel = 19,
    /// A magic wall that has never been struck.
    WallMagicDormant = 20,
    /// A magic wall currently transmuting.
    WallMagicOn = 21,
    /// A magic wall whose timer has run out.
    WallMagicExpired = 22,
    /// A cell of the growing blob organism.
    Blob = 23,
    /// An explosion that settles into a diamond.
    ExplosionDiamond = 24,
    /// An explosion that settles into a stone.
    ExplosionBoulder = 25,
    /// An explosion that settles into empty space.
    ExplosionEmpty = 26,
    /// The red gate, closed.
    GateRedClosed = 27,
    /// The red gate, open.
    GateRedOpen = 28,
    /// The red key.
    KeyRed = 29,
    /// The blue gate, closed.
    GateBlueClosed = 30,
    /// The blue gate, open.
    GateBlueOpen = 31,
    /// The blue key.
    KeyBlue = 32,
    /// The green gate, closed.
    GateGreenClosed = 33,
    /// The green gate, open.
    GateGreenOpen = 34,
    /// The green key.
    KeyGreen = 35,
    /// The yellow gate, closed.
    GateYellowClosed = 36,
    /// The yellow gate, open.
    GateYellowOpen = 37,
    /// The yellow key.
    KeyYellow = 38,
    /// A stationary nut.
    Nut = 39,
    /// A nut in mid-fall.
    NutFalling = 40,
    /// A stationary bomb.
    Bomb = 41,
    /// A bomb in mid-fall.
    BombFalling = 42,
    /// An orange creature heading up.
    OrangeUp = 43,
    /// An orange creature heading left.
    OrangeLeft = 44,
    /// An orange creature heading down.
    OrangeDown = 45,
    /// An orange creature heading right.
    OrangeRight = 46,
    /// Reserved: a pebble buried in dirt.
    PebbleInDirt = 47,
    /// Reserved: a stone buried in dirt.
    StoneInDirt = 48,
    /// Reserved: a void buried in dirt.
    VoidInDirt = 49,
}

/// Observable cell content, with directional and lifecycle detail folded
/// away (all four firefly headings render as one firefly, falling and
/// stationary stones as one stone, and so on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum VisibleCell {
    /// The agent.
    Agent = 0,
    /// Empty space.
    Empty = 1,
    /// Dirt.
    Dirt = 2,
    /// A stone.
    Stone = 3,
    /// A diamond.
    Diamond = 4,
    /// The closed exit.
    ExitClosed = 5,
    /// The open exit.
    ExitOpen = 6,
    /// The agent standing in the exit.
    AgentInExit = 7,
    /// A firefly.
    Firefly = 8,
    /// A butterfly.
    Butterfly = 9,
    /// A brick wall.
    WallBrick = 10,
    /// A steel wall.
    WallSteel = 11,
    /// A magic wall not currently transmuting.
    WallMagicOff = 12,
    /// A magic wall currently transmuting.
    WallMagicOn = 13,
    /// A blob cell.
    Blob = 14,
    /// An explosion.
    Explosion = 15,
    /// The red gate, closed.
    GateRedClosed = 16,
    /// The red gate, open.
    GateRedOpen = 17,
    /// The red key.
    KeyRed = 18,
    /// The blue gate, closed.
    GateBlueClosed = 19,
    /// The blue gate, open.
    GateBlueOpen = 20,
    /// The blue key.
    KeyBlue = 21,
    /// The green gate, closed.
    GateGreenClosed = 22,
    /// The green gate, open.
    GateGreenOpen = 23,
    /// The green key.
    KeyGreen = 24,
    /// The yellow gate, closed.
    GateYellowClosed = 25,
    /// The yellow gate, open.
    GateYellowOpen = 26,
    /// The yellow key.
    KeyYellow = 27,
    /// A nut.
    Nut = 28,
    /// A bomb.
    Bomb = 29,
    /// An orange creature.
    Orange = 30,
    /// Reserved: a pebble buried in dirt.
    PebbleInDirt = 31,
    /// Reserved: a stone buried in dirt.
    StoneInDirt = 32,
    /// Reserved: a void buried in dirt.
    VoidInDirt = 33,
}

/// Behavioural property bit-set for an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Properties(u8);

impl Properties {
    /// No properties.
    pub const NONE: Properties = Properties(0);
    /// Can be destroyed, dug or overwritten by falling elements.
    pub const CONSUMABLE: Properties = Properties(1 << 0);
    /// Detonates when destroyed, chaining the explosion.
    pub const CAN_EXPLODE: Properties = Properties(1 << 1);
    /// Objects resting on top roll off sideways.
    pub const ROUNDED: Properties = Properties(1 << 2);
    /// The agent can walk onto it.
    pub const TRAVERSABLE: Properties = Properties(1 << 3);
    /// The agent can push it horizontally.
    pub const PUSHABLE: Properties = Properties(1 << 4);

    /// Bitwise union, usable in const context.
    pub const fn union(self, other: Properties) -> Properties {
        Properties(self.0 | other.0)
    }

    /// True if every bit of `other` is set.
    pub const fn contains(self, other: Properties) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// One catalog entry: a hidden code together with its observable code,
/// behavioural properties and render glyph.
///
/// Equality is by hidden code; the remaining fields are functions of it.
#[derive(Clone, Copy, Debug)]
pub struct Element {
    /// Full-fidelity code.
    pub hidden: HiddenCell,
    /// Observable code.
    pub visible: VisibleCell,
    /// Behavioural property bit-set.
    pub properties: Properties,
    /// Glyph used by the text renderer.
    pub glyph: char,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.hidden == other.hidden
    }
}

impl Eq for Element {}

const fn entry(hidden: HiddenCell, visible: VisibleCell, properties: Properties, glyph: char) -> Element {
    Element {
        hidden,
        visible,
        properties,
        glyph,
    }
}

const CONSUMABLE: Properties = Properties::CONSUMABLE;
const CAN_EXPLODE: Properties = Properties::CAN_EXPLODE;
const ROUNDED: Properties = Properties::ROUNDED;
const TRAVERSABLE: Properties = Properties::TRAVERSABLE;
const PUSHABLE: Properties = Properties::PUSHABLE;
const NONE: Properties = Properties::NONE;

/// The full element catalog, indexed by hidden code.
pub const CATALOG: [Element; NUM_HIDDEN] = [
    entry(HiddenCell::Agent, VisibleCell::Agent, CONSUMABLE.union(CAN_EXPLODE), '@'),
    entry(HiddenCell::Empty, VisibleCell::Empty, CONSUMABLE.union(TRAVERSABLE), ' '),
    entry(HiddenCell::Dirt, VisibleCell::Dirt, CONSUMABLE.union(TRAVERSABLE), '.'),
    entry(
        HiddenCell::Stone,
        VisibleCell::Stone,
        CONSUMABLE.union(ROUNDED).union(PUSHABLE),
        'o',
    ),
    entry(HiddenCell::StoneFalling, VisibleCell::Stone, CONSUMABLE, 'o'),
    entry(
        HiddenCell::Diamond,
        VisibleCell::Diamond,
        CONSUMABLE.union(ROUNDED).union(TRAVERSABLE),
        '*',
    ),
    entry(HiddenCell::DiamondFalling, VisibleCell::Diamond, CONSUMABLE, '*'),
    entry(HiddenCell::ExitClosed, VisibleCell::ExitClosed, NONE, 'C'),
    entry(HiddenCell::ExitOpen, VisibleCell::ExitOpen, TRAVERSABLE, '#'),
    entry(HiddenCell::AgentInExit, VisibleCell::AgentInExit, NONE, '!'),
    entry(HiddenCell::FireflyUp, VisibleCell::Firefly, CONSUMABLE.union(CAN_EXPLODE), 'F'),
    entry(HiddenCell::FireflyLeft, VisibleCell::Firefly, CONSUMABLE.union(CAN_EXPLODE), 'F'),
    entry(HiddenCell::FireflyDown, VisibleCell::Firefly, CONSUMABLE.union(CAN_EXPLODE), 'F'),
    entry(HiddenCell::FireflyRight, VisibleCell::Firefly, CONSUMABLE.union(CAN_EXPLODE), 'F'),
    entry(
        HiddenCell::ButterflyUp,
        VisibleCell::Butterfly,
        CONSUMABLE.union(CAN_EXPLODE),
        'U',
    ),
    entry(
        HiddenCell::ButterflyLeft,
        VisibleCell::Butterfly,
        CONSUMABLE.union(CAN_EXPLODE),
        'U',
    ),
    entry(
        HiddenCell::ButterflyDown,
        VisibleCell::Butterfly,
        CONSUMABLE.union(CAN_EXPLODE),
        'U',
    ),
    entry(
        HiddenCell::ButterflyRight,
        VisibleCell::Butterfly,
        CONSUMABLE.union(CAN_EXPLODE),
        'U',
    ),
    entry(HiddenCell::WallBrick, VisibleCell::WallBrick, CONSUMABLE.union(ROUNDED), 'H'),
    entry(HiddenCell::WallSteel, VisibleCell::WallSteel, NONE, 'S'),
    entry(HiddenCell::WallMagicDormant, VisibleCell::WallMagicOff, CONSUMABLE, 'Q'),
    entry(HiddenCell::WallMagicOn, VisibleCell::WallMagicOn, CONSUMABLE, 'M'),
    entry(HiddenCell::WallMagicExpired, VisibleCell::WallMagicOff, CONSUMABLE, 'Q'),
    entry(HiddenCell::Blob, VisibleCell::Blob, CONSUMABLE, 'A'),
    entry(HiddenCell::ExplosionDiamond, VisibleCell::Explosion, NONE, 'E'),
    entry(HiddenCell::ExplosionBoulder, VisibleCell::Explosion, NONE, 'E'),
    entry(HiddenCell::ExplosionEmpty, VisibleCell::Explosion, NONE, 'E'),
    entry(HiddenCell::GateRedClosed, VisibleCell::GateRedClosed, NONE, 'r'),
    entry(HiddenCell::GateRedOpen, VisibleCell::GateRedOpen, NONE, 'R'),
    entry(HiddenCell::KeyRed, VisibleCell::KeyRed, TRAVERSABLE, '1'),
    entry(HiddenCell::GateBlueClosed, VisibleCell::GateBlueClosed, NONE, 'b'),
    entry(HiddenCell::GateBlueOpen, VisibleCell::GateBlueOpen, NONE, 'B'),
    entry(HiddenCell::KeyBlue, VisibleCell::KeyBlue, TRAVERSABLE, '2'),
    entry(HiddenCell::GateGreenClosed, VisibleCell::GateGreenClosed, NONE, 'g'),
    entry(HiddenCell::GateGreenOpen, VisibleCell::GateGreenOpen, NONE, 'G'),
    entry(HiddenCell::KeyGreen, VisibleCell::KeyGreen, TRAVERSABLE, '3'),
    entry(HiddenCell::GateYellowClosed, VisibleCell::GateYellowClosed, NONE, 'y'),
    entry(HiddenCell::GateYellowOpen, VisibleCell::GateYellowOpen, NONE, 'Y'),
    entry(HiddenCell::KeyYellow, VisibleCell::KeyYellow, TRAVERSABLE, '4'),
    entry(
        HiddenCell::Nut,
        VisibleCell::Nut,
        ROUNDED.union(CONSUMABLE).union(PUSHABLE),
        '+',
    ),
    entry(HiddenCell::NutFalling, VisibleCell::Nut, ROUNDED.union(CONSUMABLE), '+'),
    entry(
        HiddenCell::Bomb,
        VisibleCell::Bomb,
        ROUNDED.union(CONSUMABLE).union(CAN_EXPLODE).union(PUSHABLE),
        '^',
    ),
    entry(
        HiddenCell::BombFalling,
        VisibleCell::Bomb,
        ROUNDED.union(CONSUMABLE).union(CAN_EXPLODE),
        '^',
    ),
    entry(HiddenCell::OrangeUp, VisibleCell::Orange, CONSUMABLE.union(CAN_EXPLODE), 'X'),
    entry(HiddenCell::OrangeLeft, VisibleCell::Orange, CONSUMABLE.union(CAN_EXPLODE), 'X'),
    entry(HiddenCell::OrangeDown, VisibleCell::Orange, CONSUMABLE.union(CAN_EXPLODE), 'X'),
    entry(HiddenCell::OrangeRight, VisibleCell::Orange, CONSUMABLE.union(CAN_EXPLODE), 'X'),
    entry(HiddenCell::PebbleInDirt, VisibleCell::PebbleInDirt, NONE, 'p'),
    entry(HiddenCell::StoneInDirt, VisibleCell::StoneInDirt, NONE, 's'),
    entry(HiddenCell::VoidInDirt, VisibleCell::VoidInDirt, NONE, 'v'),
];

impl HiddenCell {
    /// Raw code of this cell.
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Decode a raw code, or `None` if out of range.
    pub fn from_code(code: i8) -> Option<HiddenCell> {
        if (0..NUM_HIDDEN as i8).contains(&code) {
            Some(CATALOG[code as usize].hidden)
        } else {
            None
        }
    }

    /// Catalog entry for this cell.
    pub fn element(self) -> &'static Element {
        &CATALOG[self as usize]
    }

    /// Observable code for this cell.
    pub fn visible(self) -> VisibleCell {
        self.element().visible
    }

    /// Behavioural property bit-set for this cell.
    pub fn properties(self) -> Properties {
        self.element().properties
    }

    /// Glyph used by the text renderer.
    pub fn glyph(self) -> char {
        self.element().glyph
    }

    /// True if every bit of `props` is set for this cell.
    pub fn has_property(self, props: Properties) -> bool {
        self.properties().contains(props)
    }

    /// Falling variant of a stationary fallable element.
    ///
    /// Identity for everything that has no falling variant.
    pub fn to_falling(self) -> HiddenCell {
        match self {
            HiddenCell::Stone => HiddenCell::StoneFalling,
            HiddenCell::Diamond => HiddenCell::DiamondFalling,
            HiddenCell::Nut => HiddenCell::NutFalling,
            HiddenCell::Bomb => HiddenCell::BombFalling,
            other => other,
        }
    }

    /// Explosion flavour left behind when this element detonates.
    ///
    /// Butterflies burst into diamonds; everything else explodes to
    /// empty space.
    pub fn explosion_flavour(self) -> HiddenCell {
        if self.is_butterfly() {
            HiddenCell::ExplosionDiamond
        } else {
            HiddenCell::ExplosionEmpty
        }
    }

    /// Element an explosion settles into once it burns out.
    pub fn explosion_residue(self) -> Option<HiddenCell> {
        match self {
            HiddenCell::ExplosionDiamond => Some(HiddenCell::Diamond),
            HiddenCell::ExplosionBoulder => Some(HiddenCell::Stone),
            HiddenCell::ExplosionEmpty => Some(HiddenCell::Empty),
            _ => None,
        }
    }

    /// Result of passing through an active magic wall.
    ///
    /// Falling stones become falling diamonds and vice versa.
    pub fn magic_transmute(self) -> Option<HiddenCell> {
        match self {
            HiddenCell::StoneFalling => Some(HiddenCell::DiamondFalling),
            HiddenCell::DiamondFalling => Some(HiddenCell::StoneFalling),
            _ => None,
        }
    }

    /// Closed gate matching this key's colour.
    pub fn matching_gate(self) -> Option<HiddenCell> {
        match self {
            HiddenCell::KeyRed => Some(HiddenCell::GateRedClosed),
            HiddenCell::KeyBlue => Some(HiddenCell::GateBlueClosed),
            HiddenCell::KeyGreen => Some(HiddenCell::GateGreenClosed),
            HiddenCell::KeyYellow => Some(HiddenCell::GateYellowClosed),
            _ => None,
        }
    }

    /// Open variant of a closed gate.
    pub fn opened_gate(self) -> Option<HiddenCell> {
        match self {
            HiddenCell::GateRedClosed => Some(HiddenCell::GateRedOpen),
            HiddenCell::GateBlueClosed => Some(HiddenCell::GateBlueOpen),
            HiddenCell::GateGreenClosed => Some(HiddenCell::GateGreenOpen),
            HiddenCell::GateYellowClosed => Some(HiddenCell::GateYellowOpen),
            _ => None,
        }
    }

    /// Colour-specific signal raised when this key is collected.
    pub fn key_signal(self) -> Option<RewardSignal> {
        match self {
            HiddenCell::KeyRed => Some(RewardSignal::COLLECT_KEY_RED),
            HiddenCell::KeyBlue => Some(RewardSignal::COLLECT_KEY_BLUE),
            HiddenCell::KeyGreen => Some(RewardSignal::COLLECT_KEY_GREEN),
            HiddenCell::KeyYellow => Some(RewardSignal::COLLECT_KEY_YELLOW),
            _ => None,
        }
    }

    /// Colour-specific signal raised when this open gate is traversed.
    pub fn gate_signal(self) -> Option<RewardSignal> {
        match self {
            HiddenCell::GateRedOpen => Some(RewardSignal::WALK_THROUGH_GATE_RED),
            HiddenCell::GateBlueOpen => Some(RewardSignal::WALK_THROUGH_GATE_BLUE),
            HiddenCell::GateGreenOpen => Some(RewardSignal::WALK_THROUGH_GATE_GREEN),
            HiddenCell::GateYellowOpen => Some(RewardSignal::WALK_THROUGH_GATE_YELLOW),
            _ => None,
        }
    }

    /// Reward points for collecting or reaching this element.
    pub fn points(self) -> u64 {
        match self {
            HiddenCell::Diamond | HiddenCell::DiamondFalling => 1,
            HiddenCell::AgentInExit => 10,
            _ => 0,
        }
    }

    /// Heading of a directional creature (firefly, butterfly, orange).
    pub fn heading(self) -> Option<Direction> {
        match self {
            HiddenCell::FireflyUp | HiddenCell::ButterflyUp | HiddenCell::OrangeUp => Some(Direction::Up),
            HiddenCell::FireflyLeft | HiddenCell::ButterflyLeft | HiddenCell::OrangeLeft => Some(Direction::Left),
            HiddenCell::FireflyDown | HiddenCell::ButterflyDown | HiddenCell::OrangeDown => Some(Direction::Down),
            HiddenCell::FireflyRight | HiddenCell::ButterflyRight | HiddenCell::OrangeRight => {
                Some(Direction::Right)
            }
            _ => None,
        }
    }

    /// Same creature kind as `self`, facing `heading`.
    ///
    /// Identity when `self` is not a directional creature or `heading`
    /// is not cardinal.
    pub fn facing(self, heading: Direction) -> HiddenCell {
        if self.is_firefly() {
            match heading {
                Direction::Up => HiddenCell::FireflyUp,
                Direction::Left => HiddenCell::FireflyLeft,
                Direction::Down => HiddenCell::FireflyDown,
                Direction::Right => HiddenCell::FireflyRight,
                _ => self,
            }
        } else if self.is_butterfly() {
            match heading {
                Direction::Up => HiddenCell::ButterflyUp,
                Direction::Left => HiddenCell::ButterflyLeft,
                Direction::Down => HiddenCell::ButterflyDown,
                Direction::Right => HiddenCell::ButterflyRight,
                _ => self,
            }
        } else if self.is_orange() {
            match heading {
                Direction::Up => HiddenCell::OrangeUp,
                Direction::Left => HiddenCell::OrangeLeft,
                Direction::Down => HiddenCell::OrangeDown,
                Direction::Right => HiddenCell::OrangeRight,
                _ => self,
            }
        } else {
            self
        }
    }

    /// True for any firefly heading.
    pub fn is_firefly(self) -> bool {
        matches!(
            self,
            HiddenCell::FireflyUp | HiddenCell::FireflyLeft | HiddenCell::FireflyDown | HiddenCell::FireflyRight
        )
    }

    /// True for any butterfly heading.
    pub fn is_butterfly(self) -> bool {
        matches!(
            self,
            HiddenCell::ButterflyUp
                | HiddenCell::ButterflyLeft
                | HiddenCell::ButterflyDown
                | HiddenCell::ButterflyRight
        )
    }

    /// True for any orange-creature heading.
    pub fn is_orange(self) -> bool {
        matches!(
            self,
            HiddenCell::OrangeUp | HiddenCell::OrangeLeft | HiddenCell::OrangeDown | HiddenCell::OrangeRight
        )
    }

    /// True for any magic-wall lifecycle state.
    pub fn is_magic_wall(self) -> bool {
        matches!(
            self,
            HiddenCell::WallMagicDormant | HiddenCell::WallMagicOn | HiddenCell::WallMagicExpired
        )
    }

    /// True for any explosion flavour.
    pub fn is_explosion(self) -> bool {
        matches!(
            self,
            HiddenCell::ExplosionDiamond | HiddenCell::ExplosionBoulder | HiddenCell::ExplosionEmpty
        )
    }

    /// True for any open gate.
    pub fn is_open_gate(self) -> bool {
        matches!(
            self,
            HiddenCell::GateRedOpen | HiddenCell::GateBlueOpen | HiddenCell::GateGreenOpen | HiddenCell::GateYellowOpen
        )
    }

    /// True for any key.
    pub fn is_key(self) -> bool {
        matches!(
            self,
            HiddenCell::KeyRed | HiddenCell::KeyBlue | HiddenCell::KeyGreen | HiddenCell::KeyYellow
        )
    }

    /// True for elements whose instances carry a persistent identity
    /// (stones, diamonds, nuts and bombs, stationary or falling).
    pub fn is_tracked(self) -> bool {
        matches!(
            self,
            HiddenCell::Stone
                | HiddenCell::StoneFalling
                | HiddenCell::Diamond
                | HiddenCell::DiamondFalling
                | HiddenCell::Nut
                | HiddenCell::NutFalling
                | HiddenCell::Bomb
                | HiddenCell::BombFalling
        )
    }
}

impl VisibleCell {
    /// Raw code of this cell.
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Decode a raw code, or `None` if out of range.
    pub fn from_code(code: i8) -> Option<VisibleCell> {
        const ALL: [VisibleCell; NUM_VISIBLE] = [
            VisibleCell::Agent,
            VisibleCell::Empty,
            VisibleCell::Dirt,
            VisibleCell::Stone,
            VisibleCell::Diamond,
            VisibleCell::ExitClosed,
            VisibleCell::ExitOpen,
            VisibleCell::AgentInExit,
            VisibleCell::Firefly,
            VisibleCell::Butterfly,
            VisibleCell::WallBrick,
            VisibleCell::WallSteel,
            VisibleCell::WallMagicOff,
            VisibleCell::WallMagicOn,
            VisibleCell::Blob,
            VisibleCell::Explosion,
            VisibleCell::GateRedClosed,
            VisibleCell::GateRedOpen,
            VisibleCell::KeyRed,
            VisibleCell::GateBlueClosed,
            VisibleCell::GateBlueOpen,
            VisibleCell::KeyBlue,
            VisibleCell::GateGreenClosed,
            VisibleCell::GateGreenOpen,
            VisibleCell::KeyGreen,
            VisibleCell::GateYellowClosed,
            VisibleCell::GateYellowOpen,
            VisibleCell::KeyYellow,
            VisibleCell::Nut,
            VisibleCell::Bomb,
            VisibleCell::Orange,
            VisibleCell::PebbleInDirt,
            VisibleCell::StoneInDirt,
            VisibleCell::VoidInDirt,
        ];
        if (0..NUM_VISIBLE as i8).contains(&code) {
            Some(ALL[code as usize])
        } else {
            None
        }
    }
}

/// Event signal raised when the agent collects or traverses `cell`.
pub fn reward_signal_for(cell: HiddenCell) -> RewardSignal {
    match cell {
        HiddenCell::Diamond | HiddenCell::DiamondFalling => RewardSignal::COLLECT_DIAMOND,
        HiddenCell::Nut | HiddenCell::NutFalling => RewardSignal::NUT_TO_DIAMOND,
        HiddenCell::ExitOpen => RewardSignal::WALK_THROUGH_EXIT,
        HiddenCell::KeyRed => RewardSignal::COLLECT_KEY_RED,
        HiddenCell::KeyBlue => RewardSignal::COLLECT_KEY_BLUE,
        HiddenCell::KeyGreen => RewardSignal::COLLECT_KEY_GREEN,
        HiddenCell::KeyYellow => RewardSignal::COLLECT_KEY_YELLOW,
        HiddenCell::GateRedOpen => RewardSignal::WALK_THROUGH_GATE_RED,
        HiddenCell::GateBlueOpen => RewardSignal::WALK_THROUGH_GATE_BLUE,
        HiddenCell::GateGreenOpen => RewardSignal::WALK_THROUGH_GATE_GREEN,
        HiddenCell::GateYellowOpen => RewardSignal::WALK_THROUGH_GATE_YELLOW,
        _ => RewardSignal::EMPTY,
    }
}
