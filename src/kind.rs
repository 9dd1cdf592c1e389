/// The kind of a [`Value`](crate::Value).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Kind {
    Null = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    List = 5,
    Compound = 6,
}

impl Kind {
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}
