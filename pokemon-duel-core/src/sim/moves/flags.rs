use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Move properties abilities and items key off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MoveFlags: u16 {
        const CONTACT = 1 << 0;
        const BITE = 1 << 1;
        const PUNCH = 1 << 2;
        const SOUND = 1 << 3;
        const BULLET = 1 << 4;
        const PULSE = 1 << 5;
        const RECOIL = 1 << 6;
        const RECHARGE = 1 << 7;
    }
}

impl Default for MoveFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_flags_are_queryable() {
        let flags = MoveFlags::CONTACT | MoveFlags::PUNCH;
        assert!(flags.contains(MoveFlags::CONTACT));
        assert!(flags.contains(MoveFlags::PUNCH));
        assert!(!flags.contains(MoveFlags::BITE));
        assert!(MoveFlags::default().is_empty());
    }

    #[test]
    fn flags_read_from_catalog_json() {
        let flags: MoveFlags = serde_json::from_str("\"CONTACT | RECOIL\"").unwrap();
        assert_eq!(flags, MoveFlags::CONTACT | MoveFlags::RECOIL);
    }
}
