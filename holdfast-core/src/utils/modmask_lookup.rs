use bitflags::bitflags;
use serde::{de::Visitor, Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ModMask: u8 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        const Control = 1 << 1;
        /// Alternate
        const Option = 1 << 2;
        const Command = 1 << 3;
        const CapsLock = 1 << 4;
        /// Fn, also set for arrow and function keys
        const Function = 1 << 5;
    }
}

impl ModMask {
    pub const fn shift_held(self) -> bool {
        self.contains(Self::Shift)
    }

    /// Whether the given arming key is part of this snapshot.
    pub const fn holds(self, key: ModifierKey) -> bool {
        self.contains(key.mask())
    }
}

/// The key a user holds to arm a gesture.
///
/// Persisted as its integer code: `Option = 0`, `Control = 1`, `Command = 2`. Codes that do
/// not name a key decode to [`ModifierKey::Option`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    #[default]
    Option,
    Control,
    Command,
}

impl ModifierKey {
    pub const fn mask(self) -> ModMask {
        match self {
            Self::Option => ModMask::Option,
            Self::Control => ModMask::Control,
            Self::Command => ModMask::Command,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Option => 0,
            Self::Control => 1,
            Self::Command => 2,
        }
    }

    pub const fn from_code(code: u64) -> Self {
        match code {
            1 => Self::Control,
            2 => Self::Command,
            _ => Self::Option,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Option => "⌥ Option",
            Self::Control => "⌃ Control",
            Self::Command => "⌘ Command",
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub fn into_modifier_key(key: &str) -> Option<ModifierKey> {
    match key {
        "Option" | "Alt" | "Mod1" => Some(ModifierKey::Option),
        "Control" | "Ctrl" => Some(ModifierKey::Control),
        "Command" | "Cmd" | "Super" | "Mod4" => Some(ModifierKey::Command),
        _ => None,
    }
}

// serde impls, the setting is stored as its integer code

impl Serialize for ModifierKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ModifierKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModifierKeyVisitor;

        impl<'de> Visitor<'de> for ModifierKeyVisitor {
            type Value = ModifierKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a modifier key code or name")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ModifierKey::from_code(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(u64::try_from(v).map_or(ModifierKey::Option, ModifierKey::from_code))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                into_modifier_key(v).ok_or_else(|| E::custom(format!("unknown modifier key {v:?}")))
            }
        }

        deserializer.deserialize_any(ModifierKeyVisitor)
    }
}
