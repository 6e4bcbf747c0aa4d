use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(PlayerId);

/// Next guild id to hand out. Shared by every guild in the process.
static NEXT_GUILD_ID: AtomicU32 = AtomicU32::new(1);

/// Sequential guild identifier.
///
/// Ids start at 1 and are handed out by a process-wide counter; the only way
/// to obtain a fresh one is constructing a [`Guild`](crate::aggregates::Guild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(u32);

impl GuildId {
    /// Claims the next id. Read and increment happen as one atomic step.
    pub(crate) fn next() -> Self {
        Self(NEXT_GUILD_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// The id the next successfully constructed guild will receive.
    pub fn peek_next() -> Self {
        Self(NEXT_GUILD_ID.load(Ordering::SeqCst))
    }

    /// Wraps a raw value (e.g. an id echoed back by a client).
    pub fn from_raw(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
