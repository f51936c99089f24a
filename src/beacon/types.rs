//! Beacon API types consumed and produced by the consensus client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validator status as reported by `GET /eth/v1/beacon/states/{state_id}/validators`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorStatus {
    PendingInitialized,
    PendingQueued,
    ActiveOngoing,
    ActiveExiting,
    ActiveSlashed,
    ExitedUnslashed,
    ExitedSlashed,
    WithdrawalPossible,
    WithdrawalDone,
}

/// The lifecycle phase a [`ValidatorStatus`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusGroup {
    Pending,
    Active,
    Exited,
}

pub const PENDING_STATUSES: [ValidatorStatus; 2] = [
    ValidatorStatus::PendingInitialized,
    ValidatorStatus::PendingQueued,
];

pub const ACTIVE_STATUSES: [ValidatorStatus; 3] = [
    ValidatorStatus::ActiveOngoing,
    ValidatorStatus::ActiveExiting,
    ValidatorStatus::ActiveSlashed,
];

pub const EXITED_STATUSES: [ValidatorStatus; 4] = [
    ValidatorStatus::ExitedUnslashed,
    ValidatorStatus::ExitedSlashed,
    ValidatorStatus::WithdrawalPossible,
    ValidatorStatus::WithdrawalDone,
];

impl ValidatorStatus {
    pub const ALL: [ValidatorStatus; 9] = [
        ValidatorStatus::PendingInitialized,
        ValidatorStatus::PendingQueued,
        ValidatorStatus::ActiveOngoing,
        ValidatorStatus::ActiveExiting,
        ValidatorStatus::ActiveSlashed,
        ValidatorStatus::ExitedUnslashed,
        ValidatorStatus::ExitedSlashed,
        ValidatorStatus::WithdrawalPossible,
        ValidatorStatus::WithdrawalDone,
    ];

    pub fn group(&self) -> StatusGroup {
        match self {
            ValidatorStatus::PendingInitialized | ValidatorStatus::PendingQueued => {
                StatusGroup::Pending
            }
            ValidatorStatus::ActiveOngoing
            | ValidatorStatus::ActiveExiting
            | ValidatorStatus::ActiveSlashed => StatusGroup::Active,
            ValidatorStatus::ExitedUnslashed
            | ValidatorStatus::ExitedSlashed
            | ValidatorStatus::WithdrawalPossible
            | ValidatorStatus::WithdrawalDone => StatusGroup::Exited,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.group() == StatusGroup::Pending
    }

    pub fn is_active(&self) -> bool {
        self.group() == StatusGroup::Active
    }

    pub fn is_exited(&self) -> bool {
        self.group() == StatusGroup::Exited
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorStatus::PendingInitialized => "pending_initialized",
            ValidatorStatus::PendingQueued => "pending_queued",
            ValidatorStatus::ActiveOngoing => "active_ongoing",
            ValidatorStatus::ActiveExiting => "active_exiting",
            ValidatorStatus::ActiveSlashed => "active_slashed",
            ValidatorStatus::ExitedUnslashed => "exited_unslashed",
            ValidatorStatus::ExitedSlashed => "exited_slashed",
            ValidatorStatus::WithdrawalPossible => "withdrawal_possible",
            ValidatorStatus::WithdrawalDone => "withdrawal_done",
        }
    }
}

impl StatusGroup {
    pub fn statuses(&self) -> &'static [ValidatorStatus] {
        match self {
            StatusGroup::Pending => &PENDING_STATUSES,
            StatusGroup::Active => &ACTIVE_STATUSES,
            StatusGroup::Exited => &EXITED_STATUSES,
        }
    }

    pub fn contains(&self, status: ValidatorStatus) -> bool {
        self.statuses().contains(&status)
    }
}

impl FromStr for ValidatorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("{} cannot be parsed as a validator status", s))
    }
}

impl fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state a validator query is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateId {
    #[default]
    Head,
    Genesis,
    Finalized,
    Justified,
    Slot(u64),
    /// `0x`-prefixed 32-byte state root.
    Root(String),
}

impl FromStr for StateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(StateId::Head),
            "genesis" => Ok(StateId::Genesis),
            "finalized" => Ok(StateId::Finalized),
            "justified" => Ok(StateId::Justified),
            other => {
                if let Some(hex) = other.strip_prefix("0x") {
                    if hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                        Ok(StateId::Root(other.to_ascii_lowercase()))
                    } else {
                        Err(format!("{} cannot be parsed as a root", other))
                    }
                } else {
                    u64::from_str(other)
                        .map(StateId::Slot)
                        .map_err(|_| format!("{} cannot be parsed as a slot", other))
                }
            }
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateId::Head => write!(f, "head"),
            StateId::Genesis => write!(f, "genesis"),
            StateId::Finalized => write!(f, "finalized"),
            StateId::Justified => write!(f, "justified"),
            StateId::Slot(slot) => write!(f, "{}", slot),
            StateId::Root(root) => write!(f, "{}", root),
        }
    }
}

/// Unsigned voluntary exit. Integers travel as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryExit {
    #[serde(with = "quoted_u64")]
    pub epoch: u64,
    #[serde(with = "quoted_u64")]
    pub validator_index: u64,
}

/// A voluntary exit together with the validator's BLS signature (hex, as given).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: String,
}

impl SignedVoluntaryExit {
    pub fn new(epoch: u64, validator_index: u64, signature: impl Into<String>) -> Self {
        Self {
            message: VoluntaryExit {
                epoch,
                validator_index,
            },
            signature: signature.into(),
        }
    }
}

/// The `{"data": ...}` envelope used by most beacon API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_optimistic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized: Option<bool>,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorData {
    #[serde(with = "quoted_u64")]
    pub index: u64,
    #[serde(with = "quoted_u64")]
    pub balance: u64,
    pub status: ValidatorStatus,
    pub validator: Validator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub pubkey: String,
    pub withdrawal_credentials: String,
    #[serde(with = "quoted_u64")]
    pub effective_balance: u64,
    pub slashed: bool,
    #[serde(with = "quoted_u64")]
    pub activation_eligibility_epoch: u64,
    #[serde(with = "quoted_u64")]
    pub activation_epoch: u64,
    #[serde(with = "quoted_u64")]
    pub exit_epoch: u64,
    #[serde(with = "quoted_u64")]
    pub withdrawable_epoch: u64,
}

/// Error body returned by beacon nodes alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub stacktraces: Vec<String>,
}

/// Serde helpers for `u64` values encoded as decimal strings.
pub mod quoted_u64 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid quoted u64 '{}': {}", s, e)))
    }
}
