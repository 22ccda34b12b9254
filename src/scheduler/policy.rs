/*!
 * Scheduling Policies
 * Per-queue policy configuration and the queue-to-policy table
 */

use super::fcfs::Fcfs;
use super::round_robin::RoundRobin;
use super::sjf::Sjf;
use super::stcf::Stcf;
use super::traits::QueueStrategy;
use crate::core::errors::ConfigError;
use crate::core::types::QueueId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Round-robin time quantum in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantum(u32);

impl Quantum {
    /// Create new quantum (at least one tick)
    pub fn new(ticks: u32) -> Result<Self, ConfigError> {
        if ticks == 0 {
            return Err(ConfigError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> u32 {
        self.0
    }
}

/// Scheduling policy governing one queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Round-robin with fixed quantum
    RoundRobin(Quantum),
    /// First-come first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest time to completion first, preemptive
    Stcf,
}

impl Policy {
    /// Round-robin policy with `ticks` quantum
    pub fn round_robin(ticks: u32) -> Result<Self, ConfigError> {
        Quantum::new(ticks).map(Self::RoundRobin)
    }

    /// Build the strategy object executing this policy
    pub fn strategy(&self) -> Box<dyn QueueStrategy> {
        match *self {
            Self::RoundRobin(quantum) => Box::new(RoundRobin::new(quantum)),
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Stcf => Box::new(Stcf),
        }
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    /// Accepts `rr:<q>`, `rr(<q>)`, `round_robin:<q>`, `fcfs`, `sjf`, `stcf`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let invalid = || ConfigError::InvalidPolicy(s.to_string());

        match lower.as_str() {
            "fcfs" | "fifo" => return Ok(Self::Fcfs),
            "sjf" => return Ok(Self::Sjf),
            "stcf" | "srtf" => return Ok(Self::Stcf),
            _ => {}
        }

        let quantum = ["rr:", "round_robin:", "roundrobin:"]
            .iter()
            .find_map(|prefix| lower.strip_prefix(prefix))
            .or_else(|| {
                lower
                    .strip_prefix("rr(")
                    .and_then(|rest| rest.strip_suffix(')'))
            })
            .ok_or_else(invalid)?;

        let ticks = quantum.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::round_robin(ticks)
    }
}

/// Report form: `RR(3)`, `FCFS`, `SJF`, `STCF`
impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin(quantum) => write!(f, "RR({})", quantum.ticks()),
            Self::Fcfs => f.write_str("FCFS"),
            Self::Sjf => f.write_str("SJF"),
            Self::Stcf => f.write_str("STCF"),
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::RoundRobin(quantum) => {
                serializer.serialize_str(&format!("rr:{}", quantum.ticks()))
            }
            Self::Fcfs => serializer.serialize_str("fcfs"),
            Self::Sjf => serializer.serialize_str("sjf"),
            Self::Stcf => serializer.serialize_str("stcf"),
        }
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Queue id to policy mapping, served in ascending queue id order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueTable(BTreeMap<QueueId, Policy>);

impl QueueTable {
    pub fn new(entries: impl IntoIterator<Item = (QueueId, Policy)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Parse a comma separated policy list; queue ids are assigned from 1
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        let table = list
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .zip(1..)
            .map(|(item, queue)| item.parse().map(|policy| (queue, policy)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        if table.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        Ok(Self(table))
    }

    pub fn get(&self, queue: QueueId) -> Option<Policy> {
        self.0.get(&queue).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QueueId, Policy)> + '_ {
        self.0.iter().map(|(queue, policy)| (*queue, *policy))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Policy names in queue order, e.g. `RR(3), RR(5), FCFS`
    pub fn describe(&self) -> String {
        self.0
            .values()
            .map(Policy::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Queue 1: RR(3), queue 2: RR(5), queue 3: FCFS
impl Default for QueueTable {
    fn default() -> Self {
        Self::new([
            (1, Policy::RoundRobin(Quantum(3))),
            (2, Policy::RoundRobin(Quantum(5))),
            (3, Policy::Fcfs),
        ])
    }
}
