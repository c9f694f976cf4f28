//! Tripwire — self-invocation guard, BLAKE3 digests, timing log.

pub mod guard;
pub mod hasher;
pub mod timelog;
