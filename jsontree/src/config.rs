// SPDX-License-Identifier: Apache-2.0

/// Configuration trait for the parser's scratch stacks - defines the initial
/// capacity of each stack before the first geometric growth step.
pub trait ScratchConfig {
    /// Initial capacity, in bytes, of the stack used to assemble string content.
    const BYTE_STACK_INIT: usize;
    /// Initial capacity, in elements, of the stack holding array element snapshots.
    const VALUE_STACK_INIT: usize;
    /// Initial capacity, in members, of the stack holding object member snapshots.
    const MEMBER_STACK_INIT: usize;
}

/// Default configuration: 256 bytes for strings, 16 slots each for array
/// elements and object members.
pub struct DefaultConfig;

impl ScratchConfig for DefaultConfig {
    const BYTE_STACK_INIT: usize = 256;
    const VALUE_STACK_INIT: usize = 16;
    const MEMBER_STACK_INIT: usize = 16;
}

/// User-facing scratch configuration struct.
/// Usage: `ScratchSizes<4096, 64, 64>` for documents with long strings and wide containers.
pub struct ScratchSizes<const BYTES: usize, const VALUES: usize, const MEMBERS: usize>;

impl<const BYTES: usize, const VALUES: usize, const MEMBERS: usize> ScratchConfig
    for ScratchSizes<BYTES, VALUES, MEMBERS>
{
    const BYTE_STACK_INIT: usize = BYTES;
    const VALUE_STACK_INIT: usize = VALUES;
    const MEMBER_STACK_INIT: usize = MEMBERS;
}
