//! Item-related state types.
//!
//! - [`ItemHandle`]: reference to an item template stored outside the core
//! - [`ItemStack`]: a handle with a count, carried in packs and sacks
//! - [`ItemsPack`]: a unit's ordered inventory plus money
//! - [`Sack`]: loot lying on the ground

/// Reference to an item template stored outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

/// A stack of identical items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub handle: ItemHandle,
    pub count: u32,
}

impl ItemStack {
    pub const fn new(handle: ItemHandle, count: u32) -> Self {
        Self { handle, count }
    }
}

/// Ordered collection of item stacks plus currency.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsPack {
    stacks: Vec<ItemStack>,
    pub money: u64,
}

impl ItemsPack {
    pub fn new(stacks: Vec<ItemStack>, money: u64) -> Self {
        Self { stacks, money }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Appends a stack after the last one without merging.
    pub fn push_back(&mut self, stack: ItemStack) {
        self.stacks.push(stack);
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.stacks
            .iter()
            .any(|stack| stack.handle == handle && stack.count > 0)
    }

    /// Total count of `handle` across all stacks.
    pub fn count_of(&self, handle: ItemHandle) -> u32 {
        self.stacks
            .iter()
            .filter(|stack| stack.handle == handle)
            .map(|stack| stack.count)
            .sum()
    }

    /// Removes `count` items of `handle`, taking from the first matching stack.
    ///
    /// Returns the removed stack, or `None` (pack untouched) when the first
    /// matching stack holds fewer than `count` items.
    pub fn take(&mut self, handle: ItemHandle, count: u32) -> Option<ItemStack> {
        let index = self
            .stacks
            .iter()
            .position(|stack| stack.handle == handle && stack.count >= count)?;

        let stack = &mut self.stacks[index];
        stack.count -= count;
        if stack.count == 0 {
            self.stacks.remove(index);
        }
        Some(ItemStack::new(handle, count))
    }
}

/// Loot dropped on the ground at a single cell.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sack {
    pub stacks: Vec<ItemStack>,
    pub money: u64,
}

impl Sack {
    pub fn new(stacks: Vec<ItemStack>, money: u64) -> Self {
        Self { stacks, money }
    }
}
