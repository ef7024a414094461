//! Inbound Ports (Driving Ports)
//!
//! The API that the operation-stream interpreter uses to drive a filter.
//! Only insert and query cross this boundary.

use crate::domain::BloomFilter;

/// Approximate-membership set (Driving Port)
pub trait MembershipFilter {
    /// Record `item` as a member
    fn insert(&mut self, item: &str);

    /// `true` if `item` might be a member; `false` means definitely absent
    fn contains(&self, item: &str) -> bool;
}

impl MembershipFilter for BloomFilter {
    fn insert(&mut self, item: &str) {
        BloomFilter::insert(self, item);
    }

    fn contains(&self, item: &str) -> bool {
        BloomFilter::contains(self, item)
    }
}
