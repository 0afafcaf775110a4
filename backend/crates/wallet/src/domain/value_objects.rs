//! Value Objects

use kernel::id::Id;

pub struct WalletMarker;

/// Typed wallet identifier
pub type WalletId = Id<WalletMarker>;
