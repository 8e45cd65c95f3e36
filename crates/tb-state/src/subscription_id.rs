/// Handle returned by `ProjectStore::subscribe`; pass it back to
/// `unsubscribe` to stop delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
