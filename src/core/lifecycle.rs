/// How the page is being left when `pagehide` fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageExit {
    /// Frozen into the back/forward cache; the same instance may be restored
    /// with its listeners and loops intact.
    BackForwardCache,
    /// The document is going away for good.
    Unload,
}

impl PageExit {
    /// Classify from `PageTransitionEvent.persisted`. A `pagehide` that does
    /// not carry the flag counts as an unload.
    pub fn from_persisted(persisted: Option<bool>) -> Self {
        match persisted {
            Some(true) => PageExit::BackForwardCache,
            _ => PageExit::Unload,
        }
    }

    /// Whether loops and listeners should be dropped on this exit.
    #[inline]
    pub fn releases_resources(self) -> bool {
        matches!(self, PageExit::Unload)
    }
}
