//! Status returned by behavior nodes.

/// Whether a behavior performed its action during this pass.
///
/// There is no Running state: long actions (pathing) are issued and left to
/// the framework, and the next pass decides again from fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior's preconditions held and it issued its action.
    Acted,

    /// The behavior did not apply; evaluation moves on to the next node.
    Declined,
}

impl Status {
    /// Returns `true` if this status is `Acted`.
    #[inline]
    pub fn is_acted(self) -> bool {
        matches!(self, Status::Acted)
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(acted: bool) -> Self {
        if acted { Status::Acted } else { Status::Declined }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion_maps_to_acted() {
        assert!(Status::from(true).is_acted());
        assert!(!Status::from(false).is_acted());
    }
}
