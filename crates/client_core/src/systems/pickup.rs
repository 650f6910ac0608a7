//! One-shot pickup trigger.

/// Consumption flag; transitions `false -> true` once, terminal thereafter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickupState {
    pub consumed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupEvent {
    Collected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pickup {
    pub state: PickupState,
}

impl Pickup {
    /// Report a contact. The first qualifying contact consumes the pickup and
    /// yields an event; everything after that is ignored.
    pub fn on_contact(&mut self, qualifies: bool) -> Option<PickupEvent> {
        if !qualifies || self.state.consumed {
            return None;
        }
        self.state.consumed = true;
        Some(PickupEvent::Collected)
    }
}
