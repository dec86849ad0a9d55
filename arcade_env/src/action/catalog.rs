use super::Action;

/// The legal actions of the loaded cartridge, addressed by position.
///
/// A catalog belongs to exactly one loaded cartridge, loading another one
/// builds a new catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    /// returns `None` if `actions` is empty, a cartridge always has at least
    /// one legal action
    pub fn new(actions: Vec<Action>) -> Option<Self> {
        if actions.is_empty() {
            None
        } else {
            Some(Self { actions })
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Action> {
        self.actions.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert!(ActionCatalog::new(Vec::new()).is_none());
    }

    #[test]
    fn lookup_is_positional() {
        let catalog =
            ActionCatalog::new(vec![Action::Noop, Action::Fire, Action::Right, Action::Left])
                .unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0), Some(Action::Noop));
        assert_eq!(catalog.get(2), Some(Action::Right));
        assert_eq!(catalog.get(4), None);
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            catalog.as_slice().to_vec()
        );
    }
}
