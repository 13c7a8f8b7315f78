use log::{debug, info};

use crate::config::RevealConfig;

/// Something that can start and stop delivering intersection notifications
/// for a node.
pub trait Viewport {
    type Node: Clone + PartialEq;

    fn observe(&self, node: &Self::Node);
    fn unobserve(&self, node: &Self::Node);
}

/// A node whose descendant cards can receive the reveal marker.
pub trait RevealTarget {
    /// Returns how many cards were marked.
    fn mark_cards(&self, selector: &str, marker: &str) -> usize;
}

#[derive(Debug, Clone)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Nothing is being watched (no root node yet).
    Idle,
    Watching,
    /// Cards were marked and the watch was dropped.
    Revealed,
    /// Torn down before the section ever became visible.
    Released,
}

pub struct OneShotReveal<V: Viewport> {
    viewport: V,
    config: RevealConfig,
    watched: Option<V::Node>,
    state: RevealState,
}

impl<V> OneShotReveal<V>
where
    V: Viewport,
    V::Node: RevealTarget,
{
    pub fn new(viewport: V, config: RevealConfig) -> Self {
        Self {
            viewport,
            config,
            watched: None,
            state: RevealState::Idle,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Starts watching `node`. A missing node skips the subscription.
    pub fn mount(&mut self, node: Option<V::Node>) -> RevealState {
        if self.state != RevealState::Idle {
            return self.state;
        }
        match node {
            Some(node) => {
                self.viewport.observe(&node);
                self.watched = Some(node);
                self.state = RevealState::Watching;
                debug!("Watching features section (threshold {})", self.config.threshold);
            }
            None => debug!("Features section has no root node, skipping reveal watch"),
        }
        self.state
    }

    /// Handles one notification batch. Returns the number of cards marked,
    /// which is zero for every batch after the first qualifying one.
    pub fn handle<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Intersection<V::Node>>,
    {
        let mut marked = 0;
        for entry in entries {
            if self.state != RevealState::Watching || !entry.is_intersecting {
                continue;
            }
            if self.watched.as_ref() != Some(&entry.target) {
                continue;
            }
            marked += entry
                .target
                .mark_cards(self.config.card_selector, self.config.marker_class);
            self.viewport.unobserve(&entry.target);
            self.watched = None;
            self.state = RevealState::Revealed;
            info!("Features section revealed {} cards", marked);
        }
        marked
    }

    /// Releases the watch if one is still active. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(node) = self.watched.take() {
            self.viewport.unobserve(&node);
            debug!("Released features section watch before reveal");
        }
        if self.state != RevealState::Revealed {
            self.state = RevealState::Released;
        }
    }
}
