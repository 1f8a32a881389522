//! Shared player context
//!
//! [`PlayerContext`] is the handle every view holds onto. Cloning it is cheap
//! and all clones see the same [`PlayerState`]. Actions go through the
//! context so that listeners are told about every change.

use crate::{
    error::Result,
    events::PlayerEvent,
    state::PlayerState,
    types::{PlayerConfig, PlayerSnapshot},
};
use podcastr_core::Episode;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle returned by [`PlayerContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&PlayerEvent)>;

struct Inner {
    state: RefCell<PlayerState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Cloneable, single-threaded owner of the player state
///
/// Listeners run after the state borrow is released, so they may read the
/// state or call further actions. Events raised by a nested action are
/// delivered by that nested call.
#[derive(Clone)]
pub struct PlayerContext {
    inner: Rc<Inner>,
}

/// Non-owning handle to a [`PlayerContext`]
///
/// Listeners that need the context hold one of these so the context does not
/// keep itself alive through its own listener list.
#[derive(Clone)]
pub struct WeakPlayerContext {
    inner: Weak<Inner>,
}

impl WeakPlayerContext {
    pub fn upgrade(&self) -> Option<PlayerContext> {
        self.inner.upgrade().map(|inner| PlayerContext { inner })
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::from_state(PlayerState::default())
    }
}

impl fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerContext")
            .field("state", &self.inner.state)
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl PlayerContext {
    pub fn new(config: PlayerConfig) -> Self {
        Self::from_state(PlayerState::new(config))
    }

    /// Wrap an existing state (e.g. one with a seeded random source)
    pub fn from_state(state: PlayerState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakPlayerContext {
        WeakPlayerContext {
            inner: Rc::downgrade(&self.inner),
        }
    }

    // ===== Reads =====

    /// Run `f` with shared access to the state
    pub fn with_state<R>(&self, f: impl FnOnce(&PlayerState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.with_state(PlayerState::snapshot)
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.with_state(|state| state.current_episode().cloned())
    }

    // ===== Actions =====

    pub fn play(&self, episode: Episode) {
        self.dispatch(|state| state.play(episode));
    }

    pub fn play_list(&self, list: Vec<Episode>, index: usize) -> Result<()> {
        self.dispatch(|state| state.play_list(list, index))
    }

    pub fn toggle_play(&self) {
        self.dispatch(PlayerState::toggle_play);
    }

    pub fn set_playing_state(&self, is_playing: bool) {
        self.dispatch(|state| state.set_playing_state(is_playing));
    }

    pub fn play_next(&self) {
        self.dispatch(PlayerState::play_next);
    }

    pub fn play_previous(&self) {
        self.dispatch(PlayerState::play_previous);
    }

    pub fn toggle_looping(&self) {
        self.dispatch(PlayerState::toggle_looping);
    }

    pub fn toggle_shuffling(&self) {
        self.dispatch(PlayerState::toggle_shuffling);
    }

    pub fn clear_player_state(&self) {
        self.dispatch(PlayerState::clear_player_state);
    }

    // ===== Subscriptions =====

    /// Register a listener for every event raised through this context
    pub fn subscribe(&self, listener: impl Fn(&PlayerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn dispatch<R>(&self, action: impl FnOnce(&mut PlayerState) -> R) -> R {
        let (result, events) = {
            let mut state = self.inner.state.borrow_mut();
            let result = action(&mut state);
            (result, state.drain_events())
        };

        self.notify(&events);
        result
    }

    fn notify(&self, events: &[PlayerEvent]) {
        if events.is_empty() {
            return;
        }

        // Listeners may subscribe or unsubscribe while being called
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for event in events {
            for listener in &listeners {
                listener(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn episode(id: &str) -> Episode {
        Episode::new(id, id, "Hosts", "thumb.jpg", format!("{}.m4a", id), 120)
    }

    fn recorder(context: &PlayerContext) -> Rc<RefCell<Vec<PlayerEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        context.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        seen
    }

    #[test]
    fn clones_share_state() {
        let context = PlayerContext::default();
        let other = context.clone();

        context.play(episode("a"));

        assert_eq!(other.current_episode().unwrap().id, "a");
        assert!(other.snapshot().is_playing);
    }

    #[test]
    fn listeners_receive_events_in_order() {
        let context = PlayerContext::default();
        let seen = recorder(&context);

        context.play(episode("a"));
        context.toggle_play();

        assert_eq!(
            *seen.borrow(),
            vec![
                PlayerEvent::PlaylistChanged { length: 1 },
                PlayerEvent::EpisodeChanged {
                    index: 0,
                    episode_id: "a".to_string()
                },
                PlayerEvent::PlayingChanged { is_playing: true },
                PlayerEvent::PlayingChanged { is_playing: false },
            ]
        );
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let context = PlayerContext::default();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = context.subscribe(move |_| counter.set(counter.get() + 1));

        context.toggle_looping();
        assert!(context.unsubscribe(id));
        context.toggle_looping();

        assert_eq!(calls.get(), 1);
        assert!(!context.unsubscribe(id));
        assert_eq!(context.listener_count(), 0);
    }

    #[test]
    fn listener_can_read_and_act() {
        let context = PlayerContext::from_state(PlayerState::with_rng(
            PlayerConfig::default(),
            StdRng::seed_from_u64(1),
        ));
        let handle = context.clone();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);

        context.subscribe(move |event| {
            sink.borrow_mut().push(handle.snapshot().current_index);
            // Pause as soon as anything starts playing
            if *event == (PlayerEvent::PlayingChanged { is_playing: true }) {
                handle.set_playing_state(false);
            }
        });

        context
            .play_list(vec![episode("a"), episode("b")], 1)
            .unwrap();

        assert!(!context.snapshot().is_playing);
        assert!(observed.borrow().iter().all(|index| *index == 1));
    }

    #[test]
    fn rejected_action_raises_nothing() {
        let context = PlayerContext::default();
        let seen = recorder(&context);

        assert!(context.play_list(vec![episode("a")], 4).is_err());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn weak_handle_does_not_keep_context_alive() {
        let context = PlayerContext::default();
        let weak = context.downgrade();

        weak.upgrade().unwrap().play(episode("a"));
        assert_eq!(context.current_episode().unwrap().id, "a");

        drop(context);
        assert!(weak.upgrade().is_none());
    }
}
