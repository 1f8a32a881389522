//! Player control surface
//!
//! Binds the shared [`PlayerContext`] to one [`MediaElement`]. The controls
//! subscribe to the context, so an action taken through any clone of it
//! reaches the media element. Media notifications are fed back into the
//! state and the transport buttons are exposed for the view.

use crate::{
    context::{PlayerContext, SubscriptionId},
    media::{MediaElement, MediaEvent},
    types::ControlsConfig,
    view::{PlayerView, TransportAction, TransportControls},
};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadedSource {
    id: String,
    url: String,
}

/// The media element and what it was last told
struct Binding<M> {
    media: M,
    config: ControlsConfig,

    /// Whole seconds elapsed in the current episode
    progress: u64,

    loaded: Option<LoadedSource>,
    applied_looping: Option<bool>,
    last_playing: bool,

    // Time updates are ignored until the new source reports its metadata
    tracking: bool,
}

impl<M: MediaElement> Binding<M> {
    /// Apply the difference between the state and the media element.
    /// Returns false if the media refused to start.
    fn apply(&mut self, context: &PlayerContext) -> bool {
        let (current, is_playing, is_looping) = context.with_state(|state| {
            (
                state.current_episode().map(|episode| LoadedSource {
                    id: episode.id.clone(),
                    url: episode.url.clone(),
                }),
                state.is_playing(),
                state.is_looping(),
            )
        });

        if self.applied_looping != Some(is_looping) {
            self.media.set_looping(is_looping);
            self.applied_looping = Some(is_looping);
        }

        match current {
            Some(source) if self.loaded.as_ref() != Some(&source) => {
                debug!(episode_id = %source.id, url = %source.url, "Loading episode");

                self.media.set_autoplay(self.config.autoplay);
                self.media.set_source(&source.url);
                self.loaded = Some(source);
                self.progress = 0;
                self.tracking = false;

                // Autoplay starts the new source by itself
                if is_playing && !self.config.autoplay {
                    return self.start_media();
                }
                self.last_playing = is_playing;
                true
            }
            Some(_) if is_playing != self.last_playing => {
                if is_playing {
                    self.start_media()
                } else {
                    self.media.pause();
                    self.last_playing = false;
                    true
                }
            }
            Some(_) => true,
            None => {
                if self.loaded.take().is_some() {
                    debug!("Unloading media source");
                    self.media.clear_source();
                }
                self.progress = 0;
                self.tracking = false;
                self.last_playing = false;
                true
            }
        }
    }

    fn start_media(&mut self) -> bool {
        match self.media.play() {
            Ok(()) => {
                self.last_playing = true;
                true
            }
            Err(e) => {
                warn!("Media refused to play: {}", e);
                self.last_playing = false;
                false
            }
        }
    }
}

/// Bring the media in line with the state until nothing is left to apply
///
/// A call made while the binding is borrowed only marks it dirty; the
/// caller holding the borrow picks the change up on its next pass.
fn reconcile<M: MediaElement>(
    context: &PlayerContext,
    binding: &RefCell<Binding<M>>,
    dirty: &Cell<bool>,
) {
    dirty.set(true);
    loop {
        let Ok(mut bound) = binding.try_borrow_mut() else {
            return;
        };
        if !dirty.replace(false) {
            return;
        }

        let started = bound.apply(context);
        drop(bound);

        if !started {
            context.set_playing_state(false);
        }
    }
}

/// Transport controls and progress tracking for one media element
///
/// Dropping the controls detaches them from the context.
pub struct PlayerControls<M: MediaElement + 'static> {
    context: PlayerContext,
    binding: Rc<RefCell<Binding<M>>>,
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl<M: MediaElement + 'static> PlayerControls<M> {
    /// Attach controls to a media element and bring it in line with the state
    pub fn new(context: PlayerContext, media: M, config: ControlsConfig) -> Self {
        let binding = Rc::new(RefCell::new(Binding {
            media,
            config,
            progress: 0,
            loaded: None,
            applied_looping: None,
            last_playing: false,
            tracking: false,
        }));
        let dirty = Rc::new(Cell::new(false));

        let subscription = {
            let weak_context = context.downgrade();
            let binding = Rc::downgrade(&binding);
            let dirty = Rc::clone(&dirty);
            context.subscribe(move |_event| {
                if let (Some(context), Some(binding)) = (weak_context.upgrade(), binding.upgrade())
                {
                    reconcile(&context, &binding, &dirty);
                }
            })
        };

        let controls = Self {
            context,
            binding,
            dirty,
            subscription,
        };
        controls.sync();
        controls
    }

    pub fn context(&self) -> &PlayerContext {
        &self.context
    }

    pub fn media(&self) -> Ref<'_, M> {
        Ref::map(self.binding.borrow(), |binding| &binding.media)
    }

    pub fn media_mut(&mut self) -> RefMut<'_, M> {
        RefMut::map(self.binding.borrow_mut(), |binding| &mut binding.media)
    }

    pub fn progress(&self) -> u64 {
        self.binding.borrow().progress
    }

    /// Reconcile the media element with the current state
    ///
    /// Runs on its own after every action on the context. Only differences
    /// since the last pass are applied.
    pub fn sync(&self) {
        reconcile(&self.context, &self.binding, &self.dirty);
    }

    /// Feed a notification from the media element back into the state
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata { duration } => {
                debug!(duration, "Media metadata loaded");
                let mut binding = self.binding.borrow_mut();
                binding.media.set_current_time(0.0);
                binding.progress = 0;
                binding.tracking = true;
            }
            MediaEvent::TimeUpdate { position } => {
                let mut binding = self.binding.borrow_mut();
                if binding.tracking && binding.loaded.is_some() {
                    binding.progress = position.max(0.0).floor() as u64;
                }
            }
            MediaEvent::Play => {
                // Already playing, nothing to forward to the media
                self.binding.borrow_mut().last_playing = true;
                self.context.set_playing_state(true);
            }
            MediaEvent::Pause => {
                self.binding.borrow_mut().last_playing = false;
                self.context.set_playing_state(false);
            }
            MediaEvent::Ended => {
                if self.context.with_state(|state| state.has_next()) {
                    self.context.play_next();
                } else {
                    self.context.clear_player_state();
                }
            }
        }

        self.sync();
    }

    /// Jump to `amount` seconds in the current episode
    ///
    /// Clamped to the episode length. Progress updates immediately. Without
    /// an episode this does nothing.
    pub fn seek(&mut self, amount: u64) {
        let Some(duration) = self
            .context
            .with_state(|state| state.current_episode().map(|episode| episode.duration))
        else {
            return;
        };

        let target = amount.min(duration);
        let mut binding = self.binding.borrow_mut();
        binding.media.set_current_time(target as f64);
        binding.progress = target;
    }

    /// Press a transport button
    ///
    /// Disabled buttons are ignored. Returns whether the press did anything.
    pub fn press(&mut self, action: TransportAction) -> bool {
        if !self.controls().is_enabled(action) {
            debug!(action = action.as_str(), "Ignoring press on disabled control");
            return false;
        }

        match action {
            TransportAction::Shuffle => self.context.toggle_shuffling(),
            TransportAction::Previous => self.context.play_previous(),
            TransportAction::PlayPause => self.context.toggle_play(),
            TransportAction::Next => self.context.play_next(),
            TransportAction::Loop => self.context.toggle_looping(),
        }
        true
    }

    pub fn controls(&self) -> TransportControls {
        TransportControls::from_snapshot(&self.context.snapshot())
    }

    pub fn view(&self) -> PlayerView {
        PlayerView::from_snapshot(&self.context.snapshot(), self.progress())
    }
}

impl<M: MediaElement + 'static> Drop for PlayerControls<M> {
    fn drop(&mut self) {
        self.context.unsubscribe(self.subscription);
    }
}
