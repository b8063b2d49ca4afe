use crate::camera::Camera;
use crate::collision::try_move;
use crate::config::GameConfig;
use crate::geometry::{Direction, Rect};
use crate::input::{ActionMap, InputEvent};
use crate::world::{Drawable, SpriteId, World};

/// Which screen is active. Starts on `Splash`; `Playing` lasts until quit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Playing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneAction {
    None,
    Switch(Screen),
    Quit,
}

impl Screen {
    /// Screen-level reaction to one input event. Movement is handled by the caller.
    pub fn on_event(self, event: &InputEvent) -> SceneAction {
        match (self, event) {
            (_, InputEvent::Quit) => SceneAction::Quit,
            (
                Screen::Splash,
                InputEvent::KeyDown(_) | InputEvent::UnidentifiedKeyDown | InputEvent::PointerDown(_),
            ) => {
                SceneAction::Switch(Screen::Playing)
            }
            _ => SceneAction::None,
        }
    }
}

/// One camera-shifted sprite draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpriteCommand {
    pub sprite: SpriteId,
    /// Screen-space rectangle.
    pub rect: Rect,
}

/// What the renderer should draw this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Background image plus intro text.
    Splash,
    /// Tiles in build order, then the player.
    World(Vec<SpriteCommand>),
}

/// All game state driven by the main loop.
pub struct Game {
    screen: Screen,
    world: World,
    camera: Camera,
    bindings: ActionMap<Direction>,
}

impl Game {
    pub fn new(world: World, config: &GameConfig) -> Self {
        Self {
            screen: Screen::Splash,
            world,
            camera: Camera::new(config.viewport_width, config.viewport_height),
            bindings: ActionMap::arrows(),
        }
    }

    pub fn screen(&self) -> Screen { self.screen }
    pub fn world(&self) -> &World { &self.world }
    pub fn camera(&self) -> &Camera { &self.camera }

    /// Process one iteration: every queued event in order, then the camera.
    /// Returns `SceneAction::Quit` as soon as a quit event is seen; events
    /// after it are dropped.
    pub fn update<I>(&mut self, events: I) -> SceneAction
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match self.screen.on_event(&event) {
                SceneAction::Quit => {
                    tracing::info!("quit requested");
                    return SceneAction::Quit;
                }
                SceneAction::Switch(next) => {
                    tracing::info!(?next, "screen switch");
                    self.screen = next;
                    // The event that leaves the splash does not also move the player.
                    continue;
                }
                SceneAction::None => {}
            }

            if self.screen == Screen::Playing {
                if let Some(dir) = self.bindings.action_for(&event) {
                    try_move(&mut self.world, dir);
                }
            }
        }

        if self.screen == Screen::Playing {
            self.camera.update(&self.world.player.rect);
        }
        SceneAction::None
    }

    /// Build this frame's draw list.
    pub fn frame(&self) -> Frame {
        match self.screen {
            Screen::Splash => Frame::Splash,
            Screen::Playing => {
                let tiles = self.world.tiles().iter().map(|t| self.command(t));
                let player = std::iter::once(self.command(&self.world.player));
                Frame::World(tiles.chain(player).collect())
            }
        }
    }

    fn command(&self, d: &impl Drawable) -> SpriteCommand {
        SpriteCommand { sprite: d.sprite(), rect: self.camera.apply(&d.world_rect()) }
    }
}
