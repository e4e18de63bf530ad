//! Game engine - owns the galaxy and the player and runs the game turn by turn.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::{Location, Player, Resource, Star, Voyage};
use crate::config::GameConfig;
use crate::error::{GameError, GenerationError};
use crate::galaxy::Galaxy;
use crate::generation::NamePool;
use crate::systems::EventScheduler;

/// Something the UI should react to after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A random encounter fired mid-voyage.
    Encounter { event_id: u32 },
    /// The ship docked at a star.
    Arrived { star: usize, first_visit: bool },
}

/// Main game state
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) seed: u64,
    pub(crate) galaxy: Galaxy,
    pub(crate) player: Player,
    pub(crate) events: EventScheduler,
    pub(crate) rng: ChaCha8Rng,
    /// Seconds of game time since the start
    pub(crate) clock: f64,
}

impl GameEngine {
    /// Load the name corpus named by the config and start a new game.
    pub fn bootstrap(config: GameConfig) -> Result<Self, GenerationError> {
        let names = NamePool::load(&config.names_path)?;
        Self::new(config, &names)
    }

    /// Start a new game: generate the galaxy and dock at the first star.
    pub fn new(config: GameConfig, names: &NamePool) -> Result<Self, GenerationError> {
        config.validate()?;

        let seed = match config.galaxy.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::thread_rng().gen();
                log::info!("No seed configured, using {}", seed);
                seed
            }
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut galaxy = Galaxy::generate(&config.galaxy, &config.camera, names, &mut rng)?;
        galaxy.explore(0, &mut rng)?;
        let events = EventScheduler::new(&config.events, &mut rng);
        let player = Player::new(0, config.cargo_capacity);

        Ok(Self {
            config,
            seed,
            galaxy,
            player,
            events,
            rng,
            clock: 0.0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the world was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Mutable access for map navigation (camera commands).
    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn events(&self) -> &EventScheduler {
        &self.events
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// The star the ship is docked at.
    pub fn current_star(&self) -> Option<&Star> {
        self.player.docked_at().and_then(|id| self.galaxy.star(id))
    }

    /// Stars reachable in one jump from where the ship is docked.
    pub fn destinations(&self) -> Vec<&Star> {
        match self.player.docked_at() {
            Some(id) => self
                .galaxy
                .neighbors(id)
                .filter_map(|n| self.galaxy.star(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Set course for a directly linked star.
    pub fn travel_to(&mut self, name: &str) -> Result<Voyage, GameError> {
        self.plot_voyage(name).map_err(|e| {
            log::warn!("Travel to {} rejected: {}", name, e);
            e
        })
    }

    fn plot_voyage(&mut self, name: &str) -> Result<Voyage, GameError> {
        let from = self.player.docked_at().ok_or(GameError::Traveling)?;
        let to = self
            .galaxy
            .star_id(name)
            .ok_or_else(|| GameError::UnknownStar(name.to_string()))?;

        if from == to {
            return Err(GameError::AlreadyThere(name.to_string()));
        }
        if !self.galaxy.is_linked(from, to) {
            let from_name = self.galaxy.star(from).map(|s| s.name.clone()).unwrap_or_default();
            return Err(GameError::NoPathway {
                from: from_name,
                to: name.to_string(),
            });
        }

        let distance = self.galaxy.distance(from, to).unwrap_or(0.0);
        let voyage = Voyage {
            from,
            to,
            elapsed: 0.0,
            duration: distance / self.config.travel_speed,
        };
        self.player.location = Location::Traveling(voyage);
        log::info!("Departing for {} ({:.1}s)", name, voyage.duration);
        Ok(voyage)
    }

    /// Advance the game by `dt` seconds.
    ///
    /// Encounters are only rolled while travelling. Arriving at a star for
    /// the first time generates its system.
    pub fn update(&mut self, dt: f32) -> Result<Vec<GameEvent>, GenerationError> {
        self.clock += dt as f64;
        let mut happened = Vec::new();

        let Location::Traveling(mut voyage) = self.player.location else {
            return Ok(happened);
        };

        voyage.elapsed += dt;
        if let Some(event_id) = self.events.poll(dt, &mut self.rng) {
            happened.push(GameEvent::Encounter { event_id });
        }

        if voyage.is_complete() {
            let first_visit = self.galaxy.explore(voyage.to, &mut self.rng)?;
            self.player.location = Location::Docked(voyage.to);
            if let Some(star) = self.galaxy.star(voyage.to) {
                log::info!("Arrived at {}", star.name);
            }
            happened.push(GameEvent::Arrived {
                star: voyage.to,
                first_visit,
            });
        } else {
            self.player.location = Location::Traveling(voyage);
        }

        Ok(happened)
    }

    /// Load one unit of a surface cell's resource into the hold.
    pub fn harvest(&mut self, body: usize, cell: usize) -> Result<Resource, GameError> {
        self.take_resource(body, cell).map_err(|e| {
            log::warn!("Harvest of body {} cell {} rejected: {}", body, cell, e);
            e
        })
    }

    fn take_resource(&mut self, body: usize, cell: usize) -> Result<Resource, GameError> {
        let star = self.player.docked_at().ok_or(GameError::Traveling)?;
        let object = self
            .galaxy
            .star(star)
            .and_then(|s| s.objects.get(body))
            .ok_or(GameError::UnknownBody(body))?;
        let square = object
            .grid
            .get(cell)
            .ok_or(GameError::UnknownCell { body, cell })?;
        let resource = square.resource.ok_or(GameError::EmptyCell { body, cell })?;

        self.player.inventory.add(resource, 1)?;
        Ok(resource)
    }

    /// Visual variant for a body in the current system, chosen once and cached.
    pub fn body_image(&mut self, body: usize, variants: u32) -> Option<u32> {
        let star = self.player.docked_at()?;
        let object = self.galaxy.star_mut(star)?.objects.get_mut(body)?;
        Some(object.image_id(&mut self.rng, variants))
    }

    /// Save the game to a writer
    pub fn save<W: std::io::Write>(&self, writer: W) -> Result<(), crate::error::SaveError> {
        crate::persistence::save_game(writer, self)
    }

    /// Load a game from a reader
    pub fn load<R: std::io::Read>(reader: R) -> Result<Self, crate::error::SaveError> {
        crate::persistence::load_game(reader)
    }
}
