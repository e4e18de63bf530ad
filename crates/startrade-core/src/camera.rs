//! Galaxy map camera - pan, zoom and visibility.
//!
//! The camera is a square window over galaxy space with its origin at the
//! lower-left corner. It has three zoom levels spanning the whole galaxy,
//! half of it and a quarter of it. Panning moves by a fraction of the
//! current span and is clamped so the window never leaves the galaxy.
//!
//! Visibility is inclusive on every edge: a star exactly on the window
//! border is visible.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::{Rect, Star, Vec2};
use crate::error::CommandError;
use crate::graph::Adjacency;

/// Number of zoom levels.
pub const ZOOM_LEVELS: usize = 3;

/// Map navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraCommand {
    Up,
    Down,
    Left,
    Right,
    Zoom,
}

impl FromStr for CameraCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(CameraCommand::Up),
            "down" => Ok(CameraCommand::Down),
            "left" => Ok(CameraCommand::Left),
            "right" => Ok(CameraCommand::Right),
            "zoom" => Ok(CameraCommand::Zoom),
            _ => Err(CommandError(s.to_string())),
        }
    }
}

/// What the map should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    /// Indexed by star ID
    pub stars: Vec<bool>,
    /// Pathways with both ends on screen
    pub edges: Adjacency,
}

impl Visibility {
    pub fn visible_count(&self) -> usize {
        self.stars.iter().filter(|&&v| v).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Window span per zoom level, widest first
    zoom_levels: [f32; ZOOM_LEVELS],
    /// Current level, 1-based
    level: usize,
    /// Lower-left corner of the window
    position: Vec2,
    /// Galaxy side length
    extent: f32,
    /// Pan distance as a fraction of the window span
    pan_step: f32,
}

impl Camera {
    pub fn new(galaxy_size: u32, pan_step: f32) -> Self {
        let extent = galaxy_size as f32;
        Self {
            zoom_levels: [extent, extent / 2.0, extent / 4.0],
            level: 1,
            position: Vec2::ZERO,
            extent,
            pan_step,
        }
    }

    /// Span of the window at `level` (1-based), if the level exists.
    pub fn zoom_span(&self, level: usize) -> Option<f32> {
        level
            .checked_sub(1)
            .and_then(|i| self.zoom_levels.get(i))
            .copied()
    }

    pub fn zoom_level(&self) -> usize {
        self.level
    }

    /// Side length of the current window.
    ///
    /// An out-of-range level (from a damaged save) reads as the widest view.
    pub fn current_zoom(&self) -> f32 {
        self.zoom_span(self.level).unwrap_or(self.zoom_levels[0])
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn view_rect(&self) -> Rect {
        Rect::square(self.position, self.current_zoom())
    }

    /// Largest allowed coordinate for the window's lower-left corner.
    fn max_offset(&self) -> f32 {
        (self.extent - self.current_zoom()).max(0.0)
    }

    fn clamp(&mut self) {
        let max = self.max_offset();
        self.position.x = self.position.x.clamp(0.0, max);
        self.position.y = self.position.y.clamp(0.0, max);
    }

    pub fn apply(&mut self, command: CameraCommand) {
        let step = self.pan_step * self.current_zoom();
        match command {
            CameraCommand::Up => self.position.y += step,
            CameraCommand::Down => self.position.y -= step,
            CameraCommand::Left => self.position.x -= step,
            CameraCommand::Right => self.position.x += step,
            CameraCommand::Zoom => self.level = self.level % ZOOM_LEVELS + 1,
        }
        self.clamp();
    }

    /// Move the window so its lower-left corner is at `position` (clamped).
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.clamp();
    }

    pub fn is_visible(&self, point: &Vec2) -> bool {
        self.view_rect().contains(point)
    }

    /// Stars inside the window, and the pathways between them.
    pub fn select_visible(&self, stars: &[Star], adjacency: &Adjacency) -> Visibility {
        let visible: Vec<bool> = stars
            .iter()
            .map(|s| self.is_visible(&s.coordinates))
            .collect();

        let mut edges = Adjacency::new(stars.len());
        for (a, b) in adjacency.edges() {
            if visible[a] && visible[b] {
                edges.link(a, b);
            }
        }

        Visibility {
            stars: visible,
            edges,
        }
    }

    /// Map a galaxy point to pixels in a `width` x `height` viewport.
    ///
    /// Screen y grows downward, so the window's top edge lands on row 0.
    pub fn project(&self, point: &Vec2, width: f32, height: f32) -> (f32, f32) {
        let zoom = self.current_zoom();
        let u = (point.x - self.position.x) / zoom;
        let v = (point.y - self.position.y) / zoom;
        (u * width, (1.0 - v) * height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(name: &str, x: f32, y: f32) -> Star {
        Star::new(name, Vec2::new(x, y))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("up".parse::<CameraCommand>(), Ok(CameraCommand::Up));
        assert_eq!("Zoom".parse::<CameraCommand>(), Ok(CameraCommand::Zoom));
        assert_eq!(" left ".parse::<CameraCommand>(), Ok(CameraCommand::Left));
        assert!("warp".parse::<CameraCommand>().is_err());
    }

    #[test]
    fn test_zoom_levels() {
        let camera = Camera::new(4, 0.1);
        assert_eq!(camera.zoom_level(), 1);
        assert_eq!(camera.current_zoom(), 4.0);
        assert_eq!(camera.zoom_span(2), Some(2.0));
        assert_eq!(camera.zoom_span(3), Some(1.0));
        assert_eq!(camera.zoom_span(0), None);
        assert_eq!(camera.zoom_span(4), None);
    }

    #[test]
    fn test_zoom_cycles() {
        let mut camera = Camera::new(4, 0.1);
        let mut seen = Vec::new();
        for _ in 0..4 {
            camera.apply(CameraCommand::Zoom);
            seen.push(camera.zoom_level());
        }
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn test_out_of_range_level_falls_back() {
        let json = serde_json::to_string(&Camera::new(4, 0.1))
            .unwrap()
            .replace("\"level\":1", "\"level\":0");
        let mut camera: Camera = serde_json::from_str(&json).unwrap();
        assert_eq!(camera.zoom_level(), 0);
        assert_eq!(camera.current_zoom(), 4.0);
        assert!(camera.is_visible(&Vec2::new(4.0, 4.0)));

        camera.apply(CameraCommand::Right);
        assert_eq!(camera.position(), Vec2::ZERO);
        camera.apply(CameraCommand::Zoom);
        assert_eq!(camera.zoom_level(), 1);

        camera.level = 7;
        assert_eq!(camera.current_zoom(), 4.0);
    }

    #[test]
    fn test_widest_zoom_cannot_pan() {
        let mut camera = Camera::new(4, 0.1);
        for _ in 0..10 {
            camera.apply(CameraCommand::Right);
            camera.apply(CameraCommand::Up);
        }
        assert_eq!(camera.position(), Vec2::ZERO);
    }

    #[test]
    fn test_pan_clamps_right() {
        let mut camera = Camera::new(4, 0.1);
        camera.apply(CameraCommand::Zoom);
        let max = 4.0 - camera.current_zoom();
        for _ in 0..100 {
            camera.apply(CameraCommand::Right);
            assert!(camera.position().x <= max);
        }
        assert_eq!(camera.position().x, max);
    }

    #[test]
    fn test_pan_clamps_at_zero() {
        let mut camera = Camera::new(4, 0.1);
        camera.apply(CameraCommand::Zoom);
        camera.apply(CameraCommand::Left);
        camera.apply(CameraCommand::Down);
        assert_eq!(camera.position(), Vec2::ZERO);
    }

    #[test]
    fn test_pan_step_scales_with_zoom() {
        let mut camera = Camera::new(8, 0.1);
        camera.apply(CameraCommand::Zoom); // span 4
        camera.apply(CameraCommand::Up);
        assert!((camera.position().y - 0.4).abs() < 1e-6);

        camera.apply(CameraCommand::Zoom); // span 2
        camera.apply(CameraCommand::Up);
        assert!((camera.position().y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_out_reclamps() {
        let mut camera = Camera::new(4, 0.1);
        camera.apply(CameraCommand::Zoom);
        camera.apply(CameraCommand::Zoom);
        camera.set_position(Vec2::new(3.0, 3.0));
        assert_eq!(camera.position(), Vec2::new(3.0, 3.0));

        // Back to the full view, which only fits at the origin
        camera.apply(CameraCommand::Zoom);
        assert_eq!(camera.position(), Vec2::ZERO);
    }

    #[test]
    fn test_boundary_star_visible() {
        let mut camera = Camera::new(4, 0.1);
        camera.apply(CameraCommand::Zoom); // span 2 at origin
        assert!(camera.is_visible(&Vec2::new(2.0, 1.0)));
        assert!(camera.is_visible(&Vec2::new(0.0, 2.0)));
        assert!(!camera.is_visible(&Vec2::new(2.001, 1.0)));
    }

    #[test]
    fn test_select_visible() {
        let stars = vec![
            star("A", 0.5, 0.5),
            star("B", 1.5, 1.0),
            star("C", 3.5, 3.5),
            star("D", 2.0, 2.0),
        ];
        let mut adjacency = Adjacency::new(4);
        adjacency.link(0, 1);
        adjacency.link(1, 2);
        adjacency.link(0, 3);

        let mut camera = Camera::new(4, 0.1);
        camera.apply(CameraCommand::Zoom);
        let vis = camera.select_visible(&stars, &adjacency);

        assert_eq!(vis.stars, vec![true, true, false, true]);
        assert_eq!(vis.visible_count(), 3);
        assert!(vis.edges.is_linked(0, 1));
        assert!(vis.edges.is_linked(0, 3));
        assert!(!vis.edges.is_linked(1, 2));
        assert!(!vis.edges.is_linked(1, 3));
    }

    #[test]
    fn test_project() {
        let mut camera = Camera::new(4, 0.1);
        camera.apply(CameraCommand::Zoom);
        camera.set_position(Vec2::new(1.0, 1.0));

        assert_eq!(camera.project(&Vec2::new(1.0, 1.0), 800.0, 600.0), (0.0, 600.0));
        assert_eq!(camera.project(&Vec2::new(3.0, 3.0), 800.0, 600.0), (800.0, 0.0));
        assert_eq!(camera.project(&Vec2::new(2.0, 2.0), 800.0, 600.0), (400.0, 300.0));
    }
}
