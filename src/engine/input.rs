//! Pointer and camera input for [`FramingEngine`].

use glam::Vec2;

use super::{CommittedAtoms, FramingEngine};
use crate::picking::{pick_atom, Ray};
use crate::scene::SceneRoot;

// ── Hover & picking ──

impl FramingEngine {
    /// Pointer moved to `ndc` (x and y in `[-1, 1]`, +Y up).
    ///
    /// Tests the ray against the structure's bounding sphere as it is
    /// currently rotated. When atom picking is enabled, also resolves the
    /// atom under the pointer from the committed structure. Returns whether
    /// the structure is hovered; always `false` until a load has committed.
    pub fn pointer_move<R: SceneRoot + ?Sized>(
        &mut self,
        ndc: Vec2,
        root: &R,
    ) -> bool {
        self.pointer = Some(ndc);
        if !self.is_ready() {
            return false;
        }
        self.resolve_hover(ndc, root)
    }

    /// Pointer left the viewport.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.hover.pointer_leave();
    }

    /// Re-run the hover test and atom pick at the last pointer position, so
    /// a stationary pointer tracks the structure spinning underneath it.
    pub(super) fn refresh_hover<R: SceneRoot + ?Sized>(&mut self, root: &R) {
        if let Some(ndc) = self.pointer {
            let _ = self.resolve_hover(ndc, root);
        }
    }

    fn resolve_hover<R: SceneRoot + ?Sized>(
        &mut self,
        ndc: Vec2,
        root: &R,
    ) -> bool {
        let Some(centered) = self.centered else {
            return false;
        };

        let sphere = centered.sphere();
        let hovered = self.hover.pointer_move(
            &self.controls.camera,
            ndc,
            Some(&sphere),
            root,
        );

        let atoms = self
            .atoms
            .as_ref()
            .and_then(CommittedAtoms::view)
            .filter(|_| hovered && self.options.picking.pick_atoms);
        let picked = atoms.and_then(|atoms| {
            pick_atom(
                &Ray::from_ndc(&self.controls.camera, ndc),
                &root.world_matrix(),
                &centered,
                &atoms,
                self.options.picking.atom_radius,
            )
        });
        if picked.map(|p| p.index) != self.hover.state().picked.map(|p| p.index)
        {
            log::debug!("picked atom {:?}", picked.map(|p| p.index));
        }
        self.hover.set_picked(picked);
        hovered
    }
}

// ── Camera & rotation control ──

impl FramingEngine {
    /// Orbit the camera by a drag delta in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        self.controls.rotate(delta);
    }

    /// Pan the camera by a drag delta in pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.controls.pan(delta);
    }

    /// Dolly in (positive) or out (negative), within the fitted limits.
    pub fn zoom(&mut self, delta: f32) {
        self.controls.zoom(delta);
    }

    /// Return the camera to the view saved by the last fit. Returns `false`
    /// before anything has been fitted.
    pub fn reset_view(&mut self) -> bool {
        let reset = self.controls.reset();
        if reset {
            self.uniform.update_view_proj(&self.controls.camera);
        }
        reset
    }

    /// Pause or resume auto-rotation. The spin eases to a stop rather than
    /// halting.
    pub fn set_paused(&mut self, paused: bool) {
        self.options.rotation.paused = paused;
        self.animator.set_paused(paused);
    }

    /// Flip the pause toggle. Returns the new paused state.
    pub fn toggle_paused(&mut self) -> bool {
        let paused = !self.animator.is_paused();
        self.set_paused(paused);
        paused
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::bounds::AtomPositions;
    use crate::options::Options;
    use crate::scene::{NodeKind, StructureRoot};

    const DT: f32 = 1.0 / 60.0;

    fn line() -> Vec<f32> {
        vec![
            -500.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, //
            500.0, 0.0, 0.0,
        ]
    }

    fn loaded(options: Options) -> (FramingEngine, StructureRoot) {
        let mut engine = FramingEngine::new(options, 1.0);
        let mut root = StructureRoot::new();
        let _ = root.add_child("atoms", NodeKind::Instanced { count: 3 });
        let coords = line();
        let atoms = AtomPositions::from_flat(&coords).unwrap();
        assert!(engine.load(&atoms, &mut root).is_some());
        (engine, root)
    }

    #[test]
    fn pointer_before_load_never_hovers() {
        let mut engine = FramingEngine::new(Options::default(), 1.0);
        let root = StructureRoot::new();
        assert!(!engine.pointer_move(Vec2::ZERO, &root));
    }

    #[test]
    fn hover_eases_rotation_to_a_stop() {
        let (mut engine, mut root) = loaded(Options::default());
        for _ in 0..60 {
            let _ = engine.tick(DT, &mut root);
        }
        assert!(engine.rotation().current_speed > 0.0);

        assert!(engine.pointer_move(Vec2::ZERO, &root));
        let _ = engine.tick(DT, &mut root);
        // Decelerates, does not snap.
        assert!(engine.rotation().current_speed > 0.0);

        for _ in 0..300 {
            let _ = engine.tick(DT, &mut root);
        }
        assert_eq!(engine.rotation().current_speed, 0.0);
        let frozen = root.rotation_y();
        let _ = engine.tick(DT, &mut root);
        assert_eq!(root.rotation_y(), frozen);

        engine.pointer_leave();
        for _ in 0..10 {
            let _ = engine.tick(DT, &mut root);
        }
        assert!(root.rotation_y() != frozen);
    }

    #[test]
    fn corner_pointer_misses() {
        let (mut engine, root) = loaded(Options::default());
        assert!(!engine.pointer_move(Vec2::new(0.99, 0.99), &root));
    }

    #[test]
    fn picks_the_atom_under_the_pointer() {
        let mut options = Options::default();
        options.picking.pick_atoms = true;
        let (mut engine, root) = loaded(options);

        assert!(engine.pointer_move(Vec2::ZERO, &root));
        assert_eq!(engine.hover().picked.map(|p| p.index), Some(1));

        engine.pointer_leave();
        assert_eq!(engine.hover().picked, None);
    }

    #[test]
    fn picking_stays_off_by_default() {
        let (mut engine, root) = loaded(Options::default());
        assert!(engine.pointer_move(Vec2::ZERO, &root));
        assert_eq!(engine.hover().picked, None);
    }

    #[test]
    fn picked_atom_follows_the_spin_under_a_still_pointer() {
        let mut options = Options::default();
        options.picking.pick_atoms = true;
        options.rotation.hover_pause = false;
        let (mut engine, mut root) = loaded(options);
        let coords = line();
        let atoms = AtomPositions::from_flat(&coords).unwrap();
        let ndc = Vec2::new(0.75, 0.0);

        assert!(engine.pointer_move(ndc, &root));
        assert_eq!(engine.hover().picked.map(|p| p.index), Some(2));

        let mut lost_sight = false;
        for _ in 0..600 {
            let _ = engine.tick(DT, &mut root);
            let centered = *engine.centered_bounds().unwrap();
            let expected = pick_atom(
                &Ray::from_ndc(engine.camera(), ndc),
                &root.world_matrix(),
                &centered,
                &atoms,
                engine.options().picking.atom_radius,
            );
            assert_eq!(
                engine.hover().picked.map(|p| p.index),
                expected.map(|p| p.index),
                "at angle {}",
                root.rotation_y()
            );
            lost_sight |= expected.is_none();
        }
        assert!(lost_sight, "the spin should carry atom 2 away");
    }

    #[test]
    fn bounds_only_load_picks_nothing() {
        let mut options = Options::default();
        options.picking.pick_atoms = true;
        let mut engine = FramingEngine::new(options, 1.0);
        let mut root = StructureRoot::new();
        let _ = root.add_child("atoms", NodeKind::Instanced { count: 3 });
        let coords = line();
        let bounds = AtomPositions::from_flat(&coords).unwrap().bounds();

        let ticket = engine.begin_load();
        assert!(engine
            .complete_load_with_bounds(ticket, &bounds, &mut root)
            .is_some());
        assert!(engine.pointer_move(Vec2::ZERO, &root));
        assert_eq!(engine.hover().picked, None);
    }

    #[test]
    fn reset_view_restores_the_fit() {
        let (mut engine, _) = loaded(Options::default());
        let fitted = engine.camera().eye;
        engine.zoom(2.0);
        engine.pan(Vec2::new(30.0, -12.0));
        assert_ne!(engine.camera().eye, fitted);

        assert!(engine.reset_view());
        assert!((engine.camera().eye - fitted).length() < 1e-3);
        assert_eq!(engine.camera().target, Vec3::ZERO);
    }

    #[test]
    fn pause_toggle_round_trips() {
        let (mut engine, _) = loaded(Options::default());
        assert!(engine.toggle_paused());
        assert!(engine.options().rotation.paused);
        assert!(!engine.toggle_paused());
    }
}
