//! The framing engine: one structure's bounds, camera, spin, and hover
//! state behind a single owner.
//!
//! All four pieces are replaced together when a new structure commits, so
//! no frame ever mixes the camera of one structure with the bounds or
//! rotation of another. Until the newest load commits, [`FramingEngine::tick`]
//! reports that nothing should be drawn.

mod accessors;
mod input;
mod load;

use glam::Vec2;
pub use load::LoadTicket;

use self::load::LoadSequencer;
use crate::animation::RotationAnimator;
use crate::bounds::{AtomPositions, Bounds, CenteredBounds};
use crate::camera::{fit_camera_to_bounds, Camera, CameraUniform, OrbitControls};
use crate::options::Options;
use crate::picking::HoverPicker;
use crate::scene::SceneRoot;
use crate::util::frame_timing::FrameClock;

/// Owns the framing state of the currently displayed structure.
///
/// Drive it from the host's event loop:
///
/// ```ignore
/// let ticket = engine.begin_load();
/// // ... parse and build the scene graph, possibly off-thread ...
/// engine.complete_load(ticket, &atoms, &mut root);
///
/// // every frame
/// if engine.frame(&mut root) {
///     upload(engine.camera_uniform());
///     draw();
/// }
/// ```
pub struct FramingEngine {
    options: Options,
    controls: OrbitControls,
    animator: RotationAnimator,
    hover: HoverPicker,
    clock: FrameClock,
    loads: LoadSequencer,
    centered: Option<CenteredBounds>,
    /// Atoms of the committed structure, kept for atom picking.
    atoms: Option<CommittedAtoms>,
    /// Last pointer position in NDC, re-tested as the structure spins.
    pointer: Option<Vec2>,
    uniform: CameraUniform,
}

impl FramingEngine {
    /// Create an engine with nothing loaded, for a viewport of the given
    /// aspect ratio (width / height).
    #[must_use]
    pub fn new(options: Options, aspect: f32) -> Self {
        let camera = Camera::new(aspect, options.camera.fovy);
        let controls = OrbitControls::new(camera, &options.camera);
        let animator = RotationAnimator::new(&options.rotation);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&controls.camera);
        Self {
            options,
            controls,
            animator,
            hover: HoverPicker::new(),
            clock: FrameClock::new(),
            loads: LoadSequencer::default(),
            centered: None,
            atoms: None,
            pointer: None,
            uniform,
        }
    }

    /// Start loading a new structure. Supersedes any load still in flight
    /// and suppresses rendering until the returned ticket commits.
    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.loads.begin();
        self.hover.clear();
        log::debug!("structure load {} started", ticket.sequence());
        ticket
    }

    /// Commit a load: compute bounds from `atoms`, recenter `root`'s
    /// children, and frame the camera. The engine keeps its own copy of the
    /// atoms so picking can follow the spin without the caller re-supplying
    /// them.
    ///
    /// Returns `None` without touching any state if a newer load has begun
    /// since `ticket` was issued.
    pub fn complete_load<R: SceneRoot + ?Sized>(
        &mut self,
        ticket: LoadTicket,
        atoms: &AtomPositions<'_>,
        root: &mut R,
    ) -> Option<CenteredBounds> {
        if !self.loads.is_current(ticket) {
            log::debug!(
                "discarding stale structure load {} ({} atoms)",
                ticket.sequence(),
                atoms.len()
            );
            return None;
        }
        let bounds = atoms.bounds();
        log::info!(
            "structure load {}: {} atoms, bounding radius {:.2}",
            ticket.sequence(),
            atoms.len(),
            bounds.radius
        );
        let atoms = CommittedAtoms::copy_of(atoms);
        Some(self.commit(ticket, &bounds, Some(atoms), root))
    }

    /// [`Self::complete_load`] for callers that already computed the
    /// bounds (for example on a worker thread). No atoms are kept, so atom
    /// picking reports nothing for this structure.
    pub fn complete_load_with_bounds<R: SceneRoot + ?Sized>(
        &mut self,
        ticket: LoadTicket,
        bounds: &Bounds,
        root: &mut R,
    ) -> Option<CenteredBounds> {
        if !self.loads.is_current(ticket) {
            log::debug!("discarding stale structure load {}", ticket.sequence());
            return None;
        }
        Some(self.commit(ticket, bounds, None, root))
    }

    fn commit<R: SceneRoot + ?Sized>(
        &mut self,
        ticket: LoadTicket,
        bounds: &Bounds,
        atoms: Option<CommittedAtoms>,
        root: &mut R,
    ) -> CenteredBounds {
        let centered = fit_camera_to_bounds(
            bounds,
            &mut self.controls,
            root,
            &mut self.animator,
            &self.options.camera,
        );
        self.hover.clear();
        self.pointer = None;
        self.centered = Some(centered);
        self.atoms = atoms;
        self.loads.commit(ticket);
        self.clock.restart();
        self.uniform.update_view_proj(&self.controls.camera);
        self.uniform.update_hover(self.hover.state());

        log::info!(
            "framed structure at distance {:.2} (near {:.3}, far {:.1})",
            self.controls.distance(),
            self.controls.camera.znear,
            self.controls.camera.zfar
        );
        centered
    }

    /// Begin and immediately complete a load.
    pub fn load<R: SceneRoot + ?Sized>(
        &mut self,
        atoms: &AtomPositions<'_>,
        root: &mut R,
    ) -> Option<CenteredBounds> {
        let ticket = self.begin_load();
        self.complete_load(ticket, atoms, root)
    }

    /// Whether the newest load has been framed and frames may be drawn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.centered.is_some() && self.loads.is_settled()
    }
}

/// Owned copy of a committed structure's coordinates and padding.
#[derive(Debug, Clone)]
struct CommittedAtoms {
    coords: Vec<f32>,
    padding: Option<Vec<f32>>,
}

impl CommittedAtoms {
    fn copy_of(atoms: &AtomPositions<'_>) -> Self {
        Self {
            coords: atoms.coords().to_vec(),
            padding: atoms.padding_radii().map(<[f32]>::to_vec),
        }
    }

    /// Borrowed view; the copy was validated when it was taken.
    fn view(&self) -> Option<AtomPositions<'_>> {
        let atoms = AtomPositions::from_flat(&self.coords).ok()?;
        match &self.padding {
            Some(padding) => atoms.with_padding(padding).ok(),
            None => Some(atoms),
        }
    }
}
