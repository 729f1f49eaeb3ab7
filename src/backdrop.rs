use gpui::{
    App, Bounds, ElementId, GlobalElementId, LayoutId, PaintQuad, Pixels, Point, Size, Style,
    Window, point, prelude::*, px, relative,
};

use crate::{
    gradient::RadialProfile,
    orb::{ORB_RING_COUNT, ring_quads},
    theme::{BLUR_SIGMA, ORB_CYAN, ORB_DIAMETER, ORB_OFFSET_X, ORB_OFFSET_Y, ORB_VIOLET},
};

// The card's backdrop blur. GPUI has no per-element backdrop blur pass,
// but everything behind the card is static: a flat surface color and the
// two corner orbs. The card therefore re-renders those orbs through a
// Gaussian-softened profile at their true window-anchored positions,
// clipped by the card's bounds.
pub struct FrostedBackdrop {
    profile: RadialProfile,
}

impl FrostedBackdrop {
    pub fn new() -> Self {
        Self {
            profile: RadialProfile::orb().blurred(BLUR_SIGMA, ORB_DIAMETER / 2.0),
        }
    }

    // Orb centers in window coordinates, mirroring the screen's absolute
    // placement: violet inset from the top-left corner, cyan from the
    // bottom-right.
    fn orb_centers(viewport: Size<Pixels>) -> [(u32, Point<Pixels>); 2] {
        let radius = px(ORB_DIAMETER / 2.0);
        [
            (
                ORB_VIOLET,
                point(px(ORB_OFFSET_X) + radius, px(ORB_OFFSET_Y) + radius),
            ),
            (
                ORB_CYAN,
                point(
                    viewport.width - px(ORB_OFFSET_X) - radius,
                    viewport.height - px(ORB_OFFSET_Y) - radius,
                ),
            ),
        ]
    }
}

impl IntoElement for FrostedBackdrop {
    type Element = Self;
    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for FrostedBackdrop {
    type RequestLayoutState = ();
    type PrepaintState = Vec<PaintQuad>;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        context: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = relative(1.).into();
        style.size.height = relative(1.).into();
        (window.request_layout(style, [], context), ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        _context: &mut App,
    ) -> Self::PrepaintState {
        let radius = ORB_DIAMETER / 2.0;
        Self::orb_centers(window.viewport_size())
            .into_iter()
            .flat_map(|(color, center)| {
                ring_quads(center, radius, color, &self.profile, ORB_RING_COUNT)
            })
            .collect()
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        _context: &mut App,
    ) {
        for quad in prepaint.drain(..) {
            window.paint_quad(quad);
        }
    }
}
