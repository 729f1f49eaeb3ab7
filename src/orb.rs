use gpui::{
    App, Bounds, Corners, ElementId, GlobalElementId, LayoutId, PaintQuad, Pixels, Point, Style,
    Window, fill, point, prelude::*, px, size,
};

use crate::{
    gradient::RadialProfile,
    theme::{ORB_DIAMETER, with_alpha},
};

pub const ORB_RING_COUNT: usize = 32;

// A fixed-size circle whose fill fades from the given color at the center
// to transparent at the rim. Purely decorative: same color in, same ring
// stack out.
pub struct GradientOrb {
    color: u32,
    diameter: f32,
    profile: RadialProfile,
}

impl GradientOrb {
    pub fn new(color: u32) -> Self {
        Self {
            color,
            diameter: ORB_DIAMETER,
            profile: RadialProfile::orb(),
        }
    }
}

// Circle quads for one radial profile: concentric rings, largest first,
// each a square quad rounded fully into a circle. Shared with the card's
// frosted backdrop.
pub fn ring_quads(
    center: Point<Pixels>,
    radius: f32,
    color: u32,
    profile: &RadialProfile,
    rings: usize,
) -> Vec<PaintQuad> {
    profile
        .ring_alphas(rings)
        .into_iter()
        .filter(|ring| ring.alpha > 0.0)
        .map(|ring| {
            let ring_radius = radius * ring.radius;
            let bounds = Bounds::new(
                point(center.x - px(ring_radius), center.y - px(ring_radius)),
                size(px(ring_radius * 2.0), px(ring_radius * 2.0)),
            );
            PaintQuad {
                corner_radii: Corners::all(px(ring_radius)),
                ..fill(bounds, with_alpha(color, ring.alpha))
            }
        })
        .collect()
}

impl IntoElement for GradientOrb {
    type Element = Self;
    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for GradientOrb {
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
        style.size.width = px(self.diameter).into();
        style.size.height = px(self.diameter).into();
        (window.request_layout(style, [], context), ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        _window: &mut Window,
        _context: &mut App,
    ) -> Self::PrepaintState {
        ring_quads(
            bounds.center(),
            self.diameter / 2.0,
            self.color,
            &self.profile,
            ORB_RING_COUNT,
        )
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
